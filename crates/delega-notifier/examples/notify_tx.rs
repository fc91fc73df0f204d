use std::env;
use std::fs;

use anyhow::Context;
use delega_core::types::TransactionEvent;
use delega_notifier::{
    DelegateDirectoryClient, DelegationNotifier, EnvSecretStore, NotifierOutcome, SlackWebhook,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Uso: {} <ARQUIVO_EVENTO_JSON>", args[0]);
        std::process::exit(1);
    }

    // Carrega um evento de transação exportado do runtime de hospedagem
    let payload = fs::read_to_string(&args[1]).context("falha ao ler o arquivo de evento")?;
    let tx: TransactionEvent =
        serde_json::from_str(&payload).context("falha ao interpretar o evento")?;

    // A URL do webhook vem da variável de ambiente governanceAlertsChannelWebhook
    let notifier = DelegationNotifier::new(
        DelegateDirectoryClient::new(None),
        SlackWebhook::new(EnvSecretStore::new()),
        None,
    );

    match notifier.handle(&tx).await? {
        NotifierOutcome::BelowThreshold { delta } => {
            info!("Variação de {} votos abaixo do limiar; nada a enviar", delta);
        }
        NotifierOutcome::Notified {
            delta, message, ..
        } => {
            info!("Alerta enviado (delta {}):\n{}", delta, message);
        }
    }

    Ok(())
}
