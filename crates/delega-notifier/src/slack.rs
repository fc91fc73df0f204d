use async_trait::async_trait;
use delega_core::{
    error::Result,
    traits::{AlertNotifier, SecretStore},
    Error,
};
use reqwest::Client;
use serde::Serialize;

/// Nome do segredo que guarda a URL do webhook de alertas de governança
pub const WEBHOOK_SECRET_KEY: &str = "governanceAlertsChannelWebhook";

/// Corpo do POST enviado ao webhook
#[derive(Serialize)]
struct SlackMessage<'a> {
    text: &'a str,
}

/// Notificador que publica mensagens em um webhook de canal Slack
pub struct SlackWebhook<S> {
    secrets: S,
    client: Client,
    secret_key: String,
}

impl<S> SlackWebhook<S> {
    /// Cria nova instância usando o nome de segredo padrão
    pub fn new(secrets: S) -> Self {
        Self::with_secret_key(secrets, WEBHOOK_SECRET_KEY)
    }

    /// Cria nova instância com um nome de segredo customizado
    pub fn with_secret_key(secrets: S, secret_key: impl Into<String>) -> Self {
        Self {
            secrets,
            client: Client::new(),
            secret_key: secret_key.into(),
        }
    }
}

impl<S: SecretStore> SlackWebhook<S> {
    // A URL é resolvida a cada envio; o segredo pode mudar entre execuções
    async fn post_message(&self, text: &str) -> Result<()> {
        let url = self.secrets.get(&self.secret_key).await?;
        let payload = SlackMessage { text };

        let resp = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::NetworkError(format!("Erro ao enviar alerta ao webhook: {}", e)))?;

        if !resp.status().is_success() {
            return Err(Error::NetworkError(format!(
                "Webhook respondeu HTTP {}",
                resp.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl<S: SecretStore> AlertNotifier for SlackWebhook<S> {
    async fn notify(&self, message: &str) -> Result<()> {
        self.post_message(message).await
    }
}
