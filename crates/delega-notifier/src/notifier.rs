use delega_core::{
    error::Result,
    traits::{AlertNotifier, DelegateDirectory},
    types::*,
    utils,
};
use ethereum_types::Address;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::NotifierConfig;
use crate::log_semantics;

/// Resultado do processamento de uma transação
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NotifierOutcome {
    /// Variação abaixo do limiar de materialidade; nenhum alerta enviado
    BelowThreshold { delta: f64 },
    /// Alerta publicado no canal
    Notified {
        /// Delegado cujo poder de voto mudou
        delegate: Address,
        /// Variação de votos observada
        delta: f64,
        /// Indica se o delegado já constava no diretório
        existing_delegate: bool,
        /// Texto enviado ao webhook
        message: String,
    },
}

/// Orquestra o pipeline de notificação de mudanças de delegação
///
/// O fluxo é linear: decodifica o evento, aplica o limiar de
/// materialidade, consulta o diretório de delegados e publica a
/// mensagem. Não há retentativas nem estado entre invocações.
pub struct DelegationNotifier<D, A> {
    directory: D,
    alerts: A,
    config: NotifierConfig,
}

impl<D, A> DelegationNotifier<D, A> {
    /// Cria nova instância
    pub fn new(directory: D, alerts: A, config: Option<NotifierConfig>) -> Self {
        Self {
            directory,
            alerts,
            config: config.unwrap_or_default(),
        }
    }
}

impl<D: DelegateDirectory, A: AlertNotifier> DelegationNotifier<D, A> {
    /// Processa uma transação entregue pelo runtime
    ///
    /// Qualquer falha é registrada no log antes de ser propagada ao
    /// chamador, que decide a política de reprocessamento.
    pub async fn handle(&self, tx: &TransactionEvent) -> Result<NotifierOutcome> {
        match self.process(tx).await {
            Ok(outcome) => {
                if let NotifierOutcome::Notified { delegate, delta, .. } = &outcome {
                    info!(
                        "Alerta de delegação enviado: delegado 0x{:x}, delta {}",
                        delegate, delta
                    );
                }
                Ok(outcome)
            }
            Err(e) => {
                error!("Falha ao processar transação {:?}: {}", tx.tx_hash, e);
                Err(e)
            }
        }
    }

    async fn process(&self, tx: &TransactionEvent) -> Result<NotifierOutcome> {
        let event = log_semantics::find_delegation_event(tx)?;
        let delta = event.delta();

        if delta.abs() < self.config.materiality_threshold {
            debug!("Variação de {} votos abaixo do limiar; alerta suprimido", delta);
            return Ok(NotifierOutcome::BelowThreshold { delta });
        }

        let delegates = self.directory.top_delegates().await?;
        let known = delegates
            .iter()
            .find(|record| record.matches_address(&event.delegate));

        let message = build_message(&event, known, delta);
        self.alerts.notify(&message).await?;

        Ok(NotifierOutcome::Notified {
            delegate: event.delegate,
            delta,
            existing_delegate: known.is_some(),
            message,
        })
    }
}

/// Monta o texto do alerta
fn build_message(event: &VoteChangeEvent, known: Option<&DelegateRecord>, delta: f64) -> String {
    match known {
        Some(record) => format!(
            "{}'s votes have changed. \n Previous balance: {} \n New balance: {} \n Delta: {}",
            record.name,
            utils::format_token_amount(&event.previous_balance, VOTE_DECIMALS),
            utils::format_token_amount(&event.new_balance, VOTE_DECIMALS),
            delta
        ),
        None => format!(
            "A new delegate has emerged. {} now has {} votes.",
            utils::format_address(&event.delegate),
            utils::format_token_amount(&event.new_balance, VOTE_DECIMALS)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethereum_types::U256;

    fn tokens(value: u64) -> U256 {
        U256::from(value) * U256::exp10(VOTE_DECIMALS as usize)
    }

    fn event(previous: u64, new: u64) -> VoteChangeEvent {
        VoteChangeEvent {
            delegate: utils::hex_to_address("0x5a52e96bacdabb82fd05763e25335261b270efcb")
                .unwrap(),
            previous_balance: tokens(previous),
            new_balance: tokens(new),
        }
    }

    #[test]
    fn mensagem_para_delegado_conhecido() {
        let record = DelegateRecord {
            name: "Alice".to_string(),
            address: "0x5A52E96BACDABB82FD05763E25335261B270EFCB".to_string(),
            votes: 500_000.0,
        };
        let event = event(500_000, 700_000);

        let message = build_message(&event, Some(&record), event.delta());
        assert_eq!(
            message,
            "Alice's votes have changed. \n Previous balance: 500000 \n New balance: 700000 \n Delta: 200000"
        );
    }

    #[test]
    fn mensagem_para_delegado_desconhecido() {
        let event = event(0, 700_000);

        let message = build_message(&event, None, event.delta());
        assert_eq!(
            message,
            "A new delegate has emerged. 0x5a52e96bacdabb82fd05763e25335261b270efcb now has 700000 votes."
        );
    }

    #[test]
    fn mensagem_com_delta_negativo() {
        let record = DelegateRecord {
            name: "Bob".to_string(),
            address: "0x5a52e96bacdabb82fd05763e25335261b270efcb".to_string(),
            votes: 700_000.0,
        };
        let event = event(700_000, 500_000);

        let message = build_message(&event, Some(&record), event.delta());
        assert!(message.ends_with("Delta: -200000"));
    }
}
