/*!
 * Delega Notifier
 *
 * Detecção de eventos `DelegateVotesChanged` em transações EVM e envio
 * de alertas para um canal via webhook.
 *
 * O fluxo completo vive em [`DelegationNotifier`]: localiza e decodifica
 * o evento de delegação, aplica o limiar de materialidade, consulta o
 * diretório de delegados e publica a mensagem no webhook resolvido a
 * partir do armazém de segredos.
 */

pub mod config;
pub mod directory;
pub mod log_semantics;
pub mod notifier;
pub mod secrets;
pub mod slack;

pub use config::{NotifierConfig, MATERIALITY_THRESHOLD};
pub use directory::{DelegateDirectoryClient, DirectoryConfig};
pub use log_semantics::{
    decode_delegation_log, delegate_votes_changed_topic, find_delegation_event,
};
pub use notifier::{DelegationNotifier, NotifierOutcome};
pub use secrets::EnvSecretStore;
pub use slack::{SlackWebhook, WEBHOOK_SECRET_KEY};
