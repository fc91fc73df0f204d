use async_trait::async_trait;
use delega_core::{error::Result, traits::SecretStore, Error};

/// Armazém de segredos baseado em variáveis de ambiente
///
/// O nome do segredo é usado verbatim como nome da variável de ambiente.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore;

impl EnvSecretStore {
    /// Cria nova instância
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SecretStore for EnvSecretStore {
    async fn get(&self, key: &str) -> Result<String> {
        std::env::var(key).map_err(|_| {
            Error::SecretNotFound(format!("variável de ambiente '{}' não definida", key))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn le_variavel_definida() {
        std::env::set_var("DELEGA_TEST_WEBHOOK", "https://hooks.example/abc");
        let store = EnvSecretStore::new();
        let value = store.get("DELEGA_TEST_WEBHOOK").await.unwrap();
        assert_eq!(value, "https://hooks.example/abc");
        std::env::remove_var("DELEGA_TEST_WEBHOOK");
    }

    #[tokio::test]
    async fn variavel_ausente_vira_secret_not_found() {
        let store = EnvSecretStore::new();
        let err = store.get("DELEGA_TEST_INEXISTENTE").await.unwrap_err();
        assert!(matches!(err, Error::SecretNotFound(_)));
    }
}
