use async_trait::async_trait;
use delega_core::{error::Result, traits::DelegateDirectory, types::DelegateRecord, Error};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Endpoint público do diretório de delegados
pub const DELEGATE_DIRECTORY_URL: &str = "https://eek-api.vercel.app/api/delegates";

/// Configuração do cliente de diretório
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// URL que lista os delegados conhecidos
    pub endpoint: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            endpoint: DELEGATE_DIRECTORY_URL.to_string(),
        }
    }
}

/// Implementação padrão usando reqwest
pub struct DelegateDirectoryClient {
    client: Client,
    config: DirectoryConfig,
}

impl DelegateDirectoryClient {
    /// Cria nova instância
    pub fn new(config: Option<DirectoryConfig>) -> Self {
        Self {
            client: Client::new(),
            config: config.unwrap_or_default(),
        }
    }
}

#[async_trait]
impl DelegateDirectory for DelegateDirectoryClient {
    async fn top_delegates(&self) -> Result<Vec<DelegateRecord>> {
        let resp = self
            .client
            .get(&self.config.endpoint)
            .send()
            .await
            .map_err(|e| {
                Error::NetworkError(format!("Erro ao consultar diretório de delegados: {}", e))
            })?;

        if !resp.status().is_success() {
            return Err(Error::NetworkError(format!(
                "Diretório de delegados respondeu HTTP {}",
                resp.status()
            )));
        }

        resp.json().await.map_err(|e| {
            Error::DecodeError(format!("Erro ao decodificar resposta do diretório: {}", e))
        })
    }
}
