/*!
 * Delega Traits
 *
 * Traits para os colaboradores externos do pipeline de notificação
 */

use async_trait::async_trait;

use crate::error::Result;
use crate::types::DelegateRecord;

/// Trait para consulta ao diretório de delegados conhecidos
#[async_trait]
pub trait DelegateDirectory: Send + Sync {
    /// Lista os delegados conhecidos pelo diretório
    async fn top_delegates(&self) -> Result<Vec<DelegateRecord>>;
}

/// Trait para notificadores de alertas
#[async_trait]
pub trait AlertNotifier: Send + Sync {
    /// Envia uma mensagem de alerta
    async fn notify(&self, message: &str) -> Result<()>;
}

/// Trait para acesso aos segredos do ambiente de execução
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Obtém o valor de um segredo pelo nome
    async fn get(&self, key: &str) -> Result<String>;
}
