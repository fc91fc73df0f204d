use serde::{Deserialize, Serialize};

/// Limiar de materialidade padrão, em votos inteiros do token
pub const MATERIALITY_THRESHOLD: f64 = 100_000.0;

/// Configuração do notificador de delegação
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Variação absoluta mínima de votos para gerar alerta
    pub materiality_threshold: f64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            materiality_threshold: MATERIALITY_THRESHOLD,
        }
    }
}
