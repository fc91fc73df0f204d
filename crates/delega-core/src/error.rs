use thiserror::Error;

/// Erros comuns da workspace Delega
#[derive(Error, Debug)]
pub enum Error {
    /// Nenhum log da transação corresponde ao evento esperado
    #[error("Evento ausente: {0}")]
    MissingEvent(String),

    /// Erro de decodificação de dados
    #[error("Erro de decodificação: {0}")]
    DecodeError(String),

    /// Erro de comunicação com serviços externos
    #[error("Erro de rede: {0}")]
    NetworkError(String),

    /// Segredo não disponível no ambiente de execução
    #[error("Segredo não disponível: {0}")]
    SecretNotFound(String),

    /// Erro genérico
    #[error("{0}")]
    Other(String),
}

/// Tipo de resultado usado em toda a workspace
pub type Result<T> = std::result::Result<T, Error>;
