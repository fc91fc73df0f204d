/*!
 * Delega Types
 *
 * Tipos comuns usados em toda a workspace Delega
 */

use ethereum_types::{Address, H256, U256};
use ethers::types::Bytes;
use serde::{Deserialize, Serialize};

use crate::utils;

/// Alias para hash de transação
pub type TransactionHash = H256;

/// Casas decimais do token de governança (ponto fixo 10^18)
pub const VOTE_DECIMALS: u8 = 18;

/// Evento de transação entregue pelo runtime de hospedagem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionEvent {
    /// Hash da transação, quando informado pelo runtime
    #[serde(default)]
    pub tx_hash: Option<TransactionHash>,
    /// Logs emitidos durante a execução da transação
    #[serde(default)]
    pub logs: Vec<EventLog>,
}

/// Entrada de log emitida por um contrato
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    /// Endereço do contrato emissor, quando informado
    #[serde(default)]
    pub address: Option<Address>,
    /// Tópicos indexados do log
    #[serde(default)]
    pub topics: Vec<H256>,
    /// Dados não indexados, em hexadecimal
    #[serde(default)]
    pub data: Bytes,
}

/// Evento DelegateVotesChanged decodificado
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteChangeEvent {
    /// Delegado cujo poder de voto mudou
    pub delegate: Address,
    /// Saldo de votos anterior, em ponto fixo de 18 casas
    pub previous_balance: U256,
    /// Novo saldo de votos, em ponto fixo de 18 casas
    pub new_balance: U256,
}

impl VoteChangeEvent {
    /// Saldo anterior convertido para a escala decimal do token
    pub fn previous_votes(&self) -> f64 {
        utils::token_amount_to_f64(&self.previous_balance, VOTE_DECIMALS)
    }

    /// Novo saldo convertido para a escala decimal do token
    pub fn new_votes(&self) -> f64 {
        utils::token_amount_to_f64(&self.new_balance, VOTE_DECIMALS)
    }

    /// Variação de votos (novo saldo menos saldo anterior), em tokens
    pub fn delta(&self) -> f64 {
        self.new_votes() - self.previous_votes()
    }
}

/// Registro de um delegado conhecido no diretório externo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegateRecord {
    /// Nome público do delegado
    pub name: String,
    /// Endereço do delegado, como string hexadecimal
    pub address: String,
    /// Votos atuais segundo o diretório
    pub votes: f64,
}

impl DelegateRecord {
    /// Compara o endereço do registro com um endereço decodificado,
    /// ignorando diferenças de caixa. Endereços mal formados nunca casam.
    pub fn matches_address(&self, address: &Address) -> bool {
        utils::hex_to_address(&self.address)
            .map_or(false, |record_address| record_address == *address)
    }
}
