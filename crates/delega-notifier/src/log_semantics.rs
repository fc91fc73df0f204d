use delega_core::{error::Result, types::*, Error};
use ethereum_types::H256;
use ethers::abi::{AbiParser, Event, EventExt, RawLog, Token};
use ethers::utils::keccak256;
use once_cell::sync::Lazy;

// ERC20Votes / Compound-style governança
static DELEGATE_VOTES_CHANGED: Lazy<Event> = Lazy::new(|| {
    AbiParser::default()
        .parse_event("event DelegateVotesChanged(address indexed delegate,uint256 previousBalance,uint256 newBalance)")
        .expect("assinatura DelegateVotesChanged válida")
});

static DELEGATE_VOTES_CHANGED_TOPIC: Lazy<H256> =
    Lazy::new(|| H256::from_slice(keccak256(DELEGATE_VOTES_CHANGED.abi_signature()).as_slice()));

/// Tópico (topic0) que identifica o evento DelegateVotesChanged
pub fn delegate_votes_changed_topic() -> H256 {
    *DELEGATE_VOTES_CHANGED_TOPIC
}

/// Localiza o primeiro log DelegateVotesChanged da transação e o decodifica
pub fn find_delegation_event(tx: &TransactionEvent) -> Result<VoteChangeEvent> {
    let topic = delegate_votes_changed_topic();
    let log = tx
        .logs
        .iter()
        .find(|log| log.topics.first() == Some(&topic))
        .ok_or_else(|| {
            Error::MissingEvent("nenhum log DelegateVotesChanged na transação".to_string())
        })?;
    decode_delegation_log(log)
}

/// Decodifica um log DelegateVotesChanged em um evento tipado
pub fn decode_delegation_log(log: &EventLog) -> Result<VoteChangeEvent> {
    let raw = RawLog {
        topics: log.topics.clone(),
        data: log.data.to_vec(),
    };
    let decoded = DELEGATE_VOTES_CHANGED
        .parse_log(raw)
        .map_err(|e| Error::DecodeError(format!("log DelegateVotesChanged inválido: {}", e)))?;

    let mut delegate = None;
    let mut previous_balance = None;
    let mut new_balance = None;
    for param in decoded.params {
        match (param.name.as_str(), param.value) {
            ("delegate", Token::Address(value)) => delegate = Some(value),
            ("previousBalance", Token::Uint(value)) => previous_balance = Some(value),
            ("newBalance", Token::Uint(value)) => new_balance = Some(value),
            _ => {}
        }
    }

    match (delegate, previous_balance, new_balance) {
        (Some(delegate), Some(previous_balance), Some(new_balance)) => Ok(VoteChangeEvent {
            delegate,
            previous_balance,
            new_balance,
        }),
        _ => Err(Error::DecodeError(
            "parâmetros do evento DelegateVotesChanged incompletos".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delega_core::utils;
    use ethereum_types::{Address, U256};
    use ethers::abi::encode;
    use ethers::types::Bytes;

    fn tokens(value: u64) -> U256 {
        U256::from(value) * U256::exp10(VOTE_DECIMALS as usize)
    }

    fn delegation_log(delegate: Address, previous: U256, new: U256) -> EventLog {
        EventLog {
            address: Some(Address::repeat_byte(0xC0)),
            topics: vec![
                delegate_votes_changed_topic(),
                utils::address_topic(&delegate),
            ],
            data: Bytes::from(encode(&[Token::Uint(previous), Token::Uint(new)])),
        }
    }

    fn unrelated_log() -> EventLog {
        EventLog {
            address: Some(Address::repeat_byte(0xC1)),
            topics: vec![H256::repeat_byte(0xFF)],
            data: Bytes::default(),
        }
    }

    #[test]
    fn topico_do_evento_e_estavel() {
        let expected: H256 = "0xdec2bacdd2f05b59de34da9b523dff8be42e5e38e818c82fdb0bae774387a724"
            .parse()
            .unwrap();
        assert_eq!(delegate_votes_changed_topic(), expected);
    }

    #[test]
    fn decodifica_log_valido() {
        let delegate = Address::repeat_byte(0xAB);
        let log = delegation_log(delegate, tokens(500_000), tokens(700_000));

        let event = decode_delegation_log(&log).unwrap();
        assert_eq!(event.delegate, delegate);
        assert_eq!(event.previous_balance, tokens(500_000));
        assert_eq!(event.new_balance, tokens(700_000));
        assert_eq!(event.delta(), 200_000.0);
    }

    #[test]
    fn dados_truncados_geram_erro_de_decodificacao() {
        let mut log = delegation_log(Address::repeat_byte(0xAB), tokens(1), tokens(2));
        let truncated = log.data.to_vec()[..40].to_vec();
        log.data = Bytes::from(truncated);

        let err = decode_delegation_log(&log).unwrap_err();
        assert!(matches!(err, Error::DecodeError(_)));
    }

    #[test]
    fn transacao_sem_evento_gera_missing_event() {
        let tx = TransactionEvent {
            tx_hash: None,
            logs: vec![unrelated_log()],
        };
        let err = find_delegation_event(&tx).unwrap_err();
        assert!(matches!(err, Error::MissingEvent(_)));

        let empty = TransactionEvent {
            tx_hash: None,
            logs: vec![],
        };
        assert!(matches!(
            find_delegation_event(&empty).unwrap_err(),
            Error::MissingEvent(_)
        ));
    }

    #[test]
    fn encontra_evento_fora_da_primeira_posicao() {
        let delegate = Address::repeat_byte(0x42);
        let tx = TransactionEvent {
            tx_hash: None,
            logs: vec![
                unrelated_log(),
                delegation_log(delegate, tokens(10), tokens(20)),
            ],
        };
        let event = find_delegation_event(&tx).unwrap();
        assert_eq!(event.delegate, delegate);
    }

    #[test]
    fn usa_o_primeiro_evento_quando_ha_varios() {
        let first = Address::repeat_byte(0x01);
        let second = Address::repeat_byte(0x02);
        let tx = TransactionEvent {
            tx_hash: None,
            logs: vec![
                delegation_log(first, tokens(1), tokens(2)),
                delegation_log(second, tokens(3), tokens(4)),
            ],
        };
        let event = find_delegation_event(&tx).unwrap();
        assert_eq!(event.delegate, first);
    }
}
