use delega_core::{types::*, utils};
use delega_notifier::{delegate_votes_changed_topic, find_delegation_event};
use ethereum_types::{Address, H256, U256};
use ethers::abi::{encode, Token};
use ethers::types::Bytes;
use tracing::info;

/// Delegado usado no evento de demonstração
const DELEGATE: &str = "0x5a52e96bacdabb82fd05763e25335261b270efcb";

fn sample_transaction() -> anyhow::Result<TransactionEvent> {
    let delegate: Address = DELEGATE.parse()?;
    let previous = U256::from(500_000u64) * U256::exp10(VOTE_DECIMALS as usize);
    let new = U256::from(700_000u64) * U256::exp10(VOTE_DECIMALS as usize);

    Ok(TransactionEvent {
        tx_hash: Some(H256::repeat_byte(0x42)),
        logs: vec![EventLog {
            address: Some(Address::repeat_byte(0xC0)),
            topics: vec![
                delegate_votes_changed_topic(),
                utils::address_topic(&delegate),
            ],
            data: Bytes::from(encode(&[Token::Uint(previous), Token::Uint(new)])),
        }],
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let tx = sample_transaction()?;
    info!(
        "Procurando logs com topic0 {:?}",
        delegate_votes_changed_topic()
    );

    let event = find_delegation_event(&tx)?;
    info!("Delegado: 0x{:x}", event.delegate);
    info!("Saldo anterior: {} votos", event.previous_votes());
    info!("Novo saldo: {} votos", event.new_votes());
    info!("Delta: {} votos", event.delta());

    Ok(())
}
