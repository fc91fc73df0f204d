/*!
 * Delega Utils
 *
 * Utilitários de conversão e formatação usados em toda a workspace
 */

use ethereum_types::{Address, H256, U256};
use std::str::FromStr;

/// Converte uma string hexadecimal para Address, com ou sem prefixo 0x
pub fn hex_to_address(hex: &str) -> Option<Address> {
    // O prefixo pode vir em qualquer caixa ("0x" ou "0X")
    let hex_str = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    Address::from_str(hex_str).ok()
}

/// Formata um Address para exibição
pub fn format_address(address: &Address) -> String {
    format!("0x{:x}", address)
}

/// Converte um endereço em tópico indexado (32 bytes, alinhado à direita)
pub fn address_topic(address: &Address) -> H256 {
    let mut topic = H256::zero();
    topic.0[12..].copy_from_slice(address.as_bytes());
    topic
}

/// Formata um valor com decimais para exibição
pub fn format_token_amount(amount: &U256, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }

    let divisor = U256::from(10).pow(U256::from(decimals));
    let integer_part = amount / divisor;
    let fractional_part = amount % divisor;

    // Parte fracionária com zeros à esquerda até completar as casas
    let fractional_str = fractional_part.to_string();
    let padding = decimals as usize - fractional_str.len();
    let mut padded_fractional = String::with_capacity(decimals as usize);
    for _ in 0..padding {
        padded_fractional.push('0');
    }
    padded_fractional.push_str(&fractional_str);

    // Remove zeros à direita
    while padded_fractional.ends_with('0') && !padded_fractional.is_empty() {
        padded_fractional.pop();
    }

    if padded_fractional.is_empty() {
        integer_part.to_string()
    } else {
        format!("{}.{}", integer_part, padded_fractional)
    }
}

/// Converte um valor com decimais para f64, na escala do token
pub fn token_amount_to_f64(amount: &U256, decimals: u8) -> f64 {
    format_token_amount(amount, decimals).parse().unwrap_or(0.0)
}
