//! Mapeamento entre entradas do quoter e códigos de erro do motor.
use crate::error::MathError;
use crate::error_catalog::MathErrorCode;
use crate::types::U256;

/// Sentido da cotação.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteKind {
    /// `amount` é o input; calcula a saída.
    ExactInput,
    /// `amount` é a saída desejada; calcula o input.
    ExactOutput,
}

/// Determina o código de erro de uma cotação a partir dos inputs brutos.
/// `None` quando as fórmulas não dividem por zero nem esgotam a reserva.
pub fn from_quote_inputs(
    kind: QuoteKind,
    reserves: (U256, U256),
    amount: U256,
    fee: u32,
) -> Option<MathErrorCode> {
    let (reserve_in, reserve_out) = reserves;
    match kind {
        QuoteKind::ExactInput => {
            // denominador: reserve_in * 10000 + amount_in * fee
            if reserve_in.is_zero() && (amount.is_zero() || fee == 0) {
                return Some(MathErrorCode::ZeroDenominator);
            }
        }
        QuoteKind::ExactOutput => {
            if amount >= reserve_out {
                return Some(MathErrorCode::InsufficientReserve);
            }
            if fee == 0 {
                return Some(MathErrorCode::ZeroDenominator);
            }
        }
    }
    None
}

/// Constrói um [`MathError`] diretamente de um código.
pub fn to_error(code: MathErrorCode) -> MathError {
    code.into()
}
