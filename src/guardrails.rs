//! Validações e helpers numéricos seguros.
//! Objetivo: nenhuma divisão por zero e nenhum estouro silencioso.

use crate::error::{MathError, Result};
use crate::error_catalog::MathErrorCode;
use crate::math_err;
use crate::types::{narrow, U256, U512};

#[inline]
pub fn ensure_nonzero_denominator(value: U256, arg: &'static str) -> Result<()> {
    if value.is_zero() {
        return Err(math_err!(MathErrorCode::ZeroDenominator, arg => arg));
    }
    Ok(())
}

#[inline]
pub fn checked_add(a: U256, b: U256) -> Result<U256> {
    a.checked_add(b).ok_or_else(|| overflow("add"))
}

#[inline]
pub fn checked_sub(a: U256, b: U256) -> Result<U256> {
    a.checked_sub(b).ok_or_else(|| overflow("sub"))
}

/// Produto em 512 bits; só falha se passar de 512 bits.
#[inline]
pub fn checked_mul_wide(a: U512, b: U512) -> Result<U512> {
    a.checked_mul(b).ok_or_else(|| overflow("mul"))
}

/// Divisão truncada em 512 bits com divisor checado.
#[inline]
pub fn checked_div_wide(n: U512, d: U512, arg: &'static str) -> Result<U512> {
    if d.is_zero() {
        return Err(math_err!(MathErrorCode::ZeroDenominator, arg => arg));
    }
    Ok(n / d)
}

/// Reduz o resultado final para a palavra do ledger.
#[inline]
pub fn u512_to_u256_checked(v: U512) -> Result<U256> {
    narrow(v).ok_or_else(|| overflow("narrow"))
}

fn overflow(op: &'static str) -> MathError {
    math_err!(MathErrorCode::OverflowNumeric, op => op)
}
