//! Utilitários para UI/roteadores: limites de slippage e cotações completas.
//! Baseados nas funções puras de `quoter.rs`.

use super::quoter::{get_amount_in, get_amount_out};
use super::types::{PoolState, SwapQuote};
use crate::error::Result;
use crate::guardrails::u512_to_u256_checked;
use crate::types::{widen, U256, U512, BPS_SCALE};

/// Tolerância padrão da interface de swap: 1%.
pub const DEFAULT_SLIPPAGE_BPS: u32 = 100;

#[inline]
fn clamp_bps(bps: u32) -> u64 {
    u64::from(bps).min(BPS_SCALE)
}

// --------- Limites com tolerância de slippage ---------
/// min_out = floor( out * (10000 - bps) / 10000 ); `bps` saturado em 10000.
pub fn min_out_with_slippage(amount_out: U256, slippage_bps: u32) -> U256 {
    let factor = BPS_SCALE - clamp_bps(slippage_bps);
    let n = widen(amount_out) * U512::from(factor);
    // n/10000 <= amount_out, sempre cabe
    u512_to_u256_checked(n / U512::from(BPS_SCALE)).unwrap_or(amount_out)
}

/// max_in = floor( in * (10000 + bps) / 10000 ); `bps` saturado em 10000.
pub fn max_in_with_slippage(amount_in: U256, slippage_bps: u32) -> Result<U256> {
    let factor = BPS_SCALE + clamp_bps(slippage_bps);
    let n = widen(amount_in) * U512::from(factor);
    u512_to_u256_checked(n / U512::from(BPS_SCALE))
}

// --------- Cotas completas ---------
/// Exact input: `amount` = saída esperada, `limit` = saída mínima aceita.
pub fn quote_exact_input<T: PartialEq>(
    pool: &PoolState<T>,
    amount_in: U256,
    token_in: &T,
    slippage_bps: u32,
) -> Result<SwapQuote> {
    let out = get_amount_out(pool, amount_in, token_in)?;
    Ok(SwapQuote { amount: out, limit: min_out_with_slippage(out, slippage_bps) })
}

/// Exact output: `amount` = input necessário, `limit` = input máximo aceito.
pub fn quote_exact_output<T: PartialEq>(
    pool: &PoolState<T>,
    amount_out: U256,
    token_out: &T,
    slippage_bps: u32,
) -> Result<SwapQuote> {
    let amount_in = get_amount_in(pool, amount_out, token_out)?;
    Ok(SwapQuote { amount: amount_in, limit: max_in_with_slippage(amount_in, slippage_bps)? })
}
