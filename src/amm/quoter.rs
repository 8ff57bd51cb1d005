//! Quoter de produto constante (x·y=k) com taxa sobre o input.
//! Espelha o roteador do par: mesma ordem de operações, divisões truncadas.
//!
//! - get_amount_out = floor(a·f·R_out / (R_in·10000 + a·f))
//! - get_amount_in  = floor(R_in·o·10000 / ((R_out − o)·f)) + 1

use super::error_map::{from_quote_inputs, to_error, QuoteKind};
use super::types::PoolState;
use crate::error::Result;
use crate::guardrails::{checked_div_wide, checked_mul_wide, u512_to_u256_checked};
use crate::types::{widen, U256, U512, FEE_SCALE};

/// Saída ao enviar `amount_in` de `token_in` para o par.
pub fn get_amount_out<T: PartialEq>(pool: &PoolState<T>, amount_in: U256, token_in: &T) -> Result<U256> {
    let (reserve_in, reserve_out) = pool.reserves_for_input(token_in);
    if let Some(code) = from_quote_inputs(QuoteKind::ExactInput, (reserve_in, reserve_out), amount_in, pool.fee) {
        return Err(to_error(code).with_context("reserve_in", reserve_in).with_context("amount_in", amount_in));
    }

    let amount_in_with_fee = checked_mul_wide(widen(amount_in), U512::from(pool.fee))?;
    let numerator = checked_mul_wide(amount_in_with_fee, widen(reserve_out))?;
    let denominator = checked_mul_wide(widen(reserve_in), U512::from(FEE_SCALE))? + amount_in_with_fee;
    u512_to_u256_checked(checked_div_wide(numerator, denominator, "reserve_in*10000+amount_in*fee")?)
}

/// Input necessário para receber `amount_out` de `token_out`.
/// O `+ 1` final compensa o truncamento; pode sobrar uma unidade.
pub fn get_amount_in<T: PartialEq>(pool: &PoolState<T>, amount_out: U256, token_out: &T) -> Result<U256> {
    let (reserve_in, reserve_out) = pool.reserves_for_output(token_out);
    if let Some(code) = from_quote_inputs(QuoteKind::ExactOutput, (reserve_in, reserve_out), amount_out, pool.fee) {
        return Err(to_error(code).with_context("reserve_out", reserve_out).with_context("amount_out", amount_out));
    }

    let numerator = checked_mul_wide(
        checked_mul_wide(widen(reserve_in), widen(amount_out))?,
        U512::from(FEE_SCALE),
    )?;
    let denominator = checked_mul_wide(widen(reserve_out) - widen(amount_out), U512::from(pool.fee))?;
    let quotient = checked_div_wide(numerator, denominator, "(reserve_out-amount_out)*fee")?;
    u512_to_u256_checked(quotient + U512::one())
}

// -------------------------
// TESTES
// -------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_catalog::MathErrorCode;
    use crate::types::WAD;

    const FEE: u32 = 9970; // 0,30%

    fn w(n: u64) -> U256 {
        U256::from(n) * WAD
    }

    fn u(s: &str) -> U256 {
        U256::from_dec_str(s).unwrap()
    }

    #[test]
    fn t_out_symmetric_golden() {
        let pool = PoolState::new(w(1_000_000), w(1_000_000), 'X', FEE);
        let out = get_amount_out(&pool, w(1000), &'X').unwrap();
        assert_eq!(out, u("996006981039903216493"));
        // ida e volta exata neste ponto
        assert_eq!(get_amount_in(&pool, out, &'Y').unwrap(), w(1000));
    }

    #[test]
    fn t_out_respects_token_orientation() {
        let pool = PoolState::new(w(1000), w(2000), 'A', FEE);
        assert_eq!(get_amount_out(&pool, WAD / 2, &'A').unwrap(), u("996503243133298050"));
        // trocar o lado inverte as reservas
        let flipped = PoolState::new(w(2000), w(1000), 'A', FEE);
        assert_eq!(get_amount_out(&flipped, WAD / 2, &'B').unwrap(), u("996503243133298050"));
    }

    #[test]
    fn t_in_golden() {
        // token_out == token0 → reserve_in = reserve1
        let pool = PoolState::new(w(1000), w(3000), 'A', 9950);
        assert_eq!(get_amount_in(&pool, WAD, &'A').unwrap(), u("3018093470354776888"));
    }

    #[test]
    fn t_out_asymmetric() {
        let pool = PoolState::new(w(1_000_000), w(1_000_000_000), 'A', FEE);
        assert_eq!(get_amount_out(&pool, WAD, &'A').unwrap(), u("996999005991991025984"));
        assert_eq!(get_amount_out(&pool, w(1000), &'B').unwrap(), u("996999005991991025"));
    }

    #[test]
    fn t_zero_input_gives_zero() {
        let pool = PoolState::new(w(10), w(10), 'A', FEE);
        assert_eq!(get_amount_out(&pool, U256::zero(), &'A').unwrap(), U256::zero());
    }

    #[test]
    fn t_out_never_drains_reserve() {
        let pool = PoolState::new(U256::one(), w(1000), 'A', 10_000);
        let out = get_amount_out(&pool, U256::MAX, &'A').unwrap();
        assert!(out < w(1000));
    }

    #[test]
    fn t_in_rejects_draining_output() {
        let pool = PoolState::new(w(100), w(100), 'A', FEE);
        let err = get_amount_in(&pool, w(100), &'A').unwrap_err();
        assert_eq!(err.code, MathErrorCode::InsufficientReserve);
        assert_eq!(err.context.get("amount_out").map(String::as_str), Some("100000000000000000000"));
    }

    #[test]
    fn t_zero_denominators() {
        let pool = PoolState::new(U256::zero(), w(100), 'A', FEE);
        let err = get_amount_out(&pool, U256::zero(), &'A').unwrap_err();
        assert_eq!(err.code, MathErrorCode::ZeroDenominator);

        let no_fee = PoolState::new(w(100), w(100), 'A', 0);
        let err = get_amount_in(&no_fee, WAD, &'A').unwrap_err();
        assert_eq!(err.code, MathErrorCode::ZeroDenominator);
    }

    #[test]
    fn t_full_width_inputs_report_overflow() {
        let pool = PoolState::new(U256::MAX, U256::MAX, 'A', FEE);
        let err = get_amount_out(&pool, U256::MAX, &'A').unwrap_err();
        assert_eq!(err.code, MathErrorCode::OverflowNumeric);
        let err = get_amount_in(&pool, U256::MAX - U256::one(), &'A').unwrap_err();
        assert_eq!(err.code, MathErrorCode::OverflowNumeric);

        // produtos que cabem em 512 bits seguem cotando
        assert_eq!(get_amount_out(&pool, U256::one(), &'A').unwrap(), U256::zero());
        assert_eq!(get_amount_in(&pool, U256::one(), &'A').unwrap(), U256::from(2u8));
    }

    #[test]
    fn t_in_overflow_is_reported() {
        let pool = PoolState::new(U256::from(2u8), U256::MAX, 'A', 1);
        let err = get_amount_in(&pool, U256::one(), &'A').unwrap_err();
        assert_eq!(err.code, MathErrorCode::OverflowNumeric);
    }
}
