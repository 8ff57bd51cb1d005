//! Potência em ponto fixo: `(baseN/baseD)^(expN/expD)` via ln/exp inteiros.
//!
//! Mesmo algoritmo `Power` do contrato da curva. Toda divisão e todo
//! shift truncam; o resultado precisa bater bit a bit com o ledger, então a
//! ordem das operações abaixo é parte do contrato.
//!
//! Intermediários em U512: os produtos cabem em 256 bits no domínio do ledger,
//! mas a largura extra elimina qualquer pânico de estouro no resto do domínio.

use tracing::error;

use super::constants::{
    max_exp, FIXED_1, FIXED_2, GENERAL_EXP_DIVISOR, GENERAL_EXP_SERIES, LN2_DENOMINATOR,
    LN2_NUMERATOR, LOG_SERIES, LOG_THRESHOLDS, MAX_NUM, MAX_PRECISION, MIN_PRECISION,
    OPT_EXP_CORRECTIONS, OPT_EXP_DIVISOR, OPT_EXP_MAX_VAL, OPT_EXP_RESIDUE, OPT_EXP_SERIES,
    OPT_LOG_MAX_VAL,
};
use crate::error::Result;
use crate::error_catalog::MathErrorCode;
use crate::guardrails::{ensure_nonzero_denominator, u512_to_u256_checked};
use crate::types::{widen, U256, U512};
use crate::{math_bail, math_err};

/// Mantissa em ponto fixo com `precision` bits fracionários.
/// `result >> precision` é o valor real truncado.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerResult {
    pub result: U256,
    pub precision: u32,
}

impl PowerResult {
    /// Parte inteira do valor representado.
    #[inline]
    pub fn integer_part(&self) -> U256 {
        self.result >> self.precision
    }
}

/// Calcula `(base_n / base_d) ^ (exp_n / exp_d)`.
///
/// Falha com `InvalidBase` se `base_n >= MAX_NUM`, com `ZeroDenominator` para
/// `base_d` ou `exp_d` zero, e com `NoPrecisionFound` se o expoente em
/// domínio logarítmico passa de todas as precisões calibradas. Bases abaixo
/// de um nunca estouram: o valor só encolhe até zero.
pub fn power(base_n: U256, base_d: U256, exp_n: U256, exp_d: U256) -> Result<PowerResult> {
    let base_n_wide = widen(base_n);
    if base_n_wide >= MAX_NUM {
        math_bail!(MathErrorCode::InvalidBase, base_n => base_n);
    }
    ensure_nonzero_denominator(base_d, "base_d")?;
    ensure_nonzero_denominator(exp_d, "exp_d")?;

    let (exp_n, exp_d) = (widen(exp_n), widen(exp_d));
    let base = base_n_wide * FIXED_1 / widen(base_d);

    if base.is_zero() {
        // 0^0 = 1 por convenção; 0^e = 0 para e > 0
        let result = if exp_n.is_zero() { FIXED_1 } else { U512::zero() };
        return finish(result, MAX_PRECISION);
    }

    if base < FIXED_1 {
        // base real < 1: ln sem sinal não existe; usa 1/exp(ln(1/base) * e)
        let inverse = FIXED_1 * FIXED_1 / base;
        let y = ln(inverse) * exp_n / exp_d;
        return finish(reciprocal_exp(y)?, MAX_PRECISION);
    }

    let y = ln(base) * exp_n / exp_d;
    let (result, precision) = exp(y)?;
    finish(result, precision)
}

fn finish(result: U512, precision: u32) -> Result<PowerResult> {
    Ok(PowerResult { result: u512_to_u256_checked(result)?, precision })
}

/// `e^(-y)` com `MAX_PRECISION` bits fracionários, total em `y`.
///
/// Reduz `y` à metade até caber em `optimal_exp` e eleva o recíproco ao
/// quadrado o mesmo número de vezes; zera quando o valor some em 127 bits.
fn reciprocal_exp(mut y: U512) -> Result<U512> {
    let mut halvings = 0u32;
    while y >= OPT_EXP_MAX_VAL {
        y >>= 1u32;
        halvings += 1;
    }

    let (denominator, precision) = exp(y)?;
    let mut result = (U512::one() << (MAX_PRECISION + precision)) / denominator;
    for _ in 0..halvings {
        if result.is_zero() {
            break;
        }
        result = (result * result) >> MAX_PRECISION;
    }
    Ok(result)
}

/// `ln(x)` em ponto fixo, `x >= FIXED_1`.
fn ln(x: U512) -> U512 {
    if x < OPT_LOG_MAX_VAL {
        optimal_log(x)
    } else {
        general_log(x)
    }
}

/// `e^y` em ponto fixo; devolve mantissa e precisão.
fn exp(y: U512) -> Result<(U512, u32)> {
    if y < OPT_EXP_MAX_VAL {
        return Ok((optimal_exp(y), MAX_PRECISION));
    }
    let precision = find_position_in_max_exp_array(y)?;
    Ok((general_exp(y >> (MAX_PRECISION - precision), precision), precision))
}

/// Log binário bit a bit, convertido para natural via LN2.
pub(crate) fn general_log(mut x: U512) -> U512 {
    let mut res = U512::zero();

    if x >= FIXED_2 {
        let count = floor_log2(x / FIXED_1);
        x >>= count;
        res = U512::from(count) * FIXED_1;
    }

    if x > FIXED_1 {
        for i in (1..=MAX_PRECISION).rev() {
            x = x * x / FIXED_1;
            if x >= FIXED_2 {
                x >>= 1u32;
                res += U512::one() << (i - 1);
            }
        }
    }

    res * LN2_NUMERATOR / LN2_DENOMINATOR
}

/// `floor(log2(n))`; 0 para `n <= 1`.
#[inline]
pub(crate) fn floor_log2(n: U512) -> u32 {
    if n <= U512::one() {
        0
    } else {
        (n.bits() - 1) as u32
    }
}

/// Maior precisão `p` com `max_exp(p) >= x` (busca binária em 32..=127).
pub(crate) fn find_position_in_max_exp_array(x: U512) -> Result<u32> {
    let mut lo = MIN_PRECISION;
    let mut hi = MAX_PRECISION;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if max_exp(mid) >= x {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    if max_exp(hi) >= x {
        return Ok(hi);
    }
    if max_exp(lo) >= x {
        return Ok(lo);
    }

    error!(target: "curve::power", x = %x, "nenhuma precisão calibrada comporta o expoente");
    Err(math_err!(MathErrorCode::NoPrecisionFound, x => x))
}

/// Série de Taylor truncada em precisão `precision`.
pub(crate) fn general_exp(x: U512, precision: u32) -> U512 {
    let mut xi = x;
    let mut res = U512::zero();

    for coefficient in GENERAL_EXP_SERIES.iter() {
        xi = (xi * x) >> precision;
        res += xi * *coefficient;
    }

    res / GENERAL_EXP_DIVISOR + x + (U512::one() << precision)
}

/// `ln(x)` para `FIXED_1 <= x < OPT_LOG_MAX_VAL`: limiares + série no resíduo.
pub(crate) fn optimal_log(mut x: U512) -> U512 {
    let mut res = U512::zero();

    for (threshold, increment) in LOG_THRESHOLDS.iter() {
        if x >= *threshold {
            res += *increment;
            x = x * FIXED_1 / *threshold;
        }
    }

    let y = x - FIXED_1;
    let w = y * y / FIXED_1;
    let mut z = y;
    for (i, (coefficient, divisor)) in LOG_SERIES.iter().enumerate() {
        if i > 0 {
            z = z * w / FIXED_1;
        }
        res += z * (*coefficient - y) / *divisor;
    }

    res
}

/// `e^x` para `x < OPT_EXP_MAX_VAL`, precisão fixa 127.
pub(crate) fn optimal_exp(x: U512) -> U512 {
    let y = x % OPT_EXP_RESIDUE;
    let mut z = y;
    let mut res = U512::zero();

    for coefficient in OPT_EXP_SERIES.iter() {
        z = z * y / FIXED_1;
        res += z * *coefficient;
    }
    res = res / OPT_EXP_DIVISOR + y + FIXED_1;

    for (bit, numerator, denominator) in OPT_EXP_CORRECTIONS.iter() {
        if !(x & *bit).is_zero() {
            res = res * *numerator / *denominator;
        }
    }

    res
}

// -------------------------
// TESTES
// -------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::constants::max_exp;
    use crate::types::WAD;

    fn u(s: &str) -> U256 {
        U256::from_dec_str(s).unwrap()
    }

    fn w(s: &str) -> U512 {
        U512::from_dec_str(s).unwrap()
    }

    #[test]
    fn t_sqrt_two() {
        let r = power(U256::from(2u8), U256::one(), U256::one(), U256::from(2u8)).unwrap();
        assert_eq!(r.precision, 127);
        assert_eq!(r.result, u("240615969168004511545033772477625056923"));
    }

    #[test]
    fn t_unit_base_is_exactly_one() {
        let r = power(U256::one(), U256::one(), U256::from(5u8), U256::from(7u8)).unwrap();
        assert_eq!(r.result, U256::one() << 127);
        assert_eq!(r.integer_part(), U256::one());
    }

    #[test]
    fn t_zero_base() {
        let r = power(U256::zero(), U256::one(), U256::from(3u8), U256::one()).unwrap();
        assert_eq!(r, PowerResult { result: U256::zero(), precision: 127 });
        let r = power(U256::zero(), U256::one(), U256::zero(), U256::one()).unwrap();
        assert_eq!(r.result, U256::one() << 127);
    }

    #[test]
    fn t_base_below_one_uses_reciprocal() {
        let r = power(U256::one(), U256::from(2u8), U256::one(), U256::one()).unwrap();
        assert_eq!(r.precision, 127);
        assert_eq!(r.result, u("85070591730234615865843651857942052866"));
        assert_eq!(r.integer_part(), U256::zero());
    }

    #[test]
    fn t_tiny_base_never_runs_out_of_precision() {
        // 1 wei ao quadrado: 1e-36 * 2^127 ~ 170,14
        let r = power(U256::one(), WAD, U256::from(2u8), U256::one()).unwrap();
        assert_eq!(r, PowerResult { result: U256::from(170u8), precision: 127 });
        let r = power(U256::from(1_000_000u32), WAD, U256::from(2u8), U256::one()).unwrap();
        assert_eq!(r.result, u("170141183460469"));
        // 1e-54 some em 127 bits
        let r = power(U256::one(), WAD, U256::from(3u8), U256::one()).unwrap();
        assert_eq!(r, PowerResult { result: U256::zero(), precision: 127 });
        let r = power(U256::one(), WAD, U256::from(1_000_000u32), U256::one()).unwrap();
        assert!(r.result.is_zero());
    }

    #[test]
    fn t_reciprocal_exp_is_non_increasing() {
        let mut previous = U512::MAX;
        for shift in 120..140u32 {
            let r = reciprocal_exp(U512::one() << shift).unwrap();
            assert!(r <= previous, "shift={shift}");
            previous = r;
        }
        assert!(previous.is_zero());
    }

    #[test]
    fn t_invalid_base() {
        let max_num = U256::one() << 129;
        let err = power(max_num, U256::one(), U256::one(), U256::one()).unwrap_err();
        assert_eq!(err.code, MathErrorCode::InvalidBase);
        let err = power(U256::MAX, WAD, U256::one(), U256::one()).unwrap_err();
        assert_eq!(err.code, MathErrorCode::InvalidBase);
    }

    #[test]
    fn t_zero_denominators() {
        let err = power(U256::one(), U256::zero(), U256::one(), U256::one()).unwrap_err();
        assert_eq!(err.code, MathErrorCode::ZeroDenominator);
        let err = power(U256::one(), U256::one(), U256::one(), U256::zero()).unwrap_err();
        assert_eq!(err.code, MathErrorCode::ZeroDenominator);
    }

    #[test]
    fn t_no_precision_found() {
        let err = power(U256::from(10u8), U256::one(), U256::from(1_000_000u32), U256::one()).unwrap_err();
        assert_eq!(err.code, MathErrorCode::NoPrecisionFound);
    }

    #[test]
    fn t_logs() {
        assert_eq!(optimal_log(FIXED_1), U512::zero());
        assert_eq!(optimal_log(FIXED_1 * 3u8), w("186919194958206833467915423222751380821"));
        assert_eq!(
            general_log(FIXED_1 * 1_000_000u32),
            w("2350587316442649200416015448110342109425")
        );
    }

    #[test]
    fn t_exps() {
        assert_eq!(optimal_exp(U512::zero()), FIXED_1);
        assert_eq!(optimal_exp(FIXED_1), w("462491687273110168575455517921668397538"));
        assert_eq!(general_exp(U512::one() << 40, 40), w("2988782477962"));
    }

    #[test]
    fn t_floor_log2() {
        assert_eq!(floor_log2(U512::zero()), 0);
        assert_eq!(floor_log2(U512::one()), 0);
        assert_eq!(floor_log2(U512::from(2u8)), 1);
        assert_eq!(floor_log2(U512::from(255u8)), 7);
        assert_eq!(floor_log2(U512::from(256u16)), 8);
        assert_eq!(floor_log2(U512::one() << 200), 200);
    }

    #[test]
    fn t_find_position() {
        assert_eq!(find_position_in_max_exp_array(OPT_EXP_MAX_VAL).unwrap(), 61);
        assert_eq!(find_position_in_max_exp_array(max_exp(32)).unwrap(), 32);
        assert_eq!(find_position_in_max_exp_array(max_exp(127)).unwrap(), 127);
        let err = find_position_in_max_exp_array(max_exp(32) + U512::one()).unwrap_err();
        assert_eq!(err.code, MathErrorCode::NoPrecisionFound);
    }
}
