//! Preço, capitalização e supply da bonding curve.
//!
//! - price  = factor * supply^power
//! - cap    = factor * supply^(power+1) / (power+1)
//! - supply = (cap * (power+1) / factor)^(1/(power+1))
//!
//! Com `power = powerN/powerD` e `factor = factorN/factorD`. Supply em WAD
//! (18 casas); preço e cap saem na unidade da moeda nativa, truncados.

use super::params::CurveParameters;
use super::power::power;
use crate::error::Result;
use crate::guardrails::{checked_div_wide, checked_mul_wide, u512_to_u256_checked};
use crate::types::{narrow, widen, U256, WAD};
use crate::{error_catalog::MathErrorCode, math_bail};

/// Preço marginal no supply dado. Zero para supply zero.
pub fn get_price(supply: U256, params: &CurveParameters) -> Result<U256> {
    params.validate()?;
    if supply.is_zero() {
        return Ok(U256::zero());
    }
    let r = power(supply, WAD, params.power_n, params.power_d)?;
    let scaled = checked_mul_wide(widen(r.integer_part()), widen(params.factor_n))?;
    u512_to_u256_checked(checked_div_wide(scaled, widen(params.factor_d), "factor_d")?)
}

/// Área sob a curva de 0 até `supply`.
pub fn get_cap(supply: U256, params: &CurveParameters) -> Result<U256> {
    params.validate()?;
    let exp_n = params.power_plus_one_n()?;
    let r = power(supply, WAD, exp_n, params.power_d)?;

    let numerator = checked_mul_wide(
        checked_mul_wide(widen(r.integer_part()), widen(params.factor_n))?,
        widen(params.power_d),
    )?;
    let denominator = checked_mul_wide(widen(params.factor_d), widen(exp_n))?;
    u512_to_u256_checked(checked_div_wide(numerator, denominator, "factor_d*(power+1)")?)
}

/// Inversa de [`get_cap`]: supply que acumula `cap`, truncado à unidade inteira.
pub fn get_supply(cap: U256, params: &CurveParameters) -> Result<U256> {
    params.validate()?;
    let exp_n = params.power_plus_one_n()?;

    let numerator = checked_mul_wide(checked_mul_wide(widen(cap), widen(exp_n))?, widen(params.factor_d))?;
    let denominator = checked_mul_wide(widen(params.factor_n), widen(params.power_d))?;
    let base = checked_div_wide(numerator, denominator, "factor_n*power_d")?;
    let Some(base) = narrow(base) else {
        math_bail!(MathErrorCode::InvalidBase, base => base);
    };

    let r = power(base, U256::one(), params.power_d, exp_n)?;
    let supply = checked_mul_wide(widen(r.integer_part()), widen(WAD))?;
    u512_to_u256_checked(supply)
}
