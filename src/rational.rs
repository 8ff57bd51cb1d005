//! Aproximação de um real positivo por fração `n/d` com `d <= N`.
//!
//! Busca de Farey (Stern–Brocot) na parte fracionária. Para `x >= 1e4` ou
//! `N >= 1e4` cai no atalho com perda: `round(x*N*100) / (N*100)` reduzido.
//!
//! Garantia efetiva: `d <= N` e nenhuma fração com denominador `<= N` fica
//! estritamente entre `x` e o resultado. Não é a melhor aproximação em geral.

use num_integer::Integer;
use tracing::debug;

use crate::error::Result;
use crate::error_catalog::MathErrorCode;
use crate::math_bail;

/// Limite a partir do qual o atalho de escala fixa é usado.
const FALLBACK_LIMIT: f64 = 1e4;
/// Casas extras do atalho (x100).
const FALLBACK_MULTIPLIER: u128 = 100;
/// Máximo de casas decimais no arredondamento da parte inteira.
const MAX_DECIMALS: i32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    pub numerator: u128,
    pub denominator: u128,
}

impl Rational {
    pub const fn new(numerator: u128, denominator: u128) -> Self {
        Self { numerator, denominator }
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// Aproxima `x` por `n/d` com `d <= max_denominator`.
///
/// Falha com `InvalidApproximationInput` se `x` não for finito e positivo,
/// se `max_denominator == 0`, ou se o arredondamento pedir mais de
/// `MAX_DECIMALS` casas (`x < 1e-100` fora do atalho).
pub fn find_rational_approximation(x: f64, max_denominator: u64) -> Result<Rational> {
    if !x.is_finite() || x <= 0.0 || max_denominator == 0 {
        math_bail!(MathErrorCode::InvalidApproximationInput, x => x, max_denominator => max_denominator);
    }

    let n = max_denominator as f64;
    if x >= FALLBACK_LIMIT || n >= FALLBACK_LIMIT {
        return scaled_fallback(x, max_denominator);
    }

    let integer_part = rounded_integer_part(x, n)?;
    let (numerator, denominator) = farey(x - integer_part as f64, max_denominator as u128);
    Ok(Rational::new(numerator + integer_part * denominator, denominator))
}

/// Parte inteira de `x` depois de arredondar para
/// `max(ceil(|log10 x|), ceil(log10 N))` casas decimais.
fn rounded_integer_part(x: f64, n: f64) -> Result<u128> {
    let exp_x = x.log10().abs().ceil() as i32;
    let exp_n = n.log10().ceil() as i32;
    let decimals = exp_x.max(exp_n);
    if decimals > MAX_DECIMALS {
        math_bail!(MathErrorCode::InvalidApproximationInput, x => x, decimals => decimals);
    }
    let scale = 10f64.powi(decimals);
    Ok(((x * scale).round() / scale).trunc() as u128)
}

fn farey(x: f64, n: u128) -> (u128, u128) {
    let (mut a, mut b, mut c, mut d) = (0u128, 1u128, 1u128, 1u128);

    while b <= n && d <= n {
        let mediant = (a + c) as f64 / (b + d) as f64;
        if x == mediant {
            if b + d <= n {
                return (a + c, b + d);
            }
            return if d > b { (c, d) } else { (a, b) };
        }
        if x > mediant {
            a += c;
            b += d;
        } else {
            c += a;
            d += b;
        }
    }

    if b > n {
        (c, d)
    } else {
        (a, b)
    }
}

fn scaled_fallback(x: f64, max_denominator: u64) -> Result<Rational> {
    let denominator = u128::from(max_denominator) * FALLBACK_MULTIPLIER;
    let scaled = (x * max_denominator as f64 * FALLBACK_MULTIPLIER as f64).round();
    if !scaled.is_finite() || scaled >= u128::MAX as f64 {
        math_bail!(MathErrorCode::OverflowNumeric, op => "rational_fallback", x => x);
    }
    let numerator = scaled as u128;
    let divider = numerator.gcd(&denominator);
    debug!(target: "rational", x, max_denominator, numerator, denominator, "atalho de escala fixa");
    Ok(Rational::new(numerator / divider, denominator / divider))
}
