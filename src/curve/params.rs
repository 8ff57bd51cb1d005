//! Parâmetros da curva `price = (factorN/factorD) * supply^(powerN/powerD)`.

use tracing::debug;

use crate::error::Result;
use crate::error_catalog::MathErrorCode;
use crate::guardrails::ensure_nonzero_denominator;
use crate::math_bail;
use crate::rational::find_rational_approximation;
use crate::types::U256;

/// Conjunto de parâmetros gravado no contrato da moeda.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveParameters {
    pub power_n: U256,
    pub power_d: U256,
    pub factor_n: U256,
    pub factor_d: U256,
}

impl Default for CurveParameters {
    /// Curva quadrática `supply^2 / 3000`.
    fn default() -> Self {
        Self::new(2, 1, 1, 3000)
    }
}

impl CurveParameters {
    pub fn new(power_n: u64, power_d: u64, factor_n: u64, factor_d: u64) -> Self {
        Self {
            power_n: U256::from(power_n),
            power_d: U256::from(power_d),
            factor_n: U256::from(factor_n),
            factor_d: U256::from(factor_d),
        }
    }

    /// Denominadores > 0 e `factor_n > 0` (senão `get_supply` divide por zero).
    pub fn validate(&self) -> Result<()> {
        ensure_nonzero_denominator(self.power_d, "power_d")?;
        ensure_nonzero_denominator(self.factor_d, "factor_d")?;
        if self.factor_n.is_zero() {
            math_bail!(MathErrorCode::InvalidCurveParameters, factor_n => self.factor_n);
        }
        Ok(())
    }

    /// `powerN + powerD`: numerador do expoente da integral.
    pub(crate) fn power_plus_one_n(&self) -> Result<U256> {
        crate::guardrails::checked_add(self.power_n, self.power_d)
    }

    /// Converte os valores reais do assistente de criação em frações.
    pub fn from_real(power: f64, factor: f64, max_denominator: u64) -> Result<Self> {
        let p = find_rational_approximation(power, max_denominator)?;
        let f = find_rational_approximation(factor, max_denominator)?;
        debug!(
            target: "curve::params",
            power, factor,
            power_n = p.numerator, power_d = p.denominator,
            factor_n = f.numerator, factor_d = f.denominator,
            "parâmetros aproximados"
        );
        let params = Self {
            power_n: U256::from(p.numerator),
            power_d: U256::from(p.denominator),
            factor_n: U256::from(f.numerator),
            factor_d: U256::from(f.denominator),
        };
        params.validate()?;
        Ok(params)
    }
}
