//! Configuração via variáveis de ambiente, com defaults da interface.
//!
//! | variável                   | default               |
//! |----------------------------|-----------------------|
//! | `CURVE_SERVICE_NAME`       | `bonding-curve-core`  |
//! | `CURVE_CHART_INTERVALS`    | `100`                 |
//! | `SWAP_SLIPPAGE_BPS`        | `100` (1%)            |
//! | `RATIONAL_MAX_DENOMINATOR` | `1000`                |

use std::str::FromStr;

use tracing::warn;

use crate::amm::pricing::DEFAULT_SLIPPAGE_BPS;
use crate::types::BPS_SCALE;

pub const DEFAULT_SERVICE_NAME: &str = "bonding-curve-core";
pub const DEFAULT_CHART_INTERVALS: u32 = 100;
pub const DEFAULT_MAX_DENOMINATOR: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub service_name: String,
    pub chart_intervals: u32,
    pub slippage_bps: u32,
    pub max_denominator: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            chart_intervals: DEFAULT_CHART_INTERVALS,
            slippage_bps: DEFAULT_SLIPPAGE_BPS,
            max_denominator: DEFAULT_MAX_DENOMINATOR,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lê a configuração de uma fonte arbitrária de chave/valor.
    /// Valores malformados ou fora de faixa caem no default com um `warn!`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let service_name = lookup("CURVE_SERVICE_NAME")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.service_name);

        Self {
            service_name,
            chart_intervals: parse_or(&lookup, "CURVE_CHART_INTERVALS", defaults.chart_intervals, |v| *v > 0),
            slippage_bps: parse_or(&lookup, "SWAP_SLIPPAGE_BPS", defaults.slippage_bps, |v| {
                u64::from(*v) <= BPS_SCALE
            }),
            max_denominator: parse_or(&lookup, "RATIONAL_MAX_DENOMINATOR", defaults.max_denominator, |v| *v > 0),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T, valid: impl Fn(&T) -> bool) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(v) if valid(&v) => v,
        _ => {
            warn!(target: "config", key, value = %raw, fallback = %default, "valor inválido, usando default");
            default
        }
    }
}
