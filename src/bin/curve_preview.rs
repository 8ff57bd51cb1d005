//! Pré-visualização da curva: `curve_preview <cap> [powerN powerD factorN factorD]`.
//! Imprime o supply máximo e o gráfico amostrado (supply;preço, em wei).

use anyhow::{bail, Context, Result};
use tracing::{info, span, Level};

use bonding_curve_core::config::EngineConfig;
use bonding_curve_core::curve::chart::{max_chart_supply, sample_curve};
use bonding_curve_core::curve::CurveParameters;
use bonding_curve_core::{obs, U256};

fn parse_u256(raw: &str, name: &str) -> Result<U256> {
    U256::from_dec_str(raw).map_err(|e| anyhow::anyhow!("{name} inválido ({raw}): {e:?}"))
}

fn parse_params(args: &[String]) -> Result<CurveParameters> {
    match args {
        [] => Ok(CurveParameters::default()),
        [pn, pd, fn_, fd] => Ok(CurveParameters {
            power_n: parse_u256(pn, "powerN")?,
            power_d: parse_u256(pd, "powerD")?,
            factor_n: parse_u256(fn_, "factorN")?,
            factor_d: parse_u256(fd, "factorD")?,
        }),
        _ => bail!("uso: curve_preview <cap> [powerN powerD factorN factorD]"),
    }
}

fn main() -> Result<()> {
    let cfg = EngineConfig::from_env();
    obs::init::init(&cfg.service_name)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((cap_raw, rest)) = args.split_first() else {
        bail!("uso: curve_preview <cap> [powerN powerD factorN factorD]");
    };
    let cap = parse_u256(cap_raw, "cap")?;
    let params = parse_params(rest)?;

    let span = span!(Level::INFO, "curve_preview", intervals = cfg.chart_intervals);
    let _e = span.enter();

    let max_supply = max_chart_supply(cap, U256::zero(), &params).context("supply máximo")?;
    info!(%cap, %max_supply, "supply máximo calculado");

    let points = sample_curve(max_supply, &params, cfg.chart_intervals).context("amostragem da curva")?;
    println!("max_supply;{max_supply}");
    for p in &points {
        println!("{};{}", p.supply, p.price);
    }
    Ok(())
}
