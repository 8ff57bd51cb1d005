//! Amostragem da curva para gráficos e velas de eventos de mint/retire.

use std::collections::BTreeMap;

use tracing::debug;

use super::bonding::{get_price, get_supply};
use super::params::CurveParameters;
use crate::error::Result;
use crate::guardrails::{checked_add, checked_sub, ensure_nonzero_denominator, u512_to_u256_checked};
use crate::obs::wrap;
use crate::types::{widen, U256, BPS_SCALE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurvePoint {
    pub supply: U256,
    pub price: U256,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupplyKind {
    Mint,
    Retire,
}

/// Evento on-chain de variação de supply (`amount` sempre positivo).
/// `timestamp` em segundos UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupplyEvent {
    pub kind: SupplyKind,
    pub new_supply: U256,
    pub amount: U256,
    pub timestamp: u64,
}

/// Vela OHLC; `time` é o início do balde em segundos.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candle {
    pub open: U256,
    pub high: U256,
    pub low: U256,
    pub close: U256,
    pub time: u64,
}

/// Largura do balde das velas, em segundos.
pub const CANDLE_SECONDS: u64 = 60;

/// `intervals + 1` pontos igualmente espaçados em `[0, max_supply]`.
/// O passo é truncado, então o último ponto pode ficar abaixo de `max_supply`.
pub fn sample_curve(max_supply: U256, params: &CurveParameters, intervals: u32) -> Result<Vec<CurvePoint>> {
    let steps = U256::from(intervals);
    ensure_nonzero_denominator(steps, "intervals")?;
    let step = max_supply / steps;

    wrap::time("curve.sample", || -> Result<Vec<CurvePoint>> {
        let mut points = Vec::with_capacity(intervals as usize + 1);
        for i in 0..=intervals {
            let supply = step * U256::from(i);
            points.push(CurvePoint { supply, price: get_price(supply, params)? });
        }
        debug!(target: "curve::chart", %max_supply, %step, points = points.len(), "curva amostrada");
        Ok(points)
    })
}

/// Supply máximo do gráfico: o que esgota o cap, ou o supply atual se não há cap.
pub fn max_chart_supply(cap: U256, current_supply: U256, params: &CurveParameters) -> Result<U256> {
    if cap.is_zero() {
        return Ok(current_supply);
    }
    get_supply(cap, params)
}

/// Progresso da arrecadação em basis points (10000 = cap atingido).
pub fn progress_bps(raised: U256, cap: U256) -> Result<U256> {
    ensure_nonzero_denominator(cap, "cap")?;
    let scaled = widen(raised) * widen(U256::from(BPS_SCALE));
    u512_to_u256_checked(scaled / widen(cap))
}

/// Vela de um evento: abre no preço antes do evento e fecha no preço depois.
pub fn event_candle(event: &SupplyEvent, params: &CurveParameters) -> Result<Candle> {
    let previous = match event.kind {
        SupplyKind::Mint => checked_sub(event.new_supply, event.amount)?,
        SupplyKind::Retire => checked_add(event.new_supply, event.amount)?,
    };
    let open = get_price(previous, params)?;
    let close = get_price(event.new_supply, params)?;
    Ok(Candle {
        open,
        high: open.max(close),
        low: open.min(close),
        close,
        time: event.timestamp - event.timestamp % CANDLE_SECONDS,
    })
}

/// Agrupa eventos em velas de um minuto, em ordem crescente de `time`.
///
/// Dentro de um balde vale a ordem de `events`: `open` do primeiro evento,
/// `close` do último, `high`/`low` sobre todos.
pub fn candles(events: &[SupplyEvent], params: &CurveParameters) -> Result<Vec<Candle>> {
    let mut buckets: BTreeMap<u64, Candle> = BTreeMap::new();
    for event in events {
        let candle = event_candle(event, params)?;
        buckets
            .entry(candle.time)
            .and_modify(|acc| {
                acc.high = acc.high.max(candle.high);
                acc.low = acc.low.min(candle.low);
                acc.close = candle.close;
            })
            .or_insert(candle);
    }
    debug!(target: "curve::chart", events = events.len(), candles = buckets.len(), "velas agrupadas");
    Ok(buckets.into_values().collect())
}
