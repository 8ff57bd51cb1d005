use once_cell::sync::OnceCell;
use opentelemetry::metrics::Histogram;
use opentelemetry::{global, KeyValue};
use std::time::Instant;

static HIST: OnceCell<Histogram<f64>> = OnceCell::new();

fn histogram() -> &'static Histogram<f64> {
    HIST.get_or_init(|| {
        let meter = global::meter("bonding_curve_core");
        meter
            .f64_histogram("op_duration_seconds")
            .with_description("duração de operações do motor")
            .with_unit("s")
            .build()
    })
}

/// Executa `f` e registra a duração em `op_duration_seconds{op}`.
/// Sem meter provider instalado o registro é no-op.
pub fn time<F, T>(op: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let out = f();
    let sec = start.elapsed().as_secs_f64();
    histogram().record(sec, &[KeyValue::new("op", op)]);
    out
}
