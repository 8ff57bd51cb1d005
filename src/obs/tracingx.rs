use tracing_subscriber::EnvFilter;

/// Filtro a partir de `RUST_LOG`; `info` quando ausente ou inválido.
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
