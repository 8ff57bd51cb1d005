use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, Registry};

use super::tracingx::filter_from_env;

/// Instala o subscriber global (EnvFilter + fmt). Chamado uma vez pelo binário;
/// a biblioteca só emite eventos e nunca instala subscriber sozinha.
pub fn init(service_name: &str) -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true).with_ansi(true);
    let subscriber = Registry::default().with(filter_from_env()).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber).context("subscriber global já instalado")?;

    info!(service = service_name, version = env!("CARGO_PKG_VERSION"), "observabilidade pronta");
    Ok(())
}
