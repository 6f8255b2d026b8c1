//! vidi-bars viewer
//!
//! Opens a bar chart description (or a built-in demo) in a native window.

mod config;
mod demo;
mod error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidi_bars::dash::BarsBuilder;

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidi_bars=debug,vidi_bars_viewer=debug".into()),
        )
        .init();

    let config = Config::parse();
    let spec = config.load_spec()?;
    info!(
        "Opening chart: {} bars, source {}",
        spec.data.len(),
        config
            .data
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| format!("demo {:?}", config.demo))
    );

    let chart = BarsBuilder::from_spec(spec)
        .on_press(|index, datum| {
            info!(index, label = %datum.label, value = datum.value, "bar pressed");
        })
        .into_chart();

    let exit = vidi_bars::runtime::run_chart(chart, config.run_options());
    info!("Viewer closed: {:?}", exit);
    Ok(())
}
