use anyhow::{Context, Result};
use doxygen2docfx::{driver, parse_arguments};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = parse_arguments(std::env::args_os())?;
    let files = driver::run(&options).with_context(|| {
        format!(
            "cannot convert {} for {}",
            options.config.input_filename, options.config.library
        )
    })?;
    tracing::info!(count = files.len(), "conversion complete");
    Ok(())
}
