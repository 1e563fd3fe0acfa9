use std::io::Write;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecommerce_contracts::{config::ExportConfig, doc};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ecommerce_contracts=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ExportConfig::from_env()?;
    tracing::debug!(?config, "export config loaded");

    if let Some(json) = doc::export(&config)? {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}")?;
    }

    Ok(())
}
