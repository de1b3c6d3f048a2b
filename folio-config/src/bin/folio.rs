use anyhow::Result;
use clap::Parser;
use folio_config::cli::{self, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // A missing .env is normal; anything else is worth surfacing.
    if let Err(err) = dotenvy::dotenv()
        && !err.not_found()
    {
        return Err(err.into());
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let output = cli::run(&cli)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
