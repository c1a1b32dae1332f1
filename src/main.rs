// Charpick - multi-select character search for the Rick and Morty API
// Main entry point

use anyhow::Result;
use clap::Parser;

use charpick::api::CharacterClient;
use charpick::cli;
use charpick::config::{self, load_config};

/// Multi-select character search for the Rick and Morty API.
#[derive(Parser)]
#[command(name = "charpick", version, about)]
struct Cli {
    /// Override the configured API base URL
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // The process owns the terminal, so diagnostics go to a log file
    // instead of stdout.
    init_logging();

    let mut config = load_config()?;
    if let Some(base) = args.api_base {
        config.api_base_url = base;
    }

    let client = CharacterClient::new(&config.api_base_url, config.request_timeout_secs)?;

    cli::run(client).await
}

/// Route tracing output to ~/.charpick/charpick.log. If the file cannot be
/// created, run without logging rather than corrupting the UI.
fn init_logging() {
    let Some(dir) = config::config_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("charpick.log")) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
}
