mod api;
mod config;
mod logging;
mod markdown;
mod ui;

use clap::Parser;

use crate::config::Config;

/// Terminal client for the patch-note summarization service.
///
/// Point it at a patch notes catalogue URL and it fetches AI-generated
/// summaries of the individual patch notes, rendered as collapsible panels.
#[derive(Debug, Parser)]
#[command(name = "patch-digest", version)]
struct Cli {
    /// Catalogue URL to prefill the form with.
    url: Option<String>,

    /// Path to the config file (default: platform config dir).
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Override the summarization service base URL.
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(endpoint) = cli.endpoint {
        config.service.base_url = endpoint;
        config.validate()?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    ui::run(config, runtime.handle().clone(), cli.url)?;

    // Tear down in-flight tasks only after the terminal is restored.
    drop(runtime);
    Ok(())
}
