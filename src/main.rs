//! carousel-replay - feed a recorded input trace through the carousel engine
//! and print every host callback as JSON.

use anyhow::{Context, Result};
use carousel_engine::EngineConfig;
use carousel_engine::replay::{self, Script};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "carousel-replay",
    about = "Replay a scripted pointer/navigation trace through the carousel engine"
)]
struct Cli {
    /// JSON replay script
    #[arg(long)]
    script: PathBuf,

    /// JSON engine config, replacing the one embedded in the script
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut script = Script::load(&cli.script)
        .with_context(|| format!("failed to load script {}", cli.script.display()))?;
    if let Some(path) = &cli.config {
        script.config = EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
    }

    let report = replay::run(&script).context("replay failed")?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    info!(
        steps = report.steps.len(),
        current = ?report.current,
        "replay finished"
    );
    Ok(())
}
