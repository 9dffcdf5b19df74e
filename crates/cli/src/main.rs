use anyhow::Result;
use clap::{Parser, Subcommand};
use productivity_coach_core::{AnalysisRequest, DEFAULT_HOST, DEFAULT_PORT};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "productivity-coach")]
#[command(about = "AI productivity coach backend for browser usage data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
        host: String,
    },
    /// Print the prompt that would be sent for a usage file
    Prompt { file: PathBuf },
    /// Ask the completion service to analyze a usage file
    Analyze { file: PathBuf },
    /// Print the local heuristic score for a usage file
    Score { file: PathBuf },
}

/// Reads a `{"usage": [...]}` document from disk.
pub(crate) fn read_request(path: &Path) -> Result<AnalysisRequest> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    Ok(AnalysisRequest::from_json_str(&raw)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("warning: failed to load .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Prompt { file } => commands::analyze::run_prompt(&file)?,
        Commands::Analyze { file } => commands::analyze::run_analyze(&file).await?,
        Commands::Score { file } => commands::analyze::run_score(&file)?,
    }

    Ok(())
}
