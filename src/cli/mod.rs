//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific
//! modules.

mod process;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "govdoc")]
#[command(about = "Government document processor: extract text and structured data")]
#[command(version)]
pub struct Cli {
    /// Config file path (default: govdoc.toml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Process text or a document file and print the structured result
    Process {
        /// Text input to process
        text: Option<String>,
        /// Document file to process (PDF, PNG, JPEG)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Extract text from a document file without calling the model
    Extract {
        /// Document file to extract from (PDF, PNG, JPEG)
        file: PathBuf,
    },

    /// List supported document types and their extracted fields
    Types,

    /// Start the web UI
    Serve {
        /// Address to bind to
        #[arg(short, long, default_value = "127.0.0.1:8080")]
        bind: String,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process { text, file } => {
            let settings = Settings::load_from(cli.config.as_deref())?;
            process::cmd_process(&settings, text.as_deref(), file.as_deref()).await
        }
        Commands::Extract { file } => process::cmd_extract(&file),
        Commands::Types => process::cmd_types(),
        Commands::Serve { bind } => {
            let settings = Settings::load_from(cli.config.as_deref())?;
            serve::cmd_serve(&settings, &bind).await
        }
    }
}
