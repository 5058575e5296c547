//! threatgraph - command-line front end for threat model analysis
//!
//! Loads an attack tree, attack graph or threat model from a TOML or JSON
//! document and lets an analyst:
//! - Validate its structure
//! - Enumerate attack paths between two identifiers
//! - Find the shortest path and everything reachable from a foothold
//! - Rank the most connected (critical) nodes

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{critical, paths, validate};
use config::ThreatGraphConfig;
use error::CliResult;

/// threatgraph CLI application
#[derive(Parser)]
#[command(name = "threatgraph")]
#[command(about = "Validate threat models and analyse attack paths", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "THREATGRAPH_CONFIG")]
    config: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, value_enum, default_value = "table")]
    output: output::OutputFormat,

    /// Report duplicate definitions as errors
    #[arg(long)]
    strict: bool,

    /// Include node severities in critical node rankings
    #[arg(long)]
    show_severity: bool,

    /// Log level or filter directive
    #[arg(long, env = "THREATGRAPH_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Check a model for structural errors
    Validate {
        /// Model document (.toml or .json)
        file: PathBuf,
    },

    /// Enumerate attack paths between two identifiers
    Paths {
        /// Model document (.toml or .json)
        file: PathBuf,
        /// Starting identifier
        from: String,
        /// Target identifier
        to: String,
        /// Maximum number of paths to return
        #[arg(short, long, allow_negative_numbers = true)]
        max: Option<i64>,
    },

    /// Find the path with the fewest hops
    Shortest {
        /// Model document (.toml or .json)
        file: PathBuf,
        /// Starting identifier
        from: String,
        /// Target identifier
        to: String,
    },

    /// List everything reachable from an identifier
    Reachable {
        /// Model document (.toml or .json)
        file: PathBuf,
        /// Starting identifier
        from: String,
    },

    /// Rank identifiers by total degree
    Critical {
        /// Model document (.toml or .json)
        file: PathBuf,
        /// Number of entries to show
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Show effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config
    let mut config = ThreatGraphConfig::load(cli.config.as_deref())?;

    // Override with CLI args
    if cli.strict {
        config.validation.strict_duplicates = true;
    }
    if cli.show_severity {
        config.analysis.show_severity = true;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    config.logging.json |= cli.json_logs;

    init_tracing(&config);

    run(cli.command, &config, cli.output)?;
    Ok(())
}

fn init_tracing(config: &ThreatGraphConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    // Logs go to stderr so stdout stays machine-readable.
    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn run(command: Commands, config: &ThreatGraphConfig, format: output::OutputFormat) -> CliResult<()> {
    match command {
        Commands::Validate { file } => validate::execute(&file, &config.validation, format),
        Commands::Paths { file, from, to, max } => {
            paths::execute_paths(&file, &from, &to, max, &config.analysis, format)
        }
        Commands::Shortest { file, from, to } => {
            paths::execute_shortest(&file, &from, &to, &config.analysis, format)
        }
        Commands::Reachable { file, from } => {
            paths::execute_reachable(&file, &from, &config.analysis, format)
        }
        Commands::Critical { file, top } => {
            critical::execute(&file, top, &config.analysis, format)
        }
        Commands::Config => output::print_single(config, format),
    }
}
