//! arealens CLI - serve and query area trend analytics
//!
//! Usage:
//!   arealens serve [--config <path>] [--port <port>]
//!   arealens ask "<query>" [--config <path>]
//!   arealens info [--config <path>]
//!
//! Examples:
//!   arealens ask "Compare Wakad and Akurdi demand trends"
//!   arealens ask "Show price growth for Akurdi over last 3 years"
//!   arealens serve --port 8600

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use arealens::analysis::Analyzer;
use arealens::config::{Settings, SettingsError};
use arealens::dataset;

#[derive(Parser)]
#[command(name = "arealens")]
#[command(about = "Query-driven analytics over real-estate area price and demand trends")]
#[command(version)]
struct Cli {
    /// Path to the configuration file (defaults to the standard search order)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP analysis server
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Answer a single query and print the JSON result
    Ask {
        /// The query text, e.g. "Analyze Wakad"
        query: String,
    },

    /// Print a summary of the loaded dataset
    Info,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Serve { port } => cmd_serve(settings, port),
        Commands::Ask { query } => cmd_ask(&settings, &query),
        Commands::Info => cmd_info(&settings),
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    match path {
        Some(p) => Settings::from_file(p),
        None => Settings::load(),
    }
}

/// Load the configured dataset and wrap it in an analyzer.
///
/// Reports the error itself so each subcommand only has to bail.
fn build_analyzer(settings: &Settings) -> Option<Analyzer> {
    let path = match settings.dataset.resolved_path() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return None;
        }
    };

    let loaded = match dataset::load_file(&path) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("Error loading dataset '{}': {}", path.display(), e);
            return None;
        }
    };

    tracing::info!(
        path = %path.display(),
        rows = loaded.len(),
        columns = loaded.columns().len(),
        "dataset loaded"
    );

    Some(Analyzer::new(
        Arc::new(loaded),
        settings.dataset.columns.clone(),
    ))
}

fn cmd_serve(mut settings: Settings, port: Option<u16>) -> ExitCode {
    if let Some(port) = port {
        settings.server.port = port;
    }

    let Some(analyzer) = build_analyzer(&settings) else {
        return ExitCode::FAILURE;
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(arealens::web::serve(&settings, analyzer)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_ask(settings: &Settings, query: &str) -> ExitCode {
    let Some(analyzer) = build_analyzer(settings) else {
        return ExitCode::FAILURE;
    };

    let analysis = analyzer.answer(query);
    match serde_json::to_string_pretty(&analysis) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize result: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_info(settings: &Settings) -> ExitCode {
    let Some(analyzer) = build_analyzer(settings) else {
        return ExitCode::FAILURE;
    };

    let dataset = analyzer.dataset();
    let columns = analyzer.columns();

    println!("Records: {}", dataset.len());
    println!("Columns: {}", dataset.columns().join(", "));

    let areas = dataset.distinct_text(&columns.area);
    println!("Areas ({}):", areas.len());
    for area in &areas {
        println!("  {}", area);
    }

    match dataset.year_span(&columns.year) {
        Some((min, max)) => println!("Years: {}-{}", min, max),
        None => println!("Years: none"),
    }

    ExitCode::SUCCESS
}
