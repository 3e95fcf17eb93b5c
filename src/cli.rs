//! CLI argument parsing for Lifeline

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for attendance reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV of the missable series for spreadsheet charts
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "lifeline")]
#[command(version)]
#[command(about = "Calculate the minimum classes needed to meet your attendance goal", long_about = None)]
pub struct Cli {
    /// Classes attended so far
    #[arg(short = 'a', long = "attended", value_name = "N", default_value = "10")]
    pub attended: u64,

    /// Total classes conducted so far
    #[arg(short = 't', long = "total", value_name = "N", default_value = "15")]
    pub total: u64,

    /// Required attendance percentage (default: 75.0, or the config file value)
    #[arg(short = 'r', long = "required", value_name = "PERCENT")]
    pub required: Option<f64>,

    /// Largest planning window tried by the missable search (default: 50)
    #[arg(long = "max-future", value_name = "N")]
    pub max_future: Option<u64>,

    /// Last window of the missable series (default: 30)
    #[arg(long = "series-end", value_name = "N")]
    pub series_end: Option<u64>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Load defaults from a lifeline.toml file
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show the algebra behind the answer (text format only)
    #[arg(long = "explain")]
    pub explain: bool,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
