use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines via env_logger
    Text,
    /// JSON lines via tracing-subscriber
    Json,
}

/// Parse recipe ingredient lines into structured quantity/unit/category records
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Recipe files: .json (object, array or id map) or plain text, one ingredient per line.
    /// Reads ingredient lines from stdin when no files or --ingredient values are given.
    pub paths: Vec<PathBuf>,

    /// Parse a single ingredient string (repeatable)
    #[arg(short, long = "ingredient", value_name = "TEXT")]
    pub ingredients: Vec<String>,

    /// Maximum number of recipes parsed concurrently
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Maximum ingredient name length
    #[arg(long)]
    pub max_name_length: Option<usize>,

    /// Skip alternative unit detection
    #[arg(long)]
    pub no_alternatives: bool,

    /// Skip grocery categorization
    #[arg(long)]
    pub no_categories: bool,

    /// Print a shopping list grouped by category instead of JSON
    #[arg(short, long)]
    pub summary: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
