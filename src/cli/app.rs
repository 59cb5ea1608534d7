use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// degree-audit: see which requirements a minor's courses fulfill
#[derive(Parser)]
#[command(name = "degree-audit")]
#[command(version)]
#[command(about = "Check how a minor's courses fulfill gen-ed, major and liberal-arts requirements")]
#[command(
    long_about = "degree-audit cross-references every course of a minor against the general-education, major, liberal-arts and interdisciplinary catalogs and prints one fulfillment row per course."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing the catalog JSON files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Settings file (defaults to degree-audit.yaml in the data directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Set log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the fulfillment table for a major/minor pair
    Analyze {
        /// Selected major (exact catalog key)
        #[arg(long)]
        major: String,

        /// Selected minor (exact catalog key)
        #[arg(long)]
        minor: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List selectable majors or minors
    List {
        /// Which catalog to list
        #[arg(value_enum)]
        kind: ListKind,
    },

    /// Show the areas each minor course satisfies, without sectioning
    Fulfillment {
        /// Selected major (exact catalog key)
        #[arg(long)]
        major: String,

        /// Selected minor (exact catalog key)
        #[arg(long)]
        minor: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Analyze { .. } => "analyze",
            Commands::List { .. } => "list",
            Commands::Fulfillment { .. } => "fulfillment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Majors,
    Minors,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
