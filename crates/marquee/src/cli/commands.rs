//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Marquee - screenplay emotional arcs and structured report sectioning
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Screenplay emotional arcs and structured report sectioning", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the layered defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chart the emotional arc of a plain-text screenplay
    Arc {
        /// Path to the script (.txt, .text, .fountain or .md)
        script: PathBuf,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,

        /// Rows in the text chart
        #[arg(long, default_value = "11")]
        height: usize,
    },

    /// Split a generated analysis report into titled sections
    Sections {
        /// Path to the report text
        report: PathBuf,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,

        /// Print only the first section whose title contains one of these keywords
        #[arg(long, short)]
        keyword: Vec<String>,

        /// Print only the production requirements section
        #[arg(long, conflicts_with = "keyword")]
        production: bool,
    },

    /// Score the sentiment of a piece of text
    Score {
        /// Text to score
        #[arg(required = true)]
        text: Vec<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
