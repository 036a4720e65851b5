//! Marquee CLI binary.
//!
//! This binary provides command-line access to Marquee's functionality:
//! - Chart the emotional arc of a screenplay
//! - Split a generated analysis report into sections
//! - Score the sentiment of a line of text

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_arc, handle_score, handle_sections};
    use marquee::MarqueeConfig;

    // Parse command-line arguments
    let cli = Cli::parse();

    marquee::init_console_telemetry(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => MarqueeConfig::from_file(path)?,
        None => MarqueeConfig::load()?,
    };

    // Execute the requested command
    match cli.command {
        Commands::Arc {
            script,
            format,
            height,
        } => {
            handle_arc(&script, format, height, &config)?;
        }

        Commands::Sections {
            report,
            format,
            keyword,
            production,
        } => {
            let found = handle_sections(&report, format, &keyword, production, &config)?;
            if !found {
                std::process::exit(1);
            }
        }

        Commands::Score { text, format } => {
            handle_score(&text.join(" "), format, &config)?;
        }
    }

    Ok(())
}
