//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the marquee binary.

mod arc;
mod commands;
mod score;
mod sections;

pub use arc::handle_arc;
pub use commands::{Cli, Commands};
pub use score::handle_score;
pub use sections::handle_sections;
