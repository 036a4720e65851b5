//! Error types for the Marquee library.
//!
//! This crate provides the foundation error types used throughout the Marquee workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Segmentation, scoring, arc building and report parsing are total functions
//! and never produce these errors. Only the I/O-facing edges do: configuration,
//! lexicon files, script files and JSON output.
//!
//! # Examples
//!
//! ```
//! use marquee_error::{MarqueeResult, ConfigError};
//!
//! fn load_settings() -> MarqueeResult<String> {
//!     Err(ConfigError::new("Missing [arc] table"))?
//! }
//!
//! match load_settings() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod lexicon;
mod load;

pub use config::ConfigError;
pub use error::{MarqueeError, MarqueeErrorKind, MarqueeResult};
pub use json::JsonError;
pub use lexicon::{LexiconError, LexiconErrorKind};
pub use load::{LoadError, LoadErrorKind};
