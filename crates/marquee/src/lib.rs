//! Marquee - screenplay emotional arcs and structured report sectioning
//!
//! Marquee derives two artifacts from a screenplay workflow:
//!
//! - an **emotional arc**: one valence per scene or beat, ready to chart
//! - a **sectioned report**: a generated analysis split into titled sections
//!   for display, with a graceful single-section fallback
//!
//! # Quick Start
//!
//! ```
//! use marquee::{SentimentAnalyzer, build_arc, parse_report, render_report};
//!
//! let analyzer = SentimentAnalyzer::new();
//! let arc = build_arc("INT. HOUSE\nThey laugh.\nEXT. PARK\nA terrible fight.", &analyzer);
//! assert_eq!(arc.len(), 2);
//!
//! let report = parse_report(&render_report([("RISKS", "Slow start.")]));
//! assert_eq!(report.find_by_keyword(&["risk"]), Some("Slow start."));
//! ```
//!
//! # Architecture
//!
//! Marquee is organized as a workspace with focused crates:
//!
//! - `marquee-error` - Error types
//! - `marquee-core` - Value types (Segment, EmotionalArc, ParsedReport, etc.)
//! - `marquee-sentiment` - Lexicon and rule based valence scoring
//! - `marquee-narrative` - Segmentation, arcs, report parsing, configuration
//!
//! This crate (`marquee`) re-exports everything for convenience and ships the
//! `marquee` command-line tool.

mod chart;
mod telemetry;

pub use marquee_core::*;
pub use marquee_error::*;
pub use marquee_narrative::*;
pub use marquee_sentiment::*;

pub use chart::render_chart;
pub use telemetry::init_console_telemetry;
