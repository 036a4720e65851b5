//! Core data types for the Marquee screenplay analysis library.
//!
//! This crate provides the value objects shared by every Marquee crate: scripts and
//! their segments, emotional arcs, and parsed analysis reports. All of them are
//! immutable once built and owned by whoever asked for them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod arc;
mod report;
mod scorer;
mod script;
mod segment;

pub use arc::{ArcPoint, ArcSummary, EmotionalArc, FlatStretch, ValenceShift, tick_indices};
pub use report::{FALLBACK_TITLE, ParsedReport, ReportSection};
pub use scorer::ValenceScorer;
pub use script::Script;
pub use segment::{ScoredSegment, Segment, SegmentationStrategy};
