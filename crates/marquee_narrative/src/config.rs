//! Configuration structures for Marquee.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from marquee.toml)
//! - User overrides (./marquee.toml or ~/.config/marquee/marquee.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use marquee_error::{ConfigError, MarqueeError, MarqueeResult};
use marquee_sentiment::SentimentAnalyzer;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Keywords used to locate well-known report sections.
///
/// # Example
///
/// ```toml
/// [report]
/// snapshot_keywords = ["EXECUTIVE SNAPSHOT"]
/// graph_keywords = ["EMOTIONAL GRAPH"]
/// production_keywords = ["PRODUCTION REQUIREMENTS", "VFX"]
/// graph_tab_title = "Emotional Graph"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ReportConfig {
    /// Keywords of the section promoted above the tabs
    #[serde(default = "default_snapshot_keywords")]
    snapshot_keywords: Vec<String>,
    /// Keywords of the section that carries the arc chart
    #[serde(default = "default_graph_keywords")]
    graph_keywords: Vec<String>,
    /// Keywords of the production requirements section
    #[serde(default = "default_production_keywords")]
    production_keywords: Vec<String>,
    /// Label of the tab added when no section carries the chart
    #[serde(default = "default_graph_tab_title")]
    graph_tab_title: String,
}

fn default_snapshot_keywords() -> Vec<String> {
    vec!["EXECUTIVE SNAPSHOT".to_string()]
}

fn default_graph_keywords() -> Vec<String> {
    vec!["EMOTIONAL GRAPH".to_string()]
}

fn default_production_keywords() -> Vec<String> {
    vec!["PRODUCTION REQUIREMENTS".to_string(), "VFX".to_string()]
}

fn default_graph_tab_title() -> String {
    "Emotional Graph".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            snapshot_keywords: default_snapshot_keywords(),
            graph_keywords: default_graph_keywords(),
            production_keywords: default_production_keywords(),
            graph_tab_title: default_graph_tab_title(),
        }
    }
}

/// Charting and summary settings for emotional arcs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ArcConfig {
    /// Most tick labels along the segment axis
    #[serde(default = "default_max_ticks")]
    max_ticks: usize,
    /// Largest step between neighbours that still counts as flat
    #[serde(default = "default_flat_tolerance")]
    flat_tolerance: f64,
    /// Fewest segments in a flat stretch
    #[serde(default = "default_min_flat_run")]
    min_flat_run: usize,
}

fn default_max_ticks() -> usize {
    20
}

fn default_flat_tolerance() -> f64 {
    0.05
}

fn default_min_flat_run() -> usize {
    3
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            max_ticks: default_max_ticks(),
            flat_tolerance: default_flat_tolerance(),
            min_flat_run: default_min_flat_run(),
        }
    }
}

/// Sentiment scorer settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SentimentConfig {
    /// Lexicon file replacing the bundled lexicon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lexicon_path: Option<PathBuf>,
}

/// Top-level Marquee configuration.
///
/// Loads from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from marquee.toml)
/// 2. User override (./marquee.toml or ~/.config/marquee/marquee.toml)
///
/// # Example
///
/// ```no_run
/// use marquee_narrative::MarqueeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MarqueeConfig::load()?;
/// println!("Tick labels: {}", config.arc().max_ticks());
/// # Ok(())
/// # }
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct MarqueeConfig {
    /// Report section keywords
    #[serde(default)]
    report: ReportConfig,
    /// Arc charting and summary settings
    #[serde(default)]
    arc: ArcConfig,
    /// Sentiment scorer settings
    #[serde(default)]
    sentiment: SentimentConfig,
}

impl MarqueeConfig {
    /// Load configuration from a specific file path.
    ///
    /// Values missing from the file take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> MarqueeResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                MarqueeError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MarqueeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (marquee.toml shipped with library)
    /// 2. User config in home directory (~/.config/marquee/marquee.toml)
    /// 3. User config in current directory (./marquee.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the result fails validation.
    #[instrument]
    pub fn load() -> MarqueeResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../marquee.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/marquee/marquee.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("marquee").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                MarqueeError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MarqueeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_ticks` is zero or `flat_tolerance` is negative or not finite.
    pub fn validate(&self) -> MarqueeResult<()> {
        if self.arc.max_ticks == 0 {
            return Err(ConfigError::new("arc.max_ticks must be at least 1").into());
        }
        if !self.arc.flat_tolerance.is_finite() || self.arc.flat_tolerance < 0.0 {
            return Err(ConfigError::new(format!(
                "arc.flat_tolerance must be a non-negative number, got {}",
                self.arc.flat_tolerance
            ))
            .into());
        }
        Ok(())
    }

    /// Build the sentiment analyzer this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured lexicon file cannot be loaded.
    pub fn analyzer(&self) -> MarqueeResult<SentimentAnalyzer> {
        match &self.sentiment.lexicon_path {
            Some(path) => {
                debug!(path = %path.display(), "Using configured lexicon");
                Ok(SentimentAnalyzer::from_lexicon_file(path)?)
            }
            None => Ok(SentimentAnalyzer::new()),
        }
    }
}
