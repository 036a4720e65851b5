//! Display layout for a parsed report.

use crate::ReportConfig;
use marquee_core::{ParsedReport, ReportSection};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One tab of a report display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ReportTab {
    /// Tab label
    title: String,
    /// Section shown in the tab; `None` for the synthetic graph tab
    section: Option<ReportSection>,
    /// Whether the emotional arc chart belongs in this tab
    shows_graph: bool,
}

/// A report arranged for display: snapshot on top, remaining sections as tabs.
///
/// # Examples
///
/// ```
/// use marquee_core::ParsedReport;
/// use marquee_narrative::{ReportConfig, ReportLayout};
///
/// let parsed = ParsedReport::from_entries([
///     ("EXECUTIVE SNAPSHOT", "Logline."),
///     ("CHARACTER OVERVIEW", "Two leads."),
/// ]);
/// let layout = ReportLayout::from_report(parsed, &ReportConfig::default());
///
/// assert_eq!(layout.snapshot().as_ref().unwrap().content(), "Logline.");
/// let titles: Vec<_> = layout.tabs().iter().map(|t| t.title().as_str()).collect();
/// assert_eq!(titles, vec!["CHARACTER OVERVIEW", "Emotional Graph"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ReportLayout {
    /// Section promoted above the tabs
    snapshot: Option<ReportSection>,
    /// Tabs in section order; empty when nothing remains after promotion
    tabs: Vec<ReportTab>,
}

impl ReportLayout {
    /// Arrange a parsed report.
    ///
    /// The first section matching a snapshot keyword is promoted out of the tabs.
    /// The first remaining section matching a graph keyword carries the chart; when
    /// none does, and no section is titled like the graph tab, a graph tab is added.
    #[instrument(skip_all, fields(sections = parsed.len()))]
    pub fn from_report(parsed: ParsedReport, config: &ReportConfig) -> Self {
        let (snapshot, rest) = parsed.promote(config.snapshot_keywords());
        if rest.is_empty() {
            debug!("No sections left after snapshot promotion");
            return Self {
                snapshot,
                tabs: Vec::new(),
            };
        }

        let graph_title = rest
            .find_section_by_keyword(config.graph_keywords())
            .or_else(|| rest.get(config.graph_tab_title()))
            .map(|s| s.title().clone());

        let mut tabs: Vec<ReportTab> = rest
            .iter()
            .map(|section| ReportTab {
                title: section.title().clone(),
                shows_graph: graph_title.as_deref() == Some(section.title().as_str()),
                section: Some(section.clone()),
            })
            .collect();

        if graph_title.is_none() {
            debug!("No graph section in report, adding graph tab");
            tabs.push(ReportTab {
                title: config.graph_tab_title().clone(),
                section: None,
                shows_graph: true,
            });
        }

        Self { snapshot, tabs }
    }

    /// The tab that should display the emotional arc chart, if any.
    pub fn graph_tab(&self) -> Option<&ReportTab> {
        self.tabs.iter().find(|t| t.shows_graph)
    }

    /// Whether nothing is left to show in tabs, in which case the raw report is shown.
    pub fn is_flat(&self) -> bool {
        self.tabs.is_empty()
    }
}
