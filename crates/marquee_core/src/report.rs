//! Sectioned analysis reports.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Title of the single section returned when a report has no recognizable headers.
pub const FALLBACK_TITLE: &str = "Full Report";

/// One titled section of an analysis report.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct ReportSection {
    /// Title as it appeared in the header block
    title: String,
    /// Trimmed section body
    content: String,
    /// 0-based encounter order
    position: usize,
}

impl ReportSection {
    /// Create a section.
    pub fn new(title: impl Into<String>, content: impl Into<String>, position: usize) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            position,
        }
    }

    /// Whether the title contains `keyword`, ignoring case.
    pub fn title_matches(&self, keyword: &str) -> bool {
        self.title.to_uppercase().contains(&keyword.to_uppercase())
    }
}

/// An ordered, title-keyed collection of report sections.
///
/// Sections keep encounter order and titles are unique. Every transformation
/// returns a new collection; nothing mutates a report in place.
///
/// # Examples
///
/// ```
/// use marquee_core::ParsedReport;
///
/// let report = ParsedReport::from_entries([
///     ("PRODUCTION REQUIREMENTS", "Two crane shots."),
///     ("STRUCTURAL RISKS", "Soft midpoint."),
/// ]);
///
/// assert_eq!(report.titles(), vec!["PRODUCTION REQUIREMENTS", "STRUCTURAL RISKS"]);
/// assert_eq!(report.find_by_keyword(&["vfx", "production"]), Some("Two crane shots."));
/// assert_eq!(report.find_by_keyword(&["budget"]), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReport {
    sections: Vec<ReportSection>,
    fallback: bool,
}

impl ParsedReport {
    /// Build a report from `(title, content)` pairs in encounter order.
    ///
    /// A repeated title replaces the earlier content but keeps the earlier position.
    pub fn from_entries<T, C>(entries: impl IntoIterator<Item = (T, C)>) -> Self
    where
        T: Into<String>,
        C: Into<String>,
    {
        let mut sections: Vec<ReportSection> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for (title, content) in entries {
            let title = title.into();
            let content = content.into();
            match positions.get(&title) {
                Some(&position) => sections[position].content = content,
                None => {
                    let position = sections.len();
                    positions.insert(title.clone(), position);
                    sections.push(ReportSection::new(title, content, position));
                }
            }
        }
        Self {
            sections,
            fallback: false,
        }
    }

    /// The single-section report used when no header blocks were recognized.
    pub fn fallback(content: impl Into<String>) -> Self {
        Self {
            sections: vec![ReportSection::new(FALLBACK_TITLE, content, 0)],
            fallback: true,
        }
    }

    /// Whether this report came from the no-headers fallback.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Sections in encounter order.
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    /// Iterate sections in encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, ReportSection> {
        self.sections.iter()
    }

    /// Section titles in encounter order.
    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether there are no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Look up a section by exact title.
    pub fn get(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Whether a section with exactly this title exists.
    pub fn contains(&self, title: &str) -> bool {
        self.get(title).is_some()
    }

    /// First section, in encounter order, whose title contains any keyword (case-insensitive).
    pub fn find_section_by_keyword<K: AsRef<str>>(&self, keywords: &[K]) -> Option<&ReportSection> {
        self.sections
            .iter()
            .find(|section| keywords.iter().any(|k| section.title_matches(k.as_ref())))
    }

    /// Content of the first section whose title contains any keyword (case-insensitive).
    pub fn find_by_keyword<K: AsRef<str>>(&self, keywords: &[K]) -> Option<&str> {
        self.find_section_by_keyword(keywords)
            .map(|s| s.content.as_str())
    }

    /// A copy of this report without the section titled exactly `title`.
    ///
    /// Remaining sections keep their original positions.
    pub fn without(&self, title: &str) -> ParsedReport {
        Self {
            sections: self
                .sections
                .iter()
                .filter(|s| s.title != title)
                .cloned()
                .collect(),
            fallback: self.fallback,
        }
    }

    /// Split off the first section matching any keyword.
    ///
    /// Returns the promoted section (if any) and the report without it.
    pub fn promote<K: AsRef<str>>(self, keywords: &[K]) -> (Option<ReportSection>, ParsedReport) {
        let Some(index) = self
            .sections
            .iter()
            .position(|section| keywords.iter().any(|k| section.title_matches(k.as_ref())))
        else {
            return (None, self);
        };

        let mut sections = self.sections;
        let promoted = sections.remove(index);
        (
            Some(promoted),
            Self {
                sections,
                fallback: self.fallback,
            },
        )
    }
}

impl<'a> IntoIterator for &'a ParsedReport {
    type Item = &'a ReportSection;
    type IntoIter = std::slice::Iter<'a, ReportSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
