//! Section parsing for generated analysis reports.
//!
//! A report section opens with a header block:
//!
//! ```text
//! ========================
//! 3. THREE-ACT STRUCTURE
//! ========================
//! ```
//!
//! The separator lines are exactly 24 `=` characters. The section body runs from
//! the line after the closing separator up to the next header block, so a stray
//! separator line or a run of `=` inside a body stays part of that body. Text
//! before the first header block is not part of any section.

use crate::ReportConfig;
use marquee_core::ParsedReport;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// The exact separator line framing a section title.
pub const SEPARATOR: &str = "========================";

/// `<digits>. <TITLE>`, capturing the title.
static TITLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.[ \t]*(\S.*)$").expect("Valid title line regex"));

struct Line<'a> {
    offset: usize,
    text: &'a str,
}

/// Split a report into titled sections.
///
/// Falls back to a single section titled [`FALLBACK_TITLE`](marquee_core::FALLBACK_TITLE)
/// holding the whole trimmed report when no header block is found.
///
/// # Examples
///
/// ```
/// use marquee_narrative::{parse_report, render_report};
///
/// let report = render_report([("A", "content A"), ("B", "content B")]);
/// let parsed = parse_report(&report);
/// assert_eq!(parsed.titles(), vec!["A", "B"]);
/// assert_eq!(parsed.get("B").unwrap().content(), "content B");
///
/// let plain = parse_report("  just some plain text  ");
/// assert_eq!(plain.get("Full Report").unwrap().content(), "just some plain text");
/// ```
#[instrument(skip(report), fields(report_len = report.len()))]
pub fn parse_report(report: &str) -> ParsedReport {
    let lines = split_lines(report);

    let mut headers: Vec<(usize, &str)> = Vec::new();
    let mut i = 0;
    while i + 2 < lines.len() {
        match header_title(&lines[i..i + 3]) {
            Some(title) => {
                headers.push((i, title));
                i += 3;
            }
            None => i += 1,
        }
    }

    if headers.is_empty() {
        debug!("No section headers found, using fallback section");
        return ParsedReport::fallback(report.trim());
    }

    let entries = headers.iter().enumerate().map(|(k, &(line, title))| {
        let start = lines
            .get(line + 3)
            .map_or(report.len(), |body| body.offset);
        let end = headers
            .get(k + 1)
            .map_or(report.len(), |&(next, _)| lines[next].offset);
        (title, report[start..end.max(start)].trim())
    });
    let parsed = ParsedReport::from_entries(entries);

    debug!(
        headers = headers.len(),
        sections = parsed.len(),
        "Parsed report sections"
    );
    parsed
}

/// Write sections in the header-block grammar understood by [`parse_report`].
///
/// Sections are numbered from 1 in the order given.
pub fn render_report<T, C>(sections: impl IntoIterator<Item = (T, C)>) -> String
where
    T: AsRef<str>,
    C: AsRef<str>,
{
    let mut out = String::new();
    for (i, (title, content)) in sections.into_iter().enumerate() {
        out.push_str(&format!(
            "{SEPARATOR}\n{}. {}\n{SEPARATOR}\n{}\n\n",
            i + 1,
            title.as_ref(),
            content.as_ref()
        ));
    }
    out
}

/// Content of the production requirements section, found by keyword.
pub fn production_requirements<'a>(
    report: &'a ParsedReport,
    config: &ReportConfig,
) -> Option<&'a str> {
    report.find_by_keyword(config.production_keywords())
}

fn split_lines(report: &str) -> Vec<Line<'_>> {
    let mut offset = 0;
    report
        .split('\n')
        .map(|raw| {
            let line = Line {
                offset,
                text: raw.strip_suffix('\r').unwrap_or(raw),
            };
            offset += raw.len() + 1;
            line
        })
        .collect()
}

fn header_title<'a>(block: &[Line<'a>]) -> Option<&'a str> {
    let [open, title, close] = block else {
        return None;
    };
    if open.text != SEPARATOR || close.text != SEPARATOR {
        return None;
    }
    TITLE_LINE
        .captures(title.text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}
