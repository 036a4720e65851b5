//! Report sectioning command handler.

use super::commands::OutputFormat;
use marquee::{
    LoadError, LoadErrorKind, MarqueeConfig, MarqueeResult, ParsedReport, ReportLayout,
    parse_report, production_requirements,
};
use std::path::Path;
use tracing::{debug, info};

/// Parse a report file and print its layout, or a single section when asked.
///
/// Returns `false` when a requested section is not in the report.
pub fn handle_sections(
    path: &Path,
    format: OutputFormat,
    keywords: &[String],
    production: bool,
    config: &MarqueeConfig,
) -> MarqueeResult<bool> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        LoadError::new(LoadErrorKind::FileRead(format!("{}: {}", path.display(), e)))
    })?;
    let parsed = parse_report(&text);
    info!(
        sections = parsed.len(),
        fallback = parsed.is_fallback(),
        "Parsed report"
    );

    if production {
        return print_lookup(production_requirements(&parsed, config.report()), format);
    }
    if !keywords.is_empty() {
        debug!(?keywords, "Looking up section by keyword");
        return print_lookup(parsed.find_by_keyword(keywords), format);
    }

    print_layout(&text, parsed, format, config)?;
    Ok(true)
}

fn print_lookup(content: Option<&str>, format: OutputFormat) -> MarqueeResult<bool> {
    let Some(content) = content else {
        eprintln!("No matching section found");
        return Ok(false);
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({ "content": content }))
                .map_err(|e| marquee::JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => println!("{}", content),
    }
    Ok(true)
}

fn print_layout(
    raw: &str,
    parsed: ParsedReport,
    format: OutputFormat,
    config: &MarqueeConfig,
) -> MarqueeResult<()> {
    let layout = ReportLayout::from_report(parsed, config.report());

    if format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&layout)
            .map_err(|e| marquee::JsonError::new(e.to_string()))?;
        println!("{}", json);
        return Ok(());
    }

    if let Some(snapshot) = layout.snapshot() {
        println!("{}", snapshot.title());
        println!("{:=<80}", "");
        println!("{}", snapshot.content());
        println!();
    }

    if layout.is_flat() {
        debug!("Nothing left for tabs, printing raw report");
        println!("{}", raw.trim());
        return Ok(());
    }

    for tab in layout.tabs() {
        println!("[{}]", tab.title());
        println!("{:-<80}", "");
        if let Some(section) = tab.section() {
            println!("{}", section.content());
        }
        if *tab.shows_graph() {
            println!("(run `marquee arc <SCRIPT>` for the emotional arc chart)");
        }
        println!();
    }

    Ok(())
}
