//! Emotional arc command handler.

use super::commands::OutputFormat;
use marquee::{
    ArcBuilder, ArcSummary, EmotionalArc, MarqueeConfig, MarqueeResult, SegmentationStrategy,
    load_script, render_chart, segment_script,
};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

const PREVIEW_CHARS: usize = 48;

#[derive(Debug, Serialize)]
struct ArcOutput<'a> {
    strategy: SegmentationStrategy,
    insufficient: bool,
    points: &'a EmotionalArc,
    summary: Option<ArcSummary>,
}

/// Build and print the emotional arc of a script file.
pub fn handle_arc(
    path: &Path,
    format: OutputFormat,
    height: usize,
    config: &MarqueeConfig,
) -> MarqueeResult<()> {
    let script = load_script(path)?;
    let analyzer = config.analyzer()?;

    let segmentation = segment_script(script.text());
    let scored = ArcBuilder::new(&analyzer).score_segments(segmentation.segments());
    let arc = EmotionalArc::from_scored(&scored);
    let summary = arc.summary(*config.arc().flat_tolerance(), *config.arc().min_flat_run());

    if arc.is_insufficient() {
        warn!(path = %path.display(), "Script has no content to chart");
    } else {
        info!(
            strategy = %segmentation.strategy(),
            segments = arc.len(),
            "Built emotional arc"
        );
    }

    match format {
        OutputFormat::Json => {
            let output = ArcOutput {
                strategy: *segmentation.strategy(),
                insufficient: arc.is_insufficient(),
                points: &arc,
                summary,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| marquee::JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            if arc.is_insufficient() {
                println!("Insufficient content: no scenes or paragraphs to chart.");
                return Ok(());
            }

            println!("Emotional arc ({} segments, split by {})", arc.len(), segmentation.strategy());
            println!("{:-<80}", "");
            for (point, scored) in arc.points().iter().zip(&scored) {
                println!(
                    "{:>4}  {:+.3}  {}",
                    point.index(),
                    point.valence(),
                    preview(scored.segment().heading().unwrap_or(scored.segment().raw_text()))
                );
            }
            println!("{:-<80}", "");

            if let Some(summary) = &summary {
                print_summary(summary);
                println!("{:-<80}", "");
            }

            print!("{}", render_chart(&arc, *config.arc().max_ticks(), height));
        }
    }

    Ok(())
}

fn print_summary(summary: &ArcSummary) {
    println!(
        "Peak:   segment {} ({:+.3})",
        summary.peak().index(),
        summary.peak().valence()
    );
    println!(
        "Lowest: segment {} ({:+.3})",
        summary.lowest().index(),
        summary.lowest().valence()
    );
    println!("Mean:   {:+.3}", summary.mean());
    if let Some(shift) = summary.largest_shift() {
        println!(
            "Largest shift: segment {} -> {} ({:+.3})",
            shift.from(),
            shift.to(),
            shift.delta()
        );
    }
    for stretch in summary.flat_stretches() {
        println!(
            "Flat stretch: segments {}-{} ({} segments)",
            stretch.start(),
            stretch.end(),
            stretch.len()
        );
    }
}

fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default().trim();
    if line.chars().count() <= PREVIEW_CHARS {
        line.to_string()
    } else {
        let cut: String = line.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut.trim_end())
    }
}
