//! Sentiment scoring command handler.

use super::commands::OutputFormat;
use marquee::{MarqueeConfig, MarqueeResult};

/// Print the polarity scores of `text`.
pub fn handle_score(text: &str, format: OutputFormat, config: &MarqueeConfig) -> MarqueeResult<()> {
    let analyzer = config.analyzer()?;
    let scores = analyzer.polarity_scores(text);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&scores)
                .map_err(|e| marquee::JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("compound: {:+.4}", scores.compound());
            println!("positive: {:.3}", scores.positive());
            println!("neutral:  {:.3}", scores.neutral());
            println!("negative: {:.3}", scores.negative());
        }
    }

    Ok(())
}
