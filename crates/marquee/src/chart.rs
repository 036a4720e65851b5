//! Plain-text line chart for emotional arcs.

use marquee_core::EmotionalArc;

/// Draw an arc as a text chart, one column per segment.
///
/// Rows span valence 1.0 (top) to -1.0 (bottom), with the zero line drawn in
/// dashes. `height` is rounded up to an odd number of at least 3 so zero has its
/// own row. Tick labels along the bottom are thinned to at most `max_ticks`; the
/// points themselves are all drawn. An insufficient arc draws nothing.
///
/// # Examples
///
/// ```
/// use marquee::{EmotionalArc, render_chart};
///
/// let chart = render_chart(&EmotionalArc::from_valences([1.0, 0.0, -1.0]), 20, 5);
/// assert_eq!(chart.matches('*').count(), 3);
/// assert!(render_chart(&EmotionalArc::insufficient(), 20, 5).is_empty());
/// ```
pub fn render_chart(arc: &EmotionalArc, max_ticks: usize, height: usize) -> String {
    if arc.is_insufficient() {
        return String::new();
    }

    let height = height.max(3) | 1;
    let zero_row = height / 2;
    let width = arc.len();

    let mut grid = vec![vec![' '; width]; height];
    grid[zero_row].fill('-');
    for (col, point) in arc.points().iter().enumerate() {
        grid[value_row(*point.valence(), height)][col] = '*';
    }

    let mut out = String::new();
    for (r, row) in grid.iter().enumerate() {
        let label = if r == 0 {
            " 1.0"
        } else if r == zero_row {
            " 0.0"
        } else if r == height - 1 {
            "-1.0"
        } else {
            "    "
        };
        out.push_str(&format!("{label} |{}\n", row.iter().collect::<String>()));
    }
    out.push_str(&format!("     +{}\n", "-".repeat(width)));

    let mut axis = String::new();
    for tick in arc.tick_indices(max_ticks) {
        let col = tick - 1;
        if !axis.is_empty() && col <= axis.len() {
            continue;
        }
        axis.push_str(&" ".repeat(col - axis.len()));
        axis.push_str(&tick.to_string());
    }
    out.push_str(&format!("      {axis}\n"));

    out
}

fn value_row(valence: f64, height: usize) -> usize {
    let v = valence.clamp(-1.0, 1.0);
    (((1.0 - v) / 2.0) * (height - 1) as f64).round() as usize
}
