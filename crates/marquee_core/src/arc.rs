//! Emotional arc series and the beats derived from it.

use crate::ScoredSegment;
use serde::{Deserialize, Serialize};

/// One point of an emotional arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ArcPoint {
    /// 1-based segment index
    index: usize,
    /// Valence in `[-1.0, 1.0]`
    valence: f64,
}

impl ArcPoint {
    /// Create a point.
    pub fn new(index: usize, valence: f64) -> Self {
        Self { index, valence }
    }
}

/// The ordered `(index, valence)` series across a script.
///
/// Indices start at 1 and are contiguous. An empty arc means the script had no
/// usable content; check [`EmotionalArc::is_insufficient`] before charting it.
///
/// # Examples
///
/// ```
/// use marquee_core::{EmotionalArc, ScoredSegment, Segment};
///
/// let scored = vec![
///     ScoredSegment::new(Segment::new(1, "A happy start."), 0.6),
///     ScoredSegment::new(Segment::new(2, "A grim end."), -0.4),
/// ];
/// let arc = EmotionalArc::from_scored(&scored);
/// assert_eq!(arc.indices(), vec![1, 2]);
/// assert!(!arc.is_insufficient());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionalArc {
    points: Vec<ArcPoint>,
}

impl EmotionalArc {
    /// The arc returned when a script has no extractable segments.
    pub fn insufficient() -> Self {
        Self::default()
    }

    /// Build an arc from scored segments, renumbering from 1 in the given order.
    pub fn from_scored(scored: &[ScoredSegment]) -> Self {
        let points = scored
            .iter()
            .enumerate()
            .map(|(i, s)| ArcPoint::new(i + 1, *s.valence()))
            .collect();
        Self { points }
    }

    /// Build an arc from bare valences, numbering them from 1.
    pub fn from_valences(valences: impl IntoIterator<Item = f64>) -> Self {
        let points = valences
            .into_iter()
            .enumerate()
            .map(|(i, v)| ArcPoint::new(i + 1, v))
            .collect();
        Self { points }
    }

    /// The arc points in order.
    pub fn points(&self) -> &[ArcPoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the arc has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the source script had nothing to score.
    ///
    /// Same as [`is_empty`](Self::is_empty), named for what callers branch on.
    pub fn is_insufficient(&self) -> bool {
        self.points.is_empty()
    }

    /// The segment indices, `1..=len`.
    pub fn indices(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.index).collect()
    }

    /// The valences in order.
    pub fn valences(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.valence).collect()
    }

    /// Tick positions for a chart of this arc. See [`tick_indices`].
    pub fn tick_indices(&self, max_ticks: usize) -> Vec<usize> {
        tick_indices(self.points.len(), max_ticks)
    }

    /// Summarize the key emotional beats of the arc.
    ///
    /// Returns `None` for an insufficient arc. Flat stretches are maximal runs of
    /// at least `min_flat_run` points (never fewer than 2) where each step changes
    /// valence by no more than `flat_tolerance`.
    pub fn summary(&self, flat_tolerance: f64, min_flat_run: usize) -> Option<ArcSummary> {
        let first = *self.points.first()?;

        let mut lowest = first;
        let mut peak = first;
        let mut total = 0.0;
        for point in &self.points {
            if point.valence < lowest.valence {
                lowest = *point;
            }
            if point.valence > peak.valence {
                peak = *point;
            }
            total += point.valence;
        }

        let largest_shift = self
            .points
            .windows(2)
            .map(|w| ValenceShift {
                from: w[0].index,
                to: w[1].index,
                delta: w[1].valence - w[0].valence,
            })
            .fold(None, |best: Option<ValenceShift>, shift| match best {
                Some(b) if b.delta.abs() >= shift.delta.abs() => Some(b),
                _ => Some(shift),
            });

        Some(ArcSummary {
            lowest,
            peak,
            mean: total / self.points.len() as f64,
            largest_shift,
            flat_stretches: self.flat_stretches(flat_tolerance, min_flat_run.max(2)),
        })
    }

    fn flat_stretches(&self, tolerance: f64, min_run: usize) -> Vec<FlatStretch> {
        let mut stretches = Vec::new();
        let mut run_start = 0;

        for i in 1..=self.points.len() {
            let continues = i < self.points.len()
                && (self.points[i].valence - self.points[i - 1].valence).abs() <= tolerance;
            if continues {
                continue;
            }
            if i - run_start >= min_run {
                stretches.push(FlatStretch {
                    start: self.points[run_start].index,
                    end: self.points[i - 1].index,
                });
            }
            run_start = i;
        }

        stretches
    }
}

/// A change in valence between two consecutive segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ValenceShift {
    /// Index of the earlier segment
    from: usize,
    /// Index of the later segment
    to: usize,
    /// `valence(to) - valence(from)`
    delta: f64,
}

/// An inclusive run of segment indices with little emotional movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct FlatStretch {
    /// First index of the run
    start: usize,
    /// Last index of the run
    end: usize,
}

impl FlatStretch {
    /// Number of segments in the run.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false; a stretch spans at least two segments.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Key emotional beats of an arc: lowest point, peak, and flat areas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ArcSummary {
    /// First point with the minimum valence
    lowest: ArcPoint,
    /// First point with the maximum valence
    peak: ArcPoint,
    /// Mean valence across the arc
    mean: f64,
    /// Largest absolute change between neighbours, if the arc has two or more points
    largest_shift: Option<ValenceShift>,
    /// Runs of near-constant valence
    flat_stretches: Vec<FlatStretch>,
}

/// Choose integer tick positions for a chart of `len` points.
///
/// Every index is a tick while `len <= max_ticks`. Past that, ticks fall on
/// multiples of the smallest 1/2/5 × 10ᵏ step that keeps the count within
/// `max_ticks`. The arc itself is never thinned, only its labels.
///
/// # Examples
///
/// ```
/// use marquee_core::tick_indices;
///
/// assert_eq!(tick_indices(4, 20), vec![1, 2, 3, 4]);
/// assert_eq!(tick_indices(45, 20), vec![5, 10, 15, 20, 25, 30, 35, 40, 45]);
/// assert!(tick_indices(0, 20).is_empty());
/// ```
pub fn tick_indices(len: usize, max_ticks: usize) -> Vec<usize> {
    if len == 0 || max_ticks == 0 {
        return Vec::new();
    }
    if len <= max_ticks {
        return (1..=len).collect();
    }

    let mut magnitude = 1usize;
    let step = loop {
        if let Some(step) = [1, 2, 5]
            .iter()
            .map(|m| m * magnitude)
            .find(|step| len / step <= max_ticks)
        {
            break step;
        }
        magnitude *= 10;
    };

    (step..=len).step_by(step).collect()
}
