use marquee_core::{ArcPoint, EmotionalArc, ScoredSegment, Segment, tick_indices};

#[test]
fn insufficient_arc_is_empty_and_has_no_summary() {
    let arc = EmotionalArc::insufficient();
    assert!(arc.is_insufficient());
    assert!(arc.is_empty());
    assert!(arc.summary(0.05, 3).is_none());
    assert!(arc.tick_indices(20).is_empty());
}

#[test]
fn single_point_arc_is_not_insufficient() {
    let arc = EmotionalArc::from_valences([0.3]);
    assert!(!arc.is_insufficient());
    assert_eq!(arc.points(), &[ArcPoint::new(1, 0.3)]);

    let summary = arc.summary(0.05, 3).unwrap();
    assert_eq!(*summary.lowest(), ArcPoint::new(1, 0.3));
    assert_eq!(*summary.peak(), ArcPoint::new(1, 0.3));
    assert!(summary.largest_shift().is_none());
    assert!(summary.flat_stretches().is_empty());
}

#[test]
fn from_scored_renumbers_contiguously() {
    let scored = vec![
        ScoredSegment::new(Segment::new(4, "a"), 0.1),
        ScoredSegment::new(Segment::new(9, "b"), -0.2),
        ScoredSegment::new(Segment::new(12, "c"), 0.0),
    ];
    let arc = EmotionalArc::from_scored(&scored);
    assert_eq!(arc.indices(), vec![1, 2, 3]);
    assert_eq!(arc.valences(), vec![0.1, -0.2, 0.0]);
}

#[test]
fn summary_finds_lowest_peak_and_largest_shift() {
    let arc = EmotionalArc::from_valences([0.2, 0.8, -0.6, -0.5, 0.1]);
    let summary = arc.summary(0.05, 3).unwrap();

    assert_eq!(*summary.lowest().index(), 3);
    assert_eq!(*summary.peak().index(), 2);
    assert!((summary.mean() - 0.0).abs() < 1e-9);

    let shift = summary.largest_shift().unwrap();
    assert_eq!(*shift.from(), 2);
    assert_eq!(*shift.to(), 3);
    assert!((shift.delta() + 1.4).abs() < 1e-9);
}

#[test]
fn summary_reports_flat_stretches() {
    let arc = EmotionalArc::from_valences([0.0, 0.01, 0.02, 0.5, -0.5, -0.48, 0.9]);
    let summary = arc.summary(0.05, 3).unwrap();

    let stretches = summary.flat_stretches();
    assert_eq!(stretches.len(), 1);
    assert_eq!(*stretches[0].start(), 1);
    assert_eq!(*stretches[0].end(), 3);
    assert_eq!(stretches[0].len(), 3);

    // Pairs count once the minimum run drops to two.
    let summary = arc.summary(0.05, 2).unwrap();
    assert_eq!(summary.flat_stretches().len(), 2);
}

#[test]
fn flat_stretch_minimum_never_drops_below_two() {
    let arc = EmotionalArc::from_valences([0.0, 0.9, -0.9]);
    let summary = arc.summary(0.05, 0).unwrap();
    assert!(summary.flat_stretches().is_empty());
}

#[test]
fn ticks_cover_every_index_up_to_limit() {
    assert_eq!(tick_indices(20, 20), (1..=20).collect::<Vec<_>>());
}

#[test]
fn ticks_thin_out_past_limit() {
    let ticks = tick_indices(21, 20);
    assert_eq!(ticks.first(), Some(&2));
    assert!(ticks.len() <= 20);
    assert!(ticks.windows(2).all(|w| w[1] - w[0] == 2));

    let ticks = tick_indices(250, 20);
    assert_eq!(ticks, (20..=240).step_by(20).collect::<Vec<_>>());
}

#[test]
fn arc_serializes_as_points() {
    let arc = EmotionalArc::from_valences([0.5]);
    let json = serde_json::to_value(&arc).unwrap();
    assert_eq!(json["points"][0]["index"], 1);
    assert_eq!(json["points"][0]["valence"], 0.5);
}
