use marquee_core::ValenceScorer;
use marquee_error::LexiconErrorKind;
use marquee_sentiment::{Lexicon, SentimentAnalyzer};
use std::io::Write;

#[test]
fn polarity_follows_word_valence() {
    let analyzer = SentimentAnalyzer::new();
    assert!(analyzer.compound("I love this wonderful day") > 0.0);
    assert!(analyzer.compound("I hate this terrible day") < 0.0);
}

#[test]
fn empty_and_neutral_text_score_zero() {
    let analyzer = SentimentAnalyzer::new();
    assert_eq!(analyzer.compound(""), 0.0);
    assert_eq!(analyzer.compound("   \n\t "), 0.0);
    assert_eq!(analyzer.compound("The door is on the left."), 0.0);

    let scores = analyzer.polarity_scores("");
    assert_eq!(*scores.positive(), 0.0);
    assert_eq!(*scores.negative(), 0.0);
    assert_eq!(*scores.neutral(), 0.0);
}

#[test]
fn scores_stay_in_range() {
    let analyzer = SentimentAnalyzer::new();
    let samples = [
        "love ".repeat(500),
        "MURDER KILL DEATH TORTURE!!!! murder kill death".to_string(),
        "absolutely utterly incredibly wonderful amazing perfect!!!!!!".to_string(),
        "???!!!...".to_string(),
        "not not not never bad".to_string(),
        "\u{1F600} caf\u{e9} na\u{ef}ve".to_string(),
    ];
    for text in &samples {
        let v = analyzer.compound(text);
        assert!((-1.0..=1.0).contains(&v), "{v} out of range for {text:?}");
    }
}

#[test]
fn negation_flips_polarity() {
    let analyzer = SentimentAnalyzer::new();
    assert!(analyzer.compound("The ending is good") > 0.0);
    assert!(analyzer.compound("The ending is not good") < 0.0);
    assert!(analyzer.compound("The ending isn't good") < 0.0);
}

#[test]
fn degree_modifiers_scale_intensity() {
    let analyzer = SentimentAnalyzer::new();
    let plain = analyzer.compound("The ending is good");
    let boosted = analyzer.compound("The ending is very good");
    let damped = analyzer.compound("The ending is slightly good");
    assert!(boosted > plain);
    assert!(damped < plain);
    assert!(damped > 0.0);
}

#[test]
fn caps_and_exclamations_add_emphasis() {
    let analyzer = SentimentAnalyzer::new();
    let plain = analyzer.compound("The ending is good");
    assert!(analyzer.compound("The ending is GOOD") > plain);
    assert!(analyzer.compound("The ending is good!!!") > plain);
    assert!(analyzer.compound("The ending is bad!!!") < analyzer.compound("The ending is bad"));
}

#[test]
fn but_favours_second_clause() {
    let analyzer = SentimentAnalyzer::new();
    assert!(analyzer.compound("The cast is great but the script is terrible") < 0.0);
    assert!(analyzer.compound("The script is terrible but the cast is great") > 0.0);
}

#[test]
fn proportions_sum_to_one() {
    let analyzer = SentimentAnalyzer::new();
    let scores = analyzer.polarity_scores("She smiles, then the killer laughs in the dark.");
    let total = scores.positive() + scores.negative() + scores.neutral();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn scoring_is_deterministic_and_shareable_across_threads() {
    let analyzer = SentimentAnalyzer::new();
    let text = "A brave hero rescues the lost child from the burning house.";
    let expected = analyzer.score(text);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| analyzer.score(text)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn bundled_lexicon_loads() {
    let lexicon = Lexicon::bundled();
    assert!(lexicon.len() > 300);
    assert_eq!(lexicon.valence("LOVE"), Some(3.2));
}

#[test]
fn custom_lexicon_file_replaces_bundled() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# screenplay slang").unwrap();
    writeln!(file, "banger\t3.0\textra-column").unwrap();
    writeln!(file, "flop\t-2.5").unwrap();

    let analyzer = SentimentAnalyzer::from_lexicon_file(file.path()).unwrap();
    assert_eq!(analyzer.lexicon().len(), 2);
    assert!(analyzer.compound("total banger") > 0.0);
    assert!(analyzer.compound("a flop") < 0.0);
    assert_eq!(analyzer.compound("I love it"), 0.0);
}

#[test]
fn malformed_lexicons_are_rejected() {
    let err = Lexicon::parse("happy 2.7\n").unwrap_err();
    assert!(matches!(err.kind, LexiconErrorKind::MalformedEntry { line: 1, .. }));

    let err = Lexicon::parse("happy\tvery\n").unwrap_err();
    assert!(matches!(err.kind, LexiconErrorKind::InvalidValence { .. }));

    let err = Lexicon::parse("# only comments\n\n").unwrap_err();
    assert_eq!(err.kind, LexiconErrorKind::Empty);

    let err = SentimentAnalyzer::from_lexicon_file("/definitely/not/here.tsv").unwrap_err();
    assert!(matches!(err.kind, LexiconErrorKind::FileRead(_)));
}

#[test]
fn out_of_scale_valences_are_rejected() {
    for source in ["boom\t1e308\n", "big\t4.5\n", "low\t-4.01\n", "odd\tNaN\n", "far\tinf\n"] {
        let err = Lexicon::parse(source).unwrap_err();
        assert!(
            matches!(err.kind, LexiconErrorKind::InvalidValence { .. }),
            "{source:?} gave {:?}",
            err.kind
        );
    }

    let lexicon = Lexicon::parse("max\t4.0\nmin\t-4\n").unwrap();
    assert_eq!(lexicon.valence("max"), Some(4.0));
    assert_eq!(lexicon.valence("min"), Some(-4.0));
}

#[test]
fn compound_stays_in_range_at_scale_limits() {
    let analyzer = SentimentAnalyzer::from_lexicon_str("max\t4\nmin\t-4\n").unwrap();
    let loud = vec!["MAX"; 5000].join(" ") + " really!!!!";
    let grim = vec!["min"; 5000].join(" ");

    for text in [loud.as_str(), grim.as_str(), "max max", "min"] {
        let score = analyzer.compound(text);
        assert!((-1.0..=1.0).contains(&score), "out of range: {score}");
    }
    assert!(analyzer.compound(&loud) > 0.99);
    assert!(analyzer.compound(&grim) < -0.99);
}
