use marquee_core::FALLBACK_TITLE;
use marquee_narrative::{ReportConfig, SEPARATOR, parse_report, production_requirements, render_report};

fn header(number: usize, title: &str) -> String {
    format!("{SEPARATOR}\n{number}. {title}\n{SEPARATOR}\n")
}

#[test]
fn separator_is_exactly_24_equals() {
    assert_eq!(SEPARATOR.len(), 24);
    assert!(SEPARATOR.chars().all(|c| c == '='));
}

#[test]
fn rendered_report_round_trips() {
    let report = render_report([("A", "content A"), ("B", "content B"), ("C", "content C")]);
    let parsed = parse_report(&report);

    assert!(!parsed.is_fallback());
    assert_eq!(parsed.titles(), vec!["A", "B", "C"]);
    let contents: Vec<_> = parsed.iter().map(|s| s.content().as_str()).collect();
    assert_eq!(contents, vec!["content A", "content B", "content C"]);
    let positions: Vec<_> = parsed.iter().map(|s| *s.position()).collect();
    assert_eq!(positions, vec![0, 1, 2]);
}

#[test]
fn plain_text_falls_back_to_single_section() {
    let parsed = parse_report("just some plain text with no headers");
    assert!(parsed.is_fallback());
    assert_eq!(parsed.len(), 1);
    assert_eq!(
        parsed.get(FALLBACK_TITLE).unwrap().content(),
        "just some plain text with no headers"
    );
}

#[test]
fn empty_report_falls_back_with_empty_content() {
    let parsed = parse_report("");
    assert!(parsed.is_fallback());
    assert_eq!(parsed.get(FALLBACK_TITLE).unwrap().content(), "");
}

#[test]
fn keyword_lookup_finds_first_matching_title() {
    let report = render_report([
        ("PRODUCTION REQUIREMENTS", "Two stunts, one crowd scene."),
        ("RISKS", "Slow second act."),
    ]);
    let parsed = parse_report(&report);
    assert_eq!(
        parsed.find_by_keyword(&["vfx", "production"]),
        Some("Two stunts, one crowd scene.")
    );
    assert_eq!(parsed.find_by_keyword(&["budget"]), None);
    assert_eq!(
        production_requirements(&parsed, &ReportConfig::default()),
        Some("Two stunts, one crowd scene.")
    );
}

#[test]
fn content_keeps_blank_lines_and_equals_runs() {
    let report = format!(
        "{}First paragraph.\n\nSecond paragraph.\n==========\n{SEPARATOR}\nstill body\n{}tail",
        header(1, "ONE"),
        header(2, "TWO"),
    );
    let parsed = parse_report(&report);
    assert_eq!(parsed.titles(), vec!["ONE", "TWO"]);
    assert_eq!(
        parsed.get("ONE").unwrap().content(),
        &format!("First paragraph.\n\nSecond paragraph.\n==========\n{SEPARATOR}\nstill body")
    );
    assert_eq!(parsed.get("TWO").unwrap().content(), "tail");
}

#[test]
fn separators_of_other_lengths_are_not_headers() {
    let short = "=".repeat(23);
    let long = "=".repeat(25);
    let report = format!("{short}\n1. SHORT\n{short}\nbody\n{long}\n2. LONG\n{long}\nbody");
    assert!(parse_report(&report).is_fallback());
}

#[test]
fn title_line_needs_number_and_dot() {
    let report = format!("{SEPARATOR}\nOVERVIEW\n{SEPARATOR}\nbody");
    assert!(parse_report(&report).is_fallback());

    let report = format!("{SEPARATOR}\n12.OVERVIEW  \n{SEPARATOR}\nbody");
    let parsed = parse_report(&report);
    assert_eq!(parsed.titles(), vec!["OVERVIEW"]);
}

#[test]
fn closing_separator_is_not_reused_as_opening() {
    let report = format!("{SEPARATOR}\n1. A\n{SEPARATOR}\n2. B\n{SEPARATOR}\nbody");
    let parsed = parse_report(&report);
    assert_eq!(parsed.titles(), vec!["A"]);
    assert_eq!(
        parsed.get("A").unwrap().content(),
        &format!("2. B\n{SEPARATOR}\nbody")
    );
}

#[test]
fn preamble_before_first_header_is_dropped() {
    let report = format!("Here is your report:\n\n{}Body.", header(1, "EXECUTIVE SNAPSHOT"));
    let parsed = parse_report(&report);
    assert_eq!(parsed.titles(), vec!["EXECUTIVE SNAPSHOT"]);
    assert_eq!(parsed.get("EXECUTIVE SNAPSHOT").unwrap().content(), "Body.");
}

#[test]
fn repeated_titles_last_write_wins() {
    let report = render_report([("A", "old"), ("B", "b"), ("A", "new")]);
    let parsed = parse_report(&report);
    assert_eq!(parsed.titles(), vec!["A", "B"]);
    assert_eq!(parsed.get("A").unwrap().content(), "new");
    assert_eq!(*parsed.get("A").unwrap().position(), 0);
}

#[test]
fn header_at_end_of_input_has_empty_content() {
    let report = format!("{}x\n{SEPARATOR}\n2. LAST\n{SEPARATOR}", header(1, "FIRST"));
    let parsed = parse_report(&report);
    assert_eq!(parsed.titles(), vec!["FIRST", "LAST"]);
    assert_eq!(parsed.get("LAST").unwrap().content(), "");
}

#[test]
fn crlf_line_endings_are_accepted() {
    let report = render_report([("A", "alpha"), ("B", "beta")]).replace('\n', "\r\n");
    let parsed = parse_report(&report);
    assert_eq!(parsed.titles(), vec!["A", "B"]);
    assert_eq!(parsed.get("A").unwrap().content(), "alpha");
}

#[test]
fn removal_leaves_original_untouched() {
    let parsed = parse_report(&render_report([("EXECUTIVE SNAPSHOT", "s"), ("RISKS", "r")]));
    let rest = parsed.without("EXECUTIVE SNAPSHOT");
    assert_eq!(rest.titles(), vec!["RISKS"]);
    assert_eq!(parsed.len(), 2);
}

#[test]
fn render_report_writes_numbered_header_blocks() {
    let report = render_report([("LOGLINE", "A heist."), ("RISKS", "")]);
    assert_eq!(
        report,
        format!("{SEPARATOR}\n1. LOGLINE\n{SEPARATOR}\nA heist.\n\n{SEPARATOR}\n2. RISKS\n{SEPARATOR}\n\n\n")
    );
}
