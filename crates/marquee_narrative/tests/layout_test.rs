use marquee_narrative::{ReportConfig, ReportLayout, parse_report, render_report};

fn tab_titles(layout: &ReportLayout) -> Vec<&str> {
    layout.tabs().iter().map(|t| t.title().as_str()).collect()
}

#[test]
fn snapshot_is_promoted_out_of_tabs() {
    let parsed = parse_report(&render_report([
        ("EXECUTIVE SNAPSHOT", "Logline."),
        ("CHARACTER OVERVIEW", "Leads."),
        ("CHARACTER EMOTIONAL GRAPH", "Lowest point in act two."),
        ("STRUCTURAL RISKS", "Thin villain."),
    ]));
    let layout = ReportLayout::from_report(parsed, &ReportConfig::default());

    assert_eq!(layout.snapshot().as_ref().unwrap().title(), "EXECUTIVE SNAPSHOT");
    assert_eq!(
        tab_titles(&layout),
        vec!["CHARACTER OVERVIEW", "CHARACTER EMOTIONAL GRAPH", "STRUCTURAL RISKS"]
    );

    let graph = layout.graph_tab().unwrap();
    assert_eq!(graph.title(), "CHARACTER EMOTIONAL GRAPH");
    assert_eq!(
        graph.section().as_ref().unwrap().content(),
        "Lowest point in act two."
    );
    assert_eq!(layout.tabs().iter().filter(|t| *t.shows_graph()).count(), 1);
}

#[test]
fn graph_tab_is_added_when_missing() {
    let parsed = parse_report(&render_report([("STRUCTURAL RISKS", "None.")]));
    let layout = ReportLayout::from_report(parsed, &ReportConfig::default());

    assert!(layout.snapshot().is_none());
    assert_eq!(tab_titles(&layout), vec!["STRUCTURAL RISKS", "Emotional Graph"]);
    let graph = layout.graph_tab().unwrap();
    assert!(graph.section().is_none());
}

#[test]
fn fallback_report_gets_full_report_and_graph_tabs() {
    let parsed = parse_report("An unstructured answer.");
    let layout = ReportLayout::from_report(parsed, &ReportConfig::default());
    assert_eq!(tab_titles(&layout), vec!["Full Report", "Emotional Graph"]);
}

#[test]
fn snapshot_only_report_has_no_tabs() {
    let parsed = parse_report(&render_report([("EXECUTIVE SNAPSHOT", "Only this.")]));
    let layout = ReportLayout::from_report(parsed, &ReportConfig::default());
    assert!(layout.snapshot().is_some());
    assert!(layout.is_flat());
    assert!(layout.graph_tab().is_none());
}

#[test]
fn layout_serializes_for_display_layers() {
    let parsed = parse_report(&render_report([("RISKS", "r")]));
    let layout = ReportLayout::from_report(parsed, &ReportConfig::default());
    let json = serde_json::to_value(&layout).unwrap();
    assert_eq!(json["tabs"][0]["title"], "RISKS");
    assert_eq!(json["tabs"][1]["shows_graph"], true);
    assert!(json["snapshot"].is_null());
}
