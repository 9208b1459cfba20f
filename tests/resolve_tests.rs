//! Dispatch and default-substitution behavior of the pure resolve step.

use google_chart::config::{
    resolve, Cell, ChartConfig, ChartKind, DataSet, GaugeOptions, Rows,
};
use serde_json::json;

fn config(chart_type: &str) -> ChartConfig {
    ChartConfig {
        chart_type: chart_type.to_owned(),
        ..ChartConfig::default()
    }
}

#[test]
fn every_supported_variant_selects_its_constructor() {
    let expected = [
        ("Line", ChartKind::Line),
        ("Area", ChartKind::Area),
        ("Pie", ChartKind::Pie),
        ("Column", ChartKind::Column),
        ("Timeline", ChartKind::Timeline),
        ("Gauge", ChartKind::Gauge),
        ("Bar", ChartKind::Bar),
    ];
    for (name, kind) in expected {
        assert_eq!(resolve(&config(name)).kind, kind, "chartType {name}");
    }
}

#[test]
fn unrecognized_variant_falls_back_to_line_with_legend_hidden() {
    let resolved = resolve(&config("Sparkline"));
    assert_eq!(resolved.kind, ChartKind::Line);
    assert_eq!(resolved.options["legend"]["position"], json!("none"));
}

#[test]
fn empty_variant_falls_back_to_line() {
    assert_eq!(resolve(&ChartConfig::default()).kind, ChartKind::Line);
}

#[test]
fn line_area_column_and_bar_hide_the_legend() {
    for name in ["Line", "Area", "Column", "Bar"] {
        let resolved = resolve(&config(name));
        assert_eq!(
            resolved.options["legend"]["position"],
            json!("none"),
            "chartType {name}"
        );
        assert_eq!(resolved.options["colors"], json!(["white"]), "chartType {name}");
    }
}

#[test]
fn pie_nulls_the_palette_and_keeps_the_legend() {
    let resolved = resolve(&config("Pie"));
    assert!(resolved.options["colors"].is_null());
    assert!(resolved.options["legend"]["position"].is_null());
}

#[test]
fn timeline_nulls_the_palette_and_hides_the_legend() {
    let resolved = resolve(&config("Timeline"));
    assert!(resolved.options["colors"].is_null());
    assert_eq!(resolved.options["legend"]["position"], json!("none"));
}

#[test]
fn missing_data_substitutes_the_fixed_default_table() {
    let resolved = resolve(&config("Column"));
    let DataSet::Rows(rows) = resolved.data else {
        panic!("expected tabular data");
    };
    assert_eq!(
        rows[0],
        vec![Cell::from("Chart thing"), Cell::from("Chart amount")]
    );
    // header plus four rows
    assert_eq!(rows.len(), 5);
}

#[test]
fn missing_timeline_data_substitutes_the_fixed_spans() {
    let resolved = resolve(&config("Timeline"));
    let DataSet::Timeline(spans) = resolved.data else {
        panic!("expected timeline spans");
    };
    assert_eq!(spans.len(), 3);
    assert!(spans.iter().all(|span| span.label == "Ventilador"));
    assert_eq!(spans[0].start.year, 1789);
    // the spans are contiguous
    assert_eq!(spans[0].end, spans[1].start);
    assert_eq!(spans[1].end, spans[2].start);
}

#[test]
fn gauge_without_data_uses_the_fixed_reading() {
    let DataSet::Rows(rows) = resolve(&config("Gauge")).data else {
        panic!("expected tabular data");
    };
    assert_eq!(
        rows,
        vec![
            vec![Cell::from("Label"), Cell::from("Value")],
            vec![Cell::from("Ventilador"), Cell::from(0.0)],
        ]
    );
}

#[test]
fn gauge_options_are_the_fixed_thresholds_not_a_merge() {
    let resolved = resolve(&config("Gauge"));
    assert_eq!(
        resolved.options,
        serde_json::to_value(GaugeOptions::default()).unwrap()
    );
    // nothing from the general defaults leaks in
    assert!(resolved.options.get("legend").is_none());
    assert!(resolved.options.get("colors").is_none());
    assert_eq!(resolved.options["redFrom"], json!(2.0));
    assert_eq!(resolved.options["minorTicks"], json!(0.1));
}

#[test]
fn supplied_data_is_passed_through_unchanged() {
    // chartType="Pie", data=[["A",1],["B",2]]
    let rows: Rows = vec![
        vec![Cell::from("A"), Cell::from(1.0)],
        vec![Cell::from("B"), Cell::from(2.0)],
    ];
    let cfg = ChartConfig {
        chart_type: "Pie".to_owned(),
        data: Some(rows.clone()),
        ..ChartConfig::default()
    };
    let resolved = resolve(&cfg);
    assert_eq!(resolved.kind, ChartKind::Pie);
    assert!(resolved.options["colors"].is_null());
    assert_eq!(resolved.data, DataSet::Rows(rows));
}

#[test]
fn supplied_data_wins_for_timeline_and_gauge_too() {
    let rows: Rows = vec![
        vec![Cell::from("Label"), Cell::from("Value")],
        vec![Cell::from("Boiler"), Cell::from(3.0)],
    ];
    for name in ["Timeline", "Gauge"] {
        let cfg = ChartConfig {
            chart_type: name.to_owned(),
            data: Some(rows.clone()),
            ..ChartConfig::default()
        };
        assert_eq!(
            resolve(&cfg).data,
            DataSet::Rows(rows.clone()),
            "chartType {name}"
        );
    }
}

#[test]
fn title_lands_in_the_options_object() {
    let cfg = ChartConfig {
        title: Some("Throughput".to_owned()),
        chart_type: "Line".to_owned(),
        ..ChartConfig::default()
    };
    assert_eq!(resolve(&cfg).options["title"], json!("Throughput"));
}

#[test]
fn untitled_charts_omit_the_title_key() {
    assert!(resolve(&config("Line")).options.get("title").is_none());
}
