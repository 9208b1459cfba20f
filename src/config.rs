//! Declarative chart configuration and the pure resolve step.
//!
//! Everything in this module is plain data: parsing the chart type,
//! substituting the built-in default datasets, building the per-kind option
//! overrides and merging caller style options. The JS boundary lives in
//! [`crate::engine`], which keeps this half testable without a browser.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chart variants the component dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Area,
    Pie,
    Column,
    Timeline,
    Gauge,
    Bar,
}

impl ChartKind {
    /// Exact-match lookup on the declarative `chart_type` string. Anything
    /// unrecognized draws as a line chart rather than erroring.
    pub fn parse(name: &str) -> Self {
        match name {
            "Line" => Self::Line,
            "Area" => Self::Area,
            "Pie" => Self::Pie,
            "Column" => Self::Column,
            "Timeline" => Self::Timeline,
            "Gauge" => Self::Gauge,
            "Bar" => Self::Bar,
            _ => Self::Line,
        }
    }

    fn apply_overrides(self, options: &mut ChartOptions) {
        match self {
            Self::Line | Self::Area | Self::Column | Self::Bar => {
                options.legend.position = Some("none".to_owned());
            }
            Self::Pie => options.colors = None,
            Self::Timeline => {
                options.colors = None;
                options.legend.position = Some("none".to_owned());
            }
            // gauge options are built wholesale in `resolve`
            Self::Gauge => {}
        }
    }
}

/// A single table cell; the engine's tabular format mixes header strings and
/// numeric values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

/// Tabular chart data, first row holding the column headers.
pub type Rows = Vec<Vec<Cell>>;

/// Calendar timestamp in the engine's date convention (zero-based month).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EngineDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl EngineDate {
    pub const fn new(year: u32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

/// One bar on a timeline chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineSpan {
    pub label: String,
    pub start: EngineDate,
    pub end: EngineDate,
}

/// Placeholder table drawn when the host supplies no data.
pub fn default_rows() -> Rows {
    vec![
        vec!["Chart thing".into(), "Chart amount".into()],
        vec!["Na Meta".into(), 50.into()],
        vec!["Abaixo da Meta".into(), 22.into()],
        vec!["Acima da Meta".into(), 10.into()],
        vec!["Refugos".into(), 15.into()],
    ]
}

/// Placeholder spans drawn when a timeline chart has no data.
pub fn default_timeline_spans() -> Vec<TimelineSpan> {
    let spans = [
        (
            EngineDate::new(1789, 3, 30, 10, 4, 45),
            EngineDate::new(1789, 3, 30, 10, 5, 0),
        ),
        (
            EngineDate::new(1789, 3, 30, 10, 5, 0),
            EngineDate::new(1789, 3, 30, 10, 5, 15),
        ),
        (
            EngineDate::new(1789, 3, 30, 10, 5, 15),
            EngineDate::new(1789, 3, 30, 10, 5, 30),
        ),
    ];
    spans
        .into_iter()
        .map(|(start, end)| TimelineSpan {
            label: "Ventilador".to_owned(),
            start,
            end,
        })
        .collect()
}

/// Placeholder reading drawn when a gauge has no data.
pub fn default_gauge_rows() -> Rows {
    vec![
        vec!["Label".into(), "Value".into()],
        vec!["Ventilador".into(), 0.into()],
    ]
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub text_style: TextStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gridlines {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisStyle {
    pub baseline_color: String,
    pub gridlines: Gridlines,
    pub text_style: TextStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Fill {
    pub fill: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub duration: u32,
    pub easing: String,
    pub startup: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarGroup {
    pub group_width: String,
}

/// Fixed white-on-transparent styling shared by every non-gauge chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// `None` serializes as `null`, telling the engine to use its own palette.
    pub colors: Option<Vec<String>>,
    pub background_color: Fill,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub title_text_style: TextStyle,
    pub legend: Legend,
    pub bar: BarGroup,
    pub animation: Animation,
    pub h_axis: AxisStyle,
    #[serde(rename = "is3D")]
    pub is_3d: bool,
    pub curve_type: String,
    pub v_axis: AxisStyle,
}

impl ChartOptions {
    pub fn with_title(title: Option<String>) -> Self {
        let axis_text = TextStyle {
            font_size: Some(8),
            color: "white".to_owned(),
            opacity: Some(0.5),
        };
        Self {
            colors: Some(vec!["white".to_owned()]),
            background_color: Fill {
                fill: "transparent".to_owned(),
            },
            title,
            title_text_style: TextStyle {
                font_size: Some(12),
                color: "white".to_owned(),
                opacity: Some(1.0),
            },
            legend: Legend {
                position: None,
                text_style: TextStyle {
                    font_size: None,
                    color: "white".to_owned(),
                    opacity: None,
                },
            },
            bar: BarGroup {
                group_width: "20%".to_owned(),
            },
            animation: Animation {
                duration: 2000,
                easing: "out".to_owned(),
                startup: true,
            },
            h_axis: AxisStyle {
                baseline_color: "white".to_owned(),
                gridlines: Gridlines {
                    color: "white".to_owned(),
                    count: None,
                    opacity: 0.5,
                },
                text_style: axis_text.clone(),
            },
            is_3d: true,
            curve_type: "function".to_owned(),
            v_axis: AxisStyle {
                baseline_color: "white".to_owned(),
                gridlines: Gridlines {
                    color: "white".to_owned(),
                    count: Some(6),
                    opacity: 0.5,
                },
                text_style: axis_text,
            },
        }
    }
}

/// Gauge charts replace the general styling with fixed thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeOptions {
    pub width: u32,
    pub height: u32,
    pub red_from: f64,
    pub red_to: f64,
    pub min: f64,
    pub max: f64,
    pub yellow_from: f64,
    pub yellow_to: f64,
    pub minor_ticks: f64,
}

impl Default for GaugeOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 120,
            red_from: 2.0,
            red_to: 5.0,
            min: 0.0,
            max: 5.0,
            yellow_from: 0.0,
            yellow_to: 1.0,
            minor_ticks: 0.1,
        }
    }
}

/// Declarative state the host sets through the component's props.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartConfig {
    pub title: Option<String>,
    pub chart_type: String,
    pub data: Option<Rows>,
    pub options: Option<Value>,
}

/// Data the engine will be handed, after default substitution.
#[derive(Clone, Debug, PartialEq)]
pub enum DataSet {
    Rows(Rows),
    Timeline(Vec<TimelineSpan>),
}

/// Outcome of [`resolve`]: everything a draw call needs.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedChart {
    pub kind: ChartKind,
    pub data: DataSet,
    pub options: Value,
}

/// Turns declarative state into a drawable chart description.
///
/// Pure: no engine, no DOM. Substitutes the built-in dataset when `data` is
/// unset, applies the per-kind option overrides and merges caller options on
/// top (caller wins).
pub fn resolve(config: &ChartConfig) -> ResolvedChart {
    let kind = ChartKind::parse(&config.chart_type);

    let data = match (&config.data, kind) {
        (Some(rows), _) => DataSet::Rows(rows.clone()),
        (None, ChartKind::Timeline) => DataSet::Timeline(default_timeline_spans()),
        (None, ChartKind::Gauge) => DataSet::Rows(default_gauge_rows()),
        (None, _) => DataSet::Rows(default_rows()),
    };

    let mut options = if kind == ChartKind::Gauge {
        to_options_value(&GaugeOptions::default())
    } else {
        let mut base = ChartOptions::with_title(config.title.clone());
        kind.apply_overrides(&mut base);
        to_options_value(&base)
    };
    if let Some(overrides) = &config.options {
        merge_value(&mut options, overrides);
    }

    ResolvedChart {
        kind,
        data,
        options,
    }
}

fn to_options_value(options: &impl Serialize) -> Value {
    // string-keyed structs; serialization cannot fail
    serde_json::to_value(options).unwrap_or(Value::Null)
}

/// Recursive JSON merge; objects merge key-wise, everything else replaces.
fn merge_value(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(key) {
                    Some(slot) => merge_value(slot, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cells_serialize_as_plain_values() {
        let row: Vec<Cell> = vec!["A".into(), 1.into()];
        assert_eq!(serde_json::to_value(&row).unwrap(), json!(["A", 1.0]));
    }

    #[test]
    fn merge_replaces_scalars_and_merges_objects() {
        let mut base = json!({"a": {"b": 1, "c": 2}, "d": 3});
        merge_value(&mut base, &json!({"a": {"b": 10}, "e": 4}));
        assert_eq!(base, json!({"a": {"b": 10, "c": 2}, "d": 3, "e": 4}));
    }

    #[test]
    fn merge_replaces_mismatched_shapes_wholesale() {
        let mut base = json!({"a": {"b": 1}});
        merge_value(&mut base, &json!({"a": [1, 2]}));
        assert_eq!(base, json!({"a": [1, 2]}));
    }
}
