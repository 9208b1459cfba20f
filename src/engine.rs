//! Explicit handle to the external charting engine.
//!
//! The loader script is pulled in by the host page; this handle tracks the
//! one-shot load, guards drawing until it completes and owns the
//! type-to-constructor dispatch.

use std::cell::Cell;
use std::rc::Rc;

use leptos::{create_rw_signal, document, RwSignal, SignalGet, SignalGetUntracked, SignalSet};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::config::{ChartKind, DataSet, EngineDate, ResolvedChart};
use crate::google_bindings as js;

/// Errors at the engine boundary. The component logs these and skips the
/// draw; nothing is surfaced to the host.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("charting engine has not finished loading")]
    NotLoaded,
    #[error("no element with id `{0}` to draw into")]
    ContainerMissing(String),
    #[error("chart {what} did not serialize: {message}")]
    Serialize {
        what: &'static str,
        message: String,
    },
}

/// Cheaply cloneable engine handle. The host constructs one and passes it to
/// every chart component so loading happens once per page, not per chart.
#[derive(Clone)]
pub struct Engine {
    inner: Rc<Inner>,
}

struct Inner {
    loaded: RwSignal<bool>,
    load_requested: Cell<bool>,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                loaded: create_rw_signal(false),
                load_requested: Cell::new(false),
            }),
        }
    }

    /// Reactive read: an effect checking this re-runs when loading completes.
    pub fn is_loaded(&self) -> bool {
        self.inner.loaded.get()
    }

    /// Asks the external loader for the chart packages once; every later call
    /// is a no-op. There is no cancellation, timeout or retry, and the loader
    /// reports no failure, so a load that never completes leaves `is_loaded`
    /// false forever.
    pub fn ensure_loaded(&self) {
        if self.inner.load_requested.replace(true) {
            return;
        }
        let settings = json!({ "packages": ["corechart", "timeline", "gauge"] });
        let settings = match to_js(&settings, "loader settings") {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{err}");
                return;
            }
        };
        js::charts_load("current", &settings);
        let loaded = self.inner.loaded;
        js::charts_set_on_load_callback(&Closure::once_into_js(move || loaded.set(true)));
    }

    /// Constructs the chart for `chart.kind` against the container element
    /// and issues the draw. The returned [`ActiveChart`] replaces whatever
    /// instance the caller held before.
    pub fn draw(
        &self,
        container_id: &str,
        chart: &ResolvedChart,
    ) -> Result<ActiveChart, EngineError> {
        if !self.inner.loaded.get_untracked() {
            return Err(EngineError::NotLoaded);
        }
        let data = data_table(&chart.data)?;
        let options = to_js(&chart.options, "options")?;
        let container = document()
            .get_element_by_id(container_id)
            .ok_or_else(|| EngineError::ContainerMissing(container_id.to_owned()))?;
        let handle = construct(chart.kind, &container);
        handle.draw(&data, &options);
        Ok(ActiveChart {
            chart: handle,
            data,
            options,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// A drawn chart together with the data table and options it was drawn with.
pub struct ActiveChart {
    chart: js::ChartObject,
    data: js::DataTable,
    options: JsValue,
}

impl std::fmt::Debug for ActiveChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveChart").finish_non_exhaustive()
    }
}

impl ActiveChart {
    /// Re-issues the draw with the stored data and options, unchanged.
    pub fn redraw(&self) {
        self.chart.draw(&self.data, &self.options);
    }
}

fn construct(kind: ChartKind, container: &Element) -> js::ChartObject {
    match kind {
        ChartKind::Line => js::LineChart::new(container).unchecked_into(),
        ChartKind::Area => js::AreaChart::new(container).unchecked_into(),
        ChartKind::Pie => js::PieChart::new(container).unchecked_into(),
        ChartKind::Column => js::ColumnChart::new(container).unchecked_into(),
        ChartKind::Timeline => js::Timeline::new(container).unchecked_into(),
        ChartKind::Gauge => js::Gauge::new(container).unchecked_into(),
        ChartKind::Bar => js::BarChart::new(container).unchecked_into(),
    }
}

fn data_table(data: &DataSet) -> Result<js::DataTable, EngineError> {
    match data {
        DataSet::Rows(rows) => Ok(js::array_to_data_table(&to_js(rows, "data rows")?)),
        DataSet::Timeline(spans) => {
            let table = js::DataTable::new();
            table.add_column(&to_js(&json!({ "type": "string", "id": "Label" }), "timeline column")?);
            table.add_column(&to_js(&json!({ "type": "date", "id": "Start" }), "timeline column")?);
            table.add_column(&to_js(&json!({ "type": "date", "id": "End" }), "timeline column")?);
            let rows = js_sys::Array::new();
            for span in spans {
                let row = js_sys::Array::of3(
                    &JsValue::from_str(&span.label),
                    &js_date(span.start).into(),
                    &js_date(span.end).into(),
                );
                rows.push(&row);
            }
            table.add_rows(&rows);
            Ok(table)
        }
    }
}

fn js_date(date: EngineDate) -> js_sys::Date {
    js_sys::Date::new_with_year_month_day_hr_min_sec(
        date.year,
        date.month as i32,
        date.day as i32,
        date.hour as i32,
        date.minute as i32,
        date.second as i32,
    )
}

/// Serializes through the JSON-compatible serializer so the engine receives
/// plain objects and arrays, never `Map`s.
fn to_js(value: &impl Serialize, what: &'static str) -> Result<JsValue, EngineError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| EngineError::Serialize {
            what,
            message: err.to_string(),
        })
}
