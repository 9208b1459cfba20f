//! Imports for the slice of the Google Charts API the component touches.
//!
//! All engine access goes through this single module: the loader entry
//! points, the tabular-data constructors and the seven chart constructors.
//! The loader script itself is pulled in by the host page.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// `google.charts.load(version, settings)`.
    #[wasm_bindgen(js_namespace = ["google", "charts"], js_name = load)]
    pub fn charts_load(version: &str, settings: &JsValue);

    /// `google.charts.setOnLoadCallback(callback)`.
    #[wasm_bindgen(js_namespace = ["google", "charts"], js_name = setOnLoadCallback)]
    pub fn charts_set_on_load_callback(callback: &JsValue);

    /// `google.visualization.arrayToDataTable(rows)`.
    #[wasm_bindgen(js_namespace = ["google", "visualization"], js_name = arrayToDataTable)]
    pub fn array_to_data_table(rows: &JsValue) -> DataTable;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "visualization"])]
    pub type DataTable;

    #[wasm_bindgen(constructor, js_namespace = ["google", "visualization"])]
    pub fn new() -> DataTable;

    #[wasm_bindgen(method, js_name = addColumn)]
    pub fn add_column(this: &DataTable, column: &JsValue);

    #[wasm_bindgen(method, js_name = addRows)]
    pub fn add_rows(this: &DataTable, rows: &js_sys::Array);
}

#[wasm_bindgen]
extern "C" {
    /// Any constructed chart; every `google.visualization` chart exposes
    /// `draw(data, options)`.
    pub type ChartObject;

    #[wasm_bindgen(method, structural)]
    pub fn draw(this: &ChartObject, data: &DataTable, options: &JsValue);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "visualization"])]
    pub type LineChart;

    #[wasm_bindgen(constructor, js_namespace = ["google", "visualization"])]
    pub fn new(container: &Element) -> LineChart;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "visualization"])]
    pub type AreaChart;

    #[wasm_bindgen(constructor, js_namespace = ["google", "visualization"])]
    pub fn new(container: &Element) -> AreaChart;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "visualization"])]
    pub type PieChart;

    #[wasm_bindgen(constructor, js_namespace = ["google", "visualization"])]
    pub fn new(container: &Element) -> PieChart;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "visualization"])]
    pub type ColumnChart;

    #[wasm_bindgen(constructor, js_namespace = ["google", "visualization"])]
    pub fn new(container: &Element) -> ColumnChart;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "visualization"])]
    pub type Timeline;

    #[wasm_bindgen(constructor, js_namespace = ["google", "visualization"])]
    pub fn new(container: &Element) -> Timeline;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "visualization"])]
    pub type Gauge;

    #[wasm_bindgen(constructor, js_namespace = ["google", "visualization"])]
    pub fn new(container: &Element) -> Gauge;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "visualization"])]
    pub type BarChart;

    #[wasm_bindgen(constructor, js_namespace = ["google", "visualization"])]
    pub fn new(container: &Element) -> BarChart;
}
