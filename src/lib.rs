//! Google Charts as a Leptos component.
//!
//! [`chart::GoogleChart`] adapts the Google Charts JS engine into a
//! declarative element: set a chart type, optional tabular data and style
//! options, and the component lazily loads the engine, dispatches to the
//! right chart constructor and redraws when inputs or the container size
//! change. The engine itself (rendering, scales, animation) stays on the JS
//! side; this crate only decides *what* to draw and *when*.

pub mod app;
pub mod chart;
pub mod config;
pub mod engine;
pub mod google_bindings;
pub mod resize;
