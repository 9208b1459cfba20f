//! The `GoogleChart` component: declarative props in, engine draws out.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::*;
use serde_json::Value;

use crate::config::{resolve, ChartConfig, Rows};
use crate::engine::{ActiveChart, Engine};
use crate::resize;

static CONTAINER_SEQ: AtomicUsize = AtomicUsize::new(0);

fn next_container_id() -> String {
    let n = CONTAINER_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("google-chart-{n}")
}

/// The single live chart instance, if one has been drawn yet.
#[derive(Clone, Default)]
struct ChartSlot(Rc<RefCell<Option<ActiveChart>>>);

impl ChartSlot {
    fn put(&self, chart: ActiveChart) {
        *self.0.borrow_mut() = Some(chart);
    }

    /// Redraws the stored chart with its last data and options. Returns
    /// false (a no-op) until the first draw has happened.
    fn redraw(&self) -> bool {
        match &*self.0.borrow() {
            Some(chart) => {
                chart.redraw();
                true
            }
            None => false,
        }
    }
}

/// Declarative chart element.
///
/// Give it a chart type, optional tabular data and style options; it lazily
/// loads the engine through the shared handle, dispatches to the matching
/// chart constructor and redraws whenever an input or the container size
/// changes. Draw failures are logged and skipped, never surfaced.
#[component]
pub fn GoogleChart(
    /// Shared engine handle; the host constructs one and hands it to every chart.
    engine: Engine,
    /// Chart heading; empty for none.
    #[prop(optional, into)]
    title: MaybeSignal<String>,
    /// One of the supported variants; anything else draws as a line chart.
    #[prop(optional, into)]
    chart_type: MaybeSignal<String>,
    /// Tabular rows, header row first. The built-in placeholder is used when absent.
    #[prop(optional, into)]
    data: MaybeSignal<Option<Rows>>,
    /// Style overrides merged over the component defaults.
    #[prop(optional, into)]
    options: MaybeSignal<Option<Value>>,
) -> impl IntoView {
    let container_id = next_container_id();
    let slot = ChartSlot::default();

    // first ready: ask for the engine on the next frame; the draw effect
    // below keys off the loaded flag flipping
    {
        let engine = engine.clone();
        request_animation_frame(move || engine.ensure_loaded());
    }

    // container resize redraws the live chart with its stored data/options;
    // before any chart exists the notification is a no-op
    let subscription = Rc::new(RefCell::new(None));
    {
        let id = container_id.clone();
        let slot = slot.clone();
        let subscription = Rc::clone(&subscription);
        create_effect(move |_| {
            if subscription.borrow().is_some() {
                return;
            }
            let Some(target) = document().get_element_by_id(&id) else {
                return;
            };
            let redraw_slot = slot.clone();
            match resize::observe(&target, move || {
                redraw_slot.redraw();
            }) {
                Ok(sub) => *subscription.borrow_mut() = Some(sub),
                Err(err) => log::warn!("resize notifications unavailable: {err:?}"),
            }
            // re-attach with a live instance redraws immediately
            slot.redraw();
        });
    }
    {
        let subscription = Rc::clone(&subscription);
        on_cleanup(move || {
            subscription.borrow_mut().take();
        });
    }

    // every input change, and the load completing, lands here
    {
        let id = container_id.clone();
        let slot = slot.clone();
        let engine = engine.clone();
        create_effect(move |_| {
            if !engine.is_loaded() {
                return;
            }
            let title = title.get();
            let config = ChartConfig {
                title: (!title.is_empty()).then_some(title),
                chart_type: chart_type.get(),
                data: data.get(),
                options: options.get(),
            };
            match engine.draw(&id, &resolve(&config)) {
                Ok(chart) => slot.put(chart),
                Err(err) => log::warn!("chart draw skipped: {err}"),
            }
        });
    }

    view! { <div class="google-chart" id=container_id></div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_redraw_is_a_no_op_before_any_chart_exists() {
        let slot = ChartSlot::default();
        assert!(!slot.redraw());
    }

    #[test]
    fn container_ids_are_unique_per_instance() {
        assert_ne!(next_container_id(), next_container_id());
    }
}
