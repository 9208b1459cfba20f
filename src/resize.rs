//! Container resize notifications as a composable capability.
//!
//! The component subscribes to its own container rather than inheriting
//! resize behavior; dropping the subscription unsubscribes.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, ResizeObserver};

/// Live subscription to one element's box-size changes.
pub struct ResizeSubscription {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_resize` every time `target`'s box changes size. Notifications
/// are not coalesced; each one is delivered as-is.
pub fn observe(
    target: &Element,
    on_resize: impl FnMut() + 'static,
) -> Result<ResizeSubscription, JsValue> {
    let callback = Closure::<dyn FnMut()>::new(on_resize);
    let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
    observer.observe(target);
    Ok(ResizeSubscription {
        observer,
        _callback: callback,
    })
}
