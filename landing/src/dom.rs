// Small DOM helpers shared by the sections

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};

/// Smooth-scroll to the element with `id`, if present.
pub fn scroll_to(id: &str) {
    let Some(target) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        warn!(id, "scroll target missing");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Call `on_visible` the first time `target` is at least `threshold` visible.
///
/// Returns the observer so the caller can disconnect it on cleanup. Without
/// IntersectionObserver support the callback runs immediately.
pub fn observe_once(
    target: &Element,
    threshold: f64,
    on_visible: impl FnOnce() + 'static,
) -> Option<IntersectionObserver> {
    let pending = Rc::new(RefCell::new(Some(on_visible)));

    let fire = Rc::clone(&pending);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if visible {
                observer.disconnect();
                if let Some(on_visible) = fire.borrow_mut().take() {
                    on_visible();
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options);
    // The observer keeps calling back for the page's lifetime.
    callback.forget();

    match observer {
        Ok(observer) => {
            observer.observe(target);
            Some(observer)
        }
        Err(err) => {
            warn!(?err, "IntersectionObserver unavailable, revealing immediately");
            if let Some(on_visible) = pending.borrow_mut().take() {
                on_visible();
            }
            None
        }
    }
}

/// Calendar year according to the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
