use yew::prelude::*;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry};
use log::warn;

/// Elements that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str =
    ".prop-card, .step-item, .float-card, .profit-calculator, .trader-card";
pub const VISIBLE_CLASS: &str = "visible";

/// One shared observer for the whole page. A revealed element stays revealed.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        |_| {
            let callback = Closure::wrap(Box::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        let _ = target.class_list().add_1(VISIBLE_CLASS);
                        observer.unobserve(&target);
                    }
                },
            ) as Box<dyn FnMut(Array, IntersectionObserver)>);

            let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
                Ok(observer) => Some(observer),
                Err(e) => {
                    warn!("IntersectionObserver unavailable: {:?}", e);
                    None
                }
            };

            if let (Some(observer), Some(document)) =
                (observer.as_ref(), window().and_then(|w| w.document()))
            {
                if let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) {
                    for i in 0..nodes.length() {
                        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                            observer.observe(&element);
                        }
                    }
                }
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        },
        (),
    );
}
