use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::reveal::state::RevealState;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Tracks whether the element behind `node` has been scrolled into view.
///
/// The browser pushes intersection changes; each one is fed through a
/// [`RevealState`], so duplicate notifications never re-render. With `once`
/// the observer disconnects as soon as the element latches visible.
#[hook]
pub fn use_in_view(node: NodeRef, once: bool, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, once, threshold)| {
                let mut active: Option<(IntersectionObserver, ObserverCallback)> = None;

                if let Some(element) = node.cast::<Element>() {
                    let state = Rc::new(RefCell::new(RevealState::new(*once, *threshold)));
                    let on_change = visible.clone();
                    let callback: ObserverCallback = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            let mut state = state.borrow_mut();
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if let Some(now_visible) =
                                    state.observe(entry.is_intersecting(), entry.intersection_ratio())
                                {
                                    on_change.set(now_visible);
                                }
                            }
                            if state.is_settled() {
                                observer.disconnect();
                            }
                        },
                    )
                        as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let mut options = IntersectionObserverInit::new();
                    options.threshold(&JsValue::from_f64(threshold.clamp(0.0, 1.0)));

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            active = Some((observer, callback));
                        }
                        Err(e) => {
                            warn!("IntersectionObserver unavailable, showing element immediately: {:?}", e);
                            visible.set(true);
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = active {
                        observer.disconnect();
                    }
                }
            },
            (node, once, threshold),
        );
    }

    *visible
}
