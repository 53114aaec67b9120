use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Latch that lets the first intersecting notification through and ignores
/// everything after it.
#[derive(Debug, Default)]
pub struct OneShot {
    fired: Cell<bool>,
}

impl OneShot {
    pub fn fire(&self, intersecting: bool) -> bool {
        if intersecting && !self.fired.get() {
            self.fired.set(true);
            true
        } else {
            false
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

struct Gate {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl Drop for Gate {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(host: &NodeRef, margin_px: u32, on_visible: Callback<()>) -> Option<Gate> {
    let element = host.cast::<web_sys::Element>()?;
    let latch = Rc::new(OneShot::default());
    let observer_slot: Rc<Cell<Option<IntersectionObserver>>> = Rc::new(Cell::new(None));

    let callback = {
        let latch = latch.clone();
        let observer_slot = observer_slot.clone();
        let on_visible = on_visible.clone();
        Closure::wrap(Box::new(move |entries: Array| {
            let intersecting = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if latch.fire(intersecting) {
                if let Some(observer) = observer_slot.take() {
                    observer.disconnect();
                }
                on_visible.emit(());
            }
        }) as Box<dyn FnMut(Array)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&format!("{}px", margin_px));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            observer_slot.set(Some(observer.clone()));
            Some(Gate { observer, _callback: callback })
        }
        Err(err) => {
            // No IntersectionObserver: mount right away.
            warn!("lazy mount unavailable, mounting eagerly: {:?}", err);
            on_visible.emit(());
            None
        }
    }
}

/// Calls `on_visible` once, when `host` comes within `margin_px` of the
/// viewport, then stops observing for good.
#[hook]
pub fn use_visibility_gate(host: NodeRef, margin_px: u32, on_visible: Callback<()>) {
    use_effect_with_deps(
        move |_| {
            let gate = observe_once(&host, margin_px, on_visible);
            move || drop(gate)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_exactly_once() {
        let latch = OneShot::default();
        assert!(!latch.fire(false));
        assert!(latch.fire(true));
        assert!(!latch.fire(true));
        assert!(!latch.fire(false));
        assert!(latch.has_fired());
    }
}
