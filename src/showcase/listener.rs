use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

/// An `addEventListener` registration that is removed when dropped.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn listener_is_removed_on_drop() {
        let target = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("div").ok())
            .expect("div element");
        let hits = Rc::new(Cell::new(0));

        let subscription = {
            let hits = hits.clone();
            EventSubscription::new(&target, "ping", move |_| hits.set(hits.get() + 1))
                .expect("subscribe")
        };
        let ping = || Event::new("ping").expect("event");

        target.dispatch_event(&ping()).expect("dispatch");
        assert_eq!(hits.get(), 1);

        drop(subscription);
        target.dispatch_event(&ping()).expect("dispatch");
        assert_eq!(hits.get(), 1);
    }
}
