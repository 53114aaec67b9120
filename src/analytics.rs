use log::debug;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Object, Reflect};

fn global_fn(name: &str) -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Reports an event to Plausible and GA4 when their snippets are loaded.
/// Missing providers and provider errors are ignored.
pub fn track<P: Serialize>(name: &str, props: &P) {
    let props = match serde_wasm_bindgen::to_value(props) {
        Ok(props) => props,
        Err(e) => {
            debug!("analytics props for {} not serializable: {}", name, e);
            return;
        }
    };
    let event = JsValue::from_str(name);

    if let Some(plausible) = global_fn("plausible") {
        let options = Object::new();
        if Reflect::set(&options, &JsValue::from_str("props"), &props).is_ok() {
            let _ = plausible.call2(&JsValue::NULL, &event, &options);
        }
    }
    if let Some(gtag) = global_fn("gtag") {
        let _ = gtag.call3(&JsValue::NULL, &JsValue::from_str("event"), &event, &props);
    }
}
