use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const ROOT_MARGIN: &str = "-20% 0px -60% 0px";
const THRESHOLDS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Id of the intersecting section with the largest visible ratio.
pub fn most_visible<'a, I>(entries: I) -> Option<String>
where
    I: IntoIterator<Item = (&'a str, bool, f64)>,
{
    entries
        .into_iter()
        .filter(|(_, intersecting, _)| *intersecting)
        .max_by(|a, b| a.2.total_cmp(&b.2))
        .map(|(id, _, _)| id.to_string())
}

/// Tracks which of `section_ids` is currently most in view.
#[hook]
pub fn use_scroll_spy(section_ids: &'static [&'static str]) -> Option<String> {
    let active = use_state(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(move |entries: Array| {
                    let entries: Vec<IntersectionObserverEntry> = entries
                        .iter()
                        .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                        .collect();
                    let ids: Vec<String> = entries.iter().map(|e| e.target().id()).collect();
                    let best = most_visible(
                        entries
                            .iter()
                            .zip(ids.iter())
                            .map(|(e, id)| (id.as_str(), e.is_intersecting(), e.intersection_ratio())),
                    );
                    if best.is_some() {
                        active.set(best);
                    }
                }) as Box<dyn FnMut(Array)>);

                let options = IntersectionObserverInit::new();
                options.set_root_margin(ROOT_MARGIN);
                let thresholds: Array = THRESHOLDS.iter().map(|t| JsValue::from_f64(*t)).collect();
                options.set_threshold(&thresholds);

                let observer = match IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(observer) => {
                        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                            for id in section_ids {
                                if let Some(section) = document.get_element_by_id(id) {
                                    observer.observe(&section);
                                }
                            }
                        }
                        Some(observer)
                    }
                    Err(err) => {
                        warn!("scroll spy disabled: {:?}", err);
                        None
                    }
                };

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

    (*active).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_largest_intersecting_ratio() {
        let entries = [("services", true, 0.25), ("process", true, 0.75), ("faq", false, 1.0)];
        assert_eq!(most_visible(entries), Some("process".to_string()));
    }

    #[test]
    fn nothing_intersecting_keeps_previous() {
        let entries = [("services", false, 0.0)];
        assert_eq!(most_visible(entries), None);
    }
}
