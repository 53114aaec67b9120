use log::debug;
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlMediaElement, HtmlVideoElement};

#[derive(Debug, Error, PartialEq)]
pub enum MediaError {
    #[error("media element is no longer attached")]
    Detached,
    #[error("playback was rejected: {0}")]
    PlayRejected(String),
}

impl From<JsValue> for MediaError {
    fn from(value: JsValue) -> Self {
        MediaError::PlayRejected(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Events the controller listens to on the media element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    LoadedMetadata,
    LoadedData,
    VolumeChange,
}

impl MediaEvent {
    pub const ALL: [MediaEvent; 3] = [
        MediaEvent::LoadedMetadata,
        MediaEvent::LoadedData,
        MediaEvent::VolumeChange,
    ];

    pub fn dom_name(self) -> &'static str {
        match self {
            MediaEvent::LoadedMetadata => "loadedmetadata",
            MediaEvent::LoadedData => "loadeddata",
            MediaEvent::VolumeChange => "volumechange",
        }
    }
}

/// The slice of `HTMLMediaElement` the player needs.
pub trait MediaSurface {
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    fn volume(&self) -> f64;
    fn set_volume(&self, volume: f64);
    fn set_muted(&self, muted: bool);
    fn set_looping(&self, looping: bool);
    fn source(&self) -> String;
    /// Assigns a new source and asks the element to reload it.
    fn set_source(&self, url: &str);
    fn set_opacity(&self, opacity: f64);
    /// Starts playback. Rejections that arrive asynchronously are swallowed
    /// by the implementation; only synchronous failures are returned.
    fn play(&self) -> Result<(), MediaError>;
}

impl MediaSurface for HtmlVideoElement {
    fn current_time(&self) -> f64 {
        HtmlMediaElement::current_time(self)
    }

    fn set_current_time(&self, seconds: f64) {
        HtmlMediaElement::set_current_time(self, seconds);
    }

    fn volume(&self) -> f64 {
        HtmlMediaElement::volume(self)
    }

    fn set_volume(&self, volume: f64) {
        HtmlMediaElement::set_volume(self, volume);
    }

    fn set_muted(&self, muted: bool) {
        HtmlMediaElement::set_muted(self, muted);
    }

    fn set_looping(&self, looping: bool) {
        self.set_loop(looping);
    }

    fn source(&self) -> String {
        self.src()
    }

    fn set_source(&self, url: &str) {
        self.set_src(url);
        self.load();
    }

    fn set_opacity(&self, opacity: f64) {
        if let Err(err) = self.style().set_property("opacity", &opacity.to_string()) {
            debug!("could not set opacity {}: {:?}", opacity, err);
        }
    }

    fn play(&self) -> Result<(), MediaError> {
        if !self.is_connected() {
            return Err(MediaError::Detached);
        }
        let promise = HtmlMediaElement::play(self)?;
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                debug!("{}", MediaError::from(err));
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_match_dom() {
        let names: Vec<_> = MediaEvent::ALL.iter().map(|e| e.dom_name()).collect();
        assert_eq!(names, ["loadedmetadata", "loadeddata", "volumechange"]);
    }

    #[test]
    fn errors_render_readably() {
        assert_eq!(
            MediaError::PlayRejected("NotAllowedError".into()).to_string(),
            "playback was rejected: NotAllowedError"
        );
        assert_eq!(MediaError::Detached.to_string(), "media element is no longer attached");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn video() -> HtmlVideoElement {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("video").ok())
            .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
            .expect("video element")
    }

    #[wasm_bindgen_test]
    fn detached_element_refuses_to_play() {
        assert_eq!(MediaSurface::play(&video()), Err(MediaError::Detached));
    }

    #[wasm_bindgen_test]
    fn volume_and_opacity_reach_the_element() {
        let video = video();
        MediaSurface::set_volume(&video, 0.4);
        assert!((MediaSurface::volume(&video) - 0.4).abs() < 1e-6);
        video.set_opacity(0.0);
        assert_eq!(video.style().get_property_value("opacity").ok().as_deref(), Some("0"));
    }
}
