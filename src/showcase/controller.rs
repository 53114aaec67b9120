use std::rc::Rc;

use log::debug;

use super::language::DemoLanguage;
use super::media::{MediaEvent, MediaSurface};
use super::schedule::Scheduler;
use super::swap::{self, LoadedTrack, SwapQueue};
use super::volume;

/// Drives the media element once the player is mounted: start, language
/// swaps, and keeping the volume pinned.
///
/// Everything deferred (swap steps, the next-turn volume write) is held as
/// scheduler handles inside the controller, so dropping the controller on
/// unmount cancels all of it.
pub struct MediaController<M: MediaSurface, S: Scheduler> {
    media: M,
    scheduler: S,
    requested: DemoLanguage,
    track: Rc<LoadedTrack>,
    swap: Option<SwapQueue<S::Handle>>,
    volume_recheck: Option<S::Handle>,
}

impl<M, S> MediaController<M, S>
where
    M: MediaSurface + Clone + 'static,
    S: Scheduler,
{
    /// Loads `language` as a muted, looping teaser and starts it.
    pub fn new(media: M, scheduler: S, language: DemoLanguage) -> Self {
        media.set_muted(true);
        media.set_looping(true);
        media.set_source(&language.source_url());
        let mut controller = Self {
            media,
            scheduler,
            requested: language,
            track: Rc::new(LoadedTrack::new(language)),
            swap: None,
            volume_recheck: None,
        };
        controller.normalize_volume();
        if let Err(err) = controller.media.play() {
            debug!("teaser autoplay not allowed, showing poster: {}", err);
        }
        controller
    }

    /// Language whose source is on the element right now.
    pub fn loaded(&self) -> DemoLanguage {
        self.track.language.get()
    }

    /// Language of the most recent `switch_language` call.
    pub fn requested(&self) -> DemoLanguage {
        self.requested
    }

    pub fn start(&mut self) {
        self.media.set_looping(false);
        self.media.set_muted(false);
        self.normalize_volume();
        if let Err(err) = self.media.play() {
            debug!("autoplay not allowed, waiting for native controls: {}", err);
        }
    }

    /// Hot-swaps the audio language and returns the position the new source
    /// resumes from. A newer call cancels the unfinished steps of an older one.
    pub fn switch_language(&mut self, language: DemoLanguage) -> f64 {
        let position = self.media.current_time();
        self.requested = language;
        // Release the previous swap before its replacement touches the element.
        // An unfired load goes with it, so compare against what is loaded now.
        self.swap = None;
        let target = (language != self.track.language.get()).then_some(language);
        self.swap = Some(SwapQueue::run(
            &self.scheduler,
            &self.media,
            &self.track,
            swap::plan(position, target),
        ));
        position
    }

    pub fn on_media_event(&mut self, event: MediaEvent) {
        if event == MediaEvent::LoadedMetadata {
            if let Some(position) = self.track.pending_seek.take() {
                self.media.set_current_time(position);
            }
        }
        self.normalize_volume();
    }

    /// Pins the volume now and once more on the next turn of the event loop,
    /// after any late reset the browser applies during loading.
    fn normalize_volume(&mut self) {
        volume::pin(&self.media);
        let media = self.media.clone();
        self.volume_recheck = Some(self.scheduler.after(
            0,
            Box::new(move || {
                volume::pin(&media);
            }),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::testing::{FakeMedia, ManualTimers};
    use crate::showcase::volume::PINNED_VOLUME;

    fn mounted(language: DemoLanguage) -> (FakeMedia, ManualTimers, MediaController<FakeMedia, ManualTimers>) {
        let media = FakeMedia::default();
        media.nudge_volume(1.0);
        let timers = ManualTimers::default();
        let controller = MediaController::new(media.clone(), timers.clone(), language);
        (media, timers, controller)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn mounting_loads_the_selected_language_muted() {
        let (media, _timers, controller) = mounted(DemoLanguage::Spanish);
        assert_eq!(media.source(), "/demo/es.mp4");
        assert!(media.muted());
        assert!(media.looping());
        assert_eq!(media.volume(), PINNED_VOLUME);
        assert_eq!(controller.loaded(), DemoLanguage::Spanish);
        assert_eq!(media.play_calls(), 1);
    }

    #[test]
    fn blocked_teaser_autoplay_is_swallowed() {
        let media = FakeMedia::default();
        media.reject_play(true);
        let controller = MediaController::new(media.clone(), ManualTimers::default(), DemoLanguage::English);
        assert_eq!(media.play_calls(), 1);
        assert_eq!(controller.loaded(), DemoLanguage::English);
    }

    #[test]
    fn start_unmutes_and_attempts_playback() {
        let (media, _timers, mut controller) = mounted(DemoLanguage::English);
        controller.start();
        assert!(!media.muted());
        assert!(!media.looping());
        assert_eq!(media.play_calls(), 2);
        assert_eq!(media.volume(), PINNED_VOLUME);
    }

    #[test]
    fn rejected_autoplay_is_swallowed() {
        let (media, _timers, mut controller) = mounted(DemoLanguage::English);
        media.reject_play(true);
        controller.start();
        assert_eq!(media.play_calls(), 2);
        assert!(!media.muted());
    }

    #[test]
    fn media_events_pin_volume_for_every_source() {
        for language in DemoLanguage::ALL {
            let (media, timers, mut controller) = mounted(DemoLanguage::English);
            controller.switch_language(language);
            timers.advance(350);
            for event in MediaEvent::ALL {
                media.nudge_volume(0.9);
                controller.on_media_event(event);
                assert_eq!(media.volume(), PINNED_VOLUME, "{:?} on {:?}", event, language);
            }
        }
    }

    #[test]
    fn late_reset_is_caught_on_next_turn() {
        let (media, timers, mut controller) = mounted(DemoLanguage::English);
        controller.on_media_event(MediaEvent::LoadedMetadata);
        // The browser resets volume after the handler returned.
        media.nudge_volume(1.0);
        timers.advance(0);
        assert_eq!(media.volume(), PINNED_VOLUME);
    }

    #[test]
    fn swap_preserves_position_for_every_language() {
        for language in DemoLanguage::ALL {
            let (media, timers, mut controller) = mounted(DemoLanguage::English);
            controller.start();
            media.set_current_time(12.3);
            let resumed_from = controller.switch_language(language);
            timers.advance(350);
            assert!(close(resumed_from, 12.3));
            assert!(close(media.current_time(), 12.3), "{:?}", language);
            assert_eq!(media.source(), language.source_url());
        }
    }

    #[test]
    fn swap_to_secondary_scenario() {
        let (media, timers, mut controller) = mounted(DemoLanguage::English);
        controller.start();
        media.set_current_time(12.3);
        controller.switch_language(DemoLanguage::Russian);
        assert_eq!(media.opacity(), 0.0);

        timers.advance(349);
        assert_eq!(media.opacity(), 0.0);
        timers.advance(1);
        assert_eq!(media.source(), "/demo/ru.mp4");
        assert!(close(media.current_time(), 12.3));
        assert_eq!(media.volume(), PINNED_VOLUME);
        assert_eq!(media.opacity(), 1.0);
    }

    #[test]
    fn metadata_reapplies_dropped_seek() {
        let (media, timers, mut controller) = mounted(DemoLanguage::English);
        media.set_current_time(30.0);
        controller.switch_language(DemoLanguage::Spanish);
        timers.advance(250);
        // A runtime that ignores seeks before metadata lands at zero.
        media.set_current_time(0.0);
        controller.on_media_event(MediaEvent::LoadedMetadata);
        assert!(close(media.current_time(), 30.0));

        // Consumed: later metadata events leave the position alone.
        media.set_current_time(45.0);
        controller.on_media_event(MediaEvent::LoadedMetadata);
        assert!(close(media.current_time(), 45.0));
    }

    #[test]
    fn reselecting_active_language_keeps_source() {
        let (media, timers, mut controller) = mounted(DemoLanguage::English);
        controller.start();
        media.set_current_time(5.0);
        controller.switch_language(DemoLanguage::English);
        assert_eq!(media.opacity(), 0.0);
        timers.advance(350);
        assert_eq!(media.loads(), 1);
        assert!(close(media.current_time(), 5.0));
        assert_eq!(media.opacity(), 1.0);
        assert_eq!(media.play_calls(), 3);
    }

    #[test]
    fn second_switch_within_50ms_wins() {
        let (media, timers, mut controller) = mounted(DemoLanguage::English);
        controller.start();
        media.set_current_time(8.0);
        controller.switch_language(DemoLanguage::Russian);
        timers.advance(50);
        controller.switch_language(DemoLanguage::Spanish);
        timers.advance(1_000);

        assert_eq!(controller.loaded(), DemoLanguage::Spanish);
        assert_eq!(media.source(), "/demo/es.mp4");
        assert_eq!(media.loads(), 2);
        assert!(close(media.current_time(), 8.0));
        assert_eq!(media.opacity(), 1.0);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn repeated_switch_to_same_language_still_loads_it() {
        let (media, timers, mut controller) = mounted(DemoLanguage::English);
        controller.start();
        media.set_current_time(8.0);
        controller.switch_language(DemoLanguage::Russian);
        timers.advance(50);
        controller.switch_language(DemoLanguage::Russian);
        assert_eq!(controller.requested(), DemoLanguage::Russian);
        assert_eq!(controller.loaded(), DemoLanguage::English);
        timers.advance(1_000);

        assert_eq!(controller.loaded(), DemoLanguage::Russian);
        assert_eq!(media.source(), "/demo/ru.mp4");
        assert_eq!(media.loads(), 2);
        assert!(close(media.current_time(), 8.0));
        assert_eq!(media.opacity(), 1.0);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn switch_after_load_to_same_language_keeps_source() {
        let (media, timers, mut controller) = mounted(DemoLanguage::English);
        controller.start();
        media.set_current_time(8.0);
        controller.switch_language(DemoLanguage::Russian);
        timers.advance(300);
        controller.switch_language(DemoLanguage::Russian);
        timers.advance(1_000);

        assert_eq!(media.source(), "/demo/ru.mp4");
        assert_eq!(media.loads(), 2);
        assert!(close(media.current_time(), 8.0));
        assert_eq!(media.opacity(), 1.0);
    }

    #[test]
    fn switching_back_before_load_keeps_original_source() {
        let (media, timers, mut controller) = mounted(DemoLanguage::English);
        controller.start();
        media.set_current_time(6.0);
        controller.switch_language(DemoLanguage::Spanish);
        timers.advance(100);
        controller.switch_language(DemoLanguage::English);
        timers.advance(1_000);

        assert_eq!(controller.loaded(), DemoLanguage::English);
        assert_eq!(media.source(), "/demo/en.mp4");
        assert_eq!(media.loads(), 1);
        assert!(close(media.current_time(), 6.0));
        assert_eq!(media.opacity(), 1.0);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn switching_back_after_load_restores_original_source() {
        let (media, timers, mut controller) = mounted(DemoLanguage::English);
        controller.start();
        media.set_current_time(6.0);
        controller.switch_language(DemoLanguage::Spanish);
        timers.advance(260);
        controller.switch_language(DemoLanguage::English);
        timers.advance(1_000);

        assert_eq!(controller.loaded(), DemoLanguage::English);
        assert_eq!(media.source(), "/demo/en.mp4");
        assert_eq!(media.loads(), 3);
        assert!(close(media.current_time(), 6.0));
    }

    #[test]
    fn dropping_controller_cancels_pending_work() {
        let (media, timers, mut controller) = mounted(DemoLanguage::English);
        media.set_current_time(3.0);
        controller.switch_language(DemoLanguage::Russian);
        assert!(timers.pending() > 0);
        drop(controller);
        assert_eq!(timers.pending(), 0);
        timers.advance(1_000);
        assert_eq!(media.source(), "/demo/en.mp4");
        assert_eq!(timers.now(), 1_000);
    }
}
