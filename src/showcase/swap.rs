use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use super::language::DemoLanguage;
use super::media::MediaSurface;
use super::schedule::Scheduler;
use super::volume;
use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub enum SwapAction {
    FadeOut,
    /// `language` is `None` when the requested language is already loaded.
    Load { language: Option<DemoLanguage>, position: f64 },
    Resume,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwapStep {
    pub at_ms: u32,
    pub action: SwapAction,
}

/// Timeline of one language swap: fade out, reload at the saved position
/// once the element is hidden, then resume and fade back in.
pub fn plan(position: f64, language: Option<DemoLanguage>) -> Vec<SwapStep> {
    vec![
        SwapStep { at_ms: 0, action: SwapAction::FadeOut },
        SwapStep {
            at_ms: config::FADE_OUT_MS,
            action: SwapAction::Load { language, position },
        },
        SwapStep {
            at_ms: config::FADE_OUT_MS + config::RESUME_DELAY_MS,
            action: SwapAction::Resume,
        },
    ]
}

/// What the element actually holds. Only a `Load` step that has fired
/// changes `language`, so a swap cancelled before loading leaves it as is.
#[derive(Debug)]
pub struct LoadedTrack {
    pub language: Cell<DemoLanguage>,
    pub pending_seek: Cell<Option<f64>>,
}

impl LoadedTrack {
    pub fn new(language: DemoLanguage) -> Self {
        Self {
            language: Cell::new(language),
            pending_seek: Cell::new(None),
        }
    }
}

pub fn apply<M: MediaSurface>(media: &M, track: &LoadedTrack, action: SwapAction) {
    match action {
        SwapAction::FadeOut => media.set_opacity(0.0),
        SwapAction::Load { language, position } => {
            if let Some(language) = language {
                media.set_source(&language.source_url());
                track.language.set(language);
                // The reload may drop an early seek; reapplied on loadedmetadata.
                track.pending_seek.set(Some(position));
            }
            media.set_current_time(position);
            volume::pin(media);
        }
        SwapAction::Resume => {
            if let Err(err) = media.play() {
                debug!("resume after swap skipped: {}", err);
            }
            media.set_opacity(1.0);
        }
    }
}

/// Pending steps of a single swap. Dropping the queue cancels whatever has
/// not fired yet, so replacing it with a newer swap leaves only the newer
/// swap's steps alive.
pub struct SwapQueue<H> {
    pending: Vec<H>,
}

impl<H> SwapQueue<H> {
    pub fn run<S, M>(
        scheduler: &S,
        media: &M,
        track: &Rc<LoadedTrack>,
        steps: Vec<SwapStep>,
    ) -> Self
    where
        S: Scheduler<Handle = H>,
        M: MediaSurface + Clone + 'static,
    {
        let mut pending = Vec::with_capacity(steps.len());
        for step in steps {
            if step.at_ms == 0 {
                apply(media, track, step.action);
                continue;
            }
            let media = media.clone();
            let track = track.clone();
            pending.push(scheduler.after(
                step.at_ms,
                Box::new(move || apply(&media, &track, step.action)),
            ));
        }
        Self { pending }
    }

    pub fn scheduled(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::testing::{FakeMedia, ManualTimers};
    use crate::showcase::volume::PINNED_VOLUME;

    #[test]
    fn plan_ends_with_resume_after_fade_and_delay() {
        let steps = plan(3.0, None);
        assert_eq!(steps.first().map(|s| &s.action), Some(&SwapAction::FadeOut));
        let last = steps.last().expect("plan is never empty");
        assert_eq!(last.action, SwapAction::Resume);
        assert_eq!(last.at_ms, 350);
    }

    #[test]
    fn fade_out_runs_immediately() {
        let timers = ManualTimers::default();
        let media = FakeMedia::playing("/demo/en.mp4", 4.0);
        let track = Rc::new(LoadedTrack::new(DemoLanguage::English));
        let queue = SwapQueue::run(&timers, &media, &track, plan(4.0, Some(DemoLanguage::Russian)));
        assert_eq!(media.opacity(), 0.0);
        assert_eq!(queue.scheduled(), 2);
        assert_eq!(media.source(), "/demo/en.mp4");
    }

    #[test]
    fn load_restores_position_and_volume() {
        let timers = ManualTimers::default();
        let media = FakeMedia::playing("/demo/en.mp4", 12.3);
        media.set_volume(1.0);
        let track = Rc::new(LoadedTrack::new(DemoLanguage::English));
        let _queue = SwapQueue::run(&timers, &media, &track, plan(12.3, Some(DemoLanguage::Russian)));

        timers.advance(250);
        assert_eq!(media.source(), "/demo/ru.mp4");
        assert!((media.current_time() - 12.3).abs() < 1e-9);
        assert_eq!(media.volume(), PINNED_VOLUME);
        assert_eq!(track.pending_seek.get(), Some(12.3));
        assert_eq!(track.language.get(), DemoLanguage::Russian);
        assert_eq!(media.opacity(), 0.0);

        timers.advance(100);
        assert_eq!(media.opacity(), 1.0);
        assert_eq!(media.play_calls(), 1);
    }

    #[test]
    fn same_source_skips_reload_but_still_fades() {
        let timers = ManualTimers::default();
        let media = FakeMedia::playing("/demo/en.mp4", 7.0);
        let track = Rc::new(LoadedTrack::new(DemoLanguage::English));
        let _queue = SwapQueue::run(&timers, &media, &track, plan(7.0, None));
        timers.advance(350);
        assert_eq!(media.loads(), 1);
        assert_eq!(track.pending_seek.get(), None);
        assert_eq!(media.current_time(), 7.0);
        assert_eq!(media.opacity(), 1.0);
    }

    #[test]
    fn rejected_play_still_fades_back_in() {
        let timers = ManualTimers::default();
        let media = FakeMedia::playing("/demo/en.mp4", 1.0);
        media.reject_play(true);
        let track = Rc::new(LoadedTrack::new(DemoLanguage::English));
        let _queue = SwapQueue::run(&timers, &media, &track, plan(1.0, Some(DemoLanguage::Spanish)));
        timers.advance(350);
        assert_eq!(media.opacity(), 1.0);
        assert_eq!(media.source(), "/demo/es.mp4");
    }

    #[test]
    fn dropping_queue_cancels_remaining_steps() {
        let timers = ManualTimers::default();
        let media = FakeMedia::playing("/demo/en.mp4", 2.0);
        let track = Rc::new(LoadedTrack::new(DemoLanguage::English));
        let queue = SwapQueue::run(&timers, &media, &track, plan(2.0, Some(DemoLanguage::Russian)));
        drop(queue);
        timers.advance(1_000);
        assert_eq!(media.source(), "/demo/en.mp4");
        assert_eq!(track.language.get(), DemoLanguage::English);
        assert_eq!(media.play_calls(), 0);
    }
}
