use std::rc::Rc;

use yew::Reducible;

use super::language::DemoLanguage;
use super::volume::PINNED_VOLUME;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Unmounted,
    MountedIdle,
    MountedPlaying,
}

/// UI-side view of the demo player. The media element itself is driven by
/// the controller; this only tracks what the widget shows.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub mounted: bool,
    pub started: bool,
    pub active_language: DemoLanguage,
    pub current_time: f64,
    pub volume: f64,
    pub muted: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            mounted: false,
            started: false,
            active_language: DemoLanguage::default(),
            current_time: 0.0,
            volume: PINNED_VOLUME,
            muted: true,
        }
    }
}

pub enum PlaybackAction {
    Mount,
    Start,
    SelectLanguage(DemoLanguage),
    Position(f64),
}

impl PlaybackState {
    pub fn stage(&self) -> Stage {
        match (self.mounted, self.started) {
            (false, _) => Stage::Unmounted,
            (true, false) => Stage::MountedIdle,
            (true, true) => Stage::MountedPlaying,
        }
    }

    fn apply(&mut self, action: PlaybackAction) {
        match action {
            PlaybackAction::Mount => self.mounted = true,
            PlaybackAction::Start => {
                // Starting is only reachable from the idle overlay.
                if self.mounted {
                    self.started = true;
                    self.muted = false;
                    self.volume = PINNED_VOLUME;
                }
            }
            PlaybackAction::SelectLanguage(language) => self.active_language = language,
            PlaybackAction::Position(seconds) => self.current_time = seconds.max(0.0),
        }
    }
}

impl Reducible for PlaybackState {
    type Action = PlaybackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(actions: Vec<PlaybackAction>) -> Rc<PlaybackState> {
        actions
            .into_iter()
            .fold(Rc::new(PlaybackState::default()), |state, action| state.reduce(action))
    }

    #[test]
    fn intersection_mounts_idle_player() {
        let state = reduce_all(vec![PlaybackAction::Mount]);
        assert!(state.mounted);
        assert_eq!(state.stage(), Stage::MountedIdle);
    }

    #[test]
    fn start_before_mount_is_ignored() {
        let state = reduce_all(vec![PlaybackAction::Start]);
        assert_eq!(state.stage(), Stage::Unmounted);
    }

    #[test]
    fn start_is_idempotent() {
        let once = reduce_all(vec![PlaybackAction::Mount, PlaybackAction::Start]);
        let twice = once.clone().reduce(PlaybackAction::Start);
        assert_eq!(once.stage(), Stage::MountedPlaying);
        assert!(Rc::ptr_eq(&once, &twice));
        assert!(!twice.muted);
        assert_eq!(twice.volume, PINNED_VOLUME);
    }

    #[test]
    fn language_switch_keeps_playing_stage() {
        let state = reduce_all(vec![
            PlaybackAction::Mount,
            PlaybackAction::Start,
            PlaybackAction::Position(12.3),
            PlaybackAction::SelectLanguage(DemoLanguage::Russian),
        ]);
        assert_eq!(state.stage(), Stage::MountedPlaying);
        assert_eq!(state.active_language, DemoLanguage::Russian);
        assert_eq!(state.current_time, 12.3);
    }

    #[test]
    fn last_selection_wins() {
        let state = reduce_all(vec![
            PlaybackAction::Mount,
            PlaybackAction::Start,
            PlaybackAction::SelectLanguage(DemoLanguage::Russian),
            PlaybackAction::SelectLanguage(DemoLanguage::Spanish),
        ]);
        assert_eq!(state.active_language, DemoLanguage::Spanish);
    }
}
