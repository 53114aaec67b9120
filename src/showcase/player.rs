use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use super::controller::MediaController;
use super::language::DemoLanguage;
use super::listener::EventSubscription;
use super::media::MediaEvent;
use super::schedule::BrowserTimers;
use super::state::{PlaybackAction, PlaybackState, Stage};
use super::visibility::use_visibility_gate;
use crate::components::language_slider::LanguageSlider;
use crate::config;

type BrowserController = MediaController<HtmlVideoElement, BrowserTimers>;

/// Controller plus the media-event listeners feeding it. Dropping this tears
/// down both, so nothing touches a detached element.
struct MountedPlayer {
    controller: Rc<RefCell<BrowserController>>,
    _subscriptions: Vec<EventSubscription>,
}

impl MountedPlayer {
    fn attach(video: HtmlVideoElement, language: DemoLanguage) -> Self {
        let controller = Rc::new(RefCell::new(MediaController::new(
            video.clone(),
            BrowserTimers,
            language,
        )));
        let mut subscriptions = Vec::with_capacity(MediaEvent::ALL.len());
        for event in MediaEvent::ALL {
            let controller = controller.clone();
            let subscription = EventSubscription::new(&video, event.dom_name(), move |_| {
                if let Ok(mut controller) = controller.try_borrow_mut() {
                    controller.on_media_event(event);
                }
            });
            match subscription {
                Ok(subscription) => subscriptions.push(subscription),
                Err(err) => warn!("could not listen for {}: {:?}", event.dom_name(), err),
            }
        }
        Self {
            controller,
            _subscriptions: subscriptions,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MediaSwitcherProps {
    #[prop_or_default]
    pub on_language_change: Callback<DemoLanguage>,
}

#[function_component(MediaSwitcher)]
pub fn media_switcher(props: &MediaSwitcherProps) -> Html {
    let host_ref = use_node_ref();
    let video_ref = use_node_ref();
    let playback = use_reducer(PlaybackState::default);
    let player = use_mut_ref(|| None::<MountedPlayer>);

    {
        let playback = playback.clone();
        use_visibility_gate(
            host_ref.clone(),
            config::LAZY_MOUNT_MARGIN_PX,
            Callback::from(move |_| playback.dispatch(PlaybackAction::Mount)),
        );
    }

    // Attach once the real <video> exists; detach on unmount.
    {
        let video_ref = video_ref.clone();
        let player = player.clone();
        let language = playback.active_language;
        use_effect_with_deps(
            move |mounted: &bool| {
                if *mounted {
                    if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                        info!("Demo player mounted");
                        *player.borrow_mut() = Some(MountedPlayer::attach(video, language));
                    }
                }
                move || {
                    player.borrow_mut().take();
                }
            },
            playback.mounted,
        );
    }

    let on_start = {
        let playback = playback.clone();
        let player = player.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(player) = player.borrow().as_ref() {
                player.controller.borrow_mut().start();
            }
            playback.dispatch(PlaybackAction::Start);
        })
    };

    let on_select = {
        let playback = playback.clone();
        let player = player.clone();
        let on_language_change = props.on_language_change.clone();
        Callback::from(move |language: DemoLanguage| {
            // The indicator moves first and never waits on the media.
            playback.dispatch(PlaybackAction::SelectLanguage(language));
            on_language_change.emit(language);
            if let Some(player) = player.borrow().as_ref() {
                let position = player.controller.borrow_mut().switch_language(language);
                playback.dispatch(PlaybackAction::Position(position));
            }
        })
    };

    let stage = playback.stage();

    html! {
        <div ref={host_ref} class="media-switcher">
            {
                if stage == Stage::Unmounted {
                    html! { <div class="media-placeholder"></div> }
                } else {
                    html! {
                        <div class="media-frame">
                            <video
                                ref={video_ref}
                                class="media-video"
                                playsinline={true}
                                preload="metadata"
                                poster={config::DEMO_POSTER}
                                controls={stage == Stage::MountedPlaying}
                            />
                            if stage == Stage::MountedPlaying {
                                <div class="media-toolbar">
                                    <LanguageSlider
                                        active={playback.active_language}
                                        on_select={on_select}
                                    />
                                </div>
                            } else {
                                <div class="media-overlay">
                                    <button class="media-play" onclick={on_start}>
                                        {"Слушать демо (EN/RU/ES)"}
                                    </button>
                                </div>
                            }
                        </div>
                    }
                }
            }
            <style>
                {r#"
                .media-switcher {
                    width: 100%;
                }
                .media-placeholder {
                    aspect-ratio: 16 / 9;
                    border-radius: 1rem;
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    background: rgba(0, 0, 0, 0.8);
                }
                .media-frame {
                    position: relative;
                    border-radius: 1rem;
                    overflow: hidden;
                    background: #000;
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                }
                .dark .media-frame,
                .dark .media-placeholder {
                    border-color: rgba(255, 255, 255, 0.1);
                }
                .media-video {
                    display: block;
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    transition: opacity 250ms ease;
                }
                .media-toolbar {
                    position: absolute;
                    top: 0.75rem;
                    left: 0.75rem;
                    right: 0.75rem;
                    display: flex;
                    justify-content: flex-end;
                    pointer-events: none;
                }
                .media-toolbar > * {
                    pointer-events: auto;
                }
                .media-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .media-play {
                    border: none;
                    border-radius: 1rem;
                    background: #ea580c;
                    color: #fff;
                    padding: 0.75rem 1.25rem;
                    font-size: 1rem;
                    cursor: pointer;
                    box-shadow: 0 10px 25px rgba(234, 88, 12, 0.25);
                    transition: background 0.2s ease;
                }
                .media-play:hover {
                    background: #c2410c;
                }
                "#}
            </style>
        </div>
    }
}
