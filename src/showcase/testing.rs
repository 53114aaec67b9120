//! In-memory stand-ins for the media element and browser timers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::media::{MediaError, MediaSurface};
use super::schedule::Scheduler;

#[derive(Default)]
struct MediaInner {
    source: RefCell<String>,
    current_time: Cell<f64>,
    volume: Cell<f64>,
    volume_writes: Cell<u32>,
    muted: Cell<bool>,
    looping: Cell<bool>,
    opacity: Cell<f64>,
    loads: Cell<u32>,
    play_calls: Cell<u32>,
    reject_play: Cell<bool>,
}

/// Behaves like a loaded `<video>`: reloading resets the position to zero.
#[derive(Clone, Default)]
pub struct FakeMedia(Rc<MediaInner>);

impl FakeMedia {
    pub fn playing(source: &str, position: f64) -> Self {
        let media = FakeMedia::default();
        media.set_source(source);
        media.0.current_time.set(position);
        media.0.volume.set(1.0);
        media.0.opacity.set(1.0);
        media
    }

    pub fn opacity(&self) -> f64 {
        self.0.opacity.get()
    }

    pub fn muted(&self) -> bool {
        self.0.muted.get()
    }

    pub fn looping(&self) -> bool {
        self.0.looping.get()
    }

    pub fn loads(&self) -> u32 {
        self.0.loads.get()
    }

    pub fn play_calls(&self) -> u32 {
        self.0.play_calls.get()
    }

    pub fn volume_writes(&self) -> u32 {
        self.0.volume_writes.get()
    }

    pub fn reject_play(&self, reject: bool) {
        self.0.reject_play.set(reject);
    }

    /// Simulates the browser or the user changing the volume.
    pub fn nudge_volume(&self, volume: f64) {
        self.0.volume.set(volume);
    }
}

impl MediaSurface for FakeMedia {
    fn current_time(&self) -> f64 {
        self.0.current_time.get()
    }

    fn set_current_time(&self, seconds: f64) {
        self.0.current_time.set(seconds);
    }

    fn volume(&self) -> f64 {
        self.0.volume.get()
    }

    fn set_volume(&self, volume: f64) {
        self.0.volume_writes.set(self.0.volume_writes.get() + 1);
        self.0.volume.set(volume);
    }

    fn set_muted(&self, muted: bool) {
        self.0.muted.set(muted);
    }

    fn set_looping(&self, looping: bool) {
        self.0.looping.set(looping);
    }

    fn source(&self) -> String {
        self.0.source.borrow().clone()
    }

    fn set_source(&self, url: &str) {
        *self.0.source.borrow_mut() = url.to_string();
        self.0.current_time.set(0.0);
        self.0.loads.set(self.0.loads.get() + 1);
    }

    fn set_opacity(&self, opacity: f64) {
        self.0.opacity.set(opacity);
    }

    fn play(&self) -> Result<(), MediaError> {
        self.0.play_calls.set(self.0.play_calls.get() + 1);
        if self.0.reject_play.get() {
            Err(MediaError::PlayRejected("NotAllowedError".into()))
        } else {
            Ok(())
        }
    }
}

struct Task {
    due: u32,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: Cell<u32>,
    seq: Cell<u64>,
    tasks: RefCell<Vec<Task>>,
}

/// Virtual clock driven by `advance`.
#[derive(Clone, Default)]
pub struct ManualTimers(Rc<Clock>);

pub struct ManualHandle(Rc<Cell<bool>>);

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl ManualTimers {
    pub fn now(&self) -> u32 {
        self.0.now.get()
    }

    pub fn pending(&self) -> usize {
        self.0.tasks.borrow().iter().filter(|t| !t.cancelled.get()).count()
    }

    pub fn advance(&self, ms: u32) {
        let target = self.0.now.get() + ms;
        loop {
            let next = {
                let mut tasks = self.0.tasks.borrow_mut();
                tasks.retain(|t| !t.cancelled.get());
                let earliest = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);
                earliest.map(|i| tasks.remove(i))
            };
            match next {
                Some(task) => {
                    self.0.now.set(task.due);
                    (task.run)();
                }
                None => break,
            }
        }
        self.0.now.set(target);
    }
}

impl Scheduler for ManualTimers {
    type Handle = ManualHandle;

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        let seq = self.0.seq.get();
        self.0.seq.set(seq + 1);
        self.0.tasks.borrow_mut().push(Task {
            due: self.0.now.get() + delay_ms,
            seq,
            cancelled: cancelled.clone(),
            run: task,
        });
        ManualHandle(cancelled)
    }
}
