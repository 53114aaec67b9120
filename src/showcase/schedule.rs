use gloo_timers::callback::Timeout;

/// Runs deferred work on the UI thread. Dropping a returned handle cancels
/// the task if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl Scheduler for BrowserTimers {
    type Handle = Timeout;

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}
