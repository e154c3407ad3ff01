use gloo_timers::callback::Timeout;

/// Runs a task once after a delay. The page uses browser timeouts; tests drive a manual clock.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// `setTimeout` through gloo. Scheduled tasks are fire-and-forget.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
