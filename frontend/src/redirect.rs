//! Staged "connecting" display shown before leaving the page.

use std::rc::Rc;

use crate::timers::Scheduler;

pub const CONNECTING_MS: u32 = 600;
pub const REDIRECTING_MS: u32 = 800;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RedirectStage {
    #[default]
    Ready,
    Connecting,
    Redirecting,
}

impl RedirectStage {
    /// Stage shown once this one has been held for `hold_ms`.
    /// `None` from `Redirecting` means navigate.
    pub fn advance(self) -> Option<RedirectStage> {
        match self {
            RedirectStage::Ready => Some(RedirectStage::Connecting),
            RedirectStage::Connecting => Some(RedirectStage::Redirecting),
            RedirectStage::Redirecting => None,
        }
    }

    pub fn hold_ms(self) -> u32 {
        match self {
            RedirectStage::Ready => 0,
            RedirectStage::Connecting => CONNECTING_MS,
            RedirectStage::Redirecting => REDIRECTING_MS,
        }
    }

    /// Only an untouched button starts the sequence.
    pub fn accepts_click(self) -> bool {
        self == RedirectStage::Ready
    }

    pub fn label<'a>(self, original: &'a str) -> &'a str {
        match self {
            RedirectStage::Ready => original,
            RedirectStage::Connecting => "Connecting...",
            RedirectStage::Redirecting => "Redirecting!",
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            RedirectStage::Ready => "",
            RedirectStage::Connecting => "opacity: 0.7;",
            RedirectStage::Redirecting => {
                "opacity: 0.7; background: #00ff88; color: #000; border-color: #00ff88;"
            }
        }
    }
}

/// Shows `stage`, holds it, then moves on; `navigate` runs once `Redirecting` has been held.
pub fn play<S>(
    scheduler: S,
    stage: RedirectStage,
    show: Rc<dyn Fn(RedirectStage)>,
    navigate: Box<dyn FnOnce()>,
) where
    S: Scheduler + Clone + 'static,
{
    show(stage);
    let later = scheduler.clone();
    scheduler.schedule(
        stage.hold_ms(),
        Box::new(move || match stage.advance() {
            Some(next) => play(later, next, show, navigate),
            None => navigate(),
        }),
    );
}
