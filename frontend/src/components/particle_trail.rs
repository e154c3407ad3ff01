use yew::prelude::*;
use yew_hooks::use_event_with_window;
use web_sys::{window, MouseEvent};

use crate::particles::{spawn, Particle, Throttle, TRAIL_INTERVAL_MS};

/// Drops a short-lived glyph behind the cursor, at most once every `TRAIL_INTERVAL_MS`.
#[hook]
pub fn use_particle_trail() {
    let throttle = use_mut_ref(|| Throttle::new(TRAIL_INTERVAL_MS));

    use_event_with_window("mousemove", move |e: MouseEvent| {
        if !throttle.borrow_mut().admit(js_sys::Date::now()) {
            return;
        }
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };
        let particle = Particle::trail(
            f64::from(e.page_x()),
            f64::from(e.page_y()),
            &mut rand::thread_rng(),
        );
        if let Err(e) = spawn(&document, &particle) {
            gloo_console::error!("Could not spawn trail particle:", e);
        }
    });
}
