use yew::prelude::*;
use yew_hooks::use_interval;
use std::rc::Rc;

use crate::counter::{flash, UserCounter, FLASH_COLOR, TICK_MS};
use crate::timers::BrowserScheduler;
use crate::utils::format_thousands;

/// Member count that creeps upwards while the page is open.
#[function_component(LiveUserCount)]
pub fn live_user_count() -> Html {
    let counter = use_mut_ref(UserCounter::default);
    let count = use_state(|| counter.borrow().count());
    let flashing = use_state(|| false);

    // use_interval drops the interval on unmount.
    {
        let count = count.clone();
        let flashing = flashing.clone();
        use_interval(
            move || {
                let Some(next) = counter.borrow_mut().tick(&mut rand::thread_rng()) else {
                    return;
                };
                count.set(next);
                let flashing = flashing.clone();
                flash(&BrowserScheduler, Rc::new(move |on: bool| flashing.set(on)));
            },
            TICK_MS,
        );
    }

    let style = if *flashing {
        format!("color: {};", FLASH_COLOR)
    } else {
        String::new()
    };

    html! {
        <span id="user-count" class="user-count" {style}>{format_thousands(*count)}</span>
    }
}
