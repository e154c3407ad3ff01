use yew::prelude::*;
use std::rc::Rc;
use web_sys::{window, MouseEvent};

use crate::redirect::{play, RedirectStage};
use crate::timers::BrowserScheduler;

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub label: AttrValue,
    pub href: AttrValue,
}

/// Shows "connecting", then "redirecting", then leaves for `href`.
#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let stage = use_state(RedirectStage::default);
    // Set on the first click so a quick double click can't start a second sequence.
    let started = use_mut_ref(|| false);

    let onclick = {
        let stage = stage.clone();
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if !(*stage).accepts_click() || started.replace(true) {
                return;
            }
            let Some(first) = RedirectStage::Ready.advance() else {
                return;
            };
            let show: Rc<dyn Fn(RedirectStage)> = {
                let stage = stage.clone();
                Rc::new(move |next: RedirectStage| stage.set(next))
            };
            let href = href.clone();
            let navigate = Box::new(move || {
                gloo_console::log!("Redirecting to", href.to_string());
                if let Some(window) = window() {
                    let _ = window.location().set_href(&href);
                }
            });
            play(BrowserScheduler, first, show, navigate);
        })
    };

    html! {
        <a href={props.href.clone()} class="copy-btn" style={stage.style()} {onclick}>
            {stage.label(&props.label)}
        </a>
    }
}
