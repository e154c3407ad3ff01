use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlElement, HtmlInputElement};
use log::{info, warn};

use crate::particles::{confetti_burst, spawn};
use crate::relay::FetchTransport;
use crate::submission::{
    schedule_recovery, FormTarget, Note, Phase, SubmissionController, SubmitError, SubmitLatch,
    UNCONFIGURED_NOTICE,
};
use crate::timers::BrowserScheduler;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub target: FormTarget,
    #[prop_or(AttrValue::from("Join the waitlist"))]
    pub button_label: AttrValue,
    #[prop_or(AttrValue::from("No spam. Unsubscribe anytime."))]
    pub default_note: AttrValue,
}

fn celebrate(button: &HtmlElement) {
    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    // Particles are absolutely positioned, so shift the viewport rect by the scroll offset.
    let rect = button.get_bounding_client_rect();
    let x = rect.left() + rect.width() / 2.0 + window.scroll_x().unwrap_or(0.0);
    let y = rect.top() + rect.height() / 2.0 + window.scroll_y().unwrap_or(0.0);
    for particle in confetti_burst(x, y, &mut rand::thread_rng()) {
        if let Err(e) = spawn(&document, &particle) {
            warn!("Could not spawn confetti: {:?}", e);
            break;
        }
    }
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let phase = use_state(Phase::default);
    let note = use_state(|| None::<Note>);
    let email = use_state(String::new);
    let button_ref = use_node_ref();
    let latch = use_mut_ref(SubmitLatch::default);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let phase = phase.clone();
        let note = note.clone();
        let email = email.clone();
        let button_ref = button_ref.clone();
        let target = props.target.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(sending) = latch.borrow_mut().try_begin(*phase) else {
                return;
            };

            let controller = SubmissionController::new(target.clone(), FetchTransport);
            if let Err(SubmitError::Unconfigured) = controller.check() {
                latch.borrow_mut().abandon();
                if let Some(window) = window() {
                    let _ = window.alert_with_message(UNCONFIGURED_NOTICE);
                }
                return;
            }

            phase.set(sending);
            let phase = phase.clone();
            let note = note.clone();
            let email = email.clone();
            let button_ref = button_ref.clone();
            let latch = latch.clone();
            spawn_local(async move {
                let address = (*email).clone();
                let result = controller.submit(&[("email", address.as_str())]).await;
                let (settled, settled_note) = sending.settle(&result);
                phase.set(settled);
                note.set(settled_note);

                match result {
                    Ok(()) => {
                        info!("Signup delivered");
                        email.set(String::new());
                        if let Some(button) = button_ref.cast::<HtmlElement>() {
                            celebrate(&button);
                        }
                    }
                    Err(_) => {
                        schedule_recovery(&BrowserScheduler, settled, move |next| {
                            latch.borrow_mut().observe(next);
                            phase.set(next);
                        });
                    }
                }
            });
        })
    };

    let current = *phase;
    let (note_text, note_style) = match *note {
        Some(n) => (
            n.text().to_string(),
            n.color().map(|c| format!("color: {};", c)).unwrap_or_default(),
        ),
        None => (props.default_note.to_string(), String::new()),
    };

    html! {
        <form
            class="signup-form"
            action={props.target.action.clone()}
            method={props.target.method.as_str()}
            {onsubmit}
        >
            <input
                type="email"
                name="email"
                placeholder="you@example.com"
                required=true
                value={(*email).clone()}
                {oninput}
            />
            <button
                type="submit"
                ref={button_ref}
                disabled={current.is_disabled()}
                style={current.style()}
            >
                {current.label(&props.button_label)}
            </button>
            <p class="form-note" style={note_style}>{note_text}</p>
        </form>
    }
}
