use yew::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use crate::accordion::{answer_max_height, Accordion, ACTIVE_CLASS};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let answer_ref = use_node_ref();

    // Measure after render so the open height matches the content.
    {
        let answer_ref = answer_ref.clone();
        use_effect_with_deps(
            move |open| {
                if let Some(answer) = answer_ref.cast::<HtmlElement>() {
                    let height = answer_max_height(*open, answer.scroll_height());
                    let _ = answer.style().set_property("max-height", &height);
                }
                || ()
            },
            props.open,
        );
    }

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class="faq-item">
            <button class={classes!("faq-question", props.open.then_some(ACTIVE_CLASS))} onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer" ref={answer_ref}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |_: ()| {
                        let mut next = (*accordion).clone();
                        next.toggle(index);
                        accordion.set(next);
                    })
                };
                html! {
                    <FaqItem
                        key={index}
                        question={entry.question}
                        open={accordion.is_open(index)}
                        {on_toggle}
                    >
                        <p>{entry.answer}</p>
                    </FaqItem>
                }
            }) }
        </div>
    }
}
