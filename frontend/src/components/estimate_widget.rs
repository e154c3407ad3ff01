use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::estimate::{Estimate, Layout};
use crate::utils::format_thousands;

#[derive(Properties, PartialEq)]
pub struct EstimateWidgetProps {
    pub layout: Layout,
    #[prop_or(100)]
    pub min: u64,
    #[prop_or(10_000)]
    pub max: u64,
    #[prop_or(100)]
    pub step: u64,
    #[prop_or(1_000)]
    pub initial: u64,
}

#[function_component(EstimateWidget)]
pub fn estimate_widget(props: &EstimateWidgetProps) -> Html {
    let layout = props.layout;
    let estimate = use_state(|| Estimate::for_amount(props.initial));

    let oninput = {
        let estimate = estimate.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(next) = Estimate::parse(&input.value()) {
                estimate.set(next);
            }
        })
    };

    html! {
        <div class={classes!("estimate-widget", match layout {
            Layout::Desktop => "estimate-desktop",
            Layout::Mobile => "estimate-mobile",
        })}>
            <label for={layout.range_id()} class="estimate-label">
                {"Amount: "}
                <span id={layout.amount_id()} class="estimate-amount">
                    {format_thousands(estimate.amount)}
                </span>
            </label>
            <input
                type="range"
                id={layout.range_id()}
                min={props.min.to_string()}
                max={props.max.to_string()}
                step={props.step.to_string()}
                value={estimate.amount.to_string()}
                {oninput}
            />
            <div class="estimate-results">
                <div class="estimate-result">
                    <span class="estimate-caption">{"Monthly"}</span>
                    <span id={layout.monthly_id()} class="estimate-figure">
                        {format_thousands(estimate.monthly)}
                    </span>
                </div>
                <div class="estimate-result">
                    <span class="estimate-caption">{"Yearly"}</span>
                    <span id={layout.annual_id()} class="estimate-figure">
                        {format_thousands(estimate.annual)}
                    </span>
                </div>
            </div>
        </div>
    }
}
