use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::copy_button::CopyButton;
use crate::components::estimate_widget::EstimateWidget;
use crate::components::faq::{Faq, FaqEntry};
use crate::components::particle_trail::use_particle_trail;
use crate::components::reveal::use_reveal_on_scroll;
use crate::components::signup_form::SignupForm;
use crate::components::user_counter::LiveUserCount;
use crate::config;
use crate::estimate::Layout;
use crate::submission::{FormTarget, Method};

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "How are the estimates calculated?",
            answer: "The calculator multiplies the amount you pick by fixed illustrative rates. It is not a forecast and nothing is guaranteed.",
        },
        FaqEntry {
            question: "What happens after I join the waitlist?",
            answer: "We send one confirmation email. You can unsubscribe from any message we send.",
        },
        FaqEntry {
            question: "Can I leave whenever I want?",
            answer: "Yes. There are no lock-in periods and no fees for leaving.",
        },
        FaqEntry {
            question: "Where does the copy button take me?",
            answer: "To our partner's signup page, in the same tab.",
        },
    ]
}

struct Trader {
    name: &'static str,
    style: &'static str,
    followers: &'static str,
}

const TRADERS: [Trader; 3] = [
    Trader { name: "Northwind", style: "Swing, majors only", followers: "1,204" },
    Trader { name: "Kestrel", style: "Trend following", followers: "873" },
    Trader { name: "Halcyon", style: "Low leverage, long term", followers: "2,310" },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    use_reveal_on_scroll();
    use_particle_trail();

    let target = FormTarget::new(
        config::get_form_endpoint(),
        Method::parse(config::get_form_method()),
    );
    let redirect_url = AttrValue::from(config::get_redirect_url());

    html! {
        <div class="landing-page">
            <nav class="top-nav">
                <div class="nav-content">
                    <AnchorLink href="#top" class="nav-logo">{"copydesk"}</AnchorLink>
                    <div class="nav-right">
                        <AnchorLink href="#calculator" class="nav-link">{"Calculator"}</AnchorLink>
                        <AnchorLink href="#traders" class="nav-link">{"Traders"}</AnchorLink>
                        <AnchorLink href="#faq" class="nav-link">{"FAQ"}</AnchorLink>
                        <AnchorLink href="#signup" class="nav-cta">{"Join"}</AnchorLink>
                    </div>
                </div>
            </nav>

            <section class="hero" id="top">
                <h1>{"Follow traders you trust"}</h1>
                <p class="hero-subtitle">
                    {"Mirror the positions of experienced traders with one click."}
                </p>
                <p class="hero-proof">
                    <LiveUserCount />{" people already on the waitlist"}
                </p>
                <AnchorLink href="#signup" class="hero-cta">{"Get early access"}</AnchorLink>
                <div class="float-card">{"📈 Live positions"}</div>
            </section>

            <section class="props">
                <div class="prop-card">
                    <h3>{"Transparent history"}</h3>
                    <p>{"Every trader's full record is public before you follow."}</p>
                </div>
                <div class="prop-card">
                    <h3>{"Your limits"}</h3>
                    <p>{"Cap how much any single trader can move."}</p>
                </div>
                <div class="prop-card">
                    <h3>{"Stop anytime"}</h3>
                    <p>{"Unfollow and close out in one step."}</p>
                </div>
            </section>

            <section class="steps">
                <div class="step-item"><h3>{"1. Join"}</h3><p>{"Leave your email below."}</p></div>
                <div class="step-item"><h3>{"2. Pick"}</h3><p>{"Browse traders and their records."}</p></div>
                <div class="step-item"><h3>{"3. Copy"}</h3><p>{"Connect and mirror their trades."}</p></div>
            </section>

            <section class="profit-calculator" id="calculator">
                <h2>{"Estimate"}</h2>
                <div class="desktop-only">
                    <EstimateWidget layout={Layout::Desktop} />
                </div>
                <div class="mobile-only">
                    <EstimateWidget layout={Layout::Mobile} />
                </div>
                <p class="disclaimer">{"Illustrative figures only. Past results do not predict future returns."}</p>
            </section>

            <section class="traders" id="traders">
                <h2>{"Featured traders"}</h2>
                <div class="traders-grid">
                    { for TRADERS.iter().map(|trader| html! {
                        <div class="trader-card" key={trader.name}>
                            <h3>{trader.name}</h3>
                            <p>{trader.style}</p>
                            <p class="followers">{format!("{} followers", trader.followers)}</p>
                            <CopyButton label="Copy trader" href={redirect_url.clone()} />
                        </div>
                    }) }
                </div>
            </section>

            <section class="faq-section" id="faq">
                <h2>{"Questions"}</h2>
                <Faq entries={faq_entries()} />
            </section>

            <section class="signup" id="signup">
                <h2>{"Get early access"}</h2>
                <SignupForm {target} />
            </section>

            <style>
                {r#"
                .cursor-particle {
                    position: absolute;
                    pointer-events: none;
                    z-index: 9999;
                    font-size: 1.2rem;
                    animation: particleDrift 1s ease-out forwards;
                }
                @keyframes particleDrift {
                    from { transform: translate(0, 0) scale(1); opacity: 1; }
                    to { transform: translate(var(--tx), var(--ty)) scale(0.4); opacity: 0; }
                }
                .prop-card, .step-item, .float-card, .profit-calculator, .trader-card {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }
                .faq-question.active .toggle-icon {
                    color: #00ff88;
                }
                .user-count {
                    transition: color 0.3s ease;
                }
                .copy-btn, .signup-form button {
                    transition: background 0.3s ease, opacity 0.3s ease, box-shadow 0.3s ease;
                }
                .mobile-only { display: none; }
                @media (max-width: 768px) {
                    .desktop-only { display: none; }
                    .mobile-only { display: block; }
                }
                "#}
            </style>
        </div>
    }
}
