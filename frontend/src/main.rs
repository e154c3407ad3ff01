use yew::prelude::*;
use log::{info, Level};

mod config;
mod utils;
mod accordion;
mod anchor;
mod counter;
mod estimate;
mod particles;
mod redirect;
mod relay;
mod submission;
mod timers;

mod components {
    pub mod anchor_link;
    pub mod copy_button;
    pub mod estimate_widget;
    pub mod faq;
    pub mod particle_trail;
    pub mod reveal;
    pub mod signup_form;
    pub mod user_counter;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");

    yew::Renderer::<App>::new().render();
}
