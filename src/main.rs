use log::{info, Level};
use yew::prelude::*;

mod analytics;
mod config;
mod i18n;
mod portfolio;
mod seo;
mod tracking;

mod contact {
    pub mod form;
    pub mod schema;
}

mod components {
    pub mod header;
}

mod sections {
    pub mod footer;
    pub mod hero;
    pub mod projects;
    pub mod skills;
    pub mod trust;
}

use analytics::AnalyticsTracker;
use portfolio::Portfolio;

#[function_component]
fn App() -> Html {
    // Head metadata is static site config; install it once on mount.
    use_effect_with_deps(
        move |_| {
            seo::install_head_metadata(config::site());
            || ()
        },
        (),
    );

    html! {
        <>
            <AnalyticsTracker />
            <Portfolio />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
