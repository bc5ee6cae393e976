use yew::prelude::*;

use crate::i18n::{Language, NavText};
use crate::tracking::Section;

#[derive(Properties, PartialEq)]
pub struct PortfolioHeaderProps {
    pub nav: &'static NavText,
    pub language: Language,
    pub active_section: Section,
    pub is_loaded: bool,
    pub menu_open: bool,
    pub on_nav_click: Callback<Section>,
    pub on_menu_toggle: Callback<MouseEvent>,
    pub on_toggle_language: Callback<MouseEvent>,
}

fn nav_links(props: &PortfolioHeaderProps, link_class: &'static str) -> Html {
    Section::ALL
        .iter()
        .map(|&section| {
            let onclick = {
                let on_nav_click = props.on_nav_click.clone();
                Callback::from(move |_: MouseEvent| on_nav_click.emit(section))
            };
            let class = if props.active_section == section {
                classes!(link_class, "active")
            } else {
                classes!(link_class)
            };
            html! {
                <a
                    href={format!("#{}", section.id())}
                    class={class}
                    onclick={onclick}
                    aria-current={
                        if props.active_section == section { Some("page") } else { None }
                    }
                >
                    {props.nav.label(section)}
                </a>
            }
        })
        .collect()
}

#[function_component(PortfolioHeader)]
pub fn portfolio_header(props: &PortfolioHeaderProps) -> Html {
    let nav_class = if props.is_loaded {
        "top-nav loaded"
    } else {
        "top-nav"
    };
    let menu_class = if props.menu_open {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };

    html! {
        <nav class={nav_class} aria-label="Main navigation">
            <div class="nav-content">
                <a
                    href="#home"
                    class="nav-logo"
                    onclick={
                        let on_nav_click = props.on_nav_click.clone();
                        Callback::from(move |_: MouseEvent| on_nav_click.emit(Section::Home))
                    }
                    aria-label={props.nav.home}
                >
                    {"Idan Levian"}
                </a>

                <div class="nav-links">
                    { nav_links(props, "nav-link") }
                    <button class="language-toggle" onclick={props.on_toggle_language.clone()}>
                        {props.language.toggle_label()}
                    </button>
                </div>

                <button
                    class="burger-menu"
                    onclick={props.on_menu_toggle.clone()}
                    aria-label="Toggle mobile menu"
                    aria-expanded={props.menu_open.to_string()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={menu_class} aria-hidden={(!props.menu_open).to_string()}>
                { nav_links(props, "mobile-nav-link") }
                <button class="language-toggle" onclick={props.on_toggle_language.clone()}>
                    {props.language.toggle_label()}
                </button>
            </div>
        </nav>
    }
}
