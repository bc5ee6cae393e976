use yew::prelude::*;

use crate::i18n::HeroText;
use crate::tracking::Section;

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub text: &'static HeroText,
    pub on_scroll_to: Callback<Section>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let to_contact = {
        let on_scroll_to = props.on_scroll_to.clone();
        Callback::from(move |_: MouseEvent| on_scroll_to.emit(Section::Contact))
    };
    let to_skills = {
        let on_scroll_to = props.on_scroll_to.clone();
        Callback::from(move |_: MouseEvent| on_scroll_to.emit(Section::Skills))
    };

    html! {
        <section id="home" class="hero-section">
            <div class="hero-content">
                <div class="hero-badge">{props.text.badge}</div>
                <h1 class="hero-title">
                    <span class="hero-title-main">{props.text.title1}</span>
                    <br />
                    <span class="hero-title-accent">{props.text.title2}</span>
                </h1>
                <p class="hero-desc">{props.text.desc}</p>
                <div class="hero-actions">
                    <button class="cta-primary" onclick={to_contact}>
                        {props.text.btn1}
                    </button>
                    <button class="cta-secondary" onclick={to_skills}>
                        {props.text.btn2}
                    </button>
                </div>
            </div>
        </section>
    }
}
