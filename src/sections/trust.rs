use yew::prelude::*;

use crate::i18n::TrustText;

#[function_component(TrustSection)]
pub fn trust_section(props: &TrustSectionProps) -> Html {
    html! {
        <section id="trust" class="trust-section" aria-labelledby="trust-title">
            <div class="trust-inner">
                <h2 id="trust-title" class="section-title">{props.text.title}</h2>
                <p class="section-subtitle">{props.text.subtitle}</p>
                <blockquote class="trust-story">{props.text.story}</blockquote>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TrustSectionProps {
    pub text: &'static TrustText,
}
