use yew::prelude::*;

use crate::i18n::SkillsText;

// CSS icon classes matched by index to the translated service cards.
const SKILL_ICON_CLASSES: [&str; 7] = [
    "layers-icon",
    "zap-icon",
    "globe-icon",
    "shield-icon",
    "cpu-icon",
    "message-icon",
    "lightbulb-icon",
];

// The consultation card is the one we highlight.
const RECOMMENDED_INDEX: usize = 6;

#[derive(Properties, PartialEq)]
pub struct SkillsSectionProps {
    pub text: &'static SkillsText,
}

#[function_component(SkillsSection)]
pub fn skills_section(props: &SkillsSectionProps) -> Html {
    html! {
        <section id="skills" class="skills-section">
            <div class="skills-inner">
                <h2 class="section-title">{props.text.title}</h2>
                <p class="section-subtitle">{props.text.subtitle}</p>
                <div class="skills-grid">
                    {
                        props.text.items.iter().enumerate().map(|(idx, item)| {
                            let recommended = idx == RECOMMENDED_INDEX;
                            let card_class = if recommended {
                                "skill-card recommended"
                            } else {
                                "skill-card"
                            };
                            html! {
                                <div class={card_class}>
                                    {
                                        if recommended {
                                            html! {
                                                <span class="recommended-badge">
                                                    {props.text.badge_recommended}
                                                </span>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <i class={SKILL_ICON_CLASSES[idx]}></i>
                                    <h3>{item.title}</h3>
                                    <p>{item.desc}</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
