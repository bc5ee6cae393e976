use yew::prelude::*;

use crate::i18n::ProjectsText;
use crate::tracking::Section;

// Tech tags and accent colors per project card, matched by index to the
// translated copy.
const PROJECT_TECH: [&[&str]; 3] = [
    &["React", "Node.js", "MongoDB"],
    &["TypeScript", "Next.js", "D3.js"],
    &["React", "WebSocket", "Redis"],
];
const PROJECT_COLORS: [&str; 3] = ["#00D9FF", "#FF006B", "#00FF94"];

#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    pub text: &'static ProjectsText,
    pub on_scroll_to: Callback<Section>,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    html! {
        <section id="projects" class="projects-section">
            <div class="projects-inner">
                <h2 class="section-title">{props.text.title}</h2>
                <p class="section-subtitle">{props.text.subtitle}</p>
                <div class="projects-grid" role="list">
                    {
                        props.text.items.iter().enumerate().map(|(idx, item)| {
                            let to_contact = {
                                let on_scroll_to = props.on_scroll_to.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_scroll_to.emit(Section::Contact)
                                })
                            };
                            html! {
                                <article
                                    class="project-card"
                                    style={format!("--card-accent: {};", PROJECT_COLORS[idx])}
                                >
                                    <div class="project-card-body">
                                        <h3>{item.title}</h3>
                                        <p>{item.desc}</p>
                                        <div class="project-tech">
                                            {
                                                PROJECT_TECH[idx].iter().map(|tech| html! {
                                                    <span class="tech-tag">{*tech}</span>
                                                }).collect::<Html>()
                                            }
                                        </div>
                                        <button class="project-cta" onclick={to_contact}>
                                            {props.text.cta}
                                        </button>
                                    </div>
                                </article>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
