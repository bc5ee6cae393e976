use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::header::PortfolioHeader;
use crate::config;
use crate::contact::form::ContactForm;
use crate::i18n::{self, Language};
use crate::sections::footer::PortfolioFooter;
use crate::sections::hero::HeroSection;
use crate::sections::projects::ProjectsSection;
use crate::sections::skills::SkillsSection;
use crate::sections::trust::TrustSection;
use crate::tracking::{self, CursorPosition, Section};

fn section_top(document: &Document, section: Section) -> Option<f64> {
    document
        .get_element_by_id(section.id())
        .map(|element| element.get_bounding_client_rect().top())
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let language = use_state(|| Language::He);
    let active_section = use_state(|| Section::Home);
    let cursor = use_state(CursorPosition::default);
    let is_loaded = use_state(|| false);
    let menu_open = use_state(|| false);

    // Loaded flag: flips once after the first render and drives the nav
    // entrance animation. Never reverts.
    {
        let is_loaded = is_loaded.clone();
        use_effect_with_deps(
            move |_| {
                is_loaded.set(true);
                || ()
            },
            (),
        );
    }

    // Active section follows the scroll position. Runs once eagerly so the
    // highlight is correct before the first scroll event.
    {
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                if let Some(section) =
                    tracking::resolve_active(|section| section_top(&document, section))
                {
                    active_section.set(section);
                }

                let on_scroll = Closure::wrap(Box::new(move || {
                    if let Some(section) =
                        tracking::resolve_active(|section| section_top(&document, section))
                    {
                        active_section.set(section);
                    }
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Cursor position for the decorative glow, verbatim at native event rate.
    {
        let cursor = cursor.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let on_move = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    cursor.set(CursorPosition {
                        x: e.client_x(),
                        y: e.client_y(),
                    });
                }) as Box<dyn FnMut(web_sys::MouseEvent)>);
                window
                    .add_event_listener_with_callback(
                        "mousemove",
                        on_move.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "mousemove",
                            on_move.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // The document root mirrors the selected language so the whole page
    // flips direction with the toggle.
    use_effect_with_deps(
        move |current: &Language| {
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = root.set_attribute("lang", current.code());
                let _ = root.set_attribute("dir", current.dir());
            }
            || ()
        },
        *language,
    );

    let text = i18n::translations(*language);

    // Nav clicks highlight immediately instead of waiting for the scroll
    // event; the anchor jump itself does the scrolling.
    let on_nav_click = {
        let active_section = active_section.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |section: Section| {
            active_section.set(section);
            menu_open.set(false);
        })
    };

    // CTA buttons scroll smoothly and take the highlight along.
    let scroll_to_section = {
        let active_section = active_section.clone();
        Callback::from(move |section: Section| {
            active_section.set(section);
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(element) = document.get_element_by_id(section.id()) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
        })
    };

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_toggle_language = {
        let language = language.clone();
        Callback::from(move |_: MouseEvent| language.set((*language).toggled()))
    };

    let glow_style = format!(
        "background: radial-gradient(600px circle at {}px {}px, rgba(0, 217, 255, 0.08), transparent 40%);",
        cursor.x, cursor.y
    );

    let wrapper_class = if language.is_rtl() {
        "portfolio rtl"
    } else {
        "portfolio"
    };

    html! {
        <div class={wrapper_class}>
            <style>{GLOBAL_STYLES}</style>
            <div class="page-background" aria-hidden="true"></div>
            <div class="cursor-glow" style={glow_style} aria-hidden="true"></div>

            <PortfolioHeader
                nav={&text.nav}
                language={*language}
                active_section={*active_section}
                is_loaded={*is_loaded}
                menu_open={*menu_open}
                on_nav_click={on_nav_click}
                on_menu_toggle={on_menu_toggle}
                on_toggle_language={on_toggle_language}
            />

            <HeroSection text={&text.hero} on_scroll_to={scroll_to_section.clone()} />
            <ProjectsSection text={&text.projects} on_scroll_to={scroll_to_section} />
            <SkillsSection text={&text.skills} />
            <TrustSection text={&text.trust} />
            <ContactForm text={&text.contact} language={*language} />
            <PortfolioFooter text={&text.footer} site={config::site()} />
        </div>
    }
}

const GLOBAL_STYLES: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    background: #050505;
    color: #fff;
    font-family: 'Inter', 'Heebo', system-ui, sans-serif;
}
.portfolio { position: relative; min-height: 100vh; overflow-x: hidden; }
.page-background {
    position: fixed;
    inset: 0;
    z-index: -2;
    background:
        linear-gradient(135deg, #000 0%, rgba(8, 51, 68, 0.1) 50%, rgba(80, 7, 36, 0.1) 100%);
}
.cursor-glow {
    position: fixed;
    inset: 0;
    z-index: 0;
    pointer-events: none;
}

.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 40;
    transform: translateY(-100%);
    transition: transform 0.5s ease;
    background: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid rgba(0, 217, 255, 0.2);
}
.top-nav.loaded { transform: translateY(0); }
.nav-content {
    max-width: 1280px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo { font-weight: 800; color: #fff; text-decoration: none; font-size: 1.1rem; }
.nav-links { display: flex; align-items: center; gap: 2rem; }
.nav-link {
    color: #d1d5db;
    text-decoration: none;
    font-size: 0.9rem;
    padding: 0.6rem 0.75rem;
    transition: color 0.3s ease;
}
.nav-link:hover, .nav-link.active { color: #00d9ff; }
.language-toggle {
    background: none;
    border: 1px solid rgba(0, 217, 255, 0.3);
    border-radius: 8px;
    color: #fff;
    padding: 0.5rem 1rem;
    font-size: 0.8rem;
    cursor: pointer;
}
.language-toggle:hover { background: rgba(0, 217, 255, 0.1); }
.burger-menu { display: none; background: none; border: none; cursor: pointer; }
.burger-menu span {
    display: block;
    width: 24px;
    height: 2px;
    margin: 5px 0;
    background: #00d9ff;
}
.mobile-menu { display: none; }

section { position: relative; padding: 3rem 1.5rem; }
.section-title {
    text-align: center;
    font-size: 2.5rem;
    font-weight: 900;
    margin-bottom: 1rem;
    background: linear-gradient(90deg, #fff, #00d9ff, #ff006b);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.section-subtitle { text-align: center; color: #9ca3af; margin-bottom: 3rem; }

.hero-section {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding-top: 5rem;
}
.hero-content { max-width: 64rem; text-align: center; position: relative; z-index: 10; }
.hero-badge {
    display: inline-block;
    border: 1px solid rgba(0, 217, 255, 0.3);
    background: rgba(0, 217, 255, 0.05);
    color: #00d9ff;
    border-radius: 9999px;
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
    margin-bottom: 1.5rem;
    animation: pulse 2s infinite;
}
@keyframes pulse { 50% { opacity: 0.6; } }
.hero-title { font-size: 3.5rem; font-weight: 900; line-height: 1.1; margin: 0 0 1.5rem; }
.hero-title-accent {
    background: linear-gradient(90deg, #00d9ff, #ff006b, #a855f7);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.hero-desc { max-width: 48rem; margin: 0 auto 3rem; color: #9ca3af; font-size: 1.125rem; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
.cta-primary {
    background: linear-gradient(90deg, #06b6d4, #ec4899);
    border: none;
    border-radius: 8px;
    color: #fff;
    font-weight: 700;
    font-size: 1rem;
    padding: 1rem 2rem;
    cursor: pointer;
    transition: transform 0.2s ease;
}
.cta-primary:hover { transform: scale(1.05); }
.cta-secondary {
    background: none;
    border: 2px solid rgba(0, 217, 255, 0.5);
    border-radius: 8px;
    color: #fff;
    font-weight: 700;
    font-size: 1rem;
    padding: 1rem 2rem;
    cursor: pointer;
}
.cta-secondary:hover { background: rgba(0, 217, 255, 0.1); }

.projects-inner, .skills-inner { max-width: 1280px; margin: 0 auto; }
.projects-grid { display: grid; gap: 2rem; grid-template-columns: repeat(3, 1fr); }
.project-card {
    border: 1px solid #1f2937;
    border-radius: 16px;
    background: rgba(17, 24, 39, 0.5);
    overflow: hidden;
    transition: border-color 0.3s ease;
}
.project-card:hover { border-color: var(--card-accent); }
.project-card-body { padding: 1.5rem; }
.project-tech { display: flex; gap: 0.5rem; flex-wrap: wrap; margin-bottom: 1rem; }
.tech-tag {
    font-size: 0.75rem;
    color: #00d9ff;
    border: 1px solid rgba(0, 217, 255, 0.3);
    border-radius: 4px;
    padding: 0.15rem 0.5rem;
}
.project-cta {
    background: none;
    border: none;
    color: #00d9ff;
    font-weight: 700;
    font-size: 0.875rem;
    cursor: pointer;
    padding: 0;
}

.skills-grid { display: grid; gap: 2rem; grid-template-columns: repeat(3, 1fr); }
.skill-card {
    position: relative;
    border: 1px solid #374151;
    border-radius: 16px;
    background: linear-gradient(135deg, #111827, #1f2937);
    padding: 2rem;
    transition: transform 0.3s ease, border-color 0.3s ease;
}
.skill-card:hover { transform: scale(1.05); border-color: rgba(0, 217, 255, 0.5); }
.skill-card.recommended { border-color: rgba(0, 217, 255, 0.5); box-shadow: 0 0 0 2px rgba(0, 217, 255, 0.3); }
.recommended-badge {
    position: absolute;
    top: 1rem;
    right: 1rem;
    font-size: 0.7rem;
    text-transform: uppercase;
    color: #00d9ff;
    border: 1px solid rgba(0, 217, 255, 0.3);
    background: rgba(0, 217, 255, 0.1);
    border-radius: 4px;
    padding: 0.25rem 0.5rem;
}
.skill-card i { display: block; width: 40px; height: 40px; margin-bottom: 1rem; background: rgba(0, 217, 255, 0.2); border-radius: 8px; }
.skill-card p { color: #9ca3af; line-height: 1.6; }

.trust-inner { max-width: 56rem; margin: 0 auto; text-align: center; }
.trust-story {
    margin: 0 auto;
    max-width: 48rem;
    border: 1px solid rgba(0, 217, 255, 0.2);
    border-radius: 16px;
    background: linear-gradient(135deg, rgba(0, 217, 255, 0.05), rgba(255, 0, 107, 0.05));
    padding: 2rem;
    font-size: 1.125rem;
    line-height: 1.7;
    color: #d1d5db;
}

.contact-inner { max-width: 56rem; margin: 0 auto; }
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    border: 1px solid #1f2937;
    border-radius: 16px;
    background: linear-gradient(135deg, #111827, #000);
    padding: 2rem;
}
.field-grid { display: grid; gap: 1.5rem; grid-template-columns: 1fr 1fr; }
.field { display: flex; flex-direction: column; gap: 0.5rem; }
.field label { font-size: 0.875rem; color: #9ca3af; }
.field input, .field select, .field textarea {
    width: 100%;
    border: 1px solid #374151;
    border-radius: 8px;
    background: #1f2937;
    color: #fff;
    padding: 1rem;
    font-size: 1rem;
}
.field input:focus, .field select:focus, .field textarea:focus {
    outline: none;
    border-color: #00d9ff;
}
.field textarea { height: 10rem; resize: none; }
.select-wrap { position: relative; }
.file-field { position: relative; }
.file-field input[type="file"] {
    position: absolute;
    inset: 0;
    opacity: 0;
    cursor: pointer;
    z-index: 10;
}
.file-name {
    display: flex;
    align-items: center;
    border: 1px solid #374151;
    border-radius: 8px;
    background: #1f2937;
    padding: 1rem;
    font-size: 0.875rem;
    overflow: hidden;
    white-space: nowrap;
    text-overflow: ellipsis;
}
.field-error { color: #f87171; font-size: 0.8rem; margin: 0; }
.submit-button {
    background: linear-gradient(90deg, #06b6d4, #ec4899);
    border: none;
    border-radius: 8px;
    color: #fff;
    font-weight: 700;
    font-size: 1.1rem;
    padding: 1rem;
    cursor: pointer;
}
.submit-button:disabled { opacity: 0.5; cursor: not-allowed; }
.form-status {
    border-radius: 8px;
    padding: 1rem;
    text-align: center;
    font-weight: 700;
}
.form-status.success {
    border: 1px solid rgba(34, 197, 94, 0.5);
    background: rgba(34, 197, 94, 0.1);
    color: #4ade80;
}
.form-status.error {
    border: 1px solid rgba(239, 68, 68, 0.5);
    background: rgba(239, 68, 68, 0.1);
    color: #f87171;
}

.site-footer {
    border-top: 1px solid #1f2937;
    padding: 3rem 1.5rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1.5rem;
}
.footer-links { display: flex; gap: 1.5rem; }
.footer-links a { color: #9ca3af; text-decoration: none; }
.footer-links a:hover { color: #00d9ff; }
.footer-copyright { color: #6b7280; font-size: 0.875rem; }

@media (max-width: 768px) {
    .nav-links { display: none; }
    .burger-menu { display: block; }
    .mobile-menu.open {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
        padding: 1rem 1.5rem 1.5rem;
        background: rgba(0, 0, 0, 0.95);
        border-bottom: 1px solid rgba(0, 217, 255, 0.2);
    }
    .mobile-nav-link { color: #d1d5db; text-decoration: none; padding: 0.75rem 1rem; width: 100%; text-align: center; }
    .mobile-nav-link.active { color: #00d9ff; background: rgba(0, 217, 255, 0.2); border-radius: 8px; }
    .hero-title { font-size: 2.25rem; }
    .projects-grid, .skills-grid { grid-template-columns: 1fr; }
    .field-grid { grid-template-columns: 1fr; }
}
"#;
