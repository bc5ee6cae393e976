use yew::prelude::*;

use crate::config::SiteConfig;
use crate::i18n::FooterText;

#[derive(Properties, PartialEq)]
pub struct PortfolioFooterProps {
    pub text: &'static FooterText,
    pub site: &'static SiteConfig,
}

#[function_component(PortfolioFooter)]
pub fn portfolio_footer(props: &PortfolioFooterProps) -> Html {
    let links = [
        (props.site.github, "GitHub"),
        (props.site.linkedin, "LinkedIn"),
        (props.site.facebook, "Facebook"),
    ];

    html! {
        <footer class="site-footer" role="contentinfo">
            <nav class="footer-links" aria-label="Social links">
                {
                    links.iter().map(|(href, label)| html! {
                        <a
                            href={*href}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={*label}
                        >
                            {*label}
                        </a>
                    }).collect::<Html>()
                }
            </nav>
            <p class="footer-copyright">{props.text.copyright}</p>
        </footer>
    }
}
