/// Site identity used for SEO metadata and the footer. Static content only,
/// never derived from user input.
#[derive(Debug, PartialEq)]
pub struct SiteConfig {
    pub url: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub job_title: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub facebook: &'static str,
}

static SITE: SiteConfig = SiteConfig {
    url: "https://dev.idanlevian.com",
    name: "IdanLevianDeveloper",
    title: "Idan Levian | Freelance React & React Native Developer in Israel",
    description: "Idan Levian — freelance frontend developer in Israel. I build web and mobile apps with React and React Native. Straightforward work, fair pricing, real results.",
    keywords: &[
        "Idan Levian",
        "freelance developer Israel",
        "React developer Israel",
        "React Native developer",
        "frontend developer freelance",
        "web app development Israel",
        "mobile app developer Israel",
        "fullstack freelancer",
    ],
    author: "Idan Levian",
    job_title: "Freelance Frontend Developer",
    github: "https://github.com/eidan66",
    linkedin: "https://www.linkedin.com/in/idanlevian/",
    facebook: "https://www.facebook.com/IdanLevianDeveloper/",
};

pub fn site() -> &'static SiteConfig {
    &SITE
}

#[cfg(debug_assertions)]
pub fn contact_webhook_url() -> Option<&'static str> {
    Some("http://localhost:5678/webhook/portfolio-contact") // Local n8n instance
}

#[cfg(not(debug_assertions))]
pub fn contact_webhook_url() -> Option<&'static str> {
    option_env!("PORTFOLIO_CONTACT_WEBHOOK_URL")
}

#[cfg(debug_assertions)]
pub fn analytics_webhook_url() -> Option<&'static str> {
    Some("http://localhost:5678/webhook/portfolio-analytics")
}

#[cfg(not(debug_assertions))]
pub fn analytics_webhook_url() -> Option<&'static str> {
    option_env!("PORTFOLIO_ANALYTICS_WEBHOOK_URL")
}
