//! Search-engine metadata: JSON-LD structured data, head tags, sitemap.
//!
//! Everything here is built from [`SiteConfig`] values, never from user
//! input. The builders are pure; `install_head_metadata` is the only part
//! that touches the DOM.

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::config::SiteConfig;

const KNOWS_ABOUT: [&str; 8] = [
    "React",
    "React Native",
    "Next.js",
    "TypeScript",
    "Node.js",
    "Web Development",
    "Mobile App Development",
    "Frontend Architecture",
];

const SERVICE_TYPES: [&str; 4] = [
    "Web Development",
    "Mobile App Development",
    "Frontend Development",
    "Technology Consulting",
];

pub fn person_json_ld(site: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": site.author,
        "url": site.url,
        "jobTitle": site.job_title,
        "description": site.description,
        "knowsAbout": KNOWS_ABOUT,
        "sameAs": [site.github, site.linkedin, site.facebook],
        "image": format!("{}/images/og-image.png", site.url),
        "address": {
            "@type": "PostalAddress",
            "addressCountry": "IL"
        }
    })
}

pub fn service_json_ld(site: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": site.author,
        "url": site.url,
        "description": site.description,
        "areaServed": ["Israel", "Remote"],
        "serviceType": SERVICE_TYPES,
        "provider": {
            "@type": "Person",
            "name": site.author
        }
    })
}

pub fn website_json_ld(site: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": site.name,
        "url": site.url,
        "author": {
            "@type": "Person",
            "name": site.author
        },
        "inLanguage": ["en", "he"]
    })
}

/// Single-entry sitemap: the landing page, refreshed monthly, with en/he
/// alternates pointing at the same URL. Rendered to a static file at deploy
/// time.
pub fn sitemap_xml(site: &SiteConfig, last_modified: NaiveDate) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">
  <url>
    <loc>{url}</loc>
    <lastmod>{lastmod}</lastmod>
    <changefreq>monthly</changefreq>
    <priority>1.0</priority>
    <xhtml:link rel="alternate" hreflang="en" href="{url}"/>
    <xhtml:link rel="alternate" hreflang="he" href="{url}"/>
  </url>
</urlset>
"#,
        url = site.url,
        lastmod = last_modified.format("%Y-%m-%d"),
    )
}

/// Meta tags installed into `document.head` on startup. Name/content pairs
/// except for Open Graph entries, which use the `property` attribute.
fn meta_tags(site: &SiteConfig) -> Vec<(&'static str, &'static str, String)> {
    vec![
        ("name", "description", site.description.to_string()),
        ("name", "keywords", site.keywords.join(", ")),
        ("name", "author", site.author.to_string()),
        ("property", "og:type", "website".to_string()),
        ("property", "og:url", site.url.to_string()),
        ("property", "og:site_name", site.name.to_string()),
        ("property", "og:title", site.title.to_string()),
        ("property", "og:description", site.description.to_string()),
        (
            "property",
            "og:image",
            format!("{}/images/og-image.png", site.url),
        ),
        ("name", "twitter:card", "summary_large_image".to_string()),
        ("name", "twitter:title", site.title.to_string()),
        (
            "name",
            "twitter:description",
            site.description.to_string(),
        ),
        ("name", "robots", "index, follow".to_string()),
    ]
}

/// Write the document title, meta tags, canonical link and the three JSON-LD
/// scripts into `document.head`. Runs once on mount.
pub fn install_head_metadata(site: &SiteConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };

    document.set_title(site.title);

    for (attr, key, content) in meta_tags(site) {
        if let Ok(meta) = document.create_element("meta") {
            let _ = meta.set_attribute(attr, key);
            let _ = meta.set_attribute("content", &content);
            let _ = head.append_child(&meta);
        }
    }

    if let Ok(link) = document.create_element("link") {
        let _ = link.set_attribute("rel", "canonical");
        let _ = link.set_attribute("href", site.url);
        let _ = head.append_child(&link);
    }

    for schema in [
        person_json_ld(site),
        service_json_ld(site),
        website_json_ld(site),
    ] {
        if let Ok(script) = document.create_element("script") {
            let _ = script.set_attribute("type", "application/ld+json");
            script.set_text_content(Some(&schema.to_string()));
            let _ = head.append_child(&script);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> SiteConfig {
        SiteConfig {
            url: "https://example.test",
            name: "ExampleDev",
            title: "Example | Freelance Developer",
            description: "Example description.",
            keywords: &["one", "two"],
            author: "Example Person",
            job_title: "Freelance Frontend Developer",
            github: "https://github.com/example",
            linkedin: "https://linkedin.com/in/example",
            facebook: "https://facebook.com/example",
        }
    }

    #[test]
    fn person_schema_identifies_the_author() {
        let site = fixture();
        let schema = person_json_ld(&site);
        assert_eq!(schema["@type"], "Person");
        assert_eq!(schema["name"], "Example Person");
        assert_eq!(schema["url"], "https://example.test");
        assert_eq!(schema["sameAs"][0], "https://github.com/example");
        assert_eq!(schema["address"]["addressCountry"], "IL");
    }

    #[test]
    fn service_schema_lists_offered_services() {
        let site = fixture();
        let schema = service_json_ld(&site);
        assert_eq!(schema["@type"], "ProfessionalService");
        assert_eq!(schema["serviceType"].as_array().unwrap().len(), 4);
        assert_eq!(schema["provider"]["name"], "Example Person");
    }

    #[test]
    fn website_schema_declares_both_languages() {
        let site = fixture();
        let schema = website_json_ld(&site);
        assert_eq!(schema["inLanguage"], serde_json::json!(["en", "he"]));
    }

    #[test]
    fn sitemap_has_one_monthly_entry_with_alternates() {
        let site = fixture();
        let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        let xml = sitemap_xml(&site, date);
        assert_eq!(xml.matches("<url>").count(), 1);
        assert!(xml.contains("<loc>https://example.test</loc>"));
        assert!(xml.contains("<lastmod>2026-02-14</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains(r#"hreflang="en""#));
        assert!(xml.contains(r#"hreflang="he""#));
    }

    #[test]
    fn meta_tags_cover_description_and_open_graph() {
        let site = fixture();
        let tags = meta_tags(&site);
        assert!(tags
            .iter()
            .any(|(attr, key, content)| *attr == "name"
                && *key == "description"
                && content == "Example description."));
        assert!(tags
            .iter()
            .any(|(attr, key, _)| *attr == "property" && *key == "og:title"));
        assert!(tags
            .iter()
            .any(|(_, key, content)| *key == "keywords" && content == "one, two"));
    }
}
