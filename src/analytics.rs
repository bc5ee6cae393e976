use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

/// One page view. `referrer` is omitted from the JSON when the browser
/// reports none.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct PageView {
    pub path: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

impl PageView {
    pub fn capture(path: String, referrer: String, observed_at: DateTime<Utc>) -> Self {
        PageView {
            path,
            timestamp: observed_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            referrer: if referrer.is_empty() {
                None
            } else {
                Some(referrer)
            },
        }
    }
}

/// Fires one beacon per page load. Every failure is swallowed: analytics
/// must never surface an error or affect the page.
#[function_component(AnalyticsTracker)]
pub fn analytics_tracker() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(url) = config::analytics_webhook_url() {
                if let Some(window) = web_sys::window() {
                    let path = window
                        .location()
                        .pathname()
                        .unwrap_or_else(|_| "/".to_string());
                    let referrer = window
                        .document()
                        .map(|document| document.referrer())
                        .unwrap_or_default();
                    let view = PageView::capture(path, referrer, Utc::now());
                    spawn_local(async move {
                        if let Ok(request) = Request::post(url).json(&view) {
                            let _ = request.send().await;
                        }
                    });
                }
            }
            || ()
        },
        (),
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn empty_referrer_is_dropped_from_the_payload() {
        let observed_at = Utc.with_ymd_and_hms(2026, 2, 14, 12, 0, 0).unwrap();
        let view = PageView::capture("/".to_string(), String::new(), observed_at);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["path"], "/");
        assert_eq!(json["timestamp"], "2026-02-14T12:00:00.000Z");
        assert!(json.get("referrer").is_none());
    }

    #[test]
    fn referrer_is_forwarded_verbatim_when_present() {
        let observed_at = Utc.with_ymd_and_hms(2026, 2, 14, 12, 0, 0).unwrap();
        let view = PageView::capture(
            "/".to_string(),
            "https://www.google.com/".to_string(),
            observed_at,
        );
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["referrer"], "https://www.google.com/");
    }
}
