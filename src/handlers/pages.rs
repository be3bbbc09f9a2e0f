//! Minimal server-rendered pages. Styling and full translations live in the
//! presentation layer; these only carry what the redirect flow needs.

use chrono::NaiveDate;
use serde_json::{Value, json};
use url::Url;

use crate::models::preferences::{Language, Preferences};

/// Query parameters the resolver appends when it sends a visitor home.
#[derive(Debug, Default, serde::Deserialize)]
pub struct LandingQuery {
    pub error: Option<String>,
    pub code: Option<String>,
}

/// Localised text for a known error classification. Unknown tags are dropped.
pub fn notice(language: Language, classification: &str) -> Option<&'static str> {
    let text = match (classification, language) {
        ("not_found", Language::En) => "This short link does not exist or has expired.",
        ("not_found", Language::Vi) => "Liên kết rút gọn không tồn tại hoặc đã hết hạn.",
        ("api_error", Language::En) => "The link service returned an error. Please try again.",
        ("api_error", Language::Vi) => "Dịch vụ liên kết trả về lỗi. Vui lòng thử lại.",
        ("connection_error", Language::En) => {
            "Failed to connect to the server. Please try again later."
        }
        ("connection_error", Language::Vi) => {
            "Không thể kết nối đến máy chủ. Vui lòng thử lại sau."
        }
        _ => return None,
    };

    Some(text)
}

pub fn landing(prefs: &Preferences, query: &LandingQuery) -> String {
    let notice = query
        .error
        .as_deref()
        .and_then(|tag| notice(prefs.language, tag))
        .map(|text| match query.code.as_deref().and_then(|c| c.parse::<u16>().ok()) {
            Some(code) => format!(r#"<p class="notice" data-code="{code}">{text}</p>"#),
            None => format!(r#"<p class="notice">{text}</p>"#),
        })
        .unwrap_or_default();

    let terms = if prefs.terms_accepted {
        ""
    } else {
        r#"<p class="terms-required"><a href="/terms">Terms</a></p>"#
    };

    document(
        prefs,
        "URL Shortener",
        &format!(
            r#"{notice}<form id="shorten"><input type="url" name="url" required><button type="submit">Shorten</button></form>{terms}"#
        ),
    )
}

pub fn terms(prefs: &Preferences) -> String {
    let state = if prefs.terms_accepted {
        r#"<p class="terms-accepted">Terms accepted</p>"#
    } else {
        r#"<button id="accept-terms" type="button" data-endpoint="/api/preferences/terms">Accept</button>"#
    };

    document(prefs, "Terms and Conditions", state)
}

fn document(prefs: &Preferences, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="{}" class="{}"><head><meta charset="utf-8"><title>{title}</title><link rel="manifest" href="/manifest.webmanifest"></head><body><h1>{title}</h1>{body}</body></html>"#,
        prefs.language, prefs.theme
    )
}

pub fn sitemap(public_url: &Url, last_modified: NaiveDate) -> String {
    let root = public_url.as_str().trim_end_matches('/');
    let entries = [("", "weekly", "1.0"), ("/terms", "monthly", "0.8")]
        .iter()
        .map(|(path, frequency, priority)| {
            format!(
                "<url><loc>{root}{path}</loc><lastmod>{last_modified}</lastmod><changefreq>{frequency}</changefreq><priority>{priority}</priority></url>"
            )
        })
        .collect::<String>();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{entries}</urlset>"#
    )
}

pub fn manifest() -> Value {
    json!({
        "name": "URL Shortener",
        "short_name": "URLShort",
        "description": "Transform your long URLs into short, easy-to-share links",
        "start_url": "/",
        "display": "standalone",
        "background_color": "#6d28d9",
        "theme_color": "#8b5cf6",
        "icons": [
            { "src": "/favicon.ico", "sizes": "any", "type": "image/x-icon" },
            { "src": "/icon-192.png", "sizes": "192x192", "type": "image/png" },
            { "src": "/icon-512.png", "sizes": "512x512", "type": "image/png" },
            { "src": "/icon-maskable.png", "sizes": "512x512", "type": "image/png", "purpose": "maskable" }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preferences::Theme;

    #[test]
    fn known_classifications_have_text() {
        for tag in ["not_found", "api_error", "connection_error"] {
            assert!(notice(Language::En, tag).is_some());
            assert!(notice(Language::Vi, tag).is_some());
        }
        assert_eq!(notice(Language::En, "<script>"), None);
    }

    #[test]
    fn landing_ignores_unknown_error() {
        let query = LandingQuery {
            error: Some("<b>bad</b>".to_string()),
            code: None,
        };

        let html = landing(&Preferences::default(), &query);

        assert!(!html.contains("notice"));
        assert!(!html.contains("<b>bad</b>"));
    }

    #[test]
    fn landing_drops_non_numeric_code() {
        let query = LandingQuery {
            error: Some("api_error".to_string()),
            code: Some("\"><script>".to_string()),
        };

        let html = landing(&Preferences::default(), &query);

        assert!(html.contains(r#"<p class="notice">"#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn landing_renders_notice_in_preferred_language() {
        let prefs = Preferences {
            language: Language::Vi,
            theme: Theme::Light,
            terms_accepted: true,
        };
        let query = LandingQuery {
            error: Some("api_error".to_string()),
            code: Some("502".to_string()),
        };

        let html = landing(&prefs, &query);

        assert!(html.contains(r#"lang="vi""#));
        assert!(html.contains(r#"class="light""#));
        assert!(html.contains(r#"data-code="502""#));
        assert!(html.contains("Dịch vụ liên kết trả về lỗi"));
        assert!(!html.contains("terms-required"));
    }

    #[test]
    fn sitemap_lists_root_and_terms() {
        let url = Url::parse("https://short.example/").unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 4, 21).unwrap();

        let xml = sitemap(&url, date);

        assert!(xml.contains("<loc>https://short.example</loc>"));
        assert!(xml.contains("<loc>https://short.example/terms</loc>"));
        assert!(xml.contains("<lastmod>2025-04-21</lastmod>"));
    }
}
