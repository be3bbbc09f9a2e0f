//! Client preference flags stored as cookies on the visitor's device.
//!
//! Each flag is its own cookie so reading or writing one never touches the
//! others. Nothing is kept server-side.

use actix_web::{
    HttpRequest,
    cookie::{Cookie, SameSite},
};

use crate::models::preferences::{Language, Preferences, PreferencesUpdate, Theme};

pub const TERMS_COOKIE: &str = "termsAccepted";
pub const LANGUAGE_COOKIE: &str = "language";
pub const THEME_COOKIE: &str = "theme";

/// Read every flag, falling back to defaults for missing or unknown values.
pub fn load(req: &HttpRequest) -> Preferences {
    Preferences {
        language: get(req, LANGUAGE_COOKIE).unwrap_or_default(),
        theme: get(req, THEME_COOKIE).unwrap_or_default(),
        terms_accepted: terms_accepted(req),
    }
}

pub fn terms_accepted(req: &HttpRequest) -> bool {
    req.cookie(TERMS_COOKIE)
        .is_some_and(|cookie| cookie.value() == "true")
}

pub fn get<T: std::str::FromStr>(req: &HttpRequest, key: &str) -> Option<T> {
    req.cookie(key).and_then(|cookie| cookie.value().parse().ok())
}

pub fn set(key: &'static str, value: impl ToString) -> Cookie<'static> {
    Cookie::build(key, value.to_string())
        .path("/")
        .same_site(SameSite::Lax)
        .permanent()
        .finish()
}

pub fn accept_terms() -> Cookie<'static> {
    set(TERMS_COOKIE, true)
}

pub fn set_language(language: Language) -> Cookie<'static> {
    set(LANGUAGE_COOKIE, language)
}

pub fn set_theme(theme: Theme) -> Cookie<'static> {
    set(THEME_COOKIE, theme)
}

/// Apply a partial update, returning the new flags and the cookies that need
/// to be written for the fields that were present.
pub fn apply(current: Preferences, update: PreferencesUpdate) -> (Preferences, Vec<Cookie<'static>>) {
    let mut next = current;
    let mut cookies = Vec::new();

    if let Some(language) = update.language {
        next.language = language;
        cookies.push(set_language(language));
    }

    if let Some(theme) = update.theme {
        next.theme = theme;
        cookies.push(set_theme(theme));
    }

    (next, cookies)
}
