//! Short-link resolution.
//!
//! Every inbound path ends up as exactly one [`Resolution`]: served by the
//! static router, sent home, sent to its destination, or sent home with an
//! error classification. Steps always run in the same order: parse, reserved
//! check, empty check, lookup.

use std::borrow::Cow;

use tracing::{debug, error, info, warn};

use crate::{
    backend::{BackendClient, BackendError},
    config::ReservedPaths,
    models::lookup::LookupResponse,
};

/// What the inbound path means before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathKind<'a> {
    Reserved(Cow<'a, str>),
    Empty,
    Code(Cow<'a, str>),
}

/// Classify a still percent-encoded path. The candidate code is the last
/// non-empty segment, decoded only after splitting so `%2F` stays inside it.
/// Reserved names always win over code interpretation.
pub fn classify<'a>(path: &'a str, reserved: &ReservedPaths) -> PathKind<'a> {
    let Some(segment) = path.split('/').filter(|s| !s.is_empty()).next_back() else {
        return PathKind::Empty;
    };

    let candidate = decode_segment(segment);
    if reserved.contains(&candidate) {
        PathKind::Reserved(candidate)
    } else {
        PathKind::Code(candidate)
    }
}

fn decode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or_else(|_| {
        let bytes = urlencoding::decode_binary(segment.as_bytes());
        Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    /// Backend answered with a non-success status.
    Api { status: u16 },
    /// Backend answered but has no usable mapping for the code.
    NotFound,
    /// Backend unreachable or its answer could not be read.
    Connection,
}

impl LookupFailure {
    pub fn classification(&self) -> &'static str {
        match self {
            LookupFailure::Api { .. } => "api_error",
            LookupFailure::NotFound => "not_found",
            LookupFailure::Connection => "connection_error",
        }
    }

    /// Site root with the classification (and status, for API errors) in the
    /// query string.
    pub fn redirect_target(&self) -> String {
        match self {
            LookupFailure::Api { status } => {
                format!("/?error={}&code={status}", self.classification())
            }
            _ => format!("/?error={}", self.classification()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Reserved route; the static router owns it.
    PassThrough,
    Home,
    Destination(String),
    Failed(LookupFailure),
}

impl Resolution {
    /// Where to redirect, or `None` for pass-through.
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            Resolution::PassThrough => None,
            Resolution::Home => Some("/".to_string()),
            Resolution::Destination(url) => Some(url.clone()),
            Resolution::Failed(failure) => Some(failure.redirect_target()),
        }
    }
}

/// Map the result of a single lookup call onto an outcome.
pub fn interpret(code: &str, result: Result<LookupResponse, BackendError>) -> Resolution {
    match result {
        Ok(body) => match body.destination() {
            Some(url) => {
                info!("Resolved {code} to {url}");
                Resolution::Destination(url.to_string())
            }
            None => {
                warn!(
                    "Lookup for {code} failed: {}",
                    body.error.as_deref().unwrap_or("no usable originalUrl")
                );
                Resolution::Failed(LookupFailure::NotFound)
            }
        },
        Err(BackendError::Status { status, body }) => {
            error!("Backend returned {status} for {code}: {body}");
            Resolution::Failed(LookupFailure::Api { status })
        }
        Err(e) => {
            error!("Lookup for {code} failed: {e}");
            Resolution::Failed(LookupFailure::Connection)
        }
    }
}

pub struct Resolver {
    backend: BackendClient,
    reserved: ReservedPaths,
}

impl Resolver {
    pub fn new(backend: BackendClient, reserved: ReservedPaths) -> Self {
        Self { backend, reserved }
    }

    /// Resolve a percent-encoded `path` with at most one backend call and no
    /// retries.
    pub async fn resolve(&self, path: &str) -> Resolution {
        match classify(path, &self.reserved) {
            PathKind::Reserved(segment) => {
                debug!("'{segment}' is a reserved route, passing through");
                Resolution::PassThrough
            }
            PathKind::Empty => {
                debug!("No short code in '{path}', redirecting home");
                Resolution::Home
            }
            PathKind::Code(code) => interpret(&code, self.backend.lookup(&code).await),
        }
    }
}
