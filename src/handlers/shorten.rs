use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;
use tracing::{error, info, warn};
use url::Url;

use crate::{
    backend::{BackendClient, BackendError},
    models::shorten::{ShortenRequest, ShortenResponse},
};

#[derive(Error, Debug)]
pub enum ShortenError {
    #[error("terms_not_accepted")]
    TermsNotAccepted,

    #[error("url_required")]
    UrlRequired,

    #[error("invalid_url")]
    InvalidUrl,

    #[error("API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("connection_error")]
    Connection,
}

impl ResponseError for ShortenError {
    fn status_code(&self) -> StatusCode {
        match self {
            ShortenError::TermsNotAccepted => StatusCode::FORBIDDEN,
            ShortenError::UrlRequired | ShortenError::InvalidUrl => StatusCode::BAD_REQUEST,
            ShortenError::Upstream { .. } | ShortenError::Connection => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ShortenResponse::failure(self.to_string()))
    }
}

/// Check a submitted URL before it is forwarded. Returns the trimmed value.
pub fn validate(url: &str) -> Result<&str, ShortenError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(ShortenError::UrlRequired);
    }

    Url::parse(url).map_err(|_| ShortenError::InvalidUrl)?;

    Ok(url)
}

/// Validate and forward a shorten request. Backend `success: false` bodies
/// are relayed as-is; only transport level failures become errors.
pub async fn shorten(
    backend: &BackendClient,
    terms_accepted: bool,
    request: ShortenRequest,
) -> Result<ShortenResponse, ShortenError> {
    if !terms_accepted {
        return Err(ShortenError::TermsNotAccepted);
    }

    let url = validate(&request.url)?.to_string();

    match backend.shorten(&ShortenRequest { url }).await {
        Ok(response) => {
            if !response.is_consistent() {
                warn!("Backend reported success without a shortUrl");
            } else if response.success {
                info!(
                    "Shortened to {}",
                    response.short_url.as_deref().unwrap_or_default()
                );
            }
            Ok(response)
        }
        Err(BackendError::Status { status, body }) => {
            error!("Backend returned {status} while shortening: {body}");
            let body = if body.is_empty() {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or_default()
                    .to_string()
            } else {
                body
            };
            Err(ShortenError::Upstream { status, body })
        }
        Err(e) => {
            error!("Shorten request failed: {e}");
            Err(ShortenError::Connection)
        }
    }
}
