use std::time::Duration;

use reqwest::{
    Client, Response,
    header::{ACCEPT, CACHE_CONTROL},
};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::BackendError;
use crate::models::{
    lookup::LookupResponse,
    shorten::{ShortenRequest, ShortenResponse},
};

const LOOKUP_PATH: &str = "lookup";
const SHORTEN_PATH: &str = "shorten";

/// HTTP client for the shortener backend. Holds no per-request state, so a
/// single instance is shared by all workers.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base: Url,
}

impl BackendClient {
    pub fn new(base: Url, timeout: Duration) -> Result<Self, BackendError> {
        if base.cannot_be_a_base() {
            return Err(BackendError::InvalidBaseUrl(base.to_string()));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BackendError::Transport)?;

        Ok(Self { http, base })
    }

    /// `GET {base}/lookup/{code}`. Always hits the backend; expiry is decided
    /// there, so nothing is cached here.
    pub async fn lookup(&self, code: &str) -> Result<LookupResponse, BackendError> {
        let url = self.endpoint(&[LOOKUP_PATH, code]);
        debug!("Looking up {code} at {url}");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(BackendError::Transport)?;

        decode(response).await
    }

    /// `POST {base}/shorten` with `{ "url": ... }`.
    pub async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, BackendError> {
        let url = self.endpoint(&[SHORTEN_PATH]);
        debug!("Shortening {} via {url}", request.url);

        let response = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(BackendError::Transport)?;

        decode(response).await
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await.map_err(BackendError::Transport)?;
    Ok(serde_json::from_slice(&bytes)?)
}
