use std::{collections::HashSet, env, fmt::Display, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::{info, warn};
use url::Url;

pub const DEFAULT_RESERVED_PATHS: &str =
    "terms,favicon.ico,robots.txt,sitemap.xml,manifest.webmanifest";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Path segments that are served as static pages and must never be treated
/// as short codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedPaths(HashSet<String>);

impl ReservedPaths {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            segments
                .into_iter()
                .map(Into::into)
                .map(|s| s.trim().trim_matches('/').to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, segment: &str) -> bool {
        self.0.contains(segment)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ReservedPaths {
    fn default() -> Self {
        Self::new(DEFAULT_RESERVED_PATHS.split(','))
    }
}

impl FromStr for ReservedPaths {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.split(',')))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base of the shortener API, e.g. `http://localhost:8080/v1/short-url`.
    pub backend_url: Url,
    /// Public origin of this site, used for sitemap entries.
    pub public_url: Url,
    pub backend_timeout: Duration,
    pub reserved_paths: ReservedPaths,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let timeout_secs: u64 = try_load("BACKEND_TIMEOUT_SECS", "5")?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "BACKEND_TIMEOUT_SECS",
                reason: "must be at least one second".to_string(),
            });
        }

        Ok(Self {
            host: try_load("HOST", "0.0.0.0")?,
            port: try_load("PORT", "80")?,
            backend_url: try_load("BACKEND_URL", "http://localhost:8080/v1/short-url")?,
            public_url: try_load("PUBLIC_URL", "http://localhost")?,
            backend_timeout: Duration::from_secs(timeout_secs),
            reserved_paths: try_load("RESERVED_PATHS", DEFAULT_RESERVED_PATHS)?,
        })
    }
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }
    })
}
