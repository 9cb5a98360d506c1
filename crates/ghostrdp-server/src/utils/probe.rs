//! Reachability probe for the gateway's remote API.
//!
//! One `GET` with a bounded timeout. Any HTTP response, whatever its status,
//! counts as reachable. Failures are reported as [`ProbeError`] so callers can
//! log them, then folded into [`Reachability::Unreachable`].

use ghostrdp_utils::logging::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use url::Url;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("probe of {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Outcome reported by the setup status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Reachability {
    #[serde(rename = "reachable")]
    Reachable,
    #[serde(rename = "unreachable")]
    Unreachable,
    #[serde(rename = "not configured")]
    NotConfigured,
}

impl Reachability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reachability::Reachable => "reachable",
            Reachability::Unreachable => "unreachable",
            Reachability::NotConfigured => "not configured",
        }
    }
}

fn parse_url(raw: &str) -> Result<Url, ProbeError> {
    let url = Url::parse(raw).map_err(|e| ProbeError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ProbeError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

/// Sends one `GET` to `raw_url`, returning the HTTP status it answered with.
pub async fn probe(raw_url: &str, timeout: Duration) -> Result<u16, ProbeError> {
    let url = parse_url(raw_url)?;
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()
        .map_err(ProbeError::Client)?;

    match client.get(url).send().await {
        Ok(response) => Ok(response.status().as_u16()),
        Err(e) if e.is_timeout() => Err(ProbeError::Timeout {
            url: raw_url.to_string(),
            timeout,
        }),
        Err(e) => Err(ProbeError::Request {
            url: raw_url.to_string(),
            source: e,
        }),
    }
}

/// Probes `remote_api_url` if one is configured. Never fails.
pub async fn check_reachability(remote_api_url: Option<&str>, timeout: Duration) -> Reachability {
    let Some(url) = remote_api_url else {
        return Reachability::NotConfigured;
    };

    match probe(url, timeout).await {
        Ok(status) => {
            debug!("Remote API at {} answered with HTTP {}", url, status);
            Reachability::Reachable
        }
        Err(e) => {
            warn!("Remote API probe failed: {}", e);
            Reachability::Unreachable
        }
    }
}
