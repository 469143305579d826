//! # uasgz-fetch — Cached Document Retrieval
//!
//! Downloads and caches the source documents the converter consumes.
//! Cache entries live under `.cache/`, named by the SHA-256 of the URL
//! plus the original file extension. A fresh entry (younger than the
//! caller's TTL) is served without touching the network; a stale entry
//! triggers a conditional GET with `If-Modified-Since` so an unchanged
//! remote costs no transfer.
//!
//! Any response other than 200 or 304 is an error; there is no retry
//! at this layer.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use reqwest::{header, StatusCode};
use sha2::{Digest, Sha256};
use thiserror::Error;
use url::Url;

/// Location used to cache downloaded files.
pub const DEFAULT_CACHE_DIR: &str = ".cache";

/// Connection and read timeout when retrieving files.
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Error retrieving a source document.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL did not parse.
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The request failed at the transport level.
    #[error("request to '{url}' failed: {source}")]
    Http {
        /// The requested URL.
        url: String,
        /// Underlying client error.
        source: reqwest::Error,
    },

    /// The server answered with a status this layer does not handle.
    #[error("server status {status} for '{url}' is not supported")]
    UnexpectedStatus {
        /// The requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// IO error reading or writing the cache.
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Download and cache the file located at `url`, returning the local
/// cache path. Cache entries younger than `cache_ttl` are served
/// directly.
pub fn fetch(url: &str, cache_ttl: Option<Duration>) -> Result<PathBuf, FetchError> {
    fetch_into(Path::new(DEFAULT_CACHE_DIR), url, cache_ttl)
}

/// Like [`fetch`], with an explicit cache directory.
pub fn fetch_into(
    cache_dir: &Path,
    url: &str,
    cache_ttl: Option<Duration>,
) -> Result<PathBuf, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    let path = cache_dir.join(cache_name(&parsed));

    let cached_since = match std::fs::metadata(&path) {
        Ok(metadata) => metadata.modified().ok(),
        Err(_) => None,
    };

    if let (Some(modified), Some(ttl)) = (cached_since, cache_ttl) {
        if let Ok(age) = modified.elapsed() {
            if age < ttl {
                tracing::debug!(
                    url,
                    path = %path.display(),
                    ttl_remaining_secs = (ttl - age).as_secs(),
                    "cache hit"
                );
                return Ok(path);
            }
        }
    }

    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| FetchError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let mut request = client.get(parsed);
    if let Some(modified) = cached_since {
        // Tell the server when our copy was retrieved.
        request = request.header(header::IF_MODIFIED_SINCE, http_date(modified));
    }

    let response = request.send().map_err(|e| FetchError::Http {
        url: url.to_string(),
        source: e,
    })?;

    match response.status() {
        StatusCode::OK => {
            let body = response.bytes().map_err(|e| FetchError::Http {
                url: url.to_string(),
                source: e,
            })?;
            std::fs::create_dir_all(cache_dir)?;
            std::fs::write(&path, &body)?;
            tracing::debug!(url, path = %path.display(), bytes = body.len(), "downloaded");
        }
        StatusCode::NOT_MODIFIED => {
            // Our copy is up to date with the server.
            tracing::debug!(url, path = %path.display(), "not modified");
        }
        status => {
            return Err(FetchError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            })
        }
    }

    Ok(path)
}

/// Filesystem-safe cache entry name: SHA-256 of the URL, keeping the
/// original extension so downstream consumers can sniff the format.
fn cache_name(url: &Url) -> String {
    let digest = Sha256::digest(url.as_str().as_bytes());
    let mut name = String::with_capacity(digest.len() * 2 + 8);
    for byte in digest {
        name.push_str(&format!("{byte:02x}"));
    }
    let last_segment = url.path().rsplit('/').next().unwrap_or("");
    if let Some((_, extension)) = last_segment.rsplit_once('.') {
        name.push('.');
        name.push_str(extension);
    }
    name
}

/// HTTP-date rendering of a filesystem timestamp.
fn http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}
