//! GitHub API type definitions

use serde::Deserialize;
use std::fmt;

/// Body of `GET /repos/{owner}/{repo}/releases/latest`
///
/// Error responses share the endpoint and carry only `message`, so every
/// field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LatestRelease {
    /// Top-level error indicator ("Not Found", "Bad credentials", ...)
    pub message: Option<String>,
    pub tag_name: Option<String>,
    pub assets: Vec<ReleaseAsset>,
}

/// GitHub release asset
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReleaseAsset {
    pub name: Option<String>,
    pub browser_download_url: Option<String>,
}

impl LatestRelease {
    /// Asset download URLs in the order the API listed them
    pub fn download_urls(&self) -> Vec<String> {
        self.assets
            .iter()
            .filter_map(|asset| asset.browser_download_url.clone())
            .collect()
    }
}

/// Result of the pre-flight `GET /repos/{owner}/{repo}` check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    Accessible,
    NotFound,
    AuthFailed(u16),
    Unexpected(u16),
}

impl AccessStatus {
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => AccessStatus::Accessible,
            404 => AccessStatus::NotFound,
            401 | 403 => AccessStatus::AuthFailed(status),
            other => AccessStatus::Unexpected(other),
        }
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessStatus::Accessible => write!(f, "accessible"),
            AccessStatus::NotFound => write!(f, "not found (HTTP 404)"),
            AccessStatus::AuthFailed(code) => write!(f, "authentication failed (HTTP {})", code),
            AccessStatus::Unexpected(code) => write!(f, "unexpected response (HTTP {})", code),
        }
    }
}

/// What kind of content a download fetches; selects the `Accept` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadKind {
    /// raw.githubusercontent.com file
    Raw,
    /// Release asset binary
    Asset,
}

impl DownloadKind {
    pub fn accept_header(&self) -> &'static str {
        match self {
            DownloadKind::Raw => "application/vnd.github.v3.raw",
            DownloadKind::Asset => "application/octet-stream",
        }
    }
}
