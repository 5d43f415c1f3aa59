//! Mock implementations of service traits for testing

use super::traits::GitHubProvider;
use crate::github::types::{AccessStatus, DownloadKind, LatestRelease};
use crate::resolver::RepositoryReference;
use async_trait::async_trait;
use ghfetch_core::{AccessToken, GhfetchError, GhfetchResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A call received by [`MockGitHubProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    CheckAccess {
        repository: String,
    },
    LatestRelease {
        repository: String,
        authenticated: bool,
    },
    IsReachable,
    Download {
        url: String,
        dest: PathBuf,
        kind: DownloadKind,
        authenticated: bool,
    },
}

/// Mock GitHub provider for testing
///
/// Records every call and answers from canned data. Downloads write
/// `download_body` to the destination path.
///
/// # Example
///
/// ```
/// use ghfetch::di::mocks::MockGitHubProvider;
/// use ghfetch::github::types::AccessStatus;
///
/// let github = MockGitHubProvider::new()
///     .with_access(AccessStatus::NotFound)
///     .with_reachable(false);
///
/// assert!(github.calls().is_empty());
/// ```
pub struct MockGitHubProvider {
    pub access: AccessStatus,
    pub access_error: Option<String>,
    pub release_json: Option<String>,
    pub reachable: bool,
    pub download_body: Vec<u8>,
    pub download_error: Option<String>,
    calls: Mutex<Vec<MockCall>>,
}

impl Default for MockGitHubProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGitHubProvider {
    pub fn new() -> Self {
        Self {
            access: AccessStatus::Accessible,
            access_error: None,
            release_json: None,
            reachable: true,
            download_body: b"mock content".to_vec(),
            download_error: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_access(mut self, access: AccessStatus) -> Self {
        self.access = access;
        self
    }

    /// Make the access check itself fail
    pub fn with_access_error(mut self, message: &str) -> Self {
        self.access_error = Some(message.to_string());
        self
    }

    /// Body returned by the latest-release endpoint
    pub fn with_release_json(mut self, json: &str) -> Self {
        self.release_json = Some(json.to_string());
        self
    }

    pub fn with_reachable(mut self, reachable: bool) -> Self {
        self.reachable = reachable;
        self
    }

    pub fn with_download_body(mut self, body: &[u8]) -> Self {
        self.download_body = body.to_vec();
        self
    }

    pub fn with_download_error(mut self, message: &str) -> Self {
        self.download_error = Some(message.to_string());
        self
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: MockCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl GitHubProvider for MockGitHubProvider {
    async fn check_access(
        &self,
        repository: &RepositoryReference,
        _token: &AccessToken,
    ) -> GhfetchResult<AccessStatus> {
        self.record(MockCall::CheckAccess {
            repository: repository.to_string(),
        });
        match self.access_error {
            Some(ref message) => Err(GhfetchError::AuthOrApi(message.clone())),
            None => Ok(self.access),
        }
    }

    async fn get_latest_release(
        &self,
        repository: &RepositoryReference,
        token: Option<&AccessToken>,
    ) -> GhfetchResult<LatestRelease> {
        self.record(MockCall::LatestRelease {
            repository: repository.to_string(),
            authenticated: token.is_some(),
        });

        let json = self
            .release_json
            .as_deref()
            .ok_or_else(|| GhfetchError::AuthOrApi("no release configured in mock".to_string()))?;
        serde_json::from_str(json)
            .map_err(|e| GhfetchError::AuthOrApi(format!("invalid mock release: {}", e)))
    }

    async fn is_reachable(&self) -> bool {
        self.record(MockCall::IsReachable);
        self.reachable
    }

    async fn download(
        &self,
        url: &str,
        dest: &Path,
        kind: DownloadKind,
        token: Option<&AccessToken>,
    ) -> GhfetchResult<u64> {
        self.record(MockCall::Download {
            url: url.to_string(),
            dest: dest.to_path_buf(),
            kind,
            authenticated: token.is_some(),
        });

        if let Some(ref message) = self.download_error {
            return Err(GhfetchError::DownloadFailed(message.clone()));
        }

        fs::write(dest, &self.download_body)?;
        Ok(self.download_body.len() as u64)
    }
}
