//! Trait definitions for dependency injection

use crate::github::types::{AccessStatus, DownloadKind, LatestRelease};
use crate::resolver::RepositoryReference;
use async_trait::async_trait;
use ghfetch_core::{AccessToken, GhfetchResult};
use std::path::Path;

/// Trait for GitHub operations
///
/// Provides the HTTP calls a download run needs, so the orchestration and
/// release resolution can be tested without network access.
#[async_trait]
pub trait GitHubProvider: Send + Sync {
    /// Pre-flight `GET /repos/{owner}/{repo}`; the status is advisory
    async fn check_access(
        &self,
        repository: &RepositoryReference,
        token: &AccessToken,
    ) -> GhfetchResult<AccessStatus>;

    /// `GET /repos/{owner}/{repo}/releases/latest`, parsed, including error bodies
    async fn get_latest_release(
        &self,
        repository: &RepositoryReference,
        token: Option<&AccessToken>,
    ) -> GhfetchResult<LatestRelease>;

    /// Whether the API host answers at all
    async fn is_reachable(&self) -> bool;

    /// Download `url` into `dest`, returning the number of bytes written
    async fn download(
        &self,
        url: &str,
        dest: &Path,
        kind: DownloadKind,
        token: Option<&AccessToken>,
    ) -> GhfetchResult<u64>;
}
