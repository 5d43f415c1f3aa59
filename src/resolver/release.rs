//! Latest-release resolution
//!
//! Turns the latest-release response into zero, one or many candidate
//! download URLs. Choosing between several candidates is left to the caller.

use crate::di::traits::GitHubProvider;
use crate::github::types::LatestRelease;
use crate::resolver::url::RepositoryReference;
use ghfetch_core::{AccessToken, GhfetchError, GhfetchResult};
use tracing::debug;

const NOT_FOUND_MESSAGE: &str = "Not Found";

/// What the latest release offers for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    SingleAsset(String),
    NoAssets {
        tag: Option<String>,
    },
    /// Needs an external choice; `assets` keeps the API's order
    MultipleAssets {
        assets: Vec<String>,
        tag: Option<String>,
    },
}

/// Query the latest release of `repository` and classify its assets
pub async fn resolve_latest_release(
    github: &dyn GitHubProvider,
    repository: &RepositoryReference,
    token: Option<&AccessToken>,
) -> GhfetchResult<DownloadOutcome> {
    let release = github.get_latest_release(repository, token).await?;
    outcome_from_release(repository, release)
}

/// Classify a parsed latest-release body
///
/// A top-level `message` means the API refused the request: "Not Found"
/// maps to [`GhfetchError::RepositoryNotFound`], anything else to
/// [`GhfetchError::AuthOrApi`].
pub fn outcome_from_release(
    repository: &RepositoryReference,
    release: LatestRelease,
) -> GhfetchResult<DownloadOutcome> {
    if let Some(message) = release.message.as_deref() {
        return Err(if message.trim() == NOT_FOUND_MESSAGE {
            GhfetchError::RepositoryNotFound(format!(
                "{} (or it has no published releases)",
                repository
            ))
        } else {
            GhfetchError::AuthOrApi(message.to_string())
        });
    }

    let mut assets = release.download_urls();
    let tag = release.tag_name;
    debug!(%repository, tag = ?tag, assets = assets.len(), "resolved latest release");

    Ok(match assets.len() {
        0 => DownloadOutcome::NoAssets { tag },
        1 => DownloadOutcome::SingleAsset(assets.remove(0)),
        _ => DownloadOutcome::MultipleAssets { assets, tag },
    })
}

/// Pick an asset by a 1-based index typed by the user
pub fn select_asset<'a>(assets: &'a [String], answer: &str) -> GhfetchResult<&'a str> {
    let invalid = || GhfetchError::InvalidSelection {
        input: answer.trim().to_string(),
        count: assets.len(),
    };

    let index = answer.trim().parse::<usize>().map_err(|_| invalid())?;
    if index == 0 || index > assets.len() {
        return Err(invalid());
    }
    Ok(&assets[index - 1])
}
