//! One download run: prompt → classify → pre-flight → resolve → download

use crate::cli::input::{TokenAnswer, UserInput};
use crate::cli::status;
use ghfetch::config::Config;
use ghfetch::di::GitHubProvider;
use ghfetch::github::types::{AccessStatus, DownloadKind};
use ghfetch::resolver::{self, DownloadOutcome, Route};
use ghfetch::{AccessToken, GhfetchError, GhfetchResult};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// How a run ended without error
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The user answered `-q` at the token prompt
    Quit,
    Downloaded { path: PathBuf, bytes: u64 },
}

pub async fn run(
    config: &Config,
    github: &dyn GitHubProvider,
    input: &dyn UserInput,
) -> GhfetchResult<RunOutcome> {
    let url = input.prompt_url()?;

    let token = match TokenAnswer::parse(input.prompt_token()?) {
        TokenAnswer::Quit => {
            status::info("Quitting.");
            return Ok(RunOutcome::Quit);
        }
        TokenAnswer::Anonymous => None,
        TokenAnswer::Token(token) => Some(token),
    };

    let result = fetch(config, github, input, &url, token.as_ref()).await;

    // Wiped on drop, whatever the result
    drop(token);
    result
}

async fn fetch(
    config: &Config,
    github: &dyn GitHubProvider,
    input: &dyn UserInput,
    url: &str,
    token: Option<&AccessToken>,
) -> GhfetchResult<RunOutcome> {
    let route = classify(config, github, url).await?;
    info!(?route, "classified URL");

    match token {
        Some(token) => preflight(github, url, token).await,
        None => debug!("no token given, skipping access check"),
    }

    match route {
        Route::RawFile(ref raw_url) => {
            let filename = resolver::resolve_direct_asset_or_raw_file(&route)?;
            download(config, github, raw_url, &filename, DownloadKind::Raw, token).await
        }
        Route::ReleaseAssetDirect(ref asset_url) => {
            let filename = resolver::resolve_direct_asset_or_raw_file(&route)?;
            download(config, github, asset_url, &filename, DownloadKind::Asset, token).await
        }
        Route::RepositoryLatestRelease(ref repository) => {
            status::info(&format!(
                "Looking up the latest release of {}...",
                repository
            ));
            let outcome = resolver::resolve_latest_release(github, repository, token).await?;
            let asset_url = choose_asset(input, outcome)?;
            let filename = resolver::filename_from_url(&asset_url)?;

            // The token budget is spent on the pre-flight check and the lookup
            download(config, github, &asset_url, &filename, DownloadKind::Asset, None).await
        }
    }
}

/// Classify `url`; a URL that cannot be classified at all is explained by
/// an unreachable API when GitHub does not answer.
async fn classify(
    config: &Config,
    github: &dyn GitHubProvider,
    url: &str,
) -> GhfetchResult<Route> {
    match resolver::classify(url) {
        Err(GhfetchError::UnparseableUrl(unparsed)) => {
            if github.is_reachable().await {
                Err(GhfetchError::UnparseableUrl(unparsed))
            } else {
                Err(GhfetchError::ApiUnreachable(config.api_url.clone()))
            }
        }
        other => other,
    }
}

/// Advisory access check; never stops the run
async fn preflight(github: &dyn GitHubProvider, url: &str, token: &AccessToken) {
    let repository = match resolver::parse_repository(url) {
        Ok(repository) => repository,
        Err(_) => return,
    };

    match github.check_access(&repository, token).await {
        Ok(AccessStatus::Accessible) => {
            status::success(&format!("Repository {} is accessible", repository))
        }
        Ok(AccessStatus::NotFound) => status::warning(&format!(
            "Repository {} was not found with this token; trying anyway",
            repository
        )),
        Ok(AccessStatus::AuthFailed(code)) => status::warning(&format!(
            "Token was rejected for {} (HTTP {}); trying anyway",
            repository, code
        )),
        Ok(AccessStatus::Unexpected(code)) => status::warning(&format!(
            "Unexpected response checking {} (HTTP {}); trying anyway",
            repository, code
        )),
        Err(e) => status::warning(&format!("Access check failed: {}; trying anyway", e)),
    }
}

fn choose_asset(input: &dyn UserInput, outcome: DownloadOutcome) -> GhfetchResult<String> {
    match outcome {
        DownloadOutcome::SingleAsset(url) => Ok(url),
        DownloadOutcome::NoAssets { tag } => Err(GhfetchError::NoAssets { tag }),
        DownloadOutcome::MultipleAssets { assets, tag } => {
            let names: Vec<String> = assets
                .iter()
                .map(|url| resolver::filename_from_url(url).unwrap_or_else(|_| url.clone()))
                .collect();
            status::choices(
                &format!(
                    "Release {} has {} assets:",
                    tag.as_deref().unwrap_or("(untagged)"),
                    assets.len()
                ),
                &names,
            );

            let answer = input.prompt_selection(assets.len())?;
            let selected = resolver::select_asset(&assets, &answer)?;
            info!(asset = %selected, "asset selected");
            Ok(selected.to_string())
        }
    }
}

async fn download(
    config: &Config,
    github: &dyn GitHubProvider,
    url: &str,
    filename: &str,
    kind: DownloadKind,
    token: Option<&AccessToken>,
) -> GhfetchResult<RunOutcome> {
    fs::create_dir_all(&config.output_dir)?;
    let dest = config.output_dir.join(filename);

    status::info(&format!("Downloading {}...", filename));
    let bytes = github.download(url, &dest, kind, token).await?;
    status::success(&format!("Saved {} ({} bytes)", dest.display(), bytes));

    Ok(RunOutcome::Downloaded { path: dest, bytes })
}
