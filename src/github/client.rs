//! GitHub API client implementation

use crate::config::Config;
use crate::di::traits::GitHubProvider;
use crate::github::types::{AccessStatus, DownloadKind, LatestRelease};
use crate::resolver::RepositoryReference;
use async_trait::async_trait;
use ghfetch_core::{AccessToken, GhfetchError, GhfetchResult};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{header, Client as HttpClient, RequestBuilder};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// GitHub API client
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
    show_progress: bool,
}

impl GitHubClient {
    /// Create a new GitHub client
    ///
    /// The client never stores the access token; it is attached per request.
    pub fn new(config: &Config) -> GhfetchResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| GhfetchError::Config(format!("Invalid user agent: {}", e)))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let mut builder = HttpClient::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| GhfetchError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
            show_progress: config.show_progress,
        })
    }

    /// Pre-flight access check against `GET /repos/{owner}/{repo}`
    pub async fn check_access(
        &self,
        repository: &RepositoryReference,
        token: &AccessToken,
    ) -> GhfetchResult<AccessStatus> {
        let url = format!(
            "{}/repos/{}/{}",
            self.api_url, repository.owner, repository.name
        );
        debug!(%url, "checking repository access");

        let response = authorize(self.http_client.get(&url), Some(token))?
            .send()
            .await?;

        let status = AccessStatus::from_status(response.status().as_u16());
        debug!(%status, "access check finished");
        Ok(status)
    }

    /// Fetch and parse the latest release of a repository
    ///
    /// Error responses (404, 401, rate limiting) are returned as a parsed body
    /// carrying `message`, not as an error; the resolver interprets them.
    pub async fn get_latest_release(
        &self,
        repository: &RepositoryReference,
        token: Option<&AccessToken>,
    ) -> GhfetchResult<LatestRelease> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url, repository.owner, repository.name
        );
        debug!(%url, authenticated = token.is_some(), "fetching latest release");

        let response = authorize(self.http_client.get(&url), token)?.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "latest release response");

        serde_json::from_str(&body).map_err(|e| {
            GhfetchError::AuthOrApi(format!(
                "unexpected response from {} (HTTP {}): {}",
                url, status, e
            ))
        })
    }

    /// Whether the API host answers at all
    pub async fn is_reachable(&self) -> bool {
        match self.http_client.get(&self.api_url).send().await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, api_url = %self.api_url, "GitHub API unreachable");
                false
            }
        }
    }

    /// Download `url` to `dest`
    ///
    /// Data is streamed into `<dest>.part` and renamed into place once the
    /// transfer completes; the partial file is removed on failure.
    pub async fn download(
        &self,
        url: &str,
        dest: &Path,
        kind: DownloadKind,
        token: Option<&AccessToken>,
    ) -> GhfetchResult<u64> {
        let partial = partial_path(dest)?;
        let result = match self.download_to(url, &partial, kind, token).await {
            Ok(written) => fs::rename(&partial, dest)
                .map(|()| written)
                .map_err(GhfetchError::from),
            Err(e) => Err(e),
        };

        if result.is_err() && partial.exists() {
            let _ = fs::remove_file(&partial);
        }
        result
    }

    async fn download_to(
        &self,
        url: &str,
        partial: &Path,
        kind: DownloadKind,
        token: Option<&AccessToken>,
    ) -> GhfetchResult<u64> {
        debug!(%url, ?kind, authenticated = token.is_some(), "starting download");

        let request = self
            .http_client
            .get(url)
            .header(header::ACCEPT, kind.accept_header());
        let mut response = authorize(request, token)?
            .send()
            .await
            .map_err(|e| GhfetchError::DownloadFailed(format!("{}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(GhfetchError::DownloadFailed(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let progress = self.progress_bar(response.content_length());
        let mut file = fs::File::create(partial)?;
        let mut written: u64 = 0;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| GhfetchError::DownloadFailed(format!("{}: {}", url, e)))?
        {
            file.write_all(&chunk)?;
            written += chunk.len() as u64;
            progress.set_position(written);
        }
        file.flush()?;
        progress.finish_and_clear();

        debug!(bytes = written, "download finished");
        Ok(written)
    }

    fn progress_bar(&self, content_length: Option<u64>) -> ProgressBar {
        match (self.show_progress, content_length) {
            (true, Some(len)) => {
                let pb = ProgressBar::new(len);
                pb.set_style(
                    ProgressStyle::with_template(
                        "[{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
                );
                pb
            }
            _ => ProgressBar::hidden(),
        }
    }
}

/// Attach `Authorization: token ...` when a token is present
fn authorize(request: RequestBuilder, token: Option<&AccessToken>) -> GhfetchResult<RequestBuilder> {
    match token {
        Some(token) => {
            let mut value = header::HeaderValue::from_str(&token.authorization())
                .map_err(|_| GhfetchError::Input("GitHub token contains invalid characters".to_string()))?;
            value.set_sensitive(true);
            Ok(request.header(header::AUTHORIZATION, value))
        }
        None => Ok(request),
    }
}

fn partial_path(dest: &Path) -> GhfetchResult<PathBuf> {
    let mut name = dest
        .file_name()
        .ok_or_else(|| {
            GhfetchError::DownloadFailed(format!("no file name in {}", dest.display()))
        })?
        .to_os_string();
    name.push(".part");
    Ok(dest.with_file_name(name))
}

#[async_trait]
impl GitHubProvider for GitHubClient {
    async fn check_access(
        &self,
        repository: &RepositoryReference,
        token: &AccessToken,
    ) -> GhfetchResult<AccessStatus> {
        Self::check_access(self, repository, token).await
    }

    async fn get_latest_release(
        &self,
        repository: &RepositoryReference,
        token: Option<&AccessToken>,
    ) -> GhfetchResult<LatestRelease> {
        Self::get_latest_release(self, repository, token).await
    }

    async fn is_reachable(&self) -> bool {
        Self::is_reachable(self).await
    }

    async fn download(
        &self,
        url: &str,
        dest: &Path,
        kind: DownloadKind,
        token: Option<&AccessToken>,
    ) -> GhfetchResult<u64> {
        Self::download(self, url, dest, kind, token).await
    }
}
