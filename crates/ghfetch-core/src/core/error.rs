use thiserror::Error;

pub type GhfetchResult<T> = Result<T, GhfetchError>;

#[derive(Error, Debug)]
pub enum GhfetchError {
    /// The URL points somewhere other than github.com or raw.githubusercontent.com.
    #[error("Unsupported host: {0} (only github.com and raw.githubusercontent.com are supported)")]
    UnsupportedHost(String),

    #[error("Could not parse a GitHub repository from URL: {0}")]
    UnparseableUrl(String),

    /// Only reported as the explanation for a URL that failed to classify.
    #[error("GitHub is unreachable: {0}")]
    ApiUnreachable(String),

    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    #[error("GitHub API error: {0}")]
    AuthOrApi(String),

    #[error("No assets found in the latest release{}", tag_suffix(.tag))]
    NoAssets { tag: Option<String> },

    #[error("Invalid selection '{input}': expected a number between 1 and {count}")]
    InvalidSelection { input: String, count: usize },

    /// The selection prompt itself could not complete.
    #[error("Asset selection failed: {0}")]
    AssetSelection(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

fn tag_suffix(tag: &Option<String>) -> String {
    match tag {
        Some(tag) => format!(" ({})", tag),
        None => String::new(),
    }
}

impl GhfetchError {
    /// Process exit status for this error.
    ///
    /// | Code | Meaning                             |
    /// |------|-------------------------------------|
    /// | 1    | generic failure (download, io, ...) |
    /// | 2    | invalid URL or unsupported host     |
    /// | 3    | API authentication / lookup error   |
    /// | 4    | no assets in the latest release     |
    /// | 5    | invalid interactive selection       |
    /// | 6    | asset selection failed              |
    /// | 7    | GitHub unreachable                  |
    pub fn exit_code(&self) -> u8 {
        match self {
            GhfetchError::UnsupportedHost(_) | GhfetchError::UnparseableUrl(_) => 2,
            GhfetchError::RepositoryNotFound(_) | GhfetchError::AuthOrApi(_) => 3,
            GhfetchError::NoAssets { .. } => 4,
            GhfetchError::InvalidSelection { .. } => 5,
            GhfetchError::AssetSelection(_) => 6,
            GhfetchError::ApiUnreachable(_) => 7,
            GhfetchError::DownloadFailed(_)
            | GhfetchError::Config(_)
            | GhfetchError::Input(_)
            | GhfetchError::Io(_)
            | GhfetchError::Http(_) => 1,
        }
    }
}
