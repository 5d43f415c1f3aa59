//! Human-readable suggestions attached to errors

use crate::core::error::GhfetchError;

/// Suggests what the user can do about an error
pub trait ErrorHelp {
    fn help(&self) -> Option<&'static str>;
}

impl ErrorHelp for GhfetchError {
    fn help(&self) -> Option<&'static str> {
        match self {
            GhfetchError::UnsupportedHost(_) => Some(
                "Use a github.com repository URL, a release download link, or a raw.githubusercontent.com file URL.",
            ),
            GhfetchError::UnparseableUrl(_) => {
                Some("Expected something like https://github.com/<owner>/<repo>.")
            }
            GhfetchError::ApiUnreachable(_) => {
                Some("Check your network connection and proxy settings.")
            }
            GhfetchError::RepositoryNotFound(_) => Some(
                "Check the owner and repository name. Private repositories need a token with repo access.",
            ),
            GhfetchError::AuthOrApi(_) => Some(
                "Check that your token is valid and has not expired. Rate limits are much lower without a token.",
            ),
            GhfetchError::NoAssets { .. } => Some(
                "The latest release has no attached files. Link a file directly with a raw.githubusercontent.com URL instead.",
            ),
            GhfetchError::InvalidSelection { .. } => {
                Some("Enter the number shown next to the asset you want.")
            }
            GhfetchError::AssetSelection(_) => {
                Some("Run ghfetch from an interactive terminal to choose between assets.")
            }
            GhfetchError::Config(_) => {
                Some("Check the GHFETCH_API_URL and GHFETCH_TIMEOUT_SECS environment variables.")
            }
            GhfetchError::DownloadFailed(_)
            | GhfetchError::Input(_)
            | GhfetchError::Io(_)
            | GhfetchError::Http(_) => None,
        }
    }
}

/// Format an error for the terminal, with a suggestion line when one exists
pub fn format_error_with_help(err: &GhfetchError) -> String {
    match err.help() {
        Some(help) => format!("✗ {}\n  help: {}", err, help),
        None => format!("✗ {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_help() {
        let err = GhfetchError::UnsupportedHost("gitlab.com".to_string());
        let formatted = format_error_with_help(&err);
        assert!(formatted.starts_with("✗ Unsupported host: gitlab.com"));
        assert!(formatted.contains("help: Use a github.com repository URL"));
    }

    #[test]
    fn test_format_without_help() {
        let err = GhfetchError::DownloadFailed("HTTP 500".to_string());
        assert_eq!(format_error_with_help(&err), "✗ Download failed: HTTP 500");
    }
}
