//! GitHub URL classification
//!
//! Every input URL is normalized the same way before any pattern is applied:
//! surrounding whitespace, the `http://`/`https://` scheme and a leading
//! `www.` are removed. Hosts are compared without any `user@` or `:port`.
//! Classification then runs ordered checks and the first
//! match wins:
//!
//! 1. host `raw.githubusercontent.com` → [`Route::RawFile`]
//! 2. `github.com/<owner>/<repo>/releases/download/...` → [`Route::ReleaseAssetDirect`]
//! 3. anything with an `<owner>/<repo>` prefix → [`Route::RepositoryLatestRelease`]

use ghfetch_core::{GhfetchError, GhfetchResult};
use regex::Regex;
use std::fmt;

pub const GITHUB_HOST: &str = "github.com";
pub const RAW_CONTENT_HOST: &str = "raw.githubusercontent.com";

const RELEASE_DOWNLOAD_PATTERN: &str = r"^github\.com/[^/]+/[^/]+/releases/download/.+";
const REPOSITORY_PATTERN: &str = r"^([^/]+)/([^/]+)(?:/|$)";

/// Owner and name of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Which download path a URL takes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// A single file served by raw.githubusercontent.com
    RawFile(String),
    /// A `releases/download/...` link to one asset
    ReleaseAssetDirect(String),
    /// A repository whose latest release must be looked up
    RepositoryLatestRelease(RepositoryReference),
}

impl Route {
    /// The URL to fetch directly, if this route has one
    pub fn direct_url(&self) -> Option<&str> {
        match self {
            Route::RawFile(url) | Route::ReleaseAssetDirect(url) => Some(url),
            Route::RepositoryLatestRelease(_) => None,
        }
    }
}

/// Classify a URL into the download path it takes
///
/// URLs on any host other than github.com or raw.githubusercontent.com are
/// rejected with [`GhfetchError::UnsupportedHost`] before any pattern is tried.
/// Direct routes carry the URL rewritten to `https://<host>/<path>`.
pub fn classify(url: &str) -> GhfetchResult<Route> {
    let normalized = normalize(url);
    let host = host_of(&normalized).to_ascii_lowercase();

    if host.is_empty() {
        return Err(GhfetchError::UnparseableUrl(url.trim().to_string()));
    }
    if host != GITHUB_HOST && host != RAW_CONTENT_HOST {
        return Err(GhfetchError::UnsupportedHost(host));
    }

    if host == RAW_CONTENT_HOST {
        return Ok(Route::RawFile(canonical_url(&normalized)));
    }

    let release_download = compile(RELEASE_DOWNLOAD_PATTERN)?;
    if release_download.is_match(&lowercase_host(&normalized)) {
        return Ok(Route::ReleaseAssetDirect(canonical_url(&normalized)));
    }

    parse_repository(url).map(Route::RepositoryLatestRelease)
}

/// Extract `owner/name` from the first two path segments of a GitHub URL
///
/// Accepts full URLs and bare forms such as `github.com/owner/repo` or
/// `owner/repo`. This is a syntactic check only; the repository may not exist.
pub fn parse_repository(url: &str) -> GhfetchResult<RepositoryReference> {
    let normalized = normalize(url);
    let without_query = strip_query(&normalized);
    let host = host_of(without_query);
    let path = if host.eq_ignore_ascii_case(GITHUB_HOST) || host.eq_ignore_ascii_case(RAW_CONTENT_HOST)
    {
        without_query[authority_of(without_query).len()..].trim_start_matches('/')
    } else {
        without_query
    }
    .trim_end_matches('/');

    let repository = compile(REPOSITORY_PATTERN)?;
    let captures = repository
        .captures(path)
        .ok_or_else(|| GhfetchError::UnparseableUrl(url.trim().to_string()))?;

    Ok(RepositoryReference {
        owner: captures[1].to_string(),
        name: captures[2].to_string(),
    })
}

/// Local filename for a direct route: the final URL path segment without `?query`
pub fn resolve_direct_asset_or_raw_file(route: &Route) -> GhfetchResult<String> {
    match route.direct_url() {
        Some(url) => filename_from_url(url),
        None => Err(GhfetchError::UnparseableUrl(
            "repository URLs resolve through the latest release".to_string(),
        )),
    }
}

/// Final path segment of a URL with any query string or fragment removed
pub fn filename_from_url(url: &str) -> GhfetchResult<String> {
    let without_query = strip_query(url.trim());
    let without_scheme = without_query
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(without_query);

    match without_scheme
        .split_once('/')
        .and_then(|(_, path)| path.rsplit('/').next())
    {
        Some(name) if is_plain_file_name(name) => Ok(name.to_string()),
        _ => Err(GhfetchError::UnparseableUrl(format!(
            "no file name in URL: {}",
            url.trim()
        ))),
    }
}

/// A name that stays inside the directory it is joined onto
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('\\')
}

fn compile(pattern: &str) -> GhfetchResult<Regex> {
    Regex::new(pattern).map_err(|e| GhfetchError::Config(format!("Invalid regex: {}", e)))
}

fn normalize(url: &str) -> &str {
    let trimmed = url.trim();
    let without_scheme = strip_prefix_ignore_case(trimmed, "https://")
        .or_else(|| strip_prefix_ignore_case(trimmed, "http://"))
        .unwrap_or(trimmed);
    strip_prefix_ignore_case(without_scheme, "www.").unwrap_or(without_scheme)
}

/// Host without `user@` or `:port`
fn host_of(normalized: &str) -> &str {
    let authority = authority_of(normalized);
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    host.split(':').next().unwrap_or_default()
}

fn authority_of(normalized: &str) -> &str {
    normalized
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
}

/// Rewrite the authority to the bare lowercase host
fn lowercase_host(normalized: &str) -> String {
    let authority = authority_of(normalized);
    format!(
        "{}{}",
        host_of(normalized).to_ascii_lowercase(),
        &normalized[authority.len()..]
    )
}

fn canonical_url(normalized: &str) -> String {
    format!("https://{}", lowercase_host(normalized))
}

fn strip_query(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or_default()
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(owner: &str, name: &str) -> RepositoryReference {
        RepositoryReference {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_parse_repository_full_url() {
        assert_eq!(
            parse_repository("https://github.com/torvalds/linux").unwrap(),
            repo("torvalds", "linux")
        );
    }

    #[test]
    fn test_parse_repository_single_segment_fails() {
        let err = parse_repository("github.com/a").unwrap_err();
        assert!(matches!(err, GhfetchError::UnparseableUrl(_)));
    }

    #[test]
    fn test_parse_repository_strips_www_and_trailing_slash() {
        assert_eq!(
            parse_repository("www.github.com/foo/bar/").unwrap(),
            repo("foo", "bar")
        );
        assert_eq!(
            parse_repository("http://www.github.com/foo/bar///").unwrap(),
            repo("foo", "bar")
        );
    }

    #[test]
    fn test_parse_repository_deep_path() {
        assert_eq!(
            parse_repository("https://github.com/rust-lang/rust/tree/master/src").unwrap(),
            repo("rust-lang", "rust")
        );
    }

    #[test]
    fn test_parse_repository_raw_url() {
        assert_eq!(
            parse_repository("https://raw.githubusercontent.com/o/r/main/README.md").unwrap(),
            repo("o", "r")
        );
    }

    #[test]
    fn test_parse_repository_ignores_query() {
        assert_eq!(
            parse_repository("https://github.com/o/r?tab=readme").unwrap(),
            repo("o", "r")
        );
    }

    #[test]
    fn test_parse_repository_empty_segment_fails() {
        assert!(parse_repository("github.com//repo").is_err());
        assert!(parse_repository("https://github.com/").is_err());
        assert!(parse_repository("").is_err());
    }

    #[test]
    fn test_classify_raw_file() {
        let route =
            classify("https://raw.githubusercontent.com/o/r/main/docs/setup.sh?token=abc").unwrap();
        assert_eq!(
            route,
            Route::RawFile(
                "https://raw.githubusercontent.com/o/r/main/docs/setup.sh?token=abc".to_string()
            )
        );
        assert_eq!(resolve_direct_asset_or_raw_file(&route).unwrap(), "setup.sh");
    }

    #[test]
    fn test_classify_raw_file_without_scheme() {
        let route = classify("raw.githubusercontent.com/o/r/main/a.txt").unwrap();
        assert_eq!(
            route,
            Route::RawFile("https://raw.githubusercontent.com/o/r/main/a.txt".to_string())
        );
    }

    #[test]
    fn test_classify_release_asset_direct() {
        let route =
            classify("https://github.com/o/r/releases/download/v1.0.0/tool-linux.tar.gz").unwrap();
        assert_eq!(
            route,
            Route::ReleaseAssetDirect(
                "https://github.com/o/r/releases/download/v1.0.0/tool-linux.tar.gz".to_string()
            )
        );
        assert_eq!(
            resolve_direct_asset_or_raw_file(&route).unwrap(),
            "tool-linux.tar.gz"
        );
    }

    #[test]
    fn test_classify_release_asset_with_www() {
        let route = classify("www.github.com/o/r/releases/download/v2/a.zip").unwrap();
        assert_eq!(
            route,
            Route::ReleaseAssetDirect("https://github.com/o/r/releases/download/v2/a.zip".to_string())
        );
    }

    #[test]
    fn test_classify_repository() {
        assert_eq!(
            classify("https://github.com/BurntSushi/ripgrep").unwrap(),
            Route::RepositoryLatestRelease(repo("BurntSushi", "ripgrep"))
        );
    }

    #[test]
    fn test_classify_releases_page_is_repository() {
        assert_eq!(
            classify("https://github.com/o/r/releases/tag/v1.0").unwrap(),
            Route::RepositoryLatestRelease(repo("o", "r"))
        );
    }

    #[test]
    fn test_classify_unsupported_host() {
        let err = classify("https://gitlab.com/o/r").unwrap_err();
        assert!(matches!(err, GhfetchError::UnsupportedHost(ref h) if h == "gitlab.com"));

        let err = classify("https://api.github.com/repos/o/r").unwrap_err();
        assert!(matches!(err, GhfetchError::UnsupportedHost(_)));
    }

    #[test]
    fn test_classify_host_is_case_insensitive() {
        assert_eq!(
            classify("HTTPS://GitHub.com/o/r").unwrap(),
            Route::RepositoryLatestRelease(repo("o", "r"))
        );
    }

    #[test]
    fn test_classify_unparseable() {
        let err = classify("https://github.com/only-owner").unwrap_err();
        assert!(matches!(err, GhfetchError::UnparseableUrl(_)));
    }

    #[test]
    fn test_classify_empty_input() {
        let err = classify("   ").unwrap_err();
        assert!(matches!(err, GhfetchError::UnparseableUrl(_)));
    }

    #[test]
    fn test_resolve_filename_rejects_repository_route() {
        let route = Route::RepositoryLatestRelease(repo("o", "r"));
        assert!(resolve_direct_asset_or_raw_file(&route).is_err());
    }

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("https://example.com/a/b/file.bin?x=1#frag").unwrap(),
            "file.bin"
        );
        assert!(filename_from_url("https://example.com/a/").is_err());
        assert!(filename_from_url("https://raw.githubusercontent.com").is_err());
    }

    #[test]
    fn test_filename_rejects_directory_names() {
        for url in [
            "https://github.com/o/r/releases/download/v1/..",
            "https://github.com/o/r/releases/download/v1/.",
            "https://raw.githubusercontent.com/o/r/main/..?x=1",
            "https://github.com/o/r/releases/download/v1/..%5C..\\evil.exe",
        ] {
            let err = filename_from_url(url).unwrap_err();
            assert!(
                matches!(err, GhfetchError::UnparseableUrl(_)),
                "{:?} should be rejected",
                url
            );
        }
    }

    #[test]
    fn test_dot_dot_asset_route_has_no_filename() {
        let route = classify("https://github.com/o/r/releases/download/v1/..").unwrap();
        assert!(matches!(route, Route::ReleaseAssetDirect(_)));
        assert!(matches!(
            resolve_direct_asset_or_raw_file(&route),
            Err(GhfetchError::UnparseableUrl(_))
        ));
    }

    #[test]
    fn test_raw_host_wins_over_release_download_path() {
        let route = classify("https://raw.githubusercontent.com/o/r/main/releases/download/x.bin")
            .unwrap();
        assert_eq!(
            route,
            Route::RawFile(
                "https://raw.githubusercontent.com/o/r/main/releases/download/x.bin".to_string()
            )
        );
    }

    #[test]
    fn test_classify_ignores_port_and_userinfo() {
        assert_eq!(
            classify("https://github.com:443/o/r").unwrap(),
            Route::RepositoryLatestRelease(repo("o", "r"))
        );
        assert_eq!(
            classify("https://user@github.com/o/r").unwrap(),
            Route::RepositoryLatestRelease(repo("o", "r"))
        );
        assert_eq!(
            classify("https://GitHub.com:443/o/r/releases/download/v1/a.zip").unwrap(),
            Route::ReleaseAssetDirect("https://github.com/o/r/releases/download/v1/a.zip".to_string())
        );
        assert_eq!(
            classify("user@raw.githubusercontent.com:443/o/r/main/a.txt").unwrap(),
            Route::RawFile("https://raw.githubusercontent.com/o/r/main/a.txt".to_string())
        );

        let err = classify("https://gitlab.com:8443/o/r").unwrap_err();
        assert!(matches!(err, GhfetchError::UnsupportedHost(ref h) if h == "gitlab.com"));
    }

    #[test]
    fn test_repository_reference_display() {
        assert_eq!(repo("o", "r").to_string(), "o/r");
    }
}
