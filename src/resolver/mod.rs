//! URL classification and release-asset resolution
//!
//! [`url`] decides which download path a GitHub URL takes without touching
//! the network; [`release`] resolves a repository's latest release into
//! candidate download URLs.

pub mod release;
pub mod url;

pub use release::{resolve_latest_release, select_asset, DownloadOutcome};
pub use url::{
    classify, filename_from_url, parse_repository, resolve_direct_asset_or_raw_file,
    RepositoryReference, Route,
};
