//! GitHub integration
//!
//! This module provides the HTTP side of a download run:
//! - Pre-flight repository access checks
//! - Latest-release lookups
//! - Raw file and release asset downloads

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{AccessStatus, DownloadKind, LatestRelease, ReleaseAsset};
