//! ghfetch: download files and release assets from GitHub
//!
//! This crate provides the ghfetch library, re-exporting core types from
//! `ghfetch-core` and organizing the URL resolver and GitHub client.

pub use ghfetch_core::{format_error_with_help, AccessToken, ErrorHelp, GhfetchError, GhfetchResult};

/// Core module re-exported from ghfetch-core.
pub mod core {
    pub use ghfetch_core::core::*;
}

/// Configuration from defaults and environment.
pub mod config;

/// Dependency injection infrastructure.
pub mod di;

/// GitHub API client.
pub mod github;

/// URL classification and latest-release resolution.
pub mod resolver;
