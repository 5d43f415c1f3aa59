//! Dependency injection seams
//!
//! The download flow talks to GitHub only through [`GitHubProvider`], so it can
//! run against [`mocks::MockGitHubProvider`] in tests.
//!
//! # Example (Testing)
//! ```
//! use ghfetch::di::mocks::MockGitHubProvider;
//!
//! let github = MockGitHubProvider::new().with_release_json(r#"{"tag_name": "v1", "assets": []}"#);
//! assert!(github.calls().is_empty());
//! ```

pub mod mocks;
pub mod traits;

pub use traits::GitHubProvider;
