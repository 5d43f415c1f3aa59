//! Core types shared by the ghfetch binary and library
//!
//! Holds the error taxonomy, its exit-code mapping and the scoped access token.

pub mod core;

pub use core::error::{GhfetchError, GhfetchResult};
pub use core::error_help::{format_error_with_help, ErrorHelp};
pub use core::token::AccessToken;
