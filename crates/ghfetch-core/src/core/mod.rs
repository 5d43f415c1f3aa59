pub mod error;
pub mod error_help;
pub mod token;

pub use error::{GhfetchError, GhfetchResult};
pub use token::AccessToken;
