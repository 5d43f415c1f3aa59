use std::fmt;
use zeroize::Zeroizing;

/// A GitHub access token held in memory for a single run
///
/// The backing buffer is wiped when the token is dropped. `Debug` never
/// prints the secret.
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Wrap a token, trimming surrounding whitespace.
    ///
    /// Returns `None` for an empty or whitespace-only value.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = Zeroizing::new(raw.into());
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(Zeroizing::new(trimmed.to_string())))
    }

    /// The secret value, for building request headers only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value in the form GitHub expects
    pub fn authorization(&self) -> Zeroizing<String> {
        Zeroizing::new(format!("token {}", self.expose()))
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}
