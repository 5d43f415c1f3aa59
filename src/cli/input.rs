use dialoguer::{Input, Password};
use ghfetch::{AccessToken, GhfetchError, GhfetchResult};
use std::io::{self, BufRead};

pub const URL_PROMPT: &str = "Enter GitHub file/repo URL";
pub const TOKEN_PROMPT: &str = "Enter GitHub Token (or press Enter to skip, '-q' to quit)";

/// Token answer that ends the run before any network access
pub const QUIT_ANSWER: &str = "-q";

// Source of everything a run asks the user for (for dependency injection in tests)
pub trait UserInput {
    fn prompt_url(&self) -> GhfetchResult<String>;

    /// Raw token answer: empty to skip, `-q` to quit
    fn prompt_token(&self) -> GhfetchResult<String>;

    /// Raw answer to "which of the `count` listed assets", expected 1-based
    fn prompt_selection(&self, count: usize) -> GhfetchResult<String>;
}

/// What the token answer asks for
#[derive(Debug)]
pub enum TokenAnswer {
    Quit,
    Anonymous,
    Token(AccessToken),
}

impl TokenAnswer {
    pub fn parse(raw: String) -> Self {
        if raw.trim() == QUIT_ANSWER {
            return TokenAnswer::Quit;
        }
        match AccessToken::new(raw) {
            Some(token) => TokenAnswer::Token(token),
            None => TokenAnswer::Anonymous,
        }
    }
}

// Real implementation using dialoguer
pub struct DialoguerInput;

impl UserInput for DialoguerInput {
    fn prompt_url(&self) -> GhfetchResult<String> {
        Input::new()
            .with_prompt(URL_PROMPT)
            .allow_empty(false)
            .interact_text()
            .map_err(|e| GhfetchError::Input(format!("Failed to read input: {}", e)))
    }

    fn prompt_token(&self) -> GhfetchResult<String> {
        Password::new()
            .with_prompt(TOKEN_PROMPT)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| GhfetchError::Input(format!("Failed to read token: {}", e)))
    }

    fn prompt_selection(&self, count: usize) -> GhfetchResult<String> {
        Input::new()
            .with_prompt(format!("Select an asset to download [1-{}]", count))
            .interact_text()
            .map_err(|e| GhfetchError::AssetSelection(format!("Failed to read selection: {}", e)))
    }
}

/// Where the token answer comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Prompt,
    /// `--no-token`
    Skip,
    /// `--token-stdin`
    Stdin,
}

/// Answers from command-line flags first, falling back to `inner`
pub struct ArgsInput<I: UserInput> {
    url: Option<String>,
    token: TokenSource,
    inner: I,
}

impl<I: UserInput> ArgsInput<I> {
    pub fn new(url: Option<String>, token: TokenSource, inner: I) -> Self {
        Self { url, token, inner }
    }
}

impl<I: UserInput> UserInput for ArgsInput<I> {
    fn prompt_url(&self) -> GhfetchResult<String> {
        match self.url {
            Some(ref url) => Ok(url.clone()),
            None => self.inner.prompt_url(),
        }
    }

    fn prompt_token(&self) -> GhfetchResult<String> {
        match self.token {
            TokenSource::Prompt => self.inner.prompt_token(),
            TokenSource::Skip => Ok(String::new()),
            TokenSource::Stdin => read_token_line(io::stdin().lock()),
        }
    }

    fn prompt_selection(&self, count: usize) -> GhfetchResult<String> {
        self.inner.prompt_selection(count)
    }
}

fn read_token_line(mut reader: impl BufRead) -> GhfetchResult<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| GhfetchError::Input(format!("Failed to read token from stdin: {}", e)))?;
    Ok(line)
}
