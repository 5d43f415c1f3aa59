use clap::Parser;
use ghfetch::config::Config;
use ghfetch::github::GitHubClient;
use ghfetch::{format_error_with_help, GhfetchResult};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::fetch::RunOutcome;
use cli::input::{ArgsInput, DialoguerInput, TokenSource};

#[derive(Parser)]
#[command(name = "ghfetch")]
#[command(about = "Download a file or release asset from a GitHub repository")]
#[command(
    long_about = "Download a file or release asset from a GitHub repository.\n\n\
    Accepted URLs:\n  \
    https://raw.githubusercontent.com/<owner>/<repo>/<branch>/<path>   a single file\n  \
    https://github.com/<owner>/<repo>/releases/download/<tag>/<asset>  one release asset\n  \
    https://github.com/<owner>/<repo>                                  the latest release\n\n\
    Without a URL argument you are prompted for one. A GitHub token is then asked for\n\
    (input hidden): press Enter to continue without one, or type -q to quit."
)]
#[command(version)]
struct Cli {
    /// GitHub file, release asset or repository URL (prompted for when omitted)
    url: Option<String>,

    /// Skip the token prompt and make anonymous requests
    #[arg(long, conflicts_with = "token_stdin")]
    no_token: bool,

    /// Read the token from the first line of stdin instead of prompting
    #[arg(long)]
    token_stdin: bool,

    /// Directory to save the download in
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// HTTP timeout in seconds (default: none, or GHFETCH_TIMEOUT_SECS)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Do not show a download progress bar
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    fn token_source(&self) -> TokenSource {
        if self.no_token {
            TokenSource::Skip
        } else if self.token_stdin {
            TokenSource::Stdin
        } else {
            TokenSource::Prompt
        }
    }
}

async fn run(cli: Cli) -> GhfetchResult<()> {
    let mut config = Config::from_env()?;
    config.output_dir = cli.output_dir.clone();
    if let Some(secs) = cli.timeout {
        config.timeout = Some(Duration::from_secs(secs));
    }
    if cli.no_progress {
        config.show_progress = false;
    }

    let github = GitHubClient::new(&config)?;
    let input = ArgsInput::new(cli.url.clone(), cli.token_source(), DialoguerInput);

    match cli::fetch::run(&config, &github, &input).await? {
        RunOutcome::Quit => debug!("quit at token prompt"),
        RunOutcome::Downloaded { path, bytes } => {
            debug!(path = %path.display(), bytes, "run finished")
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::from(e.exit_code())
        }
    }
}
