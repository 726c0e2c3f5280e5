use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use ghprofile::{app, github, util};

#[derive(Parser, Debug)]
#[command(name = "ghprofile", version, about = "TUI GitHub profile browser")]
struct Cli {
    /// Path to credential file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = setup_logging(cli.debug)?;

    info!("ghprofile starting");

    let token = match util::config::Credentials::load(cli.config.as_deref())? {
        Some(creds) => creds.access_token,
        None => {
            let token = match github::auth::authorize().await {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Authentication error: {e}");
                    std::process::exit(1);
                }
            };
            let creds = util::config::Credentials {
                access_token: token.clone(),
            };
            creds.save(cli.config.as_deref())?;
            token
        }
    };

    let client = github::GithubClient::new(&token, github::graphql::DEFAULT_API_URL)?;

    app::event_loop::run(client).await
}

fn setup_logging(debug: bool) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = util::config::log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "ghprofile.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("ghprofile=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
