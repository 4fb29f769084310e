mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod report;
mod services;
#[cfg(test)]
mod test_support;
mod workflow;

use clap::Parser;
use tracing::{debug, error, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd::sync::{self, SyncCommandArgs};
use crate::config::DEFAULT_API_BASE;
use crate::error::AppResult;
use crate::report::Reporter;

#[derive(Parser)]
#[command(
    name = "ticket-bridge",
    author,
    version,
    about = "Create a GitHub issue for a Jira ticket and assign it to the coding agent"
)]
struct Cli {
    /// GitHub REST API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_BASE)]
    api_base: String,
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = dotenvy::dotenv() {
        debug!("No .env file loaded: {err}");
    }

    let cli = Cli::parse();
    let mut reporter = Reporter::stdout();

    if let Err(err) = run(cli, &mut reporter).await {
        if let Err(write_err) = reporter.failed(&err) {
            error!("failed to report error: {write_err}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, reporter: &mut Reporter<std::io::Stdout>) -> AppResult<()> {
    let args = SyncCommandArgs {
        api_base: cli.api_base,
    };
    sync::run(args, |name| std::env::var(name).ok(), reporter).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(
                    EnvFilter::builder()
                        .with_default_directive(LevelFilter::WARN.into())
                        .from_env_lossy(),
                ),
        )
        .init();
}
