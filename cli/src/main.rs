use std::io;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use food_core::{App, FoodApi, FoodClient};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::terminal::Terminal;
use crate::transport::UreqTransport;

mod command;
mod session;
mod terminal;
mod transport;

/// Browse, add, edit and delete food records in a `/foods` store.
#[derive(Debug, Parser)]
#[command(name = "food", version)]
struct Args {
    /// Store base URL; `/foods` is appended.
    #[arg(long, env = "FOOD_API_URL", default_value = "http://localhost:3000")]
    base_url: String,
}

fn main() -> Result<()> {
    initialize_logging();
    let args = Args::parse();
    ensure!(
        args.base_url.starts_with("http://") || args.base_url.starts_with("https://"),
        "base URL must start with http:// or https://, got `{}`",
        args.base_url
    );
    info!(base_url = %args.base_url, "starting food client");

    let api = FoodApi::new(FoodClient::new(&args.base_url), UreqTransport::new());
    let mut app = App::new(api);
    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout());

    session::run(&mut app, &mut terminal).context("terminal session failed")?;
    Ok(())
}

/// Logs go to stderr so they never interleave with the list on stdout.
fn initialize_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}
