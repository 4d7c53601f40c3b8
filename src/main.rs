use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use supportchat::connector::api::Router;
use supportchat::{Commands, Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "supportchat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer with canned offline replies instead of calling Gemini
    #[arg(long, global = true)]
    mock_generation: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let container = Container::new(ContainerConfig {
        mock_generation: cli.mock_generation,
        gemini: None,
    })?;

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}
