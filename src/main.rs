use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use jokesmith::connector::api::http;
use jokesmith::connector::api::{Container, ContainerConfig, Router};
use jokesmith::Commands;

#[derive(Parser)]
#[command(name = "jokesmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum number of interactions kept in memory
    #[arg(long, global = true, default_value = "50")]
    history_limit: usize,

    /// Answer with canned text instead of calling Gemini
    #[arg(long, global = true)]
    mock_generator: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        history_limit: cli.history_limit,
        mock_generator: cli.mock_generator,
        gemini: None,
    })?;

    match cli.command {
        Commands::Serve { host, port } => {
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .with_context(|| format!("invalid listen address {host}:{port}"))?;
            http::serve(Arc::new(container), addr).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
