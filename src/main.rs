use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use cadop_core::{config::Config, Loader, QueryService};

#[derive(Parser)]
#[command(name = "cadop", about = "Search service over the operator registry")]
struct Cli {
    /// TOML config file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Registry file to load (overrides `[dataset].path`).
    #[arg(long)]
    source: Option<PathBuf>,

    /// Address to bind (overrides `[server].host`).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides `[server].port`).
    #[arg(long)]
    port: Option<u16>,

    /// Log at debug level regardless of `RUST_LOG` and `[log].filter`.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(source) = cli.source {
        config.dataset.path = source;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_logging(&config, cli.debug);

    let table = Loader::new(&config.dataset.path).load();
    if table.is_empty() {
        tracing::warn!(path = %config.dataset.path.display(), "serving with an empty registry");
    }
    let service = Arc::new(QueryService::new(table));

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| format!("failed to bind {}", config.server.address()))?;
    cadop_server::serve(listener, service, shutdown_signal()).await?;

    tracing::info!("shut down");
    Ok(())
}

fn init_logging(config: &Config, debug: bool) {
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
