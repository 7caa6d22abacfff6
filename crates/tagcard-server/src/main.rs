//! tagcard server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) plus `TAGCARD_*`
//! environment variables, opens the contact store, and serves the JSON API
//! over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use tagcard_core::{memory::MemoryStore, store::ContactStore};
use tagcard_server::ServerConfig;
use tagcard_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "NFC contact manager API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Keep contacts in memory only; nothing survives a restart.
  #[arg(long)]
  in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;
  server_cfg.in_memory |= cli.in_memory;

  if server_cfg.in_memory {
    tracing::warn!("using in-memory store; contacts will not be persisted");
    serve(MemoryStore::new(), &server_cfg).await
  } else {
    let store_path = server_cfg.resolved_store_path();
    let store = SqliteStore::open(&store_path)
      .await
      .with_context(|| format!("failed to open store at {store_path:?}"))?;
    tracing::info!(path = ?store_path, "opened contact store");
    serve(store, &server_cfg).await
  }
}

async fn serve<S>(store: S, cfg: &ServerConfig) -> anyhow::Result<()>
where
  S: ContactStore + 'static,
{
  let app = tagcard_server::app(Arc::new(store));
  let address = cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
