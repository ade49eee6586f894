//! razzie-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), loads the
//! nominations CSV into SQLite, and serves the JSON API over HTTP.
//!
//! ```
//! cargo run -p razzie-server -- --csv data/Movielist.csv --port 8000
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use razzie_server::{ServerConfig, app, load_config, open_store};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Razzie Awards API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Nominations CSV to load; overrides `csv_path`.
  #[arg(long)]
  csv: Option<PathBuf>,

  /// SQLite database file, or `:memory:`; overrides `database_path`.
  #[arg(long)]
  database: Option<PathBuf>,

  /// Port to listen on; overrides `port`.
  #[arg(short, long)]
  port: Option<u16>,
}

impl Cli {
  fn apply(self, mut cfg: ServerConfig) -> ServerConfig {
    if let Some(csv) = self.csv {
      cfg.csv_path = csv;
    }
    if let Some(database) = self.database {
      cfg.database_path = database;
    }
    if let Some(port) = self.port {
      cfg.port = port;
    }
    cfg
  }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let cfg = load_config(&cli.config).context("failed to read configuration")?;
  let cfg = cli.apply(cfg);

  let store = open_store(&cfg)
    .await
    .with_context(|| format!("failed to load dataset from {:?}", cfg.csv_path))?;
  let store = Arc::new(store);

  let address = format!("{}:{}", cfg.host, cfg.port);
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app(store.clone()))
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  // Connections have drained, so the router no longer holds the store.
  match Arc::try_unwrap(store) {
    Ok(store) => store.close().await.context("failed to close database")?,
    Err(_) => tracing::warn!("store still shared at shutdown; closing on drop"),
  }
  tracing::info!("Shut down");

  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
}
