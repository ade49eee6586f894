//! Server assembly for the Razzie Awards API.
//!
//! Configuration loading, dataset bootstrap, and the top-level router with
//! its HTTP middleware. The binary in `main.rs` only wires these together.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use razzie_core::store::NominationStore;
use razzie_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// Database path that selects an in-memory store.
pub const IN_MEMORY: &str = ":memory:";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `RAZZIE_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// SQLite file, or `:memory:` for a store that lives only as long as the
  /// process.
  pub database_path: PathBuf,
  /// Semicolon-delimited nominations file loaded at startup.
  pub csv_path:      PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:          "127.0.0.1".to_string(),
      port:          8000,
      database_path: PathBuf::from(IN_MEMORY),
      csv_path:      PathBuf::from("data/Movielist.csv"),
    }
  }
}

/// Layer the optional TOML file at `path` under `RAZZIE_`-prefixed
/// environment variables. Missing keys fall back to [`ServerConfig::default`].
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .add_source(config::File::from(path.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix("RAZZIE"))
    .build()?
    .try_deserialize()
}

// ─── Bootstrap ────────────────────────────────────────────────────────────────

/// Open the configured store and load the CSV into it.
pub async fn open_store(cfg: &ServerConfig) -> razzie_store_sqlite::Result<SqliteStore> {
  let store = if cfg.database_path == Path::new(IN_MEMORY) {
    SqliteStore::open_in_memory().await?
  } else {
    SqliteStore::open(&cfg.database_path).await?
  };
  store.initialize(&cfg.csv_path).await?;
  Ok(store)
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API router wrapped in request tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: NominationStore + 'static,
{
  razzie_api::api_router(store).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use tower::ServiceExt as _;

  use super::*;

  fn dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/Movielist.csv")
  }

  #[test]
  fn missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_config(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg.port, ServerConfig::default().port);
    assert_eq!(cfg.csv_path, ServerConfig::default().csv_path);
  }

  #[test]
  fn config_file_overrides_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "port = 9001\ncsv_path = \"other.csv\"").unwrap();

    let cfg = load_config(file.path()).unwrap();
    assert_eq!(cfg.port, 9001);
    assert_eq!(cfg.csv_path, PathBuf::from("other.csv"));
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.database_path, PathBuf::from(IN_MEMORY));
  }

  #[tokio::test]
  async fn open_store_fails_without_csv() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ServerConfig { csv_path: dir.path().join("missing.csv"), ..Default::default() };
    let err = open_store(&cfg).await.err().expect("missing csv must fail");
    assert!(matches!(err, razzie_store_sqlite::Error::CsvNotFound(_)), "{err}");
  }

  #[tokio::test]
  async fn bundled_dataset_serves_intervals() {
    let cfg = ServerConfig { csv_path: dataset(), ..Default::default() };
    let store = open_store(&cfg).await.unwrap();

    let req = Request::builder()
      .uri("/api/v1/producers/intervals")
      .body(Body::empty())
      .unwrap();
    let resp = app(Arc::new(store)).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
      body["min"],
      serde_json::json!([
        { "producer": "Joel Silver", "interval": 1, "previousWin": 1990, "followingWin": 1991 }
      ])
    );
    assert_eq!(
      body["max"],
      serde_json::json!([
        { "producer": "Bo Derek", "interval": 6, "previousWin": 1984, "followingWin": 1990 }
      ])
    );
  }
}
