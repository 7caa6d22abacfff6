//! HTTP server wiring for tagcard.
//!
//! Loads [`ServerConfig`], wraps the API router in CORS and request-tracing
//! layers, and leaves opening the store and binding the socket to `main`.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use serde::Deserialize;
use tagcard_core::store::ContactStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `TAGCARD_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite database file; a leading `~/` is expanded.
  pub store_path: PathBuf,
  /// Keep contacts in process memory instead of SQLite.
  pub in_memory:  bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "0.0.0.0".to_string(),
      port:       8001,
      store_path: PathBuf::from("tagcard.db"),
      in_memory:  false,
    }
  }
}

impl ServerConfig {
  /// Layer an optional TOML file under `TAGCARD_*` environment variables.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("TAGCARD"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// The API router with CORS and request tracing applied.
///
/// CORS mirrors the requesting origin and allows credentials, so any browser
/// frontend can talk to the service.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: ContactStore + 'static,
{
  tagcard_api::router(store)
    .layer(CorsLayer::very_permissive())
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use tagcard_core::memory::MemoryStore;
  use tower::ServiceExt as _;

  use super::*;

  #[test]
  fn defaults() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.address(), "0.0.0.0:8001");
    assert!(!cfg.in_memory);
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let cfg = ServerConfig::load(Path::new("does-not-exist.toml")).unwrap();
    assert_eq!(cfg.port, ServerConfig::default().port);
  }

  #[test]
  fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 9000\nin_memory = true\n").unwrap();

    let cfg = ServerConfig::load(&path).unwrap();
    assert_eq!(cfg.port, 9000);
    assert!(cfg.in_memory);
    assert_eq!(cfg.host, "0.0.0.0");
  }

  #[test]
  fn tilde_is_expanded() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(
      expand_tilde(Path::new("~/contacts.db")),
      PathBuf::from(home).join("contacts.db")
    );
    assert_eq!(
      expand_tilde(Path::new("/var/contacts.db")),
      PathBuf::from("/var/contacts.db")
    );
  }

  #[tokio::test]
  async fn cors_preflight_is_allowed() {
    let app = app(Arc::new(MemoryStore::new()));
    let req = Request::builder()
      .method("OPTIONS")
      .uri("/api/contacts")
      .header(header::ORIGIN, "http://localhost:3000")
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
      .body(Body::empty())
      .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
      "http://localhost:3000"
    );
  }

  #[tokio::test]
  async fn root_is_served_through_layers() {
    let app = app(Arc::new(MemoryStore::new()));
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "running");
  }
}
