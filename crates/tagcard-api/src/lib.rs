//! JSON REST API for tagcard.
//!
//! Exposes an axum [`Router`] backed by any
//! [`tagcard_core::store::ContactStore`]. The store is injected as router
//! state; CORS, tracing and transport concerns are the caller's
//! responsibility.
//!
//! # Routes
//!
//! ```text
//! GET    /                         status message
//! GET    /api/contacts             list
//! POST   /api/contacts             create
//! PUT    /api/contacts/{id}        update
//! DELETE /api/contacts/{id}        delete
//! GET    /api/contacts/{id}/ndef   NDEF record + usage instructions
//! GET    /api/contacts/{id}/qr-code  SVG QR code of the payload
//! ```

pub mod contacts;
pub mod error;
pub mod ndef;
pub mod qr;

use std::sync::Arc;

use axum::{
  Json, Router,
  routing::{get, put},
};
use serde_json::{Value, json};
use tagcard_core::store::ContactStore;

pub use error::ApiError;

/// Build the full application router for `store`.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route("/", get(root))
    .nest("/api", api_router(store))
}

/// The `/contacts` routes alone, for nesting under a prefix.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contacts/{id}",
      put(contacts::update::<S>).delete(contacts::delete_one::<S>),
    )
    .route("/contacts/{id}/ndef", get(ndef::handler::<S>))
    .route("/contacts/{id}/qr-code", get(qr::handler::<S>))
    .with_state(store)
}

/// `GET /`
async fn root() -> Json<Value> {
  Json(json!({ "message": "NFC Contact Manager API", "status": "running" }))
}
