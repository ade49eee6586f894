//! JSON REST API for the Razzie Awards dataset.
//!
//! Exposes an axum [`Router`] backed by any
//! [`razzie_core::store::NominationStore`]. Tracing layers, TLS, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = razzie_api::api_router(Arc::new(store));
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod producers;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use razzie_core::store::NominationStore;
use serde_json::{Value, json};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// Routes:
/// - `GET /`
/// - `GET /api/v1/producers/intervals`
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: NominationStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let v1 = Router::new().route("/producers/intervals", get(producers::intervals::<S>));

  Router::new()
    .route("/", get(root))
    .nest("/api/v1", v1)
    .with_state(store)
}

/// `GET /` — welcome message.
async fn root() -> Json<Value> {
  Json(json!({ "message": "Welcome to the Razzie Awards API" }))
}

// ─── Integration tests ────────────────────────────────────────────────────────
