//! Handlers for `/producers` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/producers/intervals` | 404 when no producer has won twice |

use std::sync::Arc;

use axum::{Json, extract::State};
use razzie_core::{IntervalResult, compute_intervals, store::NominationStore};

use crate::error::ApiError;

/// `detail` message of the 404 returned when no producer has won twice.
pub const NO_INTERVALS: &str = "No producer intervals found.";

/// `GET /producers/intervals`
///
/// Producers with the shortest and longest gap between consecutive wins.
pub async fn intervals<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<IntervalResult>, ApiError>
where
  S: NominationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = store
    .winning_records()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let result = tokio::task::spawn_blocking(move || compute_intervals(&records))
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?;

  tracing::debug!(min = result.min.len(), max = result.max.len(), "intervals computed");

  found(result).map(Json)
}

/// Pass `result` through unless both lists are empty.
///
/// A result with only one populated list is still a success.
pub fn found(result: IntervalResult) -> Result<IntervalResult, ApiError> {
  if result.is_empty() {
    return Err(ApiError::NotFound(NO_INTERVALS.to_owned()));
  }
  Ok(result)
}
