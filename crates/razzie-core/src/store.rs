//! The `NominationStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `razzie-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::record::WinRecord;

/// Read-only query surface over the nominations table.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait NominationStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every `(year, producers)` pair whose nomination won and whose producers
  /// field is non-empty, in insertion order.
  fn winning_records(
    &self,
  ) -> impl Future<Output = Result<Vec<WinRecord>, Self::Error>> + Send + '_;
}
