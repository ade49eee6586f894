//! SQLite backend for the Razzie nominations dataset.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. The table is populated once from a
//! semicolon-delimited CSV at startup and only read afterwards.

mod ingest;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use ingest::{Nomination, parse_nominations};
pub use store::SqliteStore;
