//! Error type for `razzie-store-sqlite`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("CSV file not found at {0:?}")]
  CsvNotFound(PathBuf),

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("missing CSV column: {0:?}")]
  MissingColumn(&'static str),

  #[error("invalid row at line {line}: {reason}")]
  InvalidRow { line: u64, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
