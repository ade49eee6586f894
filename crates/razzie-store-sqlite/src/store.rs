//! [`SqliteStore`] — the SQLite implementation of [`NominationStore`].

use std::path::Path;

use razzie_core::{WinRecord, store::NominationStore};

use crate::{
  Result,
  ingest::{Nomination, read_nominations},
  schema::{INDEXES, SCHEMA},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// The nominations dataset backed by a single SQLite connection.
///
/// Cloning is cheap — the inner connection is reference-counted. The
/// connection closes when the last clone drops, or explicitly via
/// [`SqliteStore::close`].
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and ensure the table exists.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — the default for a single load cycle.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Full bootstrap: load `csv_path`, replacing any previous contents, then
  /// build the lookup indexes. Returns the number of rows loaded.
  pub async fn initialize(&self, csv_path: impl AsRef<Path>) -> Result<usize> {
    let csv_path = csv_path.as_ref();
    self.init_schema().await?;
    let loaded = self.load_csv(csv_path).await?;
    self.create_indexes().await?;
    tracing::info!(rows = loaded, path = %csv_path.display(), "nominations loaded");
    Ok(loaded)
  }

  /// Parse the CSV at `path` and replace the table contents with it.
  pub async fn load_csv(&self, path: impl AsRef<Path>) -> Result<usize> {
    let rows = read_nominations(path.as_ref())?;
    self.replace_nominations(rows).await
  }

  /// Delete every row, then insert `rows`, in one transaction.
  pub async fn replace_nominations(&self, rows: Vec<Nomination>) -> Result<usize> {
    let count = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM worst_movie_nominations", [])?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO worst_movie_nominations (year, title, studios, producers, winner)
             VALUES (?1, ?2, ?3, ?4, ?5)",
          )?;
          for row in &rows {
            stmt.execute(rusqlite::params![
              row.year,
              row.title,
              row.studios,
              row.producers,
              row.winner,
            ])?;
          }
        }
        tx.commit()?;
        Ok(rows.len())
      })
      .await?;
    Ok(count)
  }

  /// Create `idx_producer` and `idx_year`; a no-op if they already exist.
  pub async fn create_indexes(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(INDEXES)?;
        Ok(())
      })
      .await?;
    tracing::debug!("nomination indexes created");
    Ok(())
  }

  /// Total number of nominations.
  pub async fn count(&self) -> Result<u64> {
    self.count_where("1 = 1").await
  }

  /// Number of winning nominations.
  pub async fn count_winners(&self) -> Result<u64> {
    self.count_where("winner = TRUE").await
  }

  async fn count_where(&self, predicate: &'static str) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          &format!("SELECT COUNT(*) FROM worst_movie_nominations WHERE {predicate}"),
          [],
          |row| row.get(0),
        )?)
      })
      .await?;
    Ok(n.max(0) as u64)
  }

  /// Names of the indexes defined on the nominations table, sorted.
  pub async fn index_names(&self) -> Result<Vec<String>> {
    let names = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT name FROM sqlite_master
           WHERE type = 'index' AND tbl_name = 'worst_movie_nominations'
           ORDER BY name",
        )?;
        let names = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
      })
      .await?;
    Ok(names)
  }

  /// Close the underlying connection, surfacing any error from SQLite.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }
}

// ─── NominationStore impl ────────────────────────────────────────────────────

impl NominationStore for SqliteStore {
  type Error = crate::Error;

  async fn winning_records(&self) -> Result<Vec<WinRecord>> {
    let records = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT year, producers
           FROM worst_movie_nominations
           WHERE winner = TRUE AND producers IS NOT NULL AND producers <> ''
           ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(WinRecord {
              year:          row.get(0)?,
              producers_raw: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    tracing::debug!(count = records.len(), "fetched winning records");
    Ok(records)
  }
}
