//! SQL schema for the nominations table.

/// Table DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS worst_movie_nominations (
    year      INTEGER,
    title     TEXT,
    studios   TEXT,
    producers TEXT,
    winner    BOOLEAN
);
";

/// Lookup indexes, created after the bulk load.
pub const INDEXES: &str = "
CREATE INDEX IF NOT EXISTS idx_producer ON worst_movie_nominations(producers);
CREATE INDEX IF NOT EXISTS idx_year     ON worst_movie_nominations(year);
";
