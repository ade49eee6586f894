//! CSV ingestion: parsing the semicolon-delimited nominations file.
//!
//! The expected header is `year;title;studios;producers;winner`. Columns are
//! located by name, so their order in the file does not matter.

use std::{fs::File, io::Read, path::Path};

use csv::StringRecord;

use crate::{Error, Result};

/// One row of the nominations file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nomination {
  pub year:      i32,
  pub title:     String,
  pub studios:   String,
  pub producers: String,
  pub winner:    bool,
}

/// Column positions resolved from the header row.
struct Columns {
  year:      usize,
  title:     usize,
  studios:   usize,
  producers: usize,
  winner:    usize,
}

impl Columns {
  fn resolve(headers: &StringRecord) -> Result<Self> {
    let find = |name: &'static str| {
      headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
        .ok_or(Error::MissingColumn(name))
    };
    Ok(Self {
      year:      find("year")?,
      title:     find("title")?,
      studios:   find("studios")?,
      producers: find("producers")?,
      winner:    find("winner")?,
    })
  }
}

/// `true` only for `yes`, ignoring case and surrounding whitespace.
pub fn normalize_winner(raw: &str) -> bool { raw.trim().eq_ignore_ascii_case("yes") }

/// Parse every nomination from `reader`.
///
/// An empty input (no header at all) yields no rows rather than an error.
pub fn parse_nominations<R: Read>(reader: R) -> Result<Vec<Nomination>> {
  let mut reader = csv::ReaderBuilder::new()
    .delimiter(b';')
    .has_headers(true)
    .flexible(false)
    .from_reader(reader);

  let headers = reader.headers()?.clone();
  if headers.is_empty() {
    return Ok(Vec::new());
  }
  let columns = Columns::resolve(&headers)?;

  let mut rows = Vec::new();
  for result in reader.records() {
    let record = result?;
    let line = record.position().map_or(0, |p| p.line());
    let field = |idx: usize| record.get(idx).unwrap_or_default();

    let year = field(columns.year)
      .trim()
      .parse::<i32>()
      .map_err(|e| Error::InvalidRow {
        line,
        reason: format!("year {:?}: {e}", field(columns.year)),
      })?;

    rows.push(Nomination {
      year,
      title: field(columns.title).to_owned(),
      studios: field(columns.studios).to_owned(),
      producers: field(columns.producers).to_owned(),
      winner: normalize_winner(field(columns.winner)),
    });
  }

  Ok(rows)
}

/// Parse the nominations file at `path`.
///
/// A missing file is reported as [`Error::CsvNotFound`].
pub fn read_nominations(path: &Path) -> Result<Vec<Nomination>> {
  if !path.exists() {
    return Err(Error::CsvNotFound(path.to_path_buf()));
  }
  let file = File::open(path).map_err(|e| Error::Csv(e.into()))?;
  parse_nominations(file)
}
