//! Records flowing into and out of the interval computation.
//!
//! [`WinRecord`] is what the store hands the core; [`IntervalResult`] is what
//! the API layer serialises back to the client.

use serde::{Deserialize, Serialize};

/// One winning nomination, reduced to the two columns the core needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinRecord {
  pub year:          i32,
  /// Free-text producers field; may hold several names joined by commas or
  /// the word "and".
  pub producers_raw: String,
}

impl WinRecord {
  pub fn new(year: i32, producers_raw: impl Into<String>) -> Self {
    Self { year, producers_raw: producers_raw.into() }
  }
}

/// The gap between two chronologically adjacent wins of one producer.
///
/// `interval == following_win - previous_win` and is always at least 1. It is
/// wider than the years so any two `i32` years fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
  pub producer:      String,
  pub interval:      i64,
  pub previous_win:  i32,
  pub following_win: i32,
}

/// Producers with the globally shortest and longest intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalResult {
  pub min: Vec<ProducerInterval>,
  pub max: Vec<ProducerInterval>,
}

impl IntervalResult {
  /// `true` when neither list holds an entry, i.e. no producer won twice.
  pub fn is_empty(&self) -> bool { self.min.is_empty() && self.max.is_empty() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn interval_serialises_with_camel_case_fields() {
    let interval = ProducerInterval {
      producer:      "Joel Silver".into(),
      interval:      1,
      previous_win:  1990,
      following_win: 1991,
    };
    let json = serde_json::to_value(&interval).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "producer": "Joel Silver",
        "interval": 1,
        "previousWin": 1990,
        "followingWin": 1991,
      })
    );
  }

  #[test]
  fn default_result_is_empty() {
    let result = IntervalResult::default();
    assert!(result.is_empty());
    assert_eq!(
      serde_json::to_string(&result).unwrap(),
      r#"{"min":[],"max":[]}"#
    );
  }
}
