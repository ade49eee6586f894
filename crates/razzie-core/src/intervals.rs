//! The producer-interval aggregation.
//!
//! Win years are grouped per producer, deduplicated and sorted. Each pair of
//! adjacent years yields one [`ProducerInterval`]; the result keeps every
//! interval equal to the global minimum and every interval equal to the
//! global maximum.
//!
//! Output order is deterministic: producers in first-seen order, then each
//! producer's intervals chronologically.

use std::collections::{BTreeSet, HashMap};

use crate::{
  producers::split_producers,
  record::{IntervalResult, ProducerInterval, WinRecord},
};

// ─── Year history ─────────────────────────────────────────────────────────────

/// Per-producer set of winning years, remembering first-seen producer order.
#[derive(Debug, Default)]
pub struct ProducerYearHistory<'a> {
  index:   HashMap<&'a str, usize>,
  entries: Vec<(&'a str, BTreeSet<i32>)>,
}

impl<'a> ProducerYearHistory<'a> {
  /// Build the history from winning records.
  pub fn from_records(records: &'a [WinRecord]) -> Self {
    let mut history = Self::default();
    for record in records {
      for producer in split_producers(&record.producers_raw) {
        history.add(producer, record.year);
      }
    }
    history
  }

  /// Record that `producer` won in `year`. Repeated years collapse.
  pub fn add(&mut self, producer: &'a str, year: i32) {
    let slot = *self.index.entry(producer).or_insert_with(|| {
      self.entries.push((producer, BTreeSet::new()));
      self.entries.len() - 1
    });
    self.entries[slot].1.insert(year);
  }

  /// Sorted, distinct win years for `producer`, if any.
  pub fn years(&self, producer: &str) -> Option<&BTreeSet<i32>> {
    self.index.get(producer).map(|&slot| &self.entries[slot].1)
  }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  /// Every adjacent-year interval, producers in first-seen order.
  pub fn intervals(&self) -> Vec<ProducerInterval> {
    let mut out = Vec::new();
    for (producer, years) in &self.entries {
      let years: Vec<i32> = years.iter().copied().collect();
      for pair in years.windows(2) {
        out.push(ProducerInterval {
          producer:      (*producer).to_owned(),
          interval:      i64::from(pair[1]) - i64::from(pair[0]),
          previous_win:  pair[0],
          following_win: pair[1],
        });
      }
    }
    out
  }
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

/// Compute the min/max interval groups over `records`.
///
/// Producers with a single distinct winning year contribute nothing. When no
/// producer won twice both lists are empty.
pub fn compute_intervals(records: &[WinRecord]) -> IntervalResult {
  let intervals = ProducerYearHistory::from_records(records).intervals();

  let (Some(min), Some(max)) = (
    intervals.iter().map(|i| i.interval).min(),
    intervals.iter().map(|i| i.interval).max(),
  ) else {
    return IntervalResult::default();
  };

  IntervalResult {
    min: intervals.iter().filter(|i| i.interval == min).cloned().collect(),
    max: intervals.into_iter().filter(|i| i.interval == max).collect(),
  }
}
