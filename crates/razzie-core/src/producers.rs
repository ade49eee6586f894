//! Splitting a raw producers field into individual names.
//!
//! Names are separated by commas or by the word `and` with whitespace on both
//! sides, so `"A, B and C"` yields three names. Matching is case-sensitive:
//! `"Andrew"` or `"Sandra"` are never split.

/// Split `raw` into trimmed, non-empty producer names, in the order they
/// appear. Duplicates are kept; callers dedupe by year.
pub fn split_producers(raw: &str) -> Vec<&str> {
  raw
    .split(',')
    .flat_map(split_on_and)
    .map(str::trim)
    .filter(|name| !name.is_empty())
    .collect()
}

/// Split `segment` on every `\s+and\s+` occurrence, scanning left to right.
///
/// A separator consumes its trailing whitespace, so the next `and` must be
/// preceded by whitespace that belongs to the following piece.
fn split_on_and(segment: &str) -> Vec<&str> {
  const WORD: &str = "and";

  let mut pieces = Vec::new();
  let mut start = 0;
  let mut cursor = 0;

  while let Some(offset) = segment[cursor..].find(WORD) {
    let at = cursor + offset;
    let after = at + WORD.len();

    let spaced_before = segment[start..at].ends_with(char::is_whitespace);
    let spaced_after = segment[after..].starts_with(char::is_whitespace);

    if spaced_before && spaced_after {
      pieces.push(&segment[start..at]);
      start = segment.len() - segment[after..].trim_start().len();
      cursor = start;
    } else {
      cursor = at + 1;
    }
  }

  pieces.push(&segment[start..]);
  pieces
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn comma_and_word_separators_mix() {
    assert_eq!(split_producers("A, B and C"), vec!["A", "B", "C"]);
  }

  #[test]
  fn empty_input_yields_nothing() {
    assert!(split_producers("").is_empty());
  }

  #[test]
  fn surrounding_whitespace_is_trimmed() {
    assert_eq!(split_producers("  A  "), vec!["A"]);
  }

  #[test]
  fn delimiters_only_yield_nothing() {
    assert!(split_producers(" , ,, ").is_empty());
    assert!(split_producers(", and ,").is_empty());
  }

  #[test]
  fn and_form_alone() {
    assert_eq!(
      split_producers("Steven Perry and Joel Silver"),
      vec!["Steven Perry", "Joel Silver"]
    );
  }

  #[test]
  fn and_inside_a_name_is_not_a_separator() {
    assert_eq!(
      split_producers("Sandra Bullock, Andrew Vajna"),
      vec!["Sandra Bullock", "Andrew Vajna"]
    );
    assert_eq!(split_producers("Brandon Land"), vec!["Brandon Land"]);
  }

  #[test]
  fn capitalised_and_is_not_a_separator() {
    assert_eq!(split_producers("Tom And Jerry"), vec!["Tom And Jerry"]);
  }

  #[test]
  fn and_needs_whitespace_on_both_sides() {
    assert_eq!(split_producers("A andB"), vec!["A andB"]);
    assert_eq!(split_producers("Aand B"), vec!["Aand B"]);
  }

  #[test]
  fn whitespace_runs_around_and_are_consumed() {
    assert_eq!(split_producers("A \t and\n  B"), vec!["A", "B"]);
  }

  #[test]
  fn oxford_comma_before_and() {
    assert_eq!(
      split_producers("Bob Cavallo, Joe Ruffalo, and Steve Fargnoli"),
      vec!["Bob Cavallo", "Joe Ruffalo", "Steve Fargnoli"]
    );
  }

  #[test]
  fn repeated_names_are_kept() {
    assert_eq!(split_producers("X, X"), vec!["X", "X"]);
  }
}
