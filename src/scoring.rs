//! Answer grading against a level's keyword/length rubric.
//!
//! Patterns are literal case-insensitive regex tests over the raw answer;
//! there is no attempt to understand what the answer means.

use tracing::{debug, instrument};

use crate::catalog::{Catalog, CatalogEntry};
use crate::domain::Verdict;
use crate::error::Result;

/// Grade `answer` for `level_number`. Fails only when the level is unknown;
/// every string, including the empty one, yields a verdict.
#[instrument(level = "debug", skip(catalog, answer), fields(answer_len = answer.len()))]
pub fn score(catalog: &Catalog, level_number: i32, answer: &str) -> Result<Verdict> {
  let entry = catalog.entry(level_number)?;
  let verdict = grade(entry, answer);
  debug!(
    target: "scoring",
    level_number,
    hits = verdict.hits,
    required_hits = verdict.required_hits,
    long_enough = verdict.long_enough,
    passed = verdict.passed,
    "Answer graded"
  );
  Ok(verdict)
}

pub fn grade(entry: &CatalogEntry, answer: &str) -> Verdict {
  let ch = &entry.challenge;

  let matched_patterns: Vec<String> = entry
    .patterns
    .iter()
    .zip(&ch.required_patterns)
    .filter(|(re, _)| re.is_match(answer))
    .map(|(_, src)| src.clone())
    .collect();
  let hits = matched_patterns.len();

  let long_enough = answer.trim().chars().count() >= ch.min_length;
  let required_hits = ch.required_hits();
  let passed = hits >= required_hits && long_enough;

  // Messages are additive, not exclusive.
  let mut feedback = Vec::new();
  if !long_enough {
    feedback.push(format!("Write a bit more: answers need at least {} characters.", ch.min_length));
  }
  if hits < required_hits {
    feedback.push("Mention more of the key concepts for this level.".to_string());
  }
  if passed {
    feedback.push(format!("Level {} cleared! You earned the '{}' badge.", ch.level_number, ch.badge_name));
  }

  Verdict {
    level_number: ch.level_number,
    passed,
    hits,
    required_hits,
    matched_patterns,
    min_length: ch.min_length,
    long_enough,
    feedback,
  }
}
