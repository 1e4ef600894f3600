//! Domain models used by the backend: challenges, level rows, and verdicts.

use serde::{Deserialize, Serialize};

/// Answers shorter than this (after trimming) fail the rubric unless the
/// challenge overrides it.
pub const DEFAULT_MIN_LENGTH: usize = 25;

fn default_min_length() -> usize { DEFAULT_MIN_LENGTH }

/// One tutorial level as presented to the player.
///
/// `required_patterns` are case-insensitive regular expressions, each standing
/// for one concept the answer should mention. Order is preserved for feedback
/// and diagnostics.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Challenge {
  pub level_number: i32,
  pub title: String,
  pub goal: String,
  pub task: String,
  pub hint: String,
  pub badge_name: String,
  pub required_patterns: Vec<String>,
  #[serde(default = "default_min_length")]
  pub min_length: usize,
}

impl Challenge {
  /// Minimum number of matched patterns needed to pass: half the pattern
  /// count rounded up, never less than two.
  pub fn required_hits(&self) -> usize {
    std::cmp::max(2, self.required_patterns.len().div_ceil(2))
  }

  /// The registry row seeded for this level.
  pub fn to_level_record(&self) -> LevelRecord {
    LevelRecord {
      level_number: self.level_number,
      name: self.title.clone(),
      description: self.goal.clone(),
      badge_name: self.badge_name.clone(),
    }
  }
}

/// Row of the persisted `levels` table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct LevelRecord {
  pub level_number: i32,
  pub name: String,
  pub description: String,
  pub badge_name: String,
}

/// Grading result for one submission. `hits` and `required_hits` are enough
/// for a caller to re-derive `passed` together with `long_enough`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Verdict {
  pub level_number: i32,
  pub passed: bool,
  pub hits: usize,
  pub required_hits: usize,
  pub matched_patterns: Vec<String>,
  pub min_length: usize,
  pub long_enough: bool,
  pub feedback: Vec<String>,
}
