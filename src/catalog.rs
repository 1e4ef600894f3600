//! Read-only challenge catalog with pre-compiled rubric patterns.
//!
//! Built once at startup (from the built-in seeds or a TOML file) and shared
//! behind an `Arc`. Nothing here mutates after construction, so lookups and
//! scoring need no locking.

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::domain::{Challenge, LevelRecord};
use crate::error::{AppError, Result};
use crate::seeds::seed_challenges;

#[derive(Error, Debug)]
pub enum CatalogError {
  #[error("level {level}: invalid pattern '{pattern}': {source}")]
  InvalidPattern {
    level: i32,
    pattern: String,
    #[source]
    source: regex::Error,
  },

  #[error("level {0} is defined more than once")]
  DuplicateLevel(i32),
}

/// A challenge together with its compiled patterns (same order).
#[derive(Debug)]
pub struct CatalogEntry {
  pub challenge: Challenge,
  pub patterns: Vec<Regex>,
}

#[derive(Debug)]
pub struct Catalog {
  entries: BTreeMap<i32, CatalogEntry>,
}

impl Catalog {
  pub fn from_challenges(challenges: Vec<Challenge>) -> std::result::Result<Self, CatalogError> {
    let mut entries = BTreeMap::new();
    for challenge in challenges {
      let level = challenge.level_number;
      if entries.contains_key(&level) {
        return Err(CatalogError::DuplicateLevel(level));
      }
      let patterns = challenge
        .required_patterns
        .iter()
        .map(|p| {
          RegexBuilder::new(p)
            .case_insensitive(true)
            .build()
            .map_err(|source| CatalogError::InvalidPattern { level, pattern: p.clone(), source })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
      entries.insert(level, CatalogEntry { challenge, patterns });
    }
    Ok(Self { entries })
  }

  /// The built-in seven levels.
  pub fn builtin() -> std::result::Result<Self, CatalogError> {
    Self::from_challenges(seed_challenges())
  }

  pub fn entry(&self, level_number: i32) -> Result<&CatalogEntry> {
    self
      .entries
      .get(&level_number)
      .ok_or_else(|| AppError::NotFound(level_number.to_string()))
  }

  pub fn get_challenge(&self, level_number: i32) -> Result<&Challenge> {
    self.entry(level_number).map(|e| &e.challenge)
  }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  /// Canonical registry rows, ascending by level number.
  pub fn level_records(&self) -> Vec<LevelRecord> {
    self.entries.values().map(|e| e.challenge.to_level_record()).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_catalog_has_seven_levels() {
    let catalog = Catalog::builtin().expect("builtin patterns compile");
    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog.get_challenge(4).unwrap().title, "The String Surgeon");
  }

  #[test]
  fn unknown_level_is_not_found() {
    let catalog = Catalog::builtin().unwrap();
    for level in [0, -1, 8, 99] {
      assert!(matches!(catalog.get_challenge(level), Err(AppError::NotFound(n)) if n == level.to_string()));
    }
  }

  #[test]
  fn level_records_follow_catalog_order() {
    let catalog = Catalog::builtin().unwrap();
    let rows = catalog.level_records();
    assert_eq!(rows.len(), 7);
    assert!(rows.windows(2).all(|w| w[0].level_number < w[1].level_number));
    assert_eq!(rows[3].name, "The String Surgeon");
    assert_eq!(rows[3].badge_name, "Date Whisperer");
  }

  #[test]
  fn rejects_bad_pattern() {
    let mut challenges = seed_challenges();
    challenges[0].required_patterns.push("(unclosed".into());
    let err = Catalog::from_challenges(challenges).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPattern { level: 1, .. }));
  }

  #[test]
  fn rejects_duplicate_levels() {
    let mut challenges = seed_challenges();
    challenges[1].level_number = 1;
    let err = Catalog::from_challenges(challenges).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateLevel(1)));
  }
}
