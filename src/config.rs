//! Process configuration from environment variables, plus the optional TOML
//! catalog file that replaces the built-in levels.
//!
//! Catalog file schema:
//!
//! ```toml
//! [[challenges]]
//! level_number = 1
//! title = "..."
//! goal = "..."
//! task = "..."
//! hint = "..."
//! badge_name = "..."
//! required_patterns = ["isnull|isna", "fillna|dropna"]
//! min_length = 40   # optional, defaults to 25
//! ```

use std::{path::{Path, PathBuf}, time::Duration};

use serde::Deserialize;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::domain::Challenge;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DB_TIMEOUT_SECS: u64 = 5;

/// Output format for the tracing subscriber (`LOG_FORMAT`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl LogFormat {
  fn parse(raw: &str) -> Self {
    if raw.trim().eq_ignore_ascii_case("json") { LogFormat::Json } else { LogFormat::Pretty }
  }
}

#[derive(Clone, Debug)]
pub struct ServiceConfig {
  pub port: u16,
  /// Never logged or returned to clients.
  pub database_url: Option<String>,
  pub db_timeout: Duration,
  pub catalog_path: Option<PathBuf>,
  pub static_dir: PathBuf,
  /// `LOG_LEVEL` filter directives; `None` uses the built-in default.
  pub log_filter: Option<String>,
  pub log_format: LogFormat,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      port: DEFAULT_PORT,
      database_url: None,
      db_timeout: Duration::from_secs(DEFAULT_DB_TIMEOUT_SECS),
      catalog_path: None,
      static_dir: PathBuf::from("./static"),
      log_filter: None,
      log_format: LogFormat::Pretty,
    }
  }
}

impl ServiceConfig {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from any key lookup; blank values count as unset.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let defaults = Self::default();
    Self {
      port: get("PORT").and_then(|p| p.parse().ok()).unwrap_or(defaults.port),
      database_url: get("DATABASE_URL"),
      db_timeout: get("DB_TIMEOUT_SECS")
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|s| *s > 0)
        .map(Duration::from_secs)
        .unwrap_or(defaults.db_timeout),
      catalog_path: get("CATALOG_PATH").map(PathBuf::from),
      static_dir: get("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
      log_filter: get("LOG_LEVEL"),
      log_format: get("LOG_FORMAT").map(|f| LogFormat::parse(&f)).unwrap_or(defaults.log_format),
    }
  }

  pub fn has_database_url(&self) -> bool { self.database_url.is_some() }
}

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
  #[serde(default)]
  pub challenges: Vec<Challenge>,
}

/// Read and compile a catalog file. Any failure is logged and yields `None`.
pub fn load_catalog_file(path: &Path) -> Option<Catalog> {
  let shown = path.display();
  let raw = match std::fs::read_to_string(path) {
    Ok(s) => s,
    Err(e) => {
      error!(target: "levels_backend", path = %shown, error = %e, "Failed to read catalog file");
      return None;
    }
  };
  let file = match toml::from_str::<CatalogFile>(&raw) {
    Ok(f) => f,
    Err(e) => {
      error!(target: "levels_backend", path = %shown, error = %e, "Failed to parse catalog file");
      return None;
    }
  };
  if file.challenges.is_empty() {
    error!(target: "levels_backend", path = %shown, "Catalog file defines no challenges");
    return None;
  }
  match Catalog::from_challenges(file.challenges) {
    Ok(catalog) => {
      info!(target: "levels_backend", path = %shown, levels = catalog.len(), "Loaded catalog file");
      Some(catalog)
    }
    Err(e) => {
      error!(target: "levels_backend", path = %shown, error = %e, "Invalid catalog file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;
  use std::io::Write;

  fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |k| map.get(k).cloned()
  }

  fn write_tmp(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    f.write_all(contents.as_bytes()).expect("write");
    f
  }

  #[test]
  fn defaults_when_env_is_empty() {
    let cfg = ServiceConfig::from_lookup(lookup(&[]));
    assert_eq!(cfg.port, 8000);
    assert!(!cfg.has_database_url());
    assert_eq!(cfg.db_timeout, Duration::from_secs(5));
    assert_eq!(cfg.static_dir, PathBuf::from("./static"));
    assert_eq!(cfg.log_format, LogFormat::Pretty);
    assert!(cfg.log_filter.is_none());
  }

  #[test]
  fn log_settings_come_from_env() {
    let cfg = ServiceConfig::from_lookup(lookup(&[("LOG_FORMAT", "JSON"), ("LOG_LEVEL", "debug")]));
    assert_eq!(cfg.log_format, LogFormat::Json);
    assert_eq!(cfg.log_filter.as_deref(), Some("debug"));

    let cfg = ServiceConfig::from_lookup(lookup(&[("LOG_FORMAT", "compact")]));
    assert_eq!(cfg.log_format, LogFormat::Pretty);
  }

  #[test]
  fn blank_database_url_counts_as_unset() {
    let cfg = ServiceConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")]));
    assert!(!cfg.has_database_url());
  }

  #[test]
  fn reads_overrides() {
    let cfg = ServiceConfig::from_lookup(lookup(&[
      ("PORT", "9100"),
      ("DATABASE_URL", "postgres://u:p@localhost/levels"),
      ("DB_TIMEOUT_SECS", "2"),
      ("CATALOG_PATH", "/etc/levels.toml"),
    ]));
    assert_eq!(cfg.port, 9100);
    assert!(cfg.has_database_url());
    assert_eq!(cfg.db_timeout, Duration::from_secs(2));
    assert_eq!(cfg.catalog_path, Some(PathBuf::from("/etc/levels.toml")));
  }

  #[test]
  fn garbage_numbers_fall_back_to_defaults() {
    let cfg = ServiceConfig::from_lookup(lookup(&[("PORT", "http"), ("DB_TIMEOUT_SECS", "0")]));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.db_timeout, Duration::from_secs(DEFAULT_DB_TIMEOUT_SECS));
  }

  #[test]
  fn loads_catalog_file_with_min_length_default() {
    let f = write_tmp(
      r#"
[[challenges]]
level_number = 1
title = "Nulls"
goal = "g"
task = "t"
hint = "h"
badge_name = "b"
required_patterns = ["isna", "fillna"]

[[challenges]]
level_number = 2
title = "Dupes"
goal = "g"
task = "t"
hint = "h"
badge_name = "b"
required_patterns = ["duplicated", "drop_duplicates"]
min_length = 60
"#,
    );
    let catalog = load_catalog_file(f.path()).expect("catalog loads");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get_challenge(1).unwrap().min_length, 25);
    assert_eq!(catalog.get_challenge(2).unwrap().min_length, 60);
  }

  #[test]
  fn invalid_pattern_in_file_is_rejected() {
    let f = write_tmp(
      r#"
[[challenges]]
level_number = 1
title = "Broken"
goal = "g"
task = "t"
hint = "h"
badge_name = "b"
required_patterns = ["[oops"]
"#,
    );
    assert!(load_catalog_file(f.path()).is_none());
  }

  #[test]
  fn missing_file_is_rejected() {
    assert!(load_catalog_file(Path::new("/definitely/not/here.toml")).is_none());
  }
}
