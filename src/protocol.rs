//! Public HTTP request/response structs (serde ready).
//! Keep this small and stable so the backend and clients can evolve apart.

use serde::{Deserialize, Serialize};

use crate::domain::{Challenge, Verdict};

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

/// Only whether a database is configured; never the URL itself.
#[derive(Serialize)]
pub struct ConfigOut {
    pub has_database_url: bool,
}

#[derive(Serialize)]
pub struct SeedOut {
    pub ok: bool,
    pub message: String,
    pub inserted: u64,
}

/// Challenge as served by `GET /levels/{n}`.
#[derive(Debug, Serialize)]
pub struct ChallengeOut {
    pub level_number: i32,
    pub title: String,
    pub goal: String,
    pub task: String,
    pub hint: String,
    pub must_have: Vec<String>,
    pub min_length: usize,
    pub badge_name: String,
}

impl From<&Challenge> for ChallengeOut {
    fn from(c: &Challenge) -> Self {
        Self {
            level_number: c.level_number,
            title: c.title.clone(),
            goal: c.goal.clone(),
            task: c.task.clone(),
            hint: c.hint.clone(),
            must_have: c.required_patterns.clone(),
            min_length: c.min_length,
            badge_name: c.badge_name.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitIn {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitOut {
    pub level_number: i32,
    pub passed: bool,
    pub hits: usize,
    pub required_hits: usize,
    pub matched_patterns: Vec<String>,
    pub min_length: usize,
    pub long_enough: bool,
    pub feedback: Vec<String>,
}

impl From<Verdict> for SubmitOut {
    fn from(v: Verdict) -> Self {
        Self {
            level_number: v.level_number,
            passed: v.passed,
            hits: v.hits,
            required_hits: v.required_hits,
            matched_patterns: v.matched_patterns,
            min_length: v.min_length,
            long_enough: v.long_enough,
            feedback: v.feedback,
        }
    }
}
