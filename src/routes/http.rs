//! HTTP endpoint handlers. Thin wrappers that forward to the catalog, the
//! scoring engine and the registry; errors map to status codes via `AppError`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::{info, instrument};

use crate::domain::LevelRecord;
use crate::error::{AppError, Result};
use crate::protocol::*;
use crate::scoring::score;
use crate::state::AppState;
use crate::store::DbStatus;

#[instrument(level = "debug")]
pub async fn http_health() -> Json<HealthOut> {
    Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip(state))]
pub async fn http_config(State(state): State<Arc<AppState>>) -> Json<ConfigOut> {
    Json(ConfigOut { has_database_url: state.registry.is_configured() })
}

#[instrument(level = "info", skip(state))]
pub async fn http_db_check(State(state): State<Arc<AppState>>) -> Result<Json<DbStatus>> {
    let status = state.registry.check_connectivity().await?;
    info!(target: "levels_backend", ?status, "DB check");
    Ok(Json(status))
}

#[instrument(level = "info", skip(state))]
pub async fn http_seed(State(state): State<Arc<AppState>>) -> Result<Json<SeedOut>> {
    let inserted = state.seed().await?;
    Ok(Json(SeedOut {
        ok: true,
        message: format!("Levels table ready ({inserted} new rows)."),
        inserted,
    }))
}

#[instrument(level = "info", skip(state))]
pub async fn http_list_levels(State(state): State<Arc<AppState>>) -> Result<Json<Vec<LevelRecord>>> {
    let levels = state.registry.list_levels().await?;
    info!(target: "levels_backend", count = levels.len(), "Levels listed");
    Ok(Json(levels))
}

/// Any integer that doesn't fit `i32` is still just a level the catalog
/// doesn't have; anything that isn't an integer is a malformed request.
fn parse_level(raw: &str) -> Result<i32> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Validation(format!("level number must be an integer, got '{raw}'")));
    }
    raw.parse::<i32>().map_err(|_| AppError::NotFound(raw.to_string()))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_level(
    State(state): State<Arc<AppState>>,
    Path(raw_level): Path<String>,
) -> Result<Json<ChallengeOut>> {
    let level_number = parse_level(&raw_level)?;
    let challenge = state.catalog.get_challenge(level_number)?;
    Ok(Json(ChallengeOut::from(challenge)))
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_submit(
    State(state): State<Arc<AppState>>,
    Path(raw_level): Path<String>,
    body: std::result::Result<Json<SubmitIn>, JsonRejection>,
) -> Result<Json<SubmitOut>> {
    let level_number = parse_level(&raw_level)?;
    // Unknown levels win over malformed bodies.
    state.catalog.get_challenge(level_number)?;
    let Json(body) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    let verdict = score(&state.catalog, level_number, &body.answer)?;
    info!(
        target: "scoring",
        level_number,
        answer_len = body.answer.len(),
        passed = verdict.passed,
        hits = verdict.hits,
        "Submission graded"
    );
    Ok(Json(SubmitOut::from(verdict)))
}
