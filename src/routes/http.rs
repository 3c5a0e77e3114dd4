//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::{collections::HashMap, sync::Arc};
use axum::{extract::{Path, State}, response::IntoResponse, Form, Json};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_list_exercises(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let list: Vec<ExerciseSummaryOut> = state.list_exercises().await.iter().map(summary_out).collect();
  Json(list)
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_get_exercise(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<ExerciseOut>, ApiError> {
  let ex = find_exercise(&state, &id).await?;
  info!(target: "blankscore_backend", %id, kind = ?ex.kind, "HTTP exercise served");
  Ok(Json(exercise_out(&ex, state.config.shuffle_word_bank)))
}

/// Form submission: `answer_0=...&answer_1=...[&student_id=...]`.
#[instrument(level = "info", skip(state, form), fields(%id, field_count = form.len()))]
pub async fn http_submit_exercise(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Form(form): Form<HashMap<String, String>>,
) -> Result<Json<SubmissionOut>, ApiError> {
  let (student_id, fields) = split_student_id(form);
  let attempt = submit_answers(&state, &id, student_id, &fields).await?;
  info!(target: "blankscore_backend", %id, attempt_id = %attempt.id, correct = attempt.result.correct_count, total = attempt.result.total_blanks, "HTTP submission scored");
  Ok(Json(SubmissionOut { attempt_id: attempt.id.to_string(), result: ScoreOut::from(&attempt.result) }))
}

#[instrument(level = "info", skip(state, body), fields(field_count = body.fields.len(), matching = ?body.matching))]
pub async fn http_post_score(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ScoreIn>,
) -> Result<Json<ScoreOut>, ApiError> {
  let result = score_inline(&body, state.config.default_matching)?;
  Ok(Json(ScoreOut::from(&result)))
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_get_stats(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<StatsOut>, ApiError> {
  Ok(Json(exercise_stats(&state, &id).await?))
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_get_diagnostic(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<DiagnosticOut>, ApiError> {
  Ok(Json(exercise_diagnostic(&state, &id).await?))
}
