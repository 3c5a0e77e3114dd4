//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Presenting an exercise (word bank shuffled for word placement)
//!   - Scoring a submission and recording the attempt
//!   - Stateless scoring of inline content
//!   - Attempt statistics and content diagnostics

use std::collections::HashMap;

use rand::seq::SliceRandom;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{Content, Exercise, ExerciseKind, MatchingPolicy};
use crate::error::{ApiError, ScoringError};
use crate::protocol::{DiagnosticOut, ExerciseOut, ExerciseSummaryOut, ScoreIn, StatsOut};
use crate::scoring::collect::answer_field;
use crate::scoring::{count_blanks, diagnose, score_submission, ScoreResult};
use crate::state::{AppState, Attempt};
use crate::util::{now_ms, trunc_for_log};

/// Form field carrying the submitting student's id, if any.
pub const STUDENT_ID_FIELD: &str = "student_id";

pub fn exercise_out(ex: &Exercise, shuffle_word_bank: bool) -> ExerciseOut {
  let content = Content::from_raw(&ex.content);
  let word_bank = match ex.kind {
    ExerciseKind::WordPlacement => {
      let mut words = content.correct_answers.clone();
      if shuffle_word_bank {
        words.shuffle(&mut rand::thread_rng());
      }
      Some(words)
    }
    ExerciseKind::FillInBlanks => None,
  };
  ExerciseOut {
    id: ex.id.clone(),
    title: ex.title.clone(),
    kind: ex.kind,
    matching: ex.matching,
    sentences: ex.content.sentences.clone(),
    text: if ex.content.sentences.is_some() { None } else { ex.content.text.clone() },
    word_bank,
    total_blanks: count_blanks(&content),
  }
}

pub fn summary_out(ex: &Exercise) -> ExerciseSummaryOut {
  ExerciseSummaryOut {
    id: ex.id.clone(),
    title: ex.title.clone(),
    kind: ex.kind,
    matching: ex.matching,
    total_blanks: count_blanks(&Content::from_raw(&ex.content)),
  }
}

pub async fn find_exercise(state: &AppState, exercise_id: &str) -> Result<Exercise, ApiError> {
  state
    .get_exercise(exercise_id)
    .await
    .ok_or_else(|| ApiError::ExerciseNotFound(exercise_id.to_string()))
}

/// Score a submission against a stored exercise and record exactly one attempt.
/// Nothing is recorded when scoring fails.
#[instrument(level = "info", skip(state, raw_fields), fields(%exercise_id, field_count = raw_fields.len()))]
pub async fn submit_answers(
  state: &AppState,
  exercise_id: &str,
  student_id: Option<String>,
  raw_fields: &HashMap<String, String>,
) -> Result<Attempt, ApiError> {
  let ex = find_exercise(state, exercise_id).await?;
  let content = Content::from_raw(&ex.content);
  let result = score_submission(&content, raw_fields, ex.matching).map_err(|e| {
    warn!(target: "scoring", %exercise_id, error = %e, "Submission not scored");
    e
  })?;

  let answers = result
    .details
    .iter()
    .map(|m| (answer_field(m.blank_index), m.user_answer.clone()))
    .collect();
  let attempt = Attempt {
    id: Uuid::new_v4(),
    exercise_id: ex.id.clone(),
    student_id,
    matching: ex.matching,
    answers,
    result,
    submitted_at_ms: now_ms(),
  };
  state.attempts.record(attempt.clone()).await;
  info!(
    target: "scoring",
    %exercise_id,
    attempt_id = %attempt.id,
    student = %trunc_for_log(attempt.student_id.as_deref().unwrap_or("-"), 64),
    score = %format!("{:.1}", attempt.result.score),
    "Attempt recorded"
  );
  Ok(attempt)
}

/// Split a raw form into the student id and the remaining fields.
pub fn split_student_id(mut form: HashMap<String, String>) -> (Option<String>, HashMap<String, String>) {
  let student_id = form
    .remove(STUDENT_ID_FIELD)
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty());
  (student_id, form)
}

/// Score inline content without touching the stores.
pub fn score_inline(body: &ScoreIn, default_matching: MatchingPolicy) -> Result<ScoreResult, ScoringError> {
  let content = Content::from_raw(&body.content);
  score_submission(&content, &body.fields, body.matching.unwrap_or(default_matching))
}

pub async fn exercise_stats(state: &AppState, exercise_id: &str) -> Result<StatsOut, ApiError> {
  let ex = find_exercise(state, exercise_id).await?;
  let stats = state.attempts.stats(&ex.id).await;
  Ok(StatsOut::new(&ex.id, &stats))
}

pub async fn exercise_diagnostic(state: &AppState, exercise_id: &str) -> Result<DiagnosticOut, ApiError> {
  let ex = find_exercise(state, exercise_id).await?;
  let content = Content::from_raw(&ex.content);
  let d = diagnose(&content, ex.content.text.as_deref());
  if d.ignored_text_blanks > 0 {
    warn!(target: "scoring", %exercise_id, ignored = d.ignored_text_blanks, "Exercise has blanks in `text` that sentences override");
  }
  Ok(DiagnosticOut::new(&ex.id, &d))
}
