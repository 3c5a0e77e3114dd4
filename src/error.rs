//! Error types for scoring and for the HTTP surface.

use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::protocol::ErrorOut;

/// Errors raised while scoring a submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
  /// The exercise has blanks but no correct answers to compare against.
  #[error("no correct answer found for an exercise with {blanks} blank(s)")]
  MissingReferenceData { blanks: usize },

  /// A field looks like an answer field but its suffix is not an index.
  /// Recovered by ignoring the field.
  #[error("malformed answer field name: {field:?}")]
  MalformedFieldName { field: String },
}

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("unknown exercise: {0}")]
  ExerciseNotFound(String),

  #[error(transparent)]
  Scoring(#[from] ScoringError),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::ExerciseNotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Scoring(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> axum::response::Response {
    (self.status(), Json(ErrorOut { error: self.to_string() })).into_response()
  }
}
