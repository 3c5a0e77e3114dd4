//! Answer-scoring engine for blank-style exercises.
//!
//! Pure and stateless: content + raw fields + policy in, `ScoreResult` out.
//!
//! ```text
//! content ──> blanks::count_blanks ─┐
//!         └─> reference::resolve ───┴─> reconcile ─> total_blanks
//! fields ──> collect(total_blanks) ──> matcher ──> feedback::build
//! ```

use std::collections::HashMap;

use tracing::{info, instrument};

use crate::domain::{Content, MatchingPolicy};
use crate::error::ScoringError;

pub mod blanks;
pub mod collect;
pub mod feedback;
pub mod matcher;
pub mod reference;

pub use blanks::{count_blanks, locate, BlankLocation};
pub use feedback::ScoreResult;
pub use matcher::MatchResult;

/// Score one submission.
///
/// Content with no blanks and no answers scores 0. Content with blanks but no
/// correct answers is `MissingReferenceData`.
#[instrument(level = "debug", skip_all, fields(%policy, field_count = raw_fields.len()))]
pub fn score_submission(
  content: &Content,
  raw_fields: &HashMap<String, String>,
  policy: MatchingPolicy,
) -> Result<ScoreResult, ScoringError> {
  let blanks = count_blanks(content);
  if content.correct_answers.is_empty() {
    if blanks > 0 {
      return Err(ScoringError::MissingReferenceData { blanks });
    }
    info!(target: "scoring", "Exercise has no blanks and no answers; score is 0");
    return Ok(ScoreResult::empty());
  }

  let rec = reference::reconcile(blanks, &content.correct_answers);
  let submitted = collect::collect(raw_fields, rec.total_blanks);
  let matches = matcher::match_answers(&submitted, &content.correct_answers, policy);
  let result = feedback::build(matches, rec.total_blanks, content);

  info!(
    target: "scoring",
    correct = result.correct_count,
    total = result.total_blanks,
    score = %format!("{:.1}", result.score),
    "Submission scored"
  );
  Ok(result)
}

/// Blank layout of a piece of content, for authoring diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentDiagnostic {
  /// Blank count of each sentence; empty for text-sourced content.
  pub blanks_per_sentence: Vec<usize>,
  pub uses_sentences: bool,
  /// Blanks present in `text` that are not counted because sentences exist.
  pub ignored_text_blanks: usize,
  pub reconciliation: reference::Reconciliation,
}

impl ContentDiagnostic {
  pub fn has_reference_data(&self) -> bool {
    self.reconciliation.answer_count > 0
  }
}

pub fn diagnose(content: &Content, raw_text: Option<&str>) -> ContentDiagnostic {
  let blanks_per_sentence = content
    .sentences()
    .map(|s| s.iter().map(|t| blanks::blanks_in(t)).collect())
    .unwrap_or_default();
  let uses_sentences = content.sentences().is_some();
  let blanks = count_blanks(content);
  let ignored_text_blanks = if uses_sentences { raw_text.map(blanks::blanks_in).unwrap_or(0) } else { 0 };
  ContentDiagnostic {
    blanks_per_sentence,
    uses_sentences,
    ignored_text_blanks,
    reconciliation: reference::Reconciliation::new(blanks, content.correct_answers.len()),
  }
}
