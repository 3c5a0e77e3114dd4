//! Correct-answer resolution and reconciliation with the blank count.

use tracing::warn;

use crate::domain::ExerciseContent;

/// `words` when non-empty, else `available_words`, else nothing.
pub fn resolve_correct_answers(raw: &ExerciseContent) -> Vec<String> {
  match (&raw.words, &raw.available_words) {
    (Some(words), _) if !words.is_empty() => words.clone(),
    (_, Some(available)) => available.clone(),
    _ => Vec::new(),
  }
}

/// Outcome of comparing the blanks found in the content with the answer list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reconciliation {
  pub blanks_from_content: usize,
  pub answer_count: usize,
  /// Blank count the matcher works with.
  pub total_blanks: usize,
}

impl Reconciliation {
  /// `total_blanks = max(blanks, answers)`.
  pub fn new(blanks_from_content: usize, answer_count: usize) -> Self {
    Self { blanks_from_content, answer_count, total_blanks: blanks_from_content.max(answer_count) }
  }

  pub fn is_mismatch(&self) -> bool {
    self.blanks_from_content != self.answer_count
  }
}

/// [`Reconciliation::new`] plus a warning on mismatch. A mismatch is a
/// content-quality problem and is only reported, never rejected.
pub fn reconcile(blanks_from_content: usize, correct_answers: &[String]) -> Reconciliation {
  let r = Reconciliation::new(blanks_from_content, correct_answers.len());
  if r.is_mismatch() {
    warn!(
      target: "scoring",
      blanks_from_content = r.blanks_from_content,
      answer_count = r.answer_count,
      total_blanks = r.total_blanks,
      "Blank/answer count mismatch; scoring against the larger count"
    );
  }
  r
}

/// Correct answer for a blank, empty past the end of the list.
pub fn correct_answer_at(correct: &[String], i: usize) -> &str {
  correct.get(i).map(String::as_str).unwrap_or("")
}
