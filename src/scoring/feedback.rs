//! Aggregating match results into a score with per-blank feedback.

use crate::domain::Content;
use crate::scoring::blanks::locate;
use crate::scoring::matcher::MatchResult;

/// Final outcome of one submission.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreResult {
  /// Percentage in `[0, 100]`, unrounded.
  pub score: f64,
  pub correct_count: usize,
  pub total_blanks: usize,
  pub details: Vec<MatchResult>,
}

impl ScoreResult {
  pub fn empty() -> Self {
    Self { score: 0.0, correct_count: 0, total_blanks: 0, details: Vec::new() }
  }
}

impl MatchResult {
  /// Status line shown next to the blank.
  pub fn status(&self) -> String {
    if self.is_correct {
      "Correct".to_string()
    } else {
      let answer = if self.user_answer.is_empty() { "Vide" } else { self.user_answer.as_str() };
      format!("Attendu: {}, Réponse: {}", self.correct_answer, answer)
    }
  }
}

pub fn percentage(correct: usize, total: usize) -> f64 {
  if total == 0 { 0.0 } else { correct as f64 / total as f64 * 100.0 }
}

/// Attach sentence context to each match and compute the score.
pub fn build(mut matches: Vec<MatchResult>, total_blanks: usize, content: &Content) -> ScoreResult {
  if let Some(sentences) = content.sentences() {
    for m in matches.iter_mut() {
      if let Some(loc) = locate(m.blank_index, content) {
        m.sentence_index = Some(loc.sentence_index);
        m.sentence_text = sentences.get(loc.sentence_index).cloned();
      }
    }
  }
  let correct_count = matches.iter().filter(|m| m.is_correct).count();
  ScoreResult {
    score: percentage(correct_count, total_blanks),
    correct_count,
    total_blanks,
    details: matches,
  }
}
