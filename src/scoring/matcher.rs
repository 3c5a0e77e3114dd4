//! Comparing submitted answers with correct answers.
//!
//! Two policies, chosen explicitly per exercise:
//! - positional: blank `i` only against correct answer `i`
//! - multiset: any order, each correct answer consumed at most once

use tracing::debug;

use crate::domain::MatchingPolicy;
use crate::scoring::reference::correct_answer_at;
use crate::util::normalize_answer;

/// Per-blank outcome. Sentence fields are filled in by the feedback builder.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
  pub blank_index: usize,
  pub user_answer: String,
  pub correct_answer: String,
  pub is_correct: bool,
  pub sentence_index: Option<usize>,
  pub sentence_text: Option<String>,
}

impl MatchResult {
  fn new(blank_index: usize, user_answer: &str, correct_answer: &str, is_correct: bool) -> Self {
    Self {
      blank_index,
      user_answer: user_answer.to_string(),
      correct_answer: correct_answer.to_string(),
      is_correct,
      sentence_index: None,
      sentence_text: None,
    }
  }
}

/// Trimmed, case-insensitive equality. Empty on either side never matches.
pub fn answers_equal(submitted: &str, correct: &str) -> bool {
  let s = normalize_answer(submitted);
  let c = normalize_answer(correct);
  !s.is_empty() && !c.is_empty() && s == c
}

/// One result per submitted answer, in blank order.
pub fn match_answers(submitted: &[String], correct: &[String], policy: MatchingPolicy) -> Vec<MatchResult> {
  match policy {
    MatchingPolicy::Positional => match_positional(submitted, correct),
    MatchingPolicy::Multiset => match_multiset(submitted, correct),
  }
}

fn match_positional(submitted: &[String], correct: &[String]) -> Vec<MatchResult> {
  submitted
    .iter()
    .enumerate()
    .map(|(i, user)| {
      let expected = correct_answer_at(correct, i);
      let ok = answers_equal(user, expected);
      debug!(target: "scoring", blank = i, user = %user, expected = %expected, correct = ok, "positional match");
      MatchResult::new(i, user, expected, ok)
    })
    .collect()
}

/// Hits are decided first, in blank order, each consuming one pool entry.
/// A miss then reports a correct answer still left in the pool: its own
/// positional answer when unclaimed, else the first leftover, else `""`.
fn match_multiset(submitted: &[String], correct: &[String]) -> Vec<MatchResult> {
  let mut pool: Vec<&str> = correct.iter().map(String::as_str).collect();
  let hits: Vec<Option<&str>> = submitted
    .iter()
    .enumerate()
    .map(|(i, user)| {
      let hit = pool.iter().position(|c| answers_equal(user, c))?;
      let matched = pool.remove(hit);
      debug!(target: "scoring", blank = i, user = %user, matched = %matched, remaining = pool.len(), "multiset hit");
      Some(matched)
    })
    .collect();

  submitted
    .iter()
    .zip(hits)
    .enumerate()
    .map(|(i, (user, hit))| match hit {
      Some(matched) => MatchResult::new(i, user, matched, true),
      None => {
        let own = correct_answer_at(correct, i);
        let expected = match pool.iter().position(|c| *c == own) {
          Some(at) => pool.remove(at),
          None if !pool.is_empty() => pool.remove(0),
          None => "",
        };
        debug!(target: "scoring", blank = i, user = %user, expected = %expected, "multiset miss");
        MatchResult::new(i, user, expected, false)
      }
    })
    .collect()
}
