//! Domain models: exercise kinds, matching policy, the content shape as stored,
//! and the normalized content the scoring engine works on.

use serde::{Deserialize, Serialize};

/// Literal marker for one blank inside a sentence or text.
pub const BLANK_MARKER: &str = "___";

/// Which blank-style exercise is this? Both kinds score the same way.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
  /// Student types each missing word.
  FillInBlanks,
  /// Student drags words from a word bank into the blanks.
  WordPlacement,
}

/// How submitted answers are aligned with the correct ones.
///
/// Chosen per exercise; never inferred from the data.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchingPolicy {
  /// Blank `i` is compared only against correct answer `i`.
  #[default]
  Positional,
  /// Answers are matched against a consumable pool of correct answers, in any order.
  Multiset,
}

impl std::fmt::Display for MatchingPolicy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MatchingPolicy::Positional => f.write_str("positional"),
      MatchingPolicy::Multiset => f.write_str("multiset"),
    }
  }
}

/// Exercise content as it arrives from storage (JSON) or the TOML bank.
/// Carries both legacy key pairs: `text`/`sentences` and `words`/`available_words`.
#[derive(Clone, Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct ExerciseContent {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sentences: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub words: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub available_words: Option<Vec<String>>,
}

/// Where blanks are counted from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlankSource {
  Sentences(Vec<String>),
  Text(String),
}

/// Normalized content: no legacy key names past this point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Content {
  pub source: BlankSource,
  pub correct_answers: Vec<String>,
}

impl Content {
  /// Sentences win over text; the two are never combined.
  pub fn from_raw(raw: &ExerciseContent) -> Self {
    let source = match (&raw.sentences, &raw.text) {
      (Some(sentences), _) => BlankSource::Sentences(sentences.clone()),
      (None, Some(text)) => BlankSource::Text(text.clone()),
      (None, None) => BlankSource::Text(String::new()),
    };
    Self {
      source,
      correct_answers: crate::scoring::reference::resolve_correct_answers(raw),
    }
  }

  pub fn sentences(&self) -> Option<&[String]> {
    match &self.source {
      BlankSource::Sentences(s) => Some(s.as_slice()),
      BlankSource::Text(_) => None,
    }
  }
}

/// A stored exercise.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
  pub id: String,
  pub title: String,
  pub kind: ExerciseKind,
  pub matching: MatchingPolicy,
  pub content: ExerciseContent,
}
