//! Blank counting and global-index -> sentence mapping.

use crate::domain::{BlankSource, Content, BLANK_MARKER};

/// Where a global blank index lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlankLocation {
  pub sentence_index: usize,
  pub local_index: usize,
}

/// Non-overlapping occurrences of the blank marker.
pub fn blanks_in(s: &str) -> usize {
  s.matches(BLANK_MARKER).count()
}

/// Authoritative blank count. Sentences, when present, are the only source;
/// `text` is not looked at in that case.
pub fn count_blanks(content: &Content) -> usize {
  match &content.source {
    BlankSource::Sentences(sentences) => sentences.iter().map(|s| blanks_in(s)).sum(),
    BlankSource::Text(text) => blanks_in(text),
  }
}

/// Map a global blank index to its sentence and position within it.
/// Returns `None` for text-sourced content or an index past the last blank.
pub fn locate(blank_index: usize, content: &Content) -> Option<BlankLocation> {
  let sentences = content.sentences()?;
  let mut offset = 0usize;
  for (sentence_index, sentence) in sentences.iter().enumerate() {
    let n = blanks_in(sentence);
    if blank_index < offset + n {
      return Some(BlankLocation { sentence_index, local_index: blank_index - offset });
    }
    offset += n;
  }
  None
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sentences(list: &[&str]) -> Content {
    Content {
      source: BlankSource::Sentences(list.iter().map(|s| s.to_string()).collect()),
      correct_answers: vec![],
    }
  }

  #[test]
  fn counts_across_sentences_in_order() {
    let c = sentences(&["Le ___ mange une ___.", "Pas de blanc.", "Dans le ___."]);
    assert_eq!(count_blanks(&c), 3);
  }

  #[test]
  fn text_is_counted_only_without_sentences() {
    let c = Content { source: BlankSource::Text("___ et ___ et ___".into()), correct_answers: vec![] };
    assert_eq!(count_blanks(&c), 3);
  }

  #[test]
  fn longer_underscore_runs_count_by_substring_frequency() {
    // Six underscores are two markers, four are one.
    assert_eq!(blanks_in("______"), 2);
    assert_eq!(blanks_in("____"), 1);
    assert_eq!(blanks_in("__"), 0);
  }

  #[test]
  fn locate_walks_cumulative_offsets() {
    let c = sentences(&["A ___ B ___", "rien", "C ___"]);
    assert_eq!(locate(0, &c), Some(BlankLocation { sentence_index: 0, local_index: 0 }));
    assert_eq!(locate(1, &c), Some(BlankLocation { sentence_index: 0, local_index: 1 }));
    assert_eq!(locate(2, &c), Some(BlankLocation { sentence_index: 2, local_index: 0 }));
    assert_eq!(locate(3, &c), None);
  }

  #[test]
  fn locate_is_none_for_text_source() {
    let c = Content { source: BlankSource::Text("___".into()), correct_answers: vec![] };
    assert_eq!(locate(0, &c), None);
  }

  #[test]
  fn empty_sentences_have_no_blanks() {
    let c = sentences(&[]);
    assert_eq!(count_blanks(&c), 0);
    assert_eq!(locate(0, &c), None);
  }
}
