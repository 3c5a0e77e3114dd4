//! Extracting the ordered student answers from raw form fields.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::ScoringError;

pub const ANSWER_FIELD_PREFIX: &str = "answer_";

/// Parse an answer field name.
///
/// `Ok(None)` for unrelated fields, `Ok(Some(i))` for `answer_<digits>`, and
/// `MalformedFieldName` when the prefix is there but the suffix is not an index.
/// Only the canonical spelling is an index: `answer_01` and `answer_00` are malformed.
pub fn answer_index(field: &str) -> Result<Option<usize>, ScoringError> {
  let Some(suffix) = field.strip_prefix(ANSWER_FIELD_PREFIX) else {
    return Ok(None);
  };
  let canonical = !suffix.is_empty()
    && suffix.bytes().all(|b| b.is_ascii_digit())
    && (suffix == "0" || !suffix.starts_with('0'));
  if !canonical {
    return Err(ScoringError::MalformedFieldName { field: field.to_string() });
  }
  suffix
    .parse::<usize>()
    .map(Some)
    .map_err(|_| ScoringError::MalformedFieldName { field: field.to_string() })
}

pub fn answer_field(i: usize) -> String {
  format!("{ANSWER_FIELD_PREFIX}{i}")
}

/// Ordered, trimmed answers for blanks `0..total_blanks`.
///
/// Each blank is looked up by its exact `answer_{i}` key, so the result never
/// depends on the iteration order of the raw map. The scan over the raw keys
/// only reports malformed and out-of-range fields.
pub fn collect(raw_fields: &HashMap<String, String>, total_blanks: usize) -> Vec<String> {
  for field in raw_fields.keys() {
    match answer_index(field) {
      Ok(Some(i)) if i >= total_blanks => {
        debug!(target: "scoring", %field, total_blanks, "Answer field beyond the last blank ignored");
      }
      Ok(_) => {}
      Err(e) => warn!(target: "scoring", error = %e, "Ignoring submitted field"),
    }
  }

  (0..total_blanks)
    .map(|i| raw_fields.get(&answer_field(i)).map(|v| v.trim().to_string()).unwrap_or_default())
    .collect()
}
