//! Loading service configuration (matching default + optional exercise bank) from TOML.
//!
//! Example:
//! ```toml
//! default_matching = "positional"
//! shuffle_word_bank = true
//!
//! [[exercises]]
//! id = "triangle"
//! title = "Triangles"
//! kind = "word_placement"
//! matching = "multiset"
//! [exercises.content]
//! sentences = ["Un triangle ___ ___."]
//! words = ["isocèle", "rectangle"]
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{ExerciseContent, ExerciseKind, MatchingPolicy};

pub const CONFIG_PATH_ENV: &str = "SCORING_CONFIG_PATH";

#[derive(Clone, Debug, Deserialize)]
pub struct ServiceConfig {
  /// Policy for exercises that do not set `matching` themselves.
  #[serde(default)]
  pub default_matching: MatchingPolicy,
  /// Shuffle the word bank shown for word-placement exercises.
  #[serde(default = "default_true")]
  pub shuffle_word_bank: bool,
  #[serde(default)]
  pub exercises: Vec<ExerciseCfg>,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self { default_matching: MatchingPolicy::default(), shuffle_word_bank: true, exercises: Vec::new() }
  }
}

fn default_true() -> bool { true }

/// Exercise entry accepted in the TOML bank.
#[derive(Clone, Debug, Deserialize)]
pub struct ExerciseCfg {
  #[serde(default)] pub id: Option<String>,
  #[serde(default)] pub title: Option<String>,
  pub kind: ExerciseKind,
  #[serde(default)] pub matching: Option<MatchingPolicy>,
  #[serde(default)] pub content: ExerciseContent,
}

/// Load a config file. IO and parse errors are logged and yield `None`.
pub fn load_config_from_path(path: &Path) -> Option<ServiceConfig> {
  let shown = path.display();
  match std::fs::read_to_string(path) {
    Ok(s) => match toml::from_str::<ServiceConfig>(&s) {
      Ok(cfg) => {
        info!(target: "blankscore_backend", path = %shown, exercises = cfg.exercises.len(), default_matching = %cfg.default_matching, "Loaded service config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "blankscore_backend", path = %shown, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "blankscore_backend", path = %shown, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

/// Config from `SCORING_CONFIG_PATH`, or `None` when unset or unusable.
pub fn load_config_from_env() -> Option<ServiceConfig> {
  let path = std::env::var(CONFIG_PATH_ENV).ok()?;
  load_config_from_path(Path::new(&path))
}
