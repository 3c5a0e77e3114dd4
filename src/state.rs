//! Application state: in-memory exercise bank and attempt records.
//!
//! This module owns:
//!   - the exercise store (by id), built from the TOML bank and built-in seeds
//!   - the attempt store (one record per scored submission)
//!   - the resolved service configuration

use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::{load_config_from_env, ServiceConfig};
use crate::domain::{Exercise, ExerciseKind, MatchingPolicy};
use crate::scoring::ScoreResult;
use crate::seeds::seed_exercises;

/// Persisted outcome of one submission.
#[derive(Clone, Debug)]
pub struct Attempt {
    pub id: Uuid,
    pub exercise_id: String,
    pub student_id: Option<String>,
    pub matching: MatchingPolicy,
    /// `answer_i` -> trimmed value, for every scored blank.
    pub answers: HashMap<String, String>,
    pub result: ScoreResult,
    pub submitted_at_ms: u64,
}

/// Aggregate view over the attempts of one exercise.
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseStats {
    pub attempts: usize,
    pub average_score: f64,
    pub best_score: f64,
    pub latest_score: Option<f64>,
}

#[derive(Clone, Default)]
pub struct AttemptStore {
    inner: Arc<RwLock<Vec<Attempt>>>,
}

impl AttemptStore {
    /// Single insert under one write lock; callers only reach this after scoring succeeded.
    #[instrument(level = "debug", skip(self, attempt), fields(exercise_id = %attempt.exercise_id, id = %attempt.id))]
    pub async fn record(&self, attempt: Attempt) {
        self.inner.write().await.push(attempt);
    }

    pub async fn for_exercise(&self, exercise_id: &str) -> Vec<Attempt> {
        self.inner
            .read()
            .await
            .iter()
            .filter(|a| a.exercise_id == exercise_id)
            .cloned()
            .collect()
    }

    pub async fn stats(&self, exercise_id: &str) -> ExerciseStats {
        let attempts = self.for_exercise(exercise_id).await;
        let scores: Vec<f64> = attempts.iter().map(|a| a.result.score).collect();
        let total: f64 = scores.iter().sum();
        ExerciseStats {
            attempts: scores.len(),
            average_score: if scores.is_empty() { 0.0 } else { total / scores.len() as f64 },
            best_score: scores.iter().copied().fold(0.0, f64::max),
            latest_score: scores.last().copied(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub exercises: Arc<RwLock<HashMap<String, Exercise>>>,
    pub attempts: AttemptStore,
    pub config: ServiceConfig,
}

impl AppState {
    /// Build state from env: load config, insert the bank, then the seeds.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self::from_config(load_config_from_env())
    }

    pub fn from_config(cfg_opt: Option<ServiceConfig>) -> Self {
        let config = cfg_opt.unwrap_or_default();
        let mut id_map = HashMap::<String, Exercise>::new();

        for ec in &config.exercises {
            let id = ec.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
            let ex = Exercise {
                id: id.clone(),
                title: ec.title.clone().unwrap_or_else(|| id.clone()),
                kind: ec.kind,
                matching: ec.matching.unwrap_or(config.default_matching),
                content: ec.content.clone(),
            };
            id_map.insert(id, ex);
        }

        // Seeds never overwrite bank ids.
        for ex in seed_exercises(config.default_matching) {
            id_map.entry(ex.id.clone()).or_insert(ex);
        }

        let mut count_by_kind: HashMap<ExerciseKind, usize> = HashMap::new();
        for ex in id_map.values() {
            *count_by_kind.entry(ex.kind).or_default() += 1;
        }
        for (kind, n) in count_by_kind {
            info!(target: "blankscore_backend", ?kind, count = n, "Startup exercise inventory");
        }
        info!(target: "blankscore_backend", default_matching = %config.default_matching, "Scoring policy default");

        Self {
            exercises: Arc::new(RwLock::new(id_map)),
            attempts: AttemptStore::default(),
            config,
        }
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn get_exercise(&self, id: &str) -> Option<Exercise> {
        self.exercises.read().await.get(id).cloned()
    }

    /// All exercises, sorted by id for stable listings.
    pub async fn list_exercises(&self) -> Vec<Exercise> {
        let mut all: Vec<Exercise> = self.exercises.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExerciseCfg;
    use crate::domain::ExerciseContent;

    fn attempt(exercise_id: &str, score: f64) -> Attempt {
        Attempt {
            id: Uuid::new_v4(),
            exercise_id: exercise_id.into(),
            student_id: None,
            matching: MatchingPolicy::Positional,
            answers: HashMap::new(),
            result: ScoreResult { score, ..ScoreResult::empty() },
            submitted_at_ms: 0,
        }
    }

    #[tokio::test]
    async fn bank_entries_win_over_seeds_and_take_default_policy() {
        let cfg = ServiceConfig {
            default_matching: MatchingPolicy::Multiset,
            shuffle_word_bank: true,
            exercises: vec![ExerciseCfg {
                id: Some("seed-fruits".into()),
                title: Some("Remplacé".into()),
                kind: ExerciseKind::FillInBlanks,
                matching: None,
                content: ExerciseContent::default(),
            }],
        };
        let state = AppState::from_config(Some(cfg));
        let ex = state.get_exercise("seed-fruits").await.unwrap();
        assert_eq!(ex.title, "Remplacé");
        assert_eq!(ex.matching, MatchingPolicy::Multiset);
        assert!(state.get_exercise("seed-jardin").await.is_some());
    }

    #[tokio::test]
    async fn stats_aggregate_per_exercise() {
        let store = AttemptStore::default();
        store.record(attempt("a", 50.0)).await;
        store.record(attempt("a", 100.0)).await;
        store.record(attempt("b", 10.0)).await;

        let stats = store.stats("a").await;
        assert_eq!(stats.attempts, 2);
        assert_eq!(stats.average_score, 75.0);
        assert_eq!(stats.best_score, 100.0);
        assert_eq!(stats.latest_score, Some(100.0));

        let none = store.stats("zzz").await;
        assert_eq!(none, ExerciseStats { attempts: 0, average_score: 0.0, best_score: 0.0, latest_score: None });
    }
}
