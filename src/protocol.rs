//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{ExerciseContent, ExerciseKind, MatchingPolicy};
use crate::scoring::{ContentDiagnostic, MatchResult, ScoreResult};
use crate::state::ExerciseStats;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    GetExercise {
        #[serde(rename = "exerciseId")]
        exercise_id: String,
    },
    SubmitAnswers {
        #[serde(rename = "exerciseId")]
        exercise_id: String,
        #[serde(default, rename = "studentId")]
        student_id: Option<String>,
        fields: HashMap<String, String>,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Exercise {
        exercise: ExerciseOut,
    },
    ScoreResult {
        #[serde(rename = "attemptId")]
        attempt_id: String,
        result: ScoreOut,
    },
    Error {
        message: String,
    },
}

/// Per-blank feedback record as stored and rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailOut {
    pub blank_index: usize,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub status: String,
    /// -1 when the blank is not tied to a sentence.
    pub sentence_index: i64,
    /// Empty when the blank is not tied to a sentence.
    pub sentence: String,
}

impl From<&MatchResult> for DetailOut {
    fn from(m: &MatchResult) -> Self {
        Self {
            blank_index: m.blank_index,
            user_answer: m.user_answer.clone(),
            correct_answer: m.correct_answer.clone(),
            is_correct: m.is_correct,
            status: m.status(),
            sentence_index: m.sentence_index.map(|i| i as i64).unwrap_or(-1),
            sentence: m.sentence_text.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreOut {
    pub score: f64,
    pub correct_blanks: usize,
    pub total_blanks: usize,
    pub details: Vec<DetailOut>,
}

impl From<&ScoreResult> for ScoreOut {
    fn from(r: &ScoreResult) -> Self {
        Self {
            score: r.score,
            correct_blanks: r.correct_count,
            total_blanks: r.total_blanks,
            details: r.details.iter().map(DetailOut::from).collect(),
        }
    }
}

/// Exercise as shown to a student: no correct answers beyond the word bank.
#[derive(Debug, Serialize)]
pub struct ExerciseOut {
    pub id: String,
    pub title: String,
    pub kind: ExerciseKind,
    pub matching: MatchingPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentences: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Words to place; only sent for word-placement exercises.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_bank: Option<Vec<String>>,
    pub total_blanks: usize,
}

#[derive(Debug, Serialize)]
pub struct ExerciseSummaryOut {
    pub id: String,
    pub title: String,
    pub kind: ExerciseKind,
    pub matching: MatchingPolicy,
    pub total_blanks: usize,
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Serialize)]
pub struct SubmissionOut {
    pub attempt_id: String,
    pub result: ScoreOut,
}

/// Stateless scoring request.
#[derive(Debug, Deserialize)]
pub struct ScoreIn {
    pub content: ExerciseContent,
    #[serde(default)]
    pub fields: HashMap<String, String>,
    #[serde(default)]
    pub matching: Option<MatchingPolicy>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatsOut {
    pub exercise_id: String,
    pub attempts: usize,
    pub average_score: f64,
    pub best_score: f64,
    pub latest_score: Option<f64>,
}

impl StatsOut {
    pub fn new(exercise_id: &str, s: &ExerciseStats) -> Self {
        Self {
            exercise_id: exercise_id.to_string(),
            attempts: s.attempts,
            average_score: s.average_score,
            best_score: s.best_score,
            latest_score: s.latest_score,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticOut {
    pub exercise_id: String,
    /// "sentences" or "text".
    pub blank_source: String,
    pub blanks_per_sentence: Vec<usize>,
    pub text_blanks_ignored: usize,
    pub blanks_from_content: usize,
    pub word_count: usize,
    pub total_blanks: usize,
    pub mismatch: bool,
    pub has_reference_data: bool,
}

impl DiagnosticOut {
    pub fn new(exercise_id: &str, d: &ContentDiagnostic) -> Self {
        Self {
            exercise_id: exercise_id.to_string(),
            blank_source: if d.uses_sentences { "sentences" } else { "text" }.to_string(),
            blanks_per_sentence: d.blanks_per_sentence.clone(),
            text_blanks_ignored: d.ignored_text_blanks,
            blanks_from_content: d.reconciliation.blanks_from_content,
            word_count: d.reconciliation.answer_count,
            total_blanks: d.reconciliation.total_blanks,
            mismatch: d.reconciliation.is_mismatch(),
            has_reference_data: d.has_reference_data(),
        }
    }
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
    pub error: String,
}
