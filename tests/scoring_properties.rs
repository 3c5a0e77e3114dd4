//! End-to-end properties of the scoring engine, driven through JSON content
//! and raw form fields the way the web layer calls it.

use std::collections::HashMap;

use blankscore_backend::domain::{Content, ExerciseContent, MatchingPolicy};
use blankscore_backend::error::ScoringError;
use blankscore_backend::protocol::ScoreOut;
use blankscore_backend::scoring::{count_blanks, score_submission, ScoreResult};

const BOTH: [MatchingPolicy; 2] = [MatchingPolicy::Positional, MatchingPolicy::Multiset];

fn content(json: &str) -> Content {
    let raw: ExerciseContent = serde_json::from_str(json).expect("valid content json");
    Content::from_raw(&raw)
}

fn answers(values: &[&str]) -> HashMap<String, String> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("answer_{i}"), v.to_string()))
        .collect()
}

fn score(c: &Content, fields: &HashMap<String, String>, policy: MatchingPolicy) -> ScoreResult {
    score_submission(c, fields, policy).expect("scorable")
}

#[test]
fn sentence_blank_count_ignores_text() {
    let with_text = content(r#"{"text": "___ ___ ___ ___", "sentences": ["Le ___ et le ___.", "La ___."], "words": ["a","b","c"]}"#);
    let without_text = content(r#"{"sentences": ["Le ___ et le ___.", "La ___."], "words": ["a","b","c"]}"#);
    assert_eq!(count_blanks(&with_text), 3);
    assert_eq!(count_blanks(&without_text), 3);

    let r = score(&with_text, &answers(&["a", "b", "c"]), MatchingPolicy::Positional);
    assert_eq!(r.total_blanks, 3);
    assert_eq!(r.score, 100.0);
}

#[test]
fn scoring_is_deterministic() {
    let c = content(r#"{"sentences": ["Le ___ mange une ___ rouge dans le ___."], "words": ["chat","pomme","jardin"]}"#);
    let fields = answers(&["chat", "poire", "Jardin"]);
    for policy in BOTH {
        assert_eq!(score(&c, &fields, policy), score(&c, &fields, policy));
    }
}

#[test]
fn multiset_accepts_reverse_order() {
    let c = content(r#"{"sentences": ["Un triangle ___ ___."], "words": ["isocèle","rectangle"]}"#);
    let forward = score(&c, &answers(&["isocèle", "rectangle"]), MatchingPolicy::Multiset);
    let reverse = score(&c, &answers(&["rectangle", "isocèle"]), MatchingPolicy::Multiset);
    assert_eq!(forward.score, 100.0);
    assert_eq!(reverse.score, 100.0);

    let positional = score(&c, &answers(&["rectangle", "isocèle"]), MatchingPolicy::Positional);
    assert_eq!(positional.score, 0.0);
}

#[test]
fn duplicate_correct_answers_count_once_each() {
    let c = content(r#"{"sentences": ["Un ___ et un ___."], "words": ["chat","chat"]}"#);
    for policy in BOTH {
        let r = score(&c, &answers(&["chat", "chat"]), policy);
        assert_eq!(r.correct_count, 2, "{policy}");
    }

    let c = content(r#"{"sentences": ["Un ___ et une ___."], "words": ["chat","souris"]}"#);
    let r = score(&c, &answers(&["chat", "chat"]), MatchingPolicy::Multiset);
    assert_eq!(r.correct_count, 1);
}

#[test]
fn partial_credit_scenario() {
    let c = content(r#"{"sentences": ["Le ___ mange une ___ rouge."], "words": ["chat","pomme"]}"#);
    for policy in BOTH {
        let r = score(&c, &answers(&["chat", "banane"]), policy);
        let out = ScoreOut::from(&r);
        assert_eq!(out.score, 50.0);
        assert_eq!(out.correct_blanks, 1);
        assert_eq!(out.total_blanks, 2);
        assert_eq!(out.details[1].status, "Attendu: pomme, Réponse: banane");
        assert_eq!(out.details[1].sentence_index, 0);
        assert_eq!(out.details[1].sentence, "Le ___ mange une ___ rouge.");
    }
}

#[test]
fn multi_blank_sentence_scenario() {
    let c = content(r#"{"sentences": ["Le ___ mange une ___ rouge dans le ___."], "words": ["chat","pomme","jardin"]}"#);
    for policy in BOTH {
        let all = score(&c, &answers(&["chat", "pomme", "jardin"]), policy);
        assert_eq!(all.score, 100.0);

        let one_wrong = score(&c, &answers(&["chat", "pomme", "garage"]), policy);
        assert!((one_wrong.score - 66.7).abs() < 0.05, "{}", one_wrong.score);
        assert!(one_wrong.details.iter().all(|d| d.sentence_index == Some(0)));
    }
}

#[test]
fn mismatch_uses_larger_count() {
    let c = content(r#"{"sentences": ["Le ___ dort."], "words": ["chat","chien"]}"#);
    for policy in BOTH {
        let mut fields = HashMap::new();
        fields.insert("answer_0".to_string(), "chat".to_string());
        let r = score(&c, &fields, policy);
        assert_eq!(r.total_blanks, 2);
        assert_eq!(r.score, 50.0);
        // The extra blank has no sentence of its own.
        assert_eq!(r.details[1].sentence_index, None);
    }
}

#[test]
fn more_blanks_than_words_pads_with_unanswerable_blanks() {
    let c = content(r#"{"text": "___ ___ ___", "available_words": ["un"]}"#);
    let r = score(&c, &answers(&["un", "", ""]), MatchingPolicy::Positional);
    assert_eq!(r.total_blanks, 3);
    assert_eq!(r.correct_count, 1);
    assert_eq!(r.details[2].correct_answer, "");
    assert!(!r.details[2].is_correct);
}

#[test]
fn zero_blank_scenario() {
    let c = content(r#"{"text": "Pas de trous ici."}"#);
    for policy in BOTH {
        let r = score(&c, &answers(&["n'importe"]), policy);
        assert_eq!(r.score, 0.0);
        assert_eq!(r.total_blanks, 0);
        assert!(r.details.is_empty());
    }

    let empty = content("{}");
    assert_eq!(score(&empty, &HashMap::new(), MatchingPolicy::Positional).score, 0.0);
}

#[test]
fn blanks_without_words_are_missing_reference_data() {
    let c = content(r#"{"sentences": ["Le ___ dort."], "words": []}"#);
    for policy in BOTH {
        let err = score_submission(&c, &answers(&["chat"]), policy).unwrap_err();
        assert_eq!(err, ScoringError::MissingReferenceData { blanks: 1 });
        assert!(err.to_string().contains("no correct answer found"));
    }
}

#[test]
fn every_answer_is_processed_regardless_of_field_order() {
    let c = content(r#"{"sentences": ["___ ___ ___ ___"], "words": ["a","b","c","d"]}"#);
    let mut fields = HashMap::new();
    for (k, v) in [("answer_3", "d"), ("answer_1", "b"), ("csrf_token", "x"), ("answer_2", "c"), ("answer_0", "a"), ("answer_zz", "a")] {
        fields.insert(k.to_string(), v.to_string());
    }
    let r = score(&c, &fields, MatchingPolicy::Positional);
    assert_eq!(r.correct_count, 4);
}

#[test]
fn leading_zero_field_names_do_not_compete_for_a_blank() {
    let c = content(r#"{"sentences": ["Le ___ mange une ___."], "words": ["chat","pomme"]}"#);
    let mut fields = answers(&["chat"]);
    fields.insert("answer_00".into(), "chien".into());
    fields.insert("answer_01".into(), "pomme".into());

    let first = score(&c, &fields, MatchingPolicy::Positional);
    for _ in 0..20 {
        assert_eq!(score(&c, &fields, MatchingPolicy::Positional), first);
    }
    assert_eq!(first.details[0].user_answer, "chat");
    assert!(first.details[0].is_correct);
    assert_eq!(first.details[1].user_answer, "");
    assert_eq!(first.correct_count, 1);
    assert_eq!(first.score, 50.0);

    let only_padded: HashMap<String, String> = [("answer_01".to_string(), "pomme".to_string())].into();
    let r = score(&c, &only_padded, MatchingPolicy::Positional);
    let submitted: Vec<&str> = r.details.iter().map(|d| d.user_answer.as_str()).collect();
    assert_eq!(submitted, vec!["", ""]);
    assert_eq!(r.score, 0.0);
}

#[test]
fn score_out_serializes_wire_field_names() {
    let c = content(r#"{"text": "Le ___.", "words": ["chat"]}"#);
    let r = score(&c, &answers(&[""]), MatchingPolicy::Positional);
    let v = serde_json::to_value(ScoreOut::from(&r)).unwrap();
    assert_eq!(v["correct_blanks"], 0);
    assert_eq!(v["total_blanks"], 1);
    assert_eq!(v["details"][0]["status"], "Attendu: chat, Réponse: Vide");
    assert_eq!(v["details"][0]["sentence_index"], -1);
    assert_eq!(v["details"][0]["sentence"], "");
}
