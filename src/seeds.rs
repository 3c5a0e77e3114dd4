//! Built-in exercises so the service is usable without a config bank.

use crate::domain::{Exercise, ExerciseContent, ExerciseKind, MatchingPolicy};

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_exercises(default_matching: MatchingPolicy) -> Vec<Exercise> {
  vec![
    Exercise {
      id: "seed-fruits".into(),
      title: "Le chat et la pomme".into(),
      kind: ExerciseKind::FillInBlanks,
      matching: default_matching,
      content: ExerciseContent {
        sentences: Some(strings(&["Le ___ mange une ___ rouge."])),
        words: Some(strings(&["chat", "pomme"])),
        ..Default::default()
      },
    },
    Exercise {
      id: "seed-jardin".into(),
      title: "Dans le jardin".into(),
      kind: ExerciseKind::FillInBlanks,
      matching: default_matching,
      content: ExerciseContent {
        sentences: Some(strings(&["Le ___ mange une ___ rouge dans le ___."])),
        words: Some(strings(&["chat", "pomme", "jardin"])),
        ..Default::default()
      },
    },
    Exercise {
      id: "seed-triangles".into(),
      title: "Les triangles".into(),
      kind: ExerciseKind::WordPlacement,
      matching: MatchingPolicy::Multiset,
      content: ExerciseContent {
        sentences: Some(strings(&[
          "Un triangle qui possède un angle droit et deux côtés isométriques est un triangle ___ ___.",
        ])),
        words: Some(strings(&["isocèle", "rectangle"])),
        ..Default::default()
      },
    },
    Exercise {
      id: "seed-saisons".into(),
      title: "Les saisons".into(),
      kind: ExerciseKind::WordPlacement,
      matching: default_matching,
      content: ExerciseContent {
        text: Some("En ___ il fait chaud, en ___ il neige.".into()),
        available_words: Some(strings(&["été", "hiver"])),
        ..Default::default()
      },
    },
  ]
}
