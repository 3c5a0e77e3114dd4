//! Scoring backend for blank-style exercises (`fill_in_blanks`, `word_placement`).
//!
//! The `scoring` module is the pure engine; everything else is the service around it.

pub mod config;
pub mod domain;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod routes;
pub mod scoring;
pub mod seeds;
pub mod state;
pub mod telemetry;
pub mod util;
