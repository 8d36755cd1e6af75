//! Training progression module
//!
//! All session logic lives here. This module must stay pure:
//! - Time comes only from the injected clock
//! - No rendering, audio or platform calls
//! - Side effects are signalled through `GameEvent`s

pub mod engine;
pub mod scoring;
pub mod state;

pub use engine::{GameEvent, Outcome, ProgressionEngine};
pub use scoring::{Grade, ScoreTier, compute_score, score_session};
pub use state::{
    FinalScore, LEVEL_COUNT, LevelKind, LevelRecord, Phase, Scenario, SessionProgress,
    initial_levels,
};
