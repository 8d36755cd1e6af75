//! SafeZone Trainer - chemical gas leak response training
//!
//! Core modules:
//! - `sim`: Progression engine (levels, attempts, timing, scoring)
//! - `scene`: Interactable objects and which tap counts as correct
//! - `ui`: HUD/dashboard view models and feedback cues
//! - `platform`: Browser/native platform abstraction
//! - `config`: Scoring constants and feedback text

pub mod config;
pub mod error;
pub mod platform;
pub mod scene;
pub mod sim;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{FeedbackText, ScoringRules, TrainerConfig};
pub use error::{ConfigError, EngineError, InputError};
pub use sim::{GameEvent, LevelKind, Outcome, Phase, ProgressionEngine, Scenario};

/// Scoring defaults
pub mod consts {
    /// Score before time bonus and attempt penalty
    pub const BASE_SCORE: f64 = 1000.0;
    /// Time bonus is earned for every second under this total
    pub const TIME_BUDGET_SECS: f64 = 300.0;
    pub const TIME_BONUS_PER_SEC: f64 = 2.0;
    /// Per attempt beyond one per level
    pub const ATTEMPT_PENALTY: f64 = 50.0;

    /// Feedback tier thresholds (inclusive)
    pub const BEST_TIER_MIN: u32 = 1000;
    pub const MID_TIER_MIN: u32 = 700;

    /// Letter grade cut-offs below A (A starts at the best tier)
    pub const GRADE_B_MIN: u32 = 800;
    pub const GRADE_C_MIN: u32 = 600;
}
