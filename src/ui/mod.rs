//! Presentation view models
//!
//! Plain data for the HUD, summary dashboard and feedback cues. Drawing
//! is left to the host.

pub mod cues;
pub mod dashboard;
pub mod hud;

pub use cues::{Cues, SoundCue, Toast, ToastKind, ambient_cues, cues_for, interaction_cues};
pub use dashboard::{DashboardView, LevelBreakdown, format_time};
pub use hud::{HudView, LevelInfo, StepState, StepView};
