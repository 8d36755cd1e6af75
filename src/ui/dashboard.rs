//! Post-training summary screen

use serde::Serialize;

use crate::config::ScoringRules;
use crate::sim::{FinalScore, Grade, LevelKind, LevelRecord, ScoreTier};

/// Format seconds as `m:ss` (seconds floored)
pub fn format_time(secs: f64) -> String {
    let total = secs.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Title used in the per-level breakdown
pub fn level_title(level: LevelKind) -> &'static str {
    match level {
        LevelKind::Ppe => "Wear PPE",
        LevelKind::Identify => "Identify Leak",
        LevelKind::Valve => "Close Valve",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelBreakdown {
    pub number: usize,
    pub title: &'static str,
    /// e.g. "2 attempts • 0:35"
    pub detail: String,
    pub completed: bool,
}

impl LevelBreakdown {
    fn from_record(record: &LevelRecord) -> Self {
        let plural = if record.attempts == 1 { "" } else { "s" };
        Self {
            number: record.level.number(),
            title: level_title(record.level),
            detail: format!(
                "{} attempt{} • {}",
                record.attempts,
                plural,
                format_time(record.time_spent_secs)
            ),
            completed: record.completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// e.g. "Basic Scenario Results"
    pub heading: String,
    pub score: u32,
    pub grade: Grade,
    /// Drives the score colour
    pub tier: ScoreTier,
    pub total_time: String,
    pub total_attempts: u32,
    pub levels: Vec<LevelBreakdown>,
    pub feedback: String,
}

impl DashboardView {
    pub fn from_score(score: &FinalScore, rules: &ScoringRules) -> Self {
        Self {
            heading: format!("{} Scenario Results", score.scenario.title()),
            score: score.score,
            grade: Grade::for_score(score.score, rules),
            tier: ScoreTier::for_score(score.score, rules),
            total_time: format_time(score.total_time_secs),
            total_attempts: score.total_attempts,
            levels: score.levels.iter().map(LevelBreakdown::from_record).collect(),
            feedback: score.feedback.clone(),
        }
    }
}
