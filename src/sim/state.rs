//! Session and score types
//!
//! Everything the presentation layer renders from lives here. All of it is
//! serializable so the browser side can receive JSON snapshots.

use serde::{Deserialize, Serialize};

/// Number of training levels in a session
pub const LEVEL_COUNT: usize = 3;

/// Top-level application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Scenario selection
    #[default]
    Menu,
    /// A session is in progress
    Playing,
    /// All levels done, final score available
    Summary,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Playing => "playing",
            Phase::Summary => "summary",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training scenario chosen from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Basic,
    Advanced,
}

impl Scenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Basic => "basic",
            Scenario::Advanced => "advanced",
        }
    }

    /// Display name ("Basic" / "Advanced")
    pub fn title(&self) -> &'static str {
        match self {
            Scenario::Basic => "Basic",
            Scenario::Advanced => "Advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Some(Scenario::Basic),
            "advanced" | "adv" => Some(Scenario::Advanced),
            _ => None,
        }
    }
}

/// One of the three ordered training objectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelKind {
    /// Put on protective equipment
    Ppe,
    /// Find the leak source
    Identify,
    /// Close the correct valve
    Valve,
}

impl LevelKind {
    /// All levels in play order
    pub const ALL: [LevelKind; LEVEL_COUNT] = [LevelKind::Ppe, LevelKind::Identify, LevelKind::Valve];

    /// Position in the fixed level order
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            LevelKind::Ppe => 0,
            LevelKind::Identify => 1,
            LevelKind::Valve => 2,
        }
    }

    /// The level that follows this one, or `None` for the last
    pub const fn next(self) -> Option<LevelKind> {
        match self {
            LevelKind::Ppe => Some(LevelKind::Identify),
            LevelKind::Identify => Some(LevelKind::Valve),
            LevelKind::Valve => None,
        }
    }

    /// 1-based level number for display
    pub const fn number(self) -> usize {
        self.index() + 1
    }
}

/// Per-level attempt and time accounting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub level: LevelKind,
    pub completed: bool,
    pub attempts: u32,
    /// Accumulated seconds (fractional)
    pub time_spent_secs: f64,
    /// Reason shown after the last failed attempt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl LevelRecord {
    pub fn new(level: LevelKind) -> Self {
        Self {
            level,
            completed: false,
            attempts: 0,
            time_spent_secs: 0.0,
            failure_reason: None,
        }
    }
}

/// Fresh records for every level, in play order
pub fn initial_levels() -> [LevelRecord; LEVEL_COUNT] {
    LevelKind::ALL.map(LevelRecord::new)
}

/// In-progress state of a single playthrough
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionProgress {
    pub scenario: Scenario,
    pub current_level: LevelKind,
    /// One record per level, indexed by [`LevelKind::index`]
    pub levels: [LevelRecord; LEVEL_COUNT],
    /// Wall-clock session start (ms)
    pub start_timestamp_ms: f64,
    pub ppe_equipped: bool,
    pub gas_identified: bool,
    pub valve_closed: bool,
}

impl SessionProgress {
    pub fn new(scenario: Scenario, now_ms: f64) -> Self {
        Self {
            scenario,
            current_level: LevelKind::Ppe,
            levels: initial_levels(),
            start_timestamp_ms: now_ms,
            ppe_equipped: false,
            gas_identified: false,
            valve_closed: false,
        }
    }

    pub fn record(&self, level: LevelKind) -> &LevelRecord {
        &self.levels[level.index()]
    }

    pub fn record_mut(&mut self, level: LevelKind) -> &mut LevelRecord {
        &mut self.levels[level.index()]
    }

    /// Set the completion flag that mirrors `level`
    pub fn mark_flag(&mut self, level: LevelKind) {
        match level {
            LevelKind::Ppe => self.ppe_equipped = true,
            LevelKind::Identify => self.gas_identified = true,
            LevelKind::Valve => self.valve_closed = true,
        }
    }
}

/// Immutable summary produced once all levels are cleared
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalScore {
    pub scenario: Scenario,
    pub levels: [LevelRecord; LEVEL_COUNT],
    pub total_time_secs: f64,
    pub total_attempts: u32,
    pub score: u32,
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_order() {
        assert_eq!(LevelKind::Ppe.next(), Some(LevelKind::Identify));
        assert_eq!(LevelKind::Identify.next(), Some(LevelKind::Valve));
        assert_eq!(LevelKind::Valve.next(), None);
        for (i, level) in LevelKind::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }

    #[test]
    fn test_new_session_is_zeroed() {
        let session = SessionProgress::new(Scenario::Advanced, 1_000.0);
        assert_eq!(session.current_level, LevelKind::Ppe);
        assert!(!session.ppe_equipped && !session.gas_identified && !session.valve_closed);
        for (record, level) in session.levels.iter().zip(LevelKind::ALL) {
            assert_eq!(record.level, level);
            assert_eq!(record.attempts, 0);
            assert!(!record.completed);
            assert_eq!(record.time_spent_secs, 0.0);
            assert!(record.failure_reason.is_none());
        }
    }

    #[test]
    fn test_scenario_parse() {
        assert_eq!(Scenario::from_str("Basic"), Some(Scenario::Basic));
        assert_eq!(Scenario::from_str(" advanced "), Some(Scenario::Advanced));
        assert_eq!(Scenario::from_str("expert"), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&LevelRecord::new(LevelKind::Identify)).unwrap();
        assert!(json.contains("\"level\":\"identify\""));
        assert!(!json.contains("failure_reason"));
        assert_eq!(serde_json::to_string(&Phase::Summary).unwrap(), "\"summary\"");
        assert_eq!(serde_json::to_string(&Scenario::Basic).unwrap(), "\"basic\"");
    }
}
