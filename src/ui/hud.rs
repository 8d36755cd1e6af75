//! In-game HUD

use serde::Serialize;

use crate::sim::{LEVEL_COUNT, LevelKind, SessionProgress};

/// Static objective text for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    pub label: &'static str,
    pub instruction: &'static str,
}

impl LevelInfo {
    pub fn for_level(level: LevelKind) -> Self {
        match level {
            LevelKind::Ppe => LevelInfo {
                label: "WEAR PPE",
                instruction: "Locate and equip the PPE suit before entering the hazard area",
            },
            LevelKind::Identify => LevelInfo {
                label: "IDENTIFY LEAK",
                instruction: "Find and tap on the source of the gas leakage",
            },
            LevelKind::Valve => LevelInfo {
                label: "CLOSE VALVE",
                instruction: "Locate the correct valve and tap to close it",
            },
        }
    }
}

/// Indicator state in the level strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Current,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub level: LevelKind,
    pub number: usize,
    pub state: StepState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudView {
    /// e.g. "Basic Scenario"
    pub scenario_badge: String,
    pub steps: [StepView; LEVEL_COUNT],
    pub objective: LevelInfo,
    /// e.g. "Level 2 of 3"
    pub level_counter: String,
}

impl HudView {
    pub fn from_progress(progress: &SessionProgress) -> Self {
        let steps = LevelKind::ALL.map(|level| {
            // Completed wins over current, matching the level strip colouring
            let state = if progress.record(level).completed {
                StepState::Completed
            } else if level == progress.current_level {
                StepState::Current
            } else {
                StepState::Pending
            };
            StepView {
                level,
                number: level.number(),
                state,
            }
        });

        Self {
            scenario_badge: format!("{} Scenario", progress.scenario.title()),
            steps,
            objective: LevelInfo::for_level(progress.current_level),
            level_counter: format!(
                "Level {} of {}",
                progress.current_level.number(),
                LEVEL_COUNT
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Scenario;

    fn states(view: &HudView) -> Vec<StepState> {
        view.steps.iter().map(|s| s.state).collect()
    }

    #[test]
    fn test_fresh_session() {
        let progress = SessionProgress::new(Scenario::Basic, 0.0);
        let view = HudView::from_progress(&progress);
        assert_eq!(view.scenario_badge, "Basic Scenario");
        assert_eq!(
            states(&view),
            vec![StepState::Current, StepState::Pending, StepState::Pending]
        );
        assert_eq!(view.objective.label, "WEAR PPE");
        assert_eq!(view.level_counter, "Level 1 of 3");
    }

    #[test]
    fn test_mid_session() {
        let mut progress = SessionProgress::new(Scenario::Advanced, 0.0);
        progress.record_mut(LevelKind::Ppe).completed = true;
        progress.current_level = LevelKind::Identify;
        let view = HudView::from_progress(&progress);
        assert_eq!(view.scenario_badge, "Advanced Scenario");
        assert_eq!(
            states(&view),
            vec![StepState::Completed, StepState::Current, StepState::Pending]
        );
        assert_eq!(view.objective, LevelInfo::for_level(LevelKind::Identify));
        assert_eq!(view.level_counter, "Level 2 of 3");
    }
}
