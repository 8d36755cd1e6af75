//! Final score computation
//!
//! score = max(0, base + max(0, budget - total_time) * bonus_rate
//!                 - (total_attempts - levels) * penalty)
//!
//! The raw value is floored to an integer, so tier thresholds select the
//! same tier they would on the fractional score.

use serde::{Deserialize, Serialize};

use super::state::{FinalScore, LEVEL_COUNT, LevelRecord, Scenario};
use crate::config::{FeedbackText, ScoringRules};

/// Feedback tier selected by score thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Best,
    Mid,
    NeedsImprovement,
}

impl ScoreTier {
    pub fn for_score(score: u32, rules: &ScoringRules) -> Self {
        if score >= rules.best_tier_min {
            ScoreTier::Best
        } else if score >= rules.mid_tier_min {
            ScoreTier::Mid
        } else {
            ScoreTier::NeedsImprovement
        }
    }

    pub fn feedback<'a>(&self, text: &'a FeedbackText) -> &'a str {
        match self {
            ScoreTier::Best => &text.best,
            ScoreTier::Mid => &text.mid,
            ScoreTier::NeedsImprovement => &text.needs_improvement,
        }
    }
}

/// Letter grade shown on the summary screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    /// A always coincides with [`ScoreTier::Best`]
    pub fn for_score(score: u32, rules: &ScoringRules) -> Self {
        if score >= rules.best_tier_min {
            Grade::A
        } else if score >= rules.grade_b_min {
            Grade::B
        } else if score >= rules.grade_c_min {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

/// Score from totals alone
pub fn compute_score(total_time_secs: f64, total_attempts: u32, rules: &ScoringRules) -> u32 {
    let time_bonus = (rules.time_budget_secs - total_time_secs).max(0.0) * rules.time_bonus_per_sec;
    let extra_attempts = total_attempts as f64 - LEVEL_COUNT as f64;
    let attempt_penalty = extra_attempts * rules.attempt_penalty;
    let raw = rules.base_score + time_bonus - attempt_penalty;
    // NaN from a bad clock clamps to 0
    raw.max(0.0).floor() as u32
}

/// Build the final score record from a snapshot of the level records
pub fn score_session(
    scenario: Scenario,
    levels: [LevelRecord; LEVEL_COUNT],
    rules: &ScoringRules,
    text: &FeedbackText,
) -> FinalScore {
    let total_time_secs: f64 = levels.iter().map(|l| l.time_spent_secs).sum();
    let total_attempts: u32 = levels.iter().map(|l| l.attempts).sum();
    let score = compute_score(total_time_secs, total_attempts, rules);
    let feedback = ScoreTier::for_score(score, rules).feedback(text).to_string();

    FinalScore {
        scenario,
        levels,
        total_time_secs,
        total_attempts,
        score,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{LevelKind, initial_levels};
    use proptest::prelude::*;

    fn levels_with(attempts: [u32; 3], times: [f64; 3]) -> [LevelRecord; 3] {
        let mut levels = initial_levels();
        for (i, level) in levels.iter_mut().enumerate() {
            level.attempts = attempts[i];
            level.time_spent_secs = times[i];
            level.completed = true;
        }
        levels
    }

    #[test]
    fn test_first_try_fast_run() {
        let levels = levels_with([1, 1, 1], [20.0, 25.0, 15.0]);
        let score = score_session(
            Scenario::Basic,
            levels,
            &ScoringRules::default(),
            &FeedbackText::default(),
        );
        assert_eq!(score.total_attempts, 3);
        assert_eq!(score.total_time_secs, 60.0);
        assert_eq!(score.score, 1480);
        assert_eq!(score.feedback, FeedbackText::default().best);
        assert_eq!(score.levels[2].level, LevelKind::Valve);
    }

    #[test]
    fn test_mid_tier_boundary() {
        let levels = levels_with([3, 3, 3], [100.0, 150.0, 150.0]);
        let score = score_session(
            Scenario::Advanced,
            levels,
            &ScoringRules::default(),
            &FeedbackText::default(),
        );
        assert_eq!(score.total_attempts, 9);
        assert_eq!(score.score, 700);
        assert_eq!(score.feedback, FeedbackText::default().mid);
    }

    #[test]
    fn test_needs_improvement() {
        let rules = ScoringRules::default();
        let score = compute_score(500.0, 10, &rules);
        assert_eq!(score, 650);
        assert_eq!(ScoreTier::for_score(score, &rules), ScoreTier::NeedsImprovement);
    }

    #[test]
    fn test_score_clamped_at_zero() {
        assert_eq!(compute_score(1000.0, 40, &ScoringRules::default()), 0);
    }

    #[test]
    fn test_fractional_bonus_floors() {
        // 1000 + (300 - 299.75) * 2 = 1000.5
        assert_eq!(compute_score(299.75, 3, &ScoringRules::default()), 1000);
        // 999.5 must not be promoted to the best tier
        let rules = ScoringRules {
            attempt_penalty: 0.5,
            ..ScoringRules::default()
        };
        let score = compute_score(300.0, 4, &rules);
        assert_eq!(score, 999);
        assert_eq!(ScoreTier::for_score(score, &rules), ScoreTier::Mid);
    }

    #[test]
    fn test_grades() {
        let rules = ScoringRules::default();
        assert_eq!(Grade::for_score(1480, &rules), Grade::A);
        assert_eq!(Grade::for_score(1000, &rules), Grade::A);
        assert_eq!(Grade::for_score(999, &rules), Grade::B);
        assert_eq!(Grade::for_score(800, &rules), Grade::B);
        assert_eq!(Grade::for_score(700, &rules), Grade::C);
        assert_eq!(Grade::for_score(600, &rules), Grade::C);
        assert_eq!(Grade::for_score(599, &rules), Grade::D);
        assert_eq!(Grade::for_score(0, &rules), Grade::D);
    }

    #[test]
    fn test_grade_follows_custom_best_tier() {
        let rules = ScoringRules {
            best_tier_min: 1200,
            ..ScoringRules::default()
        };
        assert_eq!(ScoreTier::for_score(1100, &rules), ScoreTier::Mid);
        assert_eq!(Grade::for_score(1100, &rules), Grade::B);
        assert_eq!(ScoreTier::for_score(1200, &rules), ScoreTier::Best);
        assert_eq!(Grade::for_score(1200, &rules), Grade::A);
    }

    proptest! {
        #[test]
        fn prop_more_attempts_never_scores_higher(
            time in 0.0f64..1000.0,
            attempts in 3u32..50,
        ) {
            let rules = ScoringRules::default();
            prop_assert!(compute_score(time, attempts + 1, &rules) <= compute_score(time, attempts, &rules));
        }

        #[test]
        fn prop_slower_never_scores_higher(
            time in 0.0f64..1000.0,
            extra in 0.0f64..500.0,
            attempts in 3u32..50,
        ) {
            let rules = ScoringRules::default();
            prop_assert!(compute_score(time + extra, attempts, &rules) <= compute_score(time, attempts, &rules));
        }

        #[test]
        fn prop_perfect_attempts_at_least_base(time in 0.0f64..10_000.0) {
            prop_assert!(compute_score(time, 3, &ScoringRules::default()) >= 1000);
        }
    }
}
