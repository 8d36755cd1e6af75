//! Trainer configuration
//!
//! Scoring constants and feedback text. Defaults reproduce the standard
//! scoring; a host may override any subset via JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Score formula parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Starting score before bonus and penalty
    pub base_score: f64,
    /// Seconds under which the time bonus is earned
    pub time_budget_secs: f64,
    /// Bonus points per second left in the budget
    pub time_bonus_per_sec: f64,
    /// Points lost per attempt beyond one per level
    pub attempt_penalty: f64,
    /// Minimum score for the best feedback tier
    pub best_tier_min: u32,
    /// Minimum score for the mid feedback tier
    pub mid_tier_min: u32,
    /// Minimum score for a B grade; A shares `best_tier_min`
    pub grade_b_min: u32,
    /// Minimum score for a C grade
    pub grade_c_min: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base_score: BASE_SCORE,
            time_budget_secs: TIME_BUDGET_SECS,
            time_bonus_per_sec: TIME_BONUS_PER_SEC,
            attempt_penalty: ATTEMPT_PENALTY,
            best_tier_min: BEST_TIER_MIN,
            mid_tier_min: MID_TIER_MIN,
            grade_b_min: GRADE_B_MIN,
            grade_c_min: GRADE_C_MIN,
        }
    }
}

/// Feedback message for each tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackText {
    pub best: String,
    pub mid: String,
    pub needs_improvement: String,
}

impl Default for FeedbackText {
    fn default() -> Self {
        Self {
            best: "Excellent response! You handled the situation professionally.".to_string(),
            mid: "Good job! Minor improvements needed in response time.".to_string(),
            needs_improvement: "Needs improvement. Review the safety protocols and try again."
                .to_string(),
        }
    }
}

/// Complete trainer configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub scoring: ScoringRules,
    pub feedback: FeedbackText,
}

impl TrainerConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TrainerConfig = serde_json::from_str(json)?;
        if config.scoring.mid_tier_min > config.scoring.best_tier_min {
            return Err(ConfigError::TierOrder {
                mid: config.scoring.mid_tier_min,
                best: config.scoring.best_tier_min,
            });
        }
        log::info!("Loaded trainer config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrainerConfig::default();
        assert_eq!(config.scoring.base_score, 1000.0);
        assert_eq!(config.scoring.time_budget_secs, 300.0);
        assert_eq!(config.scoring.best_tier_min, 1000);
        assert_eq!(config.scoring.mid_tier_min, 700);
    }

    #[test]
    fn test_partial_json() {
        let config = TrainerConfig::from_json(r#"{"scoring":{"attempt_penalty":25.0}}"#).unwrap();
        assert_eq!(config.scoring.attempt_penalty, 25.0);
        assert_eq!(config.scoring.base_score, 1000.0);
        assert_eq!(config.feedback, FeedbackText::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(TrainerConfig::from_json("{}").unwrap(), TrainerConfig::default());
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            TrainerConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_tiers() {
        let result = TrainerConfig::from_json(r#"{"scoring":{"mid_tier_min":1200}}"#);
        assert!(matches!(result, Err(ConfigError::TierOrder { mid: 1200, best: 1000 })));
    }
}
