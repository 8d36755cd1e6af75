//! Progression engine
//!
//! Owns phase, session and final score. Collaborators call in with
//! outcome reports and read back snapshots; side effects (sound, toasts)
//! are driven from the drained [`GameEvent`] queue, never from here.

use serde::{Deserialize, Serialize};

use super::scoring::score_session;
use super::state::{FinalScore, LevelKind, Phase, Scenario, SessionProgress};
use crate::config::TrainerConfig;
use crate::error::EngineError;
use crate::platform::{Clock, SystemClock};

/// State-change notifications for presentation collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    SessionStarted {
        scenario: Scenario,
    },
    AttemptFailed {
        level: LevelKind,
        attempts: u32,
        reason: Option<String>,
    },
    LevelCompleted {
        level: LevelKind,
        /// `None` when this was the last level
        next: Option<LevelKind>,
    },
    TrainingCompleted {
        score: u32,
    },
    Reset,
}

/// Result of an accepted outcome report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// Wrong action; the learner stays on the same level
    Retry { level: LevelKind },
    /// Level cleared; play continues on `next`
    Advanced { next: LevelKind },
    /// Last level cleared; final score is available
    Completed { score: u32 },
}

/// Level sequencing, attempt/time accounting and scoring
#[derive(Debug)]
pub struct ProgressionEngine<C: Clock = SystemClock> {
    phase: Phase,
    session: Option<SessionProgress>,
    final_score: Option<FinalScore>,
    /// Entry time of the current level (ms), reset only on advance
    level_start_ms: f64,
    events: Vec<GameEvent>,
    config: TrainerConfig,
    clock: C,
}

impl Default for ProgressionEngine<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> ProgressionEngine<C> {
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, TrainerConfig::default())
    }

    pub fn with_config(clock: C, config: TrainerConfig) -> Self {
        Self {
            phase: Phase::Menu,
            session: None,
            final_score: None,
            level_start_ms: 0.0,
            events: Vec::new(),
            config,
            clock,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current session snapshot (present only while playing)
    pub fn progress(&self) -> Option<&SessionProgress> {
        self.session.as_ref()
    }

    /// Final score (present only on the summary screen)
    pub fn final_score(&self) -> Option<&FinalScore> {
        self.final_score.as_ref()
    }

    pub fn scenario(&self) -> Option<Scenario> {
        self.session
            .as_ref()
            .map(|s| s.scenario)
            .or_else(|| self.final_score.as_ref().map(|f| f.scenario))
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Take all notifications queued since the last drain.
    ///
    /// The queue is unbounded; hosts drain it after each call or frame.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin (or restart) a playthrough of `scenario`
    pub fn start_session(&mut self, scenario: Scenario) {
        let now = self.clock.now_ms();
        self.session = Some(SessionProgress::new(scenario, now));
        self.final_score = None;
        self.level_start_ms = now;
        self.phase = Phase::Playing;
        self.events.push(GameEvent::SessionStarted { scenario });
        log::info!("Started {} scenario", scenario.as_str());
    }

    /// Record the learner's action on the current level
    pub fn report_outcome(
        &mut self,
        success: bool,
        failure_reason: Option<String>,
    ) -> Result<Outcome, EngineError> {
        let phase = self.phase;
        let Some(session) = self.session.as_mut().filter(|_| phase == Phase::Playing) else {
            log::warn!("Ignoring outcome report in {} phase", phase);
            return Err(EngineError::NotPlaying { phase });
        };

        let now = self.clock.now_ms();
        // Wall clock may step backwards (NTP); recorded time never shrinks
        let elapsed_secs = ((now - self.level_start_ms) / 1000.0).max(0.0);
        let level = session.current_level;

        let record = session.record_mut(level);
        record.attempts += 1;
        record.time_spent_secs += elapsed_secs;
        record.completed = success;
        record.failure_reason = if success { None } else { failure_reason };
        let attempts = record.attempts;

        log::debug!(
            "Outcome on {:?}: success={} attempts={} elapsed={:.2}s",
            level,
            success,
            attempts,
            elapsed_secs
        );

        if !success {
            // Level timer keeps running from level entry across retries
            self.events.push(GameEvent::AttemptFailed {
                level,
                attempts,
                reason: record.failure_reason.clone(),
            });
            return Ok(Outcome::Retry { level });
        }

        session.mark_flag(level);
        let next = level.next();
        self.events.push(GameEvent::LevelCompleted { level, next });

        match next {
            Some(next) => {
                session.current_level = next;
                self.level_start_ms = now;
                log::info!("Level {:?} cleared, advancing to {:?}", level, next);
                Ok(Outcome::Advanced { next })
            }
            None => Ok(self.finish_session()),
        }
    }

    /// Score the session and move to the summary screen
    fn finish_session(&mut self) -> Outcome {
        let Some(session) = self.session.take() else {
            // report_outcome only calls this with a live session
            return Outcome::Completed { score: 0 };
        };

        let final_score = score_session(
            session.scenario,
            session.levels,
            &self.config.scoring,
            &self.config.feedback,
        );
        let score = final_score.score;
        log::info!(
            "Training complete: score={} time={:.1}s attempts={}",
            score,
            final_score.total_time_secs,
            final_score.total_attempts
        );

        self.final_score = Some(final_score);
        self.phase = Phase::Summary;
        self.events.push(GameEvent::TrainingCompleted { score });
        Outcome::Completed { score }
    }

    /// Return to the menu from any phase, discarding session and score
    pub fn reset(&mut self) {
        self.phase = Phase::Menu;
        self.session = None;
        self.final_score = None;
        self.events.push(GameEvent::Reset);
        log::info!("Returned to menu");
    }
}
