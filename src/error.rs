//! Error types

use crate::sim::Phase;

/// Rejected engine calls. No state is changed when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// An outcome was reported while no level was being played
    #[error("outcome reported while in {phase} phase")]
    NotPlaying { phase: Phase },
}

/// Configuration loading failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid trainer config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("mid tier threshold {mid} is above best tier threshold {best}")]
    TierOrder { mid: u32, best: u32 },
}

/// Unparsable input at the CLI / browser boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("unknown scene object: {0}")]
    UnknownTarget(String),
}
