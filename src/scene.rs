//! Interactable objects in the lab scene
//!
//! The renderer handles meshes and picking; this module decides which
//! object is live for the current level and whether tapping it is correct.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::sim::{LevelKind, Scenario, SessionProgress};

/// The two shutoff valves on the back wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValveId {
    V01,
    V02,
}

impl ValveId {
    pub fn label(&self) -> &'static str {
        match self {
            ValveId::V01 => "V-01",
            ValveId::V02 => "V-02",
        }
    }

    pub fn position(&self) -> Vec3 {
        match self {
            ValveId::V01 => Vec3::new(-2.0, 1.5, -3.8),
            ValveId::V02 => Vec3::new(2.0, 1.5, -3.8),
        }
    }

    /// The valve that isolates the leak in `scenario`
    pub fn correct_for(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Basic => ValveId::V01,
            Scenario::Advanced => ValveId::V02,
        }
    }
}

/// A tappable scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interactable {
    PpeSuit,
    GasLeak,
    Valve(ValveId),
}

impl Interactable {
    /// Level during which tapping this object counts
    pub fn active_level(&self) -> LevelKind {
        match self {
            Interactable::PpeSuit => LevelKind::Ppe,
            Interactable::GasLeak => LevelKind::Identify,
            Interactable::Valve(_) => LevelKind::Valve,
        }
    }

    /// Short object name used in failure reasons
    pub fn kind_name(&self) -> &'static str {
        match self {
            Interactable::PpeSuit => "ppe",
            Interactable::GasLeak => "gas",
            Interactable::Valve(_) => "valve",
        }
    }

    pub fn parse(s: &str) -> Result<Self, InputError> {
        match s.trim().to_lowercase().as_str() {
            "suit" | "ppe" => Ok(Interactable::PpeSuit),
            "leak" | "gas" => Ok(Interactable::GasLeak),
            "v-01" | "v01" | "v1" => Ok(Interactable::Valve(ValveId::V01)),
            "v-02" | "v02" | "v2" => Ok(Interactable::Valve(ValveId::V02)),
            other => Err(InputError::UnknownTarget(other.to_string())),
        }
    }
}

/// A valve and the tag plate drawn above it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValvePlacement {
    pub id: ValveId,
    pub label: &'static str,
    pub position: Vec3,
}

impl ValvePlacement {
    fn new(id: ValveId) -> Self {
        Self {
            id,
            label: id.label(),
            position: id.position(),
        }
    }
}

/// Object placement for a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SceneLayout {
    pub ppe_suit: Vec3,
    pub gas_leak: Vec3,
    pub valves: [ValvePlacement; 2],
    pub correct_valve: ValveId,
}

impl SceneLayout {
    pub fn for_scenario(scenario: Scenario) -> Self {
        let (ppe_suit, gas_leak) = match scenario {
            Scenario::Basic => (Vec3::new(4.0, 0.0, 2.0), Vec3::new(-2.0, 0.5, -4.0)),
            Scenario::Advanced => (Vec3::new(6.0, 0.0, 5.0), Vec3::new(2.0, 0.5, -4.0)),
        };
        Self {
            ppe_suit,
            gas_leak,
            valves: [ValvePlacement::new(ValveId::V01), ValvePlacement::new(ValveId::V02)],
            correct_valve: ValveId::correct_for(scenario),
        }
    }
}

/// Whether an object should be drawn at all
pub fn is_visible(progress: &SessionProgress, target: Interactable) -> bool {
    match target {
        Interactable::PpeSuit => !progress.ppe_equipped,
        // Leak appears once PPE is on and stays until the session ends
        Interactable::GasLeak => matches!(
            progress.current_level,
            LevelKind::Identify | LevelKind::Valve
        ),
        Interactable::Valve(_) => true,
    }
}

/// Whether tapping an object does anything right now
pub fn is_active(progress: &SessionProgress, target: Interactable) -> bool {
    is_visible(progress, target) && target.active_level() == progress.current_level
}

/// Outcome to forward to the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub target: Interactable,
    pub success: bool,
    pub failure_reason: Option<String>,
}

impl Interaction {
    /// Toast title and optional description for this interaction
    pub fn toast(&self) -> (&'static str, Option<&'static str>) {
        if !self.success {
            let description = match self.target {
                Interactable::Valve(_) => "That was the wrong valve.",
                _ => "Wrong selection.",
            };
            return ("Incorrect! Try again.", Some(description));
        }
        let title = match self.target {
            Interactable::PpeSuit => "PPE equipped successfully!",
            Interactable::GasLeak => "Gas leakage identified!",
            Interactable::Valve(_) => "Valve closed. Incident controlled!",
        };
        (title, None)
    }
}

/// Map a tap on `target` to an outcome, or `None` if the object is inert
pub fn resolve(progress: &SessionProgress, target: Interactable) -> Option<Interaction> {
    if !is_active(progress, target) {
        return None;
    }
    let success = match target {
        Interactable::Valve(id) => id == ValveId::correct_for(progress.scenario),
        Interactable::PpeSuit | Interactable::GasLeak => true,
    };
    let failure_reason = (!success).then(|| format!("Wrong {} selected", target.kind_name()));
    Some(Interaction {
        target,
        success,
        failure_reason,
    })
}
