//! Sound and toast cues
//!
//! Maps engine events to the audio/notification side effects the host
//! should play. Synthesis itself lives in the host's Web Audio layer.

use serde::Serialize;

use crate::scene::{Interactable, Interaction};
use crate::sim::{GameEvent, LevelKind};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    /// UI tap on any object
    Click,
    /// Fabric rustle plus confirmation beep
    PpeEquip,
    /// Metallic valve turn
    ValveTurn,
    /// Rising C-E-G chime
    Success,
    /// Triple low buzz
    Failure,
    /// Start the looping gas hiss
    GasHissStart,
    /// Fade out the gas hiss
    GasHissStop,
    /// Start the 60 Hz industrial hum
    AmbientStart,
    /// Stop the industrial hum
    AmbientStop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Side effects for one event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Cues {
    pub sounds: Vec<SoundCue>,
    pub toast: Option<Toast>,
}

/// Looping sounds that should be running while `level` is current
pub fn ambient_cues(level: LevelKind) -> Vec<SoundCue> {
    match level {
        LevelKind::Ppe => vec![SoundCue::AmbientStart],
        LevelKind::Identify | LevelKind::Valve => {
            vec![SoundCue::AmbientStart, SoundCue::GasHissStart]
        }
    }
}

/// Cues for a tap that was resolved against the scene
pub fn interaction_cues(interaction: &Interaction) -> Cues {
    let mut sounds = vec![SoundCue::Click];
    let (title, description) = interaction.toast();

    if !interaction.success {
        sounds.push(SoundCue::Failure);
        return Cues {
            sounds,
            toast: Some(Toast {
                kind: ToastKind::Error,
                title: title.to_string(),
                description: description.map(str::to_string),
            }),
        };
    }

    match interaction.target {
        Interactable::PpeSuit => sounds.push(SoundCue::PpeEquip),
        Interactable::Valve(_) => {
            sounds.push(SoundCue::ValveTurn);
            sounds.push(SoundCue::GasHissStop);
        }
        Interactable::GasLeak => {}
    }
    sounds.push(SoundCue::Success);

    Cues {
        sounds,
        toast: Some(Toast {
            kind: ToastKind::Success,
            title: title.to_string(),
            description: None,
        }),
    }
}

/// Cues driven purely by engine state changes
pub fn cues_for(event: &GameEvent) -> Cues {
    match event {
        GameEvent::SessionStarted { .. } => Cues {
            sounds: ambient_cues(LevelKind::Ppe),
            toast: None,
        },
        GameEvent::LevelCompleted {
            next: Some(LevelKind::Identify),
            ..
        } => Cues {
            sounds: vec![SoundCue::GasHissStart],
            toast: None,
        },
        GameEvent::TrainingCompleted { .. } | GameEvent::Reset => Cues {
            sounds: vec![SoundCue::GasHissStop, SoundCue::AmbientStop],
            toast: None,
        },
        GameEvent::AttemptFailed { .. } | GameEvent::LevelCompleted { .. } => Cues::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ValveId;

    fn interaction(target: Interactable, success: bool) -> Interaction {
        Interaction {
            target,
            success,
            failure_reason: (!success).then(|| "Wrong valve selected".to_string()),
        }
    }

    #[test]
    fn test_failure_cues() {
        let cues = interaction_cues(&interaction(Interactable::Valve(ValveId::V02), false));
        assert_eq!(cues.sounds, vec![SoundCue::Click, SoundCue::Failure]);
        let toast = cues.toast.unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.description.as_deref(), Some("That was the wrong valve."));
    }

    #[test]
    fn test_success_cues() {
        let ppe = interaction_cues(&interaction(Interactable::PpeSuit, true));
        assert_eq!(
            ppe.sounds,
            vec![SoundCue::Click, SoundCue::PpeEquip, SoundCue::Success]
        );
        assert_eq!(ppe.toast.unwrap().title, "PPE equipped successfully!");

        let valve = interaction_cues(&interaction(Interactable::Valve(ValveId::V01), true));
        assert_eq!(
            valve.sounds,
            vec![
                SoundCue::Click,
                SoundCue::ValveTurn,
                SoundCue::GasHissStop,
                SoundCue::Success
            ]
        );
    }

    #[test]
    fn test_event_cues() {
        let started = cues_for(&GameEvent::SessionStarted {
            scenario: crate::sim::Scenario::Basic,
        });
        assert_eq!(started.sounds, vec![SoundCue::AmbientStart]);

        let to_identify = cues_for(&GameEvent::LevelCompleted {
            level: LevelKind::Ppe,
            next: Some(LevelKind::Identify),
        });
        assert_eq!(to_identify.sounds, vec![SoundCue::GasHissStart]);

        let to_valve = cues_for(&GameEvent::LevelCompleted {
            level: LevelKind::Identify,
            next: Some(LevelKind::Valve),
        });
        assert!(to_valve.sounds.is_empty());

        assert!(cues_for(&GameEvent::Reset).sounds.contains(&SoundCue::AmbientStop));
    }

    #[test]
    fn test_gas_hiss_only_after_ppe() {
        assert!(!ambient_cues(LevelKind::Ppe).contains(&SoundCue::GasHissStart));
        assert!(ambient_cues(LevelKind::Identify).contains(&SoundCue::GasHissStart));
        assert!(ambient_cues(LevelKind::Valve).contains(&SoundCue::GasHissStart));
    }
}
