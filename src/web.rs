//! Browser bindings
//!
//! The JS scene/HUD layer owns rendering and audio. It drives the engine
//! through this handle and re-renders from the JSON snapshots it returns.

use wasm_bindgen::prelude::*;

use crate::config::TrainerConfig;
use crate::error::InputError;
use crate::platform::SystemClock;
use crate::scene::{self, Interactable, SceneLayout};
use crate::sim::{GameEvent, ProgressionEngine, Scenario};
use crate::ui::{Cues, DashboardView, HudView, cues_for, interaction_cues};

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(js_err)
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by a previous module instance
        return;
    }
    log::info!("SafeZone Trainer starting...");
}

/// Engine handle owned by the page controller.
///
/// Events queue up until drained, so the host must call `drain_events`
/// after every call that mutates state (or once per frame) and play the
/// returned cues.
#[wasm_bindgen]
pub struct Trainer {
    engine: ProgressionEngine<SystemClock>,
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Trainer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: ProgressionEngine::new(SystemClock),
        }
    }

    /// Build with a (partial) JSON config
    pub fn with_config(json: &str) -> Result<Trainer, JsValue> {
        let config = TrainerConfig::from_json(json).map_err(js_err)?;
        Ok(Self {
            engine: ProgressionEngine::with_config(SystemClock, config),
        })
    }

    pub fn phase(&self) -> String {
        self.engine.phase().as_str().to_string()
    }

    pub fn start_session(&mut self, scenario: &str) -> Result<(), JsValue> {
        let scenario = Scenario::from_str(scenario)
            .ok_or_else(|| js_err(InputError::UnknownScenario(scenario.to_string())))?;
        self.engine.start_session(scenario);
        Ok(())
    }

    /// Raw outcome report; returns the outcome as JSON
    pub fn report_outcome(
        &mut self,
        success: bool,
        failure_reason: Option<String>,
    ) -> Result<String, JsValue> {
        let outcome = self
            .engine
            .report_outcome(success, failure_reason)
            .map_err(js_err)?;
        to_json(&outcome)
    }

    /// Handle a tap on a named scene object.
    ///
    /// Returns the cues to play as JSON, or `null` if the object is inert.
    pub fn interact(&mut self, target: &str) -> Result<Option<String>, JsValue> {
        let target = Interactable::parse(target).map_err(js_err)?;
        let Some(progress) = self.engine.progress() else {
            return Ok(None);
        };
        let Some(interaction) = scene::resolve(progress, target) else {
            return Ok(None);
        };
        self.engine
            .report_outcome(interaction.success, interaction.failure_reason.clone())
            .map_err(js_err)?;
        to_json(&interaction_cues(&interaction)).map(Some)
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn progress_json(&self) -> Result<Option<String>, JsValue> {
        self.engine.progress().map(to_json).transpose()
    }

    pub fn hud_json(&self) -> Result<Option<String>, JsValue> {
        self.engine
            .progress()
            .map(|p| to_json(&HudView::from_progress(p)))
            .transpose()
    }

    pub fn layout_json(&self) -> Result<Option<String>, JsValue> {
        self.engine
            .scenario()
            .map(|s| to_json(&SceneLayout::for_scenario(s)))
            .transpose()
    }

    pub fn final_score_json(&self) -> Result<Option<String>, JsValue> {
        self.engine.final_score().map(to_json).transpose()
    }

    pub fn dashboard_json(&self) -> Result<Option<String>, JsValue> {
        self.engine
            .final_score()
            .map(|s| to_json(&DashboardView::from_score(s, &self.engine.config().scoring)))
            .transpose()
    }

    /// Drain queued events as `[{ "event": ..., "cues": ... }]`
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        #[derive(serde::Serialize)]
        struct Notification {
            event: GameEvent,
            cues: Cues,
        }

        let notifications: Vec<Notification> = self
            .engine
            .drain_events()
            .into_iter()
            .map(|event| {
                let cues = cues_for(&event);
                Notification { event, cues }
            })
            .collect();
        to_json(&notifications)
    }
}
