//! SafeZone Trainer entry point
//!
//! On the web the JS page drives `safezone_trainer::web::Trainer`. Natively
//! this runs a line-oriented terminal session against the same engine.

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::io::{self, BufRead, Write};

    use safezone_trainer::error::InputError;
    use safezone_trainer::scene::{self, Interactable};
    use safezone_trainer::sim::{Outcome, Phase, ProgressionEngine, Scenario};
    use safezone_trainer::ui::{DashboardView, HudView, StepState, cues_for, interaction_cues};

    fn print_menu() {
        println!();
        println!("CHEMICAL DISASTER - RESPONSE TRAINING");
        println!("Objectives: 1. Wear PPE  2. Identify Leak  3. Close Valve");
        println!("Choose a scenario: basic | advanced   (quit to leave)");
    }

    fn print_hud(hud: &HudView) {
        let strip: Vec<String> = hud
            .steps
            .iter()
            .map(|step| match step.state {
                StepState::Completed => format!("[x]{}", step.number),
                StepState::Current => format!("[>]{}", step.number),
                StepState::Pending => format!("[ ]{}", step.number),
            })
            .collect();
        println!();
        println!("{}   {}", hud.scenario_badge, strip.join(" - "));
        println!("{} ({})", hud.objective.label, hud.level_counter);
        println!("  {}", hud.objective.instruction);
        println!("Tap: suit | leak | v-01 | v-02   (exit to menu)");
    }

    fn print_dashboard(view: &DashboardView) {
        println!();
        println!("TRAINING COMPLETE - {}", view.heading);
        println!("Final score: {}  Grade: {}", view.score, view.grade.as_str());
        println!(
            "Total time: {}  Total attempts: {}",
            view.total_time, view.total_attempts
        );
        for level in &view.levels {
            let mark = if level.completed { "ok" } else { "--" };
            println!("  {}. {:<14} {}  {}", level.number, level.title, level.detail, mark);
        }
        println!("{}", view.feedback);
        println!("Press enter to try again");
    }

    fn print_prompt(engine: &ProgressionEngine) {
        match engine.phase() {
            Phase::Menu => print_menu(),
            Phase::Playing => {
                if let Some(progress) = engine.progress() {
                    print_hud(&HudView::from_progress(progress));
                }
            }
            Phase::Summary => {
                if let Some(score) = engine.final_score() {
                    print_dashboard(&DashboardView::from_score(score, &engine.config().scoring));
                }
            }
        }
        print!("> ");
        let _ = io::stdout().flush();
    }

    /// Handle one input line; returns false to quit
    fn handle_line(engine: &mut ProgressionEngine, line: &str) -> bool {
        let cmd = line.trim().to_lowercase();
        if cmd == "quit" {
            return false;
        }

        match engine.phase() {
            Phase::Menu => match Scenario::from_str(&cmd) {
                Some(scenario) => engine.start_session(scenario),
                None => println!("{}", InputError::UnknownScenario(cmd)),
            },
            Phase::Playing if cmd == "exit" => engine.reset(),
            Phase::Playing => {
                let target = match Interactable::parse(&cmd) {
                    Ok(target) => target,
                    Err(e) => {
                        println!("{}", e);
                        return true;
                    }
                };
                let Some(interaction) = engine
                    .progress()
                    .and_then(|progress| scene::resolve(progress, target))
                else {
                    println!("Nothing happens.");
                    return true;
                };

                let cues = interaction_cues(&interaction);
                if let Some(toast) = &cues.toast {
                    match &toast.description {
                        Some(description) => println!("{} {}", toast.title, description),
                        None => println!("{}", toast.title),
                    }
                }
                match engine.report_outcome(interaction.success, interaction.failure_reason) {
                    Ok(Outcome::Completed { score }) => log::debug!("Completed with {}", score),
                    Ok(_) => {}
                    Err(e) => println!("{}", e),
                }
            }
            Phase::Summary => engine.reset(),
        }

        for event in engine.drain_events() {
            log::debug!("{:?} -> {:?}", event, cues_for(&event).sounds);
        }
        true
    }

    pub fn run() {
        let mut engine: ProgressionEngine = ProgressionEngine::default();
        let stdin = io::stdin();

        print_prompt(&engine);
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::error!("Failed to read input: {}", e);
                    break;
                }
            };
            if !handle_line(&mut engine, &line) {
                break;
            }
            print_prompt(&engine);
        }
        println!();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("SafeZone Trainer (terminal) starting...");
    terminal::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
