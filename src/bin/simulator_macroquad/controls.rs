use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use kinematics_rust::core::trajectory::SimulationMode;

use crate::constants::{PANEL_HEIGHT, PANEL_POS_X, PANEL_POS_Y, PANEL_WIDTH};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) run: bool,
    pub(crate) replay: bool,
    pub(crate) reset: bool,
    pub(crate) toggle_mode: bool,
    pub(crate) extract: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            run: self.run || other.run,
            replay: self.replay || other.replay,
            reset: self.reset || other.reset,
            toggle_mode: self.toggle_mode || other.toggle_mode,
            extract: self.extract || other.extract,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        run: is_key_pressed(KeyCode::Space),
        replay: is_key_pressed(KeyCode::Enter),
        reset: is_key_pressed(KeyCode::R),
        toggle_mode: is_key_pressed(KeyCode::M),
        extract: false,
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();

    widgets::Window::new(
        hash!(),
        vec2(PANEL_POS_X, PANEL_POS_Y),
        vec2(PANEL_WIDTH, PANEL_HEIGHT),
    )
    .label("Simulation Parameters")
    .ui(&mut *root_ui(), |ui| {
        ui.label(None, &format!("Mode: {}", state.form.mode.label()));
        if ui.button(None, "Projectile motion") {
            state.form.mode = SimulationMode::Projectile;
        }
        if ui.button(None, "Free-fall") {
            state.form.mode = SimulationMode::FreeFall;
        }
        ui.separator();

        ui.slider(
            hash!(),
            "Velocity (m/s)",
            0.0..100.0,
            &mut state.form.speed_mps,
        );
        if state.form.mode == SimulationMode::Projectile {
            ui.slider(hash!(), "Angle (deg)", 0.0..90.0, &mut state.form.angle_deg);
        }
        ui.slider(hash!(), "Height (m)", 0.0..400.0, &mut state.form.height_m);
        ui.slider(
            hash!(),
            "Gravity (m/s^2)",
            0.1..30.0,
            &mut state.form.gravity_mps2,
        );
        ui.slider(
            hash!(),
            "Time step (s)",
            0.01..0.5,
            &mut state.form.time_step_s,
        );
        ui.separator();

        if ui.button(None, "Run (Space)") {
            actions.run = true;
        }
        if ui.button(None, "Replay (Enter)") {
            actions.replay = true;
        }
        if ui.button(None, "Reset (R)") {
            actions.reset = true;
        }
        ui.separator();

        ui.label(None, "Problem text:");
        ui.input_text(hash!(), "", &mut state.form.problem_text);
        if ui.button(None, "Extract & Run") {
            actions.extract = true;
        }
    });

    actions
}
