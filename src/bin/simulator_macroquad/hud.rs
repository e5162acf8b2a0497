use macroquad::prelude::*;

use crate::constants::{CONTROLS_Y, TITLE_Y};
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, left: f32, right: f32, screen_h: f32, font: Option<&Font>) {
    draw_header_block(state, left, right, font);
    draw_summary_block(state, left, screen_h, font);
}

fn draw_header_block(state: &AppRuntime, left: f32, right: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text(
        "KinematicsRust - Visual Simulator",
        left,
        TITLE_Y,
        30,
        header_color,
        font,
    );
    draw_ui_text(
        "Controls: panel sliders | Space run | Enter replay | R reset | M mode toggle",
        left,
        CONTROLS_Y,
        20,
        DARKGRAY,
        font,
    );

    let mode_label = format!("Mode: {}", state.form.mode.label());
    let size = measure_text(&mode_label, font, 24, 1.0);
    draw_ui_text(
        &mode_label,
        right - size.width,
        TITLE_Y + 2.0,
        24,
        DARKGRAY,
        font,
    );
}

fn draw_summary_block(state: &AppRuntime, left: f32, screen_h: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);

    draw_ui_text(
        &format!(
            "Velocity: {:.1} m/s | Angle: {:.1} deg | Height: {:.1} m | g: {:.2} m/s^2 | dt: {:.2} s",
            state.form.speed_mps,
            state.form.angle_deg,
            state.form.height_m,
            state.form.gravity_mps2,
            state.form.time_step_s
        ),
        left,
        screen_h - 76.0,
        20,
        header_color,
        font,
    );

    let results_line = match &state.result {
        Some(result) if !result.is_degenerate() => format!(
            "{}: max height {:.2} m | distance {:.2} m | time of flight {:.2} s",
            state.result_mode.label(),
            result.max_height_m,
            result.distance_m,
            result.time_of_flight_s
        ),
        Some(_) => "No finite trajectory for these parameters".to_string(),
        None => "No simulation has run yet".to_string(),
    };
    draw_ui_text(&results_line, left, screen_h - 45.0, 24, BLUE, font);

    let replay_note = match &state.replay {
        Some(replay) if !replay.is_finished() => {
            format!(" | Replay {:.0}%", replay.progress() * 100.0)
        }
        Some(_) => " | Replay done (Enter restarts)".to_string(),
        None => String::new(),
    };
    draw_ui_text(
        &format!("{}{}", state.status_line, replay_note),
        left,
        screen_h - 14.0,
        18,
        DARKGRAY,
        font,
    );
}
