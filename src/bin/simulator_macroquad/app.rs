use macroquad::prelude::*;

use kinematics_rust::core::playback::visible_prefix;
use kinematics_rust::core::trajectory::SimulationMode;
use kinematics_rust::core::window::padded_axis_window_f32;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRID_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, PATH_COLOR, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{FrameActions, draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{
    draw_axis_tick_labels, draw_centered_message, draw_grid, draw_sample_path, draw_ui_text,
    world_to_screen,
};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "KinematicsRust Simulator".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.toggle_mode {
        state.form.mode = match state.form.mode {
            SimulationMode::Projectile => SimulationMode::FreeFall,
            SimulationMode::FreeFall => SimulationMode::Projectile,
        };
    }
    if actions.extract {
        state.extract_from_problem_text();
    }
    if actions.run {
        state.run_simulation();
    }
    if actions.replay {
        state.restart_replay();
    }
    if actions.reset {
        state.reset();
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            println!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let left = LEFT_MARGIN;
        let right = screen_w - RIGHT_MARGIN;
        let top = TOP_MARGIN;
        let bottom = screen_h - BOTTOM_MARGIN;

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        state.advance_replay(frame_dt);

        clear_background(BACKGROUND);
        draw_grid(left, right, top, bottom, GRID_COLOR);
        draw_line(left, bottom, right, bottom, 2.0, DARKGRAY);
        draw_line(left, top, left, bottom, 2.0, DARKGRAY);

        match &state.result {
            None => {
                draw_axis_tick_labels(left, right, top, bottom, 10.0, 5.0, ui_font.as_ref());
                draw_centered_message(
                    "Enter parameters and run the simulation to see results",
                    left,
                    right,
                    top,
                    bottom,
                    ui_font.as_ref(),
                );
            }
            Some(result) if result.is_degenerate() => {
                draw_axis_tick_labels(left, right, top, bottom, 10.0, 5.0, ui_font.as_ref());
                draw_centered_message(
                    "These parameters have no finite trajectory to draw",
                    left,
                    right,
                    top,
                    bottom,
                    ui_font.as_ref(),
                );
            }
            Some(result) => {
                let (world_max_x, world_max_y) = padded_axis_window_f32(
                    result.distance_m as f32,
                    result.max_height_m as f32,
                );
                draw_axis_tick_labels(
                    left,
                    right,
                    top,
                    bottom,
                    world_max_x,
                    world_max_y,
                    ui_font.as_ref(),
                );

                let visible = match &state.replay {
                    Some(replay) => visible_prefix(result, replay),
                    None => result.samples.as_slice(),
                };
                draw_sample_path(
                    visible,
                    world_max_x,
                    world_max_y,
                    left,
                    right,
                    top,
                    bottom,
                    3.0,
                    PATH_COLOR,
                );

                if let Some(current) = visible.last() {
                    let p = world_to_screen(
                        current.x_m as f32,
                        current.y_m as f32,
                        world_max_x,
                        world_max_y,
                        left,
                        right,
                        top,
                        bottom,
                    );
                    draw_circle(p.x, p.y, 7.0, RED);
                    draw_circle_lines(p.x, p.y, 7.0, 2.0, MAROON);
                    draw_ui_text(
                        &format!("Time: {:.1} s", current.time_s),
                        right - 140.0,
                        top + 24.0,
                        18,
                        DARKGRAY,
                        ui_font.as_ref(),
                    );
                }
            }
        }

        draw_hud(&state, left, right, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
