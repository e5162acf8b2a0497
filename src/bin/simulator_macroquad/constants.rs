use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 800;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 110.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 130.0;
pub const BOTTOM_MARGIN: f32 = 120.0;

pub const TITLE_Y: f32 = 42.0;
pub const CONTROLS_Y: f32 = 86.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const PANEL_POS_X: f32 = 18.0;
pub const PANEL_POS_Y: f32 = 150.0;
pub const PANEL_WIDTH: f32 = 360.0;
pub const PANEL_HEIGHT: f32 = 440.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const PATH_COLOR: Color = Color::new(0.21, 0.48, 0.96, 1.0);
