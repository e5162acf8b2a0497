use std::env;

use chrono::Local;
use plotters::prelude::*;

use kinematics_rust::core::trajectory::{
    DEFAULT_TIME_STEP_S, EARTH_GRAVITY_MPS2, SimulationMode, SimulationParameters, TrajectoryResult,
    compute,
};
use kinematics_rust::core::window::padded_axis_window_f64;

const CHART_WIDTH_PX: u32 = 900;
const CHART_HEIGHT_PX: u32 = 600;

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn parse_mode(value: &str) -> Result<SimulationMode, String> {
    match value.to_lowercase().as_str() {
        "projectile" => Ok(SimulationMode::Projectile),
        "free-fall" | "freefall" | "free_fall" => Ok(SimulationMode::FreeFall),
        other => Err(format!(
            "Invalid mode: '{other}'. Expected 'projectile' or 'free-fall'."
        )),
    }
}

fn get_params_from_args(args: &[String]) -> Result<SimulationParameters, String> {
    if !(5..=7).contains(&args.len()) {
        return Err(
            "Expected <mode> <velocity_mps> <angle_deg> <height_m> [gravity_mps2] [time_step_s]."
                .to_string(),
        );
    }

    Ok(SimulationParameters {
        mode: parse_mode(&args[1])?,
        speed_mps: parse_f64(&args[2], "velocity")?,
        angle_deg: parse_f64(&args[3], "angle")?,
        height_m: parse_f64(&args[4], "height")?,
        gravity_mps2: match args.get(5) {
            Some(value) => parse_f64(value, "gravity")?,
            None => EARTH_GRAVITY_MPS2,
        },
        time_step_s: match args.get(6) {
            Some(value) => parse_f64(value, "time step")?,
            None => DEFAULT_TIME_STEP_S,
        },
    })
}

fn render_chart(
    result: &TrajectoryResult,
    mode: SimulationMode,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let (x_span, y_span) = padded_axis_window_f64(result.distance_m, result.max_height_m);

    let root = BitMapBackend::new(path, (CHART_WIDTH_PX, CHART_HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!(
        "{} | flight {:.2} s | max height {:.2} m | distance {:.2} m",
        mode.label(),
        result.time_of_flight_s,
        result.max_height_m,
        result.distance_m
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(18)
        .x_label_area_size(44)
        .y_label_area_size(54)
        .build_cartesian_2d(0.0..x_span, 0.0..y_span)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()?;

    chart.draw_series(LineSeries::new(
        result.samples.iter().map(|s| (s.x_m, s.y_m)),
        &BLUE,
    ))?;
    chart.draw_series(
        result
            .samples
            .iter()
            .map(|s| Circle::new((s.x_m, s.y_m), 3, BLUE.filled())),
    )?;

    if let Some(impact) = result.samples.last() {
        chart.draw_series(std::iter::once(Circle::new(
            (impact.x_m, impact.y_m),
            5,
            RED.filled(),
        )))?;
    }

    root.present()?;
    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!(
        "  {program} <mode> <velocity_mps> <angle_deg> <height_m> [gravity_mps2] [time_step_s]"
    );
    println!();
    println!("Writes trajectory_<timestamp>.png to the working directory,");
    println!("or set KINEMATICS_CHART_PATH to choose the output file.");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.len() == 1 || args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let params = get_params_from_args(&args)?;
    let result = compute(params);

    if result.is_degenerate() {
        return Err(format!(
            "Degenerate parameters (gravity {} m/s^2, time step {} s): nothing to plot.",
            params.gravity_mps2, params.time_step_s
        ));
    }

    let path = env::var("KINEMATICS_CHART_PATH").unwrap_or_else(|_| {
        format!("trajectory_{}.png", Local::now().format("%Y%m%d_%H%M%S"))
    });

    render_chart(&result, params.mode, &path).map_err(|e| format!("Could not render chart: {e}"))?;

    println!("Wrote {path}");
    println!("Time of flight: {:.4} s", result.time_of_flight_s);
    println!("Maximum height: {:.4} m", result.max_height_m);
    println!("Horizontal distance: {:.4} m", result.distance_m);

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --bin plot_trajectory --");
        std::process::exit(1);
    }
}
