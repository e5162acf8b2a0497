use std::env;
use std::io::{self, Write};

use kinematics_rust::core::extract::extract_parameters;
use kinematics_rust::core::trajectory::{
    DEFAULT_TIME_STEP_S, EARTH_GRAVITY_MPS2, SimulationMode, SimulationParameters, compute,
};

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

fn read_line(prompt: &str) -> Result<String, String> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Could not read input: {e}"))?;

    if bytes == 0 {
        return Err("Input ended unexpectedly (EOF).".to_string());
    }
    Ok(line.trim().to_string())
}

fn read_f64(prompt: &str) -> Result<f64, String> {
    loop {
        match read_line(prompt)?.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn read_f64_or_default(prompt: &str, default: f64) -> Result<f64, String> {
    loop {
        let line = read_line(prompt)?;
        if line.is_empty() {
            return Ok(default);
        }
        match line.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number, or press Enter for {default}."),
        }
    }
}

fn get_params_from_user() -> Result<SimulationParameters, String> {
    let mode = loop {
        match parse_mode(&read_line("Mode (projectile/free-fall): ")?) {
            Ok(mode) => break mode,
            Err(err) => eprintln!("{err}"),
        }
    };

    let (speed_mps, angle_deg) = match mode {
        SimulationMode::Projectile => (
            read_f64("Velocity (m/s): ")?,
            read_f64("Angle (degrees): ")?,
        ),
        SimulationMode::FreeFall => (0.0, 0.0),
    };

    Ok(SimulationParameters {
        speed_mps,
        angle_deg,
        height_m: read_f64("Height (m): ")?,
        gravity_mps2: read_f64_or_default(
            &format!("Gravity (m/s^2) [{EARTH_GRAVITY_MPS2}]: "),
            EARTH_GRAVITY_MPS2,
        )?,
        time_step_s: read_f64_or_default(
            &format!("Time step (s) [{DEFAULT_TIME_STEP_S}]: "),
            DEFAULT_TIME_STEP_S,
        )?,
        mode,
    })
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

fn get_params_from_text(text: &str) -> Result<SimulationParameters, String> {
    let partial = extract_parameters(text);
    if partial.is_empty() {
        return Err(
            "No parameters recognized in the problem text. Try e.g. '15 m/s', '30 degrees', '2 meters high'."
                .to_string(),
        );
    }
    Ok(partial.apply_to(SimulationParameters::default()))
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program}");
    println!("  {program} <mode> <velocity_mps> <angle_deg> <height_m> [gravity_mps2] [time_step_s]");
    println!("  {program} --text \"<problem description>\"");
    println!();
    println!("Modes: projectile, free-fall");
    println!();
    println!("Examples:");
    println!("  {program} projectile 10 45 1");
    println!("  {program} free-fall 0 0 10");
    println!("  {program} --text \"A ball is thrown at 15 m/s at 30 degrees from a platform 2 meters high\"");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let params = if args.len() == 1 {
        get_params_from_user()?
    } else if args[1] == "--text" {
        let text = args
            .get(2)
            .ok_or_else(|| "Expected a problem description after --text.".to_string())?;
        let params = get_params_from_text(text)?;
        println!(
            "Interpreted as: {} | velocity {} m/s | angle {} deg | height {} m",
            params.mode.label(),
            params.speed_mps,
            params.angle_deg,
            params.height_m
        );
        params
    } else {
        get_params_from_args(&args)?
    };

    let result = compute(params);
    if result.is_degenerate() {
        return Err(format!(
            "Degenerate parameters (gravity {} m/s^2, time step {} s): no finite trajectory.",
            params.gravity_mps2, params.time_step_s
        ));
    }

    println!("\nTime of flight: {:.4} s", result.time_of_flight_s);
    println!("Maximum height: {:.4} m", result.max_height_m);
    println!("Horizontal distance: {:.4} m", result.distance_m);
    println!(
        "Samples: {} (time step {} s)",
        result.samples.len(),
        params.time_step_s
    );

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{get_params_from_args, get_params_from_text, parse_mode};
    use kinematics_rust::core::trajectory::SimulationMode;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_both_modes() {
        assert_eq!(parse_mode("projectile"), Ok(SimulationMode::Projectile));
        assert_eq!(parse_mode("Free-Fall"), Ok(SimulationMode::FreeFall));
        assert!(parse_mode("orbital").is_err());
    }

    #[test]
    fn positional_args_fill_defaults() {
        let params = get_params_from_args(&args(&["prog", "projectile", "10", "45", "1"]))
            .expect("parse should succeed");

        assert_eq!(params.speed_mps, 10.0);
        assert_eq!(params.angle_deg, 45.0);
        assert_eq!(params.height_m, 1.0);
        assert_eq!(params.gravity_mps2, 9.8);
        assert_eq!(params.time_step_s, 0.1);
    }

    #[test]
    fn positional_args_accept_gravity_and_time_step() {
        let params = get_params_from_args(&args(&[
            "prog", "free-fall", "0", "0", "10", "1.62", "0.05",
        ]))
        .expect("parse should succeed");

        assert_eq!(params.mode, SimulationMode::FreeFall);
        assert_eq!(params.gravity_mps2, 1.62);
        assert_eq!(params.time_step_s, 0.05);
    }

    #[test]
    fn rejects_wrong_arity_and_bad_numbers() {
        assert!(get_params_from_args(&args(&["prog", "projectile"])).is_err());
        assert!(get_params_from_args(&args(&["prog", "projectile", "ten", "45", "1"])).is_err());
    }

    #[test]
    fn text_input_merges_onto_demo_defaults() {
        let params = get_params_from_text("dropped from a tower 20 meters high")
            .expect("extraction should succeed");

        assert_eq!(params.mode, SimulationMode::FreeFall);
        assert_eq!(params.height_m, 20.0);
        // untouched fields keep the demo defaults
        assert_eq!(params.gravity_mps2, 9.8);
        assert_eq!(params.time_step_s, 0.1);
    }

    #[test]
    fn unrecognizable_text_is_an_error() {
        assert!(get_params_from_text("lorem ipsum dolor").is_err());
    }
}
