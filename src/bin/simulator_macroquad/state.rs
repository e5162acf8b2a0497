use kinematics_rust::core::extract::extract_parameters;
use kinematics_rust::core::playback::{DEFAULT_REPLAY_WINDOW_S, Replay};
use kinematics_rust::core::trajectory::{
    SimulationMode, SimulationParameters, TrajectoryResult, compute,
};

pub(crate) struct SimulationForm {
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    pub(crate) height_m: f32,
    pub(crate) gravity_mps2: f32,
    pub(crate) time_step_s: f32,
    pub(crate) mode: SimulationMode,
    pub(crate) problem_text: String,
}

impl SimulationForm {
    pub(crate) fn new() -> Self {
        let defaults = SimulationParameters::default();
        Self {
            speed_mps: defaults.speed_mps as f32,
            angle_deg: defaults.angle_deg as f32,
            height_m: defaults.height_m as f32,
            gravity_mps2: defaults.gravity_mps2 as f32,
            time_step_s: defaults.time_step_s as f32,
            mode: defaults.mode,
            problem_text: String::new(),
        }
    }

    pub(crate) fn to_parameters(&self) -> SimulationParameters {
        SimulationParameters {
            speed_mps: self.speed_mps as f64,
            angle_deg: self.angle_deg as f64,
            height_m: self.height_m as f64,
            gravity_mps2: self.gravity_mps2 as f64,
            time_step_s: self.time_step_s as f64,
            mode: self.mode,
        }
    }

    pub(crate) fn load_parameters(&mut self, params: SimulationParameters) {
        self.speed_mps = params.speed_mps as f32;
        self.angle_deg = params.angle_deg as f32;
        self.height_m = params.height_m as f32;
        self.gravity_mps2 = params.gravity_mps2 as f32;
        self.time_step_s = params.time_step_s as f32;
        self.mode = params.mode;
    }
}

pub(crate) struct AppRuntime {
    pub(crate) form: SimulationForm,
    pub(crate) result: Option<TrajectoryResult>,
    pub(crate) result_mode: SimulationMode,
    pub(crate) replay: Option<Replay>,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        Self {
            form: SimulationForm::new(),
            result: None,
            result_mode: SimulationMode::Projectile,
            replay: None,
            status_line: "Ready".to_string(),
        }
    }

    pub(crate) fn run_simulation(&mut self) {
        let params = self.form.to_parameters();
        let result = compute(params);
        self.result_mode = params.mode;

        if result.is_degenerate() {
            self.replay = None;
            self.status_line =
                "Degenerate parameters: gravity and time step must be positive".to_string();
        } else {
            self.replay = Some(Replay::new(&result, DEFAULT_REPLAY_WINDOW_S));
            self.status_line = format!(
                "Computed {} samples ({})",
                result.samples.len(),
                params.mode.label()
            );
        }
        self.result = Some(result);
    }

    pub(crate) fn extract_from_problem_text(&mut self) {
        let partial = extract_parameters(&self.form.problem_text);
        if partial.is_empty() {
            self.status_line = "No parameters recognized in the problem text".to_string();
            return;
        }

        let merged = partial.apply_to(self.form.to_parameters());
        self.form.load_parameters(merged);
        self.run_simulation();
    }

    pub(crate) fn reset(&mut self) {
        self.result = None;
        self.replay = None;
        self.status_line = "Reset".to_string();
    }

    pub(crate) fn restart_replay(&mut self) {
        if let Some(replay) = self.replay.as_mut() {
            replay.restart();
        }
    }

    pub(crate) fn advance_replay(&mut self, frame_dt_s: f32) {
        if let Some(replay) = self.replay.as_mut() {
            replay.advance(frame_dt_s as f64);
        }
    }
}
