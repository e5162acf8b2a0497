pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
pub const DEFAULT_TIME_STEP_S: f64 = 0.1;

// Sampling runs 10% past the analytic impact time so the emitted descent
// always reaches the ground line before the exact endpoint is appended.
pub const SAMPLING_TIME_MARGIN: f64 = 1.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationMode {
    Projectile,
    FreeFall,
}

impl SimulationMode {
    pub fn label(self) -> &'static str {
        match self {
            SimulationMode::Projectile => "projectile",
            SimulationMode::FreeFall => "free-fall",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub height_m: f64,
    pub gravity_mps2: f64,
    pub time_step_s: f64,
    pub mode: SimulationMode,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            speed_mps: 10.0,
            angle_deg: 45.0,
            height_m: 1.0,
            gravity_mps2: EARTH_GRAVITY_MPS2,
            time_step_s: DEFAULT_TIME_STEP_S,
            mode: SimulationMode::Projectile,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionSample {
    pub x_m: f64,
    pub y_m: f64,
    pub time_s: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryResult {
    pub samples: Vec<PositionSample>,
    pub max_height_m: f64,
    pub distance_m: f64,
    pub time_of_flight_s: f64,
}

impl TrajectoryResult {
    /// True when the result cannot be rendered as a trajectory: non-finite
    /// summary values or samples. Renderers check this before drawing.
    pub fn is_degenerate(&self) -> bool {
        let summary_finite = self.time_of_flight_s.is_finite()
            && self.max_height_m.is_finite()
            && self.distance_m.is_finite();
        !summary_finite
            || self
                .samples
                .iter()
                .any(|s| !(s.x_m.is_finite() && s.y_m.is_finite() && s.time_s.is_finite()))
    }
}

pub fn velocity_components(params: SimulationParameters) -> (f64, f64) {
    match params.mode {
        SimulationMode::Projectile => {
            let theta = params.angle_deg.to_radians();
            (
                params.speed_mps * theta.cos(),
                params.speed_mps * theta.sin(),
            )
        }
        // Released from rest: the supplied speed and angle do not contribute.
        SimulationMode::FreeFall => (0.0, 0.0),
    }
}

fn analytic_flight_time(params: SimulationParameters, vy0: f64) -> f64 {
    let g = params.gravity_mps2;
    let h0 = params.height_m;

    let mut flight_s = match params.mode {
        SimulationMode::Projectile => {
            // Landing time is the positive root of h0 + vy0*t - g*t^2/2 = 0.
            let a = -g / 2.0;
            let b = vy0;
            let c = h0;
            let discriminant = (b * b - 4.0 * a * c).sqrt();
            let root = (-b + discriminant) / (2.0 * a);
            if root.is_finite() && root > 0.0 {
                root
            } else {
                (2.0 * vy0 / g).abs() + (2.0 * h0 / g).sqrt()
            }
        }
        SimulationMode::FreeFall => (2.0 * h0 / g).sqrt(),
    };

    // A launch from ground level with no vertical speed still gets one
    // sampling step of airtime, keeping sample times strictly increasing.
    if !(flight_s > 0.0) {
        flight_s = params.time_step_s;
    }
    flight_s
}

fn degenerate_result(params: SimulationParameters) -> TrajectoryResult {
    TrajectoryResult {
        samples: vec![PositionSample {
            x_m: 0.0,
            y_m: params.height_m,
            time_s: 0.0,
        }],
        max_height_m: params.height_m,
        distance_m: 0.0,
        time_of_flight_s: f64::INFINITY,
    }
}

/// Computes the full trajectory for one parameter set. Total and
/// deterministic: unusable parameter combinations come back as a
/// degenerate result (see [`TrajectoryResult::is_degenerate`]), never as
/// an error or a panic.
pub fn compute(params: SimulationParameters) -> TrajectoryResult {
    // Without positive, finite gravity and time step there is no finite
    // sampling bound to run the loop against.
    let gravity_usable = params.gravity_mps2.is_finite() && params.gravity_mps2 > 0.0;
    let step_usable = params.time_step_s.is_finite() && params.time_step_s > 0.0;
    if !gravity_usable || !step_usable {
        return degenerate_result(params);
    }

    let (vx0, vy0) = velocity_components(params);
    let g = params.gravity_mps2;
    let h0 = params.height_m;

    let flight_s = analytic_flight_time(params, vy0);
    let margined_s = flight_s * SAMPLING_TIME_MARGIN;

    let mut samples = Vec::new();
    let mut max_height_m = h0;
    let mut distance_m = 0.0f64;

    let mut t = 0.0;
    while t <= margined_s {
        let x = vx0 * t;
        let y = h0 + vy0 * t - (g * t * t) / 2.0;
        if y < 0.0 {
            break;
        }
        samples.push(PositionSample {
            x_m: x,
            y_m: y,
            time_s: t,
        });
        max_height_m = max_height_m.max(y);
        distance_m = distance_m.max(x);
        t += params.time_step_s;
    }

    // Exact impact point at the unmargined analytic time. When the impact
    // lands on the sampling grid the sampled duplicate is replaced so the
    // series stays strictly increasing in time.
    let final_x = vx0 * flight_s;
    if samples.last().is_some_and(|s| s.time_s >= flight_s) {
        samples.pop();
    }
    samples.push(PositionSample {
        x_m: final_x,
        y_m: 0.0,
        time_s: flight_s,
    });
    distance_m = distance_m.max(final_x);

    TrajectoryResult {
        samples,
        max_height_m,
        distance_m,
        time_of_flight_s: flight_s,
    }
}
