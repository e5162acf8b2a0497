//! Replay sequencing for trajectory animation: maps elapsed wall-clock
//! time within a fixed window to a growing prefix of the sampled points.

use crate::core::trajectory::{PositionSample, TrajectoryResult};

pub const DEFAULT_REPLAY_WINDOW_S: f64 = 2.0;

#[derive(Clone, Copy, Debug)]
pub struct Replay {
    sample_count: usize,
    window_s: f64,
    elapsed_s: f64,
}

impl Replay {
    pub fn new(result: &TrajectoryResult, window_s: f64) -> Self {
        Self {
            sample_count: result.samples.len(),
            window_s,
            elapsed_s: 0.0,
        }
    }

    pub fn restart(&mut self) {
        self.elapsed_s = 0.0;
    }

    pub fn advance(&mut self, dt_s: f64) {
        if dt_s > 0.0 {
            self.elapsed_s += dt_s;
        }
    }

    /// Fraction of the replay window elapsed, clamped to [0, 1].
    pub fn progress(&self) -> f64 {
        if self.window_s > 0.0 {
            (self.elapsed_s / self.window_s).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Number of samples visible at the current progress.
    pub fn visible_count(&self) -> usize {
        let count = (self.sample_count as f64 * self.progress()).floor() as usize;
        count.min(self.sample_count)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

pub fn visible_prefix<'a>(result: &'a TrajectoryResult, replay: &Replay) -> &'a [PositionSample] {
    let count = replay.visible_count().min(result.samples.len());
    &result.samples[..count]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::trajectory::{SimulationParameters, compute};

    fn demo_result() -> TrajectoryResult {
        compute(SimulationParameters::default())
    }

    #[test]
    fn starts_with_nothing_visible() {
        let result = demo_result();
        let replay = Replay::new(&result, DEFAULT_REPLAY_WINDOW_S);

        assert_eq!(replay.visible_count(), 0);
        assert!(visible_prefix(&result, &replay).is_empty());
        assert!(!replay.is_finished());
    }

    #[test]
    fn shows_everything_once_the_window_elapses() {
        let result = demo_result();
        let mut replay = Replay::new(&result, DEFAULT_REPLAY_WINDOW_S);

        replay.advance(DEFAULT_REPLAY_WINDOW_S);
        assert!(replay.is_finished());
        assert_eq!(replay.visible_count(), result.samples.len());
        assert_eq!(visible_prefix(&result, &replay), result.samples.as_slice());
    }

    #[test]
    fn prefix_grows_monotonically() {
        let result = demo_result();
        let mut replay = Replay::new(&result, DEFAULT_REPLAY_WINDOW_S);

        let mut previous = 0;
        for _ in 0..50 {
            replay.advance(DEFAULT_REPLAY_WINDOW_S / 40.0);
            let visible = replay.visible_count();
            assert!(visible >= previous);
            previous = visible;
        }
        assert_eq!(previous, result.samples.len());
    }

    #[test]
    fn halfway_shows_about_half_the_samples() {
        let result = demo_result();
        let mut replay = Replay::new(&result, DEFAULT_REPLAY_WINDOW_S);

        replay.advance(DEFAULT_REPLAY_WINDOW_S / 2.0);
        let expected = (result.samples.len() as f64 * 0.5).floor() as usize;
        assert_eq!(replay.visible_count(), expected);
    }

    #[test]
    fn restart_rewinds_to_the_beginning() {
        let result = demo_result();
        let mut replay = Replay::new(&result, DEFAULT_REPLAY_WINDOW_S);

        replay.advance(3.0 * DEFAULT_REPLAY_WINDOW_S);
        assert!(replay.is_finished());

        replay.restart();
        assert_eq!(replay.visible_count(), 0);
        assert!(!replay.is_finished());
    }

    #[test]
    fn backwards_time_and_zero_window_are_harmless() {
        let result = demo_result();
        let mut replay = Replay::new(&result, DEFAULT_REPLAY_WINDOW_S);
        replay.advance(-1.0);
        assert_eq!(replay.visible_count(), 0);

        let instant = Replay::new(&result, 0.0);
        assert!(instant.is_finished());
        assert_eq!(instant.visible_count(), result.samples.len());
    }
}
