//! Free-text parameter extraction: scans a problem statement for numbers
//! with recognizable units plus mode keywords, and produces a partial
//! parameter set that callers merge onto a complete one.

use crate::core::trajectory::{SimulationMode, SimulationParameters};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialParameters {
    pub speed_mps: Option<f64>,
    pub angle_deg: Option<f64>,
    pub height_m: Option<f64>,
    pub gravity_mps2: Option<f64>,
    pub time_step_s: Option<f64>,
    pub mode: Option<SimulationMode>,
}

impl PartialParameters {
    pub fn is_empty(&self) -> bool {
        self.speed_mps.is_none()
            && self.angle_deg.is_none()
            && self.height_m.is_none()
            && self.gravity_mps2.is_none()
            && self.time_step_s.is_none()
            && self.mode.is_none()
    }

    /// Merges this partial set onto a complete base, last writer wins per
    /// field.
    pub fn apply_to(&self, base: SimulationParameters) -> SimulationParameters {
        SimulationParameters {
            speed_mps: self.speed_mps.unwrap_or(base.speed_mps),
            angle_deg: self.angle_deg.unwrap_or(base.angle_deg),
            height_m: self.height_m.unwrap_or(base.height_m),
            gravity_mps2: self.gravity_mps2.unwrap_or(base.gravity_mps2),
            time_step_s: self.time_step_s.unwrap_or(base.time_step_s),
            mode: self.mode.unwrap_or(base.mode),
        }
    }
}

pub fn extract_parameters(text: &str) -> PartialParameters {
    let lower = text.to_lowercase();

    PartialParameters {
        speed_mps: first_number_with_unit(&lower, is_speed_unit),
        angle_deg: first_number_with_unit(&lower, is_angle_unit),
        height_m: first_number_with_unit(&lower, is_height_unit),
        gravity_mps2: None,
        time_step_s: None,
        mode: extract_mode(&lower),
    }
}

fn extract_mode(lower: &str) -> Option<SimulationMode> {
    let projectile_words = ["projectile", "launch", "throw", "angle"];
    let free_fall_words = ["drop", "fall"];

    if projectile_words.iter().any(|word| lower.contains(word)) {
        Some(SimulationMode::Projectile)
    } else if free_fall_words.iter().any(|word| lower.contains(word)) {
        Some(SimulationMode::FreeFall)
    } else {
        None
    }
}

/// Finds the first `<number> <unit>` occurrence and parses the number.
/// Numbers are plain decimals (`15`, `12.5`); the unit test receives the
/// remaining text with leading whitespace stripped.
fn first_number_with_unit(lower: &str, unit: fn(&str) -> bool) -> Option<f64> {
    let bytes = lower.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i < bytes.len() && bytes[i] == b'.' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }

        let rest = lower[i..].trim_start();
        if unit(rest) {
            if let Ok(value) = lower[start..i].parse::<f64>() {
                return Some(value);
            }
        }
    }

    None
}

fn is_speed_unit(rest: &str) -> bool {
    rest.starts_with("m/s") || rest.starts_with("meters per second") || rest.starts_with("meter/s")
}

fn is_angle_unit(rest: &str) -> bool {
    rest.starts_with("degrees") || rest.starts_with('°')
}

fn is_height_unit(rest: &str) -> bool {
    let after_unit = if let Some(stripped) = rest.strip_prefix("meters") {
        stripped
    } else if let Some(stripped) = rest.strip_prefix('m') {
        stripped
    } else {
        return false;
    };

    // Bare "m" must be a standalone unit ("2 m high"), not "m/s" or a word.
    if !after_unit.starts_with(char::is_whitespace) {
        return false;
    }

    let keyword = after_unit.trim_start();
    keyword.starts_with("high") || keyword.starts_with("height") || keyword.starts_with("tall")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::trajectory::SimulationMode;

    #[test]
    fn extracts_all_quantities_from_a_full_problem() {
        let text =
            "A ball is thrown at 15 m/s at an angle of 30 degrees from a platform 2 meters high.";
        let partial = extract_parameters(text);

        assert_eq!(partial.speed_mps, Some(15.0));
        assert_eq!(partial.angle_deg, Some(30.0));
        assert_eq!(partial.height_m, Some(2.0));
        assert_eq!(partial.mode, Some(SimulationMode::Projectile));
    }

    #[test]
    fn recognizes_a_drop_problem() {
        let partial = extract_parameters("An object is dropped from a ledge 20 m high.");

        assert_eq!(partial.speed_mps, None);
        assert_eq!(partial.angle_deg, None);
        assert_eq!(partial.height_m, Some(20.0));
        assert_eq!(partial.mode, Some(SimulationMode::FreeFall));
    }

    #[test]
    fn parses_decimal_values_and_degree_sign() {
        let partial = extract_parameters("Launched at 12.5 m/s, 37.5° above horizontal");

        assert_eq!(partial.speed_mps, Some(12.5));
        assert_eq!(partial.angle_deg, Some(37.5));
        assert_eq!(partial.mode, Some(SimulationMode::Projectile));
    }

    #[test]
    fn speed_unit_does_not_match_height_pattern() {
        let partial = extract_parameters("moving at 8 m/s near the ground");

        assert_eq!(partial.speed_mps, Some(8.0));
        assert_eq!(partial.height_m, None);
    }

    #[test]
    fn projectile_keywords_win_over_fall_keywords() {
        let partial = extract_parameters("thrown upward, then it falls back down");
        assert_eq!(partial.mode, Some(SimulationMode::Projectile));
    }

    #[test]
    fn unrelated_text_extracts_nothing() {
        assert!(extract_parameters("the quick brown fox").is_empty());
        assert!(extract_parameters("").is_empty());
    }

    #[test]
    fn merge_overwrites_only_extracted_fields() {
        let base = SimulationParameters::default();
        let partial = PartialParameters {
            speed_mps: Some(20.0),
            mode: Some(SimulationMode::FreeFall),
            ..PartialParameters::default()
        };
        let merged = partial.apply_to(base);

        assert_eq!(merged.speed_mps, 20.0);
        assert_eq!(merged.mode, SimulationMode::FreeFall);
        assert_eq!(merged.angle_deg, base.angle_deg);
        assert_eq!(merged.height_m, base.height_m);
        assert_eq!(merged.gravity_mps2, base.gravity_mps2);
        assert_eq!(merged.time_step_s, base.time_step_s);
    }

    #[test]
    fn later_merge_wins_per_field() {
        let base = SimulationParameters::default();
        let first = PartialParameters {
            height_m: Some(5.0),
            ..PartialParameters::default()
        };
        let second = PartialParameters {
            height_m: Some(8.0),
            ..PartialParameters::default()
        };

        let merged = second.apply_to(first.apply_to(base));
        assert_eq!(merged.height_m, 8.0);
    }
}
