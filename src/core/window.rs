pub const AXIS_PADDING_RATIO: f64 = 0.10; // margin past the trajectory extents

pub fn padded_axis_window_f64(raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let x_span = (raw_max_x * (1.0 + AXIS_PADDING_RATIO)).max(1.0);
    let y_span = (raw_max_y * (1.0 + AXIS_PADDING_RATIO)).max(1.0);
    (x_span, y_span)
}

pub fn padded_axis_window_f32(raw_max_x: f32, raw_max_y: f32) -> (f32, f32) {
    let ratio = 1.0 + AXIS_PADDING_RATIO as f32;
    let x_span = (raw_max_x * ratio).max(1.0);
    let y_span = (raw_max_y * ratio).max(1.0);
    (x_span, y_span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_both_axes_past_the_raw_extents() {
        let (x_span, y_span) = padded_axis_window_f64(100.0, 40.0);
        assert!((x_span - 110.0).abs() < 1e-9);
        assert!((y_span - 44.0).abs() < 1e-9);
    }

    #[test]
    fn never_collapses_below_one_meter() {
        let (x_span, y_span) = padded_axis_window_f64(0.0, 0.2);
        assert_eq!(x_span, 1.0);
        assert_eq!(y_span, 1.0);
    }

    #[test]
    fn f32_variant_agrees_with_f64() {
        let (x64, y64) = padded_axis_window_f64(37.0, 12.0);
        let (x32, y32) = padded_axis_window_f32(37.0, 12.0);
        assert!((x32 as f64 - x64).abs() < 1e-4);
        assert!((y32 as f64 - y64).abs() < 1e-4);
    }
}
