//! Scroll-linked value mapping.
//!
//! All positions are in CSS pixels relative to the viewport, as returned by
//! `getBoundingClientRect`.

/// Progress of an element crossing the viewport.
///
/// `0.0` when the element's top edge touches the viewport bottom, `1.0` when
/// its bottom edge leaves the viewport top. Clamped to [0, 1].
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 || !travel.is_finite() {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Progress through a tall section pinned at the viewport top.
///
/// `0.0` when the section's top reaches the viewport top, `1.0` when its
/// bottom reaches the viewport bottom. Clamped to [0, 1].
pub fn section_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = height - viewport_height;
    if travel <= 0.0 || !travel.is_finite() {
        return if top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-top / travel).clamp(0.0, 1.0)
}

/// Map `value` from `[in_min, in_max]` onto `[out_min, out_max]`, clamped.
pub fn map_range(value: f64, (in_min, in_max): (f64, f64), (out_min, out_max): (f64, f64)) -> f64 {
    let t = unit(value, in_min, in_max).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * t
}

/// Map like [`map_range`] but keep extrapolating past the input range.
pub fn map_range_unclamped(
    value: f64,
    (in_min, in_max): (f64, f64),
    (out_min, out_max): (f64, f64),
) -> f64 {
    out_min + (out_max - out_min) * unit(value, in_min, in_max)
}

fn unit(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return if value >= max { 1.0 } else { 0.0 };
    }
    (value - min) / (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress_bounds() {
        // element below the fold
        assert_eq!(scroll_progress(900.0, 400.0, 800.0), 0.0);
        // top edge touching the viewport bottom
        assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
        // bottom edge leaving the viewport top
        assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(-2000.0, 400.0, 800.0), 1.0);
        // centered
        assert_eq!(scroll_progress(200.0, 400.0, 800.0), 0.5);
    }

    #[test]
    fn test_scroll_progress_degenerate() {
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
        assert_eq!(scroll_progress(0.0, f64::NAN, 800.0), 0.0);
    }

    #[test]
    fn test_parallax_offset() {
        let offset = |p: f64| map_range(p, (0.0, 1.0), (-20.0, 20.0));
        assert_eq!(offset(0.0), -20.0);
        assert_eq!(offset(0.5), 0.0);
        assert_eq!(offset(1.0), 20.0);
        assert_eq!(offset(3.0), 20.0);
    }

    #[test]
    fn test_section_progress() {
        // 5 screens tall, 800px viewport -> 3200px of travel
        assert_eq!(section_progress(100.0, 4000.0, 800.0), 0.0);
        assert_eq!(section_progress(0.0, 4000.0, 800.0), 0.0);
        assert_eq!(section_progress(-1600.0, 4000.0, 800.0), 0.5);
        assert_eq!(section_progress(-3200.0, 4000.0, 800.0), 1.0);
        assert_eq!(section_progress(-9000.0, 4000.0, 800.0), 1.0);
        // section shorter than the viewport
        assert_eq!(section_progress(10.0, 500.0, 800.0), 0.0);
        assert_eq!(section_progress(-10.0, 500.0, 800.0), 1.0);
    }

    #[test]
    fn test_marquee_drift_is_unclamped() {
        let drift = |y: f64| map_range_unclamped(y, (0.0, 1000.0), (0.0, -10.0));
        assert_eq!(drift(0.0), 0.0);
        assert_eq!(drift(500.0), -5.0);
        assert_eq!(drift(3000.0), -30.0);
    }
}
