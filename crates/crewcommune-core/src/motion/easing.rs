//! Easing curves.

use crate::error::MotionError;

/// Timing curve mapping linear progress to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Circular ease-out, fast start and a long soft landing.
    CircOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Build a bezier curve, rejecting x control points outside [0, 1].
    pub fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, MotionError> {
        let easing = Self::CubicBezier(x1, y1, x2, y2);
        easing.validate()?;
        Ok(easing)
    }

    pub(crate) fn validate(&self) -> Result<(), MotionError> {
        if let Self::CubicBezier(x1, y1, x2, y2) = *self {
            let in_unit = |x: f64| (0.0..=1.0).contains(&x);
            if !in_unit(x1) || !in_unit(x2) || !y1.is_finite() || !y2.is_finite() {
                return Err(MotionError::InvalidBezier { x1, x2 });
            }
        }
        Ok(())
    }

    /// Apply the curve to progress `t`. Input is clamped to [0, 1] and the
    /// endpoints are exact.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier(t, 0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => cubic_bezier(t, 0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => cubic_bezier(t, 0.42, 0.0, 0.58, 1.0),
            Self::CircOut => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }

    /// CSS `<easing-function>` equivalent, for transitions left to the
    /// browser.
    pub fn css(&self) -> String {
        match *self {
            Self::Linear => "linear".to_string(),
            Self::EaseIn => "ease-in".to_string(),
            Self::EaseOut => "ease-out".to_string(),
            Self::EaseInOut => "ease-in-out".to_string(),
            Self::CircOut => "cubic-bezier(0, 0.55, 0.45, 1)".to_string(),
            Self::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// Solve a CSS cubic bezier for `x`, returning `y`.
///
/// Newton-Raphson first, bisection when the slope flattens out.
fn cubic_bezier(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut p = x;
    for _ in 0..8 {
        let err = sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return sample(p, y1, y2);
        }
        let slope = slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = x;
    for _ in 0..32 {
        let val = sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    sample(p, y1, y2)
}

#[inline]
fn sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CircOut,
        Easing::CubicBezier(0.65, 0.0, 0.35, 1.0),
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for curve in CURVES {
            assert_eq!(curve.apply(0.0), 0.0, "{:?}", curve);
            assert_eq!(curve.apply(1.0), 1.0, "{:?}", curve);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::EaseOut.apply(-3.0), 0.0);
        assert_eq!(Easing::EaseOut.apply(7.0), 1.0);
    }

    #[test]
    fn test_symmetric_curve_hits_midpoint() {
        let wipe = Easing::CubicBezier(0.65, 0.0, 0.35, 1.0);
        assert!((wipe.apply(0.5) - 0.5).abs() < 1e-4);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_curves_are_monotonic() {
        for curve in CURVES {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = curve.apply(i as f64 / 100.0);
                assert!(v + 1e-9 >= prev, "{:?} decreased at {}", curve, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_out_leads_ease_in() {
        assert!(Easing::EaseOut.apply(0.3) > Easing::Linear.apply(0.3));
        assert!(Easing::EaseIn.apply(0.3) < Easing::Linear.apply(0.3));
        assert!(Easing::CircOut.apply(0.2) > 0.5);
    }

    #[test]
    fn test_bezier_validation() {
        assert!(Easing::bezier(0.6, -0.05, 0.01, 0.99).is_ok());
        assert_eq!(
            Easing::bezier(0.6, 0.01, -0.05, 0.95),
            Err(MotionError::InvalidBezier { x1: 0.6, x2: -0.05 })
        );
        assert!(Easing::bezier(1.2, 0.0, 0.5, 1.0).is_err());
    }

    #[test]
    fn test_css_rendering() {
        assert_eq!(Easing::Linear.css(), "linear");
        assert_eq!(
            Easing::CubicBezier(0.4, 0.0, 0.2, 1.0).css(),
            "cubic-bezier(0.4, 0, 0.2, 1)"
        );
    }
}
