//! Timed transitions: validated timing configs and the tween clock.

use super::easing::Easing;
use crate::error::MotionError;

/// Start and end value of an animated property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyRange {
    pub from: f64,
    pub to: f64,
}

impl PropertyRange {
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Linear interpolation, `t` is not clamped.
    pub fn lerp(&self, t: f64) -> f64 {
        self.from + (self.to - self.from) * t
    }
}

/// Timing of one transition: duration, start delay, curve and range.
///
/// Built through [`TransitionConfig::new`], which rejects values the
/// sampler cannot handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionConfig {
    duration_ms: f64,
    delay_ms: f64,
    easing: Easing,
    range: PropertyRange,
}

impl TransitionConfig {
    pub fn new(
        duration_ms: f64,
        delay_ms: f64,
        easing: Easing,
        range: PropertyRange,
    ) -> Result<Self, MotionError> {
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(MotionError::InvalidDuration(duration_ms));
        }
        if !delay_ms.is_finite() || delay_ms < 0.0 {
            return Err(MotionError::InvalidDelay(delay_ms));
        }
        if !range.from.is_finite() || !range.to.is_finite() {
            return Err(MotionError::InvalidRange {
                from: range.from,
                to: range.to,
            });
        }
        easing.validate()?;
        Ok(Self {
            duration_ms,
            delay_ms,
            easing,
            range,
        })
    }

    /// Unchecked constructor for the built-in presets, which are covered by
    /// tests instead.
    pub(crate) const fn from_parts(
        duration_ms: f64,
        delay_ms: f64,
        easing: Easing,
        range: PropertyRange,
    ) -> Self {
        Self {
            duration_ms,
            delay_ms,
            easing,
            range,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn range(&self) -> PropertyRange {
        self.range
    }

    /// Delay plus duration.
    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    /// Property value `elapsed_ms` after the transition was started.
    ///
    /// Holds `from` during the delay and `to` once finished.
    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        let active = elapsed_ms - self.delay_ms;
        if active <= 0.0 {
            return self.range.from;
        }
        if self.duration_ms == 0.0 || active >= self.duration_ms {
            return self.range.to;
        }
        self.range.lerp(self.easing.apply(active / self.duration_ms))
    }

    /// CSS `transition` shorthand for `property`.
    ///
    /// `extra_delay_ms` is added on top of the configured delay, which is
    /// how staggered units share one config.
    pub fn css_transition(&self, property: &str, extra_delay_ms: f64) -> String {
        format!(
            "{} {}ms {} {}ms",
            property,
            self.duration_ms,
            self.easing.css(),
            self.delay_ms + extra_delay_ms
        )
    }
}

/// Elapsed-time clock over a [`TransitionConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    config: TransitionConfig,
    elapsed_ms: f64,
}

impl Tween {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            elapsed_ms: 0.0,
        }
    }

    /// Advance by `dt_ms` (negative or non-finite steps are ignored).
    pub fn advance(&mut self, dt_ms: f64) {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.config.total_ms());
        }
    }

    pub fn value(&self) -> f64 {
        self.config.sample(self.elapsed_ms)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.config.total_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(duration: f64, delay: f64) -> TransitionConfig {
        TransitionConfig::new(duration, delay, Easing::Linear, PropertyRange::new(100.0, 0.0))
            .unwrap()
    }

    #[test]
    fn test_rejects_bad_timing() {
        let range = PropertyRange::new(0.0, 1.0);
        assert_eq!(
            TransitionConfig::new(-1.0, 0.0, Easing::Linear, range),
            Err(MotionError::InvalidDuration(-1.0))
        );
        assert_eq!(
            TransitionConfig::new(100.0, -5.0, Easing::Linear, range),
            Err(MotionError::InvalidDelay(-5.0))
        );
        assert!(TransitionConfig::new(f64::NAN, 0.0, Easing::Linear, range).is_err());
        assert!(TransitionConfig::new(f64::INFINITY, 0.0, Easing::Linear, range).is_err());
        assert!(
            TransitionConfig::new(100.0, 0.0, Easing::Linear, PropertyRange::new(f64::NAN, 1.0))
                .is_err()
        );
        assert!(
            TransitionConfig::new(100.0, 0.0, Easing::CubicBezier(2.0, 0.0, 0.0, 1.0), range)
                .is_err()
        );
    }

    #[test]
    fn test_sample_holds_during_delay() {
        let cfg = linear(800.0, 100.0);
        assert_eq!(cfg.sample(0.0), 100.0);
        assert_eq!(cfg.sample(100.0), 100.0);
        assert_eq!(cfg.sample(500.0), 50.0);
        assert_eq!(cfg.sample(900.0), 0.0);
        assert_eq!(cfg.sample(5_000.0), 0.0);
        assert_eq!(cfg.total_ms(), 900.0);
    }

    #[test]
    fn test_zero_duration_jumps_after_delay() {
        let cfg = linear(0.0, 50.0);
        assert_eq!(cfg.sample(10.0), 100.0);
        assert_eq!(cfg.sample(60.0), 0.0);
    }

    #[test]
    fn test_tween_finishes_and_clamps() {
        let mut tween = Tween::new(linear(200.0, 0.0));
        tween.advance(100.0);
        assert_eq!(tween.value(), 50.0);
        assert!(!tween.is_finished());
        tween.advance(f64::NAN);
        tween.advance(-30.0);
        assert_eq!(tween.value(), 50.0);
        tween.advance(1_000.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_css_transition() {
        let cfg = TransitionConfig::new(
            700.0,
            0.0,
            Easing::CubicBezier(0.4, 0.0, 0.2, 1.0),
            PropertyRange::new(0.0, 1.0),
        )
        .unwrap();
        assert_eq!(
            cfg.css_transition("transform", 160.0),
            "transform 700ms cubic-bezier(0.4, 0, 0.2, 1) 160ms"
        );
    }
}
