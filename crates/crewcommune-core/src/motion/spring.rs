//! Damped spring interpolation.
//!
//! Integrated with semi-implicit Euler at a fixed 1ms sub-step, which keeps
//! the stiff cursor spring stable at any frame rate.

use crate::error::MotionError;

/// Largest frame delta fed to the integrator. Longer gaps (background tab,
/// debugger pause) are truncated so the spring does not jump.
const MAX_FRAME_MS: f64 = 64.0;
const SUB_STEP_MS: f64 = 1.0;

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance below which the spring may settle.
    pub rest_delta: f64,
    /// Speed (units per second) below which the spring may settle.
    pub rest_speed: f64,
}

impl SpringConfig {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Result<Self, MotionError> {
        for (name, value) in [("stiffness", stiffness), ("damping", damping), ("mass", mass)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MotionError::InvalidSpring { name, value });
            }
        }
        Ok(Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.01,
            rest_speed: 0.01,
        })
    }
}

/// One-dimensional spring chasing a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.value).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advance by `dt_ms`. Returns the new value.
    pub fn step(&mut self, dt_ms: f64) -> f64 {
        if !dt_ms.is_finite() || dt_ms <= 0.0 || self.is_at_rest() {
            if self.is_at_rest() {
                self.value = self.target;
                self.velocity = 0.0;
            }
            return self.value;
        }

        let mut remaining = dt_ms.min(MAX_FRAME_MS);
        while remaining > 0.0 {
            let h = remaining.min(SUB_STEP_MS) / 1000.0;
            let spring_force = -self.config.stiffness * (self.value - self.target);
            let damping_force = -self.config.damping * self.velocity;
            let accel = (spring_force + damping_force) / self.config.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= SUB_STEP_MS;
        }

        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

/// Pair of springs sharing one config, for screen positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, x: f64, y: f64) -> Self {
        Self {
            x: Spring::new(config, x),
            y: Spring::new(config, y),
        }
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn step(&mut self, dt_ms: f64) -> (f64, f64) {
        (self.x.step(dt_ms), self.y.step(dt_ms))
    }

    pub fn value(&self) -> (f64, f64) {
        (self.x.value(), self.y.value())
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, total_ms: f64) {
        let mut t = 0.0;
        while t < total_ms {
            spring.step(16.0);
            t += 16.0;
        }
    }

    #[test]
    fn test_rejects_non_positive_parameters() {
        assert_eq!(
            SpringConfig::new(0.0, 10.0, 1.0),
            Err(MotionError::InvalidSpring {
                name: "stiffness",
                value: 0.0
            })
        );
        assert!(SpringConfig::new(100.0, -1.0, 1.0).is_err());
        assert!(SpringConfig::new(100.0, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn test_settles_on_target() {
        let cfg = SpringConfig::new(400.0, 30.0, 0.1).unwrap();
        let mut spring = Spring::new(cfg, 0.0);
        spring.set_target(500.0);
        run(&mut spring, 3_000.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 500.0);
    }

    #[test]
    fn test_lags_behind_target() {
        let cfg = SpringConfig::new(50.0, 10.0, 0.8).unwrap();
        let mut spring = Spring::new(cfg, 0.0);
        spring.set_target(100.0);
        spring.step(16.0);
        let v = spring.value();
        assert!(v > 0.0 && v < 100.0, "value {}", v);
    }

    #[test]
    fn test_overdamped_spring_does_not_overshoot() {
        let cfg = SpringConfig::new(200.0, 50.0, 1.0).unwrap();
        // damping ratio above 1
        assert!(cfg.damping > 2.0 * (cfg.stiffness * cfg.mass).sqrt());
        let mut spring = Spring::new(cfg, 0.0);
        spring.set_target(-300.0);
        for _ in 0..300 {
            spring.step(16.0);
            assert!(spring.value() >= -300.0 - 1e-6);
        }
    }

    #[test]
    fn test_long_frames_are_truncated() {
        let cfg = SpringConfig::new(50.0, 10.0, 0.8).unwrap();
        let mut a = Spring::new(cfg, 0.0);
        let mut b = Spring::new(cfg, 0.0);
        a.set_target(100.0);
        b.set_target(100.0);
        a.step(10_000.0);
        b.step(MAX_FRAME_MS);
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn test_ignores_non_finite_input() {
        let cfg = SpringConfig::new(50.0, 10.0, 0.8).unwrap();
        let mut spring = Spring::new(cfg, 5.0);
        spring.set_target(f64::NAN);
        assert!(spring.is_at_rest());
        assert_eq!(spring.step(f64::INFINITY), 5.0);
    }

    #[test]
    fn test_spring2_tracks_both_axes() {
        let cfg = SpringConfig::new(400.0, 30.0, 0.1).unwrap();
        let mut pos = Spring2::new(cfg, 0.0, 0.0);
        pos.set_target(120.0, -40.0);
        for _ in 0..200 {
            pos.step(16.0);
        }
        assert!(pos.is_at_rest());
        assert_eq!(pos.value(), (120.0, -40.0));
    }
}
