//! Timed linear animations driven by the simulation clock

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fraction of `duration` covered after `elapsed`, clamped to [0, 1]
#[inline]
fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    }
}

/// Linear move between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub from: Vec2,
    pub to: Vec2,
    pub duration: f32,
    pub elapsed: f32,
}

impl Motion {
    pub fn new(from: Vec2, to: Vec2, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn position(&self) -> Vec2 {
        self.from.lerp(self.to, progress(self.elapsed, self.duration))
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Scalar tween, used for the overlay's scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub elapsed: f32,
}

impl Tween {
    /// A tween that already sits at `value`
    pub fn fixed(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            duration: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Retarget from the current value
    pub fn retarget(&mut self, to: f32, duration: f32) {
        *self = Self::new(self.value(), to, duration);
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn value(&self) -> f32 {
        let t = progress(self.elapsed, self.duration);
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_interpolates_and_clamps() {
        let mut m = Motion::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 2.0);
        m.advance(1.0);
        assert!((m.position().x - 50.0).abs() < 1e-4);
        assert!(!m.is_finished());
        m.advance(5.0);
        assert_eq!(m.position(), Vec2::new(100.0, 0.0));
        assert!(m.is_finished());
    }

    #[test]
    fn test_zero_duration_motion_snaps() {
        let m = Motion::new(Vec2::ZERO, Vec2::ONE, 0.0);
        assert_eq!(m.position(), Vec2::ONE);
        assert!(m.is_finished());
    }

    #[test]
    fn test_tween_retarget_starts_from_current_value() {
        let mut t = Tween::new(0.0, 4.0, 1.5);
        t.advance(0.75);
        assert!((t.value() - 2.0).abs() < 1e-4);
        t.retarget(0.0, 1.5);
        assert!((t.value() - 2.0).abs() < 1e-4);
        t.advance(1.5);
        assert_eq!(t.value(), 0.0);
    }
}
