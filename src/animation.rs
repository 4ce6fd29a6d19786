//! Time-driven transform animation.
//!
//! The classic demo loop bumps a file-scope angle once per redraw, which
//! makes the transform a function of hidden mutable state. [`Spin`] inverts
//! that: the caller owns the clock and passes elapsed time in, and the
//! resulting pipeline is a pure function of that input. Stepping time by a
//! fixed increment per frame reproduces the original behavior exactly.

use crate::pipeline::TransformPipeline;
use glam::Vec3;

/// A constant-rate rotation with fixed scale and translation.
///
/// `rates` holds angular velocities in radians per unit of time, one per
/// principal axis. [`Spin::at`] evaluates the animation at a point in time;
/// the same `time` always yields the same pipeline.
///
/// # Example
///
/// ```
/// use pivot::{Spin, Vec3};
///
/// // The tumbling-pyramid motion: equal spin about x and z.
/// let spin = Spin::new().rates(Vec3::new(0.25, 0.0, 0.25));
///
/// let frame_2 = spin.at(2.0);
/// assert_eq!(frame_2.rotation, Vec3::new(0.5, 0.0, 0.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    /// Angular velocity per axis, radians per unit time.
    pub rates: Vec3,
    /// Scale passed through to every evaluated pipeline.
    pub scale: Vec3,
    /// Translation passed through to every evaluated pipeline.
    pub translation: Vec3,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            rates: Vec3::ZERO,
            scale: Vec3::ONE,
            translation: Vec3::ZERO,
        }
    }
}

impl Spin {
    /// Creates a motionless spin (zero rates, identity scale and translation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets angular velocities for all three axes.
    pub fn rates(mut self, rates: Vec3) -> Self {
        self.rates = rates;
        self
    }

    /// Spins about the x axis only.
    pub fn about_x(mut self, rate: f32) -> Self {
        self.rates = Vec3::new(rate, 0.0, 0.0);
        self
    }

    /// Spins about the y axis only.
    pub fn about_y(mut self, rate: f32) -> Self {
        self.rates = Vec3::new(0.0, rate, 0.0);
        self
    }

    /// Spins about the z axis only.
    pub fn about_z(mut self, rate: f32) -> Self {
        self.rates = Vec3::new(0.0, 0.0, rate);
        self
    }

    /// Scale applied alongside the spin.
    pub fn scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Translation applied alongside the spin.
    pub fn translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// Evaluates the animation at the given time.
    ///
    /// Pure in `time`: no internal state advances, so frames can be
    /// evaluated out of order or re-evaluated freely.
    pub fn at(&self, time: f32) -> TransformPipeline {
        TransformPipeline::new()
            .scale(self.scale)
            .rotation(self.rates * time)
            .translation(self.translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_zero_is_identity() {
        let spin = Spin::new().about_z(0.01);
        assert_eq!(spin.at(0.0).matrix(), glam::Mat4::IDENTITY);
    }

    #[test]
    fn angle_grows_linearly_with_time() {
        let spin = Spin::new().about_z(0.25);
        assert_eq!(spin.at(8.0).rotation, Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn evaluation_is_pure() {
        let spin = Spin::new()
            .rates(Vec3::new(0.3, 0.0, 0.7))
            .scale(Vec3::splat(2.0))
            .translation(Vec3::new(0.0, 1.0, -4.0));

        let a = spin.at(3.5);
        let _ = spin.at(9.0);
        let b = spin.at(3.5);
        assert_eq!(a, b);
        assert_eq!(a.matrix().to_cols_array(), b.matrix().to_cols_array());
    }

    #[test]
    fn carries_scale_and_translation() {
        let spin = Spin::new()
            .about_y(1.0)
            .scale(Vec3::splat(0.5))
            .translation(Vec3::new(1.0, 2.0, 3.0));

        let pipeline = spin.at(2.0);
        assert_eq!(pipeline.scale, Vec3::splat(0.5));
        assert_eq!(pipeline.translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(pipeline.rotation, Vec3::new(0.0, 2.0, 0.0));
    }
}
