//! The transform pipeline: scale, rotation, and translation composed into one
//! world matrix.
//!
//! [`TransformPipeline`] is the heart of this crate. It holds three
//! independently-settable components and combines them into a single 4×4
//! homogeneous matrix, ready to hand to a uniform-upload call once per frame.
//!
//! # Quick Start
//!
//! ```
//! use pivot::TransformPipeline;
//!
//! let mut pipeline = TransformPipeline::new();
//! pipeline.set_scaling(1.0, 1.0, 1.0);
//! pipeline.set_rotation(0.0, 0.0, 0.5);
//! pipeline.set_translation(0.0, 0.0, -3.0);
//!
//! let world = pipeline.matrix();
//! // world is a glam::Mat4, ready for WorldUniforms::from(world)
//! ```
//!
//! # Composition Order
//!
//! The composed matrix is always `M = T · R · S`: a point is scaled around
//! its local origin, then rotated around its local origin, then translated
//! into world space. The rotation itself is `R = Rz · Ry · Rx`, so the x-axis
//! rotation is applied to the point first. Both orders are fixed and never
//! depend on which setters were called or in what sequence.
//!
//! # Conventions
//!
//! Points are column vectors multiplied on the right (`p' = M · p`), which
//! puts the translation in the fourth column. Storage follows glam's `Mat4`
//! (column-major), so the 16 floats reach the GPU in column-major order and
//! need no transpose on upload.

use glam::{Mat4, Vec3};

/// Accumulates scale, rotation, and translation and composes them into a
/// world matrix.
///
/// The three components are independent: setting one never touches the
/// others, and [`TransformPipeline::matrix()`] is a pure read that leaves the
/// pipeline untouched. Calling it repeatedly without mutating any field
/// returns bit-identical matrices.
///
/// # Defaults
///
/// A fresh pipeline is the identity transform:
/// - `scale`: `(1, 1, 1)`
/// - `rotation`: `(0, 0, 0)` radians
/// - `translation`: `(0, 0, 0)`
///
/// # Setter and Builder Styles
///
/// Both a mutating setter surface and a fluent builder surface are provided;
/// they store the same fields:
///
/// ```
/// use pivot::{TransformPipeline, Vec3};
///
/// // Per-frame mutation
/// let mut p = TransformPipeline::new();
/// p.set_rotation(0.0, 1.2, 0.0);
///
/// // One-shot construction
/// let q = TransformPipeline::new().rotation(Vec3::new(0.0, 1.2, 0.0));
///
/// assert_eq!(p.matrix(), q.matrix());
/// ```
///
/// # Degenerate Inputs
///
/// No input is rejected. A zero scale component collapses a dimension and a
/// negative one mirrors it; both are mathematical consequences the caller
/// opted into, not errors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformPipeline {
    /// Per-axis scale factors.
    pub scale: Vec3,
    /// Euler angles in radians, one per principal axis, applied x → y → z.
    pub rotation: Vec3,
    /// World-space translation offsets.
    pub translation: Vec3,
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
            translation: Vec3::ZERO,
        }
    }
}

impl TransformPipeline {
    /// Creates an identity pipeline (unit scale, no rotation, no translation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores per-axis scale factors.
    ///
    /// Sign and magnitude are unconstrained: zero collapses a dimension,
    /// negative values mirror it.
    pub fn set_scaling(&mut self, sx: f32, sy: f32, sz: f32) {
        self.scale = Vec3::new(sx, sy, sz);
    }

    /// Stores per-axis rotation angles in radians.
    ///
    /// Each angle rotates about its principal axis using the right-handed
    /// convention; see [`TransformPipeline::matrix()`] for the order in which
    /// the three rotations compose.
    pub fn set_rotation(&mut self, ax: f32, ay: f32, az: f32) {
        self.rotation = Vec3::new(ax, ay, az);
    }

    /// Stores translation offsets.
    pub fn set_translation(&mut self, tx: f32, ty: f32, tz: f32) {
        self.translation = Vec3::new(tx, ty, tz);
    }

    /// Sets non-uniform scale factors, builder style.
    pub fn scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Sets uniform scale on all axes, builder style.
    ///
    /// ```
    /// use pivot::{TransformPipeline, Vec3};
    ///
    /// let p = TransformPipeline::new().uniform_scale(2.0);
    /// assert_eq!(p.scale, Vec3::new(2.0, 2.0, 2.0));
    /// ```
    pub fn uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Sets the per-axis rotation angles (radians), builder style.
    pub fn rotation(mut self, angles: Vec3) -> Self {
        self.rotation = angles;
        self
    }

    /// Sets the translation, builder style.
    pub fn translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// Composes the current components into a world matrix.
    ///
    /// Returns `M = T · R · S` with `R = Rz · Ry · Rx`. Under the
    /// column-vector convention this means a point is scaled first, then
    /// rotated about x, y, z in that order, then translated.
    ///
    /// This is a pure read: the pipeline is not mutated, and two calls with
    /// identical fields return bit-identical matrices.
    ///
    /// # Example
    ///
    /// ```
    /// use pivot::{TransformPipeline, Vec3};
    ///
    /// let p = TransformPipeline::new()
    ///     .scale(Vec3::new(2.0, 1.0, 1.0))
    ///     .translation(Vec3::new(1.0, 0.0, 0.0));
    ///
    /// // Scale applies before translation: (1,0,0) → (2,0,0) → (3,0,0)
    /// let moved = p.matrix().transform_point3(Vec3::new(1.0, 0.0, 0.0));
    /// assert_eq!(moved, Vec3::new(3.0, 0.0, 0.0));
    /// ```
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * self.rotation_matrix()
            * Mat4::from_scale(self.scale)
    }

    /// Composes only the rotation component, `R = Rz · Ry · Rx`.
    ///
    /// Each factor is the standard right-handed elementary rotation about
    /// one axis; for the z-axis the upper-left block is
    /// `[[cos θ, -sin θ], [sin θ, cos θ]]` acting on x/y.
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_x(self.rotation.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat3, Vec4};
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    fn assert_mat4_near(a: Mat4, b: Mat4, eps: f32) {
        for (x, y) in a.to_cols_array().iter().zip(b.to_cols_array().iter()) {
            assert!((x - y).abs() < eps, "matrices differ:\n{:?}\n{:?}", a, b);
        }
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(TransformPipeline::new().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn scale_only_is_diagonal() {
        let mut p = TransformPipeline::new();
        p.set_scaling(2.0, -3.0, 0.5);

        let expected = Mat4::from_diagonal(Vec4::new(2.0, -3.0, 0.5, 1.0));
        assert_eq!(p.matrix(), expected);
    }

    #[test]
    fn zero_scale_collapses_dimension() {
        let mut p = TransformPipeline::new();
        p.set_scaling(1.0, 0.0, 1.0);

        let moved = p.matrix().transform_point3(Vec3::new(2.0, 5.0, -1.0));
        assert_eq!(moved, Vec3::new(2.0, 0.0, -1.0));
    }

    #[test]
    fn translation_only_embeds_offset() {
        let mut p = TransformPipeline::new();
        p.set_translation(0.2, 1.7, 7.0);

        let m = p.matrix();
        // Fourth column holds the offset under the column-vector convention.
        assert_eq!(m.w_axis, Vec4::new(0.2, 1.7, 7.0, 1.0));
        assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::new(0.2, 1.7, 7.0));
    }

    #[test]
    fn single_axis_rotation_is_orthonormal() {
        let samples = [-TAU, -1.9, -FRAC_PI_2, -0.3, 0.0, 0.3, FRAC_PI_2, 1.9, PI, TAU];
        for &angle in &samples {
            for axis in 0..3 {
                let mut angles = Vec3::ZERO;
                angles[axis] = angle;

                let r = Mat3::from_mat4(TransformPipeline::new().rotation(angles).matrix());
                let product = r * r.transpose();
                for (x, y) in product
                    .to_cols_array()
                    .iter()
                    .zip(Mat3::IDENTITY.to_cols_array().iter())
                {
                    assert!((x - y).abs() < 1e-5, "axis {} angle {}", axis, angle);
                }
                assert!((r.determinant() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn z_rotation_matches_standard_convention() {
        let mut p = TransformPipeline::new();
        p.set_rotation(0.0, 0.0, FRAC_PI_2);

        // A quarter turn about z carries +x onto +y (right-hand rule).
        let moved = p.matrix().transform_point3(Vec3::X);
        assert!((moved - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn zero_rotation_is_identity() {
        let mut p = TransformPipeline::new();
        p.set_rotation(0.0, 0.0, 0.0);
        assert_eq!(p.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn rotation_round_trips() {
        for &angle in &[0.25, 1.0, 2.5] {
            let forward = TransformPipeline::new().rotation(Vec3::new(0.0, angle, 0.0));
            let back = TransformPipeline::new().rotation(Vec3::new(0.0, -angle, 0.0));
            assert_mat4_near(forward.matrix() * back.matrix(), Mat4::IDENTITY, 1e-6);
        }
    }

    #[test]
    fn rotation_order_is_z_after_y_after_x() {
        let angles = Vec3::new(0.4, -1.1, 2.0);
        let p = TransformPipeline::new().rotation(angles);

        let explicit = Mat4::from_rotation_z(angles.z)
            * Mat4::from_rotation_y(angles.y)
            * Mat4::from_rotation_x(angles.x);
        assert_eq!(p.matrix(), explicit);
    }

    #[test]
    fn scale_applies_before_translation() {
        let p = TransformPipeline::new()
            .scale(Vec3::new(2.0, 1.0, 1.0))
            .translation(Vec3::new(1.0, 0.0, 0.0));

        let moved = p.matrix().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(moved, Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn repeated_reads_are_bit_identical() {
        let p = TransformPipeline::new()
            .scale(Vec3::new(0.3, 1.4, -2.0))
            .rotation(Vec3::new(0.7, 0.1, -0.9))
            .translation(Vec3::new(4.0, -5.0, 6.0));

        assert_eq!(p.matrix().to_cols_array(), p.matrix().to_cols_array());
    }

    #[test]
    fn setters_are_independent() {
        let mut p = TransformPipeline::new();
        p.set_scaling(2.0, 2.0, 2.0);
        p.set_rotation(0.1, 0.2, 0.3);
        p.set_translation(1.0, 2.0, 3.0);

        p.set_rotation(0.0, 0.0, 0.0);
        assert_eq!(p.scale, Vec3::splat(2.0));
        assert_eq!(p.translation, Vec3::new(1.0, 2.0, 3.0));
    }
}
