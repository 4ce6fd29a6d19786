//! Upload-ready uniform data.
//!
//! The composed world matrix crosses the crate boundary as 16 contiguous
//! floats. [`WorldUniforms`] is that boundary: a `#[repr(C)]` struct the
//! rendering back end can hand to its uniform-upload call unchanged, via
//! `bytemuck::cast_slice(&[uniforms])` or [`WorldUniforms::as_bytes`].
//!
//! The matrix is stored column-major (glam's native order) under the
//! column-vector convention, so no transpose flag is needed on upload.

use crate::pipeline::TransformPipeline;
use glam::Mat4;

/// Per-draw world transform uniforms.
///
/// This structure is rebuilt each frame from the current
/// [`TransformPipeline`] and uploaded once per draw call.
///
/// # Example
///
/// ```
/// use pivot::{TransformPipeline, WorldUniforms};
///
/// let mut pipeline = TransformPipeline::new();
/// pipeline.set_rotation(0.0, 0.0, 0.5);
///
/// let uniforms = WorldUniforms::from(pipeline);
/// assert_eq!(uniforms.as_bytes().len(), 64);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WorldUniforms {
    /// World matrix (object to world space transformation), column-major.
    pub world: [[f32; 4]; 4],
}

impl WorldUniforms {
    /// Wraps a composed matrix in its upload layout.
    pub fn new(world: Mat4) -> Self {
        Self {
            world: world.to_cols_array_2d(),
        }
    }

    /// The raw bytes a uniform-upload call expects.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// The stored matrix, back as a [`Mat4`].
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.world)
    }
}

impl From<Mat4> for WorldUniforms {
    fn from(world: Mat4) -> Self {
        Self::new(world)
    }
}

impl From<TransformPipeline> for WorldUniforms {
    fn from(pipeline: TransformPipeline) -> Self {
        Self::new(pipeline.matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn sixteen_contiguous_floats() {
        assert_eq!(std::mem::size_of::<WorldUniforms>(), 64);

        let uniforms = WorldUniforms::new(Mat4::IDENTITY);
        let floats: &[f32] = bytemuck::cast_slice(uniforms.as_bytes());
        assert_eq!(floats.len(), 16);
        assert_eq!(floats, &Mat4::IDENTITY.to_cols_array());
    }

    #[test]
    fn translation_lands_in_fourth_column() {
        let pipeline = TransformPipeline::new().translation(Vec3::new(7.0, 8.0, 9.0));
        let uniforms = WorldUniforms::from(pipeline);

        // Column-major: the fourth column is floats 12..16.
        assert_eq!(uniforms.world[3], [7.0, 8.0, 9.0, 1.0]);
    }
}
