//! Owned demo-scene state.
//!
//! The original demo programs kept their working state in file-scope
//! globals: buffer handles, the uniform location, the window dimensions.
//! [`DemoScene`] gathers what survives on the CPU side into one owned value
//! that the render step receives explicitly, so setup and rendering share
//! data through a parameter instead of hidden statics.

use crate::animation::Spin;
use crate::mesh::RawGeometry;
use crate::pipeline::TransformPipeline;
use crate::uniforms::WorldUniforms;

/// Everything a demo needs per frame, in one place.
///
/// A scene owns its geometry, its animation, and the window parameters the
/// back end will want at creation time. Per-frame queries take the simulated
/// time explicitly and are pure in it: the same `time` always produces the
/// same uniforms, so frames can be recomputed or evaluated out of order.
///
/// # Example
///
/// ```
/// use pivot::{DemoScene, RawGeometry, Spin};
///
/// let scene = DemoScene::new("Spinning triangle", RawGeometry::triangle())
///     .spin(Spin::new().about_z(0.01));
///
/// // One simulated frame: hand these bytes to the uniform-upload call.
/// let uniforms = scene.world_at(1.0);
/// assert_eq!(uniforms.as_bytes().len(), 64);
/// ```
#[derive(Clone, Debug)]
pub struct DemoScene {
    /// Window title the back end should use.
    pub title: String,
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// The geometry this scene draws.
    pub geometry: RawGeometry,
    /// The motion applied to the geometry.
    pub spin: Spin,
}

impl DemoScene {
    /// Creates a scene with the classic 480×480 demo window.
    pub fn new(title: impl Into<String>, geometry: RawGeometry) -> Self {
        Self {
            title: title.into(),
            width: 480,
            height: 480,
            geometry,
            spin: Spin::new(),
        }
    }

    /// Sets the window dimensions.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the scene's animation.
    pub fn spin(mut self, spin: Spin) -> Self {
        self.spin = spin;
        self
    }

    /// The transform pipeline for the given simulated time.
    pub fn pipeline_at(&self, time: f32) -> TransformPipeline {
        self.spin.at(time)
    }

    /// The upload-ready world uniforms for the given simulated time.
    pub fn world_at(&self, time: f32) -> WorldUniforms {
        WorldUniforms::from(self.pipeline_at(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn defaults_to_classic_window() {
        let scene = DemoScene::new("test", RawGeometry::triangle());
        assert_eq!((scene.width, scene.height), (480, 480));
    }

    #[test]
    fn world_is_pure_in_time() {
        let scene = DemoScene::new("test", RawGeometry::pyramid())
            .spin(Spin::new().rates(Vec3::new(0.01, 0.0, 0.01)));

        let a = scene.world_at(7.0);
        let _ = scene.world_at(11.0);
        let b = scene.world_at(7.0);
        assert_eq!(a, b);
    }

    #[test]
    fn motionless_scene_uploads_identity() {
        let scene = DemoScene::new("test", RawGeometry::triangle());
        let uniforms = scene.world_at(123.0);
        assert_eq!(uniforms.world, glam::Mat4::IDENTITY.to_cols_array_2d());
    }
}
