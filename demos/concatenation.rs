//! Concatenating Transformations Demo - a colored pyramid tumbling about
//! two axes, driven through the full transform pipeline.
//!
//! Exercises every pipeline component the way the original did per frame:
//! identity translation, identity scale, and a rotation of (t, 0, t).

use pivot::{RawGeometry, TransformPipeline, WorldUniforms};

const FRAMES: u32 = 8;
const STEP: f32 = 0.01;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let pyramid = RawGeometry::pyramid();
    log::info!(
        "pyramid: {} vertices, {} triangles",
        pyramid.vertices.len(),
        pyramid.indices.len() / 3
    );

    for frame in 0..FRAMES {
        let angle = frame as f32 * STEP;

        let mut pipeline = TransformPipeline::new();
        pipeline.set_translation(0.0, 0.0, 0.0);
        pipeline.set_scaling(1.0, 1.0, 1.0);
        pipeline.set_rotation(angle, 0.0, angle);

        let uniforms = WorldUniforms::from(pipeline);
        log::info!(
            "frame {}: uploading {} bytes, world {}",
            frame,
            uniforms.as_bytes().len(),
            uniforms.matrix()
        );
    }
}
