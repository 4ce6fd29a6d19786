//! # Pivot
//!
//! **A tiny 3D transform pipeline that composes scale, rotation, and
//! translation into shader-ready world matrices.**
//!
//! Set the three components independently, read back one matrix per frame,
//! hand it to your uniform-upload call. No window, no GPU handles, no hidden
//! state—just the math between "the shape I loaded" and "the 16 floats the
//! shader wants".
//!
//! ## Quick Start
//!
//! ```
//! use pivot::{DemoScene, RawGeometry, Spin, Vec3};
//!
//! // Tutorial-style scene: a colored pyramid tumbling about x and z.
//! let scene = DemoScene::new("Concatenating transformations", RawGeometry::pyramid())
//!     .spin(Spin::new().rates(Vec3::new(0.01, 0.0, 0.01)));
//!
//! // The caller owns the clock; each frame is a pure function of time.
//! for frame in 0..3 {
//!     let uniforms = scene.world_at(frame as f32);
//!     // upload uniforms.as_bytes() and draw
//! }
//! ```
//!
//! Or drive the pipeline directly:
//!
//! ```
//! use pivot::TransformPipeline;
//!
//! let mut pipeline = TransformPipeline::new();
//! pipeline.set_scaling(1.0, 1.0, 1.0);
//! pipeline.set_rotation(0.5, 0.0, 0.5);
//! pipeline.set_translation(0.0, 0.0, -3.0);
//! let world = pipeline.matrix(); // M = T · R · S
//! ```
//!
//! ## Conventions
//!
//! - **Composition order** is fixed: `M = T · R · S`, with
//!   `R = Rz · Ry · Rx`. Scale first, then rotate (x, then y, then z), then
//!   translate. Never data-dependent.
//! - **Column vectors**, multiplied on the right: `p' = M · p`, translation
//!   in the fourth column.
//! - **Column-major storage** (glam native), so uploads need no transpose.
//!
//! See the demo programs under `demos/` for one self-contained `main()` per
//! classic tutorial: a spinning triangle, a tumbling pyramid, and a loaded
//! model.

mod animation;
mod geometry;
mod mesh;
mod pipeline;
mod scene;
mod uniforms;

pub use animation::Spin;
pub use geometry::{GeometryError, ModelLoader};
pub use mesh::{RawGeometry, Vertex3d};
pub use pipeline::TransformPipeline;
pub use scene::DemoScene;
pub use uniforms::WorldUniforms;

// Re-export glam math types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
