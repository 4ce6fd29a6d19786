//! Rotation Demo - a triangle spinning about the z axis.
//!
//! The original version of this program bumped a file-scope angle inside its
//! render callback. Here the frame counter is the clock: every frame's world
//! matrix is recomputed from it, and rendering the same frame twice gives
//! the same matrix.

use pivot::{DemoScene, RawGeometry, Spin};

const FRAMES: u32 = 8;
const STEP: f32 = 0.01; // radians per frame, matching the original

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scene = DemoScene::new("Spinning triangle", RawGeometry::triangle())
        .spin(Spin::new().about_z(STEP));

    log::info!(
        "{} ({}x{}), {} vertices",
        scene.title,
        scene.width,
        scene.height,
        scene.geometry.vertices.len()
    );

    // One uniform upload per simulated frame; the back end would hand
    // world.as_bytes() to its uniform-upload call and draw.
    for frame in 0..FRAMES {
        let world = scene.world_at(frame as f32);
        log::info!("frame {}: world {}", frame, world.matrix());
    }
}
