//! Model Loading Demo - loads an STL model and spins it about the y axis.
//!
//! Pass a path to an `.stl` file as the first argument:
//!
//! ```text
//! cargo run --example model_loading -- my_model.stl
//! ```
//!
//! Without an argument the built-in pyramid stands in, so the demo runs
//! without any assets on disk.

use pivot::{DemoScene, ModelLoader, RawGeometry, Spin};

const FRAMES: u32 = 8;
const STEP: f32 = 0.01;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let geometry = match std::env::args().nth(1) {
        Some(path) => {
            match ModelLoader::from_file(&path).centered().normalized().build() {
                Ok(geometry) => {
                    log::info!(
                        "{}: {} vertices, {} triangles",
                        path,
                        geometry.vertices.len(),
                        geometry.indices.len() / 3
                    );
                    geometry
                }
                Err(e) => {
                    log::error!("failed to load {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            log::info!("no model path given, using the built-in pyramid");
            RawGeometry::pyramid()
        }
    };

    let scene = DemoScene::new("Model loading", geometry).spin(Spin::new().about_y(STEP));

    for frame in 0..FRAMES {
        let world = scene.world_at(frame as f32);
        log::info!("frame {}: world {}", frame, world.matrix());
    }
}
