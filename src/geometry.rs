//! Fluent model loading for 3D demo scenes.
//!
//! Loads geometry from model files into [`RawGeometry`], with optional
//! shaping applied along the way. Currently supports STL files, with an
//! extensible architecture for adding more formats.
//!
//! # Quick Start
//!
//! ```no_run
//! use pivot::ModelLoader;
//!
//! let model = ModelLoader::from_file("my_model.stl")
//!     .centered()      // Center at origin
//!     .normalized()    // Scale to fit in unit cube
//!     .build()
//!     .unwrap();
//! ```
//!
//! # Supported Formats
//!
//! | Format | Extensions | Notes |
//! |--------|------------|-------|
//! | STL    | `.stl`     | Binary and ASCII, no color or UV coordinates |
//!
//! Embedded assets work through [`ModelLoader::from_stl_bytes`]:
//!
//! ```ignore
//! let stl_bytes = include_bytes!("../assets/model.stl");
//! let model = ModelLoader::from_stl_bytes(stl_bytes).centered().build()?;
//! ```

use crate::mesh::{RawGeometry, Vertex3d};
use glam::{Quat, Vec3};
use std::path::Path;

/// Errors that can occur when loading geometry.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    /// File could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// File format could not be determined from extension.
    #[error("unknown model format: '{0}'")]
    UnknownFormat(String),
    /// The geometry data was invalid or corrupt.
    #[error("parse error: {0}")]
    Parse(String),
}

/// A fluent builder for loading and shaping model geometry.
///
/// The loader reads the file eagerly, records the requested shaping steps,
/// and applies them when [`ModelLoader::build`] runs. The steps run in a
/// fixed order regardless of call order:
///
/// 1. Center (if requested)
/// 2. Rotate (if requested)
/// 3. Normalize (if requested)
/// 4. Scale (if specified)
/// 5. Smooth normals (if requested)
/// 6. Translate (if specified)
///
/// # Example
///
/// ```no_run
/// use pivot::ModelLoader;
///
/// let model = ModelLoader::from_stl("model.stl")
///     .centered()           // Move to origin
///     .normalized()         // Fit in unit cube
///     .smooth_normals()     // Recalculate smooth normals
///     .build()
///     .unwrap();
/// ```
pub struct ModelLoader {
    result: Result<RawGeometry, GeometryError>,
    center: bool,
    normalize: bool,
    smooth_normals: bool,
    scale_factor: Option<f32>,
    translation: Option<Vec3>,
    rotation: Option<Quat>,
}

impl ModelLoader {
    fn from_result(result: Result<RawGeometry, GeometryError>) -> Self {
        Self {
            result,
            center: false,
            normalize: false,
            smooth_normals: false,
            scale_factor: None,
            translation: None,
            rotation: None,
        }
    }

    /// Loads geometry from a file, detecting format from extension.
    ///
    /// Currently supports:
    /// - `.stl` - STL files (binary and ASCII)
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::from_result(load_file(path.as_ref()))
    }

    /// Loads an STL file specifically.
    ///
    /// Use this when you know the file is STL, or when the file doesn't have
    /// a standard extension.
    pub fn from_stl(path: impl AsRef<Path>) -> Self {
        Self::from_result(load_stl_file(path.as_ref()))
    }

    /// Loads STL geometry from raw bytes.
    ///
    /// Useful for embedded assets via `include_bytes!`.
    pub fn from_stl_bytes(bytes: &[u8]) -> Self {
        let mut cursor = std::io::Cursor::new(bytes);
        Self::from_result(parse_stl(&mut cursor))
    }

    /// Creates a loader from existing raw geometry.
    ///
    /// Useful when procedurally generated geometry should go through the
    /// same shaping steps as a loaded model.
    pub fn from_raw(geometry: RawGeometry) -> Self {
        Self::from_result(Ok(geometry))
    }

    /// Centers the geometry at the origin.
    ///
    /// Moves the geometry so its bounding box center is at (0, 0, 0).
    /// This is applied before scaling.
    pub fn centered(mut self) -> Self {
        self.center = true;
        self
    }

    /// Scales the geometry to fit within a unit cube.
    ///
    /// The geometry will fit within -0.5 to 0.5 on all axes, preserving
    /// aspect ratio.
    pub fn normalized(mut self) -> Self {
        self.normalize = true;
        self
    }

    /// Recalculates smooth vertex normals.
    ///
    /// Computes normals by averaging face normals at each vertex. Useful for
    /// STL files which only carry face normals.
    pub fn smooth_normals(mut self) -> Self {
        self.smooth_normals = true;
        self
    }

    /// Applies a uniform scale factor.
    ///
    /// This is applied after centering and normalization.
    pub fn scaled(mut self, factor: f32) -> Self {
        self.scale_factor = Some(factor);
        self
    }

    /// Translates the geometry by the given offset.
    ///
    /// This is applied last, after all other shaping steps.
    pub fn translated(mut self, offset: Vec3) -> Self {
        self.translation = Some(offset);
        self
    }

    /// Reorients the geometry from Z-up to Y-up.
    ///
    /// Many 3D modeling tools export with Z as the up axis, while rendering
    /// code here assumes Y-up. This applies a -90 degree rotation around the
    /// X axis to convert between them.
    pub fn upright(mut self) -> Self {
        self.rotation = Some(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2));
        self
    }

    /// Rotates the geometry by a custom quaternion.
    ///
    /// This is applied after centering but before normalization and scaling.
    pub fn rotated_by(mut self, rotation: Quat) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Finalizes the load, applying all requested shaping steps in order.
    pub fn build(self) -> Result<RawGeometry, GeometryError> {
        let mut geometry = self.result?;

        if self.center {
            geometry.recenter();
        }

        if let Some(rotation) = self.rotation {
            geometry.rotate(rotation);
        }

        if self.normalize {
            geometry.normalize();
        }

        if let Some(scale) = self.scale_factor {
            geometry.scale(scale);
        }

        if self.smooth_normals {
            geometry.recalculate_normals();
        }

        if let Some(offset) = self.translation {
            geometry.translate(offset);
        }

        Ok(geometry)
    }
}

fn load_file(path: &Path) -> Result<RawGeometry, GeometryError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "stl" => load_stl_file(path),
        _ => Err(GeometryError::UnknownFormat(ext)),
    }
}

fn load_stl_file(path: &Path) -> Result<RawGeometry, GeometryError> {
    let file = std::fs::File::open(path)?;
    let mut reader = std::io::BufReader::new(file);
    let geometry = parse_stl(&mut reader)?;
    log::debug!(
        "loaded {:?}: {} vertices, {} triangles",
        path,
        geometry.vertices.len(),
        geometry.indices.len() / 3
    );
    Ok(geometry)
}

fn parse_stl<R: std::io::Read + std::io::Seek>(reader: &mut R) -> Result<RawGeometry, GeometryError> {
    let stl = stl_io::read_stl(reader)
        .map_err(|e| GeometryError::Parse(format!("STL parse error: {}", e)))?;

    let mut vertices = Vec::with_capacity(stl.faces.len() * 3);
    let mut indices = Vec::with_capacity(stl.faces.len() * 3);

    // stl_io returns an IndexedMesh with a vertex list and indexed triangles
    for (i, face) in stl.faces.iter().enumerate() {
        let normal: [f32; 3] = face.normal.into();

        // Look up the actual vertex positions from the vertex list
        for &vertex_idx in &face.vertices {
            let vertex = &stl.vertices[vertex_idx];
            let position: [f32; 3] = (*vertex).into();
            vertices.push(Vertex3d::from_position_normal(position, normal));
        }

        let base = (i * 3) as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    Ok(RawGeometry::new(vertices, indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected() {
        let err = ModelLoader::from_file("model.gltf").build().unwrap_err();
        assert!(matches!(err, GeometryError::UnknownFormat(ext) if ext == "gltf"));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = ModelLoader::from_stl("does_not_exist.stl").build().unwrap_err();
        assert!(matches!(err, GeometryError::Io(_)));
    }

    #[test]
    fn garbage_bytes_report_parse_error() {
        let err = ModelLoader::from_stl_bytes(&[0u8; 10]).build().unwrap_err();
        assert!(matches!(err, GeometryError::Parse(_)));
    }

    #[test]
    fn from_raw_applies_shaping_in_order() {
        let geometry = ModelLoader::from_raw(RawGeometry::plane(4.0))
            .centered()
            .normalized()
            .scaled(2.0)
            .translated(Vec3::new(1.0, 0.0, 0.0))
            .build()
            .unwrap();

        // Normalized to unit size, doubled, then shifted on x.
        let size = geometry.size();
        assert!((size.x - 2.0).abs() < 1e-5);
        assert!((geometry.center().x - 1.0).abs() < 1e-5);
    }
}
