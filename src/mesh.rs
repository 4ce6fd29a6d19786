//! Vertex format and CPU-side geometry.
//!
//! This module provides the data half of a demo scene:
//!
//! - [`Vertex3d`] — the vertex format, containing position, color, normal,
//!   and UV data with a fixed GPU-friendly layout
//! - [`RawGeometry`] — owned vertex and index lists with basic shaping
//!   operations (centering, scaling, normal recalculation)
//!
//! Geometry stays on the CPU here; uploading it into buffer objects is the
//! rendering back end's business. [`RawGeometry`] only guarantees that
//! `bytemuck::cast_slice(&geometry.vertices)` hands that back end tightly
//! packed bytes in the documented layout.
//!
//! # Built-in Primitives
//!
//! ```
//! use pivot::RawGeometry;
//!
//! let triangle = RawGeometry::triangle();   // unit triangle on the XY plane
//! let pyramid = RawGeometry::pyramid();     // five-vertex colored pyramid
//! let ground = RawGeometry::plane(10.0);    // 10×10 plane on the XZ plane
//! ```
//!
//! # Vertex Layout
//!
//! [`Vertex3d`] occupies 44 bytes:
//!
//! | Attribute | Format    | Offset |
//! |-----------|-----------|--------|
//! | position  | Float32x3 | 0      |
//! | color     | Float32x3 | 12     |
//! | normal    | Float32x3 | 24     |
//! | uv        | Float32x2 | 36     |

use glam::{Quat, Vec3};

/// A vertex with position, color, normal, and texture coordinates.
///
/// `#[repr(C)]` fixes the memory layout for GPU upload, and the
/// [`bytemuck::Pod`]/[`bytemuck::Zeroable`] derives make whole-slice casts to
/// bytes safe.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3d {
    /// The 3D position of this vertex in model space.
    pub position: [f32; 3],
    /// RGB vertex color in the range [0, 1].
    pub color: [f32; 3],
    /// The surface normal vector (should be normalized for correct lighting).
    pub normal: [f32; 3],
    /// Texture coordinates, typically in the range [0, 1].
    pub uv: [f32; 2],
}

impl Vertex3d {
    /// Creates a new vertex from its four attributes.
    pub fn new(position: [f32; 3], color: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            color,
            normal,
            uv,
        }
    }

    /// Creates a white vertex with only a position and normal.
    ///
    /// Handy for model formats like STL that carry no color or UV data.
    pub fn from_position_normal(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self::new(position, [1.0, 1.0, 1.0], normal, [0.0, 0.0])
    }
}

/// CPU-side geometry: owned vertex and index lists.
///
/// The indices describe triangles, three per face, wound counter-clockwise
/// for front faces. All shaping operations mutate in place; none of them
/// touch the index list except as read-only input to
/// [`RawGeometry::recalculate_normals`].
#[derive(Clone, Debug)]
pub struct RawGeometry {
    /// Vertex positions, colors, normals, and UVs.
    pub vertices: Vec<Vertex3d>,
    /// Triangle indices.
    pub indices: Vec<u32>,
}

impl RawGeometry {
    /// Creates raw geometry from vertices and indices.
    pub fn new(vertices: Vec<Vertex3d>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// The unit triangle of the classic first-triangle demo.
    ///
    /// Three white vertices on the XY plane, facing +Z:
    /// `(-0.5, -0.5)`, `(0.5, -0.5)`, `(0.0, 0.5)`.
    pub fn triangle() -> Self {
        let normal = [0.0, 0.0, 1.0];
        let vertices = vec![
            Vertex3d::new([-0.5, -0.5, 0.0], [1.0, 1.0, 1.0], normal, [0.0, 0.0]),
            Vertex3d::new([0.5, -0.5, 0.0], [1.0, 1.0, 1.0], normal, [1.0, 0.0]),
            Vertex3d::new([0.0, 0.5, 0.0], [1.0, 1.0, 1.0], normal, [0.5, 1.0]),
        ];

        Self::new(vertices, vec![0, 1, 2])
    }

    /// A five-vertex pyramid with colored corners.
    ///
    /// The square base spans -0.5 to 0.5 on X and Z at `y = -0.5`, with the
    /// peak at `(0, 0.5, 0)`. Base corners are blue on the left, green on the
    /// right, and the peak is red, so each face shows its orientation while
    /// the shape tumbles. Normals are smooth-shaded.
    pub fn pyramid() -> Self {
        #[rustfmt::skip]
        let corners: [([f32; 3], [f32; 3]); 5] = [
            ([-0.5, -0.5,  0.5], [0.0, 0.0, 1.0]), // left front
            ([-0.5, -0.5, -0.5], [0.0, 0.0, 1.0]), // left rear
            ([ 0.5, -0.5,  0.5], [0.0, 1.0, 0.0]), // right front
            ([ 0.5, -0.5, -0.5], [0.0, 1.0, 0.0]), // right rear
            ([ 0.0,  0.5,  0.0], [1.0, 0.0, 0.0]), // peak
        ];

        let vertices = corners
            .iter()
            .map(|&(position, color)| Vertex3d::new(position, color, [0.0, 0.0, 0.0], [0.0, 0.0]))
            .collect();

        #[rustfmt::skip]
        let indices = vec![
            0, 1, 3,
            0, 3, 2,
            0, 1, 4,
            1, 3, 4,
            3, 2, 4,
            2, 0, 4,
        ];

        let mut geometry = Self::new(vertices, indices);
        geometry.recalculate_normals();
        geometry
    }

    /// A flat square plane on the XZ axis with normals pointing up.
    pub fn plane(size: f32) -> Self {
        let half = size * 0.5;
        let white = [1.0, 1.0, 1.0];
        let up = [0.0, 1.0, 0.0];
        let vertices = vec![
            Vertex3d::new([-half, 0.0, -half], white, up, [0.0, 0.0]),
            Vertex3d::new([half, 0.0, -half], white, up, [1.0, 0.0]),
            Vertex3d::new([half, 0.0, half], white, up, [1.0, 1.0]),
            Vertex3d::new([-half, 0.0, half], white, up, [0.0, 1.0]),
        ];

        Self::new(vertices, vec![0, 1, 2, 2, 3, 0])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns `(min, max)` corners of the bounding box.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);

        for v in &self.vertices {
            let p = Vec3::from(v.position);
            min = min.min(p);
            max = max.max(p);
        }

        (min, max)
    }

    /// Returns the center point of the bounding box.
    pub fn center(&self) -> Vec3 {
        let (min, max) = self.bounds();
        (min + max) * 0.5
    }

    /// Returns the size of the bounding box.
    pub fn size(&self) -> Vec3 {
        let (min, max) = self.bounds();
        max - min
    }

    /// Translates all vertices by the given offset.
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            v.position[0] += offset.x;
            v.position[1] += offset.y;
            v.position[2] += offset.z;
        }
    }

    /// Scales all vertices uniformly around the origin.
    pub fn scale(&mut self, factor: f32) {
        for v in &mut self.vertices {
            v.position[0] *= factor;
            v.position[1] *= factor;
            v.position[2] *= factor;
        }
    }

    /// Rotates all vertices and normals by the given quaternion.
    pub fn rotate(&mut self, rotation: Quat) {
        for v in &mut self.vertices {
            v.position = (rotation * Vec3::from(v.position)).into();
            v.normal = (rotation * Vec3::from(v.normal)).into();
        }
    }

    /// Centers the geometry at the origin.
    pub fn recenter(&mut self) {
        let center = self.center();
        self.translate(-center);
    }

    /// Scales the geometry to fit within a unit cube (-0.5 to 0.5).
    pub fn normalize(&mut self) {
        let size = self.size();
        let max_dim = size.x.max(size.y).max(size.z);
        if max_dim > 0.0 {
            self.scale(1.0 / max_dim);
        }
    }

    /// Recalculates smooth vertex normals from face geometry.
    ///
    /// Face normals are accumulated at each shared vertex, weighted by face
    /// area, then renormalized.
    pub fn recalculate_normals(&mut self) {
        for v in &mut self.vertices {
            v.normal = [0.0, 0.0, 0.0];
        }

        for tri in self.indices.chunks(3) {
            if tri.len() < 3 {
                continue;
            }
            let i0 = tri[0] as usize;
            let i1 = tri[1] as usize;
            let i2 = tri[2] as usize;

            let p0 = Vec3::from(self.vertices[i0].position);
            let p1 = Vec3::from(self.vertices[i1].position);
            let p2 = Vec3::from(self.vertices[i2].position);

            let face_normal = (p1 - p0).cross(p2 - p0);
            for &i in &[i0, i1, i2] {
                self.vertices[i].normal[0] += face_normal.x;
                self.vertices[i].normal[1] += face_normal.y;
                self.vertices[i].normal[2] += face_normal.z;
            }
        }

        for v in &mut self.vertices {
            let n = Vec3::from(v.normal).normalize_or_zero();
            v.normal = n.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex3d>(), 44);
        let vertices = [Vertex3d::from_position_normal([0.0; 3], [0.0, 1.0, 0.0]); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 3 * 44);
    }

    #[test]
    fn raw_geometry_bounds() {
        let vertices = vec![
            Vertex3d::from_position_normal([0.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Vertex3d::from_position_normal([1.0, 2.0, 3.0], [0.0, 1.0, 0.0]),
            Vertex3d::from_position_normal([-1.0, -1.0, -1.0], [0.0, 1.0, 0.0]),
        ];
        let geom = RawGeometry::new(vertices, vec![0, 1, 2]);

        let (min, max) = geom.bounds();
        assert_eq!(min, Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn raw_geometry_recenter() {
        let vertices = vec![
            Vertex3d::from_position_normal([2.0, 2.0, 2.0], [0.0, 1.0, 0.0]),
            Vertex3d::from_position_normal([4.0, 4.0, 4.0], [0.0, 1.0, 0.0]),
        ];
        let mut geom = RawGeometry::new(vertices, vec![0, 1, 0]);

        geom.recenter();

        let center = geom.center();
        assert!(center.x.abs() < 0.001);
        assert!(center.y.abs() < 0.001);
        assert!(center.z.abs() < 0.001);
    }

    #[test]
    fn normalize_fits_unit_cube() {
        let mut geom = RawGeometry::plane(8.0);
        geom.normalize();

        let size = geom.size();
        assert!((size.x - 1.0).abs() < 1e-6);
        assert!((size.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pyramid_has_six_faces() {
        let pyramid = RawGeometry::pyramid();
        assert_eq!(pyramid.vertices.len(), 5);
        assert_eq!(pyramid.indices.len(), 18);

        // Smooth normals are unit length everywhere.
        for v in &pyramid.vertices {
            let len = Vec3::from(v.normal).length();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn triangle_faces_forward() {
        let tri = RawGeometry::triangle();
        assert_eq!(tri.indices, vec![0, 1, 2]);
        for v in &tri.vertices {
            assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        }
    }
}
