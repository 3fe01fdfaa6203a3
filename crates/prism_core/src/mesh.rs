//! Polygonal meshes.
//!
//! A mesh is an ordered list of triangular faces that share one material.
//! Faces do not carry a material of their own; shading always reads it from
//! the owning mesh.

use prism_math::Vec3;

use crate::{Material, SceneError, SceneResult};

/// Faces whose cross product is shorter than this are rejected as degenerate.
const MIN_AREA: f32 = 1e-12;

/// A triangular face with a precomputed outward unit normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon {
    vertices: [Vec3; 3],
    normal: Vec3,
}

impl Polygon {
    /// Create a face from three vertices.
    ///
    /// The normal follows the right-hand rule: `(v1 - v0) x (v2 - v0)`.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> SceneResult<Self> {
        for vertex in [v0, v1, v2] {
            if !vertex.is_finite() {
                return Err(SceneError::NonFinite {
                    what: "Polygon vertex",
                    value: vertex,
                });
            }
        }

        let cross = (v1 - v0).cross(v2 - v0);
        if !(cross.length_squared() > MIN_AREA) {
            return Err(SceneError::DegeneratePolygon);
        }

        Ok(Self {
            vertices: [v0, v1, v2],
            normal: cross.normalize(),
        })
    }

    /// Create a face with an explicit normal, e.g. to flip which side faces out.
    pub fn with_normal(v0: Vec3, v1: Vec3, v2: Vec3, normal: Vec3) -> SceneResult<Self> {
        let mut polygon = Self::new(v0, v1, v2)?;
        polygon.normal = normal.try_normalize().ok_or(SceneError::DegeneratePolygon)?;
        Ok(polygon)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }

    /// Outward unit normal.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

/// An ordered collection of faces sharing one material.
#[derive(Clone, Debug)]
pub struct Mesh {
    faces: Vec<Polygon>,
    material: Material,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new(material: Material) -> Self {
        Self {
            faces: Vec::new(),
            material,
        }
    }

    /// Build a mesh from vertex positions and triangle indices (every 3
    /// indices form a face).
    ///
    /// Zero-area faces are skipped with a warning; out-of-range indices are
    /// an error.
    pub fn from_indexed(
        positions: &[Vec3],
        indices: &[u32],
        material: Material,
    ) -> SceneResult<Self> {
        if indices.len() % 3 != 0 {
            return Err(SceneError::IncompleteTriangle(indices.len()));
        }

        let vertex = |index: u32| {
            positions
                .get(index as usize)
                .copied()
                .ok_or(SceneError::IndexOutOfRange {
                    index,
                    len: positions.len(),
                })
        };

        let mut mesh = Self::new(material);
        for (face_index, face) in indices.chunks_exact(3).enumerate() {
            let (v0, v1, v2) = (vertex(face[0])?, vertex(face[1])?, vertex(face[2])?);
            match Polygon::new(v0, v1, v2) {
                Ok(polygon) => mesh.faces.push(polygon),
                Err(SceneError::DegeneratePolygon) => {
                    log::warn!("Skipping degenerate face {}", face_index);
                }
                Err(e) => return Err(e),
            }
        }

        log::debug!(
            "Built mesh with {} faces from {} positions",
            mesh.faces.len(),
            positions.len()
        );
        Ok(mesh)
    }

    /// Axis-aligned rectangle split into two faces, wound `a, b, c, d`.
    pub fn quad(a: Vec3, b: Vec3, c: Vec3, d: Vec3, material: Material) -> SceneResult<Self> {
        Self::from_indexed(&[a, b, c, d], &[0, 1, 2, 0, 2, 3], material)
    }

    pub fn faces(&self) -> &[Polygon] {
        &self.faces
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Get the number of faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    #[test]
    fn test_polygon_normal() {
        let p = Polygon::new(Vec3::ZERO, Vec3::X, Vec3::Y).unwrap();
        assert!((p.normal() - Vec3::Z).length() < 1e-6);

        // Reversed winding flips the normal
        let q = Polygon::new(Vec3::ZERO, Vec3::Y, Vec3::X).unwrap();
        assert!((q.normal() + Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_polygon_explicit_normal() {
        let p = Polygon::with_normal(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(0.0, 0.0, -4.0))
            .unwrap();
        assert_eq!(p.normal(), Vec3::NEG_Z);
    }

    #[test]
    fn test_degenerate_polygon() {
        let collinear = Polygon::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        assert!(matches!(collinear, Err(SceneError::DegeneratePolygon)));
    }

    #[test]
    fn test_non_finite_vertex_rejected() {
        let p = Polygon::new(Vec3::ZERO, Vec3::new(f32::INFINITY, 0.0, 0.0), Vec3::Y);
        assert!(matches!(p, Err(SceneError::NonFinite { .. })));

        // Not skipped like a degenerate face
        let positions = [Vec3::ZERO, Vec3::X, Vec3::new(0.0, f32::NAN, 0.0)];
        let err = Mesh::from_indexed(&positions, &[0, 1, 2], Material::default()).unwrap_err();
        assert!(matches!(err, SceneError::NonFinite { .. }));
    }

    #[test]
    fn test_mesh_from_indexed() {
        let positions = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let mesh =
            Mesh::from_indexed(&positions, &[0, 1, 2, 0, 2, 3], Material::matte(Rgb::WHITE))
                .unwrap();

        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.faces()[1].vertices()[2], positions[3]);
        assert_eq!(mesh.material().color, Rgb::WHITE);
    }

    #[test]
    fn test_mesh_skips_degenerate_faces() {
        let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
        let mesh =
            Mesh::from_indexed(&positions, &[0, 1, 2, 0, 0, 1], Material::default()).unwrap();
        assert_eq!(mesh.len(), 1);
    }

    #[test]
    fn test_mesh_index_errors() {
        let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];

        let err = Mesh::from_indexed(&positions, &[0, 1, 7], Material::default()).unwrap_err();
        assert!(matches!(err, SceneError::IndexOutOfRange { index: 7, len: 3 }));

        let err = Mesh::from_indexed(&positions, &[0, 1], Material::default()).unwrap_err();
        assert!(matches!(err, SceneError::IncompleteTriangle(2)));
    }

    #[test]
    fn test_quad() {
        let mesh = Mesh::quad(
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
            Material::default(),
        )
        .unwrap();

        assert_eq!(mesh.len(), 2);
        for face in mesh.faces() {
            assert!((face.normal() - Vec3::Z).length() < 1e-6);
        }
    }
}
