pub mod cube;
pub mod icosphere;
pub mod sphere;

pub use cube::{CubeColors, cube};
pub use icosphere::icosphere;
pub use sphere::sphere;

use bytemuck::{Pod, Zeroable};

/// RGBA color, each channel in 0..1.
pub type Color = [f32; 4];

/// A single vertex: position, color, normal.
///
/// `repr(C)` + `Pod` so a `&[Vertex]` slice casts directly to the bytes the
/// GPU vertex buffer expects.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: Color,
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: [f32; 3], color: Color, normal: [f32; 3]) -> Self {
        Self {
            position,
            color,
            normal,
        }
    }
}

/// CPU-side mesh: a vertex list plus a u16 triangle index list (CCW).
///
/// Geometry is fixed after construction; the only sanctioned mutation is
/// replacing the whole mesh through [`crate::Object3D::set_mesh`].
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
}

impl MeshData {
    /// Every index must reference an existing vertex.
    pub(crate) fn new(vertices: Vec<Vertex>, indices: Vec<u16>) -> Self {
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < vertices.len()),
            "index out of range"
        );
        debug_assert!(indices.len() % 3 == 0, "indices must form whole triangles");
        Self { vertices, indices }
    }

    /// Read-only view of the vertex list.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Read-only view of the triangle index list.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size() {
        // 10 floats * 4 bytes, no padding
        assert_eq!(std::mem::size_of::<Vertex>(), 40);
    }

    #[test]
    fn test_vertex_new() {
        let v = Vertex::new([1.0, 2.0, 3.0], [1.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0]);
        assert_eq!(v.position, [1.0, 2.0, 3.0]);
        assert_eq!(v.color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(v.normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_mesh_counts() {
        let v = Vertex::new([0.0; 3], [1.0; 4], [0.0, 0.0, 1.0]);
        let mesh = MeshData::new(vec![v; 3], vec![0, 1, 2]);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }
}
