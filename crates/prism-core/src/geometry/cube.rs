use super::{Color, MeshData, Vertex};
use crate::error::GeometryError;

/// Face coloring for [`cube`]: one color broadcast to all six faces, or an
/// independent color per face in front/back/top/bottom/right/left order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CubeColors {
    Uniform(Color),
    PerFace([Color; 6]),
}

impl From<Color> for CubeColors {
    fn from(color: Color) -> Self {
        CubeColors::Uniform(color)
    }
}

impl CubeColors {
    fn faces(self) -> [Color; 6] {
        match self {
            CubeColors::Uniform(c) => [c; 6],
            CubeColors::PerFace(faces) => faces,
        }
    }
}

/// Two CCW triangles per face, four vertices each.
const INDICES: [u16; 36] = [
    0, 1, 2, 2, 3, 0, // front
    4, 5, 6, 6, 7, 4, // back
    8, 9, 10, 10, 11, 8, // top
    12, 13, 14, 14, 15, 12, // bottom
    16, 17, 18, 18, 19, 16, // right
    20, 21, 22, 22, 23, 20, // left
];

/// Axis-aligned cuboid centered at the origin: `length` along Z, `width`
/// along X, `height` along Y.
///
/// 24 vertices (4 per face, unshared so each face keeps its own flat normal)
/// and 36 indices.
pub fn cube(
    length: f32,
    width: f32,
    height: f32,
    colors: impl Into<CubeColors>,
) -> Result<MeshData, GeometryError> {
    let ok = |v: f32| v.is_finite() && v > 0.0;
    if !(ok(length) && ok(width) && ok(height)) {
        return Err(GeometryError::InvalidExtent {
            length,
            width,
            height,
        });
    }

    let hl = length / 2.0;
    let hw = width / 2.0;
    let hh = height / 2.0;
    let c = colors.into().faces();

    let vertices = vec![
        // front (+Z)
        Vertex::new([-hw, -hh, hl], c[0], [0.0, 0.0, 1.0]),
        Vertex::new([hw, -hh, hl], c[0], [0.0, 0.0, 1.0]),
        Vertex::new([hw, hh, hl], c[0], [0.0, 0.0, 1.0]),
        Vertex::new([-hw, hh, hl], c[0], [0.0, 0.0, 1.0]),
        // back (-Z)
        Vertex::new([-hw, -hh, -hl], c[1], [0.0, 0.0, -1.0]),
        Vertex::new([hw, -hh, -hl], c[1], [0.0, 0.0, -1.0]),
        Vertex::new([hw, hh, -hl], c[1], [0.0, 0.0, -1.0]),
        Vertex::new([-hw, hh, -hl], c[1], [0.0, 0.0, -1.0]),
        // top (+Y)
        Vertex::new([-hw, hh, -hl], c[2], [0.0, 1.0, 0.0]),
        Vertex::new([hw, hh, -hl], c[2], [0.0, 1.0, 0.0]),
        Vertex::new([hw, hh, hl], c[2], [0.0, 1.0, 0.0]),
        Vertex::new([-hw, hh, hl], c[2], [0.0, 1.0, 0.0]),
        // bottom (-Y)
        Vertex::new([-hw, -hh, -hl], c[3], [0.0, -1.0, 0.0]),
        Vertex::new([hw, -hh, -hl], c[3], [0.0, -1.0, 0.0]),
        Vertex::new([hw, -hh, hl], c[3], [0.0, -1.0, 0.0]),
        Vertex::new([-hw, -hh, hl], c[3], [0.0, -1.0, 0.0]),
        // right (+X)
        Vertex::new([hw, -hh, -hl], c[4], [1.0, 0.0, 0.0]),
        Vertex::new([hw, hh, -hl], c[4], [1.0, 0.0, 0.0]),
        Vertex::new([hw, hh, hl], c[4], [1.0, 0.0, 0.0]),
        Vertex::new([hw, -hh, hl], c[4], [1.0, 0.0, 0.0]),
        // left (-X)
        Vertex::new([-hw, -hh, -hl], c[5], [-1.0, 0.0, 0.0]),
        Vertex::new([-hw, hh, -hl], c[5], [-1.0, 0.0, 0.0]),
        Vertex::new([-hw, hh, hl], c[5], [-1.0, 0.0, 0.0]),
        Vertex::new([-hw, -hh, hl], c[5], [-1.0, 0.0, 0.0]),
    ];

    let mesh = MeshData::new(vertices, INDICES.to_vec());
    log::debug!(
        "cube {}x{}x{}: {} vertices, {} triangles",
        length,
        width,
        height,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const RED: Color = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_cube_counts() {
        let mesh = cube(1.0, 1.0, 1.0, RED).unwrap();
        // 6 faces * 4 vertices, 6 faces * 2 triangles * 3 indices
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
    }

    #[test]
    fn test_cube_six_face_normals_four_vertices_each() {
        let mesh = cube(2.0, 2.0, 2.0, RED).unwrap();
        let mut counts: HashMap<[i8; 3], usize> = HashMap::new();
        for v in mesh.vertices() {
            let key = [v.normal[0] as i8, v.normal[1] as i8, v.normal[2] as i8];
            *counts.entry(key).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n == 4));
    }

    #[test]
    fn test_cube_indices_in_range() {
        let mesh = cube(1.0, 2.0, 3.0, RED).unwrap();
        assert!(
            mesh.indices()
                .iter()
                .all(|&i| (i as usize) < mesh.vertex_count())
        );
    }

    #[test]
    fn test_cube_uniform_color_broadcast() {
        let mesh = cube(1.0, 1.0, 1.0, RED).unwrap();
        assert!(mesh.vertices().iter().all(|v| v.color == RED));
    }

    #[test]
    fn test_cube_per_face_colors() {
        let faces = [
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 1.0],
            [1.0, 1.0, 0.0, 1.0],
            [1.0, 0.0, 1.0, 1.0],
            [0.0, 1.0, 1.0, 1.0],
        ];
        let mesh = cube(1.0, 1.0, 1.0, CubeColors::PerFace(faces)).unwrap();
        for (face, color) in faces.iter().enumerate() {
            for v in &mesh.vertices()[face * 4..face * 4 + 4] {
                assert_eq!(v.color, *color);
            }
        }
    }

    #[test]
    fn test_cube_extents_respected() {
        let mesh = cube(4.0, 2.0, 6.0, RED).unwrap();
        // front face sits at z = length / 2
        assert_eq!(mesh.vertices()[0].position, [-1.0, -3.0, 2.0]);
    }

    #[test]
    fn test_cube_rejects_bad_extent() {
        assert!(matches!(
            cube(0.0, 1.0, 1.0, RED),
            Err(GeometryError::InvalidExtent { .. })
        ));
        assert!(cube(1.0, f32::NAN, 1.0, RED).is_err());
        assert!(cube(1.0, 1.0, -2.0, RED).is_err());
    }
}
