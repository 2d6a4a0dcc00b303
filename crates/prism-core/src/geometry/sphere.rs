use std::f32::consts::PI;

use super::{Color, MeshData, Vertex};
use crate::error::GeometryError;

/// UV sphere on a `(latitude_bands + 1) x (longitude_bands + 1)` parametric
/// grid, centered at the origin.
///
/// Position and normal share a direction: `normal = position / radius`.
/// The seam column at `phi = 0` is duplicated at `phi = 2*pi` and the pole
/// rows collapse to a single point per longitude sample; both are fine for
/// shading and deliberate (texture-seam-free UVs are out of scope).
pub fn sphere(
    radius: f32,
    latitude_bands: u32,
    longitude_bands: u32,
    color: Color,
) -> Result<MeshData, GeometryError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeometryError::InvalidRadius(radius));
    }
    if latitude_bands < 2 || longitude_bands < 3 {
        return Err(GeometryError::InvalidBands {
            latitude: latitude_bands,
            longitude: longitude_bands,
        });
    }
    let vertex_count = (latitude_bands as usize + 1) * (longitude_bands as usize + 1);
    if vertex_count > u16::MAX as usize + 1 {
        return Err(GeometryError::IndexOverflow(vertex_count));
    }

    let mut vertices = Vec::with_capacity(vertex_count);
    for lat in 0..=latitude_bands {
        let theta = lat as f32 * PI / latitude_bands as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for lon in 0..=longitude_bands {
            let phi = lon as f32 * 2.0 * PI / longitude_bands as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let x = cos_phi * sin_theta;
            let y = cos_theta;
            let z = sin_phi * sin_theta;

            vertices.push(Vertex::new(
                [radius * x, radius * y, radius * z],
                color,
                [x, y, z],
            ));
        }
    }

    let mut indices =
        Vec::with_capacity(latitude_bands as usize * longitude_bands as usize * 6);
    for lat in 0..latitude_bands {
        for lon in 0..longitude_bands {
            let first = (lat * (longitude_bands + 1) + lon) as u16;
            let second = first + longitude_bands as u16 + 1;

            indices.extend_from_slice(&[first, second, first + 1]);
            indices.extend_from_slice(&[second, second + 1, first + 1]);
        }
    }

    let mesh = MeshData::new(vertices, indices);
    log::debug!(
        "uv sphere r={} ({}x{} bands): {} vertices, {} triangles",
        radius,
        latitude_bands,
        longitude_bands,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const BLUE: Color = [0.0, 0.0, 1.0, 1.0];

    #[test]
    fn test_sphere_4x4_counts() {
        let mesh = sphere(1.0, 4, 4, BLUE).unwrap();
        // (4+1)*(4+1) vertices, 4*4*6 indices
        assert_eq!(mesh.vertex_count(), 25);
        assert_eq!(mesh.index_count(), 96);
    }

    #[test]
    fn test_sphere_indices_in_range() {
        let mesh = sphere(2.0, 8, 12, BLUE).unwrap();
        assert!(
            mesh.indices()
                .iter()
                .all(|&i| (i as usize) < mesh.vertex_count())
        );
    }

    #[test]
    fn test_sphere_normals_unit_and_radial() {
        let radius = 2.5;
        let mesh = sphere(radius, 6, 8, BLUE).unwrap();
        for v in mesh.vertices() {
            let n = Vec3::from(v.normal);
            let p = Vec3::from(v.position);
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!((p / radius - n).length() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_positions_on_radius() {
        let radius = 3.0;
        let mesh = sphere(radius, 5, 7, BLUE).unwrap();
        for v in mesh.vertices() {
            assert!((Vec3::from(v.position).length() - radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_sphere_rejects_bad_parameters() {
        assert!(matches!(
            sphere(0.0, 4, 4, BLUE),
            Err(GeometryError::InvalidRadius(_))
        ));
        assert!(matches!(
            sphere(1.0, 4, 0, BLUE),
            Err(GeometryError::InvalidBands { .. })
        ));
        assert!(matches!(
            sphere(1.0, 1, 8, BLUE),
            Err(GeometryError::InvalidBands { .. })
        ));
        assert!(matches!(
            sphere(1.0, 400, 400, BLUE),
            Err(GeometryError::IndexOverflow(_))
        ));
    }
}
