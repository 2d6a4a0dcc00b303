use std::collections::HashMap;

use glam::Vec3;

use super::{Color, MeshData, Vertex};
use crate::error::GeometryError;

/// Level 7 would need 163842 vertices, past the end of the u16 index space.
const MAX_SUBDIVISIONS: u32 = 6;

const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

/// The 20 faces of the canonical icosahedron.
const BASE_INDICES: [u16; 60] = [
    0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, //
    1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7, 1, 8, //
    3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, //
    4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9, 8, 1,
];

/// The 12 icosahedron vertices, built from the golden ratio and projected
/// onto the sphere of the given radius.
fn icosahedron_vertices(radius: f32) -> Vec<Vertex> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let corners = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];

    corners
        .iter()
        .map(|v| {
            let dir = v.normalize();
            Vertex::new((dir * radius).to_array(), WHITE, dir.to_array())
        })
        .collect()
}

/// Midpoint lookup for one subdivision pass, keyed by the unordered pair of
/// source indices so the two triangles sharing an edge get the same vertex.
fn midpoint_index(
    cache: &mut HashMap<(u16, u16), u16>,
    vertices: &mut Vec<Vertex>,
    v1: u16,
    v2: u16,
    radius: f32,
) -> u16 {
    let key = if v1 < v2 { (v1, v2) } else { (v2, v1) };
    if let Some(&index) = cache.get(&key) {
        return index;
    }

    let p1 = Vec3::from(vertices[v1 as usize].position);
    let p2 = Vec3::from(vertices[v2 as usize].position);
    let dir = ((p1 + p2) * 0.5).normalize();

    let index = vertices.len() as u16;
    vertices.push(Vertex::new((dir * radius).to_array(), WHITE, dir.to_array()));
    cache.insert(key, index);
    index
}

/// One subdivision pass: each face `(v1, v2, v3)` becomes four children
/// `(v1,a,c) (v2,b,a) (v3,c,b) (a,b,c)` where `a`, `b`, `c` are the
/// re-projected midpoints of `v1v2`, `v2v3`, `v3v1`.
fn subdivide(vertices: &mut Vec<Vertex>, indices: &[u16], radius: f32) -> Vec<u16> {
    let mut cache = HashMap::new();
    let mut next = Vec::with_capacity(indices.len() * 4);

    for face in indices.chunks_exact(3) {
        let (v1, v2, v3) = (face[0], face[1], face[2]);

        let a = midpoint_index(&mut cache, vertices, v1, v2, radius);
        let b = midpoint_index(&mut cache, vertices, v2, v3, radius);
        let c = midpoint_index(&mut cache, vertices, v3, v1, radius);

        next.extend_from_slice(&[v1, a, c]);
        next.extend_from_slice(&[v2, b, a]);
        next.extend_from_slice(&[v3, c, b]);
        next.extend_from_slice(&[a, b, c]);
    }

    next
}

/// Icosphere: recursively subdivided icosahedron, re-projected onto the
/// sphere surface after every pass.
///
/// The midpoint cache keeps the mesh watertight: an edge shared by two
/// faces is split exactly once, so no duplicate vertices (and no cracks)
/// appear along shared edges. The uniform `color` is applied to every
/// vertex once tessellation is done.
pub fn icosphere(
    radius: f32,
    subdivisions: u32,
    color: Color,
) -> Result<MeshData, GeometryError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeometryError::InvalidRadius(radius));
    }
    if subdivisions > MAX_SUBDIVISIONS {
        return Err(GeometryError::TooManySubdivisions(subdivisions));
    }

    let mut vertices = icosahedron_vertices(radius);
    let mut indices = BASE_INDICES.to_vec();

    for _ in 0..subdivisions {
        indices = subdivide(&mut vertices, &indices, radius);
    }

    for v in &mut vertices {
        v.color = color;
    }

    let mesh = MeshData::new(vertices, indices);
    log::debug!(
        "icosphere r={} level {}: {} vertices, {} triangles",
        radius,
        subdivisions,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}
