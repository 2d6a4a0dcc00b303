use glam::{Mat4, Vec3};

use crate::geometry::{MeshData, Vertex};

/// A single renderable object: generated geometry plus a translate/rotate
/// transform.
///
/// `model_matrix` is a pure function of `position` and `rotation`
/// (`T * Rx * Ry * Rz`, intrinsic Euler order) and is recomputed on every
/// mutation, never accumulated. Inputs are not validated; NaN/Inf propagate.
#[derive(Debug, Clone)]
pub struct Object3D {
    mesh: MeshData,
    position: Vec3,
    rotation: Vec3,
    model_matrix: Mat4,
}

impl Object3D {
    pub fn new(mesh: MeshData) -> Self {
        Self {
            mesh,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            model_matrix: Mat4::IDENTITY,
        }
    }

    fn update_model_matrix(&mut self) {
        self.model_matrix = Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z);
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vec3::new(x, y, z);
        self.update_model_matrix();
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Euler angles in radians, applied X then Y then Z.
    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Vec3::new(x, y, z);
        self.update_model_matrix();
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Additive translation.
    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.position += Vec3::new(dx, dy, dz);
        self.update_model_matrix();
    }

    /// Additive Euler rotation, radians.
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.rotation += Vec3::new(dx, dy, dz);
        self.update_model_matrix();
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.model_matrix
    }

    /// Replace the geometry. The only way to change a mesh after
    /// construction; the transform is kept.
    pub fn set_mesh(&mut self, mesh: MeshData) {
        self.mesh = mesh;
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    pub fn vertices(&self) -> &[Vertex] {
        self.mesh.vertices()
    }

    pub fn indices(&self) -> &[u16] {
        self.mesh.indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::cube;

    fn unit_cube() -> MeshData {
        cube(1.0, 1.0, 1.0, [1.0, 1.0, 1.0, 1.0]).unwrap()
    }

    #[test]
    fn test_new_is_identity() {
        let obj = Object3D::new(unit_cube());
        assert_eq!(obj.position(), Vec3::ZERO);
        assert_eq!(obj.rotation(), Vec3::ZERO);
        assert_eq!(obj.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_model_matrix_round_trip() {
        let mut obj = Object3D::new(unit_cube());
        obj.set_position(1.0, -2.0, 3.0);
        obj.set_rotation(0.3, 0.7, -0.2);

        let expected = Mat4::from_translation(Vec3::new(1.0, -2.0, 3.0))
            * Mat4::from_rotation_x(0.3)
            * Mat4::from_rotation_y(0.7)
            * Mat4::from_rotation_z(-0.2);
        // pure function of current state, so bit-exact
        assert_eq!(obj.model_matrix(), expected);
    }

    #[test]
    fn test_translate_is_additive() {
        let mut obj = Object3D::new(unit_cube());
        obj.set_position(1.0, 0.0, 0.0);
        obj.translate(0.5, 2.0, -1.0);
        assert_eq!(obj.position(), Vec3::new(1.5, 2.0, -1.0));
        assert_eq!(
            obj.model_matrix(),
            Mat4::from_translation(Vec3::new(1.5, 2.0, -1.0))
        );
    }

    #[test]
    fn test_rotate_is_additive() {
        let mut obj = Object3D::new(unit_cube());
        obj.rotate(0.1, 0.0, 0.0);
        obj.rotate(0.1, 0.2, 0.0);
        let r = obj.rotation();
        assert!((r.x - 0.2).abs() < 1e-6);
        assert!((r.y - 0.2).abs() < 1e-6);
        assert_eq!(r.z, 0.0);
    }

    #[test]
    fn test_set_mesh_keeps_transform() {
        let mut obj = Object3D::new(unit_cube());
        obj.set_position(0.0, 1.0, 0.0);
        let before = obj.model_matrix();
        obj.set_mesh(cube(2.0, 2.0, 2.0, [1.0, 0.0, 0.0, 1.0]).unwrap());
        assert_eq!(obj.model_matrix(), before);
        assert_eq!(obj.vertices()[0].color, [1.0, 0.0, 0.0, 1.0]);
    }
}
