use glam::{Mat4, Quat, Vec3};

/// Radians of orbit per unit of pointer delta.
const ROTATE_SENSITIVITY: f32 = 0.01;

/// Velocity retained after each `update` call. Applied once per frame
/// regardless of `dt`, so the effective drag is frame-rate dependent;
/// kept that way on purpose to match the observed behavior.
const VELOCITY_DAMPING: f32 = 0.9;

/// Perspective camera with damped inertial movement and orbit rotation.
///
/// Movement is impulse based: `move_*` only accumulate into `velocity`,
/// and the single per-frame [`Camera::update`] integrates it. That keeps
/// held-key input independent of how often the handlers fire, and lets
/// several directions superpose before one integration step.
#[derive(Debug, Clone)]
pub struct Camera {
    projection_matrix: Mat4,
    view_matrix: Mat4,
    /// Model matrix of the rendered object, injected per frame.
    model_matrix: Mat4,
    position: Vec3,
    target: Vec3,
    up: Vec3,
    velocity: Vec3,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            projection_matrix: Mat4::perspective_rh(fov, aspect, near, far),
            view_matrix: Mat4::IDENTITY,
            model_matrix: Mat4::IDENTITY,
            position: Vec3::new(0.0, 0.0, 2.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            velocity: Vec3::ZERO,
            fov,
            aspect,
            near,
            far,
        };
        camera.update_view_matrix();
        camera
    }

    fn update_view_matrix(&mut self) {
        self.view_matrix = Mat4::look_at_rh(self.position, self.target, self.up);
    }

    /// Orbit the gaze around the fixed eye: yaw `dx * 0.01` rad about `up`,
    /// then pitch `dy * 0.01` rad about the gaze-right axis. Preserves the
    /// eye-to-target distance.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        let mut dir = self.target - self.position;

        let yaw = Quat::from_axis_angle(self.up, dx * ROTATE_SENSITIVITY);
        dir = yaw * dir;

        // gaze parallel to up has no defined pitch axis; skip the pitch
        if let Some(axis) = dir.cross(self.up).try_normalize() {
            let pitch = Quat::from_axis_angle(axis, dy * ROTATE_SENSITIVITY);
            dir = pitch * dir;
        }

        self.target = self.position + dir;
        self.update_view_matrix();
    }

    /// Accumulate an impulse along the gaze direction. Position is only
    /// touched by [`Camera::update`].
    pub fn move_forward(&mut self, distance: f32) {
        let forward = (self.target - self.position).normalize();
        self.velocity += forward * distance;
    }

    pub fn move_backward(&mut self, distance: f32) {
        self.move_forward(-distance);
    }

    /// Accumulate an impulse along `up x forward`.
    pub fn move_left(&mut self, distance: f32) {
        let forward = (self.target - self.position).normalize();
        let left = self.up.cross(forward).normalize();
        self.velocity += left * distance;
    }

    pub fn move_right(&mut self, distance: f32) {
        self.move_left(-distance);
    }

    /// Integrate one frame: translate the eye-target pair rigidly by
    /// `velocity * dt`, then damp the velocity.
    pub fn update(&mut self, dt: f32) {
        let step = self.velocity * dt;
        self.position += step;
        self.target += step;
        self.velocity *= VELOCITY_DAMPING;
        self.update_view_matrix();
    }

    /// Re-aim the camera at `target` without moving the eye.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
        self.update_view_matrix();
    }

    /// Model matrix of the object being rendered, folded into
    /// [`Camera::final_matrix`].
    pub fn set_model_matrix(&mut self, matrix: Mat4) {
        self.model_matrix = matrix;
    }

    /// `projection * view * model`, computed fresh on every call.
    pub fn final_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix * self.model_matrix
    }

    /// Rebuild the projection for a new aspect ratio (resize path).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.projection_matrix = Mat4::perspective_rh(self.fov, aspect, self.near, self.far);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    fn camera() -> Camera {
        Camera::new(FRAC_PI_4, 16.0 / 9.0, 0.1, 10.0)
    }

    #[test]
    fn test_defaults() {
        let cam = camera();
        assert_eq!(cam.position(), Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(cam.target(), Vec3::ZERO);
        assert_eq!(cam.velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_rotate_preserves_gaze_distance() {
        let mut cam = camera();
        let before = (cam.target() - cam.position()).length();
        cam.rotate(35.0, -18.0);
        cam.rotate(-120.0, 4.0);
        let after = (cam.target() - cam.position()).length();
        assert!((before - after).abs() < 1e-5);
    }

    #[test]
    fn test_rotate_keeps_eye_fixed() {
        let mut cam = camera();
        let eye = cam.position();
        cam.rotate(50.0, 25.0);
        assert_eq!(cam.position(), eye);
        assert_ne!(cam.target(), Vec3::ZERO);
    }

    #[test]
    fn test_move_is_impulse_only() {
        let mut cam = camera();
        let position = cam.position();
        let view = cam.view_matrix();
        cam.move_forward(1.0);
        // no integration yet: position and view untouched
        assert_eq!(cam.position(), position);
        assert_eq!(cam.view_matrix(), view);
        assert!(cam.velocity().length() > 0.0);
    }

    #[test]
    fn test_opposite_impulses_cancel() {
        let mut cam = camera();
        cam.move_forward(0.5);
        cam.move_backward(0.5);
        cam.move_left(0.25);
        cam.move_right(0.25);
        assert!(cam.velocity().length() < 1e-6);
    }

    #[test]
    fn test_update_translates_pair_rigidly() {
        let mut cam = camera();
        cam.move_forward(1.0);
        let separation = (cam.target() - cam.position()).length();
        cam.update(0.016);
        // gaze distance unchanged, eye moved toward the target
        assert!(((cam.target() - cam.position()).length() - separation).abs() < 1e-5);
        assert!(cam.position().z < 2.0);
    }

    #[test]
    fn test_velocity_decays_geometrically() {
        let mut cam = camera();
        cam.move_forward(1.0);
        let v0 = cam.velocity().length();
        for k in 1..=20 {
            cam.update(0.016);
            let expected = v0 * 0.9_f32.powi(k);
            assert!((cam.velocity().length() - expected).abs() < 1e-5);
        }
        assert!(cam.velocity().length() < v0 * 0.2);
    }

    #[test]
    fn test_update_without_input_is_stationary() {
        let mut cam = camera();
        let position = cam.position();
        for _ in 0..10 {
            cam.update(0.016);
        }
        assert_eq!(cam.position(), position);
    }

    #[test]
    fn test_final_matrix_composition() {
        let mut cam = camera();
        let model = Mat4::from_translation(Vec3::new(0.5, 0.0, -1.0));
        cam.set_model_matrix(model);

        let expected = Mat4::perspective_rh(FRAC_PI_4, 16.0 / 9.0, 0.1, 10.0)
            * Mat4::look_at_rh(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, Vec3::Y)
            * model;
        assert_eq!(cam.final_matrix(), expected);
    }

    #[test]
    fn test_set_aspect_rebuilds_projection() {
        let mut cam = camera();
        cam.set_aspect(1.0);
        assert_eq!(
            cam.projection_matrix(),
            Mat4::perspective_rh(FRAC_PI_4, 1.0, 0.1, 10.0)
        );
    }

    #[test]
    fn test_look_at_moves_target_only() {
        let mut cam = camera();
        cam.look_at(Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(cam.target(), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(cam.position(), Vec3::new(0.0, 0.0, 2.0));
    }
}
