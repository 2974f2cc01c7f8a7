use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::renderer::camera::OrbitCamera;

/// Orbit-control widget: rotate / pan / dolly requests accumulate from
/// input and are fed into the camera over several frames with exponential
/// damping, giving the familiar glide-to-rest feel.
///
/// Button mapping is the caller's business; this type only consumes
/// pixel deltas and wheel ticks.
pub struct OrbitControls {
    /// Pending rotation (x: azimuth, y: polar), radians.
    rotate_delta: Vec2,
    /// Pending pan, pixels.
    pan_delta: Vec2,
    /// Pending multiplicative distance change (1.0 = neutral).
    dolly_factor: f32,
    /// Fraction of the pending delta applied per frame (0 disables damping).
    pub damping: f32,
    /// Radians of azimuth per pixel of drag.
    pub rotate_speed: f32,
    /// World units per pixel of pan at 100 units of distance.
    pub pan_speed: f32,
    /// Dolly never brings the eye closer to the target than this.
    pub min_distance: f32,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self {
            rotate_delta: Vec2::ZERO,
            pan_delta: Vec2::ZERO,
            dolly_factor: 1.0,
            damping: 0.05,
            rotate_speed: 0.005,
            pan_speed: 0.1,
            min_distance: 0.5,
        }
    }

    /// Queue a rotation from a pointer drag (pixels).
    pub fn rotate(&mut self, delta_px: Vec2) {
        self.rotate_delta += delta_px * self.rotate_speed;
    }

    /// Queue a pan from a pointer drag (pixels).
    pub fn pan(&mut self, delta_px: Vec2) {
        self.pan_delta += delta_px;
    }

    /// Queue a dolly from a wheel tick; positive moves away.
    pub fn dolly(&mut self, wheel: f32) {
        self.dolly_factor *= 1.001f32.powf(wheel);
    }

    /// Whether any requested motion is still being played out.
    pub fn is_settled(&self) -> bool {
        self.rotate_delta.length() < 1e-5
            && self.pan_delta.length() < 1e-4
            && (self.dolly_factor - 1.0).abs() < 1e-6
    }

    /// Apply one frame of pending motion to the camera.
    ///
    /// With damping enabled only a fraction of each pending delta is
    /// consumed per frame; the geometric series still sums to the full
    /// requested amount.
    pub fn update(&mut self, camera: &mut OrbitCamera) {
        let (apply, keep) = if self.damping > 0.0 {
            (self.damping, 1.0 - self.damping)
        } else {
            (1.0, 0.0)
        };

        let offset = camera.eye - camera.target;
        let mut radius = offset.length().max(1e-4);
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta -= self.rotate_delta.x * apply;
        phi = (phi - self.rotate_delta.y * apply).clamp(0.01, PI - 0.01);

        // Dolly is applied in full immediately; the wheel already arrives
        // in small increments.
        radius = (radius * self.dolly_factor).max(self.min_distance);
        self.dolly_factor = 1.0;

        // Pan in camera space, scaled with distance so screen speed stays
        // constant.
        let pan_step = self.pan_delta * apply;
        if pan_step.length_squared() > 0.0 {
            let forward = (camera.target - camera.eye).normalize_or_zero();
            let right = forward.cross(camera.up).normalize_or_zero();
            let cam_up = right.cross(forward);
            let factor = self.pan_speed * radius / 100.0;
            camera.target += (right * -pan_step.x + cam_up * pan_step.y) * factor;
        }

        let sin_phi = phi.sin();
        camera.eye = camera.target
            + Vec3::new(
                radius * sin_phi * theta.sin(),
                radius * phi.cos(),
                radius * sin_phi * theta.cos(),
            );

        self.rotate_delta *= keep;
        self.pan_delta *= keep;
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(Vec3::new(0.0, 0.0, 40.0), Vec3::ZERO, 45f32.to_radians(), 1.0)
    }

    #[test]
    fn rotation_preserves_distance() {
        let mut cam = camera();
        let mut controls = OrbitControls::new();
        controls.rotate(Vec2::new(50.0, 20.0));
        for _ in 0..200 {
            controls.update(&mut cam);
        }
        assert!((cam.distance_to_target() - 40.0).abs() < 1e-3);
    }

    #[test]
    fn damped_rotation_settles_at_requested_angle() {
        let mut cam = camera();
        let mut controls = OrbitControls::new();
        controls.rotate(Vec2::new(100.0, 0.0));
        for _ in 0..500 {
            controls.update(&mut cam);
        }
        assert!(controls.is_settled());
        // Total azimuth change approaches 100 px × rotate_speed.
        let theta = cam.eye.x.atan2(cam.eye.z);
        assert!((theta + 0.5).abs() < 0.01, "theta = {theta}");
    }

    #[test]
    fn no_damping_applies_in_one_frame() {
        let mut cam = camera();
        let mut controls = OrbitControls::new();
        controls.damping = 0.0;
        controls.rotate(Vec2::new(100.0, 0.0));
        controls.update(&mut cam);
        let theta = cam.eye.x.atan2(cam.eye.z);
        assert!((theta + 0.5).abs() < 1e-4, "theta = {theta}");
        assert!(controls.is_settled());
    }

    #[test]
    fn dolly_respects_minimum_distance() {
        let mut cam = camera();
        let mut controls = OrbitControls::new();
        for _ in 0..100 {
            controls.dolly(-5000.0);
            controls.update(&mut cam);
        }
        assert!(cam.distance_to_target() >= controls.min_distance - 1e-4);
    }

    #[test]
    fn pan_moves_the_target() {
        let mut cam = camera();
        let mut controls = OrbitControls::new();
        controls.pan(Vec2::new(80.0, 0.0));
        for _ in 0..300 {
            controls.update(&mut cam);
        }
        assert!(cam.target.length() > 1e-3, "target did not move");
        // Eye follows, keeping the orbit radius.
        assert!((cam.distance_to_target() - 40.0).abs() < 1e-3);
    }
}
