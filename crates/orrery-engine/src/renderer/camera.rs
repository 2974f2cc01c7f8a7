use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::interaction::picking::Ray;

/// Perspective camera for 3D rendering.
/// Produces the view-projection matrix mapping world units to clip space.
pub struct OrbitCamera {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Look-at point in world space.
    pub target: Vec3,
    /// Up direction (normally +Y).
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Eye position (w unused). Needed by rim/fresnel shading.
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3, fov_y: f32, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            fov_y,
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Perspective projection with [0, 1] depth range (WebGPU convention).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
            eye: [self.eye.x, self.eye.y, self.eye.z, 1.0],
        }
    }

    /// Resize the camera viewport (e.g. on window resize).
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Unit vector from the eye toward the look-at target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    pub fn distance_to_target(&self) -> f32 {
        (self.eye - self.target).length()
    }

    /// Project a world point to screen pixels. None if behind the camera.
    pub fn world_to_screen(&self, point: Vec3, viewport: Vec2) -> Option<Vec2> {
        let clip = self.view_proj() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        ))
    }

    /// Ray from the eye through a screen pixel.
    pub fn screen_ray(&self, screen: Vec2, viewport: Vec2) -> Ray {
        let ndc_x = (screen.x / viewport.x) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen.y / viewport.y) * 2.0;
        let inv = self.view_proj().inverse();
        let near = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray {
            origin: self.eye,
            dir: (far - near).normalize_or_zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(
            Vec3::new(0.0, 0.0, 40.0),
            Vec3::ZERO,
            45f32.to_radians(),
            16.0 / 9.0,
        )
    }

    #[test]
    fn target_projects_to_viewport_center() {
        let viewport = Vec2::new(1280.0, 720.0);
        let screen = camera().world_to_screen(Vec3::ZERO, viewport).unwrap();
        assert!((screen.x - 640.0).abs() < 0.5, "x = {}", screen.x);
        assert!((screen.y - 360.0).abs() < 0.5, "y = {}", screen.y);
    }

    #[test]
    fn point_behind_camera_does_not_project() {
        let viewport = Vec2::new(1280.0, 720.0);
        assert!(camera().world_to_screen(Vec3::new(0.0, 0.0, 100.0), viewport).is_none());
    }

    #[test]
    fn center_ray_points_at_target() {
        let viewport = Vec2::new(1280.0, 720.0);
        let ray = camera().screen_ray(Vec2::new(640.0, 360.0), viewport);
        assert!((ray.dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-3, "dir = {:?}", ray.dir);
    }

    #[test]
    fn screen_ray_roundtrips_projection() {
        // A ray cast through a body's projected pixel must hit that body.
        let cam = camera();
        let viewport = Vec2::new(1280.0, 720.0);
        let body = Vec3::new(11.0, 2.0, -4.0);
        let screen = cam.world_to_screen(body, viewport).unwrap();
        let ray = cam.screen_ray(screen, viewport);
        assert!(
            ray.hit_sphere(body, 0.5).is_some(),
            "ray {:?} should hit {:?}",
            ray.dir,
            body
        );
    }

    #[test]
    fn set_aspect_rejects_nonsense() {
        let mut cam = camera();
        cam.set_aspect(0.0);
        cam.set_aspect(f32::NAN);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
        cam.set_aspect(2.0);
        assert!((cam.aspect - 2.0).abs() < 1e-6);
    }
}
