//! Orbit camera and pointer-ray generation

use crate::core::types::{Mat4, Vec2, Vec3};
use crate::math::ray::Ray;

/// Minimum orbit radius; keeps the eye from passing through the look target.
const MIN_RADIUS: f32 = 100.0;
/// Maximum orbit radius; matches the far clip plane.
const MAX_RADIUS: f32 = 10_000.0;

/// Camera orbiting a fixed look target on a sphere.
///
/// `theta` and `phi` are stored in degrees and applied at half rate
/// (one degree of input rotates the eye half a degree), matching the
/// drag sensitivity the editor was tuned for.
pub struct OrbitCamera {
    /// Distance from the look target
    pub radius: f32,
    /// Horizontal orbit angle in degrees
    pub theta: f32,
    /// Vertical orbit angle in degrees, clamped to [0, 180]
    pub phi: f32,
    /// Look target in world units
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl OrbitCamera {
    /// Create a camera with the editor's default framing
    pub fn new(aspect: f32) -> Self {
        Self {
            radius: 1600.0,
            theta: 45.0,
            phi: 60.0,
            target: Vec3::new(0.0, 200.0, 0.0),
            fov_y: 40.0_f32.to_radians(),
            aspect,
            near: 1.0,
            far: 10_000.0,
        }
    }

    /// Eye position on the orbit sphere
    pub fn eye(&self) -> Vec3 {
        let t = self.theta.to_radians() * 0.5;
        let p = self.phi.to_radians() * 0.5;
        Vec3::new(
            self.radius * t.sin() * p.cos(),
            self.radius * p.sin(),
            self.radius * t.cos() * p.cos(),
        )
    }

    /// Set orbit angles; `phi` is clamped to [0, 180]
    pub fn set_orbit(&mut self, theta: f32, phi: f32) {
        self.theta = theta;
        self.phi = phi.clamp(0.0, 180.0);
    }

    /// Move the eye along the view axis (positive delta zooms out)
    pub fn zoom(&mut self, delta: f32) {
        self.radius = (self.radius - delta).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    /// Update aspect ratio (call on viewport resize)
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }

    /// Get view matrix (world to camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Get projection matrix (camera to clip space)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Get combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Get inverse view-projection matrix (for ray generation)
    pub fn view_projection_inverse(&self) -> Mat4 {
        self.view_projection().inverse()
    }

    /// Ray from the eye through a pointer position in viewport pixels
    pub fn pointer_ray(&self, pointer: Vec2, viewport: Vec2) -> Ray {
        let ndc = Vec2::new(
            (pointer.x / viewport.x) * 2.0 - 1.0,
            -(pointer.y / viewport.y) * 2.0 + 1.0,
        );
        let mid = self
            .view_projection_inverse()
            .project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        let eye = self.eye();
        Ray::new(eye, (mid - eye).normalize())
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_eye() {
        let camera = OrbitCamera::default();
        let eye = camera.eye();
        // Default angles put the eye in the +x/+y/+z octant
        assert!(eye.x > 0.0 && eye.y > 0.0 && eye.z > 0.0);
        assert!((eye.length() - camera.radius).abs() < 0.5);
    }

    #[test]
    fn test_phi_clamp() {
        let mut camera = OrbitCamera::default();
        camera.set_orbit(10.0, 300.0);
        assert_eq!(camera.phi, 180.0);
        camera.set_orbit(10.0, -20.0);
        assert_eq!(camera.phi, 0.0);
    }

    #[test]
    fn test_zoom_clamp() {
        let mut camera = OrbitCamera::default();
        camera.zoom(-100_000.0);
        assert_eq!(camera.radius, MAX_RADIUS);
        camera.zoom(100_000.0);
        assert_eq!(camera.radius, MIN_RADIUS);
    }

    #[test]
    fn test_pointer_ray_center() {
        let camera = OrbitCamera::new(800.0 / 600.0);
        let ray = camera.pointer_ray(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0));
        // The center of the viewport looks straight at the target
        let to_target = (camera.target - camera.eye()).normalize();
        assert!(ray.direction.dot(to_target) > 0.999);
    }

    #[test]
    fn test_projection_inverse() {
        let camera = OrbitCamera::default();
        let identity = camera.view_projection() * camera.view_projection_inverse();
        assert!((identity.w_axis.w - 1.0).abs() < 0.001);
    }
}
