// Perspective camera on the +Z axis looking at the origin.
use glam::{DVec2, DVec3};

use super::Ray;

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: DVec3,
    pub fov_deg: f64,
    pub near: f64,
    pub far: f64,
    pub aspect: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, 8.0),
            fov_deg: 45.0,
            near: 0.1,
            far: 1000.0,
            aspect: 1.0,
        }
    }
}

impl Camera {
    pub fn new(fov_deg: f64, distance: f64) -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, distance),
            fov_deg,
            ..Self::default()
        }
    }

    /// Distance from the origin along the viewing axis.
    #[cfg(test)]
    pub fn distance(&self) -> f64 {
        self.position.z
    }

    pub fn set_distance(&mut self, distance: f64) {
        self.position.z = distance;
    }

    pub fn set_aspect(&mut self, aspect: f64) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    fn half_extents(&self) -> (f64, f64) {
        let half_h = (0.5 * self.fov_deg.to_radians()).tan();
        (half_h * self.aspect, half_h)
    }

    /// Ray from the eye through a point in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: DVec2) -> Ray {
        let (half_w, half_h) = self.half_extents();
        let dir = DVec3::new(ndc.x * half_w, ndc.y * half_h, -1.0);
        Ray::new(self.position, dir)
    }

    /// NDC of `world` in `x`/`y` and view depth in `z`; `None` when the point
    /// is outside the depth range.
    pub fn project(&self, world: DVec3) -> Option<DVec3> {
        let view = world - self.position;
        let depth = -view.z;
        if depth < self.near || depth > self.far {
            return None;
        }
        let (half_w, half_h) = self.half_extents();
        Some(DVec3::new(
            view.x / (depth * half_w),
            view.y / (depth * half_h),
            depth,
        ))
    }

    /// Screen pixels covered by one world unit at `depth` on a surface
    /// `surface_height` pixels tall.
    pub fn pixels_per_unit(&self, depth: f64, surface_height: f64) -> f64 {
        let (_, half_h) = self.half_extents();
        surface_height * 0.5 / (half_h * depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_center_ray_points_down_axis() {
        let cam = Camera::default();
        let ray = cam.ray_from_ndc(DVec2::ZERO);
        assert!((ray.direction - DVec3::NEG_Z).length() < EPSILON);
        assert_eq!(ray.origin, DVec3::new(0.0, 0.0, 8.0));
    }

    #[test]
    fn test_project_inverts_ray() {
        let mut cam = Camera::default();
        cam.set_aspect(16.0 / 9.0);
        let ndc = DVec2::new(0.4, -0.25);
        let p = cam.ray_from_ndc(ndc).at(5.0);
        let back = cam.project(p).unwrap();
        assert!((back.x - ndc.x).abs() < EPSILON);
        assert!((back.y - ndc.y).abs() < EPSILON);
    }

    #[test]
    fn test_project_rejects_behind() {
        let cam = Camera::default();
        assert!(cam.project(DVec3::new(0.0, 0.0, 9.0)).is_none());
        assert!(cam.project(DVec3::ZERO).is_some());
    }

    #[test]
    fn test_distance_moves_along_z_only() {
        let mut cam = Camera::new(45.0, 8.0);
        cam.set_distance(12.5);
        assert_eq!(cam.position, DVec3::new(0.0, 0.0, 12.5));
        assert_eq!(cam.distance(), 12.5);
        cam.set_aspect(0.0);
        assert_eq!(cam.aspect, 1.0);
    }
}
