use glam::DVec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    /// Unit length.
    pub direction: DVec3,
}

/// Points `p` with `normal · p + constant == 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: DVec3,
    pub constant: f64,
}

impl Plane {
    /// The plane through the origin facing a camera on the +Z axis.
    pub const FACING_CAMERA: Plane = Plane {
        normal: DVec3::Z,
        constant: 0.0,
    };

    pub fn distance_to_point(&self, p: DVec3) -> f64 {
        self.normal.dot(p) + self.constant
    }
}

impl Ray {
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Parameter of the crossing with `plane`, or `None` when the ray runs
    /// parallel to it (unless it starts on it) or points away from it.
    pub fn distance_to_plane(&self, plane: &Plane) -> Option<f64> {
        let denom = plane.normal.dot(self.direction);
        if denom.abs() < 1.0e-12 {
            if plane.distance_to_point(self.origin).abs() < 1.0e-12 {
                return Some(0.0);
            }
            return None;
        }
        let t = -(self.origin.dot(plane.normal) + plane.constant) / denom;
        (t >= 0.0).then_some(t)
    }

    pub fn intersect_plane(&self, plane: &Plane) -> Option<DVec3> {
        self.distance_to_plane(plane).map(|t| self.at(t))
    }

    pub fn distance_sq_to_point(&self, p: DVec3) -> f64 {
        let along = (p - self.origin).dot(self.direction);
        if along < 0.0 {
            return self.origin.distance_squared(p);
        }
        self.at(along).distance_squared(p)
    }

    pub fn intersects_sphere(&self, center: DVec3, radius: f64) -> bool {
        self.distance_sq_to_point(center) <= radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_plane_in_front() {
        let ray = Ray::new(DVec3::new(1.0, 2.0, 8.0), -DVec3::Z);
        let hit = ray.intersect_plane(&Plane::FACING_CAMERA).unwrap();
        assert!((hit - DVec3::new(1.0, 2.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let ray = Ray::new(DVec3::new(0.0, 0.0, 8.0), DVec3::X);
        assert_eq!(ray.intersect_plane(&Plane::FACING_CAMERA), None);
    }

    #[test]
    fn test_parallel_ray_on_plane_hits_origin() {
        let ray = Ray::new(DVec3::new(3.0, 1.0, 0.0), DVec3::Y);
        assert_eq!(
            ray.intersect_plane(&Plane::FACING_CAMERA),
            Some(DVec3::new(3.0, 1.0, 0.0))
        );
    }

    #[test]
    fn test_plane_behind_ray_misses() {
        let ray = Ray::new(DVec3::new(0.0, 0.0, 8.0), DVec3::Z);
        assert_eq!(ray.intersect_plane(&Plane::FACING_CAMERA), None);
    }

    #[test]
    fn test_sphere_behind_uses_origin_distance() {
        let ray = Ray::new(DVec3::new(0.0, 0.0, 0.5), DVec3::Z);
        // Ray starts inside the unit sphere and points away from its centre.
        assert!(ray.intersects_sphere(DVec3::ZERO, 1.0));
        let far = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::Z);
        assert!(!far.intersects_sphere(DVec3::ZERO, 1.0));
    }
}
