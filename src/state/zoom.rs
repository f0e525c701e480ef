// Wheel-driven camera distance, clamped to [min, max].
use super::Camera;

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomController {
    distance: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(8.0, 4.0, 15.0, 0.001)
    }
}

impl ZoomController {
    pub fn new(initial: f64, min: f64, max: f64, step: f64) -> Self {
        Self {
            distance: initial.clamp(min, max),
            min,
            max,
            step,
        }
    }

    /// Applies one wheel event and returns the new distance.
    pub fn on_wheel(&mut self, delta_y: f64) -> f64 {
        if delta_y.is_finite() {
            self.distance = (self.distance + delta_y * self.step).clamp(self.min, self.max);
        }
        self.distance
    }

    pub fn on_frame(&self, camera: &mut Camera) {
        camera.set_distance(self.distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_small_scroll() {
        let mut zoom = ZoomController::default();
        assert!((zoom.on_wheel(200.0) - 8.2).abs() < EPSILON);
    }

    #[test]
    fn test_large_scroll_clamps() {
        let mut zoom = ZoomController::default();
        assert_eq!(zoom.on_wheel(10000.0), 15.0);
        assert_eq!(zoom.on_wheel(-1.0e6), 4.0);
    }

    #[test]
    fn test_running_sum_stays_in_range() {
        let mut zoom = ZoomController::default();
        let deltas = [
            120.0, -3000.0, 450.0, 9000.0, -125.0, -40.0, 0.0, 7000.0, -11000.0, 53.0,
        ];
        let mut expected = 8.0_f64;
        for d in deltas {
            expected = (expected + d * 0.001).clamp(4.0, 15.0);
            let got = zoom.on_wheel(d);
            assert!((4.0..=15.0).contains(&got));
            assert!((got - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_non_finite_delta_is_ignored() {
        let mut zoom = ZoomController::default();
        assert_eq!(zoom.on_wheel(f64::NAN), 8.0);
        assert_eq!(zoom.on_wheel(f64::INFINITY), 8.0);
    }

    #[test]
    fn test_frame_writes_camera_distance() {
        let mut zoom = ZoomController::default();
        let mut camera = Camera::default();
        zoom.on_wheel(-2500.0);
        zoom.on_frame(&mut camera);
        assert!((camera.distance() - 5.5).abs() < EPSILON);
        assert_eq!(camera.position.x, 0.0);
        assert_eq!(camera.position.y, 0.0);
    }
}
