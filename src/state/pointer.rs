// Pointer tracking and render-surface geometry
use glam::DVec2;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct PointerState {
    pub is_dragging: bool,
    /// Surface-local pixels.
    pub last_position: DVec2,
}

/// Bounding box of the render surface in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    pub fn aspect(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Client coordinates to surface-local pixels.
    pub fn local(&self, client_x: f64, client_y: f64) -> DVec2 {
        DVec2::new(client_x - self.left, client_y - self.top)
    }

    /// Surface-local pixels to normalized device coordinates (y up).
    pub fn to_ndc(&self, pixel: DVec2) -> Option<DVec2> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(DVec2::new(
            pixel.x / self.width * 2.0 - 1.0,
            -(pixel.y / self.height) * 2.0 + 1.0,
        ))
    }

    pub fn from_ndc(&self, ndc: DVec2) -> DVec2 {
        DVec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_corners() {
        let rect = SurfaceRect::sized(800.0, 600.0);
        assert_eq!(rect.to_ndc(DVec2::ZERO), Some(DVec2::new(-1.0, 1.0)));
        assert_eq!(
            rect.to_ndc(DVec2::new(800.0, 600.0)),
            Some(DVec2::new(1.0, -1.0))
        );
        assert_eq!(
            rect.to_ndc(DVec2::new(400.0, 300.0)),
            Some(DVec2::ZERO)
        );
    }

    #[test]
    fn test_ndc_round_trip_and_offset() {
        let rect = SurfaceRect {
            left: 10.0,
            top: 20.0,
            width: 200.0,
            height: 100.0,
        };
        let px = rect.local(60.0, 45.0);
        assert_eq!(px, DVec2::new(50.0, 25.0));
        let ndc = rect.to_ndc(px).unwrap();
        assert_eq!(rect.from_ndc(ndc), px);
        assert_eq!(rect.aspect(), 2.0);
    }

    #[test]
    fn test_degenerate_surface_has_no_ndc() {
        let rect = SurfaceRect::sized(0.0, 100.0);
        assert_eq!(rect.to_ndc(DVec2::new(1.0, 1.0)), None);
        assert_eq!(SurfaceRect::sized(10.0, 0.0).aspect(), 1.0);
    }
}
