//! Drag/rotate/follow controller.
//!
//! Pointer travel while dragging spins the object; every frame the object is
//! moved to where the pointer ray crosses the camera-facing plane through the
//! origin. On release the object snaps back to the origin but keeps its
//! orientation.
//!
//! The controller is generic over `G`, a guard for the window-level pointer
//! listeners that keep a drag alive outside the render surface. One guard is
//! acquired per drag session and dropped on release or with the controller.

use glam::{DVec2, DVec3};

use super::{Camera, Plane, PointerState, SurfaceRect};
use crate::model::{Controllable, Orientation, Pickable};

pub struct DragController<G> {
    pointer: PointerState,
    orientation: Orientation,
    rotation_speed: f64,
    plane: Plane,
    capture: Option<G>,
}

impl<G> DragController<G> {
    pub fn new(rotation_speed: f64) -> Self {
        Self {
            pointer: PointerState::default(),
            orientation: Orientation::default(),
            rotation_speed,
            plane: Plane::FACING_CAMERA,
            capture: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[cfg(test)]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn has_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Pointer-down on the render surface. A drag starts only when the ray
    /// under `pixel` hits `target`; a miss changes nothing and never calls
    /// `acquire`. Returns whether a drag started.
    pub fn on_surface_pointer_down<T: Pickable + ?Sized>(
        &mut self,
        pixel: DVec2,
        target: &T,
        camera: &Camera,
        surface: &SurfaceRect,
        acquire: impl FnOnce() -> G,
    ) -> bool {
        let Some(ndc) = surface.to_ndc(pixel) else {
            return false;
        };
        if !target.hit(&camera.ray_from_ndc(ndc)) {
            return false;
        }
        self.on_pointer_down(pixel, acquire);
        true
    }

    /// Starts a drag session at `pixel`. `acquire` installs the window
    /// capture and runs only if no capture is held yet.
    pub fn on_pointer_down(&mut self, pixel: DVec2, acquire: impl FnOnce() -> G) {
        self.pointer.is_dragging = true;
        self.pointer.last_position = pixel;
        if self.capture.is_none() {
            self.capture = Some(acquire());
        }
    }

    /// Returns whether the move was applied.
    pub fn on_pointer_move(&mut self, pixel: DVec2) -> bool {
        if !self.pointer.is_dragging {
            return false;
        }
        let delta = pixel - self.pointer.last_position;
        self.orientation.pitch -= delta.y * self.rotation_speed;
        self.orientation.yaw -= delta.x * self.rotation_speed;
        self.pointer.last_position = pixel;
        true
    }

    pub fn on_pointer_up<T: Controllable + ?Sized>(&mut self, target: &mut T) {
        self.pointer.is_dragging = false;
        target.set_position(DVec3::ZERO);
        self.capture = None;
    }

    pub fn on_frame<T: Controllable + ?Sized>(
        &self,
        target: &mut T,
        camera: &Camera,
        surface: &SurfaceRect,
    ) {
        target.set_rotation(self.orientation);
        if !self.pointer.is_dragging {
            return;
        }
        // No NDC or no crossing: hold the last position.
        let Some(ndc) = surface.to_ndc(self.pointer.last_position) else {
            return;
        };
        if let Some(hit) = camera.ray_from_ndc(ndc).intersect_plane(&self.plane) {
            target.set_position(hit);
        }
    }

    #[cfg(test)]
    fn set_plane(&mut self, plane: Plane) {
        self.plane = plane;
    }
}
