pub mod camera;
pub mod drag;
pub mod pointer;
pub mod ray;
pub mod zoom;

pub use camera::Camera;
pub use drag::DragController;
pub use pointer::{PointerState, SurfaceRect};
pub use ray::{Plane, Ray};
pub use zoom::ZoomController;
