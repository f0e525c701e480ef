//! DOM side of the render surface: canvas sizing, bounding box, and the
//! window-level pointer capture held for the length of a drag.

use std::cell::RefCell;
use std::rc::Weak;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent, Window};

use crate::error::ViewerError;
use crate::model::SceneObject;
use crate::state::{DragController, SurfaceRect};

pub fn surface_rect(canvas: &HtmlCanvasElement) -> SurfaceRect {
    let r = canvas.get_bounding_client_rect();
    SurfaceRect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Pointer position relative to the canvas, from any pointer event.
pub fn local_pointer(canvas: &HtmlCanvasElement, e: &PointerEvent) -> glam::DVec2 {
    surface_rect(canvas).local(e.client_x() as f64, e.client_y() as f64)
}

pub fn fit_canvas_to_window(window: &Window, canvas: &HtmlCanvasElement) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, ViewerError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(ViewerError::NoContext)
}

/// Window `pointermove`/`pointerup` listeners for one drag session. Dropping
/// the value removes both listeners.
pub struct WindowCapture {
    _on_move: EventListener,
    _on_up: EventListener,
}

impl WindowCapture {
    pub fn install(
        window: &Window,
        canvas: &HtmlCanvasElement,
        drag: Weak<RefCell<DragController<WindowCapture>>>,
        object: Weak<RefCell<SceneObject>>,
    ) -> Self {
        let on_move = {
            let canvas = canvas.clone();
            let drag = drag.clone();
            EventListener::new(window, "pointermove", move |event| {
                let Some(e) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                let Some(drag) = drag.upgrade() else {
                    return;
                };
                drag.borrow_mut()
                    .on_pointer_move(local_pointer(&canvas, e));
            })
        };
        let on_up = EventListener::new(window, "pointerup", move |_event| {
            let (Some(drag), Some(object)) = (drag.upgrade(), object.upgrade()) else {
                return;
            };
            // Dropping the session's capture removes this listener too.
            drag.borrow_mut().on_pointer_up(&mut *object.borrow_mut());
            log::debug!("drag released on window");
        });
        log::debug!("window capture installed");
        Self {
            _on_move: on_move,
            _on_up: on_up,
        }
    }
}
