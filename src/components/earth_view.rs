use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, PointerEvent, WheelEvent};
use yew::prelude::*;

use crate::assets::load_model;
use crate::config::ViewerConfig;
use crate::model::{AssetState, SceneObject};
use crate::render::draw_scene;
use crate::state::{Camera, DragController, SurfaceRect, ZoomController};
use crate::surface::{context_2d, fit_canvas_to_window, local_pointer, surface_rect, WindowCapture};
use crate::util::now_ms;

#[derive(Properties, PartialEq, Clone)]
pub struct EarthViewProps {
    pub config: ViewerConfig,
}

#[function_component(EarthView)]
pub fn earth_view(props: &EarthViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let config = props.config.clone();
    let object = use_mut_ref(SceneObject::default);
    let camera = use_mut_ref(|| Camera::new(config.fov_deg, config.zoom_initial));
    let drag = use_mut_ref(|| DragController::<WindowCapture>::new(config.rotation_speed));
    let zoom = use_mut_ref(|| {
        ZoomController::new(
            config.zoom_initial,
            config.zoom_min,
            config.zoom_max,
            config.zoom_step,
        )
    });

    // Main mount effect (asset, events, frame loop)
    {
        let canvas_ref = canvas_ref.clone();
        let object = object.clone();
        let camera = camera.clone();
        let drag = drag.clone();
        let zoom = zoom.clone();
        let model_url = config.model_url.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");
            fit_canvas_to_window(&window, &canvas);
            let mounted = Rc::new(Cell::new(true));
            log::info!("hero globe mounted, loading {model_url}");

            // Asset load; the fallback sphere stays up until this lands.
            {
                let object = object.clone();
                let mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let started = now_ms();
                    let result = load_model(&model_url).await;
                    if !mounted.get() {
                        return;
                    }
                    match result {
                        Ok(model) => {
                            log::info!(
                                "model '{}' loaded in {:.0}ms ({} outline points)",
                                model.name,
                                now_ms() - started,
                                model.point_count()
                            );
                            object
                                .borrow_mut()
                                .set_asset(AssetState::Ready(Rc::new(model)));
                        }
                        Err(err) => {
                            log::warn!("keeping fallback globe: {err}");
                            object
                                .borrow_mut()
                                .set_asset(AssetState::Failed(err.to_string()));
                        }
                    }
                });
            }

            // Frame tick
            let tick: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let object = object.clone();
                let camera = camera.clone();
                let drag = drag.clone();
                let zoom = zoom.clone();
                let ctx = context_2d(&canvas);
                if let Err(err) = &ctx {
                    log::error!("render surface unavailable: {err}");
                }
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let rect = surface_rect(&canvas);
                    camera.borrow_mut().set_aspect(rect.aspect());
                    drag.borrow()
                        .on_frame(&mut *object.borrow_mut(), &camera.borrow(), &rect);
                    zoom.borrow().on_frame(&mut camera.borrow_mut());
                    if let Ok(ctx) = &ctx {
                        let pixels =
                            SurfaceRect::sized(canvas.width() as f64, canvas.height() as f64);
                        draw_scene(ctx, &pixels, &camera.borrow(), &object.borrow());
                    }
                })
            };
            // RAF loop
            let raf_id = Rc::new(Cell::new(None::<i32>));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));
            {
                let raf_id_loop = raf_id.clone();
                let window_loop = window.clone();
                let closure_cell_loop = closure_cell.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    tick();
                    if let Some(cb) = closure_cell_loop.borrow().as_ref() {
                        if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            raf_id_loop.set(Some(id));
                        }
                    }
                }) as Box<dyn FnMut()>));
                if let Some(cb) = closure_cell.borrow().as_ref() {
                    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        raf_id.set(Some(id));
                    }
                }
            }
            // Pointer down: only a hit on the globe starts a drag
            let pointerdown_cb = {
                let canvas_pd = canvas.clone();
                let window_pd = window.clone();
                let object = object.clone();
                let camera = camera.clone();
                let drag = drag.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    let rect = surface_rect(&canvas_pd);
                    let pixel = rect.local(e.client_x() as f64, e.client_y() as f64);
                    let weak_drag = Rc::downgrade(&drag);
                    let weak_object = Rc::downgrade(&object);
                    let started = drag.borrow_mut().on_surface_pointer_down(
                        pixel,
                        &*object.borrow(),
                        &camera.borrow(),
                        &rect,
                        || WindowCapture::install(&window_pd, &canvas_pd, weak_drag, weak_object),
                    );
                    if started {
                        e.stop_propagation();
                        log::debug!("drag started at ({:.0}, {:.0})", pixel.x, pixel.y);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "pointerdown",
                    pointerdown_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let pointermove_cb = {
                let canvas_pm = canvas.clone();
                let drag = drag.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    if drag.borrow_mut().on_pointer_move(local_pointer(&canvas_pm, &e)) {
                        e.stop_propagation();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "pointermove",
                    pointermove_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let pointerup_cb = {
                let object = object.clone();
                let drag = drag.clone();
                Closure::wrap(Box::new(move |_e: PointerEvent| {
                    let was_dragging = drag.borrow().is_dragging();
                    drag.borrow_mut().on_pointer_up(&mut *object.borrow_mut());
                    if was_dragging {
                        let o = drag.borrow().orientation();
                        log::debug!(
                            "drag released on surface, pitch {:.3} yaw {:.3}",
                            o.pitch,
                            o.yaw
                        );
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("pointerup", pointerup_cb.as_ref().unchecked_ref())
                .ok();
            // Wheel zoom
            let wheel_cb = {
                let zoom = zoom.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    e.prevent_default();
                    let distance = zoom.borrow_mut().on_wheel(e.delta_y());
                    log::trace!("camera distance {distance:.3}");
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .ok();
            let resize_cb = {
                let window_rs = window.clone();
                let canvas_rs = canvas.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    fit_canvas_to_window(&window_rs, &canvas_rs);
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();
            // Cleanup
            move || {
                mounted.set(false);
                let _ = canvas.remove_event_listener_with_callback(
                    "pointerdown",
                    pointerdown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "pointermove",
                    pointermove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "pointerup",
                    pointerup_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = raf_id.get() {
                    let _ = window.cancel_animation_frame(id);
                }
                closure_cell.borrow_mut().take();
                // Ends any live drag and drops its window capture.
                if drag.borrow().has_capture() {
                    log::debug!("unmounting mid-drag, releasing window capture");
                }
                drag.borrow_mut().on_pointer_up(&mut *object.borrow_mut());
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            id="hero-canvas"
            style="position:absolute; inset:0; display:block; width:100%; height:100%; cursor:grab; touch-action:none;"
        ></canvas>
    }
}
