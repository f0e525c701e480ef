//! Canvas2D rendition of the globe: shaded disc, graticule, model coastlines.

use glam::{DVec2, DVec3};
use web_sys::CanvasRenderingContext2d;

use crate::model::{lon_lat_to_local, SceneObject, Visual, FALLBACK_COLOR, FALLBACK_EMISSIVE};
use crate::state::{Camera, SurfaceRect};

const BACKGROUND: &str = "#05070d";
const GRID_COLOR: &str = "rgba(255,255,255,0.14)";
const RIM_COLOR: &str = "rgba(10,177,255,0.35)";
const LIGHT_DIR: DVec3 = DVec3::new(10.0, 10.0, 5.0);
const GRID_STEP_DEG: i32 = 15;
const SEGMENT_DEG: i32 = 5;

/// Screen position of a point on the object's surface, or `None` when it is
/// on the far side or outside the depth range.
pub fn visible_screen_point(
    local: DVec3,
    object: &SceneObject,
    camera: &Camera,
    surface: &SurfaceRect,
) -> Option<DVec2> {
    let world = object.transform.apply(local);
    let outward = world - object.transform.position;
    if outward.dot(camera.position - world) <= 0.0 {
        return None;
    }
    camera
        .project(world)
        .map(|p| surface.from_ndc(p.truncate()))
}

pub fn draw_scene(
    ctx: &CanvasRenderingContext2d,
    surface: &SurfaceRect,
    camera: &Camera,
    object: &SceneObject,
) {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, surface.width, surface.height);

    let Some(center) = camera.project(object.transform.position) else {
        return;
    };
    let center_px = surface.from_ndc(center.truncate());
    let radius = object.radius();
    let radius_px = radius * camera.pixels_per_unit(center.z, surface.height);
    if !(radius_px.is_finite() && radius_px > 0.5) {
        return;
    }

    let visual = object.visual();
    let base = match &visual {
        Visual::Fallback => FALLBACK_COLOR,
        Visual::Model(model) => model.ocean_color.as_str(),
    };
    draw_body(ctx, center_px, radius_px, base);

    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str(GRID_COLOR);
    for lon in (0..360).step_by(GRID_STEP_DEG as usize) {
        let points = (-90..=90)
            .step_by(SEGMENT_DEG as usize)
            .map(|lat| lon_lat_to_local(lon as f64, lat as f64, radius));
        stroke_surface_path(ctx, points, object, camera, surface);
    }
    for lat in (-90 + GRID_STEP_DEG..90).step_by(GRID_STEP_DEG as usize) {
        let points = (0..=360)
            .step_by(SEGMENT_DEG as usize)
            .map(|lon| lon_lat_to_local(lon as f64, lat as f64, radius));
        stroke_surface_path(ctx, points, object, camera, surface);
    }

    if let Visual::Model(model) = &visual {
        ctx.set_line_width(1.5);
        ctx.set_stroke_style_str(&model.land_color);
        for line in &model.outlines {
            let points = line
                .iter()
                .map(|&[lon, lat]| lon_lat_to_local(lon, lat, radius));
            stroke_surface_path(ctx, points, object, camera, surface);
        }
    }

    ctx.begin_path();
    ctx.set_line_width(2.0);
    ctx.set_stroke_style_str(RIM_COLOR);
    ctx.arc(center_px.x, center_px.y, radius_px + 1.0, 0.0, std::f64::consts::PI * 2.0)
        .ok();
    ctx.stroke();
}

fn draw_body(ctx: &CanvasRenderingContext2d, center: DVec2, radius: f64, base: &str) {
    let light = LIGHT_DIR.normalize();
    // Screen y grows downward.
    let hx = center.x + light.x * radius * 0.45;
    let hy = center.y - light.y * radius * 0.45;
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0)
        .ok();
    match ctx.create_radial_gradient(hx, hy, radius * 0.1, center.x, center.y, radius) {
        Ok(gradient) => {
            gradient.add_color_stop(0.0, "#9fd3ff").ok();
            gradient.add_color_stop(0.35, base).ok();
            gradient.add_color_stop(1.0, FALLBACK_EMISSIVE).ok();
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
        Err(_) => ctx.set_fill_style_str(base),
    }
    ctx.fill();
}

fn stroke_surface_path(
    ctx: &CanvasRenderingContext2d,
    points: impl IntoIterator<Item = DVec3>,
    object: &SceneObject,
    camera: &Camera,
    surface: &SurfaceRect,
) {
    let mut pen_down = false;
    ctx.begin_path();
    for local in points {
        match visible_screen_point(local, object, camera, surface) {
            Some(p) if pen_down => ctx.line_to(p.x, p.y),
            Some(p) => {
                ctx.move_to(p.x, p.y);
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    ctx.stroke();
}
