use crate::core::{CameraRig, OrbitalScene, SceneState, Section};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<OrbitalScene>>,
    pub state: Rc<RefCell<SceneState>>,
    pub rig: Rc<RefCell<CameraRig>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
    wire_click(&w);
}

/// Pointer position in the canvas backing store, in pixels.
#[inline]
fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Window pointer position as NDC, +Y up.
#[inline]
fn pointer_window_ndc(ev: &web::MouseEvent) -> Vec2 {
    let (w, h) = web::window()
        .map(|w| {
            let iw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let ih = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            (iw.max(1.0) as f32, ih.max(1.0) as f32)
        })
        .unwrap_or((1.0, 1.0));
    Vec2::new(
        ev.client_x() as f32 / w * 2.0 - 1.0,
        1.0 - ev.client_y() as f32 / h * 2.0,
    )
}

fn pick_at(w: &InputWiring, ev: &web::MouseEvent) -> Option<Section> {
    let pos = pointer_canvas_px(ev, &w.canvas);
    let (ro, rd) = w.rig.borrow().camera.screen_to_world_ray(
        pos.x,
        pos.y,
        w.canvas.width() as f32,
        w.canvas.height() as f32,
    );
    w.scene.borrow().pick(ro, rd)
}

fn set_cursor(canvas: &web::HtmlCanvasElement, pointer: bool) {
    _ = canvas
        .style()
        .set_property("cursor", if pointer { "pointer" } else { "default" });
}

fn wire_pointermove(w: &InputWiring) {
    let w_move = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w_move.rig.borrow_mut().point_at(pointer_window_ndc(&ev));
        let over_canvas = ev
            .target()
            .as_ref()
            .and_then(|t| t.dyn_ref::<web::HtmlCanvasElement>())
            .is_some_and(|c| *c == w_move.canvas);
        let hit = if over_canvas {
            pick_at(&w_move, &ev)
        } else {
            None
        };
        let changed = w_move
            .scene
            .borrow_mut()
            .hover_pointer(hit, &w_move.state.borrow());
        if changed {
            log::debug!("[hover] {:?}", hit.map(Section::label));
            set_cursor(&w_move.canvas, hit.is_some());
        }
    }) as Box<dyn FnMut(_)>);
    // Parallax follows the pointer anywhere on the page, not just over the canvas.
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w_leave = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if w_leave.scene.borrow_mut().set_hovered(None) {
            set_cursor(&w_leave.canvas, false);
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w_click = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(section) = pick_at(&w_click, &ev) else {
            return;
        };
        let scene = w_click.scene.borrow();
        scene.click(section, &mut w_click.state.borrow_mut());
        log::info!("[click] {}", section.label());
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
