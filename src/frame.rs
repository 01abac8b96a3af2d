use crate::core::{CameraRig, ModalSet, OrbitalScene, ParticleField, Theme};
use crate::labels::NodeLabels;
use crate::overlay::ModalElements;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Longest step fed to tweens; a background tab can return after seconds.
const MAX_FRAME_DT_SEC: f32 = 0.1;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<OrbitalScene>>,
    pub particles: Rc<RefCell<ParticleField>>,
    pub modals: Rc<RefCell<ModalSet>>,
    pub rig: Rc<RefCell<CameraRig>>,

    pub canvas: web::HtmlCanvasElement,
    pub modal_elements: ModalElements,
    pub labels: NodeLabels,

    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let w = self.canvas.width();
        let h = self.canvas.height();

        {
            let mut rig = self.rig.borrow_mut();
            rig.set_viewport(w as f32, h as f32);
            rig.advance_frame();
        }
        self.scene.borrow_mut().advance_frame(dt_sec);
        self.particles.borrow_mut().advance_frame();
        {
            let mut modals = self.modals.borrow_mut();
            modals.advance_frame(dt_sec);
            self.modal_elements.apply(&modals);
        }

        let scene = self.scene.borrow();
        let rig = self.rig.borrow();
        self.labels.update(&scene, &rig.camera, &self.canvas);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            match g.render(&rig.camera, &scene, &self.particles.borrow()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    /// Theme subscriber: background is assigned directly, not animated.
    pub fn apply_theme(&mut self, theme: Theme) {
        if let Some(g) = &mut self.gpu {
            g.set_background(theme.background_rgb());
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
    background: [f32; 3],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, field, background).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
