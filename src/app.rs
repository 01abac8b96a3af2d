use crate::constants::{CANVAS_ID, THEME_TOGGLE_ID};
use crate::core::{
    CameraRig, ModalSet, OrbitalScene, ParticleField, SceneConfig, SceneState, ThemeController,
};
use crate::{dom, events, frame, labels, overlay};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-folio starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let config = SceneConfig::default();
    config.validate()?;

    // Markup the page must provide; anything missing aborts startup.
    let document = dom::require_document()?;
    let canvas = dom::require_canvas(&document, CANVAS_ID)?;
    let theme_toggle = dom::require_element(&document, THEME_TOGGLE_ID)?;

    wire_canvas_resize(&canvas);

    let themes = Rc::new(RefCell::new(ThemeController::new(dom::prefers_dark_scheme())));
    let theme = themes.borrow().theme();
    dom::apply_theme_class(&document, theme);
    log::info!("[theme] initial {}", theme.css_class());

    let state = Rc::new(RefCell::new(SceneState::new()));
    let scene = Rc::new(RefCell::new(OrbitalScene::new(&config)));
    let modals = Rc::new(RefCell::new(ModalSet::new(&config)));
    let particles = Rc::new(RefCell::new(ParticleField::new(&config, theme)));
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let rig = Rc::new(RefCell::new(CameraRig::new(&config, aspect)));
    log::info!(
        "[scene] nodes={} particles={}",
        scene.borrow().nodes().len(),
        particles.borrow().len()
    );

    // Modal overlays follow the shared state.
    {
        let modals = modals.clone();
        state.borrow_mut().subscribe(move |active| {
            for change in modals.borrow_mut().sync(*active) {
                log::info!("[modal] {:?}", change);
            }
        });
    }

    let modal_elements = overlay::ModalElements::build(&document, &state)?;
    let node_labels = labels::NodeLabels::build(&document, &state)?;

    let gpu = frame::init_gpu(&canvas, &particles.borrow(), theme.background_rgb()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        particles: particles.clone(),
        modals: modals.clone(),
        rig: rig.clone(),
        canvas: canvas.clone(),
        modal_elements,
        labels: node_labels,
        gpu,
        last_instant: Instant::now(),
    }));

    // Theme subscribers run in order: particle colors, then renderer and page background.
    {
        let mut t = themes.borrow_mut();
        let particles = particles.clone();
        t.subscribe(move |theme| particles.borrow_mut().recolor(*theme));
        let frame_ctx = frame_ctx.clone();
        let document = document.clone();
        t.subscribe(move |theme| {
            frame_ctx.borrow_mut().apply_theme(*theme);
            dom::apply_theme_class(&document, *theme);
        });
    }
    events::wire_theme_toggle(&theme_toggle, themes);

    events::wire_global_keydown(state.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas,
        scene,
        state,
        rig,
    });

    frame::start_loop(frame_ctx);
    Ok(())
}
