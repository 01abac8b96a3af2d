use crate::core::{modal, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, state: &Rc<RefCell<SceneState>>) {
    if ev.repeat() {
        return;
    }
    if modal::handle_key(&mut state.borrow_mut(), &ev.key()) {
        log::info!("[keys] modal closed");
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(state: Rc<RefCell<SceneState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &state);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
