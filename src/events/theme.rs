use crate::core::ThemeController;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The single user entry point for changing the theme.
pub fn wire_theme_toggle(toggle: &web::Element, themes: Rc<RefCell<ThemeController>>) {
    dom::add_click_listener(toggle, move |_ev| {
        let theme = themes.borrow_mut().toggle();
        log::info!("[theme] now {}", theme.css_class());
    });
}
