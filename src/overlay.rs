use crate::constants::{
    HIDDEN_CLASS, MODAL_CLOSE_CLASS, MODAL_CONTENT_CLASS, MODAL_OVERLAY_CLASS, MODAL_ROOT_ID,
};
use crate::core::{modal, Modal, ModalClick, ModalSet, SceneState, Section};
use crate::dom::{self, DomError};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct ModalDom {
    overlay: web::HtmlElement,
    panel: web::HtmlElement,
    // What the DOM currently shows, so idle frames skip style writes
    shown: bool,
}

/// DOM side of the section modals: one overlay per section, built at startup.
pub struct ModalElements {
    doms: Vec<ModalDom>,
}

impl ModalElements {
    pub fn build(
        document: &web::Document,
        state: &Rc<RefCell<SceneState>>,
    ) -> Result<Self, DomError> {
        let body = document.body().ok_or(DomError::NoBody)?;
        let root = dom::create_html(document, "div", "")?;
        root.set_id(MODAL_ROOT_ID);
        body.append_child(&root)?;

        let mut doms = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            let d = build_one(document, section, state)?;
            root.append_child(&d.overlay)?;
            doms.push(d);
        }
        Ok(Self { doms })
    }

    /// Mirror visibility, offset and opacity of every modal into the DOM.
    pub fn apply(&mut self, modals: &ModalSet) {
        for m in modals.modals() {
            let d = &mut self.doms[m.section.index()];
            if m.is_visible() {
                if !d.shown {
                    show(&d.overlay);
                    d.shown = true;
                    write_panel_style(&d.panel, m);
                } else if m.is_entering() {
                    write_panel_style(&d.panel, m);
                }
            } else if d.shown {
                hide(&d.overlay);
                d.shown = false;
            }
        }
    }
}

fn show(overlay: &web::HtmlElement) {
    _ = overlay.class_list().remove_1(HIDDEN_CLASS);
    // fallback for pages without the stylesheet
    _ = overlay.style().set_property("display", "flex");
}

fn hide(overlay: &web::HtmlElement) {
    _ = overlay.class_list().add_1(HIDDEN_CLASS);
    // fallback
    _ = overlay.style().set_property("display", "none");
}

fn write_panel_style(panel: &web::HtmlElement, m: &Modal) {
    let style = panel.style();
    _ = style.set_property("transform", &format!("translateY({:.2}px)", m.offset_px()));
    _ = style.set_property("opacity", &format!("{:.3}", m.opacity()));
}

fn build_one(
    document: &web::Document,
    section: Section,
    state: &Rc<RefCell<SceneState>>,
) -> Result<ModalDom, DomError> {
    let overlay = dom::create_html(
        document,
        "div",
        &format!("{} {}", MODAL_OVERLAY_CLASS, HIDDEN_CLASS),
    )?;
    overlay.set_id(&format!("modal-{}", section.slug()));
    overlay.set_attribute("role", "dialog")?;
    overlay.set_attribute("aria-modal", "true")?;
    overlay.set_attribute("aria-labelledby", &format!("modal-{}-title", section.slug()))?;
    overlay.set_attribute("data-section", section.slug())?;
    // Full-viewport backdrop that works without any page CSS
    let style = overlay.style();
    _ = style.set_property("position", "fixed");
    _ = style.set_property("inset", "0");
    _ = style.set_property("z-index", "10");
    _ = style.set_property("align-items", "center");
    _ = style.set_property("justify-content", "center");
    _ = style.set_property("background", "rgba(0, 0, 0, 0.5)");
    hide(&overlay);

    let panel = dom::create_html(document, "div", MODAL_CONTENT_CLASS)?;
    let panel_style = panel.style();
    _ = panel_style.set_property("position", "relative");
    _ = panel_style.set_property("max-height", "80vh");
    _ = panel_style.set_property("overflow-y", "auto");
    let close = dom::create_html(document, "button", MODAL_CLOSE_CLASS)?;
    close.set_attribute("type", "button")?;
    close.set_attribute("aria-label", "Close")?;
    close.set_inner_text("\u{00d7}");
    let title = dom::create_html(document, "h2", "modal-title")?;
    title.set_id(&format!("modal-{}-title", section.slug()));
    title.set_inner_text(section.label());
    let body = dom::create_html(document, "div", "modal-body")?;
    body.set_inner_html(section.content_html());

    panel.append_child(&close)?;
    panel.append_child(&title)?;
    panel.append_child(&body)?;
    overlay.append_child(&panel)?;

    // Clicks inside the panel never reach the overlay's backdrop handler.
    dom::add_click_listener(&panel, |ev| ev.stop_propagation());

    let state_close = state.clone();
    dom::add_click_listener(&close, move |ev| {
        ev.stop_propagation();
        if modal::handle_click(&mut state_close.borrow_mut(), ModalClick::CloseButton) {
            log::info!("[modal] {} closed via button", section.label());
        }
    });

    let state_backdrop = state.clone();
    dom::add_click_listener(&overlay, move |_ev| {
        if modal::handle_click(&mut state_backdrop.borrow_mut(), ModalClick::Backdrop) {
            log::info!("[modal] {} closed via backdrop", section.label());
        }
    });

    Ok(ModalDom {
        overlay,
        panel,
        shown: false,
    })
}
