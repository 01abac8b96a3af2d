use crate::constants::{LABEL_ROOT_ID, NODE_LABEL_CLASS, NODE_LABEL_HOVER_CLASS};
use crate::core::constants::LABEL_LIFT;
use crate::core::{Camera, OrbitalScene, SceneState, Section};
use crate::dom::{self, DomError};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Text labels that float above each orbital node, positioned in CSS pixels.
pub struct NodeLabels {
    labels: Vec<web::HtmlElement>,
    hovered: Option<Section>,
}

impl NodeLabels {
    pub fn build(
        document: &web::Document,
        state: &Rc<RefCell<SceneState>>,
    ) -> Result<Self, DomError> {
        let body = document.body().ok_or(DomError::NoBody)?;
        let root = dom::create_html(document, "div", "")?;
        root.set_id(LABEL_ROOT_ID);
        root.set_attribute("aria-label", "Sections")?;
        body.append_child(&root)?;

        let mut labels = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            let el = dom::create_html(document, "button", NODE_LABEL_CLASS)?;
            el.set_attribute("type", "button")?;
            el.set_attribute("data-section", section.slug())?;
            el.set_inner_text(section.label());
            let style = el.style();
            _ = style.set_property("position", "fixed");
            _ = style.set_property("left", "0");
            _ = style.set_property("top", "0");
            root.append_child(&el)?;

            // Keyboard and screen-reader path into the same state change as a node click
            let state = state.clone();
            dom::add_click_listener(&el, move |_ev| {
                if state.borrow_mut().open(section) {
                    log::info!("[label] open {}", section.label());
                }
            });
            labels.push(el);
        }
        Ok(Self {
            labels,
            hovered: None,
        })
    }

    pub fn update(
        &mut self,
        scene: &OrbitalScene,
        camera: &Camera,
        canvas: &web::HtmlCanvasElement,
    ) {
        let rect = canvas.get_bounding_client_rect();
        let (w, h) = (rect.width() as f32, rect.height() as f32);
        for n in scene.nodes() {
            let section = n.node.section;
            let el = &self.labels[section.index()];
            let lift = Vec3::Y * (n.radius * n.scale() + LABEL_LIFT);
            let anchor = scene.world_position(section) + lift;
            let style = el.style();
            match camera.project_to_screen(anchor, w, h) {
                Some(p) => {
                    let x = rect.left() as f32 + p.x;
                    let y = rect.top() as f32 + p.y;
                    _ = style.set_property(
                        "transform",
                        &format!("translate({:.1}px, {:.1}px) translate(-50%, -100%)", x, y),
                    );
                    _ = style.set_property("visibility", "visible");
                }
                None => {
                    _ = style.set_property("visibility", "hidden");
                }
            }
        }

        if scene.hovered() != self.hovered {
            if let Some(prev) = self.hovered {
                _ = self.labels[prev.index()]
                    .class_list()
                    .remove_1(NODE_LABEL_HOVER_CLASS);
            }
            if let Some(next) = scene.hovered() {
                _ = self.labels[next.index()]
                    .class_list()
                    .add_1(NODE_LABEL_HOVER_CLASS);
            }
            self.hovered = scene.hovered();
        }
    }
}
