use super::animation::{Animated, Easing};
use super::config::SceneConfig;
use super::sections::Section;
use super::state::SceneState;

/// Where a click inside an open modal landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalClick {
    Backdrop,
    Content,
    CloseButton,
}

impl ModalClick {
    #[inline]
    pub fn dismisses(self) -> bool {
        !matches!(self, ModalClick::Content)
    }
}

/// Route a click on the open modal to the shared state.
/// Returns whether the modal was closed.
pub fn handle_click(state: &mut SceneState, click: ModalClick) -> bool {
    click.dismisses() && state.close()
}

/// Whether a `KeyboardEvent.key` value dismisses the open modal.
#[inline]
pub fn dismisses_on_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Route a key press to the shared state. Returns whether a modal was closed.
pub fn handle_key(state: &mut SceneState, key: &str) -> bool {
    dismisses_on_key(key) && state.close()
}

/// Visibility change produced by `ModalSet::sync`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalChange {
    Opened(Section),
    Closed(Section),
}

/// One overlay bound to a single section.
#[derive(Clone, Copy, Debug)]
pub struct Modal {
    pub section: Section,
    visible: bool,
    offset_px: Animated,
    opacity: Animated,
}

impl Modal {
    fn new(section: Section) -> Self {
        Self {
            section,
            visible: false,
            offset_px: Animated::new(0.0),
            opacity: Animated::new(0.0),
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Vertical offset of the panel in CSS pixels (positive is downward).
    #[inline]
    pub fn offset_px(&self) -> f32 {
        self.offset_px.value()
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    #[inline]
    pub fn is_entering(&self) -> bool {
        self.offset_px.is_animating() || self.opacity.is_animating()
    }

    fn open(&mut self, offset_px: f32, duration_sec: f32) {
        self.visible = true;
        self.offset_px.set(offset_px);
        self.opacity.set(0.0);
        self.offset_px.animate_to(0.0, duration_sec, Easing::CubicOut);
        self.opacity.animate_to(1.0, duration_sec, Easing::CubicOut);
    }

    fn hide(&mut self) {
        self.visible = false;
        self.offset_px.set(0.0);
        self.opacity.set(0.0);
    }
}

/// The four section overlays, each comparing itself against the active section.
#[derive(Clone, Debug)]
pub struct ModalSet {
    modals: [Modal; 4],
    offset_px: f32,
    tween_sec: f32,
}

impl ModalSet {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            modals: Section::ALL.map(Modal::new),
            offset_px: config.modal_offset_px,
            tween_sec: config.modal_tween_sec,
        }
    }

    #[inline]
    pub fn modals(&self) -> &[Modal; 4] {
        &self.modals
    }

    #[inline]
    pub fn modal(&self, section: Section) -> &Modal {
        &self.modals[section.index()]
    }

    pub fn visible(&self) -> impl Iterator<Item = &Modal> + '_ {
        self.modals.iter().filter(|m| m.visible)
    }

    /// Bring every overlay in line with `active`. Hides run before opens.
    pub fn sync(&mut self, active: Option<Section>) -> Vec<ModalChange> {
        let mut changes = Vec::new();
        for m in self.modals.iter_mut() {
            if m.visible && active != Some(m.section) {
                m.hide();
                changes.push(ModalChange::Closed(m.section));
            }
        }
        if let Some(section) = active {
            let m = &mut self.modals[section.index()];
            if !m.visible {
                m.open(self.offset_px, self.tween_sec);
                changes.push(ModalChange::Opened(section));
            }
        }
        changes
    }

    pub fn advance_frame(&mut self, dt_sec: f32) {
        for m in self.modals.iter_mut().filter(|m| m.visible) {
            m.offset_px.advance(dt_sec);
            m.opacity.advance(dt_sec);
        }
    }
}
