use super::notify::Listeners;
use super::sections::Section;

/// Which content modal is open, if any. At most one at a time.
#[derive(Debug, Default)]
pub struct SceneState {
    active: Option<Section>,
    listeners: Listeners<Option<Section>>,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn active(&self) -> Option<Section> {
        self.active
    }

    pub fn active_label(&self) -> Option<&'static str> {
        self.active.map(Section::label)
    }

    /// Register a callback invoked with the new active section on every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Option<Section>) + 'static) {
        self.listeners.push(listener);
    }

    /// Make `section` the open modal. Returns whether anything changed.
    pub fn open(&mut self, section: Section) -> bool {
        self.set(Some(section))
    }

    /// Clear the open modal. Returns false when nothing was open.
    pub fn close(&mut self) -> bool {
        self.set(None)
    }

    fn set(&mut self, next: Option<Section>) -> bool {
        if self.active == next {
            return false;
        }
        self.active = next;
        self.listeners.emit(&next);
        true
    }
}
