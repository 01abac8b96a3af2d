use smallvec::SmallVec;

/// Ordered list of change callbacks.
///
/// Callbacks run in registration order on the caller's thread; they must not
/// reach back into the object that is notifying them.
pub struct Listeners<T> {
    slots: SmallVec<[Box<dyn FnMut(&T)>; 4]>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            slots: SmallVec::new(),
        }
    }

    pub fn push(&mut self, listener: impl FnMut(&T) + 'static) {
        self.slots.push(Box::new(listener));
    }

    pub fn emit(&mut self, value: &T) {
        for slot in self.slots.iter_mut() {
            slot(value);
        }
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.slots.len())
            .finish()
    }
}
