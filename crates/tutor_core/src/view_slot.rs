/// Teardown hook run when a view leaves the slot, before it is dropped.
pub trait Releasable {
    fn release(&mut self);
}

/// Single layout position holding at most one section view.
#[derive(Debug)]
pub struct ViewSlot<V: Releasable> {
    occupant: Option<V>,
}

impl<V: Releasable> Default for ViewSlot<V> {
    fn default() -> Self {
        Self { occupant: None }
    }
}

impl<V: Releasable> ViewSlot<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases the current occupant, then stores `view`.
    pub fn install(&mut self, view: V) {
        self.clear();
        self.occupant = Some(view);
    }

    /// Releases the current occupant, if any. Calling this on an empty slot does nothing.
    pub fn clear(&mut self) {
        if let Some(mut old) = self.occupant.take() {
            old.release();
            drop(old);
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn current(&self) -> Option<&V> {
        self.occupant.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut V> {
        self.occupant.as_mut()
    }
}

impl<V: Releasable> Drop for ViewSlot<V> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
#[path = "tests/view_slot_tests.rs"]
mod tests;
