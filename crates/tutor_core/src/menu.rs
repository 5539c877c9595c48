/// The persistent root view. It is only ever shown or hidden, never rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    visible: bool,
    visibility_changes: u64,
}

impl Default for MenuView {
    fn default() -> Self {
        Self {
            visible: true,
            visibility_changes: 0,
        }
    }
}

impl MenuView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    /// Number of actual show/hide flips since creation.
    pub fn visibility_changes(&self) -> u64 {
        self.visibility_changes
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.visibility_changes += 1;
        }
    }
}
