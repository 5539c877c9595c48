use crossbeam_channel::Sender;
use shared::domain::Section;

use crate::{
    menu::MenuView,
    nav::{BackHandle, NavCommand},
    page::{Page, PageFactory, PageLoadError},
    view_slot::ViewSlot,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    AtMenu,
    InSection(Section),
}

/// Moves the main window between its menu and one section page.
///
/// Invariant: the menu is visible exactly when the slot is empty and the
/// state is [`NavState::AtMenu`].
pub struct SectionController<F: PageFactory> {
    factory: F,
    menu: MenuView,
    slot: ViewSlot<Box<dyn Page>>,
    state: NavState,
    nav_tx: Sender<NavCommand>,
}

impl<F: PageFactory> SectionController<F> {
    pub fn new(factory: F, nav_tx: Sender<NavCommand>) -> Self {
        Self {
            factory,
            menu: MenuView::new(),
            slot: ViewSlot::new(),
            state: NavState::AtMenu,
            nav_tx,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn menu(&self) -> &MenuView {
        &self.menu
    }

    pub fn active_page(&self) -> Option<&dyn Page> {
        self.slot.current().map(|page| page.as_ref())
    }

    pub fn active_page_mut(&mut self) -> Option<&mut (dyn Page + 'static)> {
        self.slot.current_mut().map(|page| page.as_mut())
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Replaces whatever is showing with a fresh page for `section`.
    ///
    /// The outgoing page is released before the factory runs, so at most one
    /// page exists at a time. If the factory fails the menu comes back and the
    /// error is returned.
    pub fn enter(&mut self, section: Section, host: &F::Host) -> Result<(), PageLoadError> {
        self.menu.hide();
        self.slot.clear();
        let on_back = BackHandle::new(self.nav_tx.clone());

        match self.factory.load(section, on_back, host) {
            Ok(page) => {
                if page.section() != section {
                    tracing::warn!(
                        requested = %section,
                        produced = %page.section(),
                        "page factory produced a page for another section"
                    );
                }
                self.slot.install(page);
                self.state = NavState::InSection(section);
                tracing::info!(section = %section, "entered section");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(section = %section, error = %err, "section failed to load");
                self.menu.show();
                self.state = NavState::AtMenu;
                Err(err)
            }
        }
    }

    /// Releases the active page and shows the menu. Returns false when already at the menu.
    pub fn return_to_menu(&mut self) -> bool {
        let NavState::InSection(section) = self.state else {
            return false;
        };

        self.slot.clear();
        self.menu.show();
        self.state = NavState::AtMenu;
        tracing::info!(section = %section, "returned to menu");
        true
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
