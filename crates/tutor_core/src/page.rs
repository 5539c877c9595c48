//! Contracts between the section controller and whatever builds section pages.

use shared::{
    domain::Section,
    error::{ErrorKind, TutorError},
};
use thiserror::Error;

use crate::{nav::BackHandle, view_slot::Releasable};

/// A displayable practice page for one section.
pub trait Page {
    fn section(&self) -> Section;

    fn show(&mut self, ui: &mut egui::Ui);

    /// Called once when the page leaves the view slot.
    fn on_release(&mut self) {}
}

impl Releasable for Box<dyn Page> {
    fn release(&mut self) {
        tracing::debug!(section = %self.section(), "releasing section page");
        self.on_release();
    }
}

/// Builds the page for a section. `on_back` is the page's only route back to the menu.
pub trait PageFactory {
    type Host;

    fn load(
        &self,
        section: Section,
        on_back: BackHandle,
        host: &Self::Host,
    ) -> Result<Box<dyn Page>, PageLoadError>;
}

#[derive(Debug, Clone, Error)]
#[error("could not open {section}: {reason}")]
pub struct PageLoadError {
    pub section: Section,
    pub reason: String,
}

impl PageLoadError {
    pub fn new(section: Section, reason: impl Into<String>) -> Self {
        Self {
            section,
            reason: reason.into(),
        }
    }
}

impl From<PageLoadError> for TutorError {
    fn from(value: PageLoadError) -> Self {
        TutorError::new(ErrorKind::PageLoadFailure, value.to_string())
    }
}
