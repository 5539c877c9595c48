//! Menu/section view lifecycle for the tutor main window.
//!
//! The window shows either its persistent [`MenuView`] or exactly one section
//! page held in a [`ViewSlot`]; [`SectionController`] moves between the two and
//! owns the page it installed.

pub mod controller;
pub mod menu;
pub mod nav;
pub mod page;
pub mod view_slot;

pub use controller::{NavState, SectionController};
pub use menu::MenuView;
pub use nav::{nav_channel, BackHandle, MenuBinding, NavCommand, MENU_BINDINGS};
pub use page::{Page, PageFactory, PageLoadError};
pub use view_slot::{Releasable, ViewSlot};
