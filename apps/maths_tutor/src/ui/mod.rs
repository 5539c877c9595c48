//! UI layer: app shell, language dialog, menu grid, practice pages, and modal dialogs.

pub mod app;
pub mod language_dialog;
pub mod menu;
pub mod notice;
pub mod pages;
pub mod upload;

pub use app::{PersistedPreferences, TutorApp, PREFERENCES_STORAGE_KEY};
