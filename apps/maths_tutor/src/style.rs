//! Optional per-window style files layered over egui's defaults.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use eframe::egui;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleTarget {
    App,
    LanguageDialog,
    MainWindow,
}

impl StyleTarget {
    pub fn file_name(self) -> &'static str {
        match self {
            StyleTarget::App => "app.toml",
            StyleTarget::LanguageDialog => "language_dialog.toml",
            StyleTarget::MainWindow => "main_window.toml",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSheet {
    pub dark_mode: Option<bool>,
    pub accent_color: Option<[u8; 3]>,
    pub text_scale: Option<f32>,
    pub corner_radius: Option<u8>,
}

impl StyleSheet {
    pub fn apply_to(&self, style: &mut egui::Style) {
        if let Some(dark) = self.dark_mode {
            style.visuals = if dark {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            };
        }

        if let Some([r, g, b]) = self.accent_color {
            let accent = egui::Color32::from_rgb(r, g, b);
            let visuals = &mut style.visuals;
            visuals.hyperlink_color = accent;
            visuals.selection.bg_fill = accent;
            visuals.widgets.active.bg_fill = accent;
            visuals.widgets.hovered.bg_fill = accent.gamma_multiply(0.85);
        }

        if let Some(scale) = self.text_scale {
            style.text_styles = scaled_text_styles(scale.clamp(0.5, 3.0));
        }

        if let Some(radius) = self.corner_radius {
            let radius = egui::CornerRadius::same(radius.min(24));
            let widgets = &mut style.visuals.widgets;
            widgets.noninteractive.corner_radius = radius;
            widgets.inactive.corner_radius = radius;
            widgets.hovered.corner_radius = radius;
            widgets.active.corner_radius = radius;
            widgets.open.corner_radius = radius;
        }
    }
}

fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

/// Reads `<dir>/<target file>`. Absent files are normal; malformed ones are logged and skipped.
pub fn load_style(dir: &Path, target: StyleTarget) -> Option<StyleSheet> {
    let path = dir.join(target.file_name());
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no style file");
            return None;
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read style file");
            return None;
        }
    };

    match toml::from_str::<StyleSheet>(&raw) {
        Ok(sheet) => Some(sheet),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed style file");
            None
        }
    }
}

/// Every style file found at startup.
#[derive(Debug, Clone, Default)]
pub struct StyleBook {
    dir: PathBuf,
    sheets: BTreeMap<StyleTarget, StyleSheet>,
}

impl StyleBook {
    pub fn load(dir: &Path) -> Self {
        let sheets = [
            StyleTarget::App,
            StyleTarget::LanguageDialog,
            StyleTarget::MainWindow,
        ]
        .into_iter()
        .filter_map(|target| load_style(dir, target).map(|sheet| (target, sheet)))
        .collect();

        Self {
            dir: dir.to_path_buf(),
            sheets,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn sheet(&self, target: StyleTarget) -> Option<&StyleSheet> {
        self.sheets.get(&target)
    }

    /// egui defaults, then the app sheet, then the window's own sheet.
    pub fn style_for(&self, window: StyleTarget) -> egui::Style {
        let mut style = egui::Style::default();
        if let Some(app) = self.sheet(StyleTarget::App) {
            app.apply_to(&mut style);
        }
        if window != StyleTarget::App {
            if let Some(own) = self.sheet(window) {
                own.apply_to(&mut style);
            }
        }
        style
    }
}
