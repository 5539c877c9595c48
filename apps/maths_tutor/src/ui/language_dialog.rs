use eframe::egui;
use shared::domain::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Continue,
    Cancel,
}

#[derive(Debug, Clone)]
pub struct LanguageDialog {
    pub selected: Language,
    pub remember: bool,
}

impl LanguageDialog {
    pub fn new(initial: Language) -> Self {
        Self {
            selected: initial,
            remember: true,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<DialogAction> {
        let mut action = None;

        ui.label(
            egui::RichText::new("Welcome to Maths Tutor!")
                .size(22.0)
                .strong(),
        );
        ui.add_space(15.0);
        ui.label("Select your preferred language:");
        egui::ComboBox::from_id_salt("language_combo")
            .selected_text(self.selected.label())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for language in Language::ALL {
                    ui.selectable_value(&mut self.selected, language, language.label());
                }
            });
        ui.checkbox(&mut self.remember, "Remember my selection");

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Continue").clicked() {
                        action = Some(DialogAction::Continue);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(DialogAction::Cancel);
                    }
                });
            });
            ui.separator();
        });

        if action.is_none() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            action = Some(DialogAction::Continue);
        }
        action
    }
}
