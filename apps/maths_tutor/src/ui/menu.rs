use std::collections::VecDeque;

use crossbeam_channel::Sender;
use eframe::egui;
use shared::domain::Language;
use tutor_core::{NavCommand, MENU_BINDINGS};

use crate::controller::{events::Notice, orchestration::dispatch_nav_command};

const MENU_COLUMNS: usize = 3;
const MENU_BUTTON_SIZE: [f32; 2] = [150.0, 40.0];

pub fn show_menu(
    ui: &mut egui::Ui,
    language: Language,
    nav_tx: &Sender<NavCommand>,
    notices: &mut VecDeque<Notice>,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(
            egui::RichText::new("Welcome to Maths Tutor!")
                .size(30.0)
                .strong(),
        );
        ui.label(egui::RichText::new(format!("Ready to learn in {language}!")).size(18.0));
        ui.add_space(20.0);

        egui::Grid::new("menu_grid")
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (i, binding) in MENU_BINDINGS.iter().enumerate() {
                    if ui
                        .add_sized(MENU_BUTTON_SIZE, egui::Button::new(binding.label))
                        .clicked()
                    {
                        dispatch_nav_command(nav_tx, binding.command, notices);
                    }
                    if i % MENU_COLUMNS == MENU_COLUMNS - 1 {
                        ui.end_row();
                    }
                }
            });
    });
}
