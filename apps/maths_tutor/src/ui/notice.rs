use eframe::egui;

use crate::controller::events::{Notice, NoticeSeverity};

/// Shows `notice` modally. Returns true once the user dismissed it.
pub fn show_notice(ctx: &egui::Context, notice: &Notice) -> bool {
    let mut dismissed = false;
    let response = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        let title = egui::RichText::new(&notice.title).strong().size(18.0);
        let title = match notice.severity {
            NoticeSeverity::Info => title,
            NoticeSeverity::Error => title.color(egui::Color32::from_rgb(200, 60, 60)),
        };
        ui.label(title);
        ui.add_space(6.0);
        ui.label(&notice.message);
        ui.add_space(10.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    dismissed || response.should_close()
}
