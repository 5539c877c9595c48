//! Access code prompt and native file picker feeding the question bank upload.

use std::path::PathBuf;

use eframe::egui;
use question_bank::UploadPrompts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadAction {
    Submit(String),
    Cancel,
}

#[derive(Debug, Clone, Default)]
enum UploadDialogState {
    #[default]
    Closed,
    AwaitingCode {
        code: String,
        focus_requested: bool,
    },
}

#[derive(Debug, Clone, Default)]
pub struct UploadDialog {
    state: UploadDialogState,
}

impl UploadDialog {
    pub fn open(&mut self) {
        if !self.is_open() {
            self.state = UploadDialogState::AwaitingCode {
                code: String::new(),
                focus_requested: false,
            };
        }
    }

    pub fn close(&mut self) {
        self.state = UploadDialogState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, UploadDialogState::AwaitingCode { .. })
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<UploadAction> {
        let UploadDialogState::AwaitingCode {
            code,
            focus_requested,
        } = &mut self.state
        else {
            return None;
        };

        let mut action = None;
        let response = egui::Modal::new(egui::Id::new("access_code_modal")).show(ctx, |ui| {
            ui.set_width(300.0);
            ui.label(egui::RichText::new("Access Code").strong().size(18.0));
            ui.add_space(6.0);
            ui.label("Enter Teacher Code:");
            let edit = ui.add(
                egui::TextEdit::singleline(code)
                    .password(true)
                    .desired_width(f32::INFINITY),
            );
            if !*focus_requested {
                edit.request_focus();
                *focus_requested = true;
            }
            let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(10.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() || entered {
                    action = Some(UploadAction::Submit(code.clone()));
                }
                if ui.button("Cancel").clicked() {
                    action = Some(UploadAction::Cancel);
                }
            });
        });

        if action.is_none() && response.should_close() {
            action = Some(UploadAction::Cancel);
        }
        if action.is_some() {
            self.close();
        }
        action
    }
}

/// Prompts backed by the code already typed into the dialog and the native file picker.
pub struct DesktopPrompts {
    code: Option<String>,
}

impl DesktopPrompts {
    pub fn new(code: String) -> Self {
        Self { code: Some(code) }
    }
}

impl UploadPrompts for DesktopPrompts {
    fn access_code(&mut self) -> Option<String> {
        self.code.take()
    }

    fn choose_file(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select Excel File")
            .add_filter("Excel Files", &["xlsx"])
            .pick_file()
    }
}
