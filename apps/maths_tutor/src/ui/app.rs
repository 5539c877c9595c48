use std::collections::VecDeque;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use question_bank::{upload_question_bank, QuestionBank, SharedSecretGate, UploadPrompts};
use serde::{Deserialize, Serialize};
use shared::{config::Settings, domain::Language};
use tutor_core::{nav_channel, NavCommand, SectionController};

use crate::{
    controller::events::{notice_for_page_failure, notice_for_upload, Notice},
    style::{StyleBook, StyleTarget},
    ui::{
        language_dialog::{DialogAction, LanguageDialog},
        menu::show_menu,
        notice::show_notice,
        pages::{PageHost, PracticePages},
        upload::{DesktopPrompts, UploadAction, UploadDialog},
    },
};

pub const PREFERENCES_STORAGE_KEY: &str = "maths_tutor.preferences";

pub const LANGUAGE_DIALOG_SIZE: [f32; 2] = [400.0, 250.0];
pub const MAIN_WINDOW_SIZE: [f32; 2] = [900.0, 600.0];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedPreferences {
    pub remembered_language: Option<Language>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppViewState {
    LanguageSelect,
    Main,
}

pub struct TutorApp {
    settings: Settings,
    styles: StyleBook,
    applied_style: Option<StyleTarget>,

    view_state: AppViewState,
    language_dialog: LanguageDialog,
    language: Language,
    preferences: PersistedPreferences,

    host: PageHost,
    controller: SectionController<PracticePages>,
    nav_tx: Sender<NavCommand>,
    nav_rx: Receiver<NavCommand>,

    upload: UploadDialog,
    gate: SharedSecretGate,
    notices: VecDeque<Notice>,

    pending_viewport: Vec<egui::ViewportCommand>,
}

impl TutorApp {
    pub fn new(settings: Settings, styles: StyleBook, preferences: PersistedPreferences) -> Self {
        let (nav_tx, nav_rx) = nav_channel();
        let initial_language = preferences
            .remembered_language
            .unwrap_or(settings.default_language);

        Self {
            styles,
            applied_style: None,
            view_state: AppViewState::LanguageSelect,
            language_dialog: LanguageDialog::new(initial_language),
            language: initial_language,
            preferences,
            host: PageHost {
                language: initial_language,
                bank: QuestionBank::new(&settings.question_bank_path),
            },
            controller: SectionController::new(PracticePages, nav_tx.clone()),
            nav_tx,
            nav_rx,
            upload: UploadDialog::default(),
            gate: SharedSecretGate::new(settings.teacher_code.clone()),
            notices: VecDeque::new(),
            pending_viewport: Vec::new(),
            settings,
        }
    }

    pub fn window_title(&self) -> String {
        match self.view_state {
            AppViewState::LanguageSelect => "Maths Tutor - Language Selection".to_string(),
            AppViewState::Main => format!("Maths Tutor - {}", self.language),
        }
    }

    fn confirm_language(&mut self) {
        let language = self.language_dialog.selected;
        self.language = language;
        self.host.language = language;
        self.preferences.remembered_language = self.language_dialog.remember.then_some(language);
        self.view_state = AppViewState::Main;

        tracing::info!(
            language = ?language,
            remembered = self.language_dialog.remember,
            "language selected"
        );
        self.pending_viewport
            .push(egui::ViewportCommand::Title(self.window_title()));
        self.pending_viewport
            .push(egui::ViewportCommand::InnerSize(MAIN_WINDOW_SIZE.into()));
    }

    fn process_nav_commands(&mut self) {
        while let Ok(cmd) = self.nav_rx.try_recv() {
            self.apply_nav_command(cmd);
        }
    }

    fn apply_nav_command(&mut self, cmd: NavCommand) {
        tracing::debug!(command = cmd.name(), "applying navigation command");
        match cmd {
            NavCommand::Enter(section) => {
                if let Err(err) = self.controller.enter(section, &self.host) {
                    self.notices.push_back(notice_for_page_failure(err));
                }
            }
            NavCommand::ReturnToMenu => {
                self.controller.return_to_menu();
            }
            NavCommand::Upload => self.upload.open(),
        }
    }

    fn run_upload(&mut self, prompts: &mut impl UploadPrompts) {
        let result =
            upload_question_bank(&self.gate, prompts, &self.settings.question_bank_path);
        if let Some(notice) = notice_for_upload(result) {
            self.notices.push_back(notice);
        }
    }

    fn apply_style_if_needed(&mut self, ctx: &egui::Context) {
        let target = match self.view_state {
            AppViewState::LanguageSelect => StyleTarget::LanguageDialog,
            AppViewState::Main => StyleTarget::MainWindow,
        };
        if self.applied_style == Some(target) {
            return;
        }
        ctx.set_style(self.styles.style_for(target));
        self.applied_style = Some(target);
        tracing::debug!(?target, dir = %self.styles.dir().display(), "applied style");
    }

    fn show_language_dialog(&mut self, ctx: &egui::Context) {
        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            action = self.language_dialog.show(ui);
        });

        match action {
            Some(DialogAction::Continue) => self.confirm_language(),
            Some(DialogAction::Cancel) => {
                tracing::info!("language selection cancelled; closing");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            None => {}
        }
    }

    fn show_main_window(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.controller.menu().is_visible() {
                show_menu(ui, self.language, &self.nav_tx, &mut self.notices);
            } else if let Some(page) = self.controller.active_page_mut() {
                egui::ScrollArea::vertical().show(ui, |ui| page.show(ui));
            }
        });
    }

    fn show_upload_dialog(&mut self, ctx: &egui::Context) {
        match self.upload.show(ctx) {
            Some(UploadAction::Submit(code)) => self.run_upload(&mut DesktopPrompts::new(code)),
            Some(UploadAction::Cancel) => tracing::debug!("upload cancelled at access code prompt"),
            None => {}
        }
    }

    fn show_notices(&mut self, ctx: &egui::Context) {
        if let Some(notice) = self.notices.front() {
            if show_notice(ctx, notice) {
                self.notices.pop_front();
            }
        }
    }
}

impl eframe::App for TutorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_nav_commands();
        self.apply_style_if_needed(ctx);
        for cmd in self.pending_viewport.drain(..) {
            ctx.send_viewport_cmd(cmd);
        }

        match self.view_state {
            AppViewState::LanguageSelect => self.show_language_dialog(ctx),
            AppViewState::Main => {
                self.show_main_window(ctx);
                self.show_upload_dialog(ctx);
            }
        }
        self.show_notices(ctx);

        // Commands queued by this frame's clicks are applied on the next one.
        if !self.nav_rx.is_empty() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(serialized) = serde_json::to_string(&self.preferences) {
            storage.set_string(PREFERENCES_STORAGE_KEY, serialized);
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
