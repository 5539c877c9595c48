use super::*;

use std::{fs, path::PathBuf};

use rust_xlsxwriter::Workbook;
use shared::domain::Section;
use tempfile::TempDir;
use tutor_core::NavState;

use crate::controller::events::{NoticeSeverity, UPLOAD_SUCCESS_MESSAGE};

fn app_in(dir: &TempDir) -> TutorApp {
    let settings = Settings {
        question_bank_path: dir.path().join("question").join("question.xlsx"),
        styles_dir: dir.path().join("styles"),
        ..Settings::default()
    };
    let styles = StyleBook::load(&settings.styles_dir);
    TutorApp::new(settings, styles, PersistedPreferences::default())
}

fn write_bank(path: &std::path::Path, rows: &[[&str; 3]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, cells) in rows.iter().enumerate() {
        for (c, cell) in cells.iter().enumerate() {
            worksheet
                .write_string(r as u32, c as u16, *cell)
                .expect("write cell");
        }
    }
    workbook.save(path).expect("save workbook");
}

struct FixedPrompts {
    code: Option<String>,
    file: Option<PathBuf>,
}

impl UploadPrompts for FixedPrompts {
    fn access_code(&mut self) -> Option<String> {
        self.code.take()
    }

    fn choose_file(&mut self) -> Option<PathBuf> {
        self.file.take()
    }
}

#[test]
fn starts_on_language_selection() {
    let dir = TempDir::new().expect("tempdir");
    let app = app_in(&dir);
    assert_eq!(app.view_state, AppViewState::LanguageSelect);
    assert_eq!(app.window_title(), "Maths Tutor - Language Selection");
    assert_eq!(app.controller.state(), NavState::AtMenu);
}

#[test]
fn confirming_language_opens_main_window_and_remembers_it() {
    let dir = TempDir::new().expect("tempdir");
    let mut app = app_in(&dir);
    app.language_dialog.selected = Language::Malayalam;

    app.confirm_language();

    assert_eq!(app.view_state, AppViewState::Main);
    assert_eq!(app.window_title(), "Maths Tutor - മലയാളം");
    assert_eq!(app.host.language, Language::Malayalam);
    assert_eq!(
        app.preferences.remembered_language,
        Some(Language::Malayalam)
    );
    assert_eq!(app.pending_viewport.len(), 2);
}

#[test]
fn unchecked_remember_forgets_previous_choice() {
    let dir = TempDir::new().expect("tempdir");
    let settings = Settings {
        question_bank_path: dir.path().join("question.xlsx"),
        ..Settings::default()
    };
    let mut app = TutorApp::new(
        settings,
        StyleBook::default(),
        PersistedPreferences {
            remembered_language: Some(Language::Arabic),
        },
    );
    assert_eq!(app.language_dialog.selected, Language::Arabic);

    app.language_dialog.remember = false;
    app.confirm_language();
    assert_eq!(app.preferences.remembered_language, None);
}

#[test]
fn queued_navigation_swaps_pages_and_returns() {
    let dir = TempDir::new().expect("tempdir");
    let mut app = app_in(&dir);
    app.confirm_language();

    app.nav_tx.send(NavCommand::Enter(Section::Time)).expect("send");
    app.nav_tx
        .send(NavCommand::Enter(Section::Currency))
        .expect("send");
    app.process_nav_commands();

    assert_eq!(
        app.controller.state(),
        NavState::InSection(Section::Currency)
    );
    assert!(!app.controller.menu().is_visible());
    assert!(app.notices.is_empty());

    app.nav_tx.send(NavCommand::ReturnToMenu).expect("send");
    app.process_nav_commands();
    assert_eq!(app.controller.state(), NavState::AtMenu);
    assert!(app.controller.menu().is_visible());
}

#[test]
fn corrupt_bank_shows_notice_and_keeps_menu() {
    let dir = TempDir::new().expect("tempdir");
    let mut app = app_in(&dir);
    let bank = dir.path().join("question").join("question.xlsx");
    fs::create_dir_all(bank.parent().expect("parent")).expect("mkdir");
    fs::write(&bank, b"not a workbook").expect("write");

    app.apply_nav_command(NavCommand::Enter(Section::Story));

    assert_eq!(app.controller.state(), NavState::AtMenu);
    assert!(app.controller.menu().is_visible());
    let notice = app.notices.front().expect("notice");
    assert_eq!(notice.title, "Page Unavailable");
}

#[test]
fn upload_command_opens_code_prompt() {
    let dir = TempDir::new().expect("tempdir");
    let mut app = app_in(&dir);
    assert!(!app.upload.is_open());
    app.apply_nav_command(NavCommand::Upload);
    assert!(app.upload.is_open());
    assert_eq!(app.controller.state(), NavState::AtMenu);
}

#[test]
fn wrong_code_reports_access_denied() {
    let dir = TempDir::new().expect("tempdir");
    let mut app = app_in(&dir);

    app.run_upload(&mut FixedPrompts {
        code: Some("guess".into()),
        file: None,
    });

    let notice = app.notices.pop_front().expect("notice");
    assert_eq!(notice.title, "Access Denied");
    assert!(!app.settings.question_bank_path.exists());
}

#[test]
fn uploaded_bank_feeds_the_next_page() {
    let dir = TempDir::new().expect("tempdir");
    let mut app = app_in(&dir);
    let source = dir.path().join("incoming.xlsx");
    write_bank(
        &source,
        &[
            ["type", "input", "output"],
            ["Distance", "100 cm in metres", "1"],
        ],
    );

    app.run_upload(&mut FixedPrompts {
        code: Some("teacher123".into()),
        file: Some(source.clone()),
    });

    let notice = app.notices.pop_front().expect("notice");
    assert_eq!(notice.severity, NoticeSeverity::Info);
    assert_eq!(notice.message, UPLOAD_SUCCESS_MESSAGE);
    assert_eq!(
        fs::read(&app.settings.question_bank_path).expect("installed"),
        fs::read(&source).expect("source")
    );

    app.apply_nav_command(NavCommand::Enter(Section::Distance));
    assert_eq!(
        app.controller.state(),
        NavState::InSection(Section::Distance)
    );
}
