use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use shared::config::{load_settings, DEFAULT_CONFIG_PATH};
use tracing_subscriber::EnvFilter;

mod controller;
mod style;
mod ui;

use style::StyleBook;
use ui::{app::LANGUAGE_DIALOG_SIZE, PersistedPreferences, TutorApp, PREFERENCES_STORAGE_KEY};

#[derive(Parser, Debug)]
#[command(name = "maths-tutor", version, about = "Maths Tutor desktop app")]
struct CliArgs {
    /// Settings file; missing is fine, malformed is an error
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Override where the question bank is read from and uploaded to
    #[arg(long)]
    question_bank: Option<PathBuf>,
    /// Override the directory holding app/language_dialog/main_window style files
    #[arg(long)]
    styles_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = CliArgs::parse();
    let mut settings = load_settings(&args.config)?;
    if let Some(path) = args.question_bank {
        settings.question_bank_path = path;
    }
    if let Some(dir) = args.styles_dir {
        settings.styles_dir = dir;
    }
    tracing::info!(
        question_bank = %settings.question_bank_path.display(),
        styles_dir = %settings.styles_dir.display(),
        "starting maths tutor"
    );

    let styles = StyleBook::load(&settings.styles_dir);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Maths Tutor - Language Selection")
            .with_inner_size(LANGUAGE_DIALOG_SIZE)
            .with_min_inner_size(LANGUAGE_DIALOG_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Maths Tutor",
        options,
        Box::new(|cc| {
            let preferences = cc
                .storage
                .and_then(|storage| storage.get_string(PREFERENCES_STORAGE_KEY))
                .and_then(|text| serde_json::from_str::<PersistedPreferences>(&text).ok())
                .unwrap_or_default();
            Ok(Box::new(TutorApp::new(settings, styles, preferences)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the tutor window: {err}"))
}
