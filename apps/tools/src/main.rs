use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use question_bank::{
    read_table, upload_question_bank, validate_columns, BankError, QuestionBank,
    SharedSecretGate, UploadOutcome, UploadPrompts,
};
use shared::{
    config::{load_settings, Settings, DEFAULT_CONFIG_PATH},
    domain::Section,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "question-tool", about = "Inspect and install Maths Tutor question banks")]
struct Cli {
    /// Settings file shared with the desktop app
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Override the configured question bank location
    #[arg(long)]
    question_bank: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the header row and question counts per type
    Inspect { file: PathBuf },
    /// Check that a workbook has the type, input and output columns
    Validate { file: PathBuf },
    /// Validate a workbook and install it as the question bank
    Install {
        #[arg(long)]
        code: String,
        file: PathBuf,
    },
    /// List the installed questions for one section
    List { section: String },
}

struct ArgPrompts {
    code: Option<String>,
    file: Option<PathBuf>,
}

impl UploadPrompts for ArgPrompts {
    fn access_code(&mut self) -> Option<String> {
        self.code.take()
    }

    fn choose_file(&mut self) -> Option<PathBuf> {
        self.file.take()
    }
}

fn resolve_settings(config: &Path, question_bank: Option<PathBuf>) -> Result<Settings> {
    let mut settings = load_settings(config)?;
    if let Some(path) = question_bank {
        settings.question_bank_path = path;
    }
    Ok(settings)
}

fn install(settings: &Settings, code: String, file: PathBuf) -> Result<UploadOutcome, BankError> {
    let gate = SharedSecretGate::new(settings.teacher_code.clone());
    let mut prompts = ArgPrompts {
        code: Some(code),
        file: Some(file),
    };
    upload_question_bank(&gate, &mut prompts, &settings.question_bank_path)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    let cli = Cli::parse();
    let settings = resolve_settings(&cli.config, cli.question_bank)?;

    match cli.command {
        Command::Inspect { file } => {
            let table = read_table(&file)?;
            println!("columns: {}", table.headers.join(", "));
            println!("rows: {}", table.rows.len());
            for (kind, count) in QuestionBank::new(&file).summary()? {
                let owner = kind
                    .parse::<Section>()
                    .map(|section| section.to_string())
                    .unwrap_or_else(|_| "no section".to_string());
                println!("  {kind:<16} {count:>4}  ({owner})");
            }
        }
        Command::Validate { file } => {
            let table = read_table(&file)?;
            validate_columns(&table.headers)?;
            println!("ok: {} rows", table.rows.len());
        }
        Command::Install { code, file } => {
            match install(&settings, code, file).context("upload failed")? {
                UploadOutcome::Uploaded(report) => {
                    tracing::info!(
                        source = %report.source.display(),
                        destination = %report.destination.display(),
                        rows = report.rows,
                        "question bank installed from the command line"
                    );
                    println!(
                        "installed {} rows ({} bytes) at {}",
                        report.rows,
                        report.bytes,
                        report.destination.display()
                    );
                }
                UploadOutcome::Cancelled => println!("nothing installed"),
            }
        }
        Command::List { section } => {
            let section: Section = section.parse()?;
            let bank = &settings.question_bank_path;
            let questions = QuestionBank::new(bank).questions_for(section)?;
            if questions.is_empty() {
                println!("no {section} questions in {}", bank.display());
            }
            for question in questions {
                println!("{} => {}", question.input, question.output);
            }
        }
    }

    Ok(())
}
