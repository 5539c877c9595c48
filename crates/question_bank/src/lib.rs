use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use shared::domain::{Question, Section};

pub mod answers;
pub mod error;
pub mod spreadsheet;
pub mod upload;

pub use answers::check_answer;
pub use error::BankError;
pub use spreadsheet::{read_table, validate_columns, Table, REQUIRED_COLUMNS};
pub use upload::{
    install_file, install_question_bank, upload_question_bank, AccessGate, SharedSecretGate,
    UploadOutcome, UploadPrompts, UploadReport,
};

/// The installed question bank file. A missing file is an empty bank, not an error.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    path: PathBuf,
}

impl QuestionBank {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn load(&self) -> Result<Vec<Question>, BankError> {
        if !self.exists() {
            tracing::debug!(path = %self.path.display(), "no question bank installed");
            return Ok(Vec::new());
        }

        let table = read_table(&self.path)?;
        validate_columns(&table.headers)?;
        Ok(questions_from_table(&table))
    }

    pub fn questions_for(&self, section: Section) -> Result<Vec<Question>, BankError> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|question| section.matches_kind(&question.kind))
            .collect())
    }

    /// Question counts per `type` value, including types no section claims.
    pub fn summary(&self) -> Result<BTreeMap<String, usize>, BankError> {
        let mut counts = BTreeMap::new();
        for question in self.load()? {
            *counts.entry(question.kind.trim().to_string()).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

fn questions_from_table(table: &Table) -> Vec<Question> {
    let (Some(kind), Some(input), Some(output)) = (
        table.column_index("type"),
        table.column_index("input"),
        table.column_index("output"),
    ) else {
        return Vec::new();
    };

    (0..table.rows.len())
        .map(|row| {
            Question::new(
                table.cell(row, kind),
                table.cell(row, input),
                table.cell(row, output),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
