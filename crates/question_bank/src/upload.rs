//! Teacher upload: access gate, file choice, header validation, then an atomic install.

use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{
    error::BankError,
    spreadsheet::{read_table, validate_columns},
};

pub trait AccessGate {
    fn verify(&self, code: &str) -> bool;
}

/// Compares entered text against one configured secret. An empty secret admits nobody.
#[derive(Debug, Clone)]
pub struct SharedSecretGate {
    secret: String,
}

impl SharedSecretGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl AccessGate for SharedSecretGate {
    fn verify(&self, code: &str) -> bool {
        !self.secret.is_empty() && code == self.secret
    }
}

/// Modal prompts the upload sequence needs. `None` means the user cancelled.
pub trait UploadPrompts {
    fn access_code(&mut self) -> Option<String>;
    fn choose_file(&mut self) -> Option<PathBuf>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub rows: usize,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Cancelled,
    Uploaded(UploadReport),
}

pub fn upload_question_bank(
    gate: &impl AccessGate,
    prompts: &mut impl UploadPrompts,
    destination: &Path,
) -> Result<UploadOutcome, BankError> {
    let Some(code) = prompts.access_code() else {
        tracing::debug!("upload cancelled at access code prompt");
        return Ok(UploadOutcome::Cancelled);
    };
    if !gate.verify(&code) {
        tracing::warn!("upload rejected: incorrect access code");
        return Err(BankError::AccessDenied);
    }

    let Some(source) = prompts.choose_file() else {
        tracing::debug!("upload cancelled at file prompt");
        return Ok(UploadOutcome::Cancelled);
    };

    install_question_bank(&source, destination).map(UploadOutcome::Uploaded)
}

/// Validates `source` and, only if it passes, replaces `destination` with its bytes.
pub fn install_question_bank(source: &Path, destination: &Path) -> Result<UploadReport, BankError> {
    let table = read_table(source)?;
    validate_columns(&table.headers)?;
    let bytes = install_file(source, destination)?;

    tracing::info!(
        source = %source.display(),
        destination = %destination.display(),
        rows = table.rows.len(),
        bytes,
        "question bank installed"
    );

    Ok(UploadReport {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        rows: table.rows.len(),
        bytes,
    })
}

/// Copies into a temporary sibling of `destination` and renames it into place,
/// so the destination is either fully replaced or left as it was.
pub fn install_file(source: &Path, destination: &Path) -> Result<u64, BankError> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|err| {
        BankError::io(
            format!("failed to create directory '{}'", parent.display()),
            err,
        )
    })?;

    let mut reader = File::open(source)
        .map_err(|err| BankError::io(format!("failed to open '{}'", source.display()), err))?;
    let mut staged = NamedTempFile::new_in(&parent).map_err(|err| {
        BankError::io(
            format!("failed to stage a copy in '{}'", parent.display()),
            err,
        )
    })?;
    let bytes = io::copy(&mut reader, staged.as_file_mut())
        .map_err(|err| BankError::io(format!("failed to copy '{}'", source.display()), err))?;
    staged
        .as_file()
        .sync_all()
        .map_err(|err| BankError::io("failed to flush staged copy", err))?;
    staged.persist(destination).map_err(|err| {
        BankError::io(
            format!("failed to replace '{}'", destination.display()),
            err.error,
        )
    })?;

    Ok(bytes)
}
