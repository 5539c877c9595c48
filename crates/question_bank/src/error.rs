use std::{io, path::PathBuf};

use shared::error::{ErrorKind, TutorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("incorrect access code")]
    AccessDenied,
    #[error("failed to read '{path}': {reason}")]
    Unreadable { path: PathBuf, reason: String },
    #[error("'{path}' has no worksheets")]
    NoWorksheet { path: PathBuf },
    #[error("missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl BankError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BankError::AccessDenied => ErrorKind::AccessDenied,
            BankError::MissingColumns { .. } | BankError::NoWorksheet { .. } => {
                ErrorKind::InvalidFile
            }
            BankError::Unreadable { .. } | BankError::Io { .. } => ErrorKind::IoFailure,
        }
    }
}

impl From<BankError> for TutorError {
    fn from(value: BankError) -> Self {
        TutorError::new(value.kind(), value.to_string())
    }
}
