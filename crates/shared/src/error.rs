use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    AccessDenied,
    InvalidFile,
    IoFailure,
    PageLoadFailure,
    Validation,
}

impl ErrorKind {
    /// Title of the notice window that reports this kind of failure.
    pub fn notice_title(self) -> &'static str {
        match self {
            ErrorKind::AccessDenied => "Access Denied",
            ErrorKind::InvalidFile => "Invalid File",
            ErrorKind::IoFailure => "Error",
            ErrorKind::PageLoadFailure => "Page Unavailable",
            ErrorKind::Validation => "Invalid Input",
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("{kind:?}: {message}")]
pub struct TutorError {
    pub kind: ErrorKind,
    pub message: String,
}

impl TutorError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
