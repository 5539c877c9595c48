//! Error modeling for the tutor window: every failure ends up as a modal notice.

use question_bank::{BankError, UploadOutcome, UploadReport};
use shared::error::{ErrorKind, TutorError};
use tutor_core::PageLoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Upload,
    OpenSection,
}

#[derive(Debug, Clone)]
pub struct UiError {
    kind: ErrorKind,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(context: UiErrorContext, error: impl Into<TutorError>) -> Self {
        let error = error.into();
        Self {
            kind: error.kind,
            context,
            message: error.message,
        }
    }

    pub fn to_notice(&self) -> Notice {
        let message = match (self.context, self.kind) {
            (_, ErrorKind::AccessDenied) => "Incorrect code.".to_string(),
            (UiErrorContext::Upload, ErrorKind::IoFailure) => {
                format!("Failed to upload: {}", self.message)
            }
            _ => self.message.clone(),
        };
        Notice::error(self.kind.notice_title(), message)
    }
}

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Questions uploaded successfully!";

pub fn invalid_file_message(missing: &[String]) -> String {
    format!(
        "Excel must have columns: type, input, output (missing: {})",
        missing.join(", ")
    )
}

/// Notice for a finished upload attempt; `None` when the user cancelled.
pub fn notice_for_upload(result: Result<UploadOutcome, BankError>) -> Option<Notice> {
    match result {
        Ok(UploadOutcome::Cancelled) => None,
        Ok(UploadOutcome::Uploaded(UploadReport { .. })) => {
            Some(Notice::info("Success", UPLOAD_SUCCESS_MESSAGE))
        }
        Err(BankError::MissingColumns { missing }) => Some(Notice::error(
            ErrorKind::InvalidFile.notice_title(),
            invalid_file_message(&missing),
        )),
        Err(err) => Some(UiError::new(UiErrorContext::Upload, err).to_notice()),
    }
}

pub fn notice_for_page_failure(err: PageLoadError) -> Notice {
    UiError::new(UiErrorContext::OpenSection, err).to_notice()
}
