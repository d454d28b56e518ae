use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone)]
#[error("{internal_error} ({position})")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::FileNotFound { .. } => "FileNotFound",
            ErrorImpl::FileUnreadable { .. } => "FileUnreadable",
            ErrorImpl::EmptyFile { .. } => "EmptyFile",
            ErrorImpl::FileTooLarge { .. } => "FileTooLarge",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileNotFound { path } => {
                ErrorTip::Suggestion(format!("No file at `{}`, check the path", path))
            }
            ErrorImpl::FileUnreadable { reason, .. } => ErrorTip::Suggestion(reason.clone()),
            ErrorImpl::EmptyFile { .. } => ErrorTip::None,
            ErrorImpl::FileTooLarge { size, .. } => ErrorTip::Suggestion(format!(
                "Source is {} bytes, at most {} are supported",
                size,
                u32::MAX
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it a valid decimal literal?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("file not found: {path:?}")]
    FileNotFound { path: String },
    #[error("cannot read file {path:?}: {reason}")]
    FileUnreadable { path: String, reason: String },
    #[error("file {path:?} is empty")]
    EmptyFile { path: String },
    #[error("file {path:?} is too large ({size} bytes)")]
    FileTooLarge { path: String, size: u64 },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
