use std::fmt::Display;

use serde::Serialize;

use crate::http_client::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// Timeout, refused connection, DNS/TLS failure or a request the
    /// transport refused to build.
    Transport,
    Unexpected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ErrorRecord {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorRecord {
    pub fn transport(err: &Error) -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: format!("Request error: {err}"),
        }
    }

    pub fn unexpected(detail: impl Display) -> Self {
        Self {
            kind: ErrorKind::Unexpected,
            message: format!("Unexpected error: {detail}"),
        }
    }
}

impl From<Error> for ErrorRecord {
    fn from(err: Error) -> Self {
        ErrorRecord::transport(&err)
    }
}
