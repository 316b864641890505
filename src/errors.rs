use std::fmt;
use std::io;

use crate::config::errors::FORMAT_ERROR;

#[derive(Debug)]
pub enum TpError {
    // File and I/O errors
    FileReadError(String),
    FileWriteError(String),
    IoError(io::Error),

    // Tree decoding errors
    DecodeError(serde_json::Error),

    // The tree handed to the printer breaks a structural contract
    ContractViolation {
        node: &'static str,
        message: String,
    },

    // Generic errors
    GenericError(String),
}

impl TpError {
    /// Create a contract violation for the given node kind
    pub fn contract_violation(node: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("contract violation in {} node: {}", node, message);
        TpError::ContractViolation { node, message }
    }
}

impl fmt::Display for TpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TpError::FileReadError(msg) => write!(f, "File read error: {}", msg),
            TpError::FileWriteError(msg) => write!(f, "File write error: {}", msg),
            TpError::IoError(err) => write!(f, "I/O error: {}", err),

            TpError::DecodeError(err) => write!(f, "Syntax tree decode error: {}", err),

            TpError::ContractViolation { node, message } => {
                write!(f, "Malformed {} node: {}", node, message)
            }

            TpError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for TpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TpError::IoError(err) => Some(err),
            TpError::DecodeError(err) => Some(err),
            _ => None,
        }
    }
}

// Conversion implementations for common error types
impl From<io::Error> for TpError {
    fn from(err: io::Error) -> Self {
        TpError::IoError(err)
    }
}

impl From<serde_json::Error> for TpError {
    fn from(err: serde_json::Error) -> Self {
        TpError::DecodeError(err)
    }
}

impl From<String> for TpError {
    fn from(err: String) -> Self {
        TpError::GenericError(err)
    }
}

impl From<&str> for TpError {
    fn from(err: &str) -> Self {
        TpError::GenericError(err.to_string())
    }
}

impl From<fmt::Error> for TpError {
    fn from(_: fmt::Error) -> Self {
        TpError::GenericError(FORMAT_ERROR.to_string())
    }
}

// Type alias for Result with TpError
pub type TpResult<T> = Result<T, TpError>;
