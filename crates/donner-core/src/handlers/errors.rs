//! Handler-specific error types.

use crate::errors::DonnerError;

/// Errors that can occur while constructing a handler from strategy settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandlerError {
    #[error("no handler defined")]
    NoHandlerDefined,

    #[error("unknown handler '{kind}'. Supported: docker_run, docker_compose_run, docker_compose_exec")]
    UnknownHandlerKind { kind: String },

    #[error("missing required field '{field}'")]
    MissingRequiredField { field: &'static str },

    #[error("additional field(s) detected: {}", fields.join(", "))]
    UnrecognizedFields { fields: Vec<String> },

    #[error("field '{field}' must be a {expected}")]
    InvalidFieldType {
        field: String,
        expected: &'static str,
    },
}

impl DonnerError for HandlerError {
    fn error_code(&self) -> &'static str {
        match self {
            HandlerError::NoHandlerDefined => "NO_HANDLER_DEFINED",
            HandlerError::UnknownHandlerKind { .. } => "UNKNOWN_HANDLER_KIND",
            HandlerError::MissingRequiredField { .. } => "MISSING_REQUIRED_FIELD",
            HandlerError::UnrecognizedFields { .. } => "UNRECOGNIZED_FIELDS",
            HandlerError::InvalidFieldType { .. } => "INVALID_FIELD_TYPE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
