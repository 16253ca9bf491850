//! Identifier parsing errors.

use crate::error::{ErrorSeverity, FoodError};

/// Reasons a string cannot become a [`crate::ResourceId`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResourceIdError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier has an empty namespace")]
    EmptyNamespace,

    #[error("identifier has an empty path")]
    EmptyPath,

    #[error("invalid character {0:?} in namespace")]
    InvalidNamespaceChar(char),

    #[error("invalid character {0:?} in path")]
    InvalidPathChar(char),
}

impl FoodError for ResourceIdError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ResourceIdError::*;
        match self {
            Empty => "RESOURCE_ID_EMPTY",
            EmptyNamespace => "RESOURCE_ID_EMPTY_NAMESPACE",
            EmptyPath => "RESOURCE_ID_EMPTY_PATH",
            InvalidNamespaceChar(_) => "RESOURCE_ID_INVALID_NAMESPACE",
            InvalidPathChar(_) => "RESOURCE_ID_INVALID_PATH",
        }
    }
}
