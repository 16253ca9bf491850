//! Common error infrastructure for food-core.
//!
//! Tracker operations never fail: a refused meal is an [`crate::EatOutcome`],
//! and lookup misses count as zero. Errors only exist at the boundaries where
//! external data enters the core (identifier parsing, record decoding, config
//! sanitizing). Each of those enums lives next to the code that produces it
//! and implements [`FoodError`] so callers can log and classify them
//! uniformly.

/// Severity level of an error, used for categorization and logging.
///
/// - **Recoverable**: the offending entry is dropped and processing continues
/// - **Validation**: malformed input that will fail the same way on retry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The entry is skipped; the rest of the input is still usable.
    ///
    /// Examples: unregistered item in a save record, unknown effect id
    Recoverable,

    /// Invalid input that should not be retried without changes.
    ///
    /// Examples: malformed identifier, non-numeric duration
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if processing can continue past this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all food-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable strings suitable for log filtering
pub trait FoodError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
