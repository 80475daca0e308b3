//! # Error Types
//!
//! Domain-specific error types for fraction-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  FractionError (this file)           ErrorKind (machine-readable)      │
//! │  ├── ZeroDenominator        ──┐                                        │
//! │  ├── DivisionByZero         ──┴───►  ZERO_DENOMINATOR                  │
//! │  ├── InvalidFormat          ──────►  INVALID_FORMAT                    │
//! │  ├── TypeMismatch           ──────►  TYPE_MISMATCH                     │
//! │  └── Overflow               ──────►  OVERFLOW                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (input text, operation name)
//! 3. Errors are enum variants, never String
//! 4. Every failure is returned to the caller; nothing is recovered internally

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Fraction Error
// =============================================================================

/// Errors produced while constructing or combining fractions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionError {
    /// A construction path would have produced a zero denominator.
    ///
    /// ## When This Occurs
    /// - `Fraction::new(n, 0)` for any `n`
    /// - `inverse()` of a zero-valued fraction
    /// - Text such as `"3/0"`
    #[error("Denominator cannot be 0")]
    ZeroDenominator,

    /// The divisor of `divide()` is zero-valued.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Text could not be read as a fraction.
    ///
    /// ## User Workflow
    /// ```text
    /// Fraction::parse("this should not work")
    ///      │
    ///      ▼
    /// alphabetic characters found
    ///      │
    ///      ▼
    /// InvalidFormat { input: "this should not work", reason: "..." }
    /// ```
    #[error("Invalid fraction '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    /// Ordering was requested against something that is not a fraction.
    #[error("Fractions can only be compared to other fractions, found {found}")]
    TypeMismatch { found: &'static str },

    /// The reduced result of an operation does not fit in an `i64`.
    #[error("Result of {operation} does not fit in a 64-bit fraction")]
    Overflow { operation: &'static str },
}

impl FractionError {
    /// Returns the machine-readable kind of this error.
    ///
    /// ## Example
    /// ```rust
    /// use fraction_core::{ErrorKind, Fraction};
    ///
    /// let err = Fraction::new(1, 0).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ZeroDenominator);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            FractionError::ZeroDenominator | FractionError::DivisionByZero => {
                ErrorKind::ZeroDenominator
            }
            FractionError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            FractionError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            FractionError::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

// =============================================================================
// Error Kind
// =============================================================================

/// Error kinds for programmatic handling.
///
/// ## Serialization
/// ```json
/// "ZERO_DENOMINATOR"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A denominator (or divisor) would be zero.
    ZeroDenominator,

    /// Text is not a valid fraction.
    InvalidFormat,

    /// Ordering against a non-fraction value.
    TypeMismatch,

    /// Result outside the 64-bit range.
    Overflow,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with FractionError.
pub type FractionResult<T> = Result<T, FractionError>;

// =============================================================================
// Unit Tests
// =============================================================================
