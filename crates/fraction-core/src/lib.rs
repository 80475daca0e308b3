//! # fraction-core: Exact Rational Numbers
//!
//! This crate provides `Fraction`, an immutable exact rational value, with
//! zero I/O dependencies.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        fraction-core                                    │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐          │
//! │   │  parse    │  │ fraction  │  │  compare  │  │   wire    │          │
//! │   │  "3/-5"   │─►│ normalize │◄─│  Operand  │  │  serde    │          │
//! │   │  FromStr  │  │ add / div │  │  Ord      │  │  ts-rs    │          │
//! │   └───────────┘  └─────┬─────┘  └─────┬─────┘  └───────────┘          │
//! │                        │              │                                 │
//! │                  ┌─────▼──────────────▼─────┐   ┌───────────┐          │
//! │                  │   arith: gcd / lcd       │   │   error   │          │
//! │                  └──────────────────────────┘   └───────────┘          │
//! │                                                                         │
//! │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`fraction`] - The `Fraction` type, normalization and arithmetic
//! - [`parse`] - Reading fractions from text
//! - [`compare`] - Equality and ordering against arbitrary operands
//! - [`wire`] - Serialized form for JSON / TypeScript callers
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Always Normalized**: denominator > 0, lowest terms, zero is `0/1`
//! 2. **Immutable**: every operation returns a new `Fraction`
//! 3. **Explicit Errors**: zero denominators, bad text and overflow are typed
//!    errors, never panics or wraparound
//!
//! ## Example Usage
//!
//! ```rust
//! use fraction_core::Fraction;
//!
//! let a: Fraction = "1/2".parse()?;
//! let b = Fraction::new(3, 5)?;
//!
//! assert_eq!(a.multiply(b)?.to_string(), "3/10");
//! assert_eq!(a.subtract(a)?.to_string(), "0/1");
//! assert!(a < b);
//! # Ok::<(), fraction_core::FractionError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

mod arith;
pub mod compare;
pub mod error;
pub mod fraction;
pub mod parse;
pub mod wire;

#[cfg(test)]
mod proptests;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use compare::Operand;
pub use error::{ErrorKind, FractionError, FractionResult};
pub use fraction::Fraction;
pub use wire::FractionParts;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Denominator given to whole numbers (`5` is stored as `5/1`).
pub const WHOLE_NUMBER_DENOMINATOR: i64 = 1;

/// Separator between numerator and denominator, in text and when rendering.
pub const FRACTION_SEPARATOR: char = '/';
