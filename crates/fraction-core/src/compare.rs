//! # Comparison & Equality
//!
//! Equality and ordering of a fraction against arbitrary values.
//!
//! ## Asymmetry
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Operand::Fraction      Operand::{Integer, Float, Text}  │
//! │                 ─────────────────      ──────────────────────────────   │
//! │  equals()       n == n && d == d       false (never an error)           │
//! │  compare_to()   signed difference      Err(TypeMismatch)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A whole number such as `4` is NOT equal to the fraction `4/1` here: only
//! fraction operands are ever equal. Convert with `Fraction::from(4)` first.

use std::cmp::Ordering;

use crate::arith::lcd;
use crate::error::{FractionError, FractionResult};
use crate::fraction::Fraction;

// =============================================================================
// Operand
// =============================================================================

/// A value a fraction can be compared against.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Fraction(Fraction),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Operand {
    /// Short name of the operand's type, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Operand::Fraction(_) => "fraction",
            Operand::Integer(_) => "integer",
            Operand::Float(_) => "float",
            Operand::Text(_) => "text",
        }
    }
}

impl From<Fraction> for Operand {
    fn from(value: Fraction) -> Self {
        Operand::Fraction(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Integer(i64::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

// =============================================================================
// Fraction Comparison
// =============================================================================

impl Fraction {
    /// Checks equality against any operand.
    ///
    /// ## Example
    /// ```rust
    /// use fraction_core::Fraction;
    ///
    /// let half = Fraction::new(1, 2)?;
    /// assert!(half.equals(&Fraction::new(5, 10)?.into()));
    /// assert!(!half.equals(&4i64.into()));
    /// assert!(!half.equals(&"onion".into()));
    /// # Ok::<(), fraction_core::FractionError>(())
    /// ```
    pub fn equals(&self, other: &Operand) -> bool {
        matches!(other, Operand::Fraction(fraction) if fraction == self)
    }

    /// Three-way comparison against any operand.
    ///
    /// Returns a negative value if `self < other`, zero if equal, and a
    /// positive value otherwise. Only the sign is meaningful.
    ///
    /// ## Example
    /// ```rust
    /// use fraction_core::{ErrorKind, Fraction};
    ///
    /// let half = Fraction::new(1, 2)?;
    /// assert!(half.compare_to(&Fraction::new(3, 5)?.into())? < 0);
    /// assert_eq!(half.compare_to(&Fraction::new(5, 10)?.into())?, 0);
    ///
    /// let err = half.compare_to(&4i64.into()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    /// # Ok::<(), fraction_core::FractionError>(())
    /// ```
    pub fn compare_to(&self, other: &Operand) -> FractionResult<i128> {
        match other {
            Operand::Fraction(fraction) => Ok(self.scaled_difference(fraction)),
            other => Err(FractionError::TypeMismatch {
                found: other.type_name(),
            }),
        }
    }

    /// Difference of the numerators once both are scaled to the least
    /// common denominator. Exact in `i128` for any pair of `i64` fractions.
    fn scaled_difference(&self, other: &Fraction) -> i128 {
        if self == other {
            return 0;
        }
        let own_denominator = i128::from(self.denominator());
        let other_denominator = i128::from(other.denominator());
        let common = lcd(
            own_denominator.unsigned_abs(),
            other_denominator.unsigned_abs(),
        ) as i128;

        i128::from(self.numerator()) * (common / own_denominator)
            - i128::from(other.numerator()) * (common / other_denominator)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.scaled_difference(other).cmp(&0)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
