//! # Fraction Module
//!
//! Provides the `Fraction` type: an exact rational number stored as a reduced
//! numerator/denominator pair.
//!
//! ## Normalized Storage
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EVERY CONSTRUCTION PATH GOES THROUGH NORMALIZATION                     │
//! │                                                                         │
//! │  Fraction::new(n, d) ──┐                                                │
//! │  Fraction::parse(s) ───┼──► normalize ──► Fraction { n, d }             │
//! │  add / sub / mul / div ┘        │                                       │
//! │                                 ├── d == 0?  → ZeroDenominator          │
//! │                                 ├── d <  0?  → move sign to numerator   │
//! │                                 ├── divide both by gcd(|n|, d)          │
//! │                                 └── fits i64? else Overflow             │
//! │                                                                         │
//! │  Invariants after construction:                                         │
//! │    denominator > 0,  gcd(|numerator|, denominator) == 1,  0 is "0/1"    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fraction_core::Fraction;
//!
//! let half = Fraction::new(5, 10)?;
//! assert_eq!(half.to_string(), "1/2");
//!
//! let sum = half.add(Fraction::new(1, 3)?)?;
//! assert_eq!(sum.to_string(), "5/6");
//! # Ok::<(), fraction_core::FractionError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::arith::gcd;
use crate::error::{FractionError, FractionResult};
use crate::wire::FractionParts;
use crate::{FRACTION_SEPARATOR, WHOLE_NUMBER_DENOMINATOR};

// =============================================================================
// Fraction Type
// =============================================================================

/// An exact rational number.
///
/// ## Design Decisions
/// - **Private fields**: a `Fraction` can only come out of a normalizing
///   constructor, so the invariants hold for every live value
/// - **i64 storage, i128 intermediates**: cross products never overflow
///   before reduction; a result that still does not fit is an error
/// - **Copy**: immutable and small, every operation returns a new value
///
/// ## Equality
/// Because values are always reduced, the derived structural `PartialEq`
/// is mathematical equality: `1/2 == 5/10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FractionParts", into = "FractionParts")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Zero, in its canonical form `0/1`.
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: WHOLE_NUMBER_DENOMINATOR,
    };

    /// One, `1/1`.
    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: WHOLE_NUMBER_DENOMINATOR,
    };

    /// Creates a fraction from a numerator and denominator, normalizing it.
    ///
    /// ## Example
    /// ```rust
    /// use fraction_core::Fraction;
    ///
    /// assert_eq!(Fraction::new(12, -36)?.to_string(), "-1/3");
    /// assert_eq!(Fraction::new(0, 7)?.to_string(), "0/1");
    /// assert!(Fraction::new(1, 0).is_err());
    /// # Ok::<(), fraction_core::FractionError>(())
    /// ```
    ///
    /// ## Negative Denominators
    /// The denominator's sign is dropped and the numerator is negated only
    /// when it was positive. `Fraction::new(-1, -2)` is therefore `-1/2`.
    pub fn new(numerator: i64, denominator: i64) -> FractionResult<Self> {
        Self::normalize(i128::from(numerator), i128::from(denominator), "new")
    }

    /// Creates a whole-number fraction `n/1`.
    ///
    /// ## Example
    /// ```rust
    /// use fraction_core::Fraction;
    ///
    /// assert_eq!(Fraction::from_integer(5).to_string(), "5/1");
    /// ```
    #[inline]
    pub const fn from_integer(whole_number: i64) -> Self {
        // n/1 is already reduced
        Fraction {
            numerator: whole_number,
            denominator: WHOLE_NUMBER_DENOMINATOR,
        }
    }

    /// Returns the numerator. Carries the sign.
    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator. Always positive.
    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Checks if the value is a whole number.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.denominator == WHOLE_NUMBER_DENOMINATOR
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Sums two fractions.
    ///
    /// ## Example
    /// ```rust
    /// use fraction_core::Fraction;
    ///
    /// let a = Fraction::new(1, 2)?;
    /// let b = Fraction::new(-1, 2)?;
    /// assert_eq!(a.add(b)?.to_string(), "0/1");
    /// # Ok::<(), fraction_core::FractionError>(())
    /// ```
    pub fn add(&self, other: Fraction) -> FractionResult<Fraction> {
        let (left, right) = self.cross_terms(&other);
        Self::normalize_sum(left + right, self.common_denominator(&other), "add")
    }

    /// Subtracts `other` from this fraction.
    pub fn subtract(&self, other: Fraction) -> FractionResult<Fraction> {
        let (left, right) = self.cross_terms(&other);
        Self::normalize_sum(
            left - right,
            self.common_denominator(&other),
            "subtract",
        )
    }

    /// Multiplies two fractions.
    ///
    /// ## Example
    /// ```rust
    /// use fraction_core::Fraction;
    ///
    /// let product = Fraction::new(1, 2)?.multiply(Fraction::new(3, 5)?)?;
    /// assert_eq!(product.to_string(), "3/10");
    /// # Ok::<(), fraction_core::FractionError>(())
    /// ```
    pub fn multiply(&self, other: Fraction) -> FractionResult<Fraction> {
        Self::normalize(
            i128::from(self.numerator) * i128::from(other.numerator),
            self.common_denominator(&other),
            "multiply",
        )
    }

    /// Divides this fraction by `other`.
    ///
    /// Fails with [`FractionError::DivisionByZero`] when `other` is zero.
    /// The quotient `(a.n * b.d) / (a.d * b.n)` goes through the same
    /// sign handling as [`Fraction::new`], so dividing a negative value by
    /// a negative value yields a negative result.
    ///
    /// ## Example
    /// ```rust
    /// use fraction_core::Fraction;
    ///
    /// let quotient = Fraction::new(1, 5)?.divide(Fraction::new(-7, 8)?)?;
    /// assert_eq!(quotient.to_string(), "-8/35");
    /// assert!(quotient.divide(Fraction::ZERO).is_err());
    /// # Ok::<(), fraction_core::FractionError>(())
    /// ```
    pub fn divide(&self, other: Fraction) -> FractionResult<Fraction> {
        if other.is_zero() {
            trace!(dividend = %self, "division by a zero fraction rejected");
            return Err(FractionError::DivisionByZero);
        }
        Self::normalize(
            i128::from(self.numerator) * i128::from(other.denominator),
            i128::from(self.denominator) * i128::from(other.numerator),
            "divide",
        )
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> FractionResult<Fraction> {
        Self::normalize(
            i128::from(self.numerator).abs(),
            i128::from(self.denominator),
            "abs",
        )
    }

    /// Returns the negated value.
    ///
    /// Fails only for a numerator of `i64::MIN`, whose negation has no
    /// 64-bit representation.
    pub fn negate(&self) -> FractionResult<Fraction> {
        Self::normalize(
            -i128::from(self.numerator),
            i128::from(self.denominator),
            "negate",
        )
    }

    /// Returns the reciprocal `d/n`.
    ///
    /// ## Example
    /// ```rust
    /// use fraction_core::{ErrorKind, Fraction};
    ///
    /// assert_eq!(Fraction::new(-55, 87)?.inverse()?.to_string(), "-87/55");
    ///
    /// let err = Fraction::ZERO.inverse().unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ZeroDenominator);
    /// # Ok::<(), fraction_core::FractionError>(())
    /// ```
    pub fn inverse(&self) -> FractionResult<Fraction> {
        Self::normalize(
            i128::from(self.denominator),
            i128::from(self.numerator),
            "inverse",
        )
    }

    // =========================================================================
    // Normalization
    // =========================================================================

    /// `(a.n * b.d, b.n * a.d)`, the numerators over the common denominator.
    fn cross_terms(&self, other: &Fraction) -> (i128, i128) {
        (
            i128::from(self.numerator) * i128::from(other.denominator),
            i128::from(other.numerator) * i128::from(self.denominator),
        )
    }

    fn common_denominator(&self, other: &Fraction) -> i128 {
        i128::from(self.denominator) * i128::from(other.denominator)
    }

    /// Normalizes the result of add/subtract.
    ///
    /// A zero numerator forces the denominator to 1 so that zero always
    /// comes out as `0/1`.
    fn normalize_sum(
        numerator: i128,
        denominator: i128,
        operation: &'static str,
    ) -> FractionResult<Fraction> {
        let denominator = if numerator == 0 {
            i128::from(WHOLE_NUMBER_DENOMINATOR)
        } else {
            denominator
        };
        Self::normalize(numerator, denominator, operation)
    }

    /// Single normalization routine behind every constructor.
    ///
    /// The inputs are at most the product of two `i64` values, so negating
    /// them in `i128` cannot overflow.
    fn normalize(
        numerator: i128,
        denominator: i128,
        operation: &'static str,
    ) -> FractionResult<Fraction> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }

        let mut numerator = numerator;
        let mut denominator = denominator;
        if denominator < 0 {
            denominator = -denominator;
            if numerator > 0 {
                numerator = -numerator;
            }
        }

        // denominator > 0 here, so the divisor is at least 1
        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i128;
        Self::narrow(numerator / divisor, denominator / divisor, operation)
    }

    fn narrow(
        numerator: i128,
        denominator: i128,
        operation: &'static str,
    ) -> FractionResult<Fraction> {
        match (i64::try_from(numerator), i64::try_from(denominator)) {
            (Ok(numerator), Ok(denominator)) => Ok(Fraction {
                numerator,
                denominator,
            }),
            _ => {
                trace!(
                    operation,
                    %numerator,
                    %denominator,
                    "reduced result exceeds 64-bit range"
                );
                Err(FractionError::Overflow { operation })
            }
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `numerator/denominator`, always with both parts.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.numerator, FRACTION_SEPARATOR, self.denominator
        )
    }
}

/// Default fraction is zero.
impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl From<i64> for Fraction {
    fn from(whole_number: i64) -> Self {
        Fraction::from_integer(whole_number)
    }
}

impl From<i32> for Fraction {
    fn from(whole_number: i32) -> Self {
        Fraction::from_integer(i64::from(whole_number))
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = FractionError;

    fn try_from((numerator, denominator): (i64, i64)) -> FractionResult<Self> {
        Fraction::new(numerator, denominator)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
