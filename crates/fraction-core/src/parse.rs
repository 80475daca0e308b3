//! # Text Parsing
//!
//! Reads fractions from text.
//!
//! ## Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "- 55 /87"                                                             │
//! │       │                                                                 │
//! │       ├── any alphabetic character?  → InvalidFormat                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  strip ALL whitespace ──► "-55/87"                                      │
//! │       │                                                                 │
//! │       ├── contains '/' → integer "/" integer → Fraction::new(n, d)      │
//! │       │                                                                 │
//! │       └── otherwise    → integer             → Fraction::from_integer  │
//! │                                                                         │
//! │  integer := ['+' | '-'] digits      (no decimal point, no exponent)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fraction_core::Fraction;
//!
//! let f: Fraction = "  3 /  -5 ".parse()?;
//! assert_eq!(f.to_string(), "-3/5");
//! # Ok::<(), fraction_core::FractionError>(())
//! ```

use std::str::FromStr;
use tracing::trace;

use crate::error::{FractionError, FractionResult};
use crate::fraction::Fraction;
use crate::FRACTION_SEPARATOR;

impl Fraction {
    /// Parses a fraction from text.
    ///
    /// Whitespace is ignored everywhere, including inside the sign and
    /// around the separator. A two-part form is normalized exactly like
    /// [`Fraction::new`].
    ///
    /// ## Example
    /// ```rust
    /// use fraction_core::{ErrorKind, Fraction};
    ///
    /// assert_eq!(Fraction::parse("     1    ")?.to_string(), "1/1");
    /// assert_eq!(Fraction::parse("66/ 43")?.to_string(), "66/43");
    /// assert_eq!(Fraction::parse("- 55 /87")?.to_string(), "-55/87");
    ///
    /// let err = Fraction::parse("this should not work").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    /// # Ok::<(), fraction_core::FractionError>(())
    /// ```
    pub fn parse(text: &str) -> FractionResult<Self> {
        if text.chars().any(char::is_alphabetic) {
            return Err(invalid(text, "Fraction will only accept integer numbers"));
        }

        let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();

        match cleaned.split_once(FRACTION_SEPARATOR) {
            Some((numerator, denominator)) => {
                if denominator.contains(FRACTION_SEPARATOR) {
                    return Err(invalid(text, "expected at most one '/' separator"));
                }
                let numerator = parse_integer(text, numerator, "numerator")?;
                let denominator = parse_integer(text, denominator, "denominator")?;
                Fraction::new(numerator, denominator)
            }
            None => parse_integer(text, &cleaned, "whole number").map(Fraction::from_integer),
        }
    }
}

/// Parses one whitespace-free segment as a signed integer.
fn parse_integer(input: &str, segment: &str, part: &str) -> FractionResult<i64> {
    segment
        .parse::<i64>()
        .map_err(|e| invalid(input, &format!("{part} '{segment}' is not an integer: {e}")))
}

fn invalid(input: &str, reason: &str) -> FractionError {
    trace!(input, reason, "rejected fraction text");
    FractionError::InvalidFormat {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(text: &str) -> FractionResult<Self> {
        Fraction::parse(text)
    }
}

impl TryFrom<&str> for Fraction {
    type Error = FractionError;

    fn try_from(text: &str) -> FractionResult<Self> {
        Fraction::parse(text)
    }
}

impl TryFrom<String> for Fraction {
    type Error = FractionError;

    fn try_from(text: String) -> FractionResult<Self> {
        Fraction::parse(&text)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn assert_invalid(text: &str) {
        let err = Fraction::parse(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat, "input: {text:?}");
    }

    #[test]
    fn test_whole_number_text() {
        assert_eq!(Fraction::parse("     1            ").unwrap().to_string(), "1/1");
        assert_eq!(Fraction::parse("0").unwrap().to_string(), "0/1");
        assert_eq!(Fraction::parse("-20").unwrap().to_string(), "-20/1");
        assert_eq!(Fraction::parse("+7").unwrap().to_string(), "7/1");
    }

    #[test]
    fn test_embedded_whitespace() {
        assert_eq!(
            Fraction::parse("               3       /       - 5")
                .unwrap()
                .to_string(),
            "-3/5"
        );
        assert_eq!(Fraction::parse("    66/   43").unwrap().to_string(), "66/43");
        assert_eq!(
            Fraction::parse("-      55      /87").unwrap().to_string(),
            "-55/87"
        );
        assert_eq!(Fraction::parse("1\t/\n4").unwrap().to_string(), "1/4");
    }

    #[test]
    fn test_pair_text_is_normalized() {
        assert_eq!(Fraction::parse("5/10").unwrap().to_string(), "1/2");
        assert_eq!(Fraction::parse("12/-36").unwrap().to_string(), "-1/3");
        assert_eq!(Fraction::parse("0/-8").unwrap().to_string(), "0/1");
    }

    #[test]
    fn test_zero_denominator_text() {
        let err = Fraction::parse("3/0").unwrap_err();
        assert_eq!(err, FractionError::ZeroDenominator);
    }

    #[test]
    fn test_alphabetic_rejected() {
        assert_invalid("this should not work");
        assert_invalid("1/x");
        assert_invalid("ABC");
        assert_invalid("1e5");
    }

    #[test]
    fn test_malformed_segments_rejected() {
        assert_invalid("1.5");
        assert_invalid("1/2.5");
        assert_invalid("");
        assert_invalid("   ");
        assert_invalid("/5");
        assert_invalid("5/");
        assert_invalid("1/2/3");
        assert_invalid("--1");
        assert_invalid("99999999999999999999");
    }

    #[test]
    fn test_error_carries_input() {
        match Fraction::parse("1.5/2") {
            Err(FractionError::InvalidFormat { input, reason }) => {
                assert_eq!(input, "1.5/2");
                assert!(reason.starts_with("numerator '1.5'"));
            }
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_trait_conversions() {
        let parsed: Fraction = "2/4".parse().unwrap();
        assert_eq!(parsed, Fraction::new(1, 2).unwrap());
        assert_eq!(Fraction::try_from("2/4").unwrap(), parsed);
        assert_eq!(Fraction::try_from("2/4".to_string()).unwrap(), parsed);
    }
}
