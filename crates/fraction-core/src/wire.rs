//! # Wire Form
//!
//! Serialized shape of a fraction, shared with JSON and TypeScript callers.
//!
//! ```json
//! { "numerator": -3, "denominator": 5 }
//! ```
//!
//! `Fraction` serializes through [`FractionParts`] and deserializes by
//! re-running [`Fraction::new`], so a payload can never smuggle in a zero
//! denominator or an unreduced value.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{FractionError, FractionResult};
use crate::fraction::Fraction;

/// Raw numerator/denominator pair, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FractionParts {
    /// Signed numerator.
    pub numerator: i64,

    /// Denominator. Any sign is accepted; zero is rejected on conversion.
    pub denominator: i64,
}

impl From<Fraction> for FractionParts {
    fn from(fraction: Fraction) -> Self {
        FractionParts {
            numerator: fraction.numerator(),
            denominator: fraction.denominator(),
        }
    }
}

impl TryFrom<FractionParts> for Fraction {
    type Error = FractionError;

    fn try_from(parts: FractionParts) -> FractionResult<Self> {
        Fraction::new(parts.numerator, parts.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_fraction() {
        let fraction = Fraction::new(3, -5).unwrap();
        let json = serde_json::to_string(&fraction).unwrap();
        assert_eq!(json, r#"{"numerator":-3,"denominator":5}"#);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let fraction: Fraction =
            serde_json::from_str(r#"{"numerator":2,"denominator":4}"#).unwrap();
        assert_eq!(fraction.to_string(), "1/2");

        let fraction: Fraction =
            serde_json::from_str(r#"{"numerator":12,"denominator":-36}"#).unwrap();
        assert_eq!(fraction.to_string(), "-1/3");
    }

    #[test]
    fn test_deserialize_rejects_zero_denominator() {
        let result: Result<Fraction, _> =
            serde_json::from_str(r#"{"numerator":1,"denominator":0}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Denominator cannot be 0"));
    }

    #[test]
    fn test_parts_from_fraction() {
        let parts = FractionParts::from(Fraction::new(10, 4).unwrap());
        assert_eq!(
            parts,
            FractionParts {
                numerator: 5,
                denominator: 2
            }
        );
    }
}
