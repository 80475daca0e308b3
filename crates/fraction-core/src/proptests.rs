//! Property-based tests for normalization and arithmetic.

use proptest::prelude::*;

use crate::arith::gcd;
use crate::Fraction;

fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn fraction() -> impl Strategy<Value = Fraction> {
    (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

fn positive_fraction() -> impl Strategy<Value = Fraction> {
    (1i64..1000i64, 1i64..1000i64).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

proptest! {
    #[test]
    fn normalization_is_idempotent(n in small_int(), d in non_zero_int()) {
        let once = Fraction::new(n, d).unwrap();
        let twice = Fraction::new(once.numerator(), once.denominator()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn always_reduced_with_positive_denominator(n in small_int(), d in non_zero_int()) {
        let f = Fraction::new(n, d).unwrap();
        prop_assert!(f.denominator() > 0);
        prop_assert_eq!(
            gcd(f.numerator().unsigned_abs() as u128, f.denominator() as u128),
            1
        );
        if n == 0 {
            prop_assert_eq!(f.to_string(), "0/1");
        }
    }

    #[test]
    fn zero_denominator_always_fails(n in small_int()) {
        prop_assert!(Fraction::new(n, 0).is_err());
    }

    #[test]
    fn subtract_self_is_zero(a in fraction()) {
        prop_assert_eq!(a.subtract(a).unwrap().to_string(), "0/1");
    }

    #[test]
    fn multiply_by_one_is_identity(a in fraction()) {
        prop_assert_eq!(a.multiply(Fraction::from_integer(1)).unwrap(), a);
    }

    #[test]
    fn divide_positive_self_is_one(a in positive_fraction()) {
        prop_assert_eq!(a.divide(a).unwrap(), Fraction::ONE);
    }

    #[test]
    fn add_commutative(a in fraction(), b in fraction()) {
        prop_assert_eq!(a.add(b).unwrap(), b.add(a).unwrap());
    }

    #[test]
    fn add_negation_is_zero(a in fraction()) {
        prop_assert_eq!(a.add(a.negate().unwrap()).unwrap(), Fraction::ZERO);
    }

    #[test]
    fn double_inverse_of_positive_is_identity(a in positive_fraction()) {
        prop_assert_eq!(a.inverse().unwrap().inverse().unwrap(), a);
    }

    #[test]
    fn ordering_matches_compare_to(a in fraction(), b in fraction()) {
        let difference = a.compare_to(&b.into()).unwrap();
        prop_assert_eq!(a.cmp(&b), difference.cmp(&0));
        prop_assert_eq!(difference == 0, a.equals(&b.into()));
    }

    #[test]
    fn rendered_text_parses_back(a in fraction()) {
        prop_assert_eq!(a.to_string().parse::<Fraction>().unwrap(), a);
    }
}
