//! Decimal BigInt \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers kept as base `10^9` limbs.
//!   Products use Karatsuba multiplication, quotients a binary search over the
//!   quotient range.
//! - [`ParseBigIntError`] and [`BigIntError`] for decimal parsing and fallible arithmetic.

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;

pub use big_int::BigInt;
pub use big_int_constants::{BASE, DIGITS_PER_LIMB};
pub use error::{BigIntError, ParseBigIntError, Result};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!(a.shl_limbs(1).to_string(), "10000000000000000000000");
        assert_eq!(a.shr_limbs(1).to_string(), "10000");
    }
}

#[cfg(test)]
mod proptests {
    use std::cmp::Ordering;

    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::BigInt;

    fn decimal() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("0".to_string()),
            "-?[1-9][0-9]{0,8}",
            "-?[1-9][0-9]{9,80}",
        ]
    }

    fn big() -> impl Strategy<Value = BigInt> {
        decimal().prop_map(|s| s.parse().unwrap())
    }

    proptest! {
        #[test]
        fn parse_then_print_round_trips(s in decimal()) {
            let n: BigInt = s.parse().unwrap();
            prop_assert_eq!(n.to_string(), s);
        }

        #[test]
        fn additive_identity_and_inverse(a in big()) {
            let zero = BigInt::zero();
            prop_assert_eq!(&a + &zero, a.clone());
            prop_assert_eq!(&a + &(-&a), zero.clone());
            prop_assert_eq!(&a - &a, zero);
            prop_assert_eq!(-(-a.clone()), a);
        }

        #[test]
        fn multiplicative_identity_zero_and_commutativity(a in big(), b in big()) {
            prop_assert_eq!(&a * &BigInt::one(), a.clone());
            prop_assert!((&a * &BigInt::zero()).is_zero());
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn addition_is_associative(a in big(), b in big(), c in big()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn multiplication_distributes(a in big(), b in big(), c in big()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn division_identity(a in big(), b in big()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert!(r.cmp_magnitude(&b) == Ordering::Less);
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        }

        #[test]
        fn ordering_is_total(a in big(), b in big()) {
            let holds = [a < b, a == b, a > b];
            prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
        }

        #[test]
        fn agrees_with_i128(x in any::<i64>(), y in any::<i64>()) {
            let (a, b) = (BigInt::from(x), BigInt::from(y));
            let (x, y) = (x as i128, y as i128);
            prop_assert_eq!((&a + &b).to_string(), (x + y).to_string());
            prop_assert_eq!((&a - &b).to_string(), (x - y).to_string());
            prop_assert_eq!((&a * &b).to_string(), (x * y).to_string());
            prop_assert_eq!(a.cmp(&b), x.cmp(&y));
            if y != 0 {
                prop_assert_eq!((&a / &b).to_string(), (x / y).to_string());
                prop_assert_eq!((&a % &b).to_string(), (x % y).to_string());
            }
        }

        #[test]
        fn limb_shifts_scale_by_the_radix(a in big(), n in 0_usize..4) {
            let scale = BigInt::one().shl_limbs(n);
            prop_assert_eq!(a.shl_limbs(n), &a * &scale);
            prop_assert_eq!(a.shl_limbs(n).shr_limbs(n), a);
        }
    }
}
