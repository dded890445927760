use std::{cmp::Ordering, ops::Add};

use super::{Fraction, Units};

impl Add<Fraction> for Fraction {
    type Output = Self;

    #[track_caller]
    fn add(self, rhs: Fraction) -> Self::Output {
        self.checked_add(rhs).expect("Fraction addition overflows")
    }
}

impl Add<Units> for Fraction {
    type Output = Self;

    #[track_caller]
    fn add(self, rhs: Units) -> Self::Output {
        self.add(Self::from_integer(rhs))
    }
}

impl Add<f64> for Fraction {
    type Output = Self;

    #[track_caller]
    fn add(self, rhs: f64) -> Self::Output {
        self.add(Self::try_from(rhs).expect("The operand has no exact rational form"))
    }
}

impl Add<&str> for Fraction {
    type Output = Self;

    #[track_caller]
    fn add(self, rhs: &str) -> Self::Output {
        self.add(
            rhs.parse::<Self>()
                .expect("The operand is not a fraction literal"),
        )
    }
}

/// Ordering over the floating-point quotients of the operands.
///
/// Not an `Ord`: quotients of distinct values may round to the same `f64`,
/// so the ordering cannot be consistent with `Eq` for huge components.
impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_decimal().partial_cmp(&other.to_decimal())
    }
}

#[cfg(test)]
mod test {
    use crate::fraction::{test::fraction, Fraction};

    mod add {
        use super::{fraction, Fraction};

        #[test]
        fn fractions() {
            assert_eq!(fraction(5, 6), fraction(1, 2) + fraction(1, 3));
            assert_eq!(fraction(1, 1), fraction(1, 2) + fraction(1, 2));
            assert_eq!(fraction(1, 4), fraction(3, 4) + fraction(-1, 2));
            assert_eq!(Fraction::ZERO, fraction(1, 2) + fraction(-1, 2));
        }

        #[test]
        fn commutative() {
            let (lhs, rhs) = (fraction(3, 7), fraction(-2, 5));
            assert_eq!(lhs + rhs, rhs + lhs);
        }

        #[test]
        fn associative() {
            let (a, b, c) = (fraction(1, 2), fraction(1, 3), fraction(1, 6));
            assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn integer() {
            assert_eq!(fraction(3, 2), fraction(1, 2) + 1);
            assert_eq!(fraction(-1, 2), fraction(1, 2) + -1);
        }

        #[test]
        fn decimal() {
            assert_eq!(fraction(3, 1), fraction(1, 2) + 2.5);
        }

        #[test]
        fn literal() {
            assert_eq!(fraction(5, 6), fraction(1, 2) + "1/3");
        }

        #[test]
        fn result_normalized() {
            let sum = fraction(1, 4) + fraction(1, 4);
            assert_eq!((1, 2), (sum.numerator(), sum.denominator()));
        }

        #[test]
        fn overflow() {
            let max = Fraction::from_integer(i64::MAX);
            assert!(max.checked_add(Fraction::ONE).is_none());
            assert_eq!(Some(fraction(1, 1)), fraction(1, 2).checked_add(fraction(1, 2)));
        }
    }

    mod order {
        use super::fraction;

        #[test]
        fn strict() {
            assert!(fraction(1, 3) < fraction(1, 2));
            assert!(fraction(1, 2) > fraction(1, 3));
            assert!(fraction(-1, 2) < fraction(1, 3));
        }

        #[test]
        fn equal_values() {
            assert!(fraction(2, 4) <= fraction(1, 2));
            assert!(fraction(2, 4) >= fraction(1, 2));
            assert!(!(fraction(2, 4) < fraction(1, 2)));
        }
    }
}
