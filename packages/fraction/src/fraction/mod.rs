use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use gcd::Gcd;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

mod ops;
mod unchecked;

pub type Units = i64;

/// An exact rational value kept in lowest terms with a positive denominator.
///
/// The sign always lives on the numerator and a zero value is stored as `0/1`,
/// so each rational value has exactly one representation. Instances are plain
/// `Copy` values, immutable once constructed.
///
/// Implementation note: `Units::MIN` numerators and denominators cannot be
/// sign-normalized and are outside the supported domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(try_from = "unchecked::Fraction")]
pub struct Fraction {
    numerator: Units,
    denominator: Units,
}

impl Fraction {
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    const DECIMAL_BASE: Units = 10;

    pub fn new(numerator: Units, denominator: Units) -> Result<Self> {
        if denominator == 0 {
            Err(Error::DivisionByZero)
        } else {
            Ok(Self::normalized(numerator, denominator))
        }
    }

    pub const fn from_integer(value: Units) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    pub const fn numerator(&self) -> Units {
        self.numerator
    }

    pub const fn denominator(&self) -> Units {
        self.denominator
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.numerator
            .checked_mul(rhs.denominator)
            .and_then(|lhs_scaled| {
                rhs.numerator
                    .checked_mul(self.denominator)
                    .and_then(|rhs_scaled| lhs_scaled.checked_add(rhs_scaled))
            })
            .and_then(|numerator| {
                self.denominator
                    .checked_mul(rhs.denominator)
                    .map(|denominator| Self::normalized(numerator, denominator))
            })
    }

    /// The value as a floating-point quotient.
    ///
    /// Lossy for components above 2^53; ordering comparisons are defined over
    /// this quotient and inherit its rounding.
    pub fn to_decimal(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub const fn is_proper(&self) -> bool {
        self.numerator.unsigned_abs() < self.denominator.unsigned_abs()
    }

    pub const fn is_improper(&self) -> bool {
        !self.is_proper()
    }

    pub const fn is_apparent(&self) -> bool {
        self.is_improper() && self.numerator % self.denominator == 0
    }

    pub const fn is_unit(&self) -> bool {
        self.numerator == 1
    }

    fn normalized(numerator: Units, denominator: Units) -> Self {
        debug_assert_ne!(denominator, 0);

        let (numerator, denominator) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        if numerator == 0 {
            return Self::ZERO;
        }

        let gcd = numerator.unsigned_abs().gcd(denominator.unsigned_abs());
        // the gcd divides the positive denominator, so it fits in Units
        let gcd = gcd as Units;
        Self {
            numerator: numerator / gcd,
            denominator: denominator / gcd,
        }
    }

    fn truncated(value: f64) -> Result<Units> {
        let truncated = value.trunc();
        if truncated >= Units::MAX as f64 || truncated < Units::MIN as f64 {
            Err(Error::unrepresentable_decimal(value))
        } else {
            Ok(truncated as Units)
        }
    }
}

impl From<Units> for Fraction {
    fn from(value: Units) -> Self {
        Self::from_integer(value)
    }
}

impl FromStr for Fraction {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let (numerator, denominator) = text
            .split_once('/')
            .filter(|(_, denominator)| !denominator.contains('/'))
            .ok_or_else(|| Error::invalid_format(text))?;

        let numerator = numerator
            .parse()
            .map_err(|_| Error::invalid_format(text))?;
        let denominator = denominator
            .parse()
            .map_err(|_| Error::invalid_format(text))?;

        Self::new(numerator, denominator)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = Error;

    /// Converts by reading the value's canonical decimal rendering.
    ///
    /// The numerator is truncated toward zero rather than rounded, matching
    /// the rendering digit-for-digit only when the binary value does; this
    /// precision loss is part of the conversion's contract.
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::unrepresentable_decimal(value));
        }

        let rendered = value.to_string();
        let Some(point) = rendered.find('.') else {
            return Self::truncated(value).map(Self::from_integer);
        };

        let decimals = rendered.len() - point - 1;
        let denominator = u32::try_from(decimals)
            .ok()
            .and_then(|exp| Self::DECIMAL_BASE.checked_pow(exp))
            .ok_or_else(|| Error::unrepresentable_decimal(value))?;
        let numerator = Self::truncated(value * denominator as f64)?;

        Self::new(numerator, denominator)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_fmt(format_args!("{}/{}", self.numerator, self.denominator))
    }
}
