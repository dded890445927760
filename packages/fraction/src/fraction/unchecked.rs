use serde::Deserialize;

use crate::error::Error;

use super::{Fraction as ValidatedFraction, Units};

#[derive(Deserialize)]
pub(super) struct Fraction {
    numerator: Units,
    denominator: Units,
}

impl TryFrom<Fraction> for ValidatedFraction {
    type Error = Error;

    fn try_from(dto: Fraction) -> Result<Self, Self::Error> {
        Self::new(dto.numerator, dto.denominator)
    }
}
