use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Fraction] The denominator must not be zero")]
    DivisionByZero,

    #[error("[Fraction] '{text}' is not in the 'numerator/denominator' format")]
    InvalidFormat { text: String },

    #[error("[Fraction] The decimal value '{value}' has no exact 64-bit rational form")]
    UnrepresentableDecimal { value: f64 },
}

impl Error {
    pub fn invalid_format(text: &str) -> Self {
        Self::InvalidFormat { text: text.into() }
    }

    pub fn unrepresentable_decimal(value: f64) -> Self {
        Self::UnrepresentableDecimal { value }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn invalid_format_err() {
        const TEXT: &str = "3//4";

        let err = Error::invalid_format(TEXT);
        assert_eq!(Error::InvalidFormat { text: TEXT.into() }, err);
        assert_eq!(
            format!("{err}"),
            format!("[Fraction] '{TEXT}' is not in the 'numerator/denominator' format")
        );
    }

    #[test]
    fn division_by_zero_display() {
        assert_eq!(
            "[Fraction] The denominator must not be zero",
            format!("{}", Error::DivisionByZero)
        );
    }
}
