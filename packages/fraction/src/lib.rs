pub use self::{
    error::{Error, Result},
    fraction::{Fraction, Units},
};

mod error;
mod fraction;
