use std::{
    num::{NonZeroI16, ParseIntError, TryFromIntError},
    str::FromStr,
};

use serde::Deserialize;
use thiserror::Error;

/// An `i16` that is at least 1. Face counts are always natural, so the
/// rolling code never sees a zero-sided or negative die.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "i16")]
pub struct NaturalI16(NonZeroI16);

impl NaturalI16 {
    pub fn new(value: NonZeroI16) -> Result<Self, NaturalI16Error> {
        value.try_into()
    }

    pub fn get(&self) -> i16 {
        self.get_non_zero().get()
    }

    pub fn get_non_zero(&self) -> NonZeroI16 {
        self.0
    }

    pub fn min() -> Self {
        Self::one()
    }
}

pub use natural_consts::NaturalI16Constants;
mod natural_consts {
    use super::NaturalI16;
    use std::num::NonZeroI16;

    macro_rules! natural_const {
        ($name:ident: $num:expr$(,)?) => {
            fn $name() -> NaturalI16 {
                NaturalI16::new(
                    NonZeroI16::new($num).expect(concat!(stringify!($num), " != 0"))
                ).expect(concat!(stringify!($num), " >= 1"))
            }
        };

        ($name:ident: $num:expr, $($names:ident: $nums:expr),+$(,)?) => {
            natural_const!($name: $num);
            natural_const! { $($names: $nums),+ }
        };
    }

    pub trait NaturalI16Constants {
        natural_const! {
            one: 1,
            four: 4,
            six: 6,
            ten: 10,
            twenty: 20,
            one_hundred: 100,
        }
    }

    impl NaturalI16Constants for NaturalI16 {}
}

impl Default for NaturalI16 {
    fn default() -> Self {
        Self::min()
    }
}

impl std::fmt::Debug for NaturalI16 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl std::fmt::Display for NaturalI16 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl TryFrom<NonZeroI16> for NaturalI16 {
    type Error = NaturalI16Error;

    fn try_from(value: NonZeroI16) -> Result<Self, Self::Error> {
        if value.get() >= 1 {
            Ok(Self(value))
        } else {
            Err(NaturalI16Error::ValueNegative(value))
        }
    }
}

impl TryFrom<i16> for NaturalI16 {
    type Error = NaturalI16Error;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        let non_zero: NonZeroI16 = value.try_into()?;
        non_zero.try_into()
    }
}

impl FromStr for NaturalI16 {
    type Err = NaturalI16Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let non_zero: NonZeroI16 = s.parse()?;
        non_zero.try_into()
    }
}

impl From<NaturalI16> for i16 {
    fn from(value: NaturalI16) -> Self {
        value.get()
    }
}

impl From<NaturalI16> for i32 {
    fn from(value: NaturalI16) -> Self {
        value.get().into()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum NaturalI16Error {
    #[error("could not parse a nonzero value")]
    ParsedZero(#[from] ParseIntError),

    #[error("value cannot be zero")]
    TryFromZero(#[from] TryFromIntError),

    #[error("value `{0}` is negative")]
    ValueNegative(NonZeroI16),
}
