/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

use super::base_dimension::BaseDimension;
use super::error::DimensionError;

/// Exponents over the seven SI base dimensions, in the order
/// time, length, mass, current, temperature, amount of substance,
/// luminous intensity.
///
/// This is the run-time image of a quantity's dimension. Statically
/// typed quantities carry it in their type (see
/// [`Dimension::VECTOR`](crate::Dimension::VECTOR)).

#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Default,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct DimensionVector([i32; 7]);

impl DimensionVector {
    pub const DIMENSIONLESS: Self = DimensionVector([0; 7]);

    pub const fn new(exponents: [i32; 7]) -> Self {
        DimensionVector(exponents)
    }

    /// The vector of a single base dimension to the first power.
    pub const fn base(dimension: BaseDimension) -> Self {
        let mut exponents = [0; 7];
        exponents[dimension.index()] = 1;
        DimensionVector(exponents)
    }

    pub const fn exponent(&self, dimension: BaseDimension) -> i32 {
        self.0[dimension.index()]
    }

    pub const fn as_array(&self) -> [i32; 7] {
        self.0
    }

    /// Two vectors are compatible iff all seven exponents are equal.
    pub const fn compatible(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < 7 {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.compatible(&Self::DIMENSIONLESS)
    }

    /// Dimension of the product of two quantities.
    pub const fn product(self, rhs: Self) -> Self {
        let mut exponents = self.0;
        let mut i = 0;
        while i < 7 {
            exponents[i] += rhs.0[i];
            i += 1;
        }
        DimensionVector(exponents)
    }

    /// Dimension of the quotient of two quantities.
    pub const fn quotient(self, rhs: Self) -> Self {
        self.product(rhs.inverse())
    }

    pub const fn inverse(self) -> Self {
        self.powi(-1)
    }

    pub const fn powi(self, n: i32) -> Self {
        let mut exponents = self.0;
        let mut i = 0;
        while i < 7 {
            exponents[i] *= n;
            i += 1;
        }
        DimensionVector(exponents)
    }

    /// Product that reports exponent overflow instead of wrapping.
    pub const fn checked_product(self, rhs: Self) -> Option<Self> {
        let mut exponents = self.0;
        let mut i = 0;
        while i < 7 {
            exponents[i] = match exponents[i].checked_add(rhs.0[i]) {
                Some(e) => e,
                None => return None,
            };
            i += 1;
        }
        Some(DimensionVector(exponents))
    }

    pub const fn checked_quotient(self, rhs: Self) -> Option<Self> {
        let mut exponents = self.0;
        let mut i = 0;
        while i < 7 {
            exponents[i] = match exponents[i].checked_sub(rhs.0[i]) {
                Some(e) => e,
                None => return None,
            };
            i += 1;
        }
        Some(DimensionVector(exponents))
    }

    pub const fn checked_powi(self, n: i32) -> Option<Self> {
        let mut exponents = self.0;
        let mut i = 0;
        while i < 7 {
            exponents[i] = match exponents[i].checked_mul(n) {
                Some(e) => e,
                None => return None,
            };
            i += 1;
        }
        Some(DimensionVector(exponents))
    }

    pub fn iter(&self) -> impl Iterator<Item = (BaseDimension, i32)> + '_ {
        BaseDimension::LIST.iter().map(|d| (*d, self.exponent(*d)))
    }
}

impl From<[i32; 7]> for DimensionVector {
    fn from(exponents: [i32; 7]) -> Self {
        DimensionVector(exponents)
    }
}

impl From<DimensionVector> for [i32; 7] {
    fn from(vector: DimensionVector) -> Self {
        vector.0
    }
}

impl From<BaseDimension> for DimensionVector {
    fn from(dimension: BaseDimension) -> Self {
        DimensionVector::base(dimension)
    }
}

/* Operations on dimension vectors, used for run-time checks. */

impl Mul<DimensionVector> for DimensionVector {
    type Output = Result<DimensionVector, DimensionError>;
    fn mul(
        self,
        rhs: DimensionVector,
    ) -> Result<DimensionVector, DimensionError> {
        self.checked_product(rhs)
            .ok_or(DimensionError::ExponentOverflow(self, rhs))
    }
}

impl Div<DimensionVector> for DimensionVector {
    type Output = Result<DimensionVector, DimensionError>;
    fn div(
        self,
        rhs: DimensionVector,
    ) -> Result<DimensionVector, DimensionError> {
        self.checked_quotient(rhs)
            .ok_or(DimensionError::ExponentOverflow(self, rhs))
    }
}

impl Add<DimensionVector> for DimensionVector {
    type Output = Result<DimensionVector, DimensionError>;
    fn add(
        self,
        rhs: DimensionVector,
    ) -> Result<DimensionVector, DimensionError> {
        match self.compatible(&rhs) {
            true => Ok(self),
            false => Err(DimensionError::DimensionMismatch(self, rhs)),
        }
    }
}

impl Sub<DimensionVector> for DimensionVector {
    type Output = Result<DimensionVector, DimensionError>;
    fn sub(
        self,
        rhs: DimensionVector,
    ) -> Result<DimensionVector, DimensionError> {
        match self.compatible(&rhs) {
            true => Ok(self),
            false => Err(DimensionError::DimensionMismatch(self, rhs)),
        }
    }
}

impl Display for DimensionVector {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let factors = |positive: bool| {
            self.iter()
                .filter(|(_, p)| *p != 0 && (*p > 0) == positive)
                .map(|(d, p)| {
                    format!("{}{}", d, superscript(p.unsigned_abs()))
                })
                .collect::<Vec<String>>()
        };
        let (num, den) = (factors(true), factors(false));
        match num.is_empty() {
            true => write!(f, "1")?,
            false => write!(f, "{}", num.join("\u{22c5}"))?,
        }
        if !den.is_empty() {
            write!(f, "/{}", den.join("\u{22c5}"))?;
        }
        Ok(())
    }
}

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

fn superscript(val: u32) -> String {
    if val != 1 {
        val.to_string()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(n) => SS[n as usize],
                None => c,
            })
            .collect()
    } else {
        "".to_string()
    }
}
