/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The seven SI base dimensions, in the order of the slots of a
/// dimension vector.

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
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum BaseDimension {
    Time,
    Length,
    Mass,
    Current,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
}

pub(crate) const BASE_DIMENSIONS: [BaseDimension; 7] = [
    BaseDimension::Time,
    BaseDimension::Length,
    BaseDimension::Mass,
    BaseDimension::Current,
    BaseDimension::Temperature,
    BaseDimension::AmountOfSubstance,
    BaseDimension::LuminousIntensity,
];

impl BaseDimension {
    pub const LIST: &[Self] = &BASE_DIMENSIONS;

    /// Slot of this dimension in a dimension vector.
    pub const fn index(&self) -> usize {
        match self {
            BaseDimension::Time => 0,
            BaseDimension::Length => 1,
            BaseDimension::Mass => 2,
            BaseDimension::Current => 3,
            BaseDimension::Temperature => 4,
            BaseDimension::AmountOfSubstance => 5,
            BaseDimension::LuminousIntensity => 6,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            BaseDimension::Time => "T",
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Current => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::AmountOfSubstance => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            BaseDimension::Time => "time",
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Current => "electric current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::AmountOfSubstance => "amount of substance",
            BaseDimension::LuminousIntensity => "luminous intensity",
        }
    }

    /// Symbol of the SI base unit measuring this dimension.
    pub const fn si_unit(&self) -> &'static str {
        match self {
            BaseDimension::Time => "s",
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::AmountOfSubstance => "mol",
            BaseDimension::LuminousIntensity => "cd",
        }
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}
