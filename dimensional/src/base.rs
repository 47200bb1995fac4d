/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The dimensionless dimension, the seven SI base dimensions, and one
//! unit of each. Every other dimension is derived from these.

use typenum::{P1, Z0};

use super::dimension::Dim;
use super::quantity::Quantity;

pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type Time = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
pub type Mass = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
pub type Current = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
pub type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
pub type AmountOfSubstance = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
pub type LuminousIntensity = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

pub type Scalar = Quantity<Dimensionless>;
pub type Seconds = Quantity<Time>;
pub type Meters = Quantity<Length>;
pub type Kilograms = Quantity<Mass>;
pub type Amperes = Quantity<Current>;
pub type Kelvins = Quantity<Temperature>;
pub type Moles = Quantity<AmountOfSubstance>;
pub type Candelas = Quantity<LuminousIntensity>;

pub const SCALAR: Scalar = Quantity::ONE;
pub const SECOND: Seconds = Quantity::ONE;
pub const METER: Meters = Quantity::ONE;
pub const KILOGRAM: Kilograms = Quantity::ONE;
pub const AMPERE: Amperes = Quantity::ONE;
pub const KELVIN: Kelvins = Quantity::ONE;
pub const MOLE: Moles = Quantity::ONE;
pub const CANDELA: Candelas = Quantity::ONE;
