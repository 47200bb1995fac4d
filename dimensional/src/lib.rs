/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! SI quantities whose dimensions are checked by the compiler.
//!
//! A [`Quantity<D>`] is an `f64` magnitude in SI base units; its
//! dimension `D` (exponents over time, length, mass, current,
//! temperature, amount of substance and luminous intensity) lives only
//! in its type. Multiplying and dividing quantities computes the
//! result's dimension while type checking, and adding quantities of
//! different dimensions does not build:
//!
//! ```rust
//! use dimensional::{units::NEWTON, METER};
//!
//! let force = 5.0 * NEWTON;
//! let work = force * METER.apply(2.0);
//! assert_eq!(work.dimensions(), [-2, 2, 1, 0, 0, 0, 0]);
//! assert_eq!(work.value(), 10.0);
//! ```
//!
//! ```compile_fail
//! use dimensional::{units::NEWTON, METER};
//!
//! let _ = 5.0 * NEWTON + 3.0 * METER;
//! ```
//!
//! Dimensions only known at run time go through [`DynQuantity`], whose
//! operations return [`DimensionError`] instead.

pub mod base;
pub mod base_dimension;
pub mod constants;
pub mod dimension;
pub mod dynamic;
pub mod error;
pub mod power;
pub mod quantity;
pub mod units;
pub mod vector;

pub use base::{
    AmountOfSubstance, Current, Dimensionless, Length, LuminousIntensity,
    Mass, Temperature, Time, AMPERE, CANDELA, KELVIN, KILOGRAM, METER, MOLE,
    SCALAR, SECOND,
};
pub use base_dimension::BaseDimension;
pub use dimension::{
    same_dimension, Dim, DimDiv, DimInv, DimMul, DimPow, Dimension, Inv, Pow,
    Prod, Quot,
};
pub use dynamic::DynQuantity;
pub use error::DimensionError;
pub use power::{pow, Powered};
pub use quantity::Quantity;
pub use vector::DimensionVector;
