/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::ops::{Add, Div, Mul, Neg, Sub};

use log::{debug, trace};

use super::dimension::Dimension;
use super::error::DimensionError;
use super::quantity::Quantity;
use super::vector::DimensionVector;

/// A quantity whose dimension is only known at run time.
///
/// Additions and subtractions are checked when they happen and fail
/// with [`DimensionError::DimensionMismatch`]; nothing is coerced.
/// Products, quotients and powers fail instead of overflowing an
/// exponent.
/// Converting back into a statically typed [`Quantity`] checks the
/// dimension as well.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct DynQuantity(pub f64, pub DimensionVector);

impl DynQuantity {
    pub fn new(value: f64, dimension: DimensionVector) -> Self {
        DynQuantity(value, dimension)
    }

    pub fn from_value(value: f64) -> Self {
        DynQuantity(value, DimensionVector::DIMENSIONLESS)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn dimension(&self) -> DimensionVector {
        self.1
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, DimensionError> {
        let dimension = check(self.1 + rhs.1)?;
        Ok(DynQuantity(self.0 + rhs.0, dimension))
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, DimensionError> {
        let dimension = check(self.1 - rhs.1)?;
        Ok(DynQuantity(self.0 - rhs.0, dimension))
    }

    /// Raise to a positive integer power by repeated multiplication.
    pub fn powi(self, n: i32) -> Result<Self, DimensionError> {
        if n <= 0 {
            debug!("rejected exponent {} for {}", n, self.1);
            return Err(DimensionError::InvalidExponent(n));
        }
        let dimension = check(
            self.1
                .checked_powi(n)
                .ok_or(DimensionError::PowerOverflow(self.1, n)),
        )?;
        let mut value = self.0;
        for _ in 1..n {
            value *= self.0;
        }
        Ok(DynQuantity(value, dimension))
    }

    /// Recover a statically typed quantity.
    pub fn downcast<D: Dimension>(self) -> Result<Quantity<D>, DimensionError> {
        Quantity::try_from(self)
    }
}

fn check(
    result: Result<DimensionVector, DimensionError>,
) -> Result<DimensionVector, DimensionError> {
    result.map_err(|e| {
        debug!("{}", e);
        e
    })
}

impl<D: Dimension> From<Quantity<D>> for DynQuantity {
    fn from(quantity: Quantity<D>) -> Self {
        trace!("erasing dimension {}", D::VECTOR);
        DynQuantity(quantity.value(), D::VECTOR)
    }
}

impl<D: Dimension> TryFrom<DynQuantity> for Quantity<D> {
    type Error = DimensionError;
    fn try_from(quantity: DynQuantity) -> Result<Self, DimensionError> {
        match D::VECTOR.compatible(&quantity.1) {
            true => {
                trace!("recovered dimension {}", D::VECTOR);
                Ok(Quantity::new(quantity.0))
            }
            false => {
                debug!(
                    "cannot recover {} from a quantity of dimension {}",
                    D::VECTOR,
                    quantity.1
                );
                Err(DimensionError::DimensionMismatch(D::VECTOR, quantity.1))
            }
        }
    }
}

impl Add<DynQuantity> for DynQuantity {
    type Output = Result<DynQuantity, DimensionError>;
    fn add(self, rhs: DynQuantity) -> Result<DynQuantity, DimensionError> {
        self.checked_add(rhs)
    }
}

impl Sub<DynQuantity> for DynQuantity {
    type Output = Result<DynQuantity, DimensionError>;
    fn sub(self, rhs: DynQuantity) -> Result<DynQuantity, DimensionError> {
        self.checked_sub(rhs)
    }
}

impl Neg for DynQuantity {
    type Output = DynQuantity;
    fn neg(self) -> DynQuantity {
        DynQuantity(-self.0, self.1)
    }
}

impl Mul<DynQuantity> for DynQuantity {
    type Output = Result<DynQuantity, DimensionError>;
    fn mul(self, rhs: DynQuantity) -> Result<DynQuantity, DimensionError> {
        Ok(DynQuantity(self.0 * rhs.0, check(self.1 * rhs.1)?))
    }
}

impl Div<DynQuantity> for DynQuantity {
    type Output = Result<DynQuantity, DimensionError>;
    fn div(self, rhs: DynQuantity) -> Result<DynQuantity, DimensionError> {
        Ok(DynQuantity(self.0 / rhs.0, check(self.1 / rhs.1)?))
    }
}

impl Mul<f64> for DynQuantity {
    type Output = DynQuantity;
    fn mul(self, rhs: f64) -> DynQuantity {
        DynQuantity(self.0 * rhs, self.1)
    }
}

impl Div<f64> for DynQuantity {
    type Output = DynQuantity;
    fn div(self, rhs: f64) -> DynQuantity {
        DynQuantity(self.0 / rhs, self.1)
    }
}
