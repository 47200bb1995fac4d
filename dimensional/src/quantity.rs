/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::base::Dimensionless;
use super::dimension::{DimDiv, DimInv, DimMul, Dimension, Inv, Prod, Quot};
use super::vector::DimensionVector;

/// A magnitude in SI base units, tagged at the type level with its
/// dimension `D`.
///
/// Quantities of the same dimension can be added and subtracted;
/// quantities of any dimension can be multiplied and divided, the
/// result's dimension being computed by the compiler. A scalar divided
/// by a quantity has the reciprocal dimension: `2.0 / SECOND` is two
/// hertz, not half a second.
///
/// Adding a length to a time does not build:
///
/// ```compile_fail
/// use dimensional::{METER, SECOND};
///
/// let _ = METER.apply(3.0) + SECOND.apply(2.0);
/// ```
///
/// Every operation exists both as an operator and as a `const fn`, so
/// derived units and constants can be declared as `const` items:
///
/// ```rust
/// use dimensional::{Quantity, KILOGRAM, METER, SECOND};
/// use dimensional::units::Force;
///
/// const NEWTON: Quantity<Force> = KILOGRAM.times(METER).per(SECOND.times(SECOND));
/// assert_eq!(NEWTON.dimensions(), [-2, 1, 1, 0, 0, 0, 0]);
/// assert_eq!((5.0 * NEWTON + 3.0 * NEWTON).value(), 8.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<D: Dimension> {
    value: f64,
    dimension: PhantomData<D>,
}

impl<D: Dimension> Quantity<D> {
    /// One unit of dimension `D`.
    pub const ONE: Self = Self::new(1.0);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Quantity {
            value,
            dimension: PhantomData,
        }
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The exponents of `D`, in the order time, length, mass, current,
    /// temperature, amount of substance, luminous intensity.
    pub const fn dimensions(self) -> [i32; 7] {
        D::VECTOR.as_array()
    }

    pub const fn dimension_vector(self) -> DimensionVector {
        D::VECTOR
    }

    /// Use this quantity as a unit: a quantity of the same dimension
    /// with magnitude `self.value() * scalar`. `METER.apply(5.0)` is
    /// five meters.
    #[inline]
    pub const fn apply(self, scalar: f64) -> Self {
        Self::new(self.value * scalar)
    }

    #[inline]
    pub const fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }

    #[inline]
    pub const fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }

    #[inline]
    pub const fn neg(self) -> Self {
        Self::new(-self.value)
    }

    #[inline]
    pub const fn mul_scalar(self, scalar: f64) -> Self {
        Self::new(self.value * scalar)
    }

    #[inline]
    pub const fn div_scalar(self, scalar: f64) -> Self {
        Self::new(self.value / scalar)
    }

    /// Product of two quantities; exponents add.
    #[inline]
    pub const fn times<R: Dimension>(
        self,
        rhs: Quantity<R>,
    ) -> Quantity<Prod<D, R>>
    where
        D: DimMul<R>,
    {
        Quantity::new(self.value * rhs.value)
    }

    /// Quotient of two quantities; exponents subtract.
    #[inline]
    pub const fn per<R: Dimension>(
        self,
        rhs: Quantity<R>,
    ) -> Quantity<Quot<D, R>>
    where
        D: DimDiv<R>,
    {
        Quantity::new(self.value / rhs.value)
    }

    /// Reciprocal; exponents are negated.
    #[inline]
    pub const fn recip(self) -> Quantity<Inv<D>>
    where
        D: DimInv,
    {
        Quantity::new(1.0 / self.value)
    }
}

impl<D: Dimension> Default for Quantity<D> {
    fn default() -> Self {
        Self::ONE
    }
}

impl<D: Dimension> PartialEq for Quantity<D> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D: Dimension> PartialOrd for Quantity<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<D: Dimension> Add<Quantity<D>> for Quantity<D> {
    type Output = Quantity<D>;
    fn add(self, rhs: Quantity<D>) -> Quantity<D> {
        Quantity::add(self, rhs)
    }
}

impl<D: Dimension> Sub<Quantity<D>> for Quantity<D> {
    type Output = Quantity<D>;
    fn sub(self, rhs: Quantity<D>) -> Quantity<D> {
        Quantity::sub(self, rhs)
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Quantity<D>;
    fn neg(self) -> Quantity<D> {
        Quantity::neg(self)
    }
}

impl<D: Dimension, R: Dimension> Mul<Quantity<R>> for Quantity<D>
where
    D: DimMul<R>,
{
    type Output = Quantity<Prod<D, R>>;
    fn mul(self, rhs: Quantity<R>) -> Self::Output {
        self.times(rhs)
    }
}

impl<D: Dimension, R: Dimension> Div<Quantity<R>> for Quantity<D>
where
    D: DimDiv<R>,
{
    type Output = Quantity<Quot<D, R>>;
    fn div(self, rhs: Quantity<R>) -> Self::Output {
        self.per(rhs)
    }
}

impl<D: Dimension> Mul<f64> for Quantity<D> {
    type Output = Quantity<D>;
    fn mul(self, rhs: f64) -> Quantity<D> {
        self.mul_scalar(rhs)
    }
}

impl<D: Dimension> Div<f64> for Quantity<D> {
    type Output = Quantity<D>;
    fn div(self, rhs: f64) -> Quantity<D> {
        self.div_scalar(rhs)
    }
}

impl<D: Dimension> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;
    fn mul(self, rhs: Quantity<D>) -> Quantity<D> {
        rhs.mul_scalar(self)
    }
}

/* A scalar divided by a quantity has the reciprocal dimension. */
impl<D: Dimension> Div<Quantity<D>> for f64
where
    D: DimInv,
{
    type Output = Quantity<Inv<D>>;
    fn div(self, rhs: Quantity<D>) -> Quantity<Inv<D>> {
        Quantity::new(self / rhs.value)
    }
}

impl<D: Dimension> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(0.0), |acc, q| acc + q)
    }
}

impl From<f64> for Quantity<Dimensionless> {
    fn from(value: f64) -> Self {
        Quantity::new(value)
    }
}

impl From<Quantity<Dimensionless>> for f64 {
    fn from(quantity: Quantity<Dimensionless>) -> Self {
        quantity.value
    }
}
