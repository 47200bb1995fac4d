/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use typenum::{NonZero, PInt, Unsigned};

use super::dimension::{DimPow, Dimension, Pow};
use super::quantity::Quantity;

/// Type of a quantity of dimension `D` raised to the positive power `N`.
pub type Powered<D, N> = Quantity<Pow<D, PInt<N>>>;

/// Raise a quantity to a positive integer power.
///
/// Every exponent of the dimension is multiplied by `N`; the magnitude
/// is obtained by `N - 1` successive multiplications. The exponent is
/// a `typenum` unsigned integer, and zero is rejected at build time:
///
/// ```rust
/// use dimensional::{pow, METER};
/// use typenum::U3;
///
/// let volume = pow::<U3, _>(METER.apply(2.0));
/// assert_eq!(volume.dimensions(), [0, 3, 0, 0, 0, 0, 0]);
/// assert_eq!(volume.value(), 8.0);
/// ```
///
/// ```compile_fail
/// use dimensional::{pow, METER};
/// use typenum::U0;
///
/// let _ = pow::<U0, _>(METER);
/// ```
///
/// Negative powers are expressed with [`Quantity::recip`] or division.
pub const fn pow<N, D>(quantity: Quantity<D>) -> Powered<D, N>
where
    N: Unsigned + NonZero,
    D: DimPow<PInt<N>>,
{
    let factor = quantity.value();
    let mut value = factor;
    let mut i = 1;
    while i < N::USIZE {
        value *= factor;
        i += 1;
    }
    Quantity::new(value)
}

impl<D: Dimension> Quantity<D> {
    /// Method form of [`pow`].
    pub const fn powi<N>(self) -> Powered<D, N>
    where
        N: Unsigned + NonZero,
        D: DimPow<PInt<N>>,
    {
        pow::<N, D>(self)
    }
}
