/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Dimension vectors at the type level.
//!
//! A dimension is the zero-sized marker [`Dim`], whose seven parameters
//! are `typenum` signed integers holding the exponents of time, length,
//! mass, current, temperature, amount of substance and luminous
//! intensity. The traits in this module compute the dimension of a
//! product, quotient, power or reciprocal during type checking, so no
//! dimension information exists at run time unless it is asked for
//! through [`Dimension::VECTOR`].

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

use typenum::{Diff, Integer, Negate, Sum};

use super::vector::DimensionVector;

/// A dimension: a quantity's "type".
pub trait Dimension: Copy + Debug + 'static {
    /// Run-time image of the exponents.
    const VECTOR: DimensionVector;
}

/// Dimension with exponents `S` (time), `M` (length), `KG` (mass),
/// `A` (current), `K` (temperature), `MOL` (amount of substance) and
/// `CD` (luminous intensity).
pub struct Dim<S, M, KG, A, K, MOL, CD>(PhantomData<(S, M, KG, A, K, MOL, CD)>);

impl<S, M, KG, A, K, MOL, CD> Dim<S, M, KG, A, K, MOL, CD> {
    pub const fn new() -> Self {
        Dim(PhantomData)
    }
}

impl<S, M, KG, A, K, MOL, CD> Clone for Dim<S, M, KG, A, K, MOL, CD> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, M, KG, A, K, MOL, CD> Copy for Dim<S, M, KG, A, K, MOL, CD> {}

impl<S, M, KG, A, K, MOL, CD> Default for Dim<S, M, KG, A, K, MOL, CD> {
    fn default() -> Self {
        Dim::new()
    }
}

impl<S, M, KG, A, K, MOL, CD> PartialEq for Dim<S, M, KG, A, K, MOL, CD> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<S, M, KG, A, K, MOL, CD> Eq for Dim<S, M, KG, A, K, MOL, CD> {}

impl<S, M, KG, A, K, MOL, CD> Debug for Dim<S, M, KG, A, K, MOL, CD>
where
    S: Integer,
    M: Integer,
    KG: Integer,
    A: Integer,
    K: Integer,
    MOL: Integer,
    CD: Integer,
{
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "Dim{:?}",
            [S::I32, M::I32, KG::I32, A::I32, K::I32, MOL::I32, CD::I32]
        )
    }
}

impl<S, M, KG, A, K, MOL, CD> Dimension for Dim<S, M, KG, A, K, MOL, CD>
where
    S: Integer,
    M: Integer,
    KG: Integer,
    A: Integer,
    K: Integer,
    MOL: Integer,
    CD: Integer,
{
    const VECTOR: DimensionVector = DimensionVector::new([
        S::I32,
        M::I32,
        KG::I32,
        A::I32,
        K::I32,
        MOL::I32,
        CD::I32,
    ]);
}

/// Compatibility predicate: `true` iff both dimensions have identical
/// exponents. Usable in constant context.
pub const fn same_dimension<A: Dimension, B: Dimension>() -> bool {
    A::VECTOR.compatible(&B::VECTOR)
}

/* Operations on dimensions, used for type-checking. */

/// Dimension of a product (component-wise sum of exponents).
pub trait DimMul<Rhs: Dimension>: Dimension {
    type Output: Dimension;
}

/// Dimension of a quotient (component-wise difference of exponents).
pub trait DimDiv<Rhs: Dimension>: Dimension {
    type Output: Dimension;
}

/// Dimension raised to the integer power `E`.
pub trait DimPow<E: Integer>: Dimension {
    type Output: Dimension;
}

/// Dimension of a reciprocal.
pub trait DimInv: Dimension {
    type Output: Dimension;
}

pub type Prod<A, B> = <A as DimMul<B>>::Output;
pub type Quot<A, B> = <A as DimDiv<B>>::Output;
pub type Pow<D, E> = <D as DimPow<E>>::Output;
pub type Inv<D> = <D as DimInv>::Output;

impl<S1, M1, KG1, A1, K1, MOL1, CD1, S2, M2, KG2, A2, K2, MOL2, CD2>
    DimMul<Dim<S2, M2, KG2, A2, K2, MOL2, CD2>>
    for Dim<S1, M1, KG1, A1, K1, MOL1, CD1>
where
    Dim<S1, M1, KG1, A1, K1, MOL1, CD1>: Dimension,
    Dim<S2, M2, KG2, A2, K2, MOL2, CD2>: Dimension,
    S1: Add<S2>,
    M1: Add<M2>,
    KG1: Add<KG2>,
    A1: Add<A2>,
    K1: Add<K2>,
    MOL1: Add<MOL2>,
    CD1: Add<CD2>,
    Dim<
        Sum<S1, S2>,
        Sum<M1, M2>,
        Sum<KG1, KG2>,
        Sum<A1, A2>,
        Sum<K1, K2>,
        Sum<MOL1, MOL2>,
        Sum<CD1, CD2>,
    >: Dimension,
{
    type Output = Dim<
        Sum<S1, S2>,
        Sum<M1, M2>,
        Sum<KG1, KG2>,
        Sum<A1, A2>,
        Sum<K1, K2>,
        Sum<MOL1, MOL2>,
        Sum<CD1, CD2>,
    >;
}

impl<S1, M1, KG1, A1, K1, MOL1, CD1, S2, M2, KG2, A2, K2, MOL2, CD2>
    DimDiv<Dim<S2, M2, KG2, A2, K2, MOL2, CD2>>
    for Dim<S1, M1, KG1, A1, K1, MOL1, CD1>
where
    Dim<S1, M1, KG1, A1, K1, MOL1, CD1>: Dimension,
    Dim<S2, M2, KG2, A2, K2, MOL2, CD2>: Dimension,
    S1: Sub<S2>,
    M1: Sub<M2>,
    KG1: Sub<KG2>,
    A1: Sub<A2>,
    K1: Sub<K2>,
    MOL1: Sub<MOL2>,
    CD1: Sub<CD2>,
    Dim<
        Diff<S1, S2>,
        Diff<M1, M2>,
        Diff<KG1, KG2>,
        Diff<A1, A2>,
        Diff<K1, K2>,
        Diff<MOL1, MOL2>,
        Diff<CD1, CD2>,
    >: Dimension,
{
    type Output = Dim<
        Diff<S1, S2>,
        Diff<M1, M2>,
        Diff<KG1, KG2>,
        Diff<A1, A2>,
        Diff<K1, K2>,
        Diff<MOL1, MOL2>,
        Diff<CD1, CD2>,
    >;
}

impl<S, M, KG, A, K, MOL, CD, E> DimPow<E> for Dim<S, M, KG, A, K, MOL, CD>
where
    Dim<S, M, KG, A, K, MOL, CD>: Dimension,
    E: Integer,
    S: Mul<E>,
    M: Mul<E>,
    KG: Mul<E>,
    A: Mul<E>,
    K: Mul<E>,
    MOL: Mul<E>,
    CD: Mul<E>,
    Dim<
        typenum::Prod<S, E>,
        typenum::Prod<M, E>,
        typenum::Prod<KG, E>,
        typenum::Prod<A, E>,
        typenum::Prod<K, E>,
        typenum::Prod<MOL, E>,
        typenum::Prod<CD, E>,
    >: Dimension,
{
    type Output = Dim<
        typenum::Prod<S, E>,
        typenum::Prod<M, E>,
        typenum::Prod<KG, E>,
        typenum::Prod<A, E>,
        typenum::Prod<K, E>,
        typenum::Prod<MOL, E>,
        typenum::Prod<CD, E>,
    >;
}

impl<S, M, KG, A, K, MOL, CD> DimInv for Dim<S, M, KG, A, K, MOL, CD>
where
    Dim<S, M, KG, A, K, MOL, CD>: Dimension,
    S: Neg,
    M: Neg,
    KG: Neg,
    A: Neg,
    K: Neg,
    MOL: Neg,
    CD: Neg,
    Dim<
        Negate<S>,
        Negate<M>,
        Negate<KG>,
        Negate<A>,
        Negate<K>,
        Negate<MOL>,
        Negate<CD>,
    >: Dimension,
{
    type Output = Dim<
        Negate<S>,
        Negate<M>,
        Negate<KG>,
        Negate<A>,
        Negate<K>,
        Negate<MOL>,
        Negate<CD>,
    >;
}
