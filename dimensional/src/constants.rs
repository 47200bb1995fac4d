/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Physical constants, in SI base units.

use typenum::{N1, N2, N3, N4, P1, P2, P3, P4, U2, U3, U4, Z0};

use super::base::{AMPERE, KELVIN, KILOGRAM, METER, MOLE, SCALAR, SECOND};
use super::dimension::Dim;
use super::power::pow;
use super::quantity::Quantity;
use super::units::{Charge, Velocity, COULOMB, FARAD, JOULE, NEWTON};

pub type Action = Dim<N1, P2, P1, Z0, Z0, Z0, Z0>;

pub const STEFAN_BOLTZMANN: Quantity<Dim<N3, Z0, P1, Z0, N4, Z0, Z0>> =
    KILOGRAM
        .per(pow::<U3, _>(SECOND).times(pow::<U4, _>(KELVIN)))
        .apply(5.670374e-8);

pub const LIGHT_SPEED: Quantity<Velocity> =
    METER.per(SECOND).apply(299792458.0);

pub const GRAVITATIONAL: Quantity<Dim<N2, P3, N1, Z0, Z0, Z0, Z0>> =
    pow::<U3, _>(METER)
        .per(KILOGRAM.times(pow::<U2, _>(SECOND)))
        .apply(6.674302e-11);

pub const PLANCK: Quantity<Action> = JOULE.times(SECOND).apply(6.626070e-34);

/* h / 2π */
pub const REDUCED_PLANCK: Quantity<Action> =
    JOULE.times(SECOND).apply(1.054572e-34);

pub const ELEMENTARY_CHARGE: Quantity<Charge> = COULOMB.apply(1.602177e-19);

pub const BOLTZMANN: Quantity<Dim<N2, P2, P1, Z0, N1, Z0, Z0>> =
    JOULE.per(KELVIN).apply(1.380649e-23);

pub const AVOGADRO: Quantity<Dim<Z0, Z0, Z0, Z0, Z0, N1, Z0>> =
    SCALAR.per(MOLE).apply(6.022141e23);

pub const VACUUM_PERMITTIVITY: Quantity<Dim<P4, N3, N1, P2, Z0, Z0, Z0>> =
    FARAD.per(METER).apply(8.854188e-12);

pub const VACUUM_PERMEABILITY: Quantity<Dim<N2, P1, P1, N2, Z0, Z0, Z0>> =
    NEWTON.per(pow::<U2, _>(AMPERE)).apply(1.256637e-6);
