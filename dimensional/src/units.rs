/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Derived SI units. Each unit is composed from the base units; its
//! declared dimension makes the compiler check the composition.

use typenum::{N1, N2, N3, P1, P2, P3, P4, U2, U3, U4, Z0};

use super::base::{AMPERE, KILOGRAM, METER, SCALAR, SECOND};
use super::dimension::Dim;
use super::power::pow;
use super::quantity::Quantity;

pub type Area = Dim<Z0, P2, Z0, Z0, Z0, Z0, Z0>;
pub type Volume = Dim<Z0, P3, Z0, Z0, Z0, Z0, Z0>;
pub type Velocity = Dim<N1, P1, Z0, Z0, Z0, Z0, Z0>;
pub type Acceleration = Dim<N2, P1, Z0, Z0, Z0, Z0, Z0>;
pub type Frequency = Dim<N1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type Force = Dim<N2, P1, P1, Z0, Z0, Z0, Z0>;
pub type Pressure = Dim<N2, N1, P1, Z0, Z0, Z0, Z0>;
pub type Energy = Dim<N2, P2, P1, Z0, Z0, Z0, Z0>;
pub type Power = Dim<N3, P2, P1, Z0, Z0, Z0, Z0>;
pub type Charge = Dim<P1, Z0, Z0, P1, Z0, Z0, Z0>;
pub type ElectricPotential = Dim<N3, P2, P1, N1, Z0, Z0, Z0>;
pub type Capacitance = Dim<P4, N2, N1, P2, Z0, Z0, Z0>;
pub type Resistance = Dim<N3, P2, P1, N2, Z0, Z0, Z0>;
pub type Conductance = Dim<P3, N2, N1, P2, Z0, Z0, Z0>;
pub type MagneticFlux = Dim<N2, P2, P1, N1, Z0, Z0, Z0>;
pub type MagneticFluxDensity = Dim<N2, Z0, P1, N1, Z0, Z0, Z0>;
pub type Inductance = Dim<N2, P2, P1, N2, Z0, Z0, Z0>;

pub const HERTZ: Quantity<Frequency> = SCALAR.per(SECOND);
pub const NEWTON: Quantity<Force> =
    KILOGRAM.times(METER).per(pow::<U2, _>(SECOND));
pub const PASCAL: Quantity<Pressure> =
    KILOGRAM.per(METER.times(pow::<U2, _>(SECOND)));
pub const JOULE: Quantity<Energy> =
    KILOGRAM.times(pow::<U2, _>(METER)).per(pow::<U2, _>(SECOND));
pub const WATT: Quantity<Power> =
    KILOGRAM.times(pow::<U2, _>(METER)).per(pow::<U3, _>(SECOND));
pub const COULOMB: Quantity<Charge> = AMPERE.times(SECOND);
pub const VOLT: Quantity<ElectricPotential> = KILOGRAM
    .times(pow::<U2, _>(METER))
    .per(pow::<U3, _>(SECOND).times(AMPERE));
pub const FARAD: Quantity<Capacitance> = pow::<U4, _>(SECOND)
    .times(pow::<U2, _>(AMPERE))
    .per(KILOGRAM.times(pow::<U2, _>(METER)));
pub const OHM: Quantity<Resistance> = KILOGRAM
    .times(pow::<U2, _>(METER))
    .per(pow::<U3, _>(SECOND).times(pow::<U2, _>(AMPERE)));
pub const SIEMENS: Quantity<Conductance> = OHM.recip();
pub const WEBER: Quantity<MagneticFlux> = KILOGRAM
    .times(pow::<U2, _>(METER))
    .per(pow::<U2, _>(SECOND).times(AMPERE));
pub const TESLA: Quantity<MagneticFluxDensity> =
    KILOGRAM.per(pow::<U2, _>(SECOND).times(AMPERE));
pub const HENRY: Quantity<Inductance> = WEBER.per(AMPERE);
