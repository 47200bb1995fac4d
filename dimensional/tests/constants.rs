/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use approx::assert_relative_eq;
use typenum::U2;

use dimensional::constants::*;
use dimensional::units::*;
use dimensional::{pow, KELVIN, KILOGRAM, METER, MOLE, SECOND};

#[test]
fn derived_unit_dimensions() {
    assert_eq!(NEWTON.dimensions(), [-2, 1, 1, 0, 0, 0, 0]);
    assert_eq!(JOULE.dimensions(), [-2, 2, 1, 0, 0, 0, 0]);
    assert_eq!(WATT.dimensions(), [-3, 2, 1, 0, 0, 0, 0]);
    assert_eq!(PASCAL.dimensions(), [-2, -1, 1, 0, 0, 0, 0]);
    assert_eq!(HERTZ.dimensions(), [-1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(COULOMB.dimensions(), [1, 0, 0, 1, 0, 0, 0]);
    assert_eq!(VOLT.dimensions(), [-3, 2, 1, -1, 0, 0, 0]);
    assert_eq!(FARAD.dimensions(), [4, -2, -1, 2, 0, 0, 0]);
    assert_eq!(OHM.dimensions(), [-3, 2, 1, -2, 0, 0, 0]);
    assert_eq!(SIEMENS.dimensions(), [3, -2, -1, 2, 0, 0, 0]);
    assert_eq!(WEBER.dimensions(), [-2, 2, 1, -1, 0, 0, 0]);
    assert_eq!(TESLA.dimensions(), [-2, 0, 1, -1, 0, 0, 0]);
    assert_eq!(HENRY.dimensions(), [-2, 2, 1, -2, 0, 0, 0]);
}

#[test]
fn derived_units_are_unit_magnitude() {
    for value in [
        NEWTON.value(),
        JOULE.value(),
        WATT.value(),
        PASCAL.value(),
        HERTZ.value(),
        COULOMB.value(),
        VOLT.value(),
        FARAD.value(),
        OHM.value(),
        SIEMENS.value(),
        WEBER.value(),
        TESLA.value(),
        HENRY.value(),
    ] {
        assert_eq!(value, 1.0);
    }
}

#[test]
fn unit_relations() {
    assert_eq!(JOULE, NEWTON * METER);
    assert_eq!(WATT, JOULE / SECOND);
    assert_eq!(VOLT, WATT / dimensional::AMPERE);
    assert_eq!(OHM, VOLT / dimensional::AMPERE);
    assert_eq!(WEBER, VOLT * SECOND);
    assert_eq!(TESLA, WEBER / pow::<U2, _>(METER));
    assert_eq!(PASCAL, NEWTON / pow::<U2, _>(METER));
    assert_eq!(FARAD, COULOMB / VOLT);
}

#[test]
fn constant_values() {
    assert_eq!(LIGHT_SPEED.value(), 299792458.0);
    assert_eq!(LIGHT_SPEED.dimensions(), [-1, 1, 0, 0, 0, 0, 0]);
    assert_relative_eq!(STEFAN_BOLTZMANN.value(), 5.670374e-8);
    assert_eq!(STEFAN_BOLTZMANN.dimensions(), [-3, 0, 1, 0, -4, 0, 0]);
    assert_relative_eq!(GRAVITATIONAL.value(), 6.674302e-11);
    assert_eq!(GRAVITATIONAL.dimensions(), [-2, 3, -1, 0, 0, 0, 0]);
    assert_relative_eq!(PLANCK.value(), 6.626070e-34);
    assert_relative_eq!(REDUCED_PLANCK.value(), 1.054572e-34);
    assert_eq!(PLANCK.dimensions(), REDUCED_PLANCK.dimensions());
    assert_relative_eq!(ELEMENTARY_CHARGE.value(), 1.602177e-19);
    assert_relative_eq!(BOLTZMANN.value(), 1.380649e-23);
    assert_eq!(BOLTZMANN.dimensions(), [-2, 2, 1, 0, -1, 0, 0]);
    assert_relative_eq!(AVOGADRO.value(), 6.022141e23);
    assert_eq!(AVOGADRO.dimensions(), [0, 0, 0, 0, 0, -1, 0]);
    assert_relative_eq!(VACUUM_PERMITTIVITY.value(), 8.854188e-12);
    assert_eq!(VACUUM_PERMITTIVITY.dimensions(), [4, -3, -1, 2, 0, 0, 0]);
    assert_relative_eq!(VACUUM_PERMEABILITY.value(), 1.256637e-6);
    assert_eq!(VACUUM_PERMEABILITY.dimensions(), [-2, 1, 1, -2, 0, 0, 0]);
}

#[test]
fn constant_relations() {
    /* c² = 1 / (ε₀ μ₀) */
    let c2 = 1.0 / (VACUUM_PERMITTIVITY * VACUUM_PERMEABILITY);
    assert_eq!(c2.dimensions(), pow::<U2, _>(LIGHT_SPEED).dimensions());
    assert_relative_eq!(
        c2.value(),
        pow::<U2, _>(LIGHT_SPEED).value(),
        max_relative = 1e-5
    );

    /* R = N_A k */
    let gas_constant = AVOGADRO * BOLTZMANN;
    assert_eq!(gas_constant.dimensions(), (JOULE / (MOLE * KELVIN)).dimensions());
    assert_relative_eq!(gas_constant.value(), 8.314462, max_relative = 1e-6);

    /* E = m c² */
    let energy = KILOGRAM.apply(2.0) * pow::<U2, _>(LIGHT_SPEED);
    assert_eq!(energy.dimensions(), JOULE.dimensions());
}
