/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use proptest::prelude::*;
use typenum::{U2, U3};

use dimensional::units::{ElectricPotential, Force, VOLT};
use dimensional::{
    pow, Dimension, DimensionVector, DynQuantity, Length, Time, AMPERE,
    KILOGRAM, METER, SECOND,
};

fn magnitude() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn nonzero() -> impl Strategy<Value = f64> {
    1.0e-3..1.0e6f64
}

fn vector() -> impl Strategy<Value = DimensionVector> {
    prop::array::uniform7(-4..=4i32).prop_map(DimensionVector::new)
}

proptest! {
    #[test]
    fn product_dimension_is_sum(a in magnitude(), b in magnitude()) {
        let force = KILOGRAM.apply(a) * METER / (SECOND * SECOND);
        let volt = VOLT.apply(b);
        let product = force * volt;
        let expected = Force::VECTOR.product(ElectricPotential::VECTOR);
        prop_assert_eq!(product.dimension_vector(), expected);
        prop_assert_eq!(product.value(), a * b);
    }

    #[test]
    fn quotient_dimension_is_difference(a in magnitude(), b in nonzero()) {
        let quotient = METER.apply(a) / (SECOND.apply(b) * AMPERE);
        let mut expected = Length::VECTOR.as_array();
        expected[0] -= 1;
        expected[3] -= 1;
        prop_assert_eq!(quotient.dimensions(), expected);
        prop_assert_eq!(quotient.value(), a / b);
    }

    #[test]
    fn doubling(a in magnitude()) {
        let q = SECOND.apply(a);
        prop_assert_eq!((q + q).value(), 2.0 * a);
        prop_assert_eq!((q + q).dimensions(), Time::VECTOR.as_array());
    }

    #[test]
    fn scalar_homogeneity(a in magnitude(), k in magnitude()) {
        let q = METER.apply(a);
        prop_assert_eq!((q * k).value(), a * k);
        prop_assert_eq!((k * q).value(), a * k);
        prop_assert_eq!((q * k).dimensions(), q.dimensions());
        prop_assert_eq!((q / k).dimensions(), q.dimensions());
    }

    #[test]
    fn power_scales_exponents(a in magnitude()) {
        let q = METER.apply(a) / SECOND;
        prop_assert_eq!(pow::<U2, _>(q).dimension_vector(), q.dimension_vector().powi(2));
        prop_assert_eq!(pow::<U3, _>(q).dimension_vector(), q.dimension_vector().powi(3));
        prop_assert_eq!(pow::<U3, _>(q).value(), a * a * a);
    }

    #[test]
    fn static_and_dynamic_agree(a in magnitude(), b in magnitude()) {
        let x = KILOGRAM.apply(a) / SECOND;
        let y = METER.apply(b);
        let dynamic = DynQuantity::from(x) * DynQuantity::from(y);
        prop_assert_eq!(dynamic, Ok(DynQuantity::from(x * y)));
    }

    #[test]
    fn dynamic_addition_requires_compatibility(
        a in magnitude(), b in magnitude(), u in vector(), v in vector()
    ) {
        let sum = DynQuantity::new(a, u) + DynQuantity::new(b, v);
        prop_assert_eq!(sum.is_ok(), u == v);
    }

    #[test]
    fn dynamic_closure(u in vector(), v in vector(), a in magnitude(), b in magnitude()) {
        let (x, y) = (DynQuantity::new(a, u), DynQuantity::new(b, v));
        for i in 0..7 {
            let (product, quotient) = ((x * y).unwrap(), (x / y).unwrap());
            prop_assert_eq!(product.dimension().as_array()[i], u.as_array()[i] + v.as_array()[i]);
            prop_assert_eq!(quotient.dimension().as_array()[i], u.as_array()[i] - v.as_array()[i]);
        }
    }

    #[test]
    fn dynamic_power(u in vector(), a in magnitude(), n in 1..5i32) {
        let p = DynQuantity::new(a, u).powi(n).unwrap();
        let mut expected = a;
        for _ in 1..n {
            expected *= a;
        }
        prop_assert_eq!(p.value(), expected);
        prop_assert_eq!(p.dimension(), u.powi(n));
    }
}
