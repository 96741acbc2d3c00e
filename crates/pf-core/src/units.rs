// pf-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, MassRate as UomMassRate,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type MassRate = UomMassRate;
pub type Temperature = UomThermodynamicTemperature;

/// Geometry is configured in centimeters; the conduction backends work in meters.
pub const CM_TO_M: f64 = 0.01;

/// Surrogate source terms are W/cm^3; the conduction backends expect W/m^3.
pub const W_PER_CM3_TO_W_PER_M3: f64 = 1.0e6;

#[inline]
pub fn cm(v: f64) -> Length {
    use uom::si::length::centimeter;
    Length::new::<centimeter>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn cm2(v: f64) -> Area {
    use uom::si::area::square_centimeter;
    Area::new::<square_centimeter>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

/// Scale a slice of centimeter values into meters.
pub fn cm_slice_to_m(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| v * CM_TO_M).collect()
}

/// Scale a slice of W/cm^3 source values into W/m^3.
pub fn w_per_cm3_slice_to_w_per_m3(values: &[f64]) -> Vec<f64> {
    values.iter().map(|q| q * W_PER_CM3_TO_W_PER_M3).collect()
}

pub mod constants {
    use super::*;

    /// Coolant inlet temperature used as the clad-surface boundary condition.
    pub const INLET_TEMPERATURE_K: f64 = 523.15;

    #[inline]
    pub fn inlet_temperature() -> Temperature {
        k(INLET_TEMPERATURE_K)
    }
}
