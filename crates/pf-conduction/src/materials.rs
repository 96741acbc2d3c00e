//! Thermal conductivity of fuel and clad.

/// Conductivity model for the pellet and the clad, W/(m K).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Conductivity {
    /// UO2 (95% dense) for the pellet and Zircaloy for the clad, both
    /// temperature dependent.
    #[default]
    Correlation,
    /// Temperature-independent conductivities.
    Constant { fuel: f64, clad: f64 },
}

impl Conductivity {
    pub fn fuel(&self, t_k: f64) -> f64 {
        match *self {
            Conductivity::Correlation => uo2(t_k),
            Conductivity::Constant { fuel, .. } => fuel,
        }
    }

    pub fn clad(&self, t_k: f64) -> f64 {
        match *self {
            Conductivity::Correlation => zircaloy(t_k),
            Conductivity::Constant { clad, .. } => clad,
        }
    }
}

/// Phonon + electronic conductivity of 95% dense UO2.
fn uo2(t_k: f64) -> f64 {
    let t = t_k / 1000.0;
    100.0 / (7.5408 + 17.692 * t + 3.6142 * t * t) + 6400.0 / t.powf(2.5) * (-16.35 / t).exp()
}

/// Zircaloy cubic fit, valid roughly 300-1800 K.
fn zircaloy(t_k: f64) -> f64 {
    7.51 + 2.09e-2 * t_k - 1.45e-5 * t_k * t_k + 7.67e-9 * t_k * t_k * t_k
}
