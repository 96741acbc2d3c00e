//! Shape of converged radial profiles under non-negative heating.

use pf_conduction::{ColumnInput, ConductionSolver, Conductivity, RadialConduction};
use pf_core::constants::INLET_TEMPERATURE_K;
use proptest::prelude::*;

const PELLET_RADIUS: f64 = 0.004;
const R_CLAD: [f64; 3] = [0.005, 0.00525, 0.0055];

fn fuel_grid(n_rings: usize) -> Vec<f64> {
    (0..=n_rings)
        .map(|i| PELLET_RADIUS * i as f64 / n_rings as f64)
        .collect()
}

fn sources() -> impl Strategy<Value = Vec<f64>> {
    (1usize..=4).prop_flat_map(|n_fuel| prop::collection::vec(0.0..3.0e8_f64, n_fuel))
}

fn conductivity() -> impl Strategy<Value = Conductivity> {
    prop_oneof![
        Just(Conductivity::default()),
        (2.0..6.0_f64, 10.0..20.0_f64)
            .prop_map(|(fuel, clad)| Conductivity::Constant { fuel, clad }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn heated_profile_falls_toward_the_clad_surface(
        fuel_source in sources(),
        conductivity in conductivity(),
    ) {
        let r_fuel = fuel_grid(fuel_source.len());
        let mut source = fuel_source.clone();
        source.extend([0.0; R_CLAD.len() - 1]);

        let input = ColumnInput {
            source: &source,
            r_fuel: &r_fuel,
            r_clad: &R_CLAD,
            boundary_temperature: INLET_TEMPERATURE_K,
            tolerance: 1e-8,
        };
        let mut t = vec![INLET_TEMPERATURE_K; source.len()];
        RadialConduction::new(conductivity)
            .solve_column(&input, &mut t)
            .unwrap();

        for v in &t {
            prop_assert!(v.is_finite());
            prop_assert!(*v >= INLET_TEMPERATURE_K - 1e-6, "{:?}", t);
        }
        for pair in t.windows(2) {
            prop_assert!(pair[0] >= pair[1] - 1e-6, "{:?}", t);
        }
    }
}
