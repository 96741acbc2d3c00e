//! Flattened views preserve pin-major, axial-second, ring-minor order.

use pf_fields::{Field3D, FieldStore, Shape3};
use pf_geometry::{AxialGrid, GeometryModel, GeometryParams};
use proptest::prelude::*;

#[test]
fn store_sized_from_geometry() {
    let geom = GeometryModel::new(GeometryParams {
        n_pins_x: 2,
        n_pins_y: 2,
        pin_pitch: 1.26,
        clad_inner_radius: 0.50,
        clad_outer_radius: 0.55,
        pellet_radius: 0.40,
        mass_flowrate: 1.0,
        n_fuel_rings: 2,
        n_clad_rings: 1,
    })
    .unwrap();
    let axial = AxialGrid::new(vec![0.0, 1.0, 2.0, 3.0]).unwrap();

    let store = FieldStore::new(Shape3::from_geometry(&geom, &axial));
    assert_eq!(store.shape(), Shape3::new(4, 3, 3));
    assert_eq!(store.source_flat().len(), 36);
}

#[test]
fn flat_order_matches_nested_loops() {
    let shape = Shape3::new(3, 2, 4);
    let mut field: Field3D<f64> = Field3D::zeros(shape);
    for p in 0..3 {
        for a in 0..2 {
            for r in 0..4 {
                field.set(p, a, r, (100 * p + 10 * a + r) as f64).unwrap();
            }
        }
    }

    let mut expected = Vec::new();
    for p in 0..3 {
        for a in 0..2 {
            for r in 0..4 {
                expected.push((100 * p + 10 * a + r) as f64);
            }
        }
    }
    assert_eq!(field.as_slice(), expected.as_slice());
}

fn shaped_values() -> impl Strategy<Value = (Shape3, Vec<f64>)> {
    (1_usize..6, 1_usize..6, 1_usize..6).prop_flat_map(|(p, a, r)| {
        let shape = Shape3::new(p, a, r);
        prop::collection::vec(-1.0e6_f64..1.0e6, shape.len()).prop_map(move |v| (shape, v))
    })
}

proptest! {
    #[test]
    fn unflatten_of_flatten_is_identity((shape, values) in shaped_values()) {
        let field = Field3D::from_flat(shape, values.clone()).unwrap();
        let again = Field3D::from_flat(shape, field.to_flat()).unwrap();
        prop_assert_eq!(&again, &field);
        prop_assert_eq!(again.into_flat(), values);
    }

    #[test]
    fn get_agrees_with_flat_offset((shape, values) in shaped_values()) {
        let field = Field3D::from_flat(shape, values.clone()).unwrap();
        for p in 0..shape.n_pins {
            for a in 0..shape.n_axial {
                for r in 0..shape.n_rings {
                    let flat = (p * shape.n_axial + a) * shape.n_rings + r;
                    prop_assert_eq!(field.get(p, a, r).unwrap(), values[flat]);
                }
            }
        }
    }
}
