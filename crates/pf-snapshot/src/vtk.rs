//! Legacy ASCII VTK unstructured-grid writer.
//!
//! Every `(pin, axial, ring)` cell is swept azimuthally into `resolution`
//! segments: wedges for the ring touching the pin axis, hexahedra for the
//! annular rings. Coordinates are written in centimeters.

use crate::error::{SnapshotError, SnapshotResult};
use crate::writer::{Snapshot, SnapshotSettings, SnapshotWriter};
use std::f64::consts::TAU;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

const VTK_WEDGE: u8 = 13;
const VTK_HEXAHEDRON: u8 = 12;

#[derive(Debug, Clone, Copy, Default)]
pub struct VtkWriter;

impl VtkWriter {
    pub fn new() -> Self {
        Self
    }

    /// Writes the full document to any sink.
    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        snapshot: &Snapshot<'_>,
        settings: &SnapshotSettings,
    ) -> SnapshotResult<()> {
        let mesh = Mesh::build(snapshot, settings)?;
        mesh.write(out, snapshot, settings)?;
        Ok(())
    }
}

impl SnapshotWriter for VtkWriter {
    fn write(
        &self,
        path: &Path,
        snapshot: &Snapshot<'_>,
        settings: &SnapshotSettings,
    ) -> SnapshotResult<()> {
        if settings.resolution < 3 {
            return Err(SnapshotError::InvalidSettings {
                what: format!("resolution must be at least 3, got {}", settings.resolution),
            });
        }

        let mesh = Mesh::build(snapshot, settings)?;
        let result = File::create(path).and_then(|file| {
            let mut w = BufWriter::new(file);
            mesh.write(&mut w, snapshot, settings)?;
            w.flush()
        });

        if let Err(source) = result {
            // Cleanup is best effort; the write error is returned.
            let _ = std::fs::remove_file(path);
            return Err(SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
        Ok(())
    }
}

struct Cell {
    kind: u8,
    first_point: usize,
    n_points: usize,
    /// Flat `(pin, axial, ring)` index of the field values this cell carries.
    owner: usize,
}

struct Mesh {
    points: Vec<[f64; 3]>,
    cells: Vec<Cell>,
}

impl Mesh {
    fn build(snapshot: &Snapshot<'_>, settings: &SnapshotSettings) -> SnapshotResult<Self> {
        snapshot.check_shape()?;
        let geometry = snapshot.geometry;
        let radial = geometry.radial_grid();
        let n_axial = snapshot.axial.n_axial();
        let n_rings = radial.n_rings();
        let segments = settings.resolution;

        let mut mesh = Mesh {
            points: Vec::new(),
            cells: Vec::new(),
        };

        for (pin, &(cx, cy)) in geometry.pin_layout().centers().iter().enumerate() {
            for axial in 0..n_axial {
                let Some((z0, z1)) = snapshot.axial.bounds(axial) else {
                    continue;
                };
                for ring in 0..n_rings {
                    if !settings.regions.includes(radial.is_fuel_ring(ring)) {
                        continue;
                    }
                    let Some((r_in, r_out)) = radial.ring_bounds(ring) else {
                        continue;
                    };
                    let owner = (pin * n_axial + axial) * n_rings + ring;
                    for s in 0..segments {
                        let t0 = TAU * s as f64 / segments as f64;
                        let t1 = TAU * (s + 1) as f64 / segments as f64;
                        let at = |r: f64, t: f64, z: f64| [cx + r * t.cos(), cy + r * t.sin(), z];
                        let first_point = mesh.points.len();
                        if ring == 0 && r_in <= 0.0 {
                            for z in [z0, z1] {
                                mesh.points.push([cx, cy, z]);
                                mesh.points.push(at(r_out, t0, z));
                                mesh.points.push(at(r_out, t1, z));
                            }
                            mesh.cells.push(Cell {
                                kind: VTK_WEDGE,
                                first_point,
                                n_points: 6,
                                owner,
                            });
                        } else {
                            for z in [z0, z1] {
                                mesh.points.push(at(r_in, t0, z));
                                mesh.points.push(at(r_out, t0, z));
                                mesh.points.push(at(r_out, t1, z));
                                mesh.points.push(at(r_in, t1, z));
                            }
                            mesh.cells.push(Cell {
                                kind: VTK_HEXAHEDRON,
                                first_point,
                                n_points: 8,
                                owner,
                            });
                        }
                    }
                }
            }
        }

        debug!(
            points = mesh.points.len(),
            cells = mesh.cells.len(),
            "Built snapshot mesh"
        );
        Ok(mesh)
    }

    fn write<W: Write>(
        &self,
        w: &mut W,
        snapshot: &Snapshot<'_>,
        settings: &SnapshotSettings,
    ) -> io::Result<()> {
        writeln!(w, "# vtk DataFile Version 3.0")?;
        writeln!(w, "pinflow surrogate snapshot")?;
        writeln!(w, "ASCII")?;
        writeln!(w, "DATASET UNSTRUCTURED_GRID")?;

        writeln!(w, "POINTS {} double", self.points.len())?;
        for [x, y, z] in &self.points {
            writeln!(w, "{x} {y} {z}")?;
        }

        let connectivity: usize = self.cells.iter().map(|c| c.n_points + 1).sum();
        writeln!(w, "CELLS {} {}", self.cells.len(), connectivity)?;
        for cell in &self.cells {
            write!(w, "{}", cell.n_points)?;
            for p in cell.first_point..cell.first_point + cell.n_points {
                write!(w, " {p}")?;
            }
            writeln!(w)?;
        }

        writeln!(w, "CELL_TYPES {}", self.cells.len())?;
        for cell in &self.cells {
            writeln!(w, "{}", cell.kind)?;
        }

        writeln!(w, "CELL_DATA {}", self.cells.len())?;
        let fields = snapshot.fields;
        if settings.data.temperature() {
            self.write_scalars(w, "temperature", fields.temperature_flat())?;
        }
        if settings.data.density() {
            self.write_scalars(w, "density", fields.density_flat())?;
        }
        if settings.data.source() {
            self.write_scalars(w, "source", fields.source_flat())?;
        }
        if settings.data.fluid_mask() {
            let mask = fields.fluid_mask_flat();
            writeln!(w, "SCALARS fluid_mask int 1")?;
            writeln!(w, "LOOKUP_TABLE default")?;
            for cell in &self.cells {
                writeln!(w, "{}", mask[cell.owner])?;
            }
        }
        Ok(())
    }

    fn write_scalars<W: Write>(&self, w: &mut W, name: &str, values: &[f64]) -> io::Result<()> {
        writeln!(w, "SCALARS {name} double 1")?;
        writeln!(w, "LOOKUP_TABLE default")?;
        for cell in &self.cells {
            writeln!(w, "{}", values[cell.owner])?;
        }
        Ok(())
    }
}
