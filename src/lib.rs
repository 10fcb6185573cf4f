// ============================================================================
// MODULE DECLARATIONS
// ============================================================================
pub mod core;
pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod util;

// ============================================================================
// RE-EXPORTS (Public API)
// ============================================================================
pub use crate::core::atom::{Atom, Placement};
pub use crate::core::cell::{fcc_basis_sites, LatticeSystem, UnitCell};
pub use crate::core::grid::{CoordinateQueue, GridPoint};
pub use crate::error::{NpgenError, Result};
pub use crate::geometry::{
    BuildReport, Chirality, Facet, Form, OutputLabels, RadiusUnit, Shape, ShapeKind,
};
pub use crate::io::debug_csv::DebugCsvWriter;
pub use crate::io::mmcif::MmcifWriter;

use anyhow::Context;

// ============================================================================
// HIGH-LEVEL INTERFACE
// ============================================================================

/// Everything one nanoparticle build needs, as plain strings at the edge:
/// the per-material drivers fill this in and hand it to
/// [`generate_nanoparticle`].
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub shape: ShapeKind,
    /// Outer radius as a decimal string, in `radius_unit`.
    pub radius: String,
    pub radius_unit: String,
    pub lattice_type: String,
    /// Element symbol for the four-atom basis.
    pub element: String,
    /// Atomic radius in angstroms (decimal string).
    pub atomic_radius: String,
    pub formal_charge: i32,
    /// Cubic lattice constant in angstroms (decimal string).
    pub lattice_constant: String,
    /// Significant decimal digits carried through every computation.
    pub precision: usize,
    pub file_name: String,
    pub structure_name: String,
    pub structure_index: String,
    /// Also stream every in-bounds grid point to `build_debug_<name>.csv`.
    pub debug_csv: bool,
}

/// The master pipeline: validate the configuration, assemble the FCC
/// basis, construct the shape and run the one-shot build.
pub fn generate_nanoparticle(config: &BuildConfig) -> anyhow::Result<BuildReport> {
    let unit: RadiusUnit = config
        .radius_unit
        .parse()
        .context("radius unit not recognized")?;
    let lattice: LatticeSystem = config
        .lattice_type
        .parse()
        .context("lattice type not recognized")?;

    // 1. BASIS PHASE: one atom per canonical FCC fraction
    let basis: Vec<Atom> = fcc_basis_sites(config.precision)?
        .into_iter()
        .map(|site| {
            Atom::new(
                &config.element,
                &config.atomic_radius,
                config.formal_charge,
                site,
                config.precision,
            )
        })
        .collect::<Result<_>>()
        .context("basis atom construction failed")?;

    // 2. GEOMETRY PHASE
    let mut shape = Shape::new(
        config.shape,
        &config.radius,
        unit,
        lattice,
        basis,
        &config.lattice_constant,
        config.precision,
        OutputLabels {
            file_name: config.file_name.clone(),
            structure_name: config.structure_name.clone(),
            structure_index: config.structure_index.clone(),
        },
    )
    .context("shape construction failed")?;

    // 3. BUILD PHASE
    shape
        .build(config.debug_csv)
        .with_context(|| format!("build failed for {}", config.shape.name()))
}
