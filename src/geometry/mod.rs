//! Shape framework: radius handling, the polymorphic containment test and
//! the build pipeline that streams atoms into the mmCIF writer.

pub mod solids;

use crate::core::atom::Atom;
use crate::core::cell::{LatticeSystem, UnitCell};
use crate::core::grid::CoordinateQueue;
use crate::error::{NpgenError, Result};
use crate::io::debug_csv::DebugCsvWriter;
use crate::io::mmcif::MmcifWriter;
use crate::math::bignum::{self, abs};
use crate::math::vector::Triple;
use dashu_float::DBig;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Accepted radius units; conversion factors to angstroms are exact in
/// decimal (pm x 0.01, nm x 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusUnit {
    Picometers,
    Angstroms,
    Nanometers,
}

impl RadiusUnit {
    pub fn to_angstroms(&self, value: &DBig) -> DBig {
        match self {
            RadiusUnit::Picometers => value / &DBig::from(100),
            RadiusUnit::Angstroms => value.clone(),
            RadiusUnit::Nanometers => value * &DBig::from(10),
        }
    }
}

impl FromStr for RadiusUnit {
    type Err = NpgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pm" | "pico-meters" | "pico meters" => Ok(RadiusUnit::Picometers),
            "a" | "å" | "angstrom" => Ok(RadiusUnit::Angstroms),
            "nm" | "nanometer" => Ok(RadiusUnit::Nanometers),
            other => Err(NpgenError::Validation(format!(
                "unknown radius unit '{other}' (expect pm, A, Å, Angstrom, nm)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chirality {
    Dextro,
    Levo,
}

/// Canonical (midsphere) or biscribed (common circumsphere + insphere)
/// form of a polyhedron; the two differ only in their constant vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Canonical,
    Biscribed,
}

/// The bounding solid catalogue. Chirality and form are parameters, not
/// separate kinds; chiral pairs share tables and biscribed/canonical
/// pairs share face structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Sphere,
    Cube,
    Tetrahedron,
    TruncatedTetrahedron,
    TriakisTetrahedron,
    TruncatedTriakisTetrahedron,
    Cuboctahedron,
    SnubCuboctahedron { chirality: Chirality, form: Form },
    TruncatedOctahedron { form: Form },
    TetrakisHexahedron,
    Rhombicuboctahedron,
    DeltoidalIcositetrahedron,
    PentagonalIcositetrahedron { chirality: Chirality, form: Form },
    Dodecahedron,
    Icosahedron,
    Icosidodecahedron,
    RhombicTriacontahedron,
    TruncatedIcosidodecahedron { form: Form },
    DisdyakisTriacontahedron { form: Form },
    HexakisIcosahedron { form: Form },
    Rhombicosidodecahedron,
    DeltoidalHexecontahedron,
    SnubDodecahedron { chirality: Chirality },
    PentagonalHexecontahedron { chirality: Chirality },
    Bilunabirotunda,
    ElongatedPentagonalDipyramid,
}

impl ShapeKind {
    fn base_name(&self) -> &'static str {
        use ShapeKind::*;
        match self {
            Sphere => "sphere",
            Cube => "cube",
            Tetrahedron => "tetrahedron",
            TruncatedTetrahedron => "truncated-tetrahedron",
            TriakisTetrahedron => "triakis-tetrahedron",
            TruncatedTriakisTetrahedron => "truncated-triakis-tetrahedron",
            Cuboctahedron => "cuboctahedron",
            SnubCuboctahedron { .. } => "snub-cuboctahedron",
            TruncatedOctahedron { .. } => "truncated-octahedron",
            TetrakisHexahedron => "tetrakis-hexahedron",
            Rhombicuboctahedron => "rhombicuboctahedron",
            DeltoidalIcositetrahedron => "deltoidal-icositetrahedron",
            PentagonalIcositetrahedron { .. } => "pentagonal-icositetrahedron",
            Dodecahedron => "dodecahedron",
            Icosahedron => "icosahedron",
            Icosidodecahedron => "icosidodecahedron",
            RhombicTriacontahedron => "rhombic-triacontahedron",
            TruncatedIcosidodecahedron { .. } => "truncated-icosidodecahedron",
            DisdyakisTriacontahedron { .. } => "disdyakis-triacontahedron",
            HexakisIcosahedron { .. } => "hexakis-icosahedron",
            Rhombicosidodecahedron => "rhombicosidodecahedron",
            DeltoidalHexecontahedron => "deltoidal-hexecontahedron",
            SnubDodecahedron { .. } => "snub-dodecahedron",
            PentagonalHexecontahedron { .. } => "pentagonal-hexecontahedron",
            Bilunabirotunda => "bilunabirotunda",
            ElongatedPentagonalDipyramid => "elongated-pentagonal-dipyramid",
        }
    }

    fn chirality(&self) -> Option<Chirality> {
        use ShapeKind::*;
        match self {
            SnubCuboctahedron { chirality, .. }
            | PentagonalIcositetrahedron { chirality, .. }
            | SnubDodecahedron { chirality }
            | PentagonalHexecontahedron { chirality } => Some(*chirality),
            _ => None,
        }
    }

    fn form(&self) -> Option<Form> {
        use ShapeKind::*;
        match self {
            SnubCuboctahedron { form, .. }
            | TruncatedOctahedron { form }
            | PentagonalIcositetrahedron { form, .. }
            | TruncatedIcosidodecahedron { form }
            | DisdyakisTriacontahedron { form }
            | HexakisIcosahedron { form } => Some(*form),
            _ => None,
        }
    }

    /// Kebab-case name with `:levo` / `:biscribed` qualifiers where they
    /// differ from the defaults.
    pub fn name(&self) -> String {
        let mut out = self.base_name().to_string();
        if self.chirality() == Some(Chirality::Levo) {
            out.push_str(":levo");
        }
        if self.form() == Some(Form::Biscribed) {
            out.push_str(":biscribed");
        }
        out
    }
}

impl FromStr for ShapeKind {
    type Err = NpgenError;

    fn from_str(s: &str) -> Result<Self> {
        use ShapeKind::*;
        let lower = s.trim().to_lowercase();
        let mut parts = lower.split(':');
        let base = parts.next().unwrap_or_default();
        let mut chirality = Chirality::Dextro;
        let mut form = Form::Canonical;
        for flag in parts {
            match flag {
                "dextro" => chirality = Chirality::Dextro,
                "levo" => chirality = Chirality::Levo,
                "canonical" => form = Form::Canonical,
                "biscribed" => form = Form::Biscribed,
                other => {
                    return Err(NpgenError::Validation(format!(
                        "unknown shape qualifier ':{other}'"
                    )))
                }
            }
        }
        let kind = match base {
            "sphere" => Sphere,
            "cube" => Cube,
            "tetrahedron" => Tetrahedron,
            "truncated-tetrahedron" => TruncatedTetrahedron,
            "triakis-tetrahedron" => TriakisTetrahedron,
            "truncated-triakis-tetrahedron" => TruncatedTriakisTetrahedron,
            "cuboctahedron" => Cuboctahedron,
            "snub-cuboctahedron" => SnubCuboctahedron { chirality, form },
            "truncated-octahedron" => TruncatedOctahedron { form },
            "tetrakis-hexahedron" => TetrakisHexahedron,
            "rhombicuboctahedron" => Rhombicuboctahedron,
            "deltoidal-icositetrahedron" => DeltoidalIcositetrahedron,
            "pentagonal-icositetrahedron" => PentagonalIcositetrahedron { chirality, form },
            "dodecahedron" => Dodecahedron,
            "icosahedron" => Icosahedron,
            "icosidodecahedron" => Icosidodecahedron,
            "rhombic-triacontahedron" => RhombicTriacontahedron,
            "truncated-icosidodecahedron" => TruncatedIcosidodecahedron { form },
            "disdyakis-triacontahedron" => DisdyakisTriacontahedron { form },
            "hexakis-icosahedron" => HexakisIcosahedron { form },
            "rhombicosidodecahedron" => Rhombicosidodecahedron,
            "deltoidal-hexecontahedron" => DeltoidalHexecontahedron,
            "snub-dodecahedron" => SnubDodecahedron { chirality },
            "pentagonal-hexecontahedron" => PentagonalHexecontahedron { chirality },
            "bilunabirotunda" => Bilunabirotunda,
            "elongated-pentagonal-dipyramid" => ElongatedPentagonalDipyramid,
            other => {
                return Err(NpgenError::Validation(format!("unknown shape '{other}'")))
            }
        };
        Ok(kind)
    }
}

/// One face of a convex polyhedron: the ordered vertex ring (the first
/// vertex anchors the half-space test) and the outward unit normal.
#[derive(Debug, Clone)]
pub struct Facet {
    pub verts: Vec<Triple>,
    pub normal: Triple,
}

impl Facet {
    pub fn anchor(&self) -> &Triple {
        &self.verts[0]
    }
}

/// Precomputed containment data.
#[derive(Debug, Clone)]
enum Bounds {
    Sphere { radius_sq: DBig },
    Cube { half_side: DBig },
    Hull(Vec<Facet>),
}

/// Output file labels: the file stem and the identifiers written into the
/// mmCIF header.
#[derive(Debug, Clone)]
pub struct OutputLabels {
    pub file_name: String,
    pub structure_name: String,
    pub structure_index: String,
}

/// What a finished build produced.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub atoms: u64,
    pub grid_points: u64,
    pub points_inside: u64,
    pub output: PathBuf,
    pub debug_output: Option<PathBuf>,
}

/// A bounding shape wired to its unit cell and coordinate source. The
/// containment tables are immutable after construction; `build` may run
/// once.
pub struct Shape {
    kind: ShapeKind,
    radius: DBig,
    lattice_constant: DBig,
    precision: usize,
    cell: UnitCell,
    queue: CoordinateQueue,
    bounds: Bounds,
    labels: OutputLabels,
    built: bool,
}

impl Shape {
    /// Construct a shape: converts the radius to angstroms, checks the
    /// lattice type, wires the unit cell and coordinate queue, and
    /// precomputes the facet tables. Every validation failure here is
    /// fatal.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: ShapeKind,
        radius: &str,
        unit: RadiusUnit,
        lattice: LatticeSystem,
        basis: Vec<Atom>,
        lattice_constant: &str,
        precision: usize,
        labels: OutputLabels,
    ) -> Result<Shape> {
        if precision == 0 {
            return Err(NpgenError::Validation(
                "precision must be a positive digit count".into(),
            ));
        }
        let radius_in = bignum::parse(radius, precision)?;
        let radius = unit.to_angstroms(&radius_in);
        if radius < DBig::ZERO {
            return Err(NpgenError::Validation(format!(
                "radius must be non-negative, got {radius}"
            )));
        }
        let cell = match lattice {
            LatticeSystem::Fcc => UnitCell::fcc(basis, lattice_constant, precision)?,
        };
        let (a, _, _) = cell.lengths();
        let queue = CoordinateQueue::for_radius(&radius, a, precision)?;
        let bounds = match kind {
            ShapeKind::Sphere => Bounds::Sphere {
                radius_sq: &radius * &radius,
            },
            ShapeKind::Cube => Bounds::Cube {
                half_side: radius.clone(),
            },
            _ => Bounds::Hull(solids::hull_facets(kind, &radius, precision)?),
        };
        let lattice_constant = a.clone();
        debug!(
            shape = %kind.name(),
            radius = %radius,
            grid_points = queue.len(),
            "shape constructed"
        );
        Ok(Shape {
            kind,
            radius,
            lattice_constant,
            precision,
            cell,
            queue,
            bounds,
            labels,
            built: false,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Outer radius in angstroms.
    pub fn radius(&self) -> &DBig {
        &self.radius
    }

    pub fn lattice_constant(&self) -> &DBig {
        &self.lattice_constant
    }

    pub fn unit_cell(&self) -> &UnitCell {
        &self.cell
    }

    pub fn coordinates(&self) -> &CoordinateQueue {
        &self.queue
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Exact containment of a Cartesian point (angstroms). A point on a
    /// face plane counts as inside; no epsilon is involved.
    pub fn contains(&self, cart: &Triple) -> Result<bool> {
        if self.kind == ShapeKind::Icosahedron {
            // The icosahedron predicate was dead code upstream; failing
            // loudly beats silently rejecting every point.
            return Err(NpgenError::Unsupported(
                "icosahedron containment is not implemented".into(),
            ));
        }
        match &self.bounds {
            Bounds::Sphere { radius_sq } => Ok(cart.dot(cart) <= *radius_sq),
            Bounds::Cube { half_side } => {
                let ax = abs(&cart.x);
                let ay = abs(&cart.y);
                let az = abs(&cart.z);
                let mut m = ax;
                if ay > m {
                    m = ay;
                }
                if az > m {
                    m = az;
                }
                Ok(m <= *half_side)
            }
            Bounds::Hull(facets) => {
                for f in facets {
                    let d = f.normal.dot(&cart.sub(f.anchor()));
                    if d > DBig::ZERO {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }

    /// The build pipeline: drain the half-step grid, filter by
    /// containment, look up basis occupancy, stream placed atoms into the
    /// mmCIF writer (and every in-bounds grid point into the debug CSV
    /// when enabled). Runs at most once per shape; both output files
    /// appear atomically on success, and a failure mid-stream leaves no
    /// final files behind.
    pub fn build(&mut self, debug_stream: bool) -> Result<BuildReport> {
        if self.built {
            return Err(NpgenError::State(
                "build() has already run for this shape".into(),
            ));
        }
        self.built = true;

        let mut cif = MmcifWriter::create(&self.labels.file_name)?;
        cif.write_header(&self.cell, &self.labels)?;
        let mut dbg = if debug_stream {
            let mut w = DebugCsvWriter::create(&self.labels.file_name)?;
            w.write_header()?;
            Some(w)
        } else {
            None
        };

        let mut index: u64 = 0;
        let mut inside: u64 = 0;
        while let Some(point) = self.queue.pop() {
            let frac = point.fractional(self.precision);
            let cart = frac.scale(&self.lattice_constant);
            if !self.contains(&cart)? {
                continue;
            }
            inside += 1;
            match self.cell.site_at(&frac) {
                Some(atom) => {
                    let placed = atom.place(index, cart.clone(), frac.clone());
                    cif.append(&placed)?;
                    if let Some(w) = dbg.as_mut() {
                        w.append(&frac, &cart, true)?;
                    }
                    index += 1;
                }
                None => {
                    if let Some(w) = dbg.as_mut() {
                        w.append(&frac, &cart, false)?;
                    }
                }
            }
        }

        let output = cif.finalize()?;
        let debug_output = match dbg {
            Some(w) => Some(w.finalize()?),
            None => None,
        };
        debug!(atoms = index, inside, "build finished");
        Ok(BuildReport {
            atoms: index,
            grid_points: self.queue.len(),
            points_inside: inside,
            output,
            debug_output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::fcc_basis_sites;

    fn gold_basis(precision: usize) -> Vec<Atom> {
        fcc_basis_sites(precision)
            .unwrap()
            .into_iter()
            .map(|site| Atom::new("Au", "1.44", 0, site, precision).unwrap())
            .collect()
    }

    fn shape(kind: ShapeKind, radius: &str, unit: RadiusUnit) -> Shape {
        Shape::new(
            kind,
            radius,
            unit,
            LatticeSystem::Fcc,
            gold_basis(60),
            "4.08",
            60,
            OutputLabels {
                file_name: "test".into(),
                structure_name: "test".into(),
                structure_index: "1".into(),
            },
        )
        .unwrap()
    }

    #[test]
    fn radius_units_convert_exactly() {
        let s_nm = shape(ShapeKind::Sphere, "0.5", RadiusUnit::Nanometers);
        let s_a = shape(ShapeKind::Sphere, "5", RadiusUnit::Angstroms);
        let s_pm = shape(ShapeKind::Sphere, "500", RadiusUnit::Picometers);
        assert_eq!(s_nm.radius(), s_a.radius());
        assert_eq!(s_a.radius(), s_pm.radius());
    }

    #[test]
    fn sphere_containment_includes_the_boundary() {
        let s = shape(ShapeKind::Sphere, "5", RadiusUnit::Angstroms);
        let on = Triple::parse("5", "0", "0", 60).unwrap();
        let inside = Triple::parse("3", "0", "4", 60).unwrap(); // |.| = 5
        let out = Triple::parse("5.0000001", "0", "0", 60).unwrap();
        assert!(s.contains(&on).unwrap());
        assert!(s.contains(&inside).unwrap());
        assert!(!s.contains(&out).unwrap());
    }

    #[test]
    fn cube_containment_is_max_norm() {
        let s = shape(ShapeKind::Cube, "5", RadiusUnit::Angstroms);
        let corner = Triple::parse("5", "5", "5", 60).unwrap();
        let out = Triple::parse("5", "5", "5.001", 60).unwrap();
        assert!(s.contains(&corner).unwrap());
        assert!(!s.contains(&out).unwrap());
    }

    #[test]
    fn face_anchor_is_inside_and_outward_offset_is_not() {
        let s = shape(ShapeKind::RhombicTriacontahedron, "10", RadiusUnit::Angstroms);
        let Bounds::Hull(facets) = &s.bounds else {
            panic!("hull expected")
        };
        let f = &facets[0];
        assert!(s.contains(f.anchor()).unwrap());
        let beyond = f.anchor().add(&f.normal);
        assert!(!s.contains(&beyond).unwrap());
    }

    #[test]
    fn icosahedron_containment_is_a_loud_error() {
        let s = shape(ShapeKind::Icosahedron, "10", RadiusUnit::Angstroms);
        let p = Triple::parse("0", "0", "0", 60).unwrap();
        assert!(matches!(
            s.contains(&p),
            Err(NpgenError::Unsupported(_))
        ));
    }

    #[test]
    fn shape_names_round_trip() {
        let kinds = [
            "sphere",
            "truncated-octahedron:biscribed",
            "snub-cuboctahedron:levo:biscribed",
            "pentagonal-hexecontahedron:levo",
            "elongated-pentagonal-dipyramid",
        ];
        for name in kinds {
            let kind: ShapeKind = name.parse().unwrap();
            assert_eq!(kind.name(), name);
            assert_eq!(kind.name().parse::<ShapeKind>().unwrap(), kind);
        }
        assert!("grand-antiprism".parse::<ShapeKind>().is_err());
        assert!("sphere:chartreuse".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn bad_inputs_fail_at_construction() {
        let r = Shape::new(
            ShapeKind::Sphere,
            "-1",
            RadiusUnit::Angstroms,
            LatticeSystem::Fcc,
            gold_basis(60),
            "4.08",
            60,
            OutputLabels {
                file_name: "x".into(),
                structure_name: "x".into(),
                structure_index: "1".into(),
            },
        );
        assert!(r.is_err());
        assert!("furlong".parse::<RadiusUnit>().is_err());
    }
}
