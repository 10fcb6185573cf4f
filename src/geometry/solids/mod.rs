//! Concrete polyhedron construction.
//!
//! Every solid is data: a constant vector evaluated at the requested
//! precision (`constants`), a vertex encoding over those constants and a
//! face-ring table (`tables`). Construction decodes the basis vertices,
//! computes outward unit normals from the unscaled solid, then scales the
//! vertex set so the outermost vertex sits at the target radius. Catalan
//! solids are produced from their Archimedean primal by polar
//! reciprocation; the chiral levo forms mirror the dextro vertex set.

pub mod tables;

mod constants;

use crate::error::{NpgenError, Result};
use crate::geometry::{Chirality, Facet, Form, ShapeKind};
use crate::math::bignum::{self, from_int};
use crate::math::vector::{self, Triple};
use dashu_float::DBig;
use tables::SolidTable;

/// Decode a vertex table against its constants. Codes are
/// sign * (1-based constant index), 0 for a zero coordinate. `mirror`
/// negates x, turning a dextro solid into its levo enantiomorph.
pub(crate) fn decode_verts(
    table: &SolidTable,
    consts: &[DBig],
    mirror: bool,
    precision: usize,
) -> Result<Vec<Triple>> {
    let zero = from_int(0, precision);
    let component = |code: i8| -> Result<DBig> {
        if code == 0 {
            return Ok(zero.clone());
        }
        let c = consts
            .get(code.unsigned_abs() as usize - 1)
            .ok_or_else(|| {
                NpgenError::Arithmetic(format!(
                    "vertex table references missing constant {code}"
                ))
            })?;
        Ok(if code < 0 { -c } else { c.clone() })
    };
    table
        .verts
        .iter()
        .map(|row| {
            let mut x = component(row[0])?;
            if mirror {
                x = -&x;
            }
            Ok(Triple::new(x, component(row[1])?, component(row[2])?))
        })
        .collect()
}

/// Outward unit normal of one face ring, through the per-arity entry
/// points (triangle through hexagon); larger rings (the decagons of the
/// truncated icosidodecahedron) share the same n-gon core.
fn ring_normal(ring_verts: &[Triple]) -> Result<Triple> {
    match ring_verts {
        [a, b, c] => vector::normal_triple(a, b, c, true),
        [a, b, c, d] => vector::normal_quad(a, b, c, d, true),
        [a, b, c, d, e] => vector::normal_pent(a, b, c, d, e, true),
        [a, b, c, d, e, f] => vector::normal_hex(a, b, c, d, e, f, true),
        other => vector::normal_ngon(other, true),
    }
}

fn ring_verts(verts: &[Triple], ring: &[u8]) -> Result<Vec<Triple>> {
    ring.iter()
        .map(|&i| {
            verts.get(i as usize).cloned().ok_or_else(|| {
                NpgenError::Arithmetic(format!("face ring references missing vertex {i}"))
            })
        })
        .collect()
}

/// Distance from the origin to a face plane (positive for faces of an
/// origin-centered convex solid). The biscribed solvers equalize this
/// across face orbits.
pub(crate) fn ring_plane_distance(verts: &[Triple], ring: &[u8]) -> Result<DBig> {
    let rv = ring_verts(verts, ring)?;
    let n = ring_normal(&rv)?;
    Ok(n.dot(&rv[0]))
}

/// Facets from a vertex set and face table: normals from the unscaled
/// solid, vertices scaled uniformly so the outermost one reaches the
/// target radius. With radius zero the solid collapses to the origin but
/// keeps its normals, so the containment test still accepts exactly the
/// origin.
fn facets_from(verts: &[Triple], faces: &[&[u8]], radius: &DBig) -> Result<Vec<Facet>> {
    let mut circ_sq = DBig::ZERO;
    for v in verts {
        let n2 = v.dot(v);
        if n2 > circ_sq {
            circ_sq = n2;
        }
    }
    let circ = bignum::sqrt(&circ_sq)?;
    if circ == DBig::ZERO {
        return Err(NpgenError::Arithmetic(
            "polyhedron with all vertices at the origin".into(),
        ));
    }
    let scale = radius / &circ;
    faces
        .iter()
        .map(|ring| {
            let rv = ring_verts(verts, ring)?;
            let normal = ring_normal(&rv)?;
            let scaled = rv.iter().map(|v| v.scale(&scale)).collect();
            Ok(Facet {
                verts: scaled,
                normal,
            })
        })
        .collect()
}

/// Polar reciprocation: one dual vertex n/d per primal face plane
/// (d = n . anchor), dual faces read from the per-vertex incidence fans.
fn dual_vertices(primal_verts: &[Triple], table: &SolidTable) -> Result<Vec<Triple>> {
    table
        .faces
        .iter()
        .map(|ring| {
            let rv = ring_verts(primal_verts, ring)?;
            let n = ring_normal(&rv)?;
            let d = n.dot(&rv[0]);
            if d <= DBig::ZERO {
                return Err(NpgenError::Arithmetic(
                    "primal face plane passes through the centroid".into(),
                ));
            }
            n.div(&d)
        })
        .collect()
}

fn direct_solid(
    table: &SolidTable,
    consts: Vec<DBig>,
    mirror: bool,
    radius: &DBig,
    precision: usize,
) -> Result<Vec<Facet>> {
    let verts = decode_verts(table, &consts, mirror, precision)?;
    facets_from(&verts, table.faces, radius)
}

fn dual_solid(
    primal: &SolidTable,
    consts: Vec<DBig>,
    mirror: bool,
    radius: &DBig,
    precision: usize,
) -> Result<Vec<Facet>> {
    let pverts = decode_verts(primal, &consts, mirror, precision)?;
    let dverts = dual_vertices(&pverts, primal)?;
    let fans = primal.vertex_fans.ok_or_else(|| {
        NpgenError::Arithmetic("primal solid has no dual incidence table".into())
    })?;
    facets_from(&dverts, fans, radius)
}

/// The truncated triakis tetrahedron: the triakis tetrahedron (dual of
/// the truncated tetrahedron) with its four 6-valent vertices cut by
/// planes perpendicular to their axes. A perpendicular cut makes the
/// hexagons regular at any depth; the depth itself is fixed by requiring
/// the two pentagon remnant-edge classes equal, which is linear:
///   u = (LA - L66) / (LA q - 2 L66 p).
fn truncated_triakis_tetrahedron(radius: &DBig, precision: usize) -> Result<Vec<Facet>> {
    let tt_consts = constants::truncated_tetrahedron(precision)?;
    let tt_verts = decode_verts(&tables::TRUNCATED_TETRAHEDRON, &tt_consts, false, precision)?;
    let tkt = dual_vertices(&tt_verts, &tables::TRUNCATED_TETRAHEDRON)?;

    let apex = |idx: u8| tables::TRUNCATED_TRIAKIS_TETRAHEDRON_APEXES.contains(&idx);

    // depth from the first truncated vertex; the others follow by symmetry
    let o0 = tables::TRUNCATED_TRIAKIS_TETRAHEDRON_CUTS[0][0];
    let ov = &tkt[o0 as usize];
    let axis0 = ov.normalize()?;
    let h0 = axis0.dot(ov);
    let mut n66 = None;
    let mut napx = None;
    for cut in tables::TRUNCATED_TRIAKIS_TETRAHEDRON_CUTS {
        if cut[0] != o0 {
            continue;
        }
        if apex(cut[1]) {
            napx.get_or_insert(cut[1]);
        } else {
            n66.get_or_insert(cut[1]);
        }
    }
    let (n66, napx) = match (n66, napx) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            return Err(NpgenError::Arithmetic(
                "truncation table lacks both neighbour types".into(),
            ))
        }
    };
    let p_rate = bignum::div(&h0, &(&h0 - &axis0.dot(&tkt[n66 as usize])))?;
    let q_rate = bignum::div(&h0, &(&h0 - &axis0.dot(&tkt[napx as usize])))?;
    let l66 = tkt[n66 as usize].sub(ov).norm()?;
    let la = tkt[napx as usize].sub(ov).norm()?;
    let u = bignum::div(
        &(&la - &l66),
        &(&(&la * &q_rate) - &(&(&l66 * &p_rate) * &DBig::from(2))),
    )?;
    let w = &from_int(1, precision) - &u;

    let mut verts = Vec::with_capacity(
        tables::TRUNCATED_TRIAKIS_TETRAHEDRON_CUTS.len()
            + tables::TRUNCATED_TRIAKIS_TETRAHEDRON_APEXES.len(),
    );
    for cut in tables::TRUNCATED_TRIAKIS_TETRAHEDRON_CUTS {
        let o = &tkt[cut[0] as usize];
        let n = &tkt[cut[1] as usize];
        let axis = o.normalize()?;
        let h = axis.dot(o);
        let c = &w * &h;
        let s = bignum::div(&(&c - &h), &(&axis.dot(n) - &h))?;
        verts.push(o.add(&n.sub(o).scale(&s)));
    }
    for &a in tables::TRUNCATED_TRIAKIS_TETRAHEDRON_APEXES {
        verts.push(tkt[a as usize].clone());
    }
    facets_from(&verts, tables::TRUNCATED_TRIAKIS_TETRAHEDRON_FACES, radius)
}

/// Build the facet list for a polyhedral shape kind, scaled to the outer
/// radius, at the given precision.
pub(crate) fn hull_facets(kind: ShapeKind, radius: &DBig, precision: usize) -> Result<Vec<Facet>> {
    use ShapeKind::*;
    let p = precision;
    let levo = |c: Chirality| c == Chirality::Levo;
    match kind {
        Sphere | Cube => Err(NpgenError::Arithmetic(
            "sphere and cube do not use facet containment".into(),
        )),
        Tetrahedron => direct_solid(
            &tables::TETRAHEDRON,
            constants::tetrahedron(p)?,
            false,
            radius,
            p,
        ),
        TruncatedTetrahedron => direct_solid(
            &tables::TRUNCATED_TETRAHEDRON,
            constants::truncated_tetrahedron(p)?,
            false,
            radius,
            p,
        ),
        TriakisTetrahedron => dual_solid(
            &tables::TRUNCATED_TETRAHEDRON,
            constants::truncated_tetrahedron(p)?,
            false,
            radius,
            p,
        ),
        TruncatedTriakisTetrahedron => truncated_triakis_tetrahedron(radius, p),
        Cuboctahedron => direct_solid(
            &tables::CUBOCTAHEDRON,
            constants::cuboctahedron(p)?,
            false,
            radius,
            p,
        ),
        SnubCuboctahedron { chirality, form } => direct_solid(
            &tables::SNUB_CUBE,
            constants::snub_cuboctahedron(form, p)?,
            levo(chirality),
            radius,
            p,
        ),
        TruncatedOctahedron { form } => direct_solid(
            &tables::TRUNCATED_OCTAHEDRON,
            constants::truncated_octahedron(form, p)?,
            false,
            radius,
            p,
        ),
        TetrakisHexahedron => dual_solid(
            &tables::TRUNCATED_OCTAHEDRON,
            constants::truncated_octahedron(Form::Canonical, p)?,
            false,
            radius,
            p,
        ),
        Rhombicuboctahedron => direct_solid(
            &tables::RHOMBICUBOCTAHEDRON,
            constants::rhombicuboctahedron(p)?,
            false,
            radius,
            p,
        ),
        DeltoidalIcositetrahedron => dual_solid(
            &tables::RHOMBICUBOCTAHEDRON,
            constants::rhombicuboctahedron(p)?,
            false,
            radius,
            p,
        ),
        PentagonalIcositetrahedron { chirality, form } => dual_solid(
            &tables::SNUB_CUBE,
            constants::snub_cuboctahedron(form, p)?,
            levo(chirality),
            radius,
            p,
        ),
        Dodecahedron => direct_solid(
            &tables::DODECAHEDRON,
            constants::dodecahedron(p)?,
            false,
            radius,
            p,
        ),
        Icosahedron => direct_solid(
            &tables::ICOSAHEDRON,
            constants::icosahedron(p)?,
            false,
            radius,
            p,
        ),
        Icosidodecahedron => direct_solid(
            &tables::ICOSIDODECAHEDRON,
            constants::icosidodecahedron(p)?,
            false,
            radius,
            p,
        ),
        RhombicTriacontahedron => dual_solid(
            &tables::ICOSIDODECAHEDRON,
            constants::icosidodecahedron(p)?,
            false,
            radius,
            p,
        ),
        TruncatedIcosidodecahedron { form } => direct_solid(
            &tables::TRUNCATED_ICOSIDODECAHEDRON,
            constants::truncated_icosidodecahedron(form, p)?,
            false,
            radius,
            p,
        ),
        DisdyakisTriacontahedron { form } | HexakisIcosahedron { form } => dual_solid(
            &tables::TRUNCATED_ICOSIDODECAHEDRON,
            constants::truncated_icosidodecahedron(form, p)?,
            false,
            radius,
            p,
        ),
        Rhombicosidodecahedron => direct_solid(
            &tables::RHOMBICOSIDODECAHEDRON,
            constants::rhombicosidodecahedron(p)?,
            false,
            radius,
            p,
        ),
        DeltoidalHexecontahedron => dual_solid(
            &tables::RHOMBICOSIDODECAHEDRON,
            constants::rhombicosidodecahedron(p)?,
            false,
            radius,
            p,
        ),
        SnubDodecahedron { chirality } => direct_solid(
            &tables::SNUB_DODECAHEDRON,
            constants::snub_dodecahedron(p)?,
            levo(chirality),
            radius,
            p,
        ),
        PentagonalHexecontahedron { chirality } => dual_solid(
            &tables::SNUB_DODECAHEDRON,
            constants::snub_dodecahedron(p)?,
            levo(chirality),
            radius,
            p,
        ),
        Bilunabirotunda => direct_solid(
            &tables::BILUNABIROTUNDA,
            constants::bilunabirotunda(p)?,
            false,
            radius,
            p,
        ),
        ElongatedPentagonalDipyramid => direct_solid(
            &tables::ELONGATED_PENTAGONAL_DIPYRAMID,
            constants::elongated_pentagonal_dipyramid(p)?,
            false,
            radius,
            p,
        ),
    }
}
