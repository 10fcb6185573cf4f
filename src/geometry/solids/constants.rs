//! Shape-specific algebraic constants, evaluated at the requested
//! precision.
//!
//! Closed radical forms are used wherever the construction defines them:
//! the golden ratio, square roots of small integers, the tribonacci
//! constant through cube roots of 19 +- 3 sqrt(33), and the Cardano root
//! of x^3 - 2x = phi for the snub dodecahedron. The biscribed snub cube
//! and biscribed truncated icosidodecahedron have no tidy radicals; their
//! seed vertices are rederived at runtime by Newton iteration on the
//! defining geometry (common circumsphere through the vertices, common
//! insphere tangent to every face plane).

use super::{decode_verts, ring_plane_distance, tables};
use crate::error::{NpgenError, Result};
use crate::geometry::Form;
use crate::math::bignum::{self, abs, from_int, parse, pow10, pow_int, sqrt, with_prec};
use dashu_float::DBig;

fn sqrt_int(n: i64, precision: usize) -> Result<DBig> {
    sqrt(&from_int(n, precision))
}

/// (1 + sqrt 5) / 2.
pub fn phi(precision: usize) -> Result<DBig> {
    Ok(&(&from_int(1, precision) + &sqrt_int(5, precision)?) / &DBig::from(2))
}

/// The tribonacci constant, t^3 = t^2 + t + 1:
/// t = (1 + cbrt(19 + 3 sqrt 33) + cbrt(19 - 3 sqrt 33)) / 3.
pub fn tribonacci(precision: usize) -> Result<DBig> {
    let p = precision + 5;
    let s33 = &sqrt_int(33, p)? * &DBig::from(3);
    let a = bignum::cbrt(&(&from_int(19, p) + &s33));
    let b = bignum::cbrt(&(&from_int(19, p) - &s33));
    let t = &(&(&from_int(1, p) + &a) + &b) / &DBig::from(3);
    Ok(with_prec(&t, precision))
}

/// The real root of x^3 - 2x = phi (snub dodecahedron), by Cardano:
/// x = cbrt(phi/2 + s) + cbrt(phi/2 - s), s = sqrt(phi^2/4 - 8/27).
pub fn snub_dodecahedron_xi(precision: usize) -> Result<DBig> {
    let p = precision + 5;
    let two = DBig::from(2);
    let half_phi = &phi(p)? / &two;
    let disc = &(&half_phi * &half_phi) - &(&from_int(8, p) / &from_int(27, p));
    let s = sqrt(&disc)?;
    let x = &bignum::cbrt(&(&half_phi + &s)) + &bignum::cbrt(&(&half_phi - &s));
    Ok(with_prec(&x, precision))
}

pub fn tetrahedron(precision: usize) -> Result<Vec<DBig>> {
    Ok(vec![from_int(1, precision)])
}

pub fn truncated_tetrahedron(precision: usize) -> Result<Vec<DBig>> {
    Ok(vec![from_int(1, precision), from_int(3, precision)])
}

pub fn cuboctahedron(precision: usize) -> Result<Vec<DBig>> {
    Ok(vec![from_int(1, precision)])
}

pub fn truncated_octahedron(form: Form, precision: usize) -> Result<Vec<DBig>> {
    match form {
        Form::Canonical => Ok(vec![from_int(1, precision), from_int(2, precision)]),
        // one sphere through the vertices, one tangent to all faces:
        // (a, b) = (sqrt 3 - 1, 1)
        Form::Biscribed => Ok(vec![
            &sqrt_int(3, precision)? - &from_int(1, precision),
            from_int(1, precision),
        ]),
    }
}

pub fn rhombicuboctahedron(precision: usize) -> Result<Vec<DBig>> {
    Ok(vec![
        from_int(1, precision),
        &from_int(1, precision) + &sqrt_int(2, precision)?,
    ])
}

pub fn snub_cuboctahedron(form: Form, precision: usize) -> Result<Vec<DBig>> {
    match form {
        Form::Canonical => {
            let t = tribonacci(precision)?;
            let inv = bignum::div(&from_int(1, precision), &t)?;
            Ok(vec![inv, from_int(1, precision), t])
        }
        Form::Biscribed => biscribed_snub_cuboctahedron(precision),
    }
}

pub fn dodecahedron(precision: usize) -> Result<Vec<DBig>> {
    let f = phi(precision)?;
    let inv = bignum::div(&from_int(1, precision), &f)?;
    Ok(vec![from_int(1, precision), inv, f])
}

pub fn icosahedron(precision: usize) -> Result<Vec<DBig>> {
    Ok(vec![from_int(1, precision), phi(precision)?])
}

pub fn icosidodecahedron(precision: usize) -> Result<Vec<DBig>> {
    let f = phi(precision)?;
    let two = DBig::from(2);
    let half = &from_int(1, precision) / &two;
    let half_phi = &f / &two;
    let half_phi_sq = &(&f * &f) / &two;
    Ok(vec![f, half, half_phi, half_phi_sq])
}

pub fn rhombicosidodecahedron(precision: usize) -> Result<Vec<DBig>> {
    let f = phi(precision)?;
    let one = from_int(1, precision);
    Ok(vec![
        one.clone(),
        one.clone(),
        pow_int(&f, 3)?,
        &f * &f,
        f.clone(),
        &f * &DBig::from(2),
        &from_int(2, precision) + &f,
        &f * &f,
    ])
}

/// Row-major constants for the five vertex rows of the truncated
/// icosidodecahedron.
pub fn truncated_icosidodecahedron(form: Form, precision: usize) -> Result<Vec<DBig>> {
    match form {
        Form::Canonical => {
            let f = phi(precision)?;
            let one = from_int(1, precision);
            let two = from_int(2, precision);
            let three = from_int(3, precision);
            let inv = bignum::div(&one, &f)?;
            Ok(vec![
                inv.clone(),
                inv.clone(),
                &three + &f,
                &inv * &DBig::from(2),
                f.clone(),
                &one + &(&f * &DBig::from(2)),
                inv,
                &f * &f,
                &(&f * &DBig::from(3)) - &one,
                &(&f * &DBig::from(2)) - &one,
                two.clone(),
                &two + &f,
                f.clone(),
                three,
                &f * &DBig::from(2),
            ])
        }
        Form::Biscribed => biscribed_truncated_icosidodecahedron(precision),
    }
}

/// Row-major constants for the five vertex rows of the snub
/// dodecahedron, from xi, alpha = xi - 1/xi, beta = xi phi + phi^2 + phi/xi.
pub fn snub_dodecahedron(precision: usize) -> Result<Vec<DBig>> {
    let p = precision + 5;
    let f = phi(p)?;
    let xi = with_prec(&snub_dodecahedron_xi(p)?, p);
    let one = from_int(1, p);
    let two = DBig::from(2);
    let inv_xi = bignum::div(&one, &xi)?;
    let inv_phi = bignum::div(&one, &f)?;
    let alpha = &xi - &inv_xi;
    let beta = &(&(&xi * &f) + &(&f * &f)) + &(&f * &inv_xi);
    let a_over_phi = &alpha * &inv_phi;
    let b_over_phi = &beta * &inv_phi;
    let a_phi = &alpha * &f;
    let b_phi = &beta * &f;
    let rows: [[DBig; 3]; 5] = [
        [&alpha * &two, from_int(2, p), &beta * &two],
        [
            &(&alpha + &b_over_phi) + &f,
            &(&beta - &a_phi) + &inv_phi,
            &(&a_over_phi + &b_phi) - &one,
        ],
        [
            &(&alpha + &b_over_phi) - &f,
            &(&a_phi - &beta) + &inv_phi,
            &(&a_over_phi + &b_phi) + &one,
        ],
        [
            &(&b_phi - &a_over_phi) + &one,
            &(&b_over_phi - &alpha) - &f,
            &(&a_phi + &beta) - &inv_phi,
        ],
        [
            &(&b_phi - &a_over_phi) - &one,
            &(&alpha - &b_over_phi) - &f,
            &(&a_phi + &beta) + &inv_phi,
        ],
    ];
    Ok(rows
        .into_iter()
        .flatten()
        .map(|c| with_prec(&abs(&c), precision))
        .collect())
}

pub fn bilunabirotunda(precision: usize) -> Result<Vec<DBig>> {
    let f = phi(precision)?;
    let two = DBig::from(2);
    Ok(vec![
        &from_int(1, precision) / &two,
        &f / &two,
        &(&f * &f) / &two,
    ])
}

pub fn elongated_pentagonal_dipyramid(precision: usize) -> Result<Vec<DBig>> {
    let p = precision;
    let two = DBig::from(2);
    let four = DBig::from(4);
    let ten = from_int(10, p);
    let s5 = sqrt_int(5, p)?;
    // unit-edge pentagon: circumradius b1 = sqrt((5 + sqrt 5) / 10);
    // b1 sin 72 = phi/2 and b1 sin 36 = 1/2 exactly
    let b1 = sqrt(&(&(&from_int(5, p) + &s5) / &ten))?;
    let a1 = &phi(p)? / &two;
    let b2 = &b1 * &(&(&s5 - &from_int(1, p)) / &four);
    let a2 = &from_int(1, p) / &two;
    let b3 = &b1 * &(&(&s5 + &from_int(1, p)) / &four);
    // apex height over the prism cap: sqrt((5 - sqrt 5) / 10)
    let cap = sqrt(&(&(&from_int(5, p) - &s5) / &ten))?;
    let h = &from_int(1, p) / &two;
    Ok(vec![b1, a1, b2, a2, b3, h.clone(), &h + &cap])
}

// ------------------------------------------------------------------
// biscribed constant systems
// ------------------------------------------------------------------

/// Entry codes of the icosahedral coset matrices: 0, +-1, +-1/2 (code 2),
/// +-phi/2 (code 3), +-1/(2 phi) (code 4). Each is a symmetry of the
/// truncated-icosidodecahedron vertex set that carries the seed row onto
/// one of the other four rows, so applying them to a deformed seed keeps
/// the face tables valid (every face stays a stabilizer orbit, hence
/// planar).
const ICO_COSETS: [[[i8; 3]; 3]; 4] = [
    [[2, -3, 4], [-3, -4, 2], [4, 2, 3]],
    [[-2, -3, 4], [3, -4, 2], [-4, 2, 3]],
    [[2, 3, 4], [-3, 4, 2], [4, -2, 3]],
    [[-2, 3, 4], [3, 4, 2], [-4, -2, 3]],
];

fn coset_entry(code: i8, precision: usize) -> Result<DBig> {
    let mag = match code.unsigned_abs() {
        0 => from_int(0, precision),
        1 => from_int(1, precision),
        2 => &from_int(1, precision) / &DBig::from(2),
        3 => &phi(precision)? / &DBig::from(2),
        4 => bignum::div(&from_int(1, precision), &(&phi(precision)? * &DBig::from(2)))?,
        _ => {
            return Err(NpgenError::Arithmetic(format!(
                "unknown coset matrix code {code}"
            )))
        }
    };
    Ok(if code < 0 { -&mag } else { mag })
}

/// The five vertex rows generated from one seed point under the
/// icosahedral coset representatives, as positive row-major constants.
fn ico_orbit_rows(x: &DBig, y: &DBig, z: &DBig, precision: usize) -> Result<Vec<DBig>> {
    let mut rows = vec![abs(x), abs(y), abs(z)];
    for mat in &ICO_COSETS {
        for mrow in mat {
            let e0 = coset_entry(mrow[0], precision)?;
            let e1 = coset_entry(mrow[1], precision)?;
            let e2 = coset_entry(mrow[2], precision)?;
            rows.push(abs(&(&(&(&e0 * x) + &(&e1 * y)) + &(&e2 * z))));
        }
    }
    Ok(rows)
}

/// 2D Newton iteration with a central-difference Jacobian, seeded from
/// f64 estimates. Converges quadratically; the tolerance leaves guard
/// digits beyond the requested precision.
fn newton2<F>(f: F, seed: (f64, f64), precision: usize) -> Result<(DBig, DBig)>
where
    F: Fn(&DBig, &DBig) -> Result<(DBig, DBig)>,
{
    let work = precision + 40;
    let h = pow10(-((precision as i64 + 20) / 2), work);
    let two_h = &h * &DBig::from(2);
    let tol = pow10(-(precision as i64 + 10), work);
    let mut x = parse(&format!("{:.17}", seed.0), work)?;
    let mut y = parse(&format!("{:.17}", seed.1), work)?;
    for _ in 0..64 {
        let (f1, f2) = f(&x, &y)?;
        if abs(&f1) < tol && abs(&f2) < tol {
            return Ok((x, y));
        }
        let (f1px, f2px) = f(&(&x + &h), &y)?;
        let (f1mx, f2mx) = f(&(&x - &h), &y)?;
        let (f1py, f2py) = f(&x, &(&y + &h))?;
        let (f1my, f2my) = f(&x, &(&y - &h))?;
        let j11 = &(&f1px - &f1mx) / &two_h;
        let j12 = &(&f1py - &f1my) / &two_h;
        let j21 = &(&f2px - &f2mx) / &two_h;
        let j22 = &(&f2py - &f2my) / &two_h;
        let det = &(&j11 * &j22) - &(&j12 * &j21);
        if det == DBig::ZERO {
            return Err(NpgenError::Arithmetic(
                "singular Jacobian in biscribed constant solve".into(),
            ));
        }
        let dx = &(&(&f1 * &j22) - &(&f2 * &j12)) / &det;
        let dy = &(&(&f2 * &j11) - &(&f1 * &j21)) / &det;
        x = &x - &dx;
        y = &y - &dy;
    }
    Err(NpgenError::Arithmetic(
        "biscribed constant solve did not converge".into(),
    ))
}

/// Unit-sphere third component of a seed (x, y): sqrt(1 - x^2 - y^2).
fn unit_z(x: &DBig, y: &DBig, precision: usize) -> Result<DBig> {
    let rest = &(&from_int(1, precision) - &(x * x)) - &(y * y);
    if rest <= DBig::ZERO {
        return Err(NpgenError::Arithmetic(
            "biscribed seed left the unit sphere".into(),
        ));
    }
    sqrt(&rest)
}

fn biscribed_snub_cuboctahedron(precision: usize) -> Result<Vec<DBig>> {
    let work = precision + 40;
    let goal = |c0: &DBig, c1: &DBig| -> Result<(DBig, DBig)> {
        let c2 = unit_z(c0, c1, work)?;
        let consts = vec![abs(c0), abs(c1), c2];
        let verts = decode_verts(&tables::SNUB_CUBE, &consts, false, work)?;
        let d_sq = ring_plane_distance(&verts, tables::SNUB_CUBE_SQUARE)?;
        let d_ta = ring_plane_distance(&verts, tables::SNUB_CUBE_TRIANGLE_A)?;
        let d_tb = ring_plane_distance(&verts, tables::SNUB_CUBE_TRIANGLE_B)?;
        Ok((&d_sq - &d_ta, &d_sq - &d_tb))
    };
    let (c0, c1) = newton2(goal, (0.2699340708060245, 0.37827071706456966), precision)?;
    let c2 = unit_z(&c0, &c1, work)?;
    Ok(vec![
        with_prec(&c0, precision),
        with_prec(&c1, precision),
        with_prec(&c2, precision),
    ])
}

fn biscribed_truncated_icosidodecahedron(precision: usize) -> Result<Vec<DBig>> {
    let work = precision + 40;
    let goal = |x: &DBig, y: &DBig| -> Result<(DBig, DBig)> {
        let z = unit_z(x, y, work)?;
        let consts = ico_orbit_rows(x, y, &z, work)?;
        let verts = decode_verts(&tables::TRUNCATED_ICOSIDODECAHEDRON, &consts, false, work)?;
        let d_sq = ring_plane_distance(&verts, tables::TRUNCATED_ICOSIDODECAHEDRON_SQUARE)?;
        let d_hex = ring_plane_distance(&verts, tables::TRUNCATED_ICOSIDODECAHEDRON_HEXAGON)?;
        let d_dec = ring_plane_distance(&verts, tables::TRUNCATED_ICOSIDODECAHEDRON_DECAGON)?;
        Ok((&d_sq - &d_hex, &d_sq - &d_dec))
    };
    let (x, y) = newton2(goal, (0.2690626380253339, 0.17473132017940388), precision)?;
    let z = unit_z(&x, &y, work)?;
    Ok(ico_orbit_rows(&x, &y, &z, work)?
        .iter()
        .map(|c| with_prec(c, precision))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::bignum::to_plain_string;

    fn close_to(x: &DBig, want: f64, digits: i64) {
        let w = parse(&format!("{want:.17}"), 60).unwrap();
        let err = abs(&(x - &w));
        assert!(err < pow10(-digits, 60), "{} !~ {want}", to_plain_string(x));
    }

    #[test]
    fn tribonacci_satisfies_its_cubic() {
        let t = tribonacci(60).unwrap();
        let lhs = pow_int(&t, 3).unwrap();
        let rhs = &(&(&t * &t) + &t) + &from_int(1, 60);
        assert!(abs(&(&lhs - &rhs)) < pow10(-55, 60));
        close_to(&t, 1.839286755214161, 14);
    }

    #[test]
    fn snub_dodecahedron_root_satisfies_its_cubic() {
        let xi = snub_dodecahedron_xi(60).unwrap();
        let lhs = pow_int(&xi, 3).unwrap();
        let rhs = &(&xi * &DBig::from(2)) + &phi(60).unwrap();
        assert!(abs(&(&lhs - &rhs)) < pow10(-55, 60));
        close_to(&xi, 1.7155614996973678, 14);
    }

    #[test]
    fn biscribed_truncated_octahedron_is_tangent_by_construction() {
        // a = sqrt(3) - 1 makes hexagon and square plane distances equal
        let c = truncated_octahedron(Form::Biscribed, 60).unwrap();
        close_to(&c[0], 0.7320508075688772, 14);
    }

    #[test]
    fn biscribed_snub_cuboctahedron_solve_converges() {
        let c = snub_cuboctahedron(Form::Biscribed, 40).unwrap();
        close_to(&c[0], 0.2699340708060245, 12);
        close_to(&c[1], 0.37827071706456966, 12);
        close_to(&c[2], 0.885464207085495, 12);
        // seed is on the unit sphere
        let n = &(&(&c[0] * &c[0]) + &(&c[1] * &c[1])) + &(&c[2] * &c[2]);
        assert!(abs(&(&n - &from_int(1, 40))) < pow10(-35, 40));
    }

    #[test]
    fn biscribed_truncated_icosidodecahedron_solve_converges() {
        let c = truncated_icosidodecahedron(Form::Biscribed, 40).unwrap();
        assert_eq!(c.len(), 15);
        close_to(&c[0], 0.2690626380253339, 12);
        close_to(&c[1], 0.17473132017940388, 12);
        close_to(&c[2], 0.9471400437988096, 12);
        // every row component stays positive: the solve remains inside the
        // vertex-labeling chamber of the canonical tables
        for v in &c {
            assert!(*v > DBig::ZERO);
        }
    }

    #[test]
    fn snub_dodecahedron_rows_are_positive() {
        for c in snub_dodecahedron(40).unwrap() {
            assert!(c > DBig::ZERO);
        }
    }
}
