//! Vector algebra on ordered triples of big decimals.
//!
//! All polyhedron geometry flows through [`Triple`]: vertex coordinates,
//! face anchors and outward normals. Precision rides along with the
//! components; binary operations keep the larger operand precision.

use crate::error::{NpgenError, Result};
use crate::math::bignum;
use dashu_float::DBig;

#[derive(Debug, Clone, PartialEq)]
pub struct Triple {
    pub x: DBig,
    pub y: DBig,
    pub z: DBig,
}

impl Triple {
    pub fn new(x: DBig, y: DBig, z: DBig) -> Self {
        Triple { x, y, z }
    }

    /// Parse three decimal strings at one precision.
    pub fn parse(x: &str, y: &str, z: &str, precision: usize) -> Result<Self> {
        Ok(Triple {
            x: bignum::parse(x, precision)?,
            y: bignum::parse(y, precision)?,
            z: bignum::parse(z, precision)?,
        })
    }

    pub fn zero(precision: usize) -> Self {
        Triple {
            x: bignum::from_int(0, precision),
            y: bignum::from_int(0, precision),
            z: bignum::from_int(0, precision),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x == DBig::ZERO && self.y == DBig::ZERO && self.z == DBig::ZERO
    }

    pub fn add(&self, o: &Triple) -> Triple {
        Triple::new(&self.x + &o.x, &self.y + &o.y, &self.z + &o.z)
    }

    pub fn sub(&self, o: &Triple) -> Triple {
        Triple::new(&self.x - &o.x, &self.y - &o.y, &self.z - &o.z)
    }

    pub fn neg(&self) -> Triple {
        Triple::new(-&self.x, -&self.y, -&self.z)
    }

    pub fn scale(&self, s: &DBig) -> Triple {
        Triple::new(&self.x * s, &self.y * s, &self.z * s)
    }

    pub fn div(&self, s: &DBig) -> Result<Triple> {
        if *s == DBig::ZERO {
            return Err(NpgenError::Arithmetic("vector division by zero".into()));
        }
        Ok(Triple::new(&self.x / s, &self.y / s, &self.z / s))
    }

    pub fn dot(&self, o: &Triple) -> DBig {
        &(&(&self.x * &o.x) + &(&self.y * &o.y)) + &(&self.z * &o.z)
    }

    pub fn cross(&self, o: &Triple) -> Triple {
        Triple::new(
            &(&self.y * &o.z) - &(&self.z * &o.y),
            &(&self.z * &o.x) - &(&self.x * &o.z),
            &(&self.x * &o.y) - &(&self.y * &o.x),
        )
    }

    pub fn norm(&self) -> Result<DBig> {
        bignum::sqrt(&self.dot(self))
    }

    pub fn normalize(&self) -> Result<Triple> {
        let n = self.norm()?;
        if n == DBig::ZERO {
            return Err(NpgenError::Arithmetic(
                "cannot normalize the zero vector".into(),
            ));
        }
        self.div(&n)
    }

    /// Arithmetic mean of a set of points.
    pub fn centroid(points: &[Triple]) -> Result<Triple> {
        if points.is_empty() {
            return Err(NpgenError::Arithmetic("centroid of no points".into()));
        }
        let mut acc = points[0].clone();
        for p in &points[1..] {
            acc = acc.add(p);
        }
        acc.div(&DBig::from(points.len() as i64))
    }
}

/// Unit normal of the polygon v0..vn, from the plane of its first three
/// vertices. With `outward` set, the normal is flipped so that it points
/// away from the origin side of the face: the solids here are centered on
/// the origin, so `n . centroid > 0` is the outward condition.
pub fn normal_ngon(verts: &[Triple], outward: bool) -> Result<Triple> {
    if verts.len() < 3 {
        return Err(NpgenError::Arithmetic(
            "a face needs at least three vertices".into(),
        ));
    }
    let u = verts[1].sub(&verts[0]);
    let v = verts[2].sub(&verts[0]);
    let mut n = u.cross(&v).normalize()?;
    if outward {
        let c = Triple::centroid(verts)?;
        if n.dot(&c) < DBig::ZERO {
            n = n.neg();
        }
    }
    Ok(n)
}

pub fn normal_triple(v0: &Triple, v1: &Triple, v2: &Triple, outward: bool) -> Result<Triple> {
    normal_ngon(&[v0.clone(), v1.clone(), v2.clone()], outward)
}

pub fn normal_quad(
    v0: &Triple,
    v1: &Triple,
    v2: &Triple,
    v3: &Triple,
    outward: bool,
) -> Result<Triple> {
    normal_ngon(&[v0.clone(), v1.clone(), v2.clone(), v3.clone()], outward)
}

pub fn normal_pent(
    v0: &Triple,
    v1: &Triple,
    v2: &Triple,
    v3: &Triple,
    v4: &Triple,
    outward: bool,
) -> Result<Triple> {
    normal_ngon(
        &[v0.clone(), v1.clone(), v2.clone(), v3.clone(), v4.clone()],
        outward,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn normal_hex(
    v0: &Triple,
    v1: &Triple,
    v2: &Triple,
    v3: &Triple,
    v4: &Triple,
    v5: &Triple,
    outward: bool,
) -> Result<Triple> {
    normal_ngon(
        &[
            v0.clone(),
            v1.clone(),
            v2.clone(),
            v3.clone(),
            v4.clone(),
            v5.clone(),
        ],
        outward,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::bignum::{abs, pow10};

    fn t(x: &str, y: &str, z: &str) -> Triple {
        Triple::parse(x, y, z, 60).unwrap()
    }

    #[test]
    fn cross_is_antisymmetric() {
        let u = t("1", "2", "3");
        let v = t("-2", "0.5", "4");
        let a = u.cross(&v);
        let b = v.cross(&u).neg();
        assert_eq!(a, b);
    }

    #[test]
    fn cross_is_orthogonal_to_operands() {
        let u = t("1.5", "-2", "0.25");
        let v = t("3", "1", "-1");
        let c = u.cross(&v);
        assert_eq!(u.dot(&c), DBig::ZERO);
        assert_eq!(v.dot(&c), DBig::ZERO);
    }

    #[test]
    fn normalize_restores_with_norm() {
        let u = t("3", "4", "12");
        let n = u.norm().unwrap();
        let unit = u.normalize().unwrap();
        let back = unit.scale(&n);
        for (a, b) in [(&back.x, &u.x), (&back.y, &u.y), (&back.z, &u.z)] {
            assert!(abs(&(a - b)) < pow10(-55, 60));
        }
    }

    #[test]
    fn normalize_zero_fails() {
        assert!(t("0", "0", "0").normalize().is_err());
    }

    #[test]
    fn outward_normal_points_away_from_origin() {
        // a triangle sitting at z = 2
        let v0 = t("1", "0", "2");
        let v1 = t("0", "1", "2");
        let v2 = t("-1", "-1", "2");
        let n = normal_triple(&v0, &v1, &v2, true).unwrap();
        assert!(n.z > DBig::ZERO);
        let c = Triple::centroid(&[v0, v1, v2]).unwrap();
        assert!(n.dot(&c) > DBig::ZERO);
    }

    #[test]
    fn quad_normal_matches_triangle_normal_for_coplanar_points() {
        let v0 = t("1", "0", "1");
        let v1 = t("0", "1", "1");
        let v2 = t("-1", "0", "1");
        let v3 = t("0", "-1", "1");
        let nq = normal_quad(&v0, &v1, &v2, &v3, true).unwrap();
        let nt = normal_triple(&v0, &v1, &v2, true).unwrap();
        assert_eq!(nq, nt);
    }

    #[test]
    fn parse_mismatched_decimal_fails() {
        assert!(Triple::parse("1", "nope", "3", 40).is_err());
    }
}
