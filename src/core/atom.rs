//! The atom value type and its placement record.
//!
//! Atoms are immutable once constructed; dropping one onto a lattice site
//! produces a separate [`Placement`] carrying the output index and the
//! placed coordinates, so the shared basis table is never mutated.

use crate::error::{NpgenError, Result};
use crate::math::bignum;
use crate::math::vector::Triple;
use dashu_float::DBig;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct Atom {
    element: String,
    radius: DBig,
    volume: DBig,
    formal_charge: String,
    /// Fractional position in [0, 1)^3 identifying the basis slot.
    site: Triple,
    precision: usize,
}

impl Atom {
    /// Validates the element symbol, formats the formal charge and derives
    /// the volume (4/3) pi r^3 at the stored precision.
    pub fn new(
        element: &str,
        radius: &str,
        formal_charge: i32,
        site: Triple,
        precision: usize,
    ) -> Result<Atom> {
        if !valid_element(element) {
            return Err(NpgenError::Validation(format!(
                "'{element}' is not a chemical element symbol (expect 'X' or 'Xy')"
            )));
        }
        let radius = bignum::parse(radius, precision)?;
        if radius <= DBig::ZERO {
            return Err(NpgenError::Validation(format!(
                "atomic radius must be positive, got {radius}"
            )));
        }
        let four_thirds = &bignum::from_int(4, precision) / &bignum::from_int(3, precision);
        let volume = &(&four_thirds * &bignum::pi(precision)) * &bignum::pow_int(&radius, 3)?;
        Ok(Atom {
            element: element.to_string(),
            radius,
            volume,
            formal_charge: format_charge(formal_charge),
            site,
            precision,
        })
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    /// Radius in angstroms.
    pub fn radius(&self) -> &DBig {
        &self.radius
    }

    /// Volume in cubic angstroms, (4/3) pi r^3.
    pub fn volume(&self) -> &DBig {
        &self.volume
    }

    /// `"0"`, `"+N"` or `"-N"`.
    pub fn formal_charge(&self) -> &str {
        &self.formal_charge
    }

    pub fn site(&self) -> &Triple {
        &self.site
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Atoms order by radius.
    pub fn cmp_by_radius(&self, other: &Atom) -> Ordering {
        self.radius
            .partial_cmp(&other.radius)
            .unwrap_or(Ordering::Equal)
    }

    /// Drop a copy of this atom onto a lattice point. Called once per
    /// emitted site; the atom itself stays untouched.
    pub fn place(&self, index: u64, cartesian: Triple, fractional: Triple) -> Placement {
        Placement {
            atom: self.clone(),
            index,
            cartesian,
            fractional,
        }
    }
}

/// An atom bound to an output slot: dense index plus both coordinate
/// systems. Index order equals emission order.
#[derive(Debug, Clone)]
pub struct Placement {
    pub atom: Atom,
    pub index: u64,
    pub cartesian: Triple,
    pub fractional: Triple,
}

fn valid_element(sym: &str) -> bool {
    let mut ch = sym.chars();
    let first_ok = matches!(ch.next(), Some(c) if c.is_ascii_uppercase());
    let second_ok = match ch.next() {
        None => true,
        Some(c) => c.is_ascii_lowercase() && ch.next().is_none(),
    };
    first_ok && second_ok
}

fn format_charge(q: i32) -> String {
    match q.cmp(&0) {
        Ordering::Equal => "0".to_string(),
        Ordering::Greater => format!("+{q}"),
        Ordering::Less => format!("{q}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::bignum::{abs, parse, pow10, to_plain_string};

    fn gold() -> Atom {
        Atom::new("Au", "1.44", 0, Triple::zero(80), 80).unwrap()
    }

    #[test]
    fn element_symbols_are_validated() {
        assert!(Atom::new("au", "1.0", 0, Triple::zero(30), 30).is_err());
        assert!(Atom::new("AU", "1.0", 0, Triple::zero(30), 30).is_err());
        assert!(Atom::new("Auu", "1.0", 0, Triple::zero(30), 30).is_err());
        assert!(Atom::new("", "1.0", 0, Triple::zero(30), 30).is_err());
        assert!(Atom::new("C", "0.7", 0, Triple::zero(30), 30).is_ok());
        assert!(Atom::new("Pt", "1.39", 0, Triple::zero(30), 30).is_ok());
    }

    #[test]
    fn radius_must_be_positive() {
        assert!(Atom::new("Au", "0", 0, Triple::zero(30), 30).is_err());
        assert!(Atom::new("Au", "-1.2", 0, Triple::zero(30), 30).is_err());
    }

    #[test]
    fn volume_matches_independent_computation() {
        let a = gold();
        // (4/3) pi 1.44^3 to 80 digits, recomputed from scratch
        let p = 80;
        let r3 = parse("2.985984", p).unwrap(); // 1.44^3 exactly
        let four_thirds = &parse("4", p).unwrap() / &parse("3", p).unwrap();
        let reference = &(&four_thirds * &bignum::pi(p)) * &r3;
        let err = abs(&(a.volume() - &reference));
        assert!(err < pow10(-70, p), "{}", to_plain_string(&err));
    }

    #[test]
    fn charge_formatting() {
        let mk = |q| Atom::new("Au", "1.44", q, Triple::zero(30), 30).unwrap();
        assert_eq!(mk(0).formal_charge(), "0");
        assert_eq!(mk(3).formal_charge(), "+3");
        assert_eq!(mk(-2).formal_charge(), "-2");
    }

    #[test]
    fn atoms_order_by_radius() {
        let small = Atom::new("Cu", "1.28", 0, Triple::zero(40), 40).unwrap();
        let big = Atom::new("Au", "1.44", 0, Triple::zero(40), 40).unwrap();
        assert_eq!(small.cmp_by_radius(&big), Ordering::Less);
        assert_eq!(big.cmp_by_radius(&small), Ordering::Greater);
    }

    #[test]
    fn placement_carries_index_and_both_coordinates() {
        let a = gold();
        let frac = Triple::parse("0.5", "0.5", "0", 80).unwrap();
        let cart = Triple::parse("2.04", "2.04", "0", 80).unwrap();
        let placed = a.place(7, cart.clone(), frac.clone());
        assert_eq!(placed.index, 7);
        assert_eq!(placed.cartesian, cart);
        assert_eq!(placed.fractional, frac);
        assert_eq!(placed.atom.element(), "Au");
    }
}
