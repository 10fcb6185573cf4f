//! The FCC unit cell: four-atom basis, cell metrics, Hermann-Mauguin
//! label, and lookup of a basis atom by reduced fractional coordinate.

use crate::core::atom::Atom;
use crate::error::{NpgenError, Result};
use crate::math::bignum;
use crate::math::vector::Triple;
use dashu_float::DBig;
use std::fmt;
use std::str::FromStr;

/// Supported Bravais lattices. Only FCC ships; the enum is where the
/// others land when they do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatticeSystem {
    Fcc,
}

impl LatticeSystem {
    pub fn space_group(&self) -> &'static str {
        match self {
            LatticeSystem::Fcc => "F m -3 m",
        }
    }
}

impl FromStr for LatticeSystem {
    type Err = NpgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcc" => Ok(LatticeSystem::Fcc),
            other => Err(NpgenError::Validation(format!(
                "unsupported lattice type '{other}' (only FCC is available)"
            ))),
        }
    }
}

impl fmt::Display for LatticeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeSystem::Fcc => write!(f, "FCC"),
        }
    }
}

/// The canonical FCC basis fractions: (0,0,0), (1/2,1/2,0), (1/2,0,1/2),
/// (0,1/2,1/2).
pub fn fcc_basis_sites(precision: usize) -> Result<[Triple; 4]> {
    Ok([
        Triple::parse("0", "0", "0", precision)?,
        Triple::parse("0.5", "0.5", "0", precision)?,
        Triple::parse("0.5", "0", "0.5", precision)?,
        Triple::parse("0", "0.5", "0.5", precision)?,
    ])
}

#[derive(Debug, Clone)]
pub struct UnitCell {
    system: LatticeSystem,
    basis: Vec<Atom>,
    a: DBig,
    b: DBig,
    c: DBig,
    alpha: DBig,
    beta: DBig,
    gamma: DBig,
    precision: usize,
}

impl UnitCell {
    /// Build an FCC cell from an ordered four-atom basis and a cubic edge
    /// length in angstroms. The basis atoms must sit on the canonical FCC
    /// fractions, in order.
    pub fn fcc(basis: Vec<Atom>, lattice_constant: &str, precision: usize) -> Result<UnitCell> {
        if basis.len() != 4 {
            return Err(NpgenError::Validation(format!(
                "an FCC basis has exactly 4 atoms, got {}",
                basis.len()
            )));
        }
        let canonical = fcc_basis_sites(precision)?;
        for (slot, (atom, want)) in basis.iter().zip(canonical.iter()).enumerate() {
            if atom.site() != want {
                return Err(NpgenError::Validation(format!(
                    "basis atom {slot} is not on its canonical FCC fraction"
                )));
            }
        }
        let a = bignum::parse(lattice_constant, precision)?;
        if a <= DBig::ZERO {
            return Err(NpgenError::Validation(format!(
                "lattice constant must be positive, got {a}"
            )));
        }
        let ninety = bignum::from_int(90, precision);
        Ok(UnitCell {
            system: LatticeSystem::Fcc,
            b: a.clone(),
            c: a.clone(),
            alpha: ninety.clone(),
            beta: ninety.clone(),
            gamma: ninety,
            basis,
            a,
            precision,
        })
    }

    /// The basis atom whose fractional position equals the given
    /// coordinate reduced mod 1, if any.
    pub fn site_at(&self, frac: &Triple) -> Option<&Atom> {
        let reduced = Triple::new(
            bignum::mod_one(&frac.x),
            bignum::mod_one(&frac.y),
            bignum::mod_one(&frac.z),
        );
        self.basis.iter().find(|atom| *atom.site() == reduced)
    }

    pub fn system(&self) -> LatticeSystem {
        self.system
    }

    pub fn space_group(&self) -> &'static str {
        self.system.space_group()
    }

    pub fn basis(&self) -> &[Atom] {
        &self.basis
    }

    /// Cell edge lengths (a, b, c) in angstroms.
    pub fn lengths(&self) -> (&DBig, &DBig, &DBig) {
        (&self.a, &self.b, &self.c)
    }

    /// Cell angles (alpha, beta, gamma) in degrees.
    pub fn angles(&self) -> (&DBig, &DBig, &DBig) {
        (&self.alpha, &self.beta, &self.gamma)
    }

    pub fn precision(&self) -> usize {
        self.precision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold_basis(precision: usize) -> Vec<Atom> {
        fcc_basis_sites(precision)
            .unwrap()
            .into_iter()
            .map(|site| Atom::new("Au", "1.44", 0, site, precision).unwrap())
            .collect()
    }

    #[test]
    fn fcc_cell_is_cubic() {
        let cell = UnitCell::fcc(gold_basis(60), "4.08", 60).unwrap();
        let (a, b, c) = cell.lengths();
        assert_eq!(a, b);
        assert_eq!(b, c);
        let (al, be, ga) = cell.angles();
        assert_eq!(al, be);
        assert_eq!(be, ga);
        assert_eq!(cell.space_group(), "F m -3 m");
    }

    #[test]
    fn basis_must_have_four_atoms_on_canonical_sites() {
        let mut basis = gold_basis(60);
        basis.pop();
        assert!(UnitCell::fcc(basis, "4.08", 60).is_err());

        let site = Triple::parse("0.25", "0", "0", 60).unwrap();
        let mut wrong = gold_basis(60);
        wrong[1] = Atom::new("Au", "1.44", 0, site, 60).unwrap();
        assert!(UnitCell::fcc(wrong, "4.08", 60).is_err());
    }

    #[test]
    fn lookup_reduces_mod_one() {
        let cell = UnitCell::fcc(gold_basis(60), "4.08", 60).unwrap();
        // (-1.5, 2.5, 1) reduces to (0.5, 0.5, 0): the second basis slot
        let frac = Triple::parse("-1.5", "2.5", "1", 60).unwrap();
        let atom = cell.site_at(&frac).expect("reduced site is occupied");
        assert_eq!(atom.element(), "Au");
        assert_eq!(atom.site(), &Triple::parse("0.5", "0.5", "0", 60).unwrap());
    }

    #[test]
    fn lookup_misses_between_sites() {
        let cell = UnitCell::fcc(gold_basis(60), "4.08", 60).unwrap();
        let frac = Triple::parse("0.5", "0", "0", 60).unwrap();
        assert!(cell.site_at(&frac).is_none());
        let quarter = Triple::parse("0.25", "0.25", "0.25", 60).unwrap();
        assert!(cell.site_at(&quarter).is_none());
    }

    #[test]
    fn unknown_lattice_type_is_rejected() {
        assert!("bcc".parse::<LatticeSystem>().is_err());
        assert!("FCC".parse::<LatticeSystem>().is_ok());
        assert!(" fcc ".parse::<LatticeSystem>().is_ok());
    }
}
