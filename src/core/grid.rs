//! Bounded enumeration of the half-integer fractional grid.
//!
//! The queue walks (i/2, j/2, k/2) for i, j, k in [-D, D] with
//! D = 2 ceil(R/a), lexicographically (i outer, j middle, k inner). Points
//! are integer index triples until consumption, where they turn into big
//! decimals; the drain is an atomic counter, so the order is stable and
//! the queue can be shared across threads without locking.

use crate::error::{NpgenError, Result};
use crate::math::bignum;
use crate::math::vector::Triple;
use dashu_float::DBig;
use std::sync::atomic::{AtomicU64, Ordering};

/// One half-step lattice coordinate, as integer numerators over 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPoint {
    pub i: i64,
    pub j: i64,
    pub k: i64,
}

impl GridPoint {
    /// The fractional coordinate (i/2, j/2, k/2) at the given precision.
    pub fn fractional(&self, precision: usize) -> Triple {
        Triple::new(
            bignum::half_int(self.i, precision),
            bignum::half_int(self.j, precision),
            bignum::half_int(self.k, precision),
        )
    }
}

#[derive(Debug)]
pub struct CoordinateQueue {
    d: i64,
    side: u64,
    total: u64,
    cursor: AtomicU64,
    precision: usize,
}

impl CoordinateQueue {
    /// Cover a shape of outer radius R (angstroms) on a lattice with edge
    /// a: D = 2 ceil(R/a). The doubled bound generously covers shapes
    /// whose vertices reach beyond the inscribed ball.
    pub fn for_radius(radius: &DBig, lattice_constant: &DBig, precision: usize) -> Result<Self> {
        if *radius < DBig::ZERO {
            return Err(NpgenError::Validation(format!(
                "radius must be non-negative, got {radius}"
            )));
        }
        if *lattice_constant <= DBig::ZERO {
            return Err(NpgenError::Validation(format!(
                "lattice constant must be positive, got {lattice_constant}"
            )));
        }
        let ratio = radius / lattice_constant;
        let d = 2 * bignum::ceil_i64(&ratio).max(0);
        let side = (2 * d + 1) as u64;
        Ok(CoordinateQueue {
            d,
            side,
            total: side * side * side,
            cursor: AtomicU64::new(0),
            precision,
        })
    }

    /// Total number of grid points enumerated.
    pub fn len(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Grid half-extent D.
    pub fn extent(&self) -> i64 {
        self.d
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Atomically take the next point in lexicographic order, or None once
    /// the grid is drained.
    pub fn pop(&self) -> Option<GridPoint> {
        let n = self.cursor.fetch_add(1, Ordering::SeqCst);
        if n >= self.total {
            return None;
        }
        let side = self.side;
        let k = (n % side) as i64 - self.d;
        let j = ((n / side) % side) as i64 - self.d;
        let i = (n / (side * side)) as i64 - self.d;
        Some(GridPoint { i, j, k })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::bignum::parse;

    fn queue(radius: &str, a: &str) -> CoordinateQueue {
        let r = parse(radius, 60).unwrap();
        let a = parse(a, 60).unwrap();
        CoordinateQueue::for_radius(&r, &a, 60).unwrap()
    }

    #[test]
    fn extent_matches_the_bound() {
        // D = 2 ceil(5 / 4.08) = 4
        let q = queue("5", "4.08");
        assert_eq!(q.extent(), 4);
        assert_eq!(q.len(), 9 * 9 * 9);
    }

    #[test]
    fn zero_radius_visits_only_the_origin() {
        let q = queue("0", "4.08");
        assert_eq!(q.extent(), 0);
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop(), Some(GridPoint { i: 0, j: 0, k: 0 }));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn drain_is_lexicographic_and_complete() {
        let q = queue("1", "4.08"); // D = 2, side 5
        let mut seen = Vec::new();
        while let Some(p) = q.pop() {
            seen.push((p.i, p.j, p.k));
        }
        assert_eq!(seen.len(), 125);
        assert_eq!(seen[0], (-2, -2, -2));
        assert_eq!(seen[124], (2, 2, 2));
        let mut sorted = seen.clone();
        sorted.sort();
        assert_eq!(seen, sorted, "pop order is lexicographic");
        assert_eq!(q.pop(), None, "drained queues stay drained");
    }

    #[test]
    fn fractional_conversion_is_exact_halves() {
        let p = GridPoint { i: -3, j: 0, k: 5 };
        let f = p.fractional(60);
        assert_eq!(f.x, parse("-1.5", 60).unwrap());
        assert_eq!(f.y, parse("0", 60).unwrap());
        assert_eq!(f.z, parse("2.5", 60).unwrap());
    }

    #[test]
    fn negative_radius_is_rejected() {
        let r = parse("-1", 60).unwrap();
        let a = parse("4.08", 60).unwrap();
        assert!(CoordinateQueue::for_radius(&r, &a, 60).is_err());
    }
}
