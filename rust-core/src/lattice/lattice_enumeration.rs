use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::errors::{QPointError, Result};

/// Integer coordinates `(i, j, k)` of a reciprocal lattice point in the first octant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LatticeIndex {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl LatticeIndex {
    pub const ORIGIN: LatticeIndex = LatticeIndex { i: 0, j: 0, k: 0 };

    pub fn new(i: usize, j: usize, k: usize) -> Self {
        LatticeIndex { i, j, k }
    }

    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }

    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.i as f64, self.j as f64, self.k as f64)
    }
}

/// Inclusive upper index per reciprocal axis, `N[axis] = ceil(q_max / h[axis])`.
///
/// Only constructible through validating constructors, so the index count
/// always fits in `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OctantBounds {
    n: [usize; 3],
}

impl OctantBounds {
    /// Bounds large enough that every lattice point with norm `<= q_max` in the
    /// first octant has all indices within them.
    pub fn from_spacing(spacing: &Vector3<f64>, q_max: f64) -> Result<Self> {
        if !(q_max.is_finite() && q_max > 0.0) {
            return Err(QPointError::InvalidCutoff(q_max));
        }

        let mut n = [0usize; 3];
        for (axis, bound) in n.iter_mut().enumerate() {
            let h = spacing[axis];
            if !(h.is_finite() && h > 0.0) {
                return Err(QPointError::InvalidParameter(format!(
                    "axis spacing {} is not positive (axis {})",
                    h, axis
                )));
            }
            let ratio = (q_max / h).ceil();
            if ratio >= usize::MAX as f64 {
                return Err(QPointError::InvalidParameter(format!(
                    "cutoff {} needs too many lattice points along axis {}",
                    q_max, axis
                )));
            }
            *bound = ratio as usize;
        }

        Self::from_bounds(n)
    }

    /// Explicit inclusive bounds. Fails if the octant holds more indices than
    /// `usize` can count.
    pub fn from_bounds(n: [usize; 3]) -> Result<Self> {
        checked_len(&n).ok_or_else(|| {
            QPointError::InvalidParameter(format!(
                "octant {:?} holds more lattice points than can be addressed",
                n
            ))
        })?;
        Ok(OctantBounds { n })
    }

    pub fn n(&self) -> [usize; 3] {
        self.n
    }

    /// Number of indices, `(N0+1)(N1+1)(N2+1)`.
    pub fn len(&self) -> usize {
        self.n.iter().map(|&n| n + 1).product()
    }

    /// Always false: the origin is part of every octant.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn indices(&self) -> OctantIndices {
        OctantIndices {
            bounds: self.n,
            next: Some(LatticeIndex::ORIGIN),
            remaining: self.len(),
        }
    }
}

fn checked_len(n: &[usize; 3]) -> Option<usize> {
    n.iter()
        .try_fold(1usize, |acc, &n| acc.checked_mul(n.checked_add(1)?))
}

/// Lazy row-major walk over the closed first octant (i outer, k inner).
#[derive(Debug, Clone)]
pub struct OctantIndices {
    bounds: [usize; 3],
    next: Option<LatticeIndex>,
    remaining: usize,
}

impl Iterator for OctantIndices {
    type Item = LatticeIndex;

    fn next(&mut self) -> Option<LatticeIndex> {
        let current = self.next?;

        let mut successor = current;
        successor.k += 1;
        if successor.k > self.bounds[2] {
            successor.k = 0;
            successor.j += 1;
            if successor.j > self.bounds[1] {
                successor.j = 0;
                successor.i += 1;
            }
        }
        self.next = (successor.i <= self.bounds[0]).then_some(successor);
        self.remaining -= 1;

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for OctantIndices {}

/// Enumerate the first-octant lattice indices that can reach the sphere of radius `q_max`.
pub fn enumerate_octant(spacing: &Vector3<f64>, q_max: f64) -> Result<OctantIndices> {
    let bounds = OctantBounds::from_spacing(spacing, q_max)?;
    log::debug!(
        "Enumerating octant bounds {:?} ({} candidates) for q_max {}",
        bounds.n(),
        bounds.len(),
        q_max
    );
    Ok(bounds.indices())
}
