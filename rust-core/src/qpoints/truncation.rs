use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::lattice::{LatticeIndex, OctantIndices, ReciprocalLattice};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A reciprocal lattice vector together with its norm and the index it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QPoint {
    /// Cartesian q-vector.
    pub vector: Vector3<f64>,
    /// `‖vector‖`.
    pub distance: f64,
    /// Integer reciprocal coordinates of the point.
    pub index: LatticeIndex,
}

impl QPoint {
    pub fn from_index(lattice: &ReciprocalLattice, index: LatticeIndex) -> Self {
        let vector = lattice.q_vector(&index.as_vector());
        QPoint {
            vector,
            distance: vector.norm(),
            index,
        }
    }
}

/// Map every candidate index to its q-vector, rank by distance and keep the
/// points inside the sphere of radius `q_max`.
///
/// The sort is stable, so points at equal distance keep enumeration order and
/// the result is reproducible. The first entry is always the origin.
pub fn truncate_to_sphere(
    lattice: &ReciprocalLattice,
    indices: OctantIndices,
    q_max: f64,
) -> Vec<QPoint> {
    let mut candidates = map_candidates(lattice, indices);
    let candidate_count = candidates.len();

    candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    candidates.retain(|point| point.distance <= q_max);

    log::debug!(
        "Kept {} of {} candidate q-points with |q| <= {}",
        candidates.len(),
        candidate_count,
        q_max
    );
    candidates
}

#[cfg(not(feature = "parallel"))]
fn map_candidates(lattice: &ReciprocalLattice, indices: OctantIndices) -> Vec<QPoint> {
    indices
        .map(|index| QPoint::from_index(lattice, index))
        .collect()
}

// Indexed collect keeps enumeration order, which the stable sort relies on
#[cfg(feature = "parallel")]
fn map_candidates(lattice: &ReciprocalLattice, indices: OctantIndices) -> Vec<QPoint> {
    let indices: Vec<LatticeIndex> = indices.collect();
    indices
        .into_par_iter()
        .map(|index| QPoint::from_index(lattice, index))
        .collect()
}
