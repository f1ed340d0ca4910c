use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::QPointConfig;
use crate::errors::Result;
use crate::lattice::{ReciprocalLattice, enumerate_octant};
use crate::qpoints::pruning::{PruneState, prune_q_points};
use crate::qpoints::truncation::{QPoint, truncate_to_sphere};

/// The outcome of one sampling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QPointSet {
    /// Surviving q-points, ascending by distance, origin first.
    pub points: Vec<QPoint>,
    /// Number of points inside the cutoff sphere before pruning.
    pub truncated_count: usize,
    /// Pruning parameters, present when a target count triggered pruning.
    pub prune: Option<PruneState>,
}

impl QPointSet {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn vectors(&self) -> Vec<Vector3<f64>> {
        self.points.iter().map(|point| point.vector).collect()
    }

    pub fn distances(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.distance).collect()
    }

    /// True if thinning removed at least one point.
    pub fn was_pruned(&self) -> bool {
        self.points.len() < self.truncated_count
    }
}

/// Samples first-octant q-points of a fixed cell.
///
/// ```
/// use nalgebra::Matrix3;
/// use spherical_qpoints::{QPointConfig, QPointSampler};
///
/// let cell = Matrix3::from_diagonal_element(10.0);
/// let sampler = QPointSampler::new(&cell, QPointConfig::new(2.0)).unwrap();
/// let set = sampler.sample().unwrap();
/// assert_eq!(set.points[0].distance, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct QPointSampler {
    lattice: ReciprocalLattice,
    config: QPointConfig,
}

impl QPointSampler {
    pub fn new(cell: &Matrix3<f64>, config: QPointConfig) -> Result<Self> {
        Self::from_lattice(ReciprocalLattice::new(cell)?, config)
    }

    pub fn from_lattice(lattice: ReciprocalLattice, config: QPointConfig) -> Result<Self> {
        config.validate()?;
        Ok(QPointSampler { lattice, config })
    }

    pub fn lattice(&self) -> &ReciprocalLattice {
        &self.lattice
    }

    pub fn config(&self) -> &QPointConfig {
        &self.config
    }

    /// All first-octant q-points with `|q| <= q_max`, ascending by distance.
    pub fn truncated(&self) -> Result<Vec<QPoint>> {
        let q_max = self.config.q_max;
        let indices = enumerate_octant(self.lattice.spacing(), q_max)?;
        Ok(truncate_to_sphere(&self.lattice, indices, q_max))
    }

    pub fn sample(&self) -> Result<QPointSet> {
        let truncated = self.truncated()?;
        let truncated_count = truncated.len();

        let (points, prune) = match self.config.target_count {
            Some(target_count) => prune_q_points(
                truncated,
                &self.lattice,
                self.config.q_max,
                target_count,
                self.config.seed,
            )?,
            None => (truncated, None),
        };

        Ok(QPointSet {
            points,
            truncated_count,
            prune,
        })
    }
}

/// Generate the q-points of `cell` (lattice vectors as rows) in the first
/// octant of the sphere `|q| <= q_max`.
///
/// A positive `target_count` smaller than the number of points in the sphere
/// thins the set with a stream seeded by `seed`; `target_count <= 0` disables
/// pruning. The result is ascending by norm and starts with the origin.
pub fn generate_q_points(
    cell: &Matrix3<f64>,
    q_max: f64,
    target_count: i64,
    seed: u64,
) -> Result<Vec<Vector3<f64>>> {
    let config = QPointConfig::new(q_max)
        .with_signed_target(target_count)
        .with_seed(seed);
    let set = QPointSampler::new(cell, config)?.sample()?;
    Ok(set.vectors())
}
