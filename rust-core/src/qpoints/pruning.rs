use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::lattice::ReciprocalLattice;
use crate::qpoints::prune_radius::PruneCubic;
use crate::qpoints::solid_angle::angle_factor;
use crate::qpoints::truncation::QPoint;

/// Quantities derived while pruning a truncated q-point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PruneState {
    /// Requested number of points in the sampled octant.
    pub target_count: usize,
    /// Fraction of the full sphere covered by the octant, `Σ / 4π`.
    pub angle_factor: f64,
    /// Radius beyond which points are thinned; equals `q_max` when no interior radius exists.
    pub prune_radius: f64,
    /// Seed of the thinning stream.
    pub seed: u64,
}

impl PruneState {
    /// Solid angle and prune radius for `target_count` points within `q_max`.
    pub fn new(
        lattice: &ReciprocalLattice,
        q_max: f64,
        target_count: usize,
        seed: u64,
    ) -> Result<Self> {
        let angle_factor = angle_factor(lattice.reciprocal())?;

        // Rescale the octant target to the full sphere the cubic is written for
        let full_sphere_count = target_count as f64 / angle_factor;
        let cubic = PruneCubic::new(full_sphere_count, q_max, lattice.q_volume());
        let prune_radius = match cubic.interior_root() {
            Some(radius) => radius,
            None => {
                log::warn!(
                    "No prune radius for {} points within |q| <= {}; keeping all q-points",
                    target_count,
                    q_max
                );
                q_max
            }
        };

        log::debug!(
            "Prune state: angle factor {:.6}, full-sphere target {:.1}, prune radius {:.6}",
            angle_factor,
            full_sphere_count,
            prune_radius
        );

        Ok(PruneState {
            target_count,
            angle_factor,
            prune_radius,
            seed,
        })
    }

    /// Probability of keeping a point at `distance`, `min(1, (P / r)²)`.
    pub fn keep_probability(&self, distance: f64) -> f64 {
        if distance <= self.prune_radius {
            1.0
        } else {
            (self.prune_radius / distance).powi(2).min(1.0)
        }
    }

    /// Whether thinning can remove anything from a set bounded by `q_max`.
    pub fn is_active(&self, q_max: f64) -> bool {
        self.prune_radius < q_max
    }

    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }
}

/// Drop points at random, one draw per point in the given (ascending) order.
///
/// The point at position 0 is the origin and is always kept. A point survives
/// when its draw is `<= keep_probability(distance)`.
pub fn thin_q_points<R: Rng + ?Sized>(
    points: Vec<QPoint>,
    state: &PruneState,
    rng: &mut R,
) -> Vec<QPoint> {
    points
        .into_iter()
        .enumerate()
        .filter_map(|(position, point)| {
            let p = if position == 0 {
                1.0
            } else {
                state.keep_probability(point.distance)
            };
            let draw: f64 = rng.gen();
            (draw <= p).then_some(point)
        })
        .collect()
}

/// Thin `points` (sorted ascending, origin first) down to roughly `target_count`.
///
/// Returns the points unchanged, and no state, when `target_count` is zero or
/// not smaller than the number of points.
pub fn prune_q_points(
    points: Vec<QPoint>,
    lattice: &ReciprocalLattice,
    q_max: f64,
    target_count: usize,
    seed: u64,
) -> Result<(Vec<QPoint>, Option<PruneState>)> {
    if target_count == 0 || target_count >= points.len() {
        return Ok((points, None));
    }

    let state = PruneState::new(lattice, q_max, target_count, seed)?;
    if !state.is_active(q_max) {
        return Ok((points, Some(state)));
    }

    log::info!(
        "Pruning q-points from the range {:.4} < |q| < {}",
        state.prune_radius,
        q_max
    );
    let before = points.len();
    let mut rng = state.rng();
    let kept = thin_q_points(points, &state, &mut rng);
    log::info!("Pruned from {} q-points to {}", before, kept.len());

    Ok((kept, Some(state)))
}
