//! Prune radius for density-controlled q-point sampling.
//!
//! If every point beyond a radius `P` is kept with probability `(P/|q|)²`,
//! the expected number of points in a thin shell stops growing with `|q|`
//! and q-space is sampled evenly per radial unit. With `v` the q-space volume
//! per point, the expected total inside `Q` is
//!
//! `N = v⁻¹ (∫₀ᴾ 4πq² dq + ∫ᴾ^Q 4πP² dq)`
//!
//! which rearranges to the cubic `P³ − (3/2)Q·P² + (3/2)·v·N/(4π) = 0`.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::config::CUBIC_RESIDUAL_TOLERANCE;

/// The prune radius cubic `f(x) = x³ + b·x² + c·x + d` with `b = −(3/2)Q`, `c = 0`
/// and `d = (3/2)·V·N / (4π)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PruneCubic {
    /// Outer radius `Q`.
    pub q_max: f64,
    /// Constant term `d`.
    pub d: f64,
}

impl PruneCubic {
    /// `n_points` is the full-sphere equivalent target count and `q_volume` the
    /// volume of q-space owned by one lattice point.
    pub fn new(n_points: f64, q_max: f64, q_volume: f64) -> Self {
        PruneCubic {
            q_max,
            d: 1.5 * q_volume * n_points / (4.0 * PI),
        }
    }

    /// Coefficients `[a, b, c, d]` of the cubic.
    pub fn coefficients(&self) -> [f64; 4] {
        [1.0, -1.5 * self.q_max, 0.0, self.d]
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let [a, b, c, d] = self.coefficients();
        ((a * x + b) * x + c) * x + d
    }

    /// Discriminant of the depressed cubic, `−(4p³ + 27q²)`.
    ///
    /// Non-negative exactly when all three roots are real, in which case one of
    /// them lies in `[0, Q]`.
    pub fn discriminant(&self) -> f64 {
        let [a, b, c, d] = self.coefficients();
        let p = (3.0 * a * c - b * b) / (3.0 * a * a);
        let q = (2.0 * b.powi(3) - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a.powi(3));
        -(4.0 * p.powi(3) + 27.0 * q * q)
    }

    /// The root in `[0, Q]`, or `None` if the cubic has a single real root.
    pub fn interior_root(&self) -> Option<f64> {
        if self.discriminant() < 0.0 {
            return None;
        }

        let q = self.q_max;
        // Rounding at the edge of the valid range can push the argument past ±1
        let cos_3phi = (1.0 - 4.0 * self.d / q.powi(3)).clamp(-1.0, 1.0);
        let x = q * ((cos_3phi.acos() / 3.0 - 2.0 * PI / 3.0).cos() + 0.5);

        debug_assert!(
            self.evaluate(x).abs() < CUBIC_RESIDUAL_TOLERANCE * q.powi(3).max(1.0),
            "prune radius {} does not solve the cubic (residual {})",
            x,
            self.evaluate(x)
        );
        Some(x)
    }
}

/// Distance beyond which q-points are thinned so that roughly `n_points`
/// remain inside a full sphere of radius `q_max`.
///
/// Returns `q_max` when no interior radius exists, meaning nothing should be
/// pruned.
pub fn prune_radius(n_points: f64, q_max: f64, q_volume: f64) -> f64 {
    PruneCubic::new(n_points, q_max, q_volume)
        .interior_root()
        .unwrap_or(q_max)
}
