use nalgebra::Vector3;
use num_complex::Complex64;

use crate::errors::{QPointError, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fourier component of the particle density at a single q-vector,
/// `ρ(q) = Σ_j exp(i q·r_j)`.
pub fn rho_q_single(positions: &[Vector3<f64>], q: &Vector3<f64>) -> Complex64 {
    positions
        .iter()
        .map(|r| Complex64::cis(q.dot(r)))
        .sum()
}

/// `ρ(q)` for every q-vector, in the order given.
pub fn rho_q(positions: &[Vector3<f64>], q_points: &[Vector3<f64>]) -> Vec<Complex64> {
    #[cfg(feature = "parallel")]
    {
        q_points
            .par_iter()
            .map(|q| rho_q_single(positions, q))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        q_points
            .iter()
            .map(|q| rho_q_single(positions, q))
            .collect()
    }
}

/// Static structure factor `S(q) = |ρ(q)|² / N` for every q-vector.
pub fn structure_factor(positions: &[Vector3<f64>], q_points: &[Vector3<f64>]) -> Result<Vec<f64>> {
    if positions.is_empty() {
        return Err(QPointError::InvalidParameter(
            "structure factor needs at least one position".to_string(),
        ));
    }

    let n = positions.len() as f64;
    Ok(rho_q(positions, q_points)
        .into_iter()
        .map(|rho| rho.norm_sqr() / n)
        .collect())
}

/// Read positions from a flat `[x0, y0, z0, x1, ...]` coordinate buffer.
pub fn positions_from_flat(coordinates: &[f64]) -> Result<Vec<Vector3<f64>>> {
    if coordinates.len() % 3 != 0 {
        return Err(QPointError::InvalidParameter(format!(
            "coordinate buffer length {} is not a multiple of 3",
            coordinates.len()
        )));
    }
    Ok(coordinates
        .chunks_exact(3)
        .map(|xyz| Vector3::new(xyz[0], xyz[1], xyz[2]))
        .collect())
}
