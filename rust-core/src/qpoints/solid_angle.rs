use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::config::ANGLE_TOLERANCE;
use crate::errors::{QPointError, Result};
use crate::lattice::{BaseMatrix, angle_between};

/// Solid angle subtended by the spherical triangle with vertices along `a`, `b`, `c`.
///
/// The sides of the triangle are the pairwise angles between the vectors and
/// the area follows from L'Huilier's theorem:
///
/// `tan(Σ/4) = sqrt(tan(s/2) · tan((s−a)/2) · tan((s−b)/2) · tan((s−c)/2))`
///
/// Fails with [`QPointError::DegenerateAngle`] when two of the vectors are
/// (anti)parallel or one of them is zero.
pub fn solid_angle_from_vectors(
    a: &Vector3<f64>,
    b: &Vector3<f64>,
    c: &Vector3<f64>,
) -> Result<f64> {
    let vectors = [a, b, c];
    let pairs = [(0, 1), (0, 2), (1, 2)];

    let mut sides = [0.0; 3];
    for (side, &(first, second)) in sides.iter_mut().zip(pairs.iter()) {
        let (u, v) = (vectors[first], vectors[second]);
        let angle = angle_between(u, v);
        let zero_vector = u.norm() == 0.0 || v.norm() == 0.0;
        if zero_vector || angle < ANGLE_TOLERANCE || angle > PI - ANGLE_TOLERANCE {
            return Err(QPointError::DegenerateAngle {
                first,
                second,
                angle,
            });
        }
        *side = angle;
    }

    let s = sides.iter().sum::<f64>() / 2.0;
    let product = (s / 2.0).tan()
        * ((s - sides[0]) / 2.0).tan()
        * ((s - sides[1]) / 2.0).tan()
        * ((s - sides[2]) / 2.0).tan();

    // Coplanar vectors give a vanishing product that may round below zero
    Ok(4.0 * product.max(0.0).sqrt().atan())
}

/// Solid angle spanned by the three basis vectors of `basis`.
pub fn solid_angle(basis: &BaseMatrix) -> Result<f64> {
    let [a, b, c] = basis.base_vectors();
    solid_angle_from_vectors(&a, &b, &c)
}

/// Fraction of the full sphere covered by the octant the basis spans, `Σ / 4π`.
pub fn angle_factor(basis: &BaseMatrix) -> Result<f64> {
    Ok(solid_angle(basis)? / (4.0 * PI))
}
