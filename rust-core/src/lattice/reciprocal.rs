use nalgebra::{Matrix3, Vector3};

use crate::errors::{QPointError, Result};
use crate::interfaces::Space;
use crate::lattice::base_matrix::{BaseMatrix, row_norms};

/// A real-space cell together with its reciprocal lattice and the per-axis
/// spacings needed to cover a sphere in q-space.
#[derive(Debug, Clone)]
pub struct ReciprocalLattice {
    /// Real-space cell, lattice vectors as rows.
    direct: BaseMatrix,
    /// Reciprocal cell `2π · inverse(transpose(direct))`, reciprocal vectors as rows.
    reciprocal: BaseMatrix,
    /// `transpose(inverse(reciprocal))`.
    inv_reciprocal: Matrix3<f64>,
    /// Height of the reciprocal cell along each axis, `1 / ‖inv_reciprocal.row(i)‖`.
    spacing: Vector3<f64>,
}

impl ReciprocalLattice {
    /// Build the reciprocal lattice of a real-space cell given with lattice vectors as rows.
    pub fn new(cell: &Matrix3<f64>) -> Result<Self> {
        Self::from_base_matrix(BaseMatrix::from_matrix(*cell, Space::Real)?)
    }

    pub fn from_base_matrix(direct: BaseMatrix) -> Result<Self> {
        if direct.space() != Space::Real {
            return Err(QPointError::InvalidParameter(
                "reciprocal lattice must be built from a real-space basis".to_string(),
            ));
        }

        // 1) Reciprocal basis (2π convention)
        let reciprocal = direct.apply_reciprocal_transformation()?;

        // 2) Planes of the reciprocal lattice: h[i] is the distance between
        //    neighbouring planes spanned by the other two reciprocal vectors
        let inv_reciprocal = reciprocal.inverse()?.transpose();
        let spacing = row_norms(&inv_reciprocal).map(|norm| 1.0 / norm);

        log::debug!(
            "Reciprocal lattice: q-volume {:.6e}, axis spacings ({:.6}, {:.6}, {:.6})",
            reciprocal.determinant(),
            spacing[0],
            spacing[1],
            spacing[2]
        );

        Ok(ReciprocalLattice {
            direct,
            reciprocal,
            inv_reciprocal,
            spacing,
        })
    }

    pub fn direct(&self) -> &BaseMatrix {
        &self.direct
    }

    pub fn reciprocal(&self) -> &BaseMatrix {
        &self.reciprocal
    }

    pub fn reciprocal_cell(&self) -> &Matrix3<f64> {
        self.reciprocal.base_matrix()
    }

    pub fn inv_reciprocal_cell(&self) -> &Matrix3<f64> {
        &self.inv_reciprocal
    }

    pub fn spacing(&self) -> &Vector3<f64> {
        &self.spacing
    }

    /// Volume of q-space owned by a single q-point, `det(reciprocal)`.
    pub fn q_volume(&self) -> f64 {
        self.reciprocal.determinant()
    }

    /// Map integer reciprocal coordinates to a Cartesian q-vector.
    pub fn q_vector(&self, coefficients: &Vector3<f64>) -> Vector3<f64> {
        self.reciprocal_cell().tr_mul(coefficients)
    }
}
