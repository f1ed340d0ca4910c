use std::f64::consts::PI;

use nalgebra::{Matrix3, Vector3};

use crate::config::BASE_VECTOR_TOLERANCE;
use crate::errors::{QPointError, Result};
use crate::interfaces::Space;

/// A validated 3×3 lattice basis. Rows are the basis vectors.
///
/// Construction guarantees a finite, right-handed basis, so the inverse
/// always exists for a `BaseMatrix`. User-supplied bases are additionally
/// checked for near-degeneracy.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseMatrix {
    base_matrix: Matrix3<f64>,
    space: Space,
}

impl BaseMatrix {
    pub fn from_base_vectors(
        base_1: Vector3<f64>,
        base_2: Vector3<f64>,
        base_3: Vector3<f64>,
        space: Space,
    ) -> Result<Self> {
        let preliminary_base_matrix =
            Matrix3::from_rows(&[base_1.transpose(), base_2.transpose(), base_3.transpose()]);
        Self::from_matrix(preliminary_base_matrix, space)
    }

    pub fn from_matrix(matrix: Matrix3<f64>, space: Space) -> Result<Self> {
        if matrix.iter().any(|value| !value.is_finite()) {
            return Err(QPointError::InvalidParameter(
                "basis matrix contains non-finite entries".to_string(),
            ));
        }

        // Compare the determinant against the product of the row lengths so the
        // check does not depend on the unit of length.
        let determinant = matrix.determinant();
        let row_product: f64 = (0..3).map(|i| matrix.row(i).norm()).product();
        if determinant <= 0.0 || determinant <= BASE_VECTOR_TOLERANCE * row_product {
            return Err(QPointError::Geometry { determinant });
        }

        Ok(BaseMatrix {
            base_matrix: matrix,
            space,
        })
    }

    // Bases derived from a validated one only need to stay finite and
    // right-handed; the length-ratio check would reject the dual of a thin slab.
    fn from_derived(matrix: Matrix3<f64>, space: Space) -> Result<Self> {
        let determinant = matrix.determinant();
        if matrix.iter().any(|value| !value.is_finite()) || !(determinant > 0.0) {
            return Err(QPointError::Geometry { determinant });
        }

        Ok(BaseMatrix {
            base_matrix: matrix,
            space,
        })
    }

    /// Convert to the dual space: `2π · inverse(transpose(M))`.
    ///
    /// The transform is its own inverse, so a reciprocal basis converts back
    /// to the direct one.
    pub fn apply_reciprocal_transformation(&self) -> Result<BaseMatrix> {
        let transformed = (2.0 * PI) * self.transpose_inverse()?;
        Self::from_derived(transformed, self.space.dual())
    }

    pub fn base_matrix(&self) -> &Matrix3<f64> {
        &self.base_matrix
    }

    pub fn space(&self) -> Space {
        self.space
    }

    pub fn determinant(&self) -> f64 {
        self.base_matrix.determinant()
    }

    pub fn inverse(&self) -> Result<Matrix3<f64>> {
        self.base_matrix
            .try_inverse()
            .ok_or_else(|| QPointError::Geometry {
                determinant: self.determinant(),
            })
    }

    pub fn transpose(&self) -> Matrix3<f64> {
        self.base_matrix.transpose()
    }

    /// `inverse(transpose(M))`, equal to `transpose(inverse(M))`.
    pub fn transpose_inverse(&self) -> Result<Matrix3<f64>> {
        Ok(self.inverse()?.transpose())
    }

    /// Gram matrix of the rows, `M · Mᵀ`.
    pub fn metric(&self) -> Matrix3<f64> {
        self.base_matrix * self.base_matrix.transpose()
    }

    pub fn base_vectors(&self) -> [Vector3<f64>; 3] {
        [
            self.base_matrix.row(0).transpose(),
            self.base_matrix.row(1).transpose(),
            self.base_matrix.row(2).transpose(),
        ]
    }

    pub fn row_norms(&self) -> Vector3<f64> {
        row_norms(&self.base_matrix)
    }

    /// Angles between the basis vectors in radians, ordered (0,1), (0,2), (1,2).
    pub fn pairwise_angles(&self) -> [f64; 3] {
        let [a, b, c] = self.base_vectors();
        [angle_between(&a, &b), angle_between(&a, &c), angle_between(&b, &c)]
    }
}

/// Euclidean norm of each row of `matrix`.
pub fn row_norms(matrix: &Matrix3<f64>) -> Vector3<f64> {
    Vector3::new(matrix.row(0).norm(), matrix.row(1).norm(), matrix.row(2).norm())
}

/// Angle between two vectors in `[0, π]`.
///
/// Uses `atan2(|a×b|, a·b)`, which stays accurate for nearly parallel vectors
/// where `acos` of the normalised dot product loses half the digits.
pub fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.cross(b).norm().atan2(a.dot(b))
}
