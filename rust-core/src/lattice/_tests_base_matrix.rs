#[cfg(test)]
mod _tests_base_matrix {
    use super::super::base_matrix::*;
    use crate::errors::QPointError;
    use crate::interfaces::Space;
    use nalgebra::{Matrix3, Vector3};
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    fn create_triclinic() -> Matrix3<f64> {
        Matrix3::new(
            4.0, 0.0, 0.0,
            1.0, 5.0, 0.0,
            0.5, 0.8, 6.0,
        )
    }

    #[test]
    fn test_from_matrix_accepts_right_handed_cell() {
        let basis = BaseMatrix::from_matrix(create_triclinic(), Space::Real).unwrap();
        assert!((basis.determinant() - 120.0).abs() < TOL);
        assert_eq!(basis.space(), Space::Real);
    }

    #[test]
    fn test_from_base_vectors_uses_rows() {
        let basis = BaseMatrix::from_base_vectors(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 2.0, 0.0),
            Vector3::new(0.0, 0.0, 3.0),
            Space::Real,
        )
        .unwrap();
        let [a, b, c] = basis.base_vectors();
        assert_eq!(a, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(b, Vector3::new(1.0, 2.0, 0.0));
        assert_eq!(c, Vector3::new(0.0, 0.0, 3.0));
        assert_eq!(basis.base_matrix()[(1, 1)], 2.0);
    }

    #[test]
    fn test_left_handed_cell_is_rejected() {
        let cell = Matrix3::new(
            0.0, 1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
        );
        let err = BaseMatrix::from_matrix(cell, Space::Real).unwrap_err();
        assert!(matches!(err, QPointError::Geometry { determinant } if determinant < 0.0));
    }

    #[test]
    fn test_singular_cell_is_rejected() {
        let cell = Matrix3::new(
            1.0, 0.0, 0.0,
            2.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
        );
        assert!(matches!(
            BaseMatrix::from_matrix(cell, Space::Real),
            Err(QPointError::Geometry { .. })
        ));
    }

    #[test]
    fn test_tiny_but_valid_cell_is_accepted() {
        // The degeneracy check is relative to the row lengths
        let cell = Matrix3::from_diagonal_element(1e-5);
        assert!(BaseMatrix::from_matrix(cell, Space::Real).is_ok());
    }

    #[test]
    fn test_non_finite_entries_are_rejected() {
        let mut cell = Matrix3::identity();
        cell[(2, 1)] = f64::NAN;
        assert!(matches!(
            BaseMatrix::from_matrix(cell, Space::Real),
            Err(QPointError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_reciprocal_transformation_cubic() {
        let basis = BaseMatrix::from_matrix(Matrix3::from_diagonal_element(10.0), Space::Real).unwrap();
        let reciprocal = basis.apply_reciprocal_transformation().unwrap();
        assert_eq!(reciprocal.space(), Space::Reciprocal);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 2.0 * PI / 10.0 } else { 0.0 };
                assert!((reciprocal.base_matrix()[(i, j)] - expected).abs() < TOL);
            }
        }
    }

    #[test]
    fn test_reciprocal_duality() {
        let basis = BaseMatrix::from_matrix(create_triclinic(), Space::Real).unwrap();
        let reciprocal = basis.apply_reciprocal_transformation().unwrap();

        // a_i · b_j = 2π δ_ij
        let product = basis.base_matrix() * reciprocal.base_matrix().transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 2.0 * PI } else { 0.0 };
                assert!((product[(i, j)] - expected).abs() < 1e-9);
            }
        }

        // Applying the transformation twice returns the direct basis
        let back = reciprocal.apply_reciprocal_transformation().unwrap();
        assert_eq!(back.space(), Space::Real);
        assert!((back.base_matrix() - basis.base_matrix()).norm() < 1e-9);
    }

    #[test]
    fn test_reciprocal_of_thin_slab_is_accepted() {
        // Valid slab whose dual has one row ~1e6 times longer than the others
        let slab = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            1.0, 1.0, 1e-6,
        );
        let direct = BaseMatrix::from_matrix(slab, Space::Real).unwrap();
        let reciprocal = direct.apply_reciprocal_transformation().unwrap();
        assert_eq!(reciprocal.space(), Space::Reciprocal);

        let expected = (2.0 * PI).powi(3) / 1e-6;
        assert!((reciprocal.determinant() - expected).abs() / expected < 1e-6);
    }

    #[test]
    fn test_metric_and_row_norms() {
        let basis = BaseMatrix::from_matrix(create_triclinic(), Space::Real).unwrap();
        let metric = basis.metric();
        let norms = basis.row_norms();
        for i in 0..3 {
            assert!((metric[(i, i)].sqrt() - norms[i]).abs() < TOL);
        }
        assert!((metric[(0, 1)] - 4.0).abs() < TOL);
        assert!((norms[1] - 26.0_f64.sqrt()).abs() < TOL);
    }

    #[test]
    fn test_transpose_inverse_matches_inverse_transpose() {
        let basis = BaseMatrix::from_matrix(create_triclinic(), Space::Real).unwrap();
        let lhs = basis.transpose_inverse().unwrap();
        let rhs = basis.transpose().try_inverse().unwrap();
        assert!((lhs - rhs).norm() < TOL);
    }

    #[test]
    fn test_pairwise_angles() {
        let basis = BaseMatrix::from_base_vectors(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 2.0),
            Space::Real,
        )
        .unwrap();
        let [ab, ac, bc] = basis.pairwise_angles();
        assert!((ab - PI / 4.0).abs() < TOL);
        assert!((ac - PI / 2.0).abs() < TOL);
        assert!((bc - PI / 2.0).abs() < TOL);
    }

    #[test]
    fn test_angle_between_parallel_and_antiparallel() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert!(angle_between(&a, &(2.5 * a)).abs() < TOL);
        assert!((angle_between(&a, &(-a)) - PI).abs() < TOL);
    }
}
