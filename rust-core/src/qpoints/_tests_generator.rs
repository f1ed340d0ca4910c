#[cfg(test)]
mod _tests_generator {
    use super::super::generator::*;
    use crate::config::{DEFAULT_SEED, DISTANCE_TOLERANCE, QPointConfig};
    use crate::errors::QPointError;
    use nalgebra::{Matrix3, Vector3};
    use std::f64::consts::PI;

    fn cubic_cell(a: f64) -> Matrix3<f64> {
        Matrix3::from_diagonal_element(a)
    }

    // Helper function to create a hexagonal cell (rows are lattice vectors)
    fn hexagonal_cell(a: f64, c: f64) -> Matrix3<f64> {
        Matrix3::new(
            a, 0.0, 0.0,
            -a / 2.0, a * 3.0_f64.sqrt() / 2.0, 0.0,
            0.0, 0.0, c,
        )
    }

    fn brute_force_count(a: f64, q_max: f64) -> usize {
        let spacing = 2.0 * PI / a;
        let n = (q_max / spacing).ceil() as i64 + 2;
        let mut count = 0;
        for i in 0..=n {
            for j in 0..=n {
                for k in 0..=n {
                    if spacing * ((i * i + j * j + k * k) as f64).sqrt() <= q_max {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    #[test]
    fn test_unpruned_cubic_scenario() {
        let q = generate_q_points(&cubic_cell(10.0), 2.0, -1, DEFAULT_SEED).unwrap();
        assert_eq!(q.len(), brute_force_count(10.0, 2.0));
        assert_eq!(q[0], Vector3::zeros());
        assert!(q.windows(2).all(|w| w[0].norm() <= w[1].norm()));
        assert!(q.iter().all(|v| v.norm() <= 2.0 + DISTANCE_TOLERANCE));

        // Every vector is a non-negative multiple of the reciprocal spacing
        let spacing = 2.0 * PI / 10.0;
        for v in &q {
            for x in v.iter() {
                let n = x / spacing;
                assert!((n - n.round()).abs() < 1e-9 && n > -1e-9);
            }
        }
    }

    #[test]
    fn test_pruned_cubic_scenario() {
        let full = generate_q_points(&cubic_cell(10.0), 2.0, -1, 42).unwrap();
        let pruned = generate_q_points(&cubic_cell(10.0), 2.0, 5, 42).unwrap();
        assert!(!pruned.is_empty());
        assert!(pruned.len() <= full.len());
        assert_eq!(pruned[0], Vector3::zeros());

        let again = generate_q_points(&cubic_cell(10.0), 2.0, 5, 42).unwrap();
        assert_eq!(pruned, again);
    }

    #[test]
    fn test_target_at_or_above_size_is_no_op() {
        let full = generate_q_points(&cubic_cell(10.0), 2.0, 0, 42).unwrap();
        let n = full.len() as i64;
        assert_eq!(generate_q_points(&cubic_cell(10.0), 2.0, n, 7).unwrap(), full);
        assert_eq!(generate_q_points(&cubic_cell(10.0), 2.0, n + 100, 7).unwrap(), full);
    }

    #[test]
    fn test_non_positive_target_disables_pruning() {
        let full = generate_q_points(&cubic_cell(10.0), 2.0, 0, 42).unwrap();
        assert_eq!(generate_q_points(&cubic_cell(10.0), 2.0, -25, 42).unwrap(), full);
    }

    #[test]
    fn test_sampler_report() {
        let config = QPointConfig::new(2.0).with_target_count(5).with_seed(42);
        let sampler = QPointSampler::new(&cubic_cell(10.0), config).unwrap();
        let set = sampler.sample().unwrap();

        assert_eq!(set.truncated_count, 35);
        assert_eq!(set.len(), set.vectors().len());
        assert_eq!(set.distances()[0], 0.0);
        let prune = set.prune.unwrap();
        assert!((prune.angle_factor - 0.125).abs() < 1e-9);
        assert!(prune.prune_radius < 2.0);
        assert_eq!(set.was_pruned(), set.len() < 35);

        assert_eq!(sampler.truncated().unwrap().len(), 35);
        assert_eq!(sampler.config().seed, 42);
    }

    #[test]
    fn test_sampler_without_target_reports_no_prune() {
        let sampler = QPointSampler::new(&cubic_cell(10.0), QPointConfig::new(2.0)).unwrap();
        let set = sampler.sample().unwrap();
        assert!(set.prune.is_none());
        assert!(!set.was_pruned());
        assert_eq!(set.len(), set.truncated_count);
    }

    #[test]
    fn test_hexagonal_cell_invariants() {
        let cell = hexagonal_cell(3.0, 5.0);
        let full = generate_q_points(&cell, 4.0, -1, 42).unwrap();
        assert_eq!(full[0], Vector3::zeros());
        assert!(full.windows(2).all(|w| w[0].norm() <= w[1].norm()));
        assert!(full.iter().all(|v| v.norm() <= 4.0 + DISTANCE_TOLERANCE));

        let target = (full.len() / 4) as i64;
        let pruned = generate_q_points(&cell, 4.0, target, 3).unwrap();
        assert!(pruned.len() <= full.len());
        assert!(pruned.windows(2).all(|w| w[0].norm() <= w[1].norm()));
        assert_eq!(pruned, generate_q_points(&cell, 4.0, target, 3).unwrap());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            generate_q_points(&cubic_cell(10.0), 0.0, -1, 42),
            Err(QPointError::InvalidCutoff(_))
        ));
        assert!(matches!(
            generate_q_points(&cubic_cell(10.0), -2.0, 5, 42),
            Err(QPointError::InvalidCutoff(_))
        ));

        let left_handed = Matrix3::from_diagonal(&Vector3::new(10.0, 10.0, -10.0));
        assert!(matches!(
            generate_q_points(&left_handed, 2.0, -1, 42),
            Err(QPointError::Geometry { .. })
        ));

        assert!(matches!(
            generate_q_points(&Matrix3::zeros(), 2.0, -1, 42),
            Err(QPointError::Geometry { .. })
        ));
    }

    #[test]
    fn test_thin_slab_yields_only_origin_inside_small_cutoff() {
        // Every non-zero first-octant point of this lattice has norm >= 2π
        let slab = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            1.0, 1.0, 1e-6,
        );
        let q = generate_q_points(&slab, 1.0, -1, DEFAULT_SEED).unwrap();
        assert_eq!(q.len(), 1);
        assert_eq!(q[0], Vector3::zeros());
    }
}
