// Q-points module: sampling of reciprocal lattice vectors inside a sphere,
// thinned to a target density

// ======================== MODULE DECLARATIONS ========================
pub mod generator;
pub mod prune_radius;
pub mod pruning;
pub mod solid_angle;
pub mod truncation;

// Test modules
mod _tests_generator;

// ======================== SAMPLING ENTRY POINTS ========================
pub use generator::{
    QPointSampler,     // struct - reciprocal lattice + QPointConfig
    QPointSet,         // struct - surviving points, truncated count, prune state
    generate_q_points, // fn(cell: &Matrix3<f64>, q_max: f64, target_count: i64, seed: u64) -> Result<Vec<Vector3<f64>>>
};
// QPointSampler impl methods:
//   new(cell: &Matrix3<f64>, config: QPointConfig) -> Result<Self> - validates cell and config
//   truncated(&self) -> Result<Vec<QPoint>>                         - sorted points with |q| <= q_max
//   sample(&self) -> Result<QPointSet>                              - truncated points, pruned if requested

// ======================== SPHERE TRUNCATION ========================
pub use truncation::{
    QPoint,             // struct - vector, distance and lattice index
    truncate_to_sphere, // fn(lattice: &ReciprocalLattice, indices: OctantIndices, q_max: f64) -> Vec<QPoint>
};

// ======================== DENSITY PRUNING ========================
pub use solid_angle::{
    angle_factor,             // fn(basis: &BaseMatrix) -> Result<f64> - Σ / 4π
    solid_angle,              // fn(basis: &BaseMatrix) -> Result<f64> - spherical excess of the basis
    solid_angle_from_vectors, // fn(a, b, c: &Vector3<f64>) -> Result<f64>
};

pub use prune_radius::{
    PruneCubic,   // struct - x³ − (3/2)Q·x² + d
    prune_radius, // fn(n_points: f64, q_max: f64, q_volume: f64) -> f64 - falls back to q_max
};

pub use pruning::{
    PruneState,     // struct - target count, angle factor, prune radius, seed
    prune_q_points, // fn(points, lattice, q_max, target_count, seed) -> Result<(Vec<QPoint>, Option<PruneState>)>
    thin_q_points,  // fn(points, state: &PruneState, rng: &mut R) -> Vec<QPoint>
};
