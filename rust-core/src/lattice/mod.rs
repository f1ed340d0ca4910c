// Lattice module: real-space cells, their reciprocal lattices and the integer
// index sets used to sample q-space

// ======================== MODULE DECLARATIONS ========================
pub mod base_matrix;
pub mod lattice_enumeration;
pub mod reciprocal;

// Test modules
mod _tests_base_matrix;

// ======================== BASIS MATRICES ========================
pub use base_matrix::{
    BaseMatrix,    // struct - validated 3×3 basis, lattice vectors as rows
    angle_between, // fn(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 - angle in [0, π]
    row_norms,     // fn(matrix: &Matrix3<f64>) -> Vector3<f64> - Euclidean norm of each row
};
// BaseMatrix impl methods:
//   from_base_vectors(b1, b2, b3, space: Space) -> Result<Self> - builds from three row vectors
//   from_matrix(matrix: Matrix3<f64>, space: Space) -> Result<Self> - validates det > 0 (scale invariant)
//   apply_reciprocal_transformation(&self) -> Result<BaseMatrix>   - 2π · inverse(transpose(M)), flips Space
//   determinant / inverse / transpose / transpose_inverse / metric  - linear algebra helpers
//   base_vectors(&self) -> [Vector3<f64>; 3]                       - rows as vectors
//   row_norms(&self) -> Vector3<f64>                               - lengths of the basis vectors
//   pairwise_angles(&self) -> [f64; 3]                             - angles (0,1), (0,2), (1,2)

// ======================== RECIPROCAL LATTICE ========================
pub use reciprocal::ReciprocalLattice; // struct - direct cell + reciprocal cell + axis spacings h
// ReciprocalLattice impl methods:
//   new(cell: &Matrix3<f64>) -> Result<Self>            - builds from a real-space cell (rows)
//   reciprocal_cell(&self) -> &Matrix3<f64>             - 2π · inverse(transpose(cell))
//   inv_reciprocal_cell(&self) -> &Matrix3<f64>         - transpose(inverse(reciprocal))
//   spacing(&self) -> &Vector3<f64>                     - h[i] = 1 / ‖inv_reciprocal.row(i)‖
//   q_volume(&self) -> f64                              - det(reciprocal)
//   q_vector(&self, coefficients: &Vector3<f64>) -> Vector3<f64> - Σ c_i · reciprocal.row(i)

// ======================== OCTANT ENUMERATION ========================
pub use lattice_enumeration::{
    LatticeIndex,     // struct - integer triple (i, j, k)
    OctantBounds,     // struct - inclusive per-axis bounds N = ceil(q_max / h)
    OctantIndices,    // iterator - row-major walk over [0, N0] × [0, N1] × [0, N2]
    enumerate_octant, // fn(spacing: &Vector3<f64>, q_max: f64) -> Result<OctantIndices>
};
