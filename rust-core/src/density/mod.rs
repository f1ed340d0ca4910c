// Density module: Fourier components of particle densities evaluated on q-points

// ======================== MODULE DECLARATIONS ========================
pub mod fourier_components;


// ======================== FOURIER COMPONENTS ========================
pub use fourier_components::{
    positions_from_flat, // fn(coordinates: &[f64]) -> Result<Vec<Vector3<f64>>> - xyz triples
    rho_q,               // fn(positions: &[Vector3<f64>], q_points: &[Vector3<f64>]) -> Vec<Complex64>
    rho_q_single,        // fn(positions: &[Vector3<f64>], q: &Vector3<f64>) -> Complex64
    structure_factor,    // fn(positions, q_points) -> Result<Vec<f64>> - |ρ(q)|² / N
};
