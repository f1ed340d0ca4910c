//! Spherical q-point sampling library
//!
//! This library generates reciprocal-space sampling points ("q-points") for a
//! periodic simulation cell: all first-octant reciprocal lattice vectors
//! inside a sphere, optionally thinned to a target count so that q-space is
//! sampled evenly per radial unit beyond an inner prune radius.

pub mod config;
pub mod density;
pub mod errors;
pub mod interfaces;
pub mod lattice;
pub mod qpoints;

pub use config::QPointConfig;
pub use errors::{QPointError, Result};
pub use lattice::{BaseMatrix, LatticeIndex, ReciprocalLattice};
pub use qpoints::{PruneState, QPoint, QPointSampler, QPointSet, generate_q_points};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
