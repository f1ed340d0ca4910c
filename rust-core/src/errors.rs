use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QPointError {
    #[error("degenerate or left-handed cell (determinant {determinant})")]
    Geometry { determinant: f64 },

    #[error("cutoff must be positive and finite, got {0}")]
    InvalidCutoff(f64),

    #[error("reciprocal basis vectors {first} and {second} are collinear (angle {angle} rad)")]
    DegenerateAngle {
        first: usize,
        second: usize,
        angle: f64,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, QPointError>;
