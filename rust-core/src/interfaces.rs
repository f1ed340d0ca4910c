// Definitions that are used throughout all modules

// Enumeration to track the space a basis lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Space {
    Real,
    Reciprocal,
}

impl Space {
    pub fn dual(self) -> Space {
        match self {
            Space::Real => Space::Reciprocal,
            Space::Reciprocal => Space::Real,
        }
    }
}
