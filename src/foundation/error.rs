/// Crate-wide result alias.
pub type GeomotionResult<T> = Result<T, GeomotionError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type used by the public API.
pub enum GeomotionError {
    /// Invalid user input (parameters, grids, scenario files).
    #[error("validation error: {0}")]
    Validation(String),

    /// Numerical integration failed (non-finite state, bad time grid).
    #[error("solver error: {0}")]
    Solver(String),

    /// A geometric construction has no solution for the given inputs.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Cellular automaton configuration or state error.
    #[error("automaton error: {0}")]
    Automaton(String),

    /// Serialization/deserialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GeomotionError {
    /// Build a [`GeomotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GeomotionError::Solver`] value.
    pub fn solver(msg: impl Into<String>) -> Self {
        Self::Solver(msg.into())
    }

    /// Build a [`GeomotionError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`GeomotionError::Automaton`] value.
    pub fn automaton(msg: impl Into<String>) -> Self {
        Self::Automaton(msg.into())
    }

    /// Build a [`GeomotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
