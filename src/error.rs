use thiserror::Error;

/// Errors raised while setting up or querying the simulation.
///
/// A search that finds no route is not an error: it yields an empty
/// [Path](crate::solver::Path).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A start or goal coordinate lies outside the workspace.
    #[error("point ({x}, {y}) lies outside the {width}x{height} workspace")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    /// A configuration value cannot be used to build the simulation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SimError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
