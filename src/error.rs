use thiserror::Error;

/// Top-level error type for the ringlay placement tool.
#[derive(Debug, Error)]
pub enum RinglayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while validating user-supplied layout parameters.
///
/// All of these are rejected before any geometry computation runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least 3 vertices are required, got {0}")]
    TooFewVertices(u32),

    #[error("{name} = {value} must be positive")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error("diameter {diameter} must be larger than the component height {height}")]
    DiameterTooSmall { diameter: f64, height: f64 },

    #[error("invalid value for --{name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`RinglayError`].
pub type Result<T> = std::result::Result<T, RinglayError>;
