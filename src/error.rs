use thiserror::Error;

/// Top-level error type for road geometry, rendering and queries.
#[derive(Debug, Error)]
pub enum RoadError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite {0}")]
    NonFinite(&'static str),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors caused by an unusable road configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidParameter(String),
}

/// Errors related to drawing state.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`RoadError`].
pub type Result<T> = std::result::Result<T, RoadError>;
