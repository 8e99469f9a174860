use thiserror::Error;

/// Rejected run configuration. Raised before any grid is allocated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size n must be positive, got {0}")]
    NonPositiveGridSize(i64),

    #[error("grid size n = {0} is too large to allocate")]
    GridTooLarge(i64),

    #[error("step count nsteps must be positive, got {0}")]
    NonPositiveSteps(i64),

    #[error("{name} must be finite and positive, got {value}")]
    InvalidConstant { name: &'static str, value: f64 },

    #[error("interval count must be positive, got {0}")]
    NonPositiveIntervals(i64),
}
