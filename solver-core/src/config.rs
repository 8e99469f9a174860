use crate::error::ConfigError;

/// Diffusion coefficient used unless overridden.
pub const DEFAULT_ALPHA: f64 = 0.1;
/// Physical side length of the square domain.
pub const DEFAULT_LENGTH: f64 = 1000.0;
pub const DEFAULT_N: i64 = 1000;
pub const DEFAULT_NSTEPS: i64 = 10;

/// Largest stability ratio for which the explicit scheme stays bounded.
pub const STABILITY_LIMIT: f64 = 0.5;

/// Validated heat run parameters.
///
/// `dx`, `dt` and `r` are derived once in the constructor and never change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatConfig {
    n: usize,
    nsteps: usize,
    alpha: f64,
    length: f64,
    dx: f64,
    dt: f64,
    r: f64,
}

impl HeatConfig {
    pub fn new(n: i64, nsteps: i64) -> Result<HeatConfig, ConfigError> {
        HeatConfig::with_constants(n, nsteps, DEFAULT_ALPHA, DEFAULT_LENGTH)
    }

    pub fn with_constants(
        n: i64,
        nsteps: i64,
        alpha: f64,
        length: f64,
    ) -> Result<HeatConfig, ConfigError> {
        if n <= 0 {
            return Err(ConfigError::NonPositiveGridSize(n));
        }
        if nsteps <= 0 {
            return Err(ConfigError::NonPositiveSteps(nsteps));
        }
        // both n x n buffers must be addressable
        let cells = usize::try_from(n).ok().and_then(|side| side.checked_mul(side));
        if cells.is_none() {
            return Err(ConfigError::GridTooLarge(n));
        }
        check_constant("alpha", alpha)?;
        check_constant("length", length)?;

        let dx = length / (n as f64 + 1.0);
        let dt = 0.5 / (nsteps as f64);
        let r = alpha * dt / (dx * dx);

        Ok(HeatConfig {
            n: n as usize,
            nsteps: nsteps as usize,
            alpha,
            length,
            dx,
            dt,
            r,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn nsteps(&self) -> usize {
        self.nsteps
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Stability ratio `alpha * dt / dx^2`.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Weight of the centre cell in the stencil, `1 - 4r`.
    pub fn r2(&self) -> f64 {
        1.0 - 4.0 * self.r
    }

    /// Simulated time reached after all steps.
    pub fn total_time(&self) -> f64 {
        self.dt * self.nsteps as f64
    }

    pub fn is_stable(&self) -> bool {
        self.r <= STABILITY_LIMIT
    }
}

fn check_constant(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidConstant { name, value })
    }
}
