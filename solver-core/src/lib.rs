mod config;
mod error;
mod grid;
mod heat;
mod par;
mod pi;
mod solver;

pub use config::{
    DEFAULT_ALPHA, DEFAULT_LENGTH, DEFAULT_N, DEFAULT_NSTEPS, HeatConfig, STABILITY_LIMIT,
};
pub use error::ConfigError;
pub use grid::Grid;
pub use heat::{
    analytic_solution, cell_error, initialize, l2_norm, l2_norm_at, position, run_steps, step,
};
pub use pi::estimate_pi;
pub use solver::HeatSolver;
