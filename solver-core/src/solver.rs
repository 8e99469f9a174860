use crate::config::HeatConfig;
use crate::grid::Grid;
use crate::heat;

/// Owns the double buffer for one heat run.
///
/// `field` always holds the latest state; `next` is scratch for the step in
/// progress and the two swap after every step.
pub struct HeatSolver {
    config: HeatConfig,
    steps_taken: usize,
    field: Grid,
    next: Grid,
}

impl HeatSolver {
    pub fn new(config: HeatConfig) -> HeatSolver {
        if !config.is_stable() {
            tracing::warn!(
                r = config.r(),
                "stability ratio exceeds 0.5, the explicit scheme may diverge"
            );
        }

        let n = config.n();
        let field = heat::initialize(n, config.dx(), config.length());

        HeatSolver {
            config,
            steps_taken: 0,
            field,
            next: Grid::zeros(n),
        }
    }

    // ---- Accessors ----

    pub fn config(&self) -> &HeatConfig {
        &self.config
    }

    pub fn field(&self) -> &Grid {
        &self.field
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Simulated time of the current field.
    pub fn time(&self) -> f64 {
        self.config.dt() * self.steps_taken as f64
    }

    // ---- Stepping ----

    pub fn step(&mut self) {
        heat::apply_stencil(&self.field, &mut self.next, self.config.r());
        self.swap_buffers();
        self.steps_taken += 1;
    }

    /// Takes the remaining steps up to `nsteps`. Returns how many were taken.
    pub fn run(&mut self) -> usize {
        let remaining = self.config.nsteps().saturating_sub(self.steps_taken);
        for _ in 0..remaining {
            self.step();
        }
        tracing::debug!(steps = remaining, time = self.time(), "heat run finished");
        remaining
    }

    /// Back to the initial field at t = 0, reusing both buffers.
    pub fn reset(&mut self) {
        heat::fill_initial(&mut self.field, self.config.dx(), self.config.length());
        self.steps_taken = 0;
    }

    /// L2 error of the current field against the exact solution at `time()`.
    pub fn l2_norm(&self) -> f64 {
        heat::l2_norm_at(
            &self.field,
            self.time(),
            self.config.alpha(),
            self.config.dx(),
            self.config.length(),
        )
    }

    fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.field, &mut self.next);
    }
}
