use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use solver_core::{
    ConfigError, HeatConfig, HeatSolver, cell_error, initialize, l2_norm, run_steps,
};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Builds a solver for `cfg` and returns everything it logged while doing so.
fn solver_logs(cfg: HeatConfig) -> String {
    let buf = LogBuffer::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        HeatSolver::new(cfg);
    });
    let bytes = buf.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

fn solve(cfg: &HeatConfig) -> f64 {
    let grid = initialize(cfg.n(), cfg.dx(), cfg.length());
    let grid = run_steps(grid, cfg.nsteps(), cfg.alpha(), cfg.dx(), cfg.dt());
    l2_norm(&grid, cfg.nsteps(), cfg.dt(), cfg.alpha(), cfg.dx(), cfg.length())
}

#[test]
fn reference_run_is_accurate_and_stable() {
    let cfg = HeatConfig::new(100, 10).unwrap();
    assert!(cfg.is_stable());
    assert_relative_eq!(cfg.dx(), 9.900_990_099_009_9, epsilon = 1e-9);
    assert_relative_eq!(cfg.dt(), 0.05);

    let err = solve(&cfg);
    assert!(err.is_finite());
    assert!(err >= 0.0);
    assert!(err < 1.0, "l2 error {err}");
}

#[test]
fn more_steps_stay_accurate() {
    for nsteps in [10, 20, 40] {
        let err = solve(&HeatConfig::new(50, nsteps).unwrap());
        assert!(err.is_finite() && err < 1.0, "nsteps {nsteps}: {err}");
    }
}

#[test]
fn unstable_run_still_completes() {
    let cfg = HeatConfig::with_constants(10, 1, 1.0, 1.0).unwrap();
    assert!(!cfg.is_stable());

    let mut solver = HeatSolver::new(cfg);
    assert_eq!(solver.run(), 1);
    let err = solver.l2_norm();
    assert!(err.is_finite());
    assert!(err > 1.0);
}

#[test]
fn instability_is_logged_as_warning() {
    let logs = solver_logs(HeatConfig::with_constants(10, 1, 1.0, 1.0).unwrap());
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("stability ratio exceeds 0.5"), "{logs}");
}

#[test]
fn stable_run_logs_no_warning() {
    let logs = solver_logs(HeatConfig::new(100, 10).unwrap());
    assert!(!logs.contains("WARN"), "{logs}");
    assert!(!logs.contains("stability ratio"), "{logs}");
}

#[test]
fn invalid_sizes_fail_before_any_work() {
    for (n, nsteps) in [(0, 10), (-5, 10)] {
        assert_eq!(HeatConfig::new(n, nsteps), Err(ConfigError::NonPositiveGridSize(n)));
    }
    for (n, nsteps) in [(10, 0), (10, -3)] {
        assert_eq!(HeatConfig::new(n, nsteps), Err(ConfigError::NonPositiveSteps(nsteps)));
    }
}

#[test]
fn initialize_is_reproducible() {
    let cfg = HeatConfig::new(64, 1).unwrap();
    let a = initialize(cfg.n(), cfg.dx(), cfg.length());
    let b = initialize(cfg.n(), cfg.dx(), cfg.length());
    let bits = |g: &solver_core::Grid| g.as_slice().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn norm_is_independent_of_summation_order() {
    let cfg = HeatConfig::with_constants(40, 5, 0.05, 10.0).unwrap();
    let n = cfg.n();
    let grid = run_steps(
        initialize(n, cfg.dx(), cfg.length()),
        cfg.nsteps(),
        cfg.alpha(),
        cfg.dx(),
        cfg.dt(),
    );
    let time = cfg.total_time();
    let sq = |i: usize, j: usize| {
        let e = cell_error(&grid, i, j, time, cfg.alpha(), cfg.dx(), cfg.length());
        e * e
    };

    let row_major: f64 = (0..n).flat_map(|i| (0..n).map(move |j| (i, j))).map(|(i, j)| sq(i, j)).sum();
    let col_major: f64 = (0..n).flat_map(|j| (0..n).map(move |i| (i, j))).map(|(i, j)| sq(i, j)).sum();

    let mut cells: Vec<(usize, usize)> = (0..n).flat_map(|i| (0..n).map(move |j| (i, j))).collect();
    cells.shuffle(&mut ChaCha8Rng::seed_from_u64(123));
    let shuffled: f64 = cells.iter().map(|&(i, j)| sq(i, j)).sum();

    let norm = l2_norm(&grid, cfg.nsteps(), cfg.dt(), cfg.alpha(), cfg.dx(), cfg.length());
    assert!(norm > 0.0);
    assert_relative_eq!(norm, row_major.sqrt(), max_relative = 1e-9);
    assert_relative_eq!(norm, col_major.sqrt(), max_relative = 1e-9);
    assert_relative_eq!(norm, shuffled.sqrt(), max_relative = 1e-9);
}
