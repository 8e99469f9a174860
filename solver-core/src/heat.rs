//! Explicit five-point finite-difference kernels for the 2D heat equation
//! with zero Dirichlet boundaries, checked against the manufactured solution
//! `exp(-2 alpha pi^2 t / L^2) sin(pi x / L) sin(pi y / L)`.

use std::f64::consts::PI;

use crate::grid::Grid;
use crate::par;

/// Physical coordinate of grid index `k`. Indices `-1` and `n` sit on the boundary.
pub fn position(k: usize, dx: f64) -> f64 {
    dx * (k as f64 + 1.0)
}

/// Builds the t = 0 field `sin(pi x / L) sin(pi y / L)`.
pub fn initialize(n: usize, dx: f64, length: f64) -> Grid {
    let mut grid = Grid::zeros(n);
    fill_initial(&mut grid, dx, length);
    grid
}

pub(crate) fn fill_initial(grid: &mut Grid, dx: f64, length: f64) {
    let n = grid.n();
    par::for_each_row(grid.as_mut_slice(), n, |i, row| {
        let sx = (PI * position(i, dx) / length).sin();
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = sx * (PI * position(j, dx) / length).sin();
        }
    });
}

/// Writes one explicit time step of `current` into `next`.
///
/// Every cell of `next` is overwritten from `current` only, so the two grids
/// must be distinct buffers of the same size.
///
/// # Panics
///
/// If `current` and `next` differ in size.
pub fn step(current: &Grid, next: &mut Grid, alpha: f64, dx: f64, dt: f64) {
    apply_stencil(current, next, alpha * dt / (dx * dx));
}

pub(crate) fn apply_stencil(current: &Grid, next: &mut Grid, r: f64) {
    let n = current.n();
    assert_eq!(n, next.n(), "stencil source and destination differ in size");
    let r2 = 1.0 - 4.0 * r;
    let src = current.as_slice();

    par::for_each_row(next.as_mut_slice(), n, |i, out| {
        let here = &src[i * n..(i + 1) * n];
        let north = (i > 0).then(|| &src[(i - 1) * n..i * n]);
        let south = (i + 1 < n).then(|| &src[(i + 1) * n..(i + 2) * n]);

        for j in 0..n {
            let up = north.map_or(0.0, |row| row[j]);
            let down = south.map_or(0.0, |row| row[j]);
            let left = if j > 0 { here[j - 1] } else { 0.0 };
            let right = if j + 1 < n { here[j + 1] } else { 0.0 };
            out[j] = r2 * here[j] + r * (up + down + left + right);
        }
    });
}

/// Applies `step` `nsteps` times, swapping buffer roles in between, and
/// returns the buffer holding the final state.
pub fn run_steps(grid: Grid, nsteps: usize, alpha: f64, dx: f64, dt: f64) -> Grid {
    let mut current = grid;
    let mut next = Grid::zeros(current.n());
    for _ in 0..nsteps {
        step(&current, &mut next, alpha, dx, dt);
        std::mem::swap(&mut current, &mut next);
    }
    current
}

pub fn analytic_solution(t: f64, x: f64, y: f64, alpha: f64, length: f64) -> f64 {
    (-2.0 * alpha * PI * PI * t / (length * length)).exp()
        * (PI * x / length).sin()
        * (PI * y / length).sin()
}

/// Signed difference between cell `(i, j)` and the exact solution at `time`.
pub fn cell_error(
    grid: &Grid,
    i: usize,
    j: usize,
    time: f64,
    alpha: f64,
    dx: f64,
    length: f64,
) -> f64 {
    grid.get(i, j) - analytic_solution(time, position(i, dx), position(j, dx), alpha, length)
}

/// L2 error of `grid` against the exact solution after `nsteps` steps of size `dt`.
pub fn l2_norm(grid: &Grid, nsteps: usize, dt: f64, alpha: f64, dx: f64, length: f64) -> f64 {
    l2_norm_at(grid, dt * nsteps as f64, alpha, dx, length)
}

/// L2 error of `grid` against the exact solution at an explicit time.
pub fn l2_norm_at(grid: &Grid, time: f64, alpha: f64, dx: f64, length: f64) -> f64 {
    let n = grid.n();
    let sum = par::sum_over(n, |i| {
        (0..n)
            .map(|j| {
                let e = cell_error(grid, i, j, time, alpha, dx, length);
                e * e
            })
            .sum::<f64>()
    });
    sum.sqrt()
}
