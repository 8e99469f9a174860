//! Row-parallel loops, serial when the `parallel` feature is off.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Calls `f(i, row)` for every `n`-wide row of `data`. No-op for `n == 0`.
#[cfg(feature = "parallel")]
pub(crate) fn for_each_row<F>(data: &mut [f64], n: usize, f: F)
where
    F: Fn(usize, &mut [f64]) + Send + Sync,
{
    if n == 0 {
        return;
    }
    data.par_chunks_mut(n).enumerate().for_each(|(i, row)| f(i, row));
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn for_each_row<F>(data: &mut [f64], n: usize, f: F)
where
    F: Fn(usize, &mut [f64]) + Send + Sync,
{
    if n == 0 {
        return;
    }
    data.chunks_mut(n).enumerate().for_each(|(i, row)| f(i, row));
}

/// Sum of `f(k)` for `k` in `0..len`. Partial sums combine in no fixed order.
#[cfg(feature = "parallel")]
pub(crate) fn sum_over<F>(len: usize, f: F) -> f64
where
    F: Fn(usize) -> f64 + Send + Sync,
{
    (0..len).into_par_iter().map(f).sum()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn sum_over<F>(len: usize, f: F) -> f64
where
    F: Fn(usize) -> f64 + Send + Sync,
{
    (0..len).map(f).sum()
}
