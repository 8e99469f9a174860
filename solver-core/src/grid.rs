/// Dense n x n field stored row-major, `(i, j)` -> `i * n + j`.
///
/// Cells outside `[0, n)` are the implicit zero boundary and are not stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    n: usize,
    data: Vec<f64>,
}

impl Grid {
    /// # Panics
    ///
    /// If `n * n` overflows `usize`. `HeatConfig` rejects such sizes up front.
    pub fn zeros(n: usize) -> Grid {
        Grid {
            n,
            data: vec![0.0; n * n],
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.n + j] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let mut g = Grid::zeros(3);
        g.set(1, 2, 7.0);
        assert_eq!(g.as_slice()[5], 7.0);
        assert_eq!(g.get(1, 2), 7.0);
        assert_eq!(&g.as_slice()[3..6], &[0.0, 0.0, 7.0]);
    }

    #[test]
    fn empty_grid_has_no_cells() {
        assert!(Grid::zeros(0).as_slice().is_empty());
    }
}
