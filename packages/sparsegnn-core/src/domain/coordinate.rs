//! Coordinate-format (COO) sparse matrix.
//!
//! Memory layout:
//! - `rows[k]`, `cols[k]`, `values[k]` together form the k-th entry
//! - `shape` = (num_rows, num_cols)
//!
//! Entries keep the order they were emitted in and are never merged, so the
//! same coordinate may appear more than once. Dense conversion sums them.

use serde::Serialize;

/// Immutable sparse matrix in coordinate-list form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateMatrix {
    rows: Vec<usize>,
    cols: Vec<usize>,
    values: Vec<f64>,
    shape: (usize, usize),
}

impl CoordinateMatrix {
    /// Assemble from (row, col, value) triples; callers guarantee bounds.
    pub(crate) fn from_triples(
        shape: (usize, usize),
        triples: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Self {
        let mut rows = Vec::new();
        let mut cols = Vec::new();
        let mut values = Vec::new();

        for (row, col, value) in triples {
            debug_assert!(row < shape.0 && col < shape.1);
            rows.push(row);
            cols.push(col);
            values.push(value);
        }

        Self {
            rows,
            cols,
            values,
            shape,
        }
    }

    /// Row index of every entry.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Column index of every entry.
    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// (num_rows, num_cols)
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Number of stored entries (duplicates included).
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Entries as (row, col, value) in emission order.
    pub fn triples(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows
            .iter()
            .zip(&self.cols)
            .zip(&self.values)
            .map(|((&row, &col), &value)| (row, col, value))
    }

    /// Row-major dense matrix; duplicate coordinates are summed.
    pub fn to_dense(&self) -> Vec<Vec<f64>> {
        let (num_rows, num_cols) = self.shape;
        let mut dense = vec![vec![0.0; num_cols]; num_rows];
        for (row, col, value) in self.triples() {
            dense[row][col] += value;
        }
        dense
    }
}
