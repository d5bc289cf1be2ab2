//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{Result, SonanceError};
use serde::{Deserialize, Serialize};

/// A 2D matrix of floating-point values (row-major storage).
///
/// # Examples
///
/// ```
/// use sonance::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(SonanceError::dimension_mismatch(
                "rows*cols",
                rows * cols,
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Borrows a row without copying.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx` is out of bounds.
    #[must_use]
    pub fn row_slice(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns a column as a Vector.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector<T> {
        let data: Vec<T> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Vector::from_vec(data)
    }

    /// Iterates over rows as slices.
    ///
    /// A zero-width matrix yields no rows.
    pub fn rows_iter(&self) -> std::slice::ChunksExact<'_, T> {
        // data is empty when cols == 0, so width 1 yields nothing
        self.data.chunks_exact(self.cols.max(1))
    }

    /// Gathers the given rows (in order, repeats allowed) into a new matrix.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    #[must_use]
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &i in indices {
            data.extend_from_slice(self.row_slice(i));
        }
        Self {
            data,
            rows: indices.len(),
            cols: self.cols,
        }
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f32> {
    /// Column-wise arithmetic mean (one value per column).
    ///
    /// Returns `None` for a matrix with no rows.
    #[must_use]
    pub fn mean_rows(&self) -> Option<Vector<f32>> {
        if self.rows == 0 {
            return None;
        }
        let mut sums = vec![0.0_f64; self.cols];
        for row in self.rows_iter() {
            for (sum, &x) in sums.iter_mut().zip(row) {
                *sum += f64::from(x);
            }
        }
        let n = self.rows as f64;
        Some(Vector::from_vec(
            sums.into_iter().map(|s| (s / n) as f32).collect(),
        ))
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
