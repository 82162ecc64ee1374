//! Dense upper-triangular coefficient matrix of a QUBO.

use ndarray::Array2;

use crate::error::{QuboError, Result};
use crate::qubo::Qubo;

#[derive(Clone, Debug, PartialEq)]
pub struct Hamiltonian {
    matrix: Array2<f64>,
}

impl Hamiltonian {
    /// Builds the matrix from a nested list of rows.
    ///
    /// # Errors
    ///
    /// Every row must be as long as the list itself, and every entry left of the diagonal must be
    /// exactly zero.
    ///
    /// Example:
    /// ```rust
    /// use qubo_enum::hamiltonian::Hamiltonian;
    ///
    /// let h = Hamiltonian::from_list(vec![vec![0.0, 1.0], vec![0.0, 0.0]]).unwrap();
    /// assert_eq!(h.dimension(), 2);
    /// assert!(Hamiltonian::from_list(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).is_err());
    /// ```
    pub fn from_list(list: Vec<Vec<f64>>) -> Result<Self> {
        let size = list.len();

        for (row_index, row) in list.iter().enumerate() {
            if row.len() != size {
                return Err(QuboError::NotSquare {
                    expected: size,
                    actual: row.len(),
                });
            }
            if let Some(column) = row[..row_index].iter().position(|&x| x != 0.0) {
                return Err(QuboError::LowerTriangleEntryNotZero {
                    row: row_index,
                    column,
                });
            }
        }

        Ok(Self {
            matrix: Array2::from_shape_fn((size, size), |(i, j)| list[i][j]),
        })
    }

    /// Dense form of a QUBO, pairs that were never set are zero.
    pub fn from_qubo(qubo: &Qubo) -> Self {
        let size = qubo.size();
        let mut matrix = Array2::<f64>::zeros((size, size));

        for i in 0..size {
            for j in i..size {
                if let Some(value) = qubo.get_entry(i, j) {
                    matrix[[i, j]] = value;
                }
            }
        }

        Self { matrix }
    }

    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.matrix.outer_iter().map(|row| row.to_vec()).collect()
    }

    pub fn dimension(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn get_entry(&self, row_index: usize, column_index: usize) -> Result<f64> {
        if row_index >= self.matrix.nrows() {
            return Err(QuboError::IndexOutOfRange { param: "row_index" });
        }
        if column_index >= self.matrix.ncols() {
            return Err(QuboError::IndexOutOfRange {
                param: "column_index",
            });
        }

        Ok(self.matrix[[row_index, column_index]])
    }
}
