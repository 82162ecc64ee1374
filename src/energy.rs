use crate::binary_vector::BinaryVector;
use crate::error::{QuboError, Result};
use crate::hamiltonian::Hamiltonian;

pub struct EnergyCalculator;

impl EnergyCalculator {
    /// Computes x^T H x as two nested sums over the matrix.
    ///
    /// Only rows and columns where x is 1 contribute, and the lower triangle is zero, so this is
    /// the sum of H[i][j] over all i <= j with x_i = x_j = 1.
    ///
    /// # Errors
    ///
    /// The vector must have one bit per row of the matrix.
    ///
    /// Example:
    /// ```rust
    /// use qubo_enum::binary_vector::BinaryVector;
    /// use qubo_enum::energy::EnergyCalculator;
    /// use qubo_enum::hamiltonian::Hamiltonian;
    ///
    /// let h = Hamiltonian::from_list(vec![vec![1.0, 2.0], vec![0.0, 3.0]]).unwrap();
    /// let x = BinaryVector::from_list(&[1, 1]).unwrap();
    /// assert_eq!(EnergyCalculator::energy(&h, &x).unwrap(), 6.0);
    /// ```
    pub fn energy(hamiltonian: &Hamiltonian, solution_vector: &BinaryVector) -> Result<f64> {
        let n = hamiltonian.dimension();
        if solution_vector.len() != n {
            return Err(QuboError::DimensionMismatch {
                expected: n,
                actual: solution_vector.len(),
            });
        }

        let h = hamiltonian.matrix();
        let x = solution_vector.vector();

        let mut energy = 0.0;
        for i in 0..n {
            let x_i = x[i] as f64;
            let mut row_sum = 0.0;
            for j in 0..n {
                row_sum += h[[i, j]] * x[j] as f64;
            }
            energy += x_i * row_sum;
        }

        Ok(energy)
    }
}
