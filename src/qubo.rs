use std::collections::HashMap;
use std::fmt;

use smolprng::Algorithm;
use smolprng::PRNG;
use sprs::{CsMat, TriMat};

use crate::error::{QuboError, Result};
use crate::hamiltonian::Hamiltonian;

/// Sparse upper-triangular QUBO, the coefficient of x_i x_j is stored at (i, j) with i <= j.
#[derive(Clone, Debug, PartialEq)]
pub struct Qubo {
    size: usize,
    entries: HashMap<(usize, usize), f64>,
}

impl Qubo {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            entries: HashMap::new(),
        }
    }

    /// Reads back the nonzero upper triangle of a Hamiltonian.
    pub fn from_hamiltonian(hamiltonian: &Hamiltonian) -> Self {
        let mut qubo = Self::new(hamiltonian.dimension());

        for ((i, j), &value) in hamiltonian.matrix().indexed_iter() {
            if i <= j && value != 0.0 {
                qubo.entries.insert((i, j), value);
            }
        }

        qubo
    }

    /// Builds a QUBO from a square sparse matrix.
    ///
    /// Entries below the diagonal are added onto their mirrored position, which leaves the
    /// energy of every assignment unchanged.
    ///
    /// Example:
    /// ```rust
    /// use qubo_enum::qubo::Qubo;
    /// use sprs::TriMat;
    ///
    /// let mut q = TriMat::new((2, 2));
    /// q.add_triplet(0, 1, 1.0);
    /// q.add_triplet(1, 0, 2.0);
    /// let p = Qubo::from_sparse(&q.to_csr()).unwrap();
    /// assert_eq!(p.get_entry(0, 1), Some(3.0));
    /// ```
    pub fn from_sparse(q: &CsMat<f64>) -> Result<Self> {
        if q.rows() != q.cols() {
            return Err(QuboError::NotSquare {
                expected: q.rows(),
                actual: q.cols(),
            });
        }

        let mut qubo = Self::new(q.rows());
        for (&value, (i, j)) in q.iter() {
            if value == 0.0 {
                continue;
            }
            let key = (i.min(j), i.max(j));
            *qubo.entries.entry(key).or_insert(0.0) += value;
        }

        // mirrored entries may cancel out
        qubo.entries.retain(|_, value| *value != 0.0);

        Ok(qubo)
    }

    /// Random problem with coefficients in [-0.5, 0.5), each pair present with probability `sparsity`.
    pub fn make_random_qubo<T: Algorithm>(num_x: usize, prng: &mut PRNG<T>, sparsity: f64) -> Self {
        let mut qubo = Self::new(num_x);
        for i in 0..num_x {
            for j in i..num_x {
                if prng.gen_f64() < sparsity {
                    qubo.entries.insert((i, j), prng.gen_f64() - 0.5f64);
                }
            }
        }

        qubo
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored coefficients.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets the coefficient of the pair (variable_index, variable_pair_index).
    ///
    /// # Errors
    ///
    /// Either index at or beyond the size is out of range, and the pair index may not be below the
    /// primary index. Nothing is written on error.
    pub fn add_entry(
        &mut self,
        variable_index: usize,
        variable_pair_index: usize,
        value: f64,
    ) -> Result<()> {
        if variable_index >= self.size {
            return Err(QuboError::IndexOutOfRange {
                param: "variable_index",
            });
        }
        if variable_pair_index >= self.size {
            return Err(QuboError::IndexOutOfRange {
                param: "variable_pair_index",
            });
        }
        if variable_pair_index < variable_index {
            return Err(QuboError::PairIndexBelowPrimary {
                primary: variable_index,
                pair: variable_pair_index,
            });
        }

        self.entries
            .insert((variable_index, variable_pair_index), value);
        Ok(())
    }

    /// The stored coefficient, `None` if the pair was never set. Indices are not range checked.
    pub fn get_entry(&self, variable_index: usize, variable_pair_index: usize) -> Option<f64> {
        self.entries
            .get(&(variable_index, variable_pair_index))
            .copied()
    }

    /// Stored coefficients in ascending (i, j) order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), f64)> {
        let mut pairs: Vec<_> = self.entries.iter().map(|(&k, &v)| (k, v)).collect();
        pairs.sort_unstable_by_key(|&(k, _)| k);
        pairs.into_iter()
    }

    /// The upper-triangular CSR form of the problem.
    pub fn to_sparse(&self) -> CsMat<f64> {
        let mut q = TriMat::<f64>::new((self.size, self.size));
        for ((i, j), value) in self.iter() {
            q.add_triplet(i, j, value);
        }
        q.to_csr()
    }
}

impl fmt::Display for Qubo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[qubits: {}] {{", self.size)?;
        for ((i, j), value) in self.iter() {
            write!(f, "({i},{j}): {value}, ")?;
        }
        write!(f, "}}")
    }
}
