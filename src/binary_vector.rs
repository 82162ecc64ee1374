//! Candidate assignments of a QUBO, one bit per variable.
//!
//! Index 0 is the most significant bit, so repeated calls to [`BinaryVector::increment`]
//! starting from the all-zero vector walk the 2^n assignments in ascending binary order.

use std::fmt;

use ndarray::Array1;

use crate::error::{QuboError, Result};
use crate::numeric_trait::BaseVariable;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryVector {
    bits: Array1<usize>,
}

impl BinaryVector {
    /// Builds a vector from a list of values that must each be exactly 0 or 1.
    ///
    /// Example:
    /// ```rust
    /// use qubo_enum::binary_vector::BinaryVector;
    ///
    /// let x = BinaryVector::from_list(&[1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(x.to_vec(), vec![1, 0, 1]);
    /// assert!(BinaryVector::from_list(&[0, 2, 1]).is_err());
    /// ```
    pub fn from_list<T: BaseVariable>(list: &[T]) -> Result<Self> {
        if let Some(index) = list.iter().position(|x| !x.is_binary()) {
            return Err(QuboError::EntryNotBinary { index });
        }

        Ok(Self {
            bits: list.iter().map(BaseVariable::to_bit).collect(),
        })
    }

    /// A vector of `length` copies of `fill_value`.
    pub fn filled<T: BaseVariable>(length: usize, fill_value: T) -> Result<Self> {
        if !fill_value.is_binary() {
            return Err(QuboError::not_binary("fill_value"));
        }

        Ok(Self {
            bits: Array1::from_elem(length, fill_value.to_bit()),
        })
    }

    pub fn zeros(length: usize) -> Self {
        Self {
            bits: Array1::zeros(length),
        }
    }

    pub fn vector(&self) -> &Array1<usize> {
        &self.bits
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.to_vec()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Adds one to the vector read as a big-endian unsigned integer.
    ///
    /// The carry runs from the last index towards index 0. Returns `true` only when the carry
    /// moved past index 0, i.e. the vector was all ones and is now all zeros. The empty vector
    /// is both, so it always reports the wraparound.
    pub fn increment(&mut self) -> bool {
        let mut cursor = self.bits.len();

        while cursor > 0 {
            cursor -= 1;
            self.bits[cursor] ^= 1;

            // the flipped bit became 1, no carry
            if self.bits[cursor] == 1 {
                return false;
            }
        }

        true
    }

    pub fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl fmt::Display for BinaryVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, bit) in self.bits.iter().enumerate() {
            write!(f, "q{i}: {bit}, ")?;
        }
        write!(f, "]")
    }
}
