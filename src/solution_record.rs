//! Capacity-bounded result container filled by the solvers.

use std::fmt;

use crate::binary_vector::BinaryVector;
use crate::error::{QuboError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct SolutionRecordEntry {
    pub energy: f64,
    pub solution_vector: BinaryVector,
    pub num_occurrences: usize,
}

impl SolutionRecordEntry {
    pub const fn new(energy: f64, solution_vector: BinaryVector, num_occurrences: usize) -> Self {
        Self {
            energy,
            solution_vector,
            num_occurrences,
        }
    }
}

impl fmt::Display for SolutionRecordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\tx{}",
            self.energy, self.solution_vector, self.num_occurrences
        )
    }
}

/// Entries in insertion order, never more than `capacity` of them.
#[derive(Clone, Debug, PartialEq)]
pub struct SolutionRecord {
    capacity: usize,
    entries: Vec<SolutionRecordEntry>,
}

impl SolutionRecord {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// Appends a copy of `solution_vector`, returns whether the record is now full.
    pub fn add_entry(
        &mut self,
        energy: f64,
        solution_vector: &BinaryVector,
        num_occurrences: usize,
    ) -> Result<bool> {
        if self.is_full() {
            return Err(QuboError::RecordFull {
                capacity: self.capacity,
            });
        }

        self.entries.push(SolutionRecordEntry::new(
            energy,
            solution_vector.deep_copy(),
            num_occurrences,
        ));

        Ok(self.is_full())
    }

    /// Appends every entry or none of them, returns whether the record is now full.
    pub fn add_all_entries(&mut self, entries: Vec<SolutionRecordEntry>) -> Result<bool> {
        if entries.len() > self.capacity - self.entries.len() {
            return Err(QuboError::InsufficientCapacity {
                capacity: self.capacity,
                len: self.entries.len(),
                incoming: entries.len(),
            });
        }

        self.entries.extend(entries);

        Ok(self.is_full())
    }

    pub fn entries(&self) -> std::slice::Iter<'_, SolutionRecordEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a SolutionRecord {
    type Item = &'a SolutionRecordEntry;
    type IntoIter = std::slice::Iter<'a, SolutionRecordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl fmt::Display for SolutionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   energy\tsample\toccurrences")?;
        for (counter, entry) in self.entries.iter().enumerate() {
            writeln!(f, "({}) {entry}", counter + 1)?;
        }
        Ok(())
    }
}
