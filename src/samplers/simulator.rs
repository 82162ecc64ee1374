//! Exact solver that scores every assignment of the problem.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::time::Instant;

use rayon::prelude::*;

use crate::binary_vector::BinaryVector;
use crate::energy::EnergyCalculator;
use crate::error::Result;
use crate::hamiltonian::Hamiltonian;
use crate::qubo::Qubo;
use crate::solution_record::SolutionRecord;
use crate::solver::{resolve_record_length, Solver, SolverType};
use crate::solver_logger::SolverOutputLogger;
use crate::solver_options::SolverOptions;

pub struct Simulator {
    pub options: SolverOptions,
    solver_logger: SolverOutputLogger,
}

impl Simulator {
    pub fn new(options: SolverOptions) -> Self {
        let output_level = options.verbose;
        Self {
            options,
            solver_logger: SolverOutputLogger::new(output_level),
        }
    }

    /// Solves independent problems in parallel, one result per problem in input order.
    pub fn sample_qubos(
        &self,
        qubos: &[Qubo],
        record_length: Option<usize>,
    ) -> Vec<Result<SolutionRecord>> {
        qubos
            .par_iter()
            .map(|qubo| self.sample_qubo(qubo, record_length))
            .collect()
    }

    /// Walks all 2^n assignments and keeps the first assignment found for every distinct energy,
    /// sorted by ascending energy.
    fn enumerate(&self, hamiltonian: &Hamiltonian) -> Result<Vec<(f64, BinaryVector)>> {
        let mut ordered_solutions = HashMap::new();
        let mut solution_vector = BinaryVector::zeros(hamiltonian.dimension());

        loop {
            let energy = EnergyCalculator::energy(hamiltonian, &solution_vector)?;
            if let Entry::Vacant(slot) = ordered_solutions.entry(energy_key(energy)) {
                slot.insert((energy, solution_vector.deep_copy()));
                self.solver_logger
                    .output_new_energy(energy, ordered_solutions.len());
            }

            if solution_vector.increment() {
                break;
            }
        }

        let mut sorted_solutions: Vec<(f64, BinaryVector)> =
            ordered_solutions.into_values().collect();
        sorted_solutions.sort_by(|a, b| a.0.total_cmp(&b.0));

        Ok(sorted_solutions)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(SolverOptions::new())
    }
}

impl Solver for Simulator {
    fn solver_type(&self) -> SolverType {
        SolverType::Simulator
    }

    /// Exhaustive enumeration of the problem.
    ///
    /// Degenerate assignments sharing an energy are reported once, with an occurrence count of 1.
    ///
    /// Example:
    /// ```rust
    /// use qubo_enum::qubo::Qubo;
    /// use qubo_enum::samplers::simulator::Simulator;
    /// use qubo_enum::solver::Solver;
    ///
    /// let mut p = Qubo::new(2);
    /// p.add_entry(0, 0, -1.0).unwrap();
    /// p.add_entry(0, 1, 2.0).unwrap();
    ///
    /// let record = Simulator::default().sample_qubo(&p, None).unwrap();
    /// let best = record.entries().next().unwrap();
    /// assert_eq!(best.energy, -1.0);
    /// assert_eq!(best.solution_vector.to_vec(), vec![1, 0]);
    /// ```
    fn sample_qubo(&self, qubo: &Qubo, record_length: Option<usize>) -> Result<SolutionRecord> {
        let (combinations, record_length) = resolve_record_length(qubo.size(), record_length)?;

        let time_start = Instant::now();
        self.solver_logger
            .output_header(qubo.size(), combinations, record_length);

        let hamiltonian = Hamiltonian::from_qubo(qubo);
        let sorted_solutions = self.enumerate(&hamiltonian)?;

        let mut record = SolutionRecord::new(record_length);
        if !record.is_full() {
            for (energy, vector) in &sorted_solutions {
                if record.add_entry(*energy, vector, 1)? {
                    break;
                }
            }
        }

        self.solver_logger
            .generate_exit_line(&record, sorted_solutions.len(), time_start);

        Ok(record)
    }
}

/// Hash key under which two energies collide exactly when they compare equal, with every NaN
/// treated as the same value.
fn energy_key(energy: f64) -> u64 {
    if energy == 0.0 {
        0.0f64.to_bits()
    } else if energy.is_nan() {
        f64::NAN.to_bits()
    } else {
        energy.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, QuboError};
    use smolprng::{JsfLarge, PRNG};

    fn triangle_qubo() -> Qubo {
        let mut p = Qubo::new(3);
        p.add_entry(0, 1, 1.0).unwrap();
        p.add_entry(1, 2, 1.0).unwrap();
        p.add_entry(0, 2, 1.0).unwrap();
        p
    }

    fn assert_ranked(record: &SolutionRecord) {
        let energies: Vec<f64> = record.entries().map(|entry| entry.energy).collect();
        for pair in energies.windows(2) {
            assert!(pair[0] < pair[1], "{energies:?} is not strictly ascending");
        }
    }

    #[test]
    fn test_sample_qubo() {
        let record = Simulator::default()
            .sample_qubo(&triangle_qubo(), Some(8))
            .unwrap();

        // energies 0, 1 and 3 are the only ones reachable
        let energies: Vec<f64> = record.entries().map(|entry| entry.energy).collect();
        assert_eq!(energies, vec![0.0, 1.0, 3.0]);
        assert_eq!(record.capacity(), 8);
        assert_ranked(&record);
    }

    #[test]
    fn test_first_assignment_represents_energy() {
        let record = Simulator::default()
            .sample_qubo(&triangle_qubo(), None)
            .unwrap();
        let vectors: Vec<Vec<usize>> = record
            .entries()
            .map(|entry| entry.solution_vector.to_vec())
            .collect();

        assert_eq!(vectors, vec![vec![0, 0, 0], vec![0, 1, 1], vec![1, 1, 1]]);
        assert!(record.entries().all(|entry| entry.num_occurrences == 1));
    }

    #[test]
    fn test_record_length_too_large() {
        let p = Qubo::new(3);
        let err = Simulator::default().sample_qubo(&p, Some(10)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RecordLengthExceedsCombinations);
        assert_eq!(
            err,
            QuboError::RecordLengthExceedsCombinations {
                requested: 10,
                combinations: 8
            }
        );
    }

    #[test]
    fn test_record_length_truncates() {
        let mut p = Qubo::new(3);
        p.add_entry(0, 0, 1.0).unwrap();
        p.add_entry(1, 1, 2.0).unwrap();
        p.add_entry(2, 2, 4.0).unwrap();

        // every assignment has its own energy 0..=7
        let record = Simulator::default().sample_qubo(&p, Some(3)).unwrap();
        let energies: Vec<f64> = record.entries().map(|entry| entry.energy).collect();
        assert_eq!(energies, vec![0.0, 1.0, 2.0]);
        assert!(record.is_full());
    }

    #[test]
    fn test_unique_energies() {
        let mut p = Qubo::new(2);
        p.add_entry(0, 1, 1.0).unwrap();

        let record = Simulator::default().sample_qubo(&p, None).unwrap();
        assert_eq!(record.capacity(), 4);
        assert_eq!(record.len(), 2);
        assert_ranked(&record);
    }

    #[test]
    fn test_empty_problem() {
        let p = Qubo::new(0);
        let record = Simulator::default().sample_qubo(&p, None).unwrap();

        assert_eq!(record.len(), 1);
        let entry = record.entries().next().unwrap();
        assert_eq!(entry.energy, 0.0);
        assert!(entry.solution_vector.is_empty());
    }

    #[test]
    fn test_zero_record_length() {
        let record = Simulator::default()
            .sample_qubo(&triangle_qubo(), Some(0))
            .unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_negative_energies_rank_first() {
        let mut p = Qubo::new(3);
        p.add_entry(0, 0, -2.0).unwrap();
        p.add_entry(1, 1, 3.0).unwrap();
        p.add_entry(0, 2, -1.5).unwrap();
        p.add_entry(2, 2, 0.5).unwrap();

        let record = Simulator::default().sample_qubo(&p, Some(1)).unwrap();
        let best = record.entries().next().unwrap();
        assert_eq!(best.energy, -3.0);
        assert_eq!(best.solution_vector.to_vec(), vec![1, 0, 1]);
    }

    #[test]
    fn test_sample_qubos_matches_single_calls() {
        let mut prng = PRNG {
            generator: JsfLarge::default(),
        };
        let qubos: Vec<Qubo> = (0..6)
            .map(|n| Qubo::make_random_qubo(n, &mut prng, 0.5))
            .collect();
        let simulator = Simulator::default();

        let batch = simulator.sample_qubos(&qubos, None);
        assert_eq!(batch.len(), qubos.len());
        for (qubo, result) in qubos.iter().zip(batch) {
            assert_eq!(result, simulator.sample_qubo(qubo, None));
        }
    }

    #[test]
    fn test_output_level_does_not_change_record() {
        let verbose = Simulator::new(SolverOptions { verbose: 2 });
        let silent = Simulator::new(SolverOptions { verbose: 0 });

        // output level never changes the result
        let record = verbose.sample_qubo(&triangle_qubo(), None).unwrap();
        assert_eq!(record, silent.sample_qubo(&triangle_qubo(), None).unwrap());
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_energy_key() {
        assert_eq!(energy_key(0.0), energy_key(-0.0));
        assert_eq!(energy_key(f64::NAN), energy_key(-f64::NAN));
        assert_ne!(energy_key(1.0), energy_key(1.0 + f64::EPSILON));
    }
}
