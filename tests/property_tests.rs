//! Property-based tests for qubo-enum using proptest
//!
//! Checks the enumeration, conversion, validation and ranking guarantees over random inputs.

use std::collections::HashSet;

use proptest::prelude::*;
use qubo_enum::{
    BinaryVector, ErrorKind, Hamiltonian, Qubo, SolutionRecord, SolutionRecordEntry, Simulator,
    Solver,
};

const MAX_SIZE: usize = 6;

/// Upper-triangular list of size `n` built from `values`, roughly half of the entries zero.
fn upper_triangular(n: usize, values: &[i32]) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    let v = values[i * MAX_SIZE + j];
                    if j < i || v % 2 == 0 {
                        0.0
                    } else {
                        f64::from(v)
                    }
                })
                .collect()
        })
        .collect()
}

fn values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-9i32..10, MAX_SIZE * MAX_SIZE)
}

// ============================================================================
// Enumeration
// ============================================================================

proptest! {
    /// Property: incrementing from zero visits 2^n distinct patterns, then wraps to zero
    #[test]
    fn increment_visits_every_pattern(n in 0usize..10) {
        let mut x = BinaryVector::zeros(n);
        let mut seen = HashSet::new();

        loop {
            prop_assert!(seen.insert(x.to_vec()), "pattern {} visited twice", x);
            if x.increment() {
                break;
            }
        }

        prop_assert_eq!(seen.len(), 1usize << n);
        prop_assert!(x.vector().iter().all(|&bit| bit == 0));
    }
}

// ============================================================================
// Data model
// ============================================================================

proptest! {
    /// Property: the sparse form reconstructs the same dense matrix
    #[test]
    fn hamiltonian_qubo_round_trip(n in 0usize..=MAX_SIZE, values in values()) {
        let h = Hamiltonian::from_list(upper_triangular(n, &values)).unwrap();
        let p = Qubo::from_hamiltonian(&h);

        prop_assert!(p.iter().all(|(_, value)| value != 0.0));
        prop_assert_eq!(Hamiltonian::from_qubo(&p), h);
    }

    /// Property: add_entry rejects bad indices and leaves the problem untouched
    #[test]
    fn add_entry_validation(n in 1usize..8, i in 0usize..12, j in 0usize..12) {
        let mut p = Qubo::new(n);
        let result = p.add_entry(i, j, 1.0);

        if i >= n || j >= n {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::IndexOutOfRange);
            prop_assert!(p.is_empty());
        } else if j < i {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::OrderingViolation);
            prop_assert!(p.is_empty());
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(p.get_entry(i, j), Some(1.0));
        }
    }
}

// ============================================================================
// Simulator
// ============================================================================

proptest! {
    /// Property: output is strictly ascending, deduplicated and bounded by the record length
    #[test]
    fn simulator_ranks_distinct_energies(
        n in 0usize..=MAX_SIZE,
        values in values(),
        fraction in 0.0f64..=1.0
    ) {
        let p = Qubo::from_hamiltonian(&Hamiltonian::from_list(upper_triangular(n, &values)).unwrap());
        let combinations = 1usize << n;
        let record_length = (fraction * combinations as f64) as usize;

        let record = Simulator::default().sample_qubo(&p, Some(record_length)).unwrap();
        prop_assert!(record.len() <= record_length);

        let energies: Vec<f64> = record.entries().map(|entry| entry.energy).collect();
        for pair in energies.windows(2) {
            prop_assert!(pair[0] < pair[1], "energies not strictly ascending: {:?}", energies);
        }

        let full = Simulator::default().sample_qubo(&p, None).unwrap();
        prop_assert!(full.len() <= combinations);
        prop_assert_eq!(full.capacity(), combinations);

        // a bounded record is a prefix of the unbounded one
        for (bounded, unbounded) in record.entries().zip(full.entries()) {
            prop_assert_eq!(bounded, unbounded);
        }
    }

    /// Property: asking for more entries than assignments always fails
    #[test]
    fn simulator_rejects_oversized_records(n in 0usize..=MAX_SIZE, extra in 1usize..10) {
        let p = Qubo::new(n);
        let err = Simulator::default().sample_qubo(&p, Some((1usize << n) + extra)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::RecordLengthExceedsCombinations);
    }
}

// ============================================================================
// SolutionRecord
// ============================================================================

proptest! {
    /// Property: failed insertions never change the record
    #[test]
    fn record_capacity_is_enforced(capacity in 0usize..6, incoming in 0usize..10) {
        let x = BinaryVector::zeros(2);
        let entries: Vec<SolutionRecordEntry> = (0..incoming)
            .map(|k| SolutionRecordEntry::new(k as f64, x.clone(), 1))
            .collect();

        let mut record = SolutionRecord::new(capacity);
        match record.add_all_entries(entries) {
            Ok(full) => {
                prop_assert!(incoming <= capacity);
                prop_assert_eq!(full, incoming == capacity);
                prop_assert_eq!(record.len(), incoming);
            }
            Err(err) => {
                prop_assert!(incoming > capacity);
                prop_assert_eq!(err.kind(), ErrorKind::InsufficientCapacity);
                prop_assert!(record.is_empty());
            }
        }

        while !record.is_full() {
            record.add_entry(0.0, &x, 1).unwrap();
        }
        let err = record.add_entry(0.0, &x, 1).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::RecordFull);
        prop_assert_eq!(record.len(), capacity);
    }
}
