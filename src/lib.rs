//! # qubo-enum
//!
//! Exact solving of small QUBO problems by scoring every binary assignment.
//!
//! ```rust
//! use qubo_enum::{Qubo, Simulator, Solver};
//!
//! let mut p = Qubo::new(3);
//! p.add_entry(0, 0, -1.0).unwrap();
//! p.add_entry(0, 1, 2.0).unwrap();
//! p.add_entry(2, 2, -0.5).unwrap();
//!
//! let record = Simulator::default().sample_qubo(&p, Some(2)).unwrap();
//! for entry in &record {
//!     println!("{entry}");
//! }
//! ```

pub mod binary_vector;
pub mod energy;
pub mod error;
pub mod hamiltonian;
pub mod numeric_trait;
pub mod qubo;
pub mod samplers;
pub mod solution_record;
pub mod solver;
pub mod solver_logger;
pub mod solver_options;

pub use binary_vector::BinaryVector;
pub use energy::EnergyCalculator;
pub use error::{ErrorKind, QuboError, Result};
pub use hamiltonian::Hamiltonian;
pub use qubo::Qubo;
pub use samplers::hardware::HardwareSampler;
pub use samplers::simulator::Simulator;
pub use solution_record::{SolutionRecord, SolutionRecordEntry};
pub use solver::{get_solver, Solver, SolverType};
pub use solver_options::SolverOptions;
