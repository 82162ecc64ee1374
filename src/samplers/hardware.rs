//! Placeholder for a sampler backed by annealing hardware.
//!
//! It validates its input the same way the simulator does and then refuses the problem, so callers
//! can already program against the [`Solver`] contract.

use crate::error::{QuboError, Result, UnsupportedOperation};
use crate::qubo::Qubo;
use crate::solution_record::SolutionRecord;
use crate::solver::{resolve_record_length, Solver, SolverType};
use crate::solver_options::SolverOptions;

/// Largest problem the hardware sampler accepts without a minor embedding.
pub const MAX_HARDWARE_VARIABLES: usize = 4;

pub struct HardwareSampler {
    pub options: SolverOptions,
}

impl HardwareSampler {
    pub const fn new(options: SolverOptions) -> Self {
        Self { options }
    }
}

impl Solver for HardwareSampler {
    fn solver_type(&self) -> SolverType {
        SolverType::HardwareSampler
    }

    fn sample_qubo(&self, qubo: &Qubo, record_length: Option<usize>) -> Result<SolutionRecord> {
        resolve_record_length(qubo.size(), record_length)?;

        if qubo.size() > MAX_HARDWARE_VARIABLES {
            return Err(QuboError::Unsupported(
                UnsupportedOperation::HardwareSamplingLargerThanFour,
            ));
        }

        Err(QuboError::Unsupported(UnsupportedOperation::MinorEmbedding))
    }
}
