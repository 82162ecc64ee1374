use crate::error::{QuboError, Result, UnsupportedOperation};
use crate::qubo::Qubo;
use crate::samplers::hardware::HardwareSampler;
use crate::samplers::simulator::Simulator;
use crate::solution_record::SolutionRecord;
use crate::solver_options::SolverOptions;

/// Common contract of every backend that can sample a QUBO.
pub trait Solver: Send + Sync {
    fn solver_type(&self) -> SolverType;

    /// Returns up to `record_length` solutions ranked by ascending energy. When `record_length`
    /// is `None` the record is sized for the whole search space.
    fn sample_qubo(&self, qubo: &Qubo, record_length: Option<usize>) -> Result<SolutionRecord>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverType {
    Simulator,
    HardwareSampler,
}

pub fn get_solver(solver_type: &SolverType, options: SolverOptions) -> Box<dyn Solver> {
    match solver_type {
        SolverType::Simulator => Box::new(Simulator::new(options)),
        SolverType::HardwareSampler => Box::new(HardwareSampler::new(options)),
    }
}

/// 2^num_variables, the size of the search space.
///
/// # Errors
///
/// Problems whose search space does not fit in a `usize` cannot be enumerated.
pub fn combinations(num_variables: usize) -> Result<usize> {
    u32::try_from(num_variables)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .ok_or(QuboError::Unsupported(UnsupportedOperation::ProblemTooLarge))
}

/// Checks the requested record length against the search space, returns
/// `(combinations, record_length)` with the default applied.
pub fn resolve_record_length(
    num_variables: usize,
    record_length: Option<usize>,
) -> Result<(usize, usize)> {
    let combinations = combinations(num_variables)?;
    let record_length = record_length.unwrap_or(combinations);

    if record_length > combinations {
        return Err(QuboError::RecordLengthExceedsCombinations {
            requested: record_length,
            combinations,
        });
    }

    Ok((combinations, record_length))
}
