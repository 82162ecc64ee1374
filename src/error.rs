//! Error types for the QUBO data model and the solvers.
//!
//! Every failure carries a stable [`ErrorKind`] for programmatic matching, the message is
//! derived from the variant and its payload.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QuboError>;

/// Operations a solver backend may refuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedOperation {
    /// The hardware sampler only accepts problems of up to four variables.
    HardwareSamplingLargerThanFour,
    /// Minor embedding onto a hardware graph is not implemented.
    MinorEmbedding,
    /// The search space of the problem does not fit in the address space.
    ProblemTooLarge,
}

impl UnsupportedOperation {
    pub const fn message(self) -> &'static str {
        match self {
            Self::HardwareSamplingLargerThanFour => {
                "Using the hardware sampler on problem sizes larger than 4 is currently not supported."
            }
            Self::MinorEmbedding => "Creating a minor embedding is not yet implemented.",
            Self::ProblemTooLarge => {
                "The number of possible combinations of this problem cannot be enumerated."
            }
        }
    }
}

/// The stable identifier of an error, independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IndexOutOfRange,
    OrderingViolation,
    NotBinary,
    ShapeViolation,
    LowerTriangleViolation,
    RecordLengthExceedsCombinations,
    RecordFull,
    InsufficientCapacity,
    Unsupported,
}

impl ErrorKind {
    /// Identifier that stays fixed across releases.
    pub const fn id(self) -> &'static str {
        match self {
            Self::IndexOutOfRange => "index_out_of_range",
            Self::OrderingViolation => "ordering_violation",
            Self::NotBinary => "not_binary",
            Self::ShapeViolation => "shape_violation",
            Self::LowerTriangleViolation => "lower_triangle_violation",
            Self::RecordLengthExceedsCombinations => "record_length_exceeds_combinations",
            Self::RecordFull => "record_full",
            Self::InsufficientCapacity => "insufficient_capacity",
            Self::Unsupported => "unsupported_operation",
        }
    }
}

/// Errors raised by the QUBO types and solvers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuboError {
    #[error("Parameter {param} was out of range.")]
    IndexOutOfRange { param: &'static str },

    #[error("Pair variable index must be higher or equal to the index of the primary variable (got {pair} < {primary}).")]
    PairIndexBelowPrimary { primary: usize, pair: usize },

    #[error("Value '{param}' for this operation must be binary.")]
    NotBinary { param: String },

    #[error("Entries can be either 0 or 1 (binary).")]
    EntryNotBinary { index: usize },

    #[error("List for Hamiltonian must resemble a square matrix (expected {expected} columns, got {actual}).")]
    NotSquare { expected: usize, actual: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual}.")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Entries in the lower triangle of the list must be zero (row {row}, column {column}).")]
    LowerTriangleEntryNotZero { row: usize, column: usize },

    #[error("Requested record length {requested} cannot exceed the number of possible combinations {combinations}.")]
    RecordLengthExceedsCombinations { requested: usize, combinations: usize },

    #[error("Capacity of the record is exhausted (capacity {capacity}).")]
    RecordFull { capacity: usize },

    #[error("Capacity of the record is not large enough to add the supplied number of entries ({len} + {incoming} > {capacity}).")]
    InsufficientCapacity {
        capacity: usize,
        len: usize,
        incoming: usize,
    },

    #[error("{}", .0.message())]
    Unsupported(UnsupportedOperation),
}

impl QuboError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::PairIndexBelowPrimary { .. } => ErrorKind::OrderingViolation,
            Self::NotBinary { .. } | Self::EntryNotBinary { .. } => ErrorKind::NotBinary,
            Self::NotSquare { .. } | Self::DimensionMismatch { .. } => ErrorKind::ShapeViolation,
            Self::LowerTriangleEntryNotZero { .. } => ErrorKind::LowerTriangleViolation,
            Self::RecordLengthExceedsCombinations { .. } => {
                ErrorKind::RecordLengthExceedsCombinations
            }
            Self::RecordFull { .. } => ErrorKind::RecordFull,
            Self::InsufficientCapacity { .. } => ErrorKind::InsufficientCapacity,
            Self::Unsupported(_) => ErrorKind::Unsupported,
        }
    }

    pub fn not_binary(param: impl Into<String>) -> Self {
        Self::NotBinary {
            param: param.into(),
        }
    }
}
