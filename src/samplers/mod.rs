//! Concrete [`Solver`](crate::solver::Solver) backends.

pub mod hardware;
pub mod simulator;
