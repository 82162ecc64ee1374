/// Options for the solvers at run time
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverOptions {
    pub verbose: usize,
}

impl SolverOptions {
    pub const fn new() -> Self {
        Self { verbose: 0 }
    }

    pub fn set_verbose(&mut self, verbose: Option<usize>) {
        if let Some(level) = verbose {
            self.verbose = level;
        }
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self::new()
    }
}
