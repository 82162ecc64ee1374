use crate::solution_record::SolutionRecord;
use std::time::Instant;

/// Console output of a solve
///
/// It has varying levels of output, where 0 means nothing is displayed to the screen, and each
/// additional level includes everything previous
///
/// 0 - Nothing
/// 1 - Header and Finish
/// 2 - Each newly found energy level
///
pub struct SolverOutputLogger {
    pub output_level: usize,
}

impl SolverOutputLogger {
    pub const fn new(level: usize) -> Self {
        Self {
            output_level: level,
        }
    }

    pub fn output_header(&self, num_variables: usize, combinations: usize, record_length: usize) {
        print_lines(&self.header_lines(num_variables, combinations, record_length));
    }

    pub fn output_new_energy(&self, energy: f64, distinct_energies: usize) {
        print_lines(&self.new_energy_lines(energy, distinct_energies));
    }

    pub fn generate_exit_line(
        &self,
        record: &SolutionRecord,
        distinct_energies: usize,
        time_start: Instant,
    ) {
        let time_passed = time_start.elapsed().as_secs_f64();
        print_lines(&self.exit_lines(record, distinct_energies, time_passed));
    }

    /// Lines of the header, empty below level 1.
    pub fn header_lines(
        &self,
        num_variables: usize,
        combinations: usize,
        record_length: usize,
    ) -> Vec<String> {
        if self.output_level < 1 {
            return Vec::new();
        }

        let version_number = env!("CARGO_PKG_VERSION");

        vec![
            "qubo-enum: Exhaustive Enumeration Solver for QUBO".to_string(),
            format!("Version number {version_number}"),
            format!("Problem size: {num_variables}"),
            format!("Combinations: {combinations}"),
            format!("Record length: {record_length}"),
            SEPARATOR.to_string(),
        ]
    }

    /// Line announcing a new energy level, empty below level 2.
    pub fn new_energy_lines(&self, energy: f64, distinct_energies: usize) -> Vec<String> {
        if self.output_level < 2 {
            return Vec::new();
        }

        vec![format!("{distinct_energies} | {energy}")]
    }

    /// Lines of the exit block, empty below level 1.
    pub fn exit_lines(
        &self,
        record: &SolutionRecord,
        distinct_energies: usize,
        time_passed: f64,
    ) -> Vec<String> {
        if self.output_level < 1 {
            return Vec::new();
        }

        let best = record
            .entries()
            .next()
            .map_or_else(|| "none".to_string(), |entry| entry.to_string());

        vec![
            SEPARATOR.to_string(),
            "Enumeration Finished".to_string(),
            format!("Distinct Energies: {distinct_energies}"),
            format!("Entries Recorded: {}", record.len()),
            format!("Best Solution: {best}"),
            format!("Time to Solve: {time_passed}"),
            SEPARATOR.to_string(),
        ]
    }
}

const SEPARATOR: &str = "------------------------------------------------------";

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
