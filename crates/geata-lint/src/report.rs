//! Validation Report
//!
//! Accumulates errors and warnings in encounter order. The report is the only
//! place lint findings live; nothing is propagated as a Rust error past the
//! validation pass.

/// Accumulated findings for one tool directory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a blocking finding
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Record an advisory finding; never affects the exit code
    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Passed iff no errors were recorded (warnings are allowed)
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Print the report: errors and warnings to stderr, the success line to
    /// stdout. Errors always precede warnings in the failure case.
    pub fn print(&self, tool_dir: &str) {
        if !self.errors.is_empty() {
            eprintln!("\nValidation failed for {}:\n", tool_dir);
            for error in &self.errors {
                eprintln!("  - {}", error);
            }
            if !self.warnings.is_empty() {
                eprintln!("\nWarnings:\n");
                for warning in &self.warnings {
                    eprintln!("  - {}", warning);
                }
            }
            return;
        }

        if !self.warnings.is_empty() {
            eprintln!("\nWarnings for {}:\n", tool_dir);
            for warning in &self.warnings {
                eprintln!("  - {}", warning);
            }
        }

        println!("\n{} passed validation\n", tool_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passed_ignores_warnings() {
        let mut report = Report::new();
        assert!(report.passed());

        report.warning("something advisory");
        assert!(report.passed());

        report.error("something blocking");
        assert!(!report.passed());
    }

    #[test]
    fn test_encounter_order_is_kept() {
        let mut report = Report::new();
        report.error("first");
        report.warning("advisory");
        report.error("second");
        assert_eq!(report.errors(), ["first", "second"]);
        assert_eq!(report.warnings(), ["advisory"]);
    }
}
