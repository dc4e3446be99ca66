use crate::conf::types::SanitizerConfig;
use crate::conf::validation::report::ValidationReport;

#[derive(Debug)]
pub struct ValidatedConfig {
    pub config: SanitizerConfig,
    /// Warnings only; a report with errors never produces a config.
    pub report: ValidationReport,
}
