//! Output formatter trait

use congress_domain::{OutputFormat, SimulationResult};

/// Trait for formatting simulation results
pub trait OutputFormatter {
    /// Every round with all speeches
    fn format_full(&self, result: &SimulationResult) -> String;

    /// Roll call per round and the verdict
    fn format_summary(&self, result: &SimulationResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &SimulationResult) -> String;

    /// Dispatch on the selected format
    fn render(&self, result: &SimulationResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format_full(result),
            OutputFormat::Summary => self.format_summary(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
