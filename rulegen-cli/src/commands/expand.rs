//! Default command: expand and merge both rule sources

use std::io::Write;

use serde::Serialize;
use tracing::info;

use rulegen_core::config::RulegenConfig;
use rulegen_expander::{ExpandPipeline, ExpandSummary, SourceSummary};

use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the expansion run described by `config`.
///
/// Reads the three-column source, then the normal source, and writes the
/// merged output once. Any failure aborts before the output is written.
pub fn execute(config: &RulegenConfig, writer: &OutputWriter) -> Result<(), CliError> {
    info!(
        three_column = %config.sources.three_column_rule_filepath.display(),
        normal = %config.sources.normal_rule_filepath.display(),
        output = %config.sources.output_rule_filepath.display(),
        sort_aggregates = config.expansion.sort_aggregates,
        "expanding rules"
    );

    let summary = ExpandPipeline::from_config(config).run()?;
    let report = ExpandReport::from(summary);

    writer.render(&report)?;

    Ok(())
}

/// Expansion run report.
#[derive(Serialize)]
pub struct ExpandReport {
    pub output: String,
    pub total_rules: usize,
    pub sources: Vec<SourceSummary>,
}

impl From<ExpandSummary> for ExpandReport {
    fn from(summary: ExpandSummary) -> Self {
        Self {
            output: summary.output_path,
            total_rules: summary.total_rules,
            sources: summary.sources,
        }
    }
}

impl Render for ExpandReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(
            w,
            "Rule Expansion ({} rules written)",
            self.total_rules.to_string().bold()
        )?;
        writeln!(w)?;
        writeln!(
            w,
            "{:<40} {:<14} {:>8} {:>8}",
            "Source", "Processor", "Input", "Output"
        )?;
        writeln!(w, "{}", "-".repeat(73))?;

        for s in &self.sources {
            writeln!(
                w,
                "{:<40} {:<14} {:>8} {:>8}",
                s.path, s.processor, s.input_rules, s.output_rules
            )?;
        }

        writeln!(w)?;
        writeln!(w, "Output: {}", self.output.green())?;

        Ok(())
    }
}
