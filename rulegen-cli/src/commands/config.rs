//! `rulegen config` command handler

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use rulegen_core::config::RulegenConfig;

use crate::cli::{ConfigAction, ConfigArgs};
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `config` command.
///
/// `resolved` is the effective configuration (file + env + CLI overrides)
/// or the error produced while building it.
pub fn execute(
    args: ConfigArgs,
    config_path: Option<&Path>,
    resolved: Result<RulegenConfig, CliError>,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let source = describe_source(config_path);
    match args.action {
        ConfigAction::Validate => execute_validate(source, resolved, writer),
        ConfigAction::Show { section } => execute_show(source, resolved?, section, writer),
    }
}

fn describe_source(config_path: Option<&Path>) -> String {
    config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_owned())
}

/// Report whether the effective configuration is valid.
///
/// # Errors
///
/// Returns `CliError::Config` if validation failed.
fn execute_validate(
    source: String,
    resolved: Result<RulegenConfig, CliError>,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    info!(source = %source, "validating configuration");

    let report = match resolved {
        Ok(_) => ConfigValidationReport {
            source,
            valid: true,
            errors: Vec::new(),
        },
        Err(e) => ConfigValidationReport {
            source,
            valid: false,
            errors: vec![e.to_string()],
        },
    };

    writer.render(&report)?;

    if !report.valid {
        return Err(CliError::Config("configuration is invalid".to_owned()));
    }

    Ok(())
}

/// Display the effective configuration, optionally limited to one section.
///
/// # Errors
///
/// Returns `CliError::Command` if the section name is unknown.
fn execute_show(
    source: String,
    config: RulegenConfig,
    section: Option<String>,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let config_toml = match section.as_deref() {
        None => toml::to_string_pretty(&config),
        Some("general") => toml::to_string_pretty(&config.general),
        Some("sources") => toml::to_string_pretty(&config.sources),
        Some("expansion") => toml::to_string_pretty(&config.expansion),
        Some(other) => {
            return Err(CliError::Command(format!(
                "unknown section: {} (expected: general, sources, expansion)",
                other
            )));
        }
    }
    .unwrap_or_else(|e| format!("(serialization error: {})", e));

    let report = ConfigReport {
        source,
        section,
        config,
        config_toml,
    };

    writer.render(&report)?;

    Ok(())
}

/// Configuration display report.
///
/// JSON output carries the full effective configuration; text output shows
/// the TOML rendering of the requested section.
#[derive(Serialize)]
pub struct ConfigReport {
    /// Configuration source
    pub source: String,
    /// Optional section name (None = full config)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Effective configuration
    pub config: RulegenConfig,
    /// Serialized TOML (text output only)
    #[serde(skip)]
    pub config_toml: String,
}

impl Render for ConfigReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        if let Some(ref section) = self.section {
            let section_label = format!("[{}]", section);
            writeln!(
                w,
                "Configuration {} (source: {})",
                section_label.bold(),
                self.source
            )?;
        } else {
            writeln!(w, "Configuration (source: {})", self.source.bold())?;
        }

        writeln!(w)?;
        write!(w, "{}", self.config_toml)?;

        Ok(())
    }
}

/// Configuration validation report.
#[derive(Serialize)]
pub struct ConfigValidationReport {
    /// Configuration source
    pub source: String,
    /// Whether the configuration is valid
    pub valid: bool,
    /// Validation error messages (empty if valid)
    pub errors: Vec<String>,
}

impl Render for ConfigValidationReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(w, "Config Validation: {}", self.source.bold())?;

        if self.valid {
            writeln!(w, "  Result: {}", "VALID".green().bold())?;
        } else {
            writeln!(w, "  Result: {}", "INVALID".red().bold())?;
            for err in &self.errors {
                writeln!(w, "  Error: {}", err.red())?;
            }
        }

        Ok(())
    }
}
