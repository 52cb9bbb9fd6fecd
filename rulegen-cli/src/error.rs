//! CLI-specific error types and exit code mapping

use rulegen_core::error::RulegenError;
use rulegen_expander::ExpanderError;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to process exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A subcommand-specific operation failed.
    #[error("{0}")]
    Command(String),

    /// Reading, expanding, or writing rules failed.
    #[error("{0}")]
    Expand(#[from] ExpanderError),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped domain error from rulegen-core.
    #[error("{0}")]
    Core(#[from] RulegenError),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                          |
    /// |------|----------------------------------|
    /// | 0    | Success                          |
    /// | 1    | General / command error          |
    /// | 2    | Configuration error              |
    /// | 3    | Rule source not found            |
    /// | 4    | Malformed rule record            |
    /// | 10   | IO error                         |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Core(RulegenError::Config(_)) => 2,
            Self::Expand(ExpanderError::NotFound { .. }) => 3,
            Self::Expand(ExpanderError::Parse { .. }) => 4,
            Self::Expand(ExpanderError::Io { .. }) | Self::Io(_) | Self::Core(RulegenError::Io(_)) => {
                10
            }
            Self::JsonSerialize(_) | Self::Command(_) => 1,
        }
    }
}
