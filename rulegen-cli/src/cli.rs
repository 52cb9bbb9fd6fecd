//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// rulegen -- expands three-column rules and merges rule sources into one JSON array.
///
/// Without a subcommand, reads both rule sources and writes the merged output.
#[derive(Parser, Debug)]
#[command(name = "rulegen", version, about, long_about = None)]
pub struct Cli {
    /// Optional rulegen.toml configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Override log format (json, pretty).
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Report format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(flatten)]
    pub expand: ExpandArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Source/destination overrides for the expansion run.
///
/// Each flag takes precedence over the config file and environment variables.
#[derive(Args, Debug, Default)]
pub struct ExpandArgs {
    /// Rule file to expand into total/exemption/liable columns
    /// [default: jsonRule_three_column.txt].
    #[arg(long = "threeColumnRuleFilepath", value_name = "PATH")]
    pub three_column_rule_filepath: Option<PathBuf>,

    /// Rule file used without three-column expansion [default: jsonRule_normal.txt].
    #[arg(long = "normalRuleFilepath", value_name = "PATH")]
    pub normal_rule_filepath: Option<PathBuf>,

    /// Output file path [default: jsonRule.out.txt].
    #[arg(long = "outputRuleFilepath", value_name = "PATH")]
    pub output_rule_filepath: Option<PathBuf>,

    /// Sort synthesized aggregate rules by field name.
    #[arg(long)]
    pub sort_aggregates: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- config ----

/// Manage rulegen configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (general, sources, expansion).
        #[arg(long)]
        section: Option<String>,
    },
}

/// Path flags that scripts written for the Go `flag` package pass with a single dash.
const SINGLE_DASH_FLAGS: [&str; 3] = [
    "threeColumnRuleFilepath",
    "normalRuleFilepath",
    "outputRuleFilepath",
];

/// Rewrite `-threeColumnRuleFilepath x` and `-outputRuleFilepath=x` style
/// arguments to the `--` form clap expects.
///
/// Arguments after a bare `--` are left untouched.
pub fn normalize_single_dash_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut options_ended = false;
    args.into_iter()
        .map(|arg| {
            let arg = arg.into();
            if options_ended {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    options_ended = true;
                    arg
                }
                Some(s) if is_single_dash_flag(s) => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_FLAGS.contains(&name)
}
