use clap::Parser;

use rulegen_core::config::{GeneralConfig, RulegenConfig};

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use cli::{Cli, Commands};
use error::CliError;
use output::OutputWriter;

fn main() {
    let cli = Cli::parse_from(cli::normalize_single_dash_flags(std::env::args_os()));

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let resolved = resolve_config(&cli);

    // fall back to default logging so `config validate` can still report a broken config
    let general = match &resolved {
        Ok(config) => config.general.clone(),
        Err(_) => GeneralConfig::default(),
    };
    logging::init_tracing(&general).map_err(|e| CliError::Config(e.to_string()))?;

    let writer = OutputWriter::new(cli.output);

    match cli.command {
        Some(Commands::Config(args)) => {
            commands::config::execute(args, cli.config.as_deref(), resolved, &writer)
        }
        None => commands::expand::execute(&resolved?, &writer),
    }
}

/// Build the effective configuration.
///
/// Precedence, lowest first: built-in defaults, the `--config` file,
/// `RULEGEN_*` environment variables, then command-line flags.
fn resolve_config(cli: &Cli) -> Result<RulegenConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => RulegenConfig::from_file(path)?,
        None => RulegenConfig::default(),
    };

    config.apply_env_overrides();
    apply_cli_overrides(&mut config, cli);
    config.validate()?;

    Ok(config)
}

fn apply_cli_overrides(config: &mut RulegenConfig, cli: &Cli) {
    if let Some(level) = &cli.log_level {
        config.general.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.general.log_format = format.clone();
    }

    let args = &cli.expand;
    if let Some(path) = &args.three_column_rule_filepath {
        config.sources.three_column_rule_filepath = path.clone();
    }
    if let Some(path) = &args.normal_rule_filepath {
        config.sources.normal_rule_filepath = path.clone();
    }
    if let Some(path) = &args.output_rule_filepath {
        config.sources.output_rule_filepath = path.clone();
    }
    if args.sort_aggregates {
        config.expansion.sort_aggregates = true;
    }
}
