//! Command handlers

use chrono::Local;
use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::output::{output_batch, output_notification, output_quote, output_tiers, output_validation};
use quietcraft_app::app::{quote_rows, QuoteOutcome, QuoteService};
use quietcraft_app::batch::load_quote_rows;
use quietcraft_app::config::Config;
use quietcraft_app::sink::TracingSink;
use quietcraft_domain::model::FormField;
use quietcraft_domain::service::validate_field;
use quietcraft_types::{Error, OutputFormat, Result};

/// Execute CLI command. Config changes are written to `config_path`.
pub fn execute(cli: Cli, config: Config, config_path: &Path) -> Result<()> {
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Quote {
            service,
            weight,
            distance,
        } => cmd_quote(&config, format, &service, &weight, &distance),
        Commands::Batch { file } => {
            let rows = load_quote_rows(&file)?;
            if rows.is_empty() {
                return Err(Error::InvalidArgument(format!(
                    "no quote rows in {}",
                    file.display()
                )));
            }
            let mut service = QuoteService::new(TracingSink, config.analytics_enabled);
            let report = quote_rows(&mut service, &rows);
            output_batch(format, &report)
        }
        Commands::Tiers => output_tiers(format),
        Commands::Validate {
            value,
            kind,
            required,
        } => {
            let mut field = FormField::new("value", kind.into(), value.clone());
            if required {
                field = field.required();
            }
            let validation = validate_field(&field, Local::now().date_naive());
            output_validation(format, &value, &validation)?;
            match validation.message() {
                Some(msg) => Err(Error::InvalidArgument(msg.to_string())),
                None => Ok(()),
            }
        }
        Commands::Config {
            show,
            set_output,
            set_analytics,
            set_log_level,
        } => cmd_config(config, config_path, show, set_output, set_analytics, set_log_level),
    }
}

fn cmd_quote(
    config: &Config,
    format: OutputFormat,
    service: &str,
    weight: &str,
    distance: &str,
) -> Result<()> {
    let mut quote_service = QuoteService::new(TracingSink, config.analytics_enabled);
    let outcome = quote_service.calculate(service, weight, distance);
    output_notification(outcome.notification());

    match outcome {
        QuoteOutcome::Quoted(success) => output_quote(format, &success),
        QuoteOutcome::Rejected { error, .. } => Err(error.into()),
    }
}

fn cmd_config(
    mut config: Config,
    config_path: &Path,
    show: bool,
    set_output: Option<OutputFormat>,
    set_analytics: Option<bool>,
    set_log_level: Option<String>,
) -> Result<()> {
    let mut changed = false;

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(enabled) = set_analytics {
        config.analytics_enabled = enabled;
        changed = true;
    }
    if let Some(level) = set_log_level {
        config.log_level = level;
        changed = true;
    }

    if changed {
        config.save_to(config_path)?;
        tracing::info!("configuration updated");
    }

    if show || !changed {
        print!("{}", config);
    }
    Ok(())
}
