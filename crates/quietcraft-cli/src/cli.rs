//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use quietcraft_domain::model::FieldKind;
use quietcraft_types::OutputFormat;

#[derive(Parser)]
#[command(name = "quietcraft")]
#[command(version)]
#[command(about = "Quote pricing and form checks for Quiet Craft Solutions")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Field type accepted by `validate`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FieldType {
    Text,
    Email,
    Tel,
    Date,
}

impl From<FieldType> for FieldKind {
    fn from(value: FieldType) -> Self {
        match value {
            FieldType::Text => FieldKind::Text,
            FieldType::Email => FieldKind::Email,
            FieldType::Tel => FieldKind::Tel,
            FieldType::Date => FieldKind::Date,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate a quote (service: standard, express, same-day, storage)
    Quote {
        /// Service tier
        service: String,

        /// Shipment weight
        weight: String,

        /// Delivery distance
        distance: String,
    },

    /// Quote every row of a CSV file (service,weight,distance)
    Batch {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Show the pricing table
    Tiers,

    /// Validate a form value
    Validate {
        /// Value to check
        value: String,

        /// Field type
        #[arg(long, short = 'k', value_enum, default_value_t = FieldType::Text)]
        kind: FieldType,

        /// Treat the field as required
        #[arg(long)]
        required: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Enable/disable analytics events
        #[arg(long)]
        set_analytics: Option<bool>,

        /// Set default log filter (e.g. info, debug)
        #[arg(long)]
        set_log_level: Option<String>,
    },
}
