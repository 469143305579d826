//! # Convert Subcommand
//!
//! The full pipeline: retrieve → convert → adjust → persist → validate.
//!
//! Adjuster names are resolved against the registry right after the
//! configuration loads, before any work runs: a misspelled name in the
//! configuration stops the run without fetching anything.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use uasgz_core::ed269::Ed269Schema;
use uasgz_core::ConverterConfiguration;
use uasgz_schema::SchemaValidator;

/// Arguments for the `uasgz convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// URL of the ED-269 source file, example:
    /// https://data.geo.admin.ch/ch.bazl.einschraenkungen-drohnen/einschraenkungen-drohnen/einschraenkungen-drohnen_4326.json
    pub input_url: String,

    /// Path of the ED-318 output file.
    pub output_file: PathBuf,

    /// Time to live of cached downloads, in seconds.
    #[arg(short, long, default_value_t = 0)]
    pub ttl: u64,

    /// Path to the converter configuration (YAML or JSON).
    #[arg(short, long, default_value = "configs/foca.yaml")]
    pub config: PathBuf,

    /// Directory containing the ED-318 schema set.
    #[arg(long, default_value = "schemas/ed318")]
    pub schema_dir: PathBuf,
}

/// Execute the convert subcommand.
///
/// Returns the process exit code: 0 on success, 1 when the data is at
/// fault (conversion, adjustment, or validation), with operational
/// failures propagated as errors for the caller to map to exit code 2.
pub fn run_convert(args: &ConvertArgs) -> Result<u8> {
    let config = ConverterConfiguration::from_file(&args.config)
        .context("failed to load converter configuration")?;
    tracing::info!(name = %config.name, "using configuration");

    let passes = match uasgz_adjust::resolve(&config.adjusters) {
        Ok(passes) => passes,
        Err(e) => {
            tracing::error!("{e}");
            return Ok(1);
        }
    };

    let source = uasgz_fetch::fetch(&args.input_url, Some(Duration::from_secs(args.ttl)))
        .context("failed to retrieve the source document")?;
    tracing::debug!(path = %source.display(), "local input copy");

    let content = std::fs::read_to_string(&source)
        .with_context(|| format!("cannot read '{}'", source.display()))?;
    let ed269: Ed269Schema =
        serde_json::from_str(&content).context("source document is not a valid ED-269 dataset")?;
    tracing::info!(zones = ed269.features.len(), "loaded source document");

    let mut document = match uasgz_convert::convert(&ed269, &config.ed318_additions) {
        Ok(document) => document,
        Err(e) => {
            tracing::error!("conversion failed: {e}");
            return Ok(1);
        }
    };

    for pass in &passes {
        document = match pass.adjust(document) {
            Ok(document) => {
                tracing::debug!(pass = pass.name(), "applied adjustment pass");
                document
            }
            Err(e) => {
                tracing::error!(pass = pass.name(), "adjustment failed: {e}");
                return Ok(1);
            }
        };
    }

    let value = serde_json::to_value(&document).context("cannot serialize output document")?;
    let json = serde_json::to_string_pretty(&value).context("cannot serialize output document")?;
    std::fs::write(&args.output_file, json)
        .with_context(|| format!("cannot write '{}'", args.output_file.display()))?;
    tracing::info!(path = %args.output_file.display(), "output written");

    // Validation runs after the output is persisted: a non-conforming
    // document stays on disk for inspection.
    let validator =
        SchemaValidator::new(&args.schema_dir).context("failed to load the ED-318 schema set")?;
    let violations = validator.validate(&value);
    if !violations.is_empty() {
        for violation in &violations {
            tracing::error!("{violation}");
        }
        tracing::warn!(
            count = violations.len(),
            "output does not conform to the ED-318 schema"
        );
        return Ok(1);
    }

    tracing::info!(path = %args.output_file.display(), "successful conversion and validation");
    Ok(0)
}
