//! CLI tool for inspecting record types and building records.
//!
//! Provides commands for:
//! - Showing the final field list of a type, including renamed fields
//! - Building a record from JSON values and printing its representations

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value as JsonValue;

use cli::{Cli, Commands};
use record_core::{BuildOptions, Record, RecordType, Value};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let mut options = BuildOptions { rename: cli.rename };
    if !options.rename {
        options.apply_env_overrides()?;
    }

    match cli.command {
        Commands::Inspect { type_name, fields } => {
            let ty = RecordType::build(&type_name, fields.as_str(), &options)
                .with_context(|| format!("failed to build record type {}", type_name))?;
            println!("{}", ty.signature());
            for (i, name) in ty.field_names().iter().enumerate() {
                println!("  {}: {}", i, name);
            }
        }
        Commands::Make {
            type_name,
            fields,
            values,
            named,
        } => {
            let ty = RecordType::build(&type_name, fields.as_str(), &options)
                .with_context(|| format!("failed to build record type {}", type_name))?;
            let json: JsonValue =
                serde_json::from_str(&values).context("values are not valid JSON")?;
            let record = make_record(&ty, json, named)?;
            tracing::debug!("Built record {}", record);
            println!("{}", record);
            println!("{:#}", record);
            println!("{}", serde_json::to_string_pretty(&record.to_json())?);
        }
    }

    Ok(())
}

fn make_record(ty: &RecordType, json: JsonValue, named: bool) -> Result<Record> {
    let record = match (json, named) {
        (JsonValue::Array(items), false) => {
            let values = items
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            ty.construct(values)?
        }
        (JsonValue::Object(map), true) => {
            let pairs = map
                .into_iter()
                .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
                .collect::<Result<Vec<_>, _>>()?;
            ty.construct_named(pairs)?
        }
        (_, false) => bail!("expected a JSON array of values"),
        (_, true) => bail!("expected a JSON object keyed by field name"),
    };
    Ok(record)
}
