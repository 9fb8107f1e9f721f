//! cloud-api-models CLI
//!
//! Command-line interface for inspecting a directory of cloud SDK models.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cloud_api_models_common::{JsonMap, Service};
use cloud_api_models_provider::{load_bundle, ApiProvider, FilesystemApiProvider, LATEST};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cloud-api-models")]
#[command(version, about = "Inspect versioned cloud SDK service models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory containing the model files
    #[arg(short = 'd', long, global = true, default_value = "./models")]
    models_dir: PathBuf,

    /// Read minified (.normal.min.json) API descriptions
    #[arg(short, long, global = true)]
    minified: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the services that have an API description
    Services,

    /// List the versions available for a service
    Versions {
        /// Service id (e.g. "s3")
        service: String,
    },

    /// Show a service description
    #[command(after_help = "EXAMPLES:\n  \
        # Summary of the oldest known S3 model\n  \
        cloud-api-models show s3\n\n  \
        # Full description, paginators and waiters of one version\n  \
        cloud-api-models -d ./models show dynamodb --version 2012-08-10 --json")]
    Show {
        /// Service id (e.g. "s3")
        service: String,

        /// API version, or "latest"
        #[arg(long, default_value = LATEST)]
        version: String,

        /// Print the description, paginators and waiters as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the pagination config of a service version
    Paginators {
        service: String,
        version: String,
    },

    /// Print the waiter config of a service version
    Waiters {
        service: String,
        version: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let provider = FilesystemApiProvider::with_mode(&cli.models_dir, cli.minified);

    if cli.verbose {
        println!(
            "{} Models: {} ({})",
            "→".cyan(),
            provider.root().display(),
            provider.api_suffix()
        );
    }

    match cli.command {
        Commands::Services => services_command(&provider)?,
        Commands::Versions { service } => versions_command(&provider, &service)?,
        Commands::Show {
            service,
            version,
            json,
        } => show_command(&provider, &service, &version, json)?,
        Commands::Paginators { service, version } => {
            let config = provider
                .get_service_paginator_config(&service, &version)
                .with_context(|| format!("Failed to load paginators for {service} {version}"))?;
            print_config("paginator", &service, &version, &config)?;
        }
        Commands::Waiters { service, version } => {
            let config = provider
                .get_service_waiter_config(&service, &version)
                .with_context(|| format!("Failed to load waiters for {service} {version}"))?;
            print_config("waiter", &service, &version, &config)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// All warnings go to stderr
fn warn(message: &str) {
    eprintln!("{}", warning_line(message));
}

fn warning_line(message: &str) -> String {
    format!("{} {}", "⚠".yellow(), message)
}

fn services_command(provider: &dyn ApiProvider) -> Result<()> {
    let names = provider.get_service_names().context("Failed to list services")?;

    if names.is_empty() {
        warn("No services found");
        return Ok(());
    }

    for name in &names {
        println!("{}", name);
    }
    println!("{} {} services", "✓".green(), names.len());

    Ok(())
}

fn versions_command(provider: &dyn ApiProvider, service: &str) -> Result<()> {
    let versions = provider
        .get_service_versions(service)
        .with_context(|| format!("Failed to list versions of {service}"))?;

    if versions.is_empty() {
        warn(&format!("No versions found for {}", service.yellow()));
        return Ok(());
    }

    for version in &versions {
        println!("{}", version);
    }

    Ok(())
}

fn show_command(
    provider: &dyn ApiProvider,
    service: &str,
    version: &str,
    json: bool,
) -> Result<()> {
    let bundle = load_bundle(provider, service, version)
        .with_context(|| format!("Failed to load {service} {version}"))?
        .with_context(|| format!("No description found for {service} {version}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
        return Ok(());
    }

    println!("{}", "Service Description:".bold());
    println!("  Service: {}", bundle.service_id.yellow());
    println!("  Version: {}", bundle.version.yellow());
    print_summary(&bundle.service);
    println!("  Paginated operations: {}", section_len(&bundle.paginators, "pagination"));
    println!("  Waiters: {}", section_len(&bundle.waiters, "waiters"));

    Ok(())
}

fn print_summary(service: &Service) {
    let show = |value: Option<&str>| value.unwrap_or("-").to_string();

    if let Some(full_name) = service.service_full_name() {
        println!("  Name: {}", full_name);
    }
    println!("  API version: {}", show(service.api_version()));
    println!("  Protocol: {}", show(service.protocol()));
    println!("  Endpoint prefix: {}", show(service.endpoint_prefix()));
    println!("  Operations: {}", service.operation_names().len());
}

fn section_len(config: &JsonMap, key: &str) -> usize {
    config
        .get(key)
        .and_then(|v| v.as_object())
        .map_or(0, |section| section.len())
}

fn print_config(kind: &str, service: &str, version: &str, config: &JsonMap) -> Result<()> {
    if config.is_empty() {
        warn(&format!("No {} config for {} {}", kind, service.yellow(), version));
    }
    println!("{}", serde_json::to_string_pretty(config)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_defaults_to_latest() {
        let cli = Cli::parse_from(["cloud-api-models", "-d", "/models", "show", "s3"]);

        assert_eq!(cli.models_dir, PathBuf::from("/models"));
        match cli.command {
            Commands::Show { version, json, .. } => {
                assert_eq!(version, LATEST);
                assert!(!json);
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_warning_line() {
        colored::control::set_override(false);
        assert_eq!(warning_line("No services found"), "⚠ No services found");
    }

    #[test]
    fn test_section_len() {
        let config = json!({"pagination": {"ListA": {}, "ListB": {}}, "version": 2});
        let config = config.as_object().unwrap();

        assert_eq!(section_len(config, "pagination"), 2);
        assert_eq!(section_len(config, "version"), 0);
        assert_eq!(section_len(config, "waiters"), 0);
    }
}
