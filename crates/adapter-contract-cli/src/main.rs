// crates/adapter-contract-cli/src/main.rs
// ============================================================================
// Module: Adapter Contract CLI Entry Point
// Description: Command dispatcher for offline adapter conformance checks.
// Purpose: Validate manifests, reports and commitment changesets from files.
// Dependencies: clap, adapter-contract-core, adapter-contract-config, serde_json, thiserror, toml, tracing-subscriber
// ============================================================================

//! ## Overview
//! The `adapter-contract` binary loads adapter payloads from JSON files and
//! runs the core validators and confirmation policy over them. Violations are
//! written to stdout one per line; diagnostics and logs go to stderr.
//!
//! Exit codes: `0` when the input conforms, `1` when violations were found
//! (or confirmation is required under `--deny-confirmation`), `2` when the
//! check could not run at all.
//!
//! Inputs are untrusted: every file is read with the configured byte limit.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use adapter_contract_config::AdapterContractConfig;
use adapter_contract_config::LogFormat;
use adapter_contract_config::LoggingConfig;
use adapter_contract_config::ZonesConfig;
use adapter_contract_core::AvailabilityZone;
use adapter_contract_core::CommitmentChangeRequest;
use adapter_contract_core::ErrorSet;
use adapter_contract_core::ServiceCapacityReport;
use adapter_contract_core::ServiceCapacityRequest;
use adapter_contract_core::ServiceInfo;
use adapter_contract_core::ServiceUsageReport;
use adapter_contract_core::ServiceUsageRequest;
use adapter_contract_core::validate_capacity_report;
use adapter_contract_core::validate_service_info;
use adapter_contract_core::validate_usage_report;
use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// ============================================================================
// SECTION: Exit Codes
// ============================================================================

/// Exit code when the input violates the contract.
const VIOLATIONS_EXIT_CODE: u8 = 1;
/// Exit code when the check itself failed.
const ERROR_EXIT_CODE: u8 = 2;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "adapter-contract", version, disable_help_subcommand = true)]
struct Cli {
    /// Config file path (defaults to adapter-contract.toml or `ADAPTER_CONTRACT_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Service manifest checks.
    Info {
        /// Selected info subcommand.
        #[command(subcommand)]
        command: InfoCommand,
    },
    /// Capacity report checks.
    Capacity {
        /// Selected capacity subcommand.
        #[command(subcommand)]
        command: CapacityCommand,
    },
    /// Usage report checks.
    Usage {
        /// Selected usage subcommand.
        #[command(subcommand)]
        command: UsageCommand,
    },
    /// Commitment changeset checks.
    Commitment {
        /// Selected commitment subcommand.
        #[command(subcommand)]
        command: CommitmentCommand,
    },
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Info subcommands.
#[derive(Subcommand, Debug)]
enum InfoCommand {
    /// Validate a service manifest.
    Validate(InfoValidateCommand),
}

/// Capacity subcommands.
#[derive(Subcommand, Debug)]
enum CapacityCommand {
    /// Validate a capacity report against its manifest.
    Validate(ReportValidateCommand),
}

/// Usage subcommands.
#[derive(Subcommand, Debug)]
enum UsageCommand {
    /// Validate a usage report against its manifest.
    Validate(ReportValidateCommand),
}

/// Commitment subcommands.
#[derive(Subcommand, Debug)]
enum CommitmentCommand {
    /// Decide whether a commitment change request needs confirmation.
    Check(CommitmentCheckCommand),
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate the configuration and print its effective form.
    Validate,
}

/// Arguments for `info validate`.
#[derive(Args, Debug)]
struct InfoValidateCommand {
    /// Path to the `ServiceInfo` JSON.
    #[arg(long, value_name = "FILE")]
    info: PathBuf,
}

/// Arguments shared by `capacity validate` and `usage validate`.
#[derive(Args, Debug)]
struct ReportValidateCommand {
    /// Path to the `ServiceInfo` JSON the report was produced against.
    #[arg(long, value_name = "FILE")]
    info: PathBuf,
    /// Path to the report JSON.
    #[arg(long, value_name = "FILE")]
    report: PathBuf,
    /// Optional path to the request JSON that produced the report.
    #[arg(long, value_name = "FILE")]
    request: Option<PathBuf>,
    /// Availability zone; repeat for each zone (overrides request and config).
    #[arg(long = "az", value_name = "ZONE", action = ArgAction::Append)]
    zones: Vec<String>,
}

/// Arguments for `commitment check`.
#[derive(Args, Debug)]
struct CommitmentCheckCommand {
    /// Path to the `CommitmentChangeRequest` JSON.
    #[arg(long, value_name = "FILE")]
    request: PathBuf,
    /// Exit with a failure code when confirmation is required.
    #[arg(long, action = ArgAction::SetTrue)]
    deny_confirmation: bool,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a human-readable message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Loads configuration, installs logging and dispatches the command.
fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = AdapterContractConfig::load(cli.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    init_tracing(&config.logging)?;

    match cli.command {
        Commands::Info {
            command: InfoCommand::Validate(command),
        } => command_info_validate(&command, &config),
        Commands::Capacity {
            command: CapacityCommand::Validate(command),
        } => command_capacity_validate(&command, &config),
        Commands::Usage {
            command: UsageCommand::Validate(command),
        } => command_usage_validate(&command, &config),
        Commands::Commitment {
            command: CommitmentCommand::Check(command),
        } => command_commitment_check(&command, &config),
        Commands::Config {
            command: ConfigCommand::Validate,
        } => command_config_validate(&config),
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingConfig) -> CliResult<()> {
    let level = logging.level().map_err(|err| CliError::new(err.to_string()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    let registry = tracing_subscriber::registry().with(filter);
    let installed = match logging.format {
        LogFormat::Compact => {
            registry.with(fmt::layer().compact().with_writer(std::io::stderr)).try_init()
        }
        LogFormat::Full => registry.with(fmt::layer().with_writer(std::io::stderr)).try_init(),
    };
    installed.map_err(|err| CliError::new(format!("failed to initialize logging: {err}")))
}

// ============================================================================
// SECTION: Validation Commands
// ============================================================================

/// Executes `info validate`.
fn command_info_validate(
    command: &InfoValidateCommand,
    config: &AdapterContractConfig,
) -> CliResult<ExitCode> {
    let service_info: ServiceInfo =
        read_json(&command.info, "service info", config.limits.max_input_bytes)?;
    emit_violations("service info", &validate_service_info(&service_info))
}

/// Executes `capacity validate`.
fn command_capacity_validate(
    command: &ReportValidateCommand,
    config: &AdapterContractConfig,
) -> CliResult<ExitCode> {
    let limit = config.limits.max_input_bytes;
    let service_info: ServiceInfo = read_json(&command.info, "service info", limit)?;
    let mut request = match &command.request {
        Some(path) => read_json::<ServiceCapacityRequest>(path, "capacity request", limit)?,
        None => ServiceCapacityRequest::default(),
    };
    request.all_azs = resolve_zones(&command.zones, &request.all_azs, &config.zones)?;
    let report: ServiceCapacityReport = read_json(&command.report, "capacity report", limit)?;
    emit_violations(
        "capacity report",
        &validate_capacity_report(&report, &request, &service_info),
    )
}

/// Executes `usage validate`.
fn command_usage_validate(
    command: &ReportValidateCommand,
    config: &AdapterContractConfig,
) -> CliResult<ExitCode> {
    let limit = config.limits.max_input_bytes;
    let service_info: ServiceInfo = read_json(&command.info, "service info", limit)?;
    let mut request = match &command.request {
        Some(path) => read_json::<ServiceUsageRequest>(path, "usage request", limit)?,
        None => ServiceUsageRequest::default(),
    };
    request.all_azs = resolve_zones(&command.zones, &request.all_azs, &config.zones)?;
    let report: ServiceUsageReport = read_json(&command.report, "usage report", limit)?;
    emit_violations("usage report", &validate_usage_report(&report, &request, &service_info))
}

/// Writes every violation to stdout and picks the exit code.
fn emit_violations(kind: &str, errors: &ErrorSet) -> CliResult<ExitCode> {
    for message in errors {
        write_stdout_line(message).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    info!(kind, violations = errors.len(), "check finished");
    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(VIOLATIONS_EXIT_CODE))
    }
}

/// Picks the zone list for report validation.
///
/// Precedence: `--az` flags, then the request's `allAZs`, then `zones.all`.
fn resolve_zones(
    flags: &[String],
    requested: &[AvailabilityZone],
    configured: &ZonesConfig,
) -> CliResult<Vec<AvailabilityZone>> {
    let (source, zones): (&str, Vec<AvailabilityZone>) = if !flags.is_empty() {
        ("flags", flags.iter().map(|zone| AvailabilityZone::from(zone.as_str())).collect())
    } else if !requested.is_empty() {
        ("request", requested.to_vec())
    } else {
        ("config", configured.all.clone())
    };
    if zones.is_empty() {
        return Err(CliError::new(
            "no availability zones given (pass --az, a request with allAZs, or set zones.all in \
             the config)"
                .to_string(),
        ));
    }
    if let Some(zone) = zones.iter().find(|zone| zone.is_pseudo()) {
        return Err(CliError::new(format!(
            "availability zone list may not contain pseudo-zone {zone}"
        )));
    }
    debug!(source, zones = zones.len(), "resolved availability zones");
    Ok(zones)
}

// ============================================================================
// SECTION: Commitment Command
// ============================================================================

/// Executes `commitment check`.
fn command_commitment_check(
    command: &CommitmentCheckCommand,
    config: &AdapterContractConfig,
) -> CliResult<ExitCode> {
    let request: CommitmentChangeRequest = read_json(
        &command.request,
        "commitment change request",
        config.limits.max_input_bytes,
    )?;
    let required = request.requires_confirmation();
    let verdict = if required { "confirmation required" } else { "confirmation not required" };
    write_stdout_line(verdict).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    if required && command.deny_confirmation {
        return Ok(ExitCode::from(VIOLATIONS_EXIT_CODE));
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Command
// ============================================================================

/// Executes `config validate` by printing the effective configuration.
fn command_config_validate(config: &AdapterContractConfig) -> CliResult<ExitCode> {
    let rendered = toml::to_string(config)
        .map_err(|err| CliError::new(format!("failed to render config: {err}")))?;
    write_stdout_line(rendered.trim_end())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Errors returned by bounded file reads.
#[derive(Debug)]
enum ReadLimitError {
    /// File I/O failure.
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let size = file.metadata().map_err(ReadLimitError::Io)?.len();
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX);
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let mut bytes = Vec::new();
    file.take(limit.saturating_add(1)).read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        return Err(ReadLimitError::TooLarge {
            size: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

/// Reads and decodes a JSON input file.
fn read_json<T: DeserializeOwned>(path: &Path, kind: &str, max_bytes: usize) -> CliResult<T> {
    let bytes = read_bytes_with_limit(path, max_bytes).map_err(|err| match err {
        ReadLimitError::Io(err) => {
            CliError::new(format!("failed to read {kind} {}: {err}", path.display()))
        }
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::new(format!(
            "{kind} {} is {size} bytes, exceeding the limit of {limit} bytes",
            path.display()
        )),
    })?;
    serde_json::from_slice(&bytes)
        .map_err(|err| CliError::new(format!("failed to parse {kind} {}: {err}", path.display())))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns the error exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::from(ERROR_EXIT_CODE)
}
