//! # rblcheck
//!
//! Builds the DNS blackhole list query names for one IPv4 address and feeds
//! them to an external bulk resolver running in forward-address mode.

mod bootstrap;
mod di;

use clap::{CommandFactory, Parser};
use rblcheck_domain::{CliOverrides, DomainError, DEFAULT_RULES_FILE};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use bootstrap::{init_logging, load_config};
use di::UseCases;

#[derive(Parser, Debug)]
#[command(name = "rblcheck")]
#[command(version)]
#[command(about = "Check an IPv4 address against DNS blackhole lists")]
#[command(after_help = "rblcheck options go before the address. Once an argument after the \
    address is not an rblcheck option, it and everything after it are passed unmodified to the \
    resolver, e.g. `rblcheck --config rules 192.0.2.1 -c 50 -t 1000 --attempts 3 -u`. \
    Use `--` to forward everything after the address.")]
struct Cli {
    /// IPv4 address to check (dotted quad)
    #[arg(value_name = "ADDRESS")]
    address: Option<String>,

    /// Resolver flags (concurrency, timeout, attempts, ordering, record type)
    #[arg(
        value_name = "RESOLVER_ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    resolver_args: Vec<String>,

    /// Rule file with one `-s <zone-suffix>` directive per line
    #[arg(long = "config", value_name = "PATH", default_value = DEFAULT_RULES_FILE)]
    config: PathBuf,

    /// Resolver program reading query names on stdin
    #[arg(long, value_name = "PROGRAM")]
    resolver: Option<String>,

    /// Print the query names instead of resolving them
    #[arg(long)]
    print_queries: bool,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log format: text or json
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and succeed.
            let code = if e.use_stderr() { 1 } else { 0 };
            if e.print().is_err() {
                eprintln!("{e}");
            }
            return ExitCode::from(code);
        }
    };

    match run(cli).await {
        Ok(code) => code,
        Err(e) => report(e),
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let address = cli.address.ok_or(DomainError::MissingArgument)?;
    let config = load_config(CliOverrides {
        rules_path: Some(cli.config),
        resolver_program: cli.resolver,
        resolver_args: cli.resolver_args,
        print_queries: cli.print_queries,
        log_level: cli.log_level,
        log_format: cli.log_format,
    })?;

    init_logging(&config.logging);
    debug!(
        rules = %config.rules_path.display(),
        resolver = %config.resolver.program,
        output = ?config.output,
        "Configuration loaded"
    );

    let use_cases = UseCases::new(&config);
    let outcome = use_cases.check_address.execute(&address).await?;
    debug!(
        address = %outcome.address,
        queries = outcome.query_count,
        exit_code = outcome.exit.code,
        "Check finished"
    );

    Ok(exit_code(outcome.exit.code))
}

fn report(e: anyhow::Error) -> ExitCode {
    debug!(error = ?e, "Check failed");
    eprintln!("rblcheck: {e}");

    match e.downcast_ref::<DomainError>() {
        Some(DomainError::MissingArgument) => {
            eprintln!("{}", Cli::command().render_usage());
            ExitCode::from(DomainError::MissingArgument.exit_code())
        }
        Some(domain) => ExitCode::from(domain.exit_code()),
        None => ExitCode::FAILURE,
    }
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map(ExitCode::from).unwrap_or(ExitCode::FAILURE)
}
