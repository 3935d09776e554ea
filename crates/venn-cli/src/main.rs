//! Interactive set-expression evaluator.

use std::io::{self, Write};

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use venn_cli::config::{BaseSetSpec, CliConfig, LogLevel, parse_universe_size};
use venn_cli::error::CliError;
use venn_cli::logging::init_logging;
use venn_cli::output::write_evaluation;
use venn_cli::repl;
use venn_expr::{Element, Evaluation, Evaluator, Session};

/// Type set expressions over the base sets and see which elements satisfy them.
#[derive(Parser, Debug)]
#[command(name = "venn", version, about)]
struct Args {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Number of universe elements; the universe is 1..=N.
    #[arg(long, value_parser = parse_universe_size)]
    universe: Option<Element>,

    /// Base set as NAME=E1,E2,... (repeatable); defaults to the reference sets.
    #[arg(long = "set", value_name = "NAME=ELEMENTS")]
    sets: Vec<BaseSetSpec>,

    /// Evaluate this expression once instead of starting the interactive loop.
    #[arg(long)]
    expr: Option<String>,
}

fn main() {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            report(&e);
            std::process::exit(2);
        }
    };
    init_logging(&config);

    let evaluator = match config.build_universe() {
        Ok(universe) => Evaluator::new(universe),
        Err(e) => {
            report(&e);
            std::process::exit(2);
        }
    };
    info!(
        version = env!("CARGO_PKG_VERSION"),
        elements = evaluator.universe().elements().len(),
        "starting venn"
    );

    let outcome = args.expr.as_deref().map_or_else(
        || run_interactive(&evaluator),
        |expr| run_once(&evaluator, expr),
    );
    if let Err(e) = outcome {
        let code = match e.downcast_ref::<CliError>() {
            Some(err @ CliError::Evaluation(_)) => {
                report(err);
                1
            }
            _ => {
                tracing::error!(error = %e, "venn exited with error");
                3
            }
        };
        std::process::exit(code);
    }
}

fn build_config(args: &Args) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(args.log_level, args.universe, args.sets.clone()))
}

fn report(error: &CliError) {
    debug!(error = ?error, "venn failed");
    let _ = writeln!(io::stderr().lock(), "error: {error}");
}

fn run_once(evaluator: &Evaluator, expr: &str) -> Result<()> {
    let evaluation = Evaluation::capture(evaluator, expr).map_err(CliError::from)?;
    write_evaluation(&mut io::stdout().lock(), &evaluation)
}

fn run_interactive(evaluator: &Evaluator) -> Result<()> {
    let mut session = Session::new(evaluator.clone());
    let stdin = io::stdin();
    repl::run(&mut session, stdin.lock(), &mut io::stdout().lock())
        .wrap_err("interactive session failed")
}
