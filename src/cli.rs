use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use stackcalc::evaluate_all;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Stackcalc - evaluate arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "stackcalc")]
#[command(about = "Evaluate expressions made of digits, + - * / and parentheses (no spaces)")]
#[command(version)]
pub struct CliArgs {
    /// Expressions to evaluate, e.g. "(3+3)*4-2"
    #[arg(required = true)]
    pub expressions: Vec<String>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Format one evaluation outcome the way it is printed
pub fn render(expression: &str, result: &Result<f32, stackcalc::CalculatorError>) -> String {
    match result {
        Ok(value) => format!("{} = {}", expression, value),
        Err(e) => format!("{}: error: {}", expression, e),
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    info!("Evaluating {} expression(s)", args.expressions.len());

    let results = evaluate_all(&args.expressions);
    let mut failures = 0;

    for (expression, result) in args.expressions.iter().zip(&results) {
        let line = render(expression, result);
        if result.is_ok() {
            println!("{}", line);
        } else {
            failures += 1;
            eprintln!("{}", line);
        }
    }

    if failures > 0 {
        warn!("{} of {} expressions failed", failures, results.len());
        bail!("{} expression(s) could not be evaluated", failures);
    }
    Ok(())
}
