mod error_formatter;
mod formatter;
mod interactive;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formatter::Formatter;
use numeric::{Compiler, CompilerConfig, CompilerError, Unit, UnitSystem};
use serde::Serialize;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "numeric")]
#[command(about = "A smart numeric edit box for the terminal.")]
#[command(
    long_about = "Numeric compiles free-form length expressions such as `3ft 6in + 2'` into a single value\nand shows it the way a CAD edit box would. Metric and Imperial units can be mixed freely."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Unit system results are expressed in (generic, metric or imperial)
    #[arg(short = 's', long, global = true, default_value = "metric")]
    system: UnitSystem,

    /// Show Imperial results as decimals instead of fractions
    #[arg(long, global = true)]
    no_fractions: bool,

    /// Decimal separator accepted on input and used on output
    #[arg(long, global = true, default_value_t = '.', value_parser = parse_decimal_point)]
    decimal_point: char,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print what the edit box shows
    ///
    /// Examples:
    ///   numeric eval "3ft 6in + 2'" --system imperial
    ///   numeric eval "12in"
    ///   numeric eval "0x1F * 2" --json
    Eval {
        /// Expression to evaluate
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Print the solution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the scanned tokens and the postfix order of an expression
    Tokens {
        /// Expression to scan
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Start the interactive edit box
    ///
    /// Each line is evaluated in the unit of the previous result. Enter
    /// "metric", "imperial" or "generic" to switch systems, or a blank line to quit.
    Repl {
        /// Print the full error instead of a bare " - Error."
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Cli {
    fn config(&self) -> CompilerConfig {
        CompilerConfig {
            unit_system: self.system,
            decimal_point: self.decimal_point,
            imperial_fractions: !self.no_fractions,
            ..CompilerConfig::default()
        }
    }
}

fn parse_decimal_point(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if numeric::config::is_valid_decimal_point(c) => Ok(c),
        (Some(_), None) => Err(format!(
            "'{}' cannot be a decimal point (digits, letters, operators, parentheses and quotes are reserved)",
            value
        )),
        _ => Err("expected a single character".to_string()),
    }
}

#[derive(Serialize)]
struct EvalOutput<'a> {
    input: &'a str,
    value: f64,
    units: Unit,
    display: String,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "numeric=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let mut compiler = Compiler::with_config(cli.config());

    let (result, source) = match &cli.command {
        Commands::Eval { expression, json } => {
            (eval_command(&compiler, expression, *json), expression.as_str())
        }
        Commands::Tokens { expression } => {
            (tokens_command(&compiler, expression), expression.as_str())
        }
        Commands::Repl { verbose } => (repl_command(&mut compiler, *verbose), ""),
    };

    if let Err(e) = result {
        if let Some(compiler_err) = e.downcast_ref::<CompilerError>() {
            eprintln!("{}", error_formatter::format_error(compiler_err, source));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn eval_command(compiler: &Compiler, expression: &str, json: bool) -> Result<()> {
    let solution = compiler.eval(expression, None)?;
    let display = compiler.format(&solution);

    if json {
        let output = EvalOutput {
            input: expression,
            value: solution.value,
            units: solution.units,
            display,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", display);
    }

    Ok(())
}

fn tokens_command(compiler: &Compiler, expression: &str) -> Result<()> {
    let tokens = compiler.parse(expression)?;
    let postfix = compiler.to_postfix(&tokens)?;

    let formatter = Formatter::default();
    println!("{}", formatter.format_tokens(&tokens));
    println!("{}", formatter.format_postfix(&postfix));

    Ok(())
}

fn repl_command(compiler: &mut Compiler, verbose: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    interactive::run_repl(compiler, stdin.lock(), &mut stdout, verbose)
}
