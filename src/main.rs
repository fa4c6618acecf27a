use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use intcalc::{
    Error, evaluate,
    interpreter::{
        lexer::{Lexer, tokenize},
        parser::{build_tree, to_postfix},
    },
};
use thiserror::Error as ThisError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// intcalc evaluates integer arithmetic expressions with `+`, `-`, `*`, `/`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells intcalc to read the expression from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// Print the token stream before evaluating.
    #[arg(long)]
    tokens: bool,

    /// Print the postfix form of the expression.
    #[arg(long)]
    postfix: bool,

    /// Print the syntax tree as parenthesized infix.
    #[arg(long)]
    ast: bool,

    /// Enable debug logging. `RUST_LOG` is used otherwise.
    #[arg(short, long)]
    verbose: bool,

    /// The expression, e.g. `1+2*(6-8)`, or a path when `--file` is given.
    contents: String,
}

/// Failures of a command-line run.
#[derive(Debug, ThisError)]
enum CliError {
    /// The `--file` argument could not be read.
    #[error("Failed to read the input file '{path}': {source}")]
    Read {
        path:   String,
        source: io::Error,
    },
    /// Writing to the output failed.
    #[error(transparent)]
    Write(#[from] io::Error),
    /// The expression did not evaluate.
    #[error(transparent)]
    Eval(#[from] Error),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_target(true))
                                  .with(filter)
                                  .init();
}

fn read_source(args: &Args) -> Result<String, CliError> {
    if args.file {
        fs::read_to_string(&args.contents).map_err(|source| CliError::Read { path: args.contents.clone(),
                                                                             source })
    } else {
        Ok(args.contents.clone())
    }
}

fn dump_stages(args: &Args, source: &str, out: &mut impl Write) -> Result<(), CliError> {
    if args.tokens {
        for token in tokenize(source) {
            writeln!(out, "{token}")?;
        }
    }

    if args.postfix || args.ast {
        let postfix = to_postfix(Lexer::new(source)).map_err(Error::from)?;
        if args.postfix {
            let texts: Vec<&str> = postfix.iter().map(|t| t.text.as_str()).collect();
            writeln!(out, "{}", texts.join(" "))?;
        }
        if args.ast {
            writeln!(out, "{}", build_tree(postfix).map_err(Error::from)?)?;
        }
    }

    Ok(())
}

/// Runs one invocation, writing dumps and the result to `out`.
fn run(args: &Args, out: &mut impl Write) -> Result<i64, CliError> {
    let source = read_source(args)?;
    dump_stages(args, &source, out)?;

    let value = evaluate(&source)?;
    writeln!(out, "{value}")?;
    Ok(value)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args, &mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
