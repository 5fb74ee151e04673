//! linelex calculator CLI
//!
//! Reads `number operator number` expressions, one per line, from a file or
//! standard input and prints each result.

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use linelex_calc::{CalcError, Session, SessionConfig};

fn main() -> ExitCode {
    init_tracing();

    let mut path: Option<String> = None;
    let mut prompt = true;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "help" | "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            "version" | "--version" | "-V" => {
                println!("linelex-calc {}", env!("CARGO_PKG_VERSION"));
                return ExitCode::SUCCESS;
            }
            "--no-prompt" => prompt = false,
            other if other.starts_with('-') && other != "-" => {
                eprintln!("error: unknown option '{other}'");
                eprintln!();
                print_usage();
                return ExitCode::FAILURE;
            }
            other if path.is_none() => path = Some(other.to_owned()),
            other => {
                eprintln!("error: unexpected argument '{other}'");
                return ExitCode::FAILURE;
            }
        }
    }

    let stdout = io::stdout().lock();
    let result = match path.as_deref() {
        None | Some("-") => {
            let stdin = io::stdin();
            let config = if prompt && stdin.is_terminal() {
                SessionConfig::interactive()
            } else {
                SessionConfig::default()
            };
            run(stdin.lock(), stdout, config)
        }
        Some(path) => match std::fs::File::open(path) {
            Ok(file) => run(io::BufReader::new(file), stdout, SessionConfig::default()),
            Err(error) => {
                eprintln!("error: cannot open '{path}': {error}");
                return ExitCode::FAILURE;
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            let mut source = std::error::Error::source(&error);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(input: impl BufRead, out: impl Write, config: SessionConfig) -> Result<(), CalcError> {
    let mut session = Session::new(input, out, config)?;
    let summary = session.run()?;
    tracing::info!(
        evaluated = summary.evaluated,
        errors = summary.errors,
        "done"
    );
    Ok(())
}

/// Install a stderr subscriber when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=linelex=trace` to see every token produced.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    }
}

fn print_usage() {
    println!("linelex calculator");
    println!();
    println!("Usage: linelex-calc [options] [file]");
    println!();
    println!("Reads one `number operator number` expression per line from <file>,");
    println!("or from standard input when no file (or `-`) is given, and prints");
    println!("each result. Operators: + - * /. The word `exit` ends the session.");
    println!();
    println!("Options:");
    println!("  --no-prompt     Do not print a prompt on interactive input");
    println!("  -h, --help      Show this help message");
    println!("  -V, --version   Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=linelex=trace) for diagnostic logging.");
}
