use std::{fs, process::ExitCode};

use calcengine::{evaluate, parse, util::num::format_result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calcengine evaluates arithmetic expressions with `+ - * / % ** √` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a file and evaluate each of its lines.
    #[arg(short, long)]
    file: bool,

    /// Print the parsed expression instead of its value.
    #[arg(short, long)]
    ast: bool,

    /// Log each evaluation to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The expression, or the file path with `--file`. May start with `-`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
                             .with_writer(std::io::stderr)
                             .init();

    if !args.file {
        return match run(&args.contents, args.ast) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        };
    }

    let Ok(script) = fs::read_to_string(&args.contents) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.contents);
        return ExitCode::FAILURE;
    };

    let mut failed = false;
    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match run(line, args.ast) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("Error on line {}: {e}", index + 1);
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn run(expression: &str, ast: bool) -> Result<String, calcengine::error::Error> {
    if ast {
        parse(expression).map(|tree| tree.to_string())
    } else {
        evaluate(expression).map(format_result)
    }
}
