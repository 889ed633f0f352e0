use std::fs;

use basil::run_program;
use clap::Parser;
use tracing::Level;

/// basil is a small BASIC-flavoured imperative language with integer and
/// real arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells basil to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints lexer, parser and evaluator tracing while the script runs.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { Level::TRACE } else { Level::WARN };
    tracing_subscriber::fmt().with_target(false)
                             .with_max_level(level)
                             .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match run_program(&script) {
        Ok(context) => {
            for line in &context.outputs {
                println!("{line}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
