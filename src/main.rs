use std::{fs, process::ExitCode};

use clap::Parser;
use log::debug;
use plc::run_source;

/// plc runs programs written in a small imperative scripting language and
/// prints the value returned by their `main` method.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells plc to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Runs the program without the static analysis pass.
    #[arg(long)]
    skip_analysis: bool,

    contents: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    debug!("running {} bytes of source", script.len());

    match run_source(&script, !args.skip_analysis) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
