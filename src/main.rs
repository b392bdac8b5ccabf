use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use convo::{ConvoError, Interpreter, Outcome, error::RuntimeError, run_source};

/// convo is an interpreter for Convo, a small scripting language that
/// reads like English sentences.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Convo source file to execute (typically `.convo`). Starts the
    /// interactive shell when omitted.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.file {
        Some(path) => run_file(&path),
        None => run_shell(),
    }
}

/// Runs a program from a file. Exit code 0 on normal termination or
/// `Stop`, 1 on syntax errors, runtime errors, and uncaught throws.
fn run_file(path: &PathBuf) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: could not read '{}': {error}", path.display());
            return ExitCode::FAILURE;
        },
    };

    let mut interpreter = Interpreter::new();
    match run_source(&source, &mut interpreter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            ExitCode::FAILURE
        },
    }
}

/// Prints an error the way the language defines it: an uncaught throw
/// prints the thrown value itself, everything else prints
/// `<Kind>: <description> (line <N>)`.
fn report(error: &ConvoError) {
    match error {
        ConvoError::Runtime(RuntimeError::Thrown { value, .. }) => eprintln!("{value}"),
        other => eprintln!("{other}"),
    }
}

/// The interactive shell. Bindings persist across inputs, the value of
/// an expression statement echoes back, and a line ending in `:` opens a
/// block that is submitted by a blank line.
fn run_shell() -> ExitCode {
    println!("Convo interactive shell");
    println!("Type 'exit' or 'quit' to leave.");

    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();
    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() { "convo> " } else { "...    " };
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {},
            Err(error) => {
                eprintln!("Error: {error}");
                break;
            },
        }
        let line = line.trim_end_matches(['\n', '\r']);

        if buffer.is_empty() {
            let word = line.trim();
            if word.eq_ignore_ascii_case("exit") || word.eq_ignore_ascii_case("quit") {
                break;
            }
            if word.is_empty() {
                continue;
            }
        }

        // A block header keeps the shell collecting lines until a blank
        // line submits the whole block.
        let opens_block = line.trim_end().ends_with(':');
        if !buffer.is_empty() || opens_block {
            if line.trim().is_empty() {
                let source = std::mem::take(&mut buffer);
                if let Some(code) = execute(&source, &mut interpreter) {
                    return code;
                }
            } else {
                buffer.push_str(line);
                buffer.push('\n');
            }
            continue;
        }

        if let Some(code) = execute(line, &mut interpreter) {
            return code;
        }
    }

    println!("Goodbye!");
    ExitCode::SUCCESS
}

/// Runs one shell input. Returns an exit code only when the program
/// asked to stop.
fn execute(source: &str, interpreter: &mut Interpreter) -> Option<ExitCode> {
    match run_source(source, interpreter) {
        Ok(Outcome::Stopped) => Some(ExitCode::SUCCESS),
        Ok(Outcome::Finished(Some(value))) => {
            println!("{value}");
            None
        },
        Ok(Outcome::Finished(None)) => None,
        Err(error) => {
            report(&error);
            None
        },
    }
}
