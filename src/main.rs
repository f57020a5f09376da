use std::fs;

use bigcalc::{GOODBYE, HELP_TEXT, Outcome, Session, run_script};
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};

/// bigcalc is a calculator for arbitrarily large integers with named
/// variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells bigcalc to read `contents` as a path to a script file.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode only prints the last value produced by the script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// A script to run, one statement per line. Starts an interactive session
    /// when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    for line in run_script(&script, args.pipe_mode) {
        match line {
            Ok(output) => println!("{output}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}

fn repl() {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the interactive session: {e}");
            std::process::exit(1);
        },
    };
    let mut session = Session::new();

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        };
        if !line.trim().is_empty() {
            let _ = editor.add_history_entry(line.as_str());
        }

        match session.execute(&line) {
            Ok(Outcome::Value(value)) => println!("{value}"),
            Ok(Outcome::Help) => println!("{HELP_TEXT}"),
            Ok(Outcome::Exit) => {
                println!("{GOODBYE}");
                break;
            },
            Ok(Outcome::Assigned | Outcome::Nothing) => {},
            Err(e) => eprintln!("{e}"),
        }
    }
}
