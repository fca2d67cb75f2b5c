use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser, ValueEnum};
use minicalc::{
    Error,
    interpreter::{
        lexer::scan,
        parser::parse,
        runner::{LineRunner, source_lines},
    },
    run,
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::Level;

/// minicalc is a tiny calculator language with variables and `print`.
///
/// Without any source, an interactive session is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minicalc to read CONTENTS as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Show the tokens or the syntax tree of every line instead of running
    /// the script.
    #[arg(short, long, value_enum)]
    emit: Option<Emit>,

    /// Log what the interpreter does to stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Emit {
    /// The tokens of each line.
    Tokens,
    /// The syntax tree of each line.
    Tree,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();

    let Some(contents) = args.contents else {
        return match run_repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let result = match args.emit {
        Some(emit) => dump(&script, emit),
        None => run(&script).map(|outcome| {
                                if !outcome.is_empty() {
                                    println!("{outcome}");
                                }
                            }),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Prints the tokens or trees of every line without evaluating anything.
fn dump(script: &str, emit: Emit) -> Result<(), Error> {
    for (line, text) in source_lines(script) {
        let tokens = scan(text, line)?;
        match emit {
            Emit::Tokens => {
                let rendered: Vec<String> = tokens.iter().map(|(tok, _)| tok.to_string()).collect();
                println!("{line}: [{}]", rendered.join(", "));
            },
            Emit::Tree => {
                if let Some(tree) = parse(&tokens)? {
                    println!("{line}: {tree}");
                }
            },
        }
    }
    Ok(())
}

/// Reads lines interactively and runs each against one shared store.
///
/// Errors are reported and the session continues; variables assigned before
/// the error are kept.
fn run_repl() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut runner = LineRunner::new();
    let mut line = 0;

    loop {
        match rl.readline(">> ") {
            Ok(text) => {
                line += 1;
                rl.add_history_entry(text.as_str())?;
                match runner.execute_line(&text, line) {
                    Ok(Some(result)) => println!("{}", result.value),
                    Ok(None) => {},
                    Err(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
