// ABOUTME: The driver (§4.F): wires reader, environment, builtins, and
// ABOUTME: evaluator together as either a REPL or a script loader. No
// ABOUTME: interpreter logic lives here, only argv/line-reading/printing.

mod builtins;
mod config;
mod env;
mod error;
mod eval;
mod reader;
mod stdlib;
mod value;

use clap::Parser;
use env::Environment;
use eval::eval;
use reader::read_all;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use std::rc::Rc;
use value::Value;

/// A small Lisp-family interpreter: S-expressions, Q-expression data,
/// lexical closures, and partial application.
#[derive(Parser, Debug)]
#[command(name = "lispy", version = config::VERSION)]
struct CliArgs {
    /// Script files to load and run. With none given, starts the REPL.
    #[arg(value_name = "FILE")]
    scripts: Vec<PathBuf>,
}

fn main() {
    let args = CliArgs::parse();

    let env = Environment::new();
    builtins::register_builtins(&env);
    stdlib::load_stdlib(&env);

    if args.scripts.is_empty() {
        run_repl(&env);
    } else {
        for path in &args.scripts {
            load_path(&env, path);
        }
    }
}

/// Loads `path` the same way the `load` builtin would, since script-mode
/// loading and the builtin share one contract (§6 Supplemental behavior): a
/// failing load prints its Error and the driver moves on to the next path.
fn load_path(env: &Rc<Environment>, path: &PathBuf) {
    let call = Value::SExpr(vec![
        Value::Symbol("load".to_string()),
        Value::String(path.to_string_lossy().into_owned()),
    ]);
    let result = eval(env, call);
    if let Value::Error(msg) = result {
        println!("Error: {msg}");
    }
}

fn run_repl(env: &Rc<Environment>) {
    println!("{}", config::BANNER);
    println!("{}\n", config::BANNER_FOOTER);

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to initialize line editor: {e}");
            return;
        }
    };
    let _ = editor.load_history(config::HISTORY_FILE);

    loop {
        match editor.readline(config::PROMPT) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                let result = eval(env, read_all(&line));
                println!("{result}");
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            }
        }
    }

    let _ = editor.save_history(config::HISTORY_FILE);
}
