use std::io::Read;
use std::process::exit;

use rill_vm::lang::ConsoleHost;
use rill_vm::{run_source, RillError};

fn main() {
    let source = match read_source() {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{}", err);
            exit(2);
        }
    };

    let mut host = ConsoleHost;
    match run_source(&source, &mut host) {
        Ok(()) => {}
        Err(RillError::Parse(err)) => {
            eprintln!("{}", err);
            exit(2);
        }
        Err(RillError::Eval(err)) => {
            eprintln!("{}: {}", err.category(), err);
            exit(1);
        }
    }
}

/// The program comes from the file named on the command line, or from stdin
/// when no file is given.
fn read_source() -> std::io::Result<String> {
    match std::env::args().nth(1) {
        Some(filename) => std::fs::read_to_string(filename),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
