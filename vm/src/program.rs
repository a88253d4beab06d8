use rill_error::{NameError, RillError};
use rill_syn::Program;

use crate::expr::call_function;
use crate::lang::{Context, FunctionTable, Host};
use crate::EvalError;

/// Loads the program's functions, locates `main()`, and runs it to
/// completion or to the first fatal error. Everything the program observably
/// does goes through `host`.
pub fn run_program(program: &Program, host: &mut dyn Host) -> Result<(), EvalError> {
    let functions = FunctionTable::load(program)?;
    let main = functions
        .resolve("main", 0)
        .ok_or(NameError::MissingMain)?;
    let mut ctx = Context::new(functions, host);
    call_function(main, Vec::new(), &mut ctx)?;
    Ok(())
}

/// Parse-then-run convenience for callers that start from source text.
pub fn run_source(source: &str, host: &mut dyn Host) -> Result<(), RillError> {
    let program = rill_syn::rill_parser::program(source)?;
    run_program(&program, host)?;
    Ok(())
}
