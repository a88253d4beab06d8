#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod lang;

mod builtins;

mod block;
pub(crate) use block::*;

mod expr;
pub(crate) use expr::*;

mod stmnt;
pub(crate) use stmnt::*;

mod program;
pub use program::*;

pub use rill_error::{
    ErrorCategory, EvalError, FaultError, NameError, RillError, TypeError, ValueKind,
};
