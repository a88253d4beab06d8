#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod module;
pub use module::*;

mod fn_decl;
pub use fn_decl::*;

mod stmnt;
pub use stmnt::*;

mod expr;
pub use expr::*;

mod parser;
pub use parser::{rill_parser, ParseError};
