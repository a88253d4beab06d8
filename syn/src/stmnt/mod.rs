use super::{Expression, FunctionCall};

mod assignment;
pub use assignment::*;

mod conditional;
pub use conditional::*;

mod while_loop;
pub use while_loop::*;

/// The closed set of statement forms. Dispatch in the executor is a `match`
/// over this enum, so there is no "unknown statement" case at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(Assignment),
    FunctionCall(FunctionCall),
    Return(Option<Expression>),
    If(Conditional),
    While(WhileLoop),
}
