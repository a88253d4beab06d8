use rill_lex::Ident;

use super::Expression;

/// A call is both a statement and an expression; as a statement its result
/// is discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: Ident,
    pub args: Vec<Expression>,
}

impl FunctionCall {
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}
