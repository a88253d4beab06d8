use rill_lex::Ident;

use crate::Expression;

/// `name = expr;` — the language has no declaration statement; assignment
/// either updates an existing binding somewhere in the active scope chain or
/// introduces one in the innermost scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: Ident,
    pub value: Expression,
}
