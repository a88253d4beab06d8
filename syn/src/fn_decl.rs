use rill_lex::Ident;

use super::Statement;

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: Ident,
    pub params: Vec<Ident>,
    pub body: Vec<Statement>,
}

impl FunctionDeclaration {
    /// Functions are identified by `(name, arity)`; there is no overloading
    /// by parameter type and no default arguments.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
