use std::collections::HashMap;

use rill_error::FaultError;
use rill_syn::{FunctionDeclaration, Program};

/// Function lookup keyed by `(name, arity)`, borrowing straight from the
/// program AST. Built once before execution starts; a later declaration
/// with the same key silently replaces an earlier one.
#[derive(Debug)]
pub struct FunctionTable<'p> {
    functions: HashMap<(&'p str, usize), &'p FunctionDeclaration>,
}

impl<'p> FunctionTable<'p> {
    pub fn load(program: &'p Program) -> Result<Self, FaultError> {
        if program.functions.is_empty() {
            return Err(FaultError::NoFunctions);
        }
        let mut functions = HashMap::new();
        for decl in &program.functions {
            functions.insert((decl.name.as_ref(), decl.arity()), decl);
        }
        Ok(Self { functions })
    }

    pub fn resolve(&self, name: &str, arity: usize) -> Option<&'p FunctionDeclaration> {
        self.functions.get(&(name, arity)).copied()
    }
}
