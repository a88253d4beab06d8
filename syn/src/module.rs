use super::FunctionDeclaration;

/// A parsed program: a flat list of top-level function declarations, in
/// source order. There is no top-level code outside of functions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub functions: Vec<FunctionDeclaration>,
}
