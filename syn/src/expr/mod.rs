use rill_lex::Ident;

mod fn_call;
pub use fn_call::*;

mod op;
pub use op::*;

/// The closed set of expression forms. Literals carry their decoded value;
/// the evaluator never re-parses source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Int(i64),
    String(String),
    Bool(bool),
    Nil,
    Variable(Ident),
    FunctionCall(FunctionCall),
    UnaryOperator {
        op: UnaryOperator,
        operand: Box<Expression>,
    },
    BinaryOperator {
        lhs: Box<Expression>,
        op: BinaryOperator,
        rhs: Box<Expression>,
    },
}
