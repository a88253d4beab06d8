use logos::Logos;
use rill_lex::{Ident, IntLiteral, StringLiteral, Token};
use thiserror::Error;

use crate::{
    Assignment, BinaryOperator, Conditional, Expression, FunctionCall, FunctionDeclaration,
    Program, Statement, UnaryOperator, WhileLoop,
};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unrecognized token at byte {position}")]
    Lex { position: usize },
    #[error("Syntax error: {0}")]
    Syntax(#[from] peg::error::ParseError<usize>),
}

/// The external parser surface consumed by the evaluator: source text in,
/// AST out. The evaluator trusts the shape of the tree and never looks at
/// source text itself.
pub mod rill_parser {
    use super::*;

    pub fn program(source: &str) -> Result<Program, ParseError> {
        let tokens = tokenize(source)?;
        token_parser::program(&tokens).map_err(ParseError::from)
    }

    pub fn expression(source: &str) -> Result<Expression, ParseError> {
        let tokens = tokenize(source)?;
        token_parser::expression(&tokens).map_err(ParseError::from)
    }

    fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        for (token, span) in Token::lexer(source).spanned() {
            if token.is_err() {
                return Err(ParseError::Lex {
                    position: span.start,
                });
            }
            tokens.push(token);
        }
        Ok(tokens)
    }
}

fn fold_binary(lhs: Expression, rest: Vec<(BinaryOperator, Expression)>) -> Expression {
    rest.into_iter().fold(lhs, |lhs, (op, rhs)| {
        Expression::BinaryOperator {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    })
}

peg::parser! {
    grammar token_parser() for [Token] {
        pub rule program() -> Program
            = functions:fn_decl()* ![_] { Program { functions } }

        rule fn_decl() -> FunctionDeclaration
            = _:[Token::Func] name:ident()
              _:[Token::OpenRoundBracket] params:(ident() ** comma()) _:[Token::CloseRoundBracket]
              body:block()
            { FunctionDeclaration { name, params, body } }

        rule block() -> Vec<Statement>
            = _:[Token::OpenSquigglyBracket] statements:statement()* _:[Token::CloseSquigglyBracket]
            { statements }

        rule statement() -> Statement
            = conditional()
            / while_loop()
            / ret()
            / assignment()
            / call_statement()

        rule assignment() -> Statement
            = name:ident() _:[Token::Assignment] value:expression() _:[Token::Semicolon]
            { Statement::Assignment(Assignment { name, value }) }

        rule call_statement() -> Statement
            = call:fn_call() _:[Token::Semicolon] { Statement::FunctionCall(call) }

        rule ret() -> Statement
            = _:[Token::Return] value:expression()? _:[Token::Semicolon]
            { Statement::Return(value) }

        rule conditional() -> Statement
            = _:[Token::If] _:[Token::OpenRoundBracket] condition:expression() _:[Token::CloseRoundBracket]
              body:block() else_body:else_tail()?
            { Statement::If(Conditional { condition, body, else_body }) }

        rule else_tail() -> Vec<Statement>
            = _:[Token::Else] body:block() { body }

        rule while_loop() -> Statement
            = _:[Token::While] _:[Token::OpenRoundBracket] condition:expression() _:[Token::CloseRoundBracket]
              body:block()
            { Statement::While(WhileLoop { condition, body }) }

        rule fn_call() -> FunctionCall
            = name:ident() _:[Token::OpenRoundBracket] args:(expression() ** comma()) _:[Token::CloseRoundBracket]
            { FunctionCall { name, args } }

        // Binary operators are left-associative; each rule handles one
        // precedence level, loosest first.
        pub rule expression() -> Expression = or_expr()

        rule or_expr() -> Expression
            = lhs:and_expr() rest:(op:or_op() rhs:and_expr() { (op, rhs) })*
            { fold_binary(lhs, rest) }

        rule and_expr() -> Expression
            = lhs:equality_expr() rest:(op:and_op() rhs:equality_expr() { (op, rhs) })*
            { fold_binary(lhs, rest) }

        rule equality_expr() -> Expression
            = lhs:comparison_expr() rest:(op:equality_op() rhs:comparison_expr() { (op, rhs) })*
            { fold_binary(lhs, rest) }

        rule comparison_expr() -> Expression
            = lhs:additive_expr() rest:(op:comparison_op() rhs:additive_expr() { (op, rhs) })*
            { fold_binary(lhs, rest) }

        rule additive_expr() -> Expression
            = lhs:multiplicative_expr() rest:(op:additive_op() rhs:multiplicative_expr() { (op, rhs) })*
            { fold_binary(lhs, rest) }

        rule multiplicative_expr() -> Expression
            = lhs:unary_expr() rest:(op:multiplicative_op() rhs:unary_expr() { (op, rhs) })*
            { fold_binary(lhs, rest) }

        rule unary_expr() -> Expression
            = _:[Token::Not] operand:unary_expr()
            { Expression::UnaryOperator { op: UnaryOperator::Not, operand: Box::new(operand) } }
            / _:[Token::Minus] operand:unary_expr()
            { Expression::UnaryOperator { op: UnaryOperator::Neg, operand: Box::new(operand) } }
            / primary()

        rule primary() -> Expression
            = _:[Token::Nil] { Expression::Nil }
            / _:[Token::True] { Expression::Bool(true) }
            / _:[Token::False] { Expression::Bool(false) }
            / _:[Token::Int(IntLiteral(num))] { Expression::Int(num) }
            / _:[Token::String(StringLiteral(str))] { Expression::String(str) }
            / call:fn_call() { Expression::FunctionCall(call) }
            / name:ident() { Expression::Variable(name) }
            / _:[Token::OpenRoundBracket] e:expression() _:[Token::CloseRoundBracket] { e }

        rule or_op() -> BinaryOperator = _:[Token::Or] { BinaryOperator::Or }
        rule and_op() -> BinaryOperator = _:[Token::And] { BinaryOperator::And }

        rule equality_op() -> BinaryOperator
            = _:[Token::Equals] { BinaryOperator::Equals }
            / _:[Token::NotEquals] { BinaryOperator::NotEquals }

        rule comparison_op() -> BinaryOperator
            = _:[Token::LessOrEquals] { BinaryOperator::LessOrEquals }
            / _:[Token::GreaterOrEquals] { BinaryOperator::GreaterOrEquals }
            / _:[Token::Less] { BinaryOperator::Less }
            / _:[Token::Greater] { BinaryOperator::Greater }

        rule additive_op() -> BinaryOperator
            = _:[Token::Plus] { BinaryOperator::Plus }
            / _:[Token::Minus] { BinaryOperator::Minus }

        rule multiplicative_op() -> BinaryOperator
            = _:[Token::Mul] { BinaryOperator::Mul }
            / _:[Token::Div] { BinaryOperator::Div }

        rule ident() -> Ident = _:[Token::Ident(ident)] { ident }
        rule comma() = _:[Token::Comma]
    }
}
