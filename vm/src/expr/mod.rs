use rill_syn::Expression;

use crate::lang::{Context, Value};
use crate::EvalError;

mod binary_op;
pub(crate) use binary_op::*;

mod unary_op;
pub(crate) use unary_op::*;

mod fn_call;
pub(crate) use fn_call::*;

pub(crate) fn eval_expr(expr: &Expression, ctx: &mut Context) -> Result<Value, EvalError> {
    match expr {
        Expression::Int(num) => Ok(Value::Int(*num)),
        Expression::String(str) => Ok(Value::string(str.clone())),
        Expression::Bool(val) => Ok(Value::Bool(*val)),
        Expression::Nil => Ok(Value::Nil),
        Expression::Variable(name) => ctx.lookup(name),
        Expression::FunctionCall(call) => eval_fn_call(call, ctx),
        Expression::UnaryOperator { op, operand } => eval_unary_op(*op, operand, ctx),
        Expression::BinaryOperator { lhs, op, rhs } => eval_binary_op(*op, lhs, rhs, ctx),
    }
}
