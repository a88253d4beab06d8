use rill_syn::Statement;

use crate::lang::{Context, ControlFlow, Value};
use crate::{eval_expr, eval_fn_call, EvalError};

mod conditional;
pub(crate) use conditional::*;

mod while_loop;
pub(crate) use while_loop::*;

pub(crate) fn eval_stmnt(statement: &Statement, ctx: &mut Context) -> Result<ControlFlow, EvalError> {
    match statement {
        Statement::Assignment(assignment) => {
            let value = eval_expr(&assignment.value, ctx)?;
            ctx.assign(&assignment.name, value);
            Ok(ControlFlow::Continue)
        }
        Statement::FunctionCall(call) => {
            // Statement position discards the call's value.
            eval_fn_call(call, ctx)?;
            Ok(ControlFlow::Continue)
        }
        Statement::Return(expression) => {
            let value = match expression {
                Some(expression) => eval_expr(expression, ctx)?,
                None => Value::Nil,
            };
            Ok(ControlFlow::Return(value))
        }
        Statement::If(conditional) => eval_conditional(conditional, ctx),
        Statement::While(while_loop) => eval_while_loop(while_loop, ctx),
    }
}
