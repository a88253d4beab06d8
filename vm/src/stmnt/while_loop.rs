use rill_error::TypeError;
use rill_syn::{Expression, WhileLoop};

use crate::lang::{Context, ControlFlow, Value};
use crate::{eval_block, eval_expr, EvalError};

/// One frame covers the whole loop: bindings introduced in the body persist
/// across iterations. The condition is re-evaluated and re-type-checked on
/// every pass.
pub(crate) fn eval_while_loop(
    while_loop: &WhileLoop,
    ctx: &mut Context,
) -> Result<ControlFlow, EvalError> {
    let mut run = condition_holds(&while_loop.condition, ctx)?;

    ctx.push_frame();
    let flow = loop {
        if !run {
            break Ok(ControlFlow::Continue);
        }
        match eval_block(&while_loop.body, ctx) {
            Ok(ControlFlow::Continue) => {}
            Ok(ControlFlow::Return(value)) => break Ok(ControlFlow::Return(value)),
            Err(err) => break Err(err),
        }
        run = match condition_holds(&while_loop.condition, ctx) {
            Ok(run) => run,
            Err(err) => break Err(err),
        };
    };
    ctx.pop_frame();
    flow
}

fn condition_holds(condition: &Expression, ctx: &mut Context) -> Result<bool, EvalError> {
    match eval_expr(condition, ctx)? {
        Value::Bool(val) => Ok(val),
        value => Err(TypeError::Condition {
            construct: "while",
            kind: value.kind(),
        }
        .into()),
    }
}
