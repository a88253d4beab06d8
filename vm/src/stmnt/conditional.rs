use rill_error::TypeError;
use rill_syn::Conditional;

use crate::lang::{Context, ControlFlow, Value};
use crate::{eval_block, eval_expr, EvalError};

/// The taken branch runs in a fresh frame, which is discarded afterwards.
/// The frame is pushed even when no branch runs, so both branches and the
/// no-op case leave the scope stack identical.
pub(crate) fn eval_conditional(
    conditional: &Conditional,
    ctx: &mut Context,
) -> Result<ControlFlow, EvalError> {
    let condition = match eval_expr(&conditional.condition, ctx)? {
        Value::Bool(val) => val,
        value => {
            return Err(TypeError::Condition {
                construct: "if",
                kind: value.kind(),
            }
            .into())
        }
    };

    ctx.push_frame();
    let flow = if condition {
        eval_block(&conditional.body, ctx)
    } else if let Some(else_body) = &conditional.else_body {
        eval_block(else_body, ctx)
    } else {
        Ok(ControlFlow::Continue)
    };
    ctx.pop_frame();
    flow
}
