use rill_error::NameError;
use rill_syn::{FunctionCall, FunctionDeclaration};

use crate::lang::{Context, Value};
use crate::{builtins, eval_block, eval_expr, EvalError};

pub(crate) fn eval_fn_call(call: &FunctionCall, ctx: &mut Context) -> Result<Value, EvalError> {
    // Builtins are intercepted before user-function resolution, so a user
    // declaration can never shadow them.
    match call.name.as_ref() {
        "inputi" => return builtins::inputi(&call.args, ctx),
        "inputs" => return builtins::inputs(&call.args, ctx),
        "print" => return builtins::print(&call.args, ctx),
        _ => {}
    }

    let function = ctx
        .functions()
        .resolve(call.name.as_ref(), call.arity())
        .ok_or_else(|| NameError::UnknownFunction {
            name: call.name.clone(),
            arity: call.arity(),
        })?;

    // Arguments are evaluated left to right in the caller's scope, before
    // the callee's frame exists.
    let mut args = Vec::with_capacity(call.args.len());
    for arg in &call.args {
        args.push(eval_expr(arg, ctx)?);
    }
    call_function(function, args, ctx)
}

/// Invokes a resolved function: fresh call frame, parameters bound by value,
/// body run to completion. The return signal is consumed here; a body that
/// never returns yields nil.
pub(crate) fn call_function(
    function: &FunctionDeclaration,
    args: Vec<Value>,
    ctx: &mut Context,
) -> Result<Value, EvalError> {
    ctx.enter_call()?;
    for (param, value) in function.params.iter().zip(args) {
        ctx.declare(param, value);
    }
    let flow = eval_block(&function.body, ctx);
    ctx.exit_call();
    Ok(flow?.function_return())
}
