use rill_error::{FaultError, NameError};
use rill_syn::Expression;

use crate::lang::{Context, Value};
use crate::{eval_expr, EvalError};

/// `print(args...)`: stringify every argument, concatenate without a
/// separator, and emit the result in one write with no trailing newline.
pub(crate) fn print(args: &[Expression], ctx: &mut Context) -> Result<Value, EvalError> {
    let mut text = String::new();
    for arg in args {
        let value = eval_expr(arg, ctx)?;
        text.push_str(&value.to_string());
    }
    ctx.host().output(&text)?;
    Ok(Value::Nil)
}

/// `inputi([prompt])`: prompt-then-read, with the line parsed as an integer.
pub(crate) fn inputi(args: &[Expression], ctx: &mut Context) -> Result<Value, EvalError> {
    let line = read_line("inputi", args, ctx)?;
    match line.trim().parse() {
        Ok(num) => Ok(Value::Int(num)),
        Err(_) => Err(FaultError::InputNotInt(line).into()),
    }
}

/// `inputs([prompt])`: prompt-then-read, yielding the raw line.
pub(crate) fn inputs(args: &[Expression], ctx: &mut Context) -> Result<Value, EvalError> {
    read_line("inputs", args, ctx).map(Value::String)
}

/// The shared protocol of `inputi`/`inputs`: at most one prompt argument,
/// written without a trailing newline before the blocking read.
fn read_line(
    name: &'static str,
    args: &[Expression],
    ctx: &mut Context,
) -> Result<String, EvalError> {
    if args.len() > 1 {
        return Err(NameError::BuiltinArity { name }.into());
    }
    if let Some(prompt) = args.first() {
        let prompt = eval_expr(prompt, ctx)?.to_string();
        ctx.host().output(&prompt)?;
    }
    Ok(ctx.host().input()?)
}
