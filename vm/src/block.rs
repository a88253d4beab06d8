use rill_syn::Statement;

use crate::lang::{Context, ControlFlow};
use crate::{eval_stmnt, EvalError};

/// Runs statements in order in the current scope. A `return` anywhere in the
/// block stops execution and propagates outward; pushing and popping frames
/// is the caller's business.
pub(crate) fn eval_block(
    statements: &[Statement],
    ctx: &mut Context,
) -> Result<ControlFlow, EvalError> {
    for statement in statements {
        if let ControlFlow::Return(value) = eval_stmnt(statement, ctx)? {
            return Ok(ControlFlow::Return(value));
        }
    }
    Ok(ControlFlow::Continue)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lang::{FunctionTable, ScriptedHost, Value};

    #[test]
    fn a_return_stops_the_rest_of_the_block() {
        let program = rill_syn::rill_parser::program(
            "func main() {
                 x = 1;
                 return x;
                 x = 2;
             }",
        )
        .unwrap();
        let mut host = ScriptedHost::new();
        let mut ctx = Context::new(FunctionTable::load(&program).unwrap(), &mut host);
        ctx.push_frame();

        let flow = eval_block(&program.functions[0].body, &mut ctx).unwrap();
        assert_eq!(flow, ControlFlow::Return(Value::Int(1)));
    }

    #[test]
    fn a_block_without_return_continues() {
        let program = rill_syn::rill_parser::program("func main() { x = 1; y = 2; }").unwrap();
        let mut host = ScriptedHost::new();
        let mut ctx = Context::new(FunctionTable::load(&program).unwrap(), &mut host);
        ctx.push_frame();

        let flow = eval_block(&program.functions[0].body, &mut ctx).unwrap();
        assert_eq!(flow, ControlFlow::Continue);
    }
}
