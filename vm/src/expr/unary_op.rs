use rill_error::TypeError;
use rill_syn::{Expression, UnaryOperator};

use crate::lang::{Context, Value};
use crate::{eval_expr, EvalError};

pub(crate) fn eval_unary_op(
    op: UnaryOperator,
    operand: &Expression,
    ctx: &mut Context,
) -> Result<Value, EvalError> {
    let operand = eval_expr(operand, ctx)?;
    match (op, operand) {
        (UnaryOperator::Not, Value::Bool(val)) => Ok(Value::Bool(!val)),
        (UnaryOperator::Neg, Value::Int(num)) => Ok(Value::Int(num.wrapping_neg())),
        (op, operand) => Err(TypeError::Unary {
            op,
            kind: operand.kind(),
        }
        .into()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lang::{FunctionTable, ScriptedHost};

    fn eval(op: UnaryOperator, operand: Expression) -> Result<Value, EvalError> {
        let program = rill_syn::rill_parser::program("func main() {}").unwrap();
        let mut host = ScriptedHost::new();
        let mut ctx = Context::new(FunctionTable::load(&program).unwrap(), &mut host);
        ctx.push_frame();
        eval_unary_op(op, &operand, &mut ctx)
    }

    #[test]
    fn not_flips_booleans() {
        assert_eq!(
            eval(UnaryOperator::Not, Expression::Bool(true)).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn neg_negates_integers() {
        assert_eq!(
            eval(UnaryOperator::Neg, Expression::Int(5)).unwrap(),
            Value::Int(-5)
        );
    }

    #[test]
    fn neg_of_int_min_wraps() {
        assert_eq!(
            eval(UnaryOperator::Neg, Expression::Int(i64::MIN)).unwrap(),
            Value::Int(i64::MIN)
        );
    }

    #[test]
    fn mismatched_operand_is_a_type_error() {
        let err = eval(UnaryOperator::Not, Expression::Int(1)).unwrap_err();
        assert_eq!(err.to_string(), "Type mismatch on unary operation '!': int");
    }
}
