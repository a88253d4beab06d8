use rill_error::{FaultError, TypeError};
use rill_syn::{BinaryOperator, Expression};

use crate::lang::{Context, Value};
use crate::{eval_expr, EvalError};

pub(crate) fn eval_binary_op(
    op: BinaryOperator,
    lhs: &Expression,
    rhs: &Expression,
    ctx: &mut Context,
) -> Result<Value, EvalError> {
    // Both operands are always evaluated: `&&` and `||` do not short-circuit,
    // and `==`/`!=` need both values even across kinds.
    let lhs = eval_expr(lhs, ctx)?;
    let rhs = eval_expr(rhs, ctx)?;

    // Equality never type-errors: values of different kinds are unequal.
    match op {
        BinaryOperator::Equals => return Ok(Value::Bool(lhs == rhs)),
        BinaryOperator::NotEquals => return Ok(Value::Bool(lhs != rhs)),
        _ => {}
    }

    if lhs.kind() != rhs.kind() {
        return Err(TypeError::BinaryMismatch {
            op,
            lhs: lhs.kind(),
            rhs: rhs.kind(),
        }
        .into());
    }

    match (op, lhs, rhs) {
        (BinaryOperator::Plus, Value::Int(lhs), Value::Int(rhs)) => {
            Ok(Value::Int(lhs.wrapping_add(rhs)))
        }
        (BinaryOperator::Plus, Value::String(lhs), Value::String(rhs)) => {
            Ok(Value::String(lhs + &rhs))
        }
        (BinaryOperator::Minus, Value::Int(lhs), Value::Int(rhs)) => {
            Ok(Value::Int(lhs.wrapping_sub(rhs)))
        }
        (BinaryOperator::Mul, Value::Int(lhs), Value::Int(rhs)) => {
            Ok(Value::Int(lhs.wrapping_mul(rhs)))
        }
        (BinaryOperator::Div, Value::Int(_), Value::Int(0)) => {
            Err(FaultError::DivisionByZero.into())
        }
        (BinaryOperator::Div, Value::Int(lhs), Value::Int(rhs)) => {
            Ok(Value::Int(floor_div(lhs, rhs)))
        }
        (BinaryOperator::And, Value::Bool(lhs), Value::Bool(rhs)) => Ok(Value::Bool(lhs && rhs)),
        (BinaryOperator::Or, Value::Bool(lhs), Value::Bool(rhs)) => Ok(Value::Bool(lhs || rhs)),
        (BinaryOperator::Less, Value::Int(lhs), Value::Int(rhs)) => Ok(Value::Bool(lhs < rhs)),
        (BinaryOperator::Greater, Value::Int(lhs), Value::Int(rhs)) => Ok(Value::Bool(lhs > rhs)),
        (BinaryOperator::LessOrEquals, Value::Int(lhs), Value::Int(rhs)) => {
            Ok(Value::Bool(lhs <= rhs))
        }
        (BinaryOperator::GreaterOrEquals, Value::Int(lhs), Value::Int(rhs)) => {
            Ok(Value::Bool(lhs >= rhs))
        }
        (op, lhs, _) => Err(TypeError::UnsupportedOperands {
            op,
            kind: lhs.kind(),
        }
        .into()),
    }
}

/// Division rounds toward negative infinity whatever the signs, so
/// `-7 / 2 == -4` and `7 / -2 == -4`. `i64::MIN / -1` wraps like the other
/// arithmetic operators.
fn floor_div(lhs: i64, rhs: i64) -> i64 {
    if rhs == -1 {
        return lhs.wrapping_neg();
    }
    let quot = lhs / rhs;
    if lhs % rhs != 0 && (lhs < 0) != (rhs < 0) {
        quot - 1
    } else {
        quot
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lang::{FunctionTable, ScriptedHost};

    fn eval(op: BinaryOperator, lhs: Expression, rhs: Expression) -> Result<Value, EvalError> {
        let program = rill_syn::rill_parser::program("func main() {}").unwrap();
        let mut host = ScriptedHost::new();
        let mut ctx = Context::new(FunctionTable::load(&program).unwrap(), &mut host);
        ctx.push_frame();
        eval_binary_op(op, &lhs, &rhs, &mut ctx)
    }

    fn int(num: i64) -> Expression {
        Expression::Int(num)
    }

    fn string(str: &str) -> Expression {
        Expression::String(str.to_string())
    }

    #[test]
    fn integer_arithmetic() {
        assert_eq!(eval(BinaryOperator::Plus, int(2), int(3)).unwrap(), Value::Int(5));
        assert_eq!(eval(BinaryOperator::Minus, int(2), int(3)).unwrap(), Value::Int(-1));
        assert_eq!(eval(BinaryOperator::Mul, int(4), int(3)).unwrap(), Value::Int(12));
    }

    #[test]
    fn arithmetic_wraps_on_overflow() {
        assert_eq!(
            eval(BinaryOperator::Plus, int(i64::MAX), int(1)).unwrap(),
            Value::Int(i64::MIN)
        );
        assert_eq!(
            eval(BinaryOperator::Mul, int(i64::MIN), int(-1)).unwrap(),
            Value::Int(i64::MIN)
        );
    }

    #[test]
    fn division_floors_toward_negative_infinity() {
        assert_eq!(eval(BinaryOperator::Div, int(7), int(2)).unwrap(), Value::Int(3));
        assert_eq!(eval(BinaryOperator::Div, int(-7), int(2)).unwrap(), Value::Int(-4));
        assert_eq!(eval(BinaryOperator::Div, int(7), int(-2)).unwrap(), Value::Int(-4));
        assert_eq!(eval(BinaryOperator::Div, int(-7), int(-2)).unwrap(), Value::Int(3));
        assert_eq!(eval(BinaryOperator::Div, int(6), int(2)).unwrap(), Value::Int(3));
    }

    #[test]
    fn division_by_zero_is_a_fault() {
        let err = eval(BinaryOperator::Div, int(1), int(0)).unwrap_err();
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn division_of_int_min_by_minus_one_wraps() {
        assert_eq!(
            eval(BinaryOperator::Div, int(i64::MIN), int(-1)).unwrap(),
            Value::Int(i64::MIN)
        );
    }

    #[test]
    fn plus_concatenates_strings() {
        assert_eq!(
            eval(BinaryOperator::Plus, string("foo"), string("bar")).unwrap(),
            Value::string("foobar")
        );
    }

    #[test]
    fn equality_across_kinds_is_false_not_an_error() {
        assert_eq!(
            eval(BinaryOperator::Equals, int(1), string("1")).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            eval(BinaryOperator::NotEquals, Expression::Nil, Expression::Bool(false)).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn comparisons_are_integer_only() {
        assert_eq!(
            eval(BinaryOperator::Less, int(1), int(2)).unwrap(),
            Value::Bool(true)
        );
        let err = eval(BinaryOperator::Less, string("a"), string("b")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported type string for binary operator '<'"
        );
    }

    #[test]
    fn logic_requires_booleans() {
        assert_eq!(
            eval(BinaryOperator::And, Expression::Bool(true), Expression::Bool(false)).unwrap(),
            Value::Bool(false)
        );
        let err = eval(BinaryOperator::And, int(1), int(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported type int for binary operator '&&'"
        );
    }

    #[test]
    fn kind_mismatch_is_a_type_error() {
        let err = eval(BinaryOperator::Plus, int(1), string("1")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type mismatch on binary operation between int and string: +"
        );
    }
}
