use super::Value;

/// How a block of statements finished: fell through normally, or carries an
/// in-flight `return` payload that unwinds to the nearest call boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlFlow {
    Continue,
    Return(Value),
}

impl ControlFlow {
    /// Consumes the return signal at a function-call boundary. A body that
    /// fell off the end yields nil.
    pub fn function_return(self) -> Value {
        match self {
            Self::Continue => Value::Nil,
            Self::Return(value) => value,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn falling_off_the_end_returns_nil() {
        assert_eq!(ControlFlow::Continue.function_return(), Value::Nil);
    }

    #[test]
    fn explicit_return_keeps_its_payload() {
        assert_eq!(
            ControlFlow::Return(Value::Int(7)).function_return(),
            Value::Int(7)
        );
    }
}
