use std::collections::HashMap;

use rill_error::{EvalError, FaultError, NameError};
use rill_lex::Ident;

use super::{FunctionTable, Host, Value};

/// Nested non-builtin calls allowed before execution is aborted; a guard
/// against exhausting the native stack.
pub const RECURSION_LIMIT: usize = 100;

#[derive(Debug, Default)]
struct Frame(HashMap<String, Value>);

/// The whole mutable state of one program run: the function table, the
/// scope stack, the call depth, and the console handle. A single scope
/// stack spans all active calls, so a callee can read and update its
/// callers' variables.
pub struct Context<'p, 'h> {
    functions: FunctionTable<'p>,
    frames: Vec<Frame>,
    depth: usize,
    host: &'h mut dyn Host,
}

impl<'p, 'h> Context<'p, 'h> {
    pub fn new(functions: FunctionTable<'p>, host: &'h mut dyn Host) -> Self {
        Self {
            functions,
            frames: Vec::new(),
            depth: 0,
            host,
        }
    }

    pub(crate) fn functions(&self) -> &FunctionTable<'p> {
        &self.functions
    }

    pub(crate) fn host(&mut self) -> &mut dyn Host {
        self.host
    }

    pub(crate) fn push_frame(&mut self) {
        self.frames.push(Frame::default());
    }

    pub(crate) fn pop_frame(&mut self) {
        self.frames.pop().expect("pop without a matching push");
    }

    /// Call-boundary bookkeeping: the depth check plus the fresh call frame.
    pub(crate) fn enter_call(&mut self) -> Result<(), EvalError> {
        if self.depth == RECURSION_LIMIT {
            return Err(FaultError::RecursionDepthExceeded.into());
        }
        self.depth += 1;
        self.push_frame();
        Ok(())
    }

    pub(crate) fn exit_call(&mut self) {
        self.pop_frame();
        self.depth -= 1;
    }

    /// Binds a name directly in the innermost frame, bypassing the scope
    /// scan. Used for parameters, which must never overwrite a caller's
    /// variable of the same name.
    pub(crate) fn declare(&mut self, name: &Ident, value: Value) {
        let frame = self.frames.last_mut().expect("no active frame");
        frame.0.insert(name.as_ref().to_string(), value);
    }

    /// Updates the innermost existing binding of `name`, anywhere in the
    /// active scope stack; if there is none, introduces the binding in the
    /// innermost frame.
    pub(crate) fn assign(&mut self, name: &Ident, value: Value) {
        for frame in self.frames.iter_mut().rev() {
            if let Some(slot) = frame.0.get_mut(name.as_ref()) {
                *slot = value;
                return;
            }
        }
        self.declare(name, value);
    }

    pub(crate) fn lookup(&self, name: &Ident) -> Result<Value, EvalError> {
        for frame in self.frames.iter().rev() {
            if let Some(value) = frame.0.get(name.as_ref()) {
                return Ok(value.clone());
            }
        }
        Err(NameError::UnknownVariable(name.clone()).into())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lang::ScriptedHost;
    use rill_syn::Program;

    fn one_function_program() -> Program {
        rill_syn::rill_parser::program("func main() {}").unwrap()
    }

    #[test]
    fn lookup_of_an_unbound_name_is_a_name_error() {
        let program = one_function_program();
        let mut host = ScriptedHost::new();
        let mut ctx = Context::new(FunctionTable::load(&program).unwrap(), &mut host);
        ctx.push_frame();

        let err = ctx.lookup(&Ident::new("x")).unwrap_err();
        assert_eq!(err.to_string(), "Unknown variable: x");
    }

    #[test]
    fn assignment_updates_an_enclosing_binding() {
        let program = one_function_program();
        let mut host = ScriptedHost::new();
        let mut ctx = Context::new(FunctionTable::load(&program).unwrap(), &mut host);
        let x = Ident::new("x");

        ctx.push_frame();
        ctx.assign(&x, Value::Int(1));
        ctx.push_frame();
        ctx.assign(&x, Value::Int(2));
        ctx.pop_frame();

        assert_eq!(ctx.lookup(&x).unwrap(), Value::Int(2));
    }

    #[test]
    fn declare_shadows_instead_of_updating() {
        let program = one_function_program();
        let mut host = ScriptedHost::new();
        let mut ctx = Context::new(FunctionTable::load(&program).unwrap(), &mut host);
        let x = Ident::new("x");

        ctx.push_frame();
        ctx.assign(&x, Value::Int(1));
        ctx.push_frame();
        ctx.declare(&x, Value::Int(2));

        assert_eq!(ctx.lookup(&x).unwrap(), Value::Int(2));
        ctx.pop_frame();
        assert_eq!(ctx.lookup(&x).unwrap(), Value::Int(1));
    }

    #[test]
    fn popping_a_frame_discards_its_bindings() {
        let program = one_function_program();
        let mut host = ScriptedHost::new();
        let mut ctx = Context::new(FunctionTable::load(&program).unwrap(), &mut host);
        let x = Ident::new("x");

        ctx.push_frame();
        ctx.push_frame();
        ctx.assign(&x, Value::Int(1));
        ctx.pop_frame();

        assert!(ctx.lookup(&x).is_err());
    }

    #[test]
    #[should_panic(expected = "pop without a matching push")]
    fn popping_past_the_call_boundary_is_fatal() {
        let program = one_function_program();
        let mut host = ScriptedHost::new();
        let mut ctx = Context::new(FunctionTable::load(&program).unwrap(), &mut host);
        ctx.pop_frame();
    }

    #[quickcheck]
    fn any_valid_name_round_trips_through_the_scope_stack(name: Ident, num: i64) -> bool {
        let program = one_function_program();
        let mut host = ScriptedHost::new();
        let mut ctx = Context::new(FunctionTable::load(&program).unwrap(), &mut host);
        ctx.push_frame();
        ctx.assign(&name, Value::Int(num));
        ctx.lookup(&name).unwrap() == Value::Int(num)
    }

    #[test]
    fn calls_past_the_recursion_limit_fault() {
        let program = one_function_program();
        let mut host = ScriptedHost::new();
        let mut ctx = Context::new(FunctionTable::load(&program).unwrap(), &mut host);

        for _ in 0..RECURSION_LIMIT {
            ctx.enter_call().unwrap();
        }
        let err = ctx.enter_call().unwrap_err();
        assert_eq!(err.to_string(), "Recursion depth exceeded");
    }
}
