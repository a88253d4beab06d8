use rill_syn::ParseError;
use thiserror::Error;

mod eval_error;
pub use eval_error::*;

/// Anything that can stop a run that started from source text.
#[derive(Debug, Error)]
pub enum RillError {
    #[error("{0}")]
    Parse(Box<ParseError>),
    #[error("{0}")]
    Eval(#[from] EvalError),
}

impl From<ParseError> for RillError {
    fn from(err: ParseError) -> Self {
        Self::Parse(Box::new(err))
    }
}
