use crate::{Expression, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub condition: Expression,
    pub body: Vec<Statement>,
    pub else_body: Option<Vec<Statement>>,
}
