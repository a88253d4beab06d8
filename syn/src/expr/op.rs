use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOperator {
    // Precedence level 0
    Or,
    // Precedence level 1
    And,
    // Precedence level 2
    Equals,
    NotEquals,
    // Precedence level 3
    Less,
    Greater,
    LessOrEquals,
    GreaterOrEquals,
    // Precedence level 4
    Plus,
    Minus,
    // Precedence level 5
    Mul,
    Div,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOperator {
    Not,
    Neg,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessOrEquals => "<=",
            Self::GreaterOrEquals => ">=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
        .fmt(f)
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => '!',
            Self::Neg => '-',
        }
        .fmt(f)
    }
}
