use std::fmt;

pub use rill_error::ValueKind;

/// A first-class runtime value. Equality is the language's `==`: values of
/// different kinds compare unequal rather than erroring.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    String(String),
    Bool(bool),
    Nil,
}

impl Default for Value {
    fn default() -> Self {
        Self::Nil
    }
}

impl Value {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::String(_) => ValueKind::String,
            Self::Bool(_) => ValueKind::Bool,
            Self::Nil => ValueKind::Nil,
        }
    }
}

/// Stringification as seen by `print`: integers in decimal, strings without
/// quotes, booleans lowercase, nil as `nil`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(num) => num.fmt(f),
            Self::String(str) => str.fmt(f),
            Self::Bool(val) => val.fmt(f),
            Self::Nil => "nil".fmt(f),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Value {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        match u8::arbitrary(g) % 4 {
            0 => Self::Int(i64::arbitrary(g)),
            1 => Self::String(String::arbitrary(g)),
            2 => Self::Bool(bool::arbitrary(g)),
            _ => Self::Nil,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Self::Int(num) => Box::new(num.shrink().map(Self::Int)),
            Self::String(str) => Box::new(str.shrink().map(Self::String)),
            Self::Bool(val) => Box::new(val.shrink().map(Self::Bool)),
            Self::Nil => quickcheck::empty_shrinker(),
        }
    }
}
