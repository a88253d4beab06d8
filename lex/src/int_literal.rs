use std::{num::ParseIntError, str::FromStr};

#[cfg(feature = "quickcheck")]
use quickcheck::Arbitrary;

/// An unsigned decimal integer literal. Negative integers are spelled with
/// the unary `-` operator, so the literal itself always fits the grammar
/// `[0-9]+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntLiteral(pub i64);

impl FromStr for IntLiteral {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(IntLiteral)
    }
}

impl std::fmt::Display for IntLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "quickcheck")]
impl Arbitrary for IntLiteral {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        IntLiteral(i64::arbitrary(g).wrapping_abs().max(0))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().filter(|num| *num >= 0).map(IntLiteral))
    }
}
