use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "quickcheck")]
use quickcheck::Arbitrary;

/// A double-quoted string literal with `\n`, `\t`, `\"` and `\\` escapes.
/// The wrapped string is the decoded value, not the source spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringLiteral(pub String);

#[derive(Debug, Error)]
pub enum StringLiteralError {
    #[error("String literal is not delimited with double quotes")]
    Unterminated,
    #[error("Unknown escape sequence \\{0}")]
    UnknownEscape(char),
}

impl FromStr for StringLiteral {
    type Err = StringLiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .ok_or(StringLiteralError::Unterminated)?;

        let mut res = String::with_capacity(body.len());
        let mut chars = body.chars();
        while let Some(char) = chars.next() {
            if char != '\\' {
                res.push(char);
                continue;
            }
            match chars.next() {
                Some('n') => res.push('\n'),
                Some('t') => res.push('\t'),
                Some('"') => res.push('"'),
                Some('\\') => res.push('\\'),
                Some(char) => return Err(StringLiteralError::UnknownEscape(char)),
                None => return Err(StringLiteralError::Unterminated),
            }
        }
        Ok(StringLiteral(res))
    }
}

impl std::fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "quickcheck")]
impl Arbitrary for StringLiteral {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        StringLiteral(String::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(StringLiteral))
    }
}
