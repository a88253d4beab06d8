use logos::Logos;

use super::{Ident, IntLiteral, StringLiteral};

/// Reserved words:
///     `else` `false` `func` `if` `nil` `return` `true` `while`
///
/// Other tokens:
///     `==` `!=` `<=` `>=` `<` `>` `=` `+` `-` `*` `/` `&&` `||` `!`
///     `(` `)` `{` `}` `,` `;`
///
/// Comments are denoted by `//` and continue until the end of the line.
///
/// Strings are delimited with double quotes and can contain `\n` `\t` `\"`
/// `\\` escape sequences. Integers are unsigned decimal digit runs.
#[derive(Clone, Debug, PartialEq, Logos)]
pub enum Token {
    #[error]
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    #[regex("//[^\n]*", logos::skip)]
    Error,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("func")]
    Func,
    #[token("if")]
    If,
    #[token("nil")]
    Nil,
    #[token("return")]
    Return,
    #[token("true")]
    True,
    #[token("while")]
    While,
    #[token("==")]
    Equals,
    #[token("!=")]
    NotEquals,
    #[token("<=")]
    LessOrEquals,
    #[token(">=")]
    GreaterOrEquals,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("=")]
    Assignment,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("&&")]
    And,
    #[token("||")]
    Or,
    #[token("!")]
    Not,
    #[token("(")]
    OpenRoundBracket,
    #[token(")")]
    CloseRoundBracket,
    #[token("{")]
    OpenSquigglyBracket,
    #[token("}")]
    CloseSquigglyBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    // SAFETY: This is the same regex used to check for identifier validity
    #[regex(r"[_a-zA-Z][_a-zA-Z0-9]*", |lex| unsafe { Ident::from_raw(lex.slice()) })]
    Ident(Ident),
    #[regex(r"[0-9]+", |lex| lex.slice().parse())]
    Int(IntLiteral),
    #[regex("\"(?:[^\"\\\\]|\\\\.)*\"", |lex| lex.slice().parse())]
    String(StringLiteral),
}

impl Token {
    pub fn is_err(&self) -> bool {
        matches!(self, Token::Error)
    }
}
