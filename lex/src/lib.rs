mod ident;
mod int_literal;
mod string_literal;
mod token;

pub use ident::Ident;
pub use int_literal::IntLiteral;
pub use string_literal::StringLiteral;
pub use token::Token;
