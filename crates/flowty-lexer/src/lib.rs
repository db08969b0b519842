//! # Flowty Lexer
//!
//! Token source for the Flow annotation parser. Produces classified tokens
//! (kind, cooked value, raw text, span) and never aborts: lexical problems
//! become `TokenKind::Error` tokens.

pub mod token;
pub mod lexer;

// Re-export all public types from modules
pub use token::{Token, TokenKind};
pub use lexer::Lexer;
