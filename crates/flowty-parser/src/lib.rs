//! # Flowty Parser
//!
//! Backtracking recursive descent parser for Flow type annotations.
//! Every rule either succeeds and advances the cursor, or fails and leaves it
//! where it was, so alternatives can be retried from the same position.
//! Left-recursive levels (array suffixes, unions) go through one
//! `fold_left` combinator instead of hand-written loops.

use flowty_ast::*;
use flowty_lexer::{Lexer, Token, TokenKind};
use tracing::{debug, trace};

// Module declarations
mod error;
mod parser;
mod stmt;
mod types;
mod decl;
mod helpers;

// Re-export public types
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use parser::Parser;

use parser::Failure;

/// Lexes and parses a whole source file.
pub fn parse(source: &str) -> Result<FlowProgram, ParseError> {
    let tokens = Lexer::new(source).tokenize();
    Parser::new(tokens).parse_program()
}

/// Lexes and parses a lone type expression.
pub fn parse_type(source: &str) -> Result<Type, ParseError> {
    let tokens = Lexer::new(source).tokenize();
    Parser::new(tokens).parse_type_expression()
}

// =============================================================================
// Tests
// =============================================================================
