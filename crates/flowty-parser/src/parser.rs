//! Core Parser struct and the program assembler

use super::*;

/// Deepest failure seen so far: the token index and everything that was expected there.
#[derive(Debug, Clone)]
pub(crate) struct Failure {
    pub(crate) index: usize,
    pub(crate) expected: Vec<String>,
}

/// Backtracking recursive descent parser for Flow type annotations
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) current: usize,
    pub(crate) furthest: Option<Failure>,
}

impl Parser {
    /// Creates a new parser from a token stream.
    ///
    /// An `Eof` token is appended if the stream does not already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map_or(true, |t| t.kind != TokenKind::Eof) {
            let end = tokens.last().map_or(Span::default(), |t| {
                Span::new(t.span.end, t.span.end, t.span.file_id)
            });
            tokens.push(Token {
                kind: TokenKind::Eof,
                span: end,
                value: String::new(),
                text: String::new(),
            });
        }

        Self {
            tokens,
            current: 0,
            furthest: None,
        }
    }

    /// Parses a complete program; the whole token stream must be consumed.
    pub fn parse_program(&mut self) -> Result<FlowProgram, ParseError> {
        let start_span = self.current_token().span;
        let statements = self.parse_statements();

        if !self.is_at_end() {
            let err = self.unconsumed_input_error();
            debug!(index = err.index, error = %err, "program rejected");
            return Err(err);
        }

        let span = match statements.last() {
            Some(last) => start_span.merge(&last.span),
            None => start_span,
        };
        debug!(statements = statements.len(), "parsed program");

        Ok(FlowProgram { statements, span })
    }

    /// Parses a single type expression; the whole token stream must be consumed.
    pub fn parse_type_expression(&mut self) -> ParseResult<Type> {
        let ty = match self.parse_type() {
            Ok(ty) => ty,
            Err(_) => return Err(self.furthest_error()),
        };

        if self.is_at_end() {
            Ok(ty)
        } else {
            self.record_failure(TokenKind::Eof.to_string());
            Err(self.unconsumed_input_error())
        }
    }

    /// Applies the statement parser until it no longer matches, in encounter order.
    ///
    /// Stops without error; whatever remains is left for the caller to judge.
    pub(crate) fn parse_statements(&mut self) -> Vec<Node<Statement>> {
        let mut statements = Vec::new();
        while let Some(statement) = self.optional(Self::parse_statement) {
            statements.push(statement);
        }
        statements
    }
}
