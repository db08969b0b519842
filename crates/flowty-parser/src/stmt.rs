//! Statement parsing

use super::*;

impl Parser {
    /// Tries each statement form in priority order; the first that matches wins.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Node<Statement>> {
        let start = self.current_token().span;

        let statement = self.first_of(&[
            Self::parse_type_alias_statement,
            Self::parse_import_equal,
            Self::parse_import_as,
            Self::parse_import_names,
            Self::parse_use_strict,
        ])?;

        let span = start.merge(&self.previous_token().span);
        debug!(start = span.start, end = span.end, statement = statement_name(&statement), "statement");
        Ok(Node::new(statement, span))
    }

    fn parse_type_alias_statement(&mut self) -> ParseResult<Statement> {
        self.parse_type_alias_declaration().map(Statement::TypeAlias)
    }

    /// const name = require('source');
    fn parse_import_equal(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::Const)?;
        let name = self.expect_identifier()?;
        self.expect(TokenKind::Eq)?;
        self.expect(TokenKind::Require)?;
        self.expect(TokenKind::LParen)?;
        let source = self.expect_string_literal()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Statement::ImportEqual { name, source })
    }

    /// import * as name from 'source';
    fn parse_import_as(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::Import)?;
        self.expect(TokenKind::Star)?;
        self.expect(TokenKind::As)?;
        let name = self.expect_identifier()?;
        self.expect(TokenKind::From)?;
        let source = self.expect_string_literal()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Statement::ImportAs { name, source })
    }

    /// import [type] { a, b } from 'source';
    fn parse_import_names(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::Import)?;
        self.eat(TokenKind::Type);
        self.expect(TokenKind::LBrace)?;
        let names = self.separated(Self::expect_identifier, &[TokenKind::Comma])?;
        self.eat(TokenKind::Comma);
        self.expect(TokenKind::RBrace)?;
        self.expect(TokenKind::From)?;
        let source = self.expect_string_literal()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Statement::ImportName { names, source })
    }

    /// 'use strict';
    fn parse_use_strict(&mut self) -> ParseResult<Statement> {
        if self.check(TokenKind::StringLiteral) && self.current_token().value == "use strict" {
            self.advance();
        } else {
            return Err(self.fail("'use strict'"));
        }
        self.expect(TokenKind::Semicolon)?;

        Ok(Statement::UseStrict)
    }
}

fn statement_name(statement: &Statement) -> &'static str {
    match statement {
        Statement::TypeAlias(_) => "type alias",
        Statement::UseStrict => "use strict",
        Statement::ImportEqual { .. } => "require import",
        Statement::ImportAs { .. } => "namespace import",
        Statement::ImportName { .. } => "named import",
    }
}
