//! Cursor primitives and the reusable grammar combinators

use super::*;

impl Parser {
    // =========================================================================
    // Combinators
    // =========================================================================

    /// Runs `rule`, rewinding the cursor to where it started if the rule fails.
    pub(crate) fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        let checkpoint = self.current;
        let result = rule(self);
        if result.is_err() && self.current != checkpoint {
            trace!(from = self.current, to = checkpoint, "backtrack");
            self.current = checkpoint;
        }
        result
    }

    /// Like [`Parser::attempt`], turning failure into `None`.
    pub(crate) fn optional<T>(&mut self, rule: impl FnOnce(&mut Self) -> ParseResult<T>) -> Option<T> {
        self.attempt(rule).ok()
    }

    /// Tries each alternative from the same position; the first success wins.
    pub(crate) fn first_of<T>(&mut self, alternatives: &[fn(&mut Self) -> ParseResult<T>]) -> ParseResult<T> {
        let mut deepest: Option<ParseError> = None;

        for alternative in alternatives {
            match self.attempt(*alternative) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if deepest.as_ref().map_or(true, |d| err.index >= d.index) {
                        deepest = Some(err);
                    }
                }
            }
        }

        Err(deepest.unwrap_or_else(|| self.furthest_error()))
    }

    /// Left-recursion elimination: parses `head`, then zero or more `tail`s,
    /// folding each into the accumulator with `combine` as soon as it is parsed.
    ///
    /// A `tail` that fails leaves the cursor after the last successful one.
    pub(crate) fn fold_left<T, R>(
        &mut self,
        head: impl FnOnce(&mut Self) -> ParseResult<T>,
        mut tail: impl FnMut(&mut Self) -> ParseResult<R>,
        combine: impl Fn(T, R) -> T,
    ) -> ParseResult<T> {
        let mut acc = head(self)?;

        loop {
            let before = self.current;
            match self.optional(&mut tail) {
                Some(rhs) if self.current > before => acc = combine(acc, rhs),
                _ => return Ok(acc),
            }
        }
    }

    /// One or more `item`s separated by any of `separators`.
    ///
    /// A trailing separator is left unconsumed for the caller.
    pub(crate) fn separated<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>,
        separators: &[TokenKind],
    ) -> ParseResult<Vec<T>> {
        let first = item(self)?;
        self.fold_left(
            move |_| Ok(vec![first]),
            |p| {
                p.expect_any(separators)?;
                item(p)
            },
            |mut items, next| {
                items.push(next);
                items
            },
        )
    }

    // =========================================================================
    // Token Matching
    // =========================================================================

    /// Consumes a token of `kind` or fails, recording the expectation.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<&Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.fail(kind.to_string()))
        }
    }

    pub(crate) fn expect_any(&mut self, kinds: &[TokenKind]) -> ParseResult<&Token> {
        if kinds.iter().any(|&kind| self.check(kind)) {
            return Ok(self.advance());
        }
        let mut err = None;
        for kind in kinds {
            err = Some(self.fail(kind.to_string()));
        }
        Err(err.unwrap_or_else(|| self.furthest_error()))
    }

    /// Consumes a token of `kind` if present.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            self.record_failure(kind.to_string());
            false
        }
    }

    pub(crate) fn eat_any(&mut self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|&kind| self.eat(kind))
    }

    pub(crate) fn expect_identifier(&mut self) -> ParseResult<String> {
        Ok(self.expect(TokenKind::Identifier)?.value.clone())
    }

    /// An identifier or any keyword, for positions where keywords are plain names.
    pub(crate) fn expect_word(&mut self) -> ParseResult<String> {
        if self.current_token().kind.is_word() {
            Ok(self.advance().value.clone())
        } else {
            Err(self.fail("property name"))
        }
    }

    pub(crate) fn expect_string_literal(&mut self) -> ParseResult<String> {
        Ok(self.expect(TokenKind::StringLiteral)?.value.clone())
    }

    // =========================================================================
    // Failure Tracking
    // =========================================================================

    /// Records that `expected` was wanted at the current token and builds the local error.
    pub(crate) fn fail(&mut self, expected: impl Into<String>) -> ParseError {
        let expected = expected.into();
        self.record_failure(expected.clone());
        self.error_at(self.current, vec![expected])
    }

    pub(crate) fn record_failure(&mut self, expected: String) {
        let index = self.current;
        if let Some(furthest) = self.furthest.as_mut() {
            if furthest.index > index {
                return;
            }
            if furthest.index == index {
                if !furthest.expected.contains(&expected) {
                    furthest.expected.push(expected);
                }
                return;
            }
        }
        self.furthest = Some(Failure {
            index,
            expected: vec![expected],
        });
    }

    /// The error for the deepest position any rule failed at.
    pub(crate) fn furthest_error(&self) -> ParseError {
        match &self.furthest {
            Some(failure) => self.error_at(failure.index, failure.expected.clone()),
            None => self.error_at(self.current, Vec::new()),
        }
    }

    pub(crate) fn error_at(&self, index: usize, expected: Vec<String>) -> ParseError {
        let token = self.token_at(index);
        let kind = if token.kind == TokenKind::Eof {
            ParseErrorKind::UnexpectedEndOfInput { expected }
        } else {
            ParseErrorKind::UnexpectedToken {
                found: describe(token),
                expected,
            }
        };

        ParseError {
            kind,
            span: token.span,
            index,
        }
    }

    /// Error for a stream the grammar stopped short of consuming.
    ///
    /// Prefers a failure that got further than the stopping point; otherwise the
    /// content at the stopping point is reported as trailing input.
    pub(crate) fn unconsumed_input_error(&self) -> ParseError {
        match &self.furthest {
            Some(failure) if failure.index > self.current => self.furthest_error(),
            _ => {
                let token = self.current_token();
                let expected = self
                    .furthest
                    .as_ref()
                    .filter(|failure| failure.index == self.current)
                    .map(|failure| failure.expected.clone())
                    .unwrap_or_default();
                ParseError {
                    kind: ParseErrorKind::TrailingInput {
                        found: describe(token),
                        expected,
                    },
                    span: token.span,
                    index: self.current,
                }
            }
        }
    }

    // =========================================================================
    // Utility Methods (Token Manipulation)
    // =========================================================================

    pub(crate) fn token_at(&self, index: usize) -> &Token {
        &self.tokens[index.min(self.tokens.len() - 1)]
    }

    pub(crate) fn current_token(&self) -> &Token {
        self.token_at(self.current)
    }

    pub(crate) fn previous_token(&self) -> &Token {
        self.token_at(self.current.saturating_sub(1))
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            let token = self.current_token();
            trace!(pos = self.current, kind = ?token.kind, text = %token.text, "advance");
            self.current += 1;
        }
        self.previous_token()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_token().kind == kind
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current_token().kind == TokenKind::Eof
    }
}

/// Human-readable description of a token for error messages.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Error => format!("invalid token ({})", token.value),
        TokenKind::Identifier | TokenKind::StringLiteral | TokenKind::NumberLiteral => {
            format!("{} {}", token.kind, token.text)
        }
        kind => kind.to_string(),
    }
}
