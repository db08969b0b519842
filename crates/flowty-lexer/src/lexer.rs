use flowty_ast::Span;
use tracing::trace;
use crate::token::{Token, TokenKind};

/// The lexer/tokenizer for Flow type annotations.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::str::CharIndices<'a>,
    current_pos: usize,
    current_char: Option<char>,
    file_id: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer from source code.
    pub fn new(source: &'a str) -> Self {
        Self::with_file_id(source, 0)
    }

    /// Creates a new lexer with a specific file ID.
    pub fn with_file_id(source: &'a str, file_id: usize) -> Self {
        let mut chars = source.char_indices();
        let current_char = chars.next().map(|(_, c)| c);
        Self {
            source,
            chars,
            current_pos: 0,
            current_char,
            file_id,
        }
    }

    /// Tokenizes the entire source code and returns all tokens, ending with `Eof`.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        trace!(count = tokens.len(), file_id = self.file_id, "tokenized");
        tokens
    }

    /// Gets the next token from the source.
    pub fn next_token(&mut self) -> Token {
        if let Some(error_token) = self.skip_whitespace_and_comments() {
            return error_token;
        }

        let start = self.current_pos;

        match self.current_char {
            None => self.make_token(TokenKind::Eof, start, String::new()),
            Some(ch) => match ch {
                '"' | '\'' => self.read_string_literal(ch),

                '0'..='9' => self.read_number(start),
                '-' if self.peek().map_or(false, |c| c.is_ascii_digit()) => {
                    self.advance();
                    self.read_number(start)
                }

                'a'..='z' | 'A'..='Z' | '_' | '$' => self.read_word(),

                '.' => self.read_dot(),
                '<' => self.single(TokenKind::Lt),
                '>' => self.single(TokenKind::Gt),
                '|' => self.single(TokenKind::Pipe),
                '?' => self.single(TokenKind::Question),
                '=' => self.single(TokenKind::Eq),
                '+' => self.single(TokenKind::Plus),
                '*' => self.single(TokenKind::Star),
                '(' => self.single(TokenKind::LParen),
                ')' => self.single(TokenKind::RParen),
                '{' => self.single(TokenKind::LBrace),
                '}' => self.single(TokenKind::RBrace),
                '[' => self.single(TokenKind::LBracket),
                ']' => self.single(TokenKind::RBracket),
                ';' => self.single(TokenKind::Semicolon),
                ',' => self.single(TokenKind::Comma),
                ':' => self.single(TokenKind::Colon),

                // Unicode identifiers
                _ if ch.is_alphabetic() => self.read_word(),

                _ => {
                    self.advance();
                    self.make_token(TokenKind::Error, start, format!("Unexpected character: {}", ch))
                }
            },
        }
    }

    // Helper methods

    fn advance(&mut self) {
        if let Some((pos, ch)) = self.chars.next() {
            self.current_pos = pos;
            self.current_char = Some(ch);
        } else {
            self.current_pos = self.source.len();
            self.current_char = None;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.clone().next().map(|(_, c)| c)
    }

    fn make_token(&self, kind: TokenKind, start: usize, value: String) -> Token {
        let text = self.source[start..self.current_pos].to_string();
        Token::new(kind, Span::new(start, self.current_pos, self.file_id), value, text)
    }

    /// Emits a one-character token whose value is its own text.
    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.current_pos;
        self.advance();
        let value = self.source[start..self.current_pos].to_string();
        self.make_token(kind, start, value)
    }

    fn skip_whitespace_and_comments(&mut self) -> Option<Token> {
        loop {
            match self.current_char {
                Some(ch) if ch.is_whitespace() => {
                    self.advance();
                }
                Some('/') => {
                    if self.peek() == Some('/') {
                        self.skip_single_line_comment();
                    } else if self.peek() == Some('*') {
                        let start = self.current_pos;
                        if !self.skip_multi_line_comment() {
                            return Some(self.make_token(
                                TokenKind::Error,
                                start,
                                "Unterminated multi-line comment".to_string(),
                            ));
                        }
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        None
    }

    fn skip_single_line_comment(&mut self) {
        // Skip //
        self.advance();
        self.advance();

        while let Some(ch) = self.current_char {
            if ch == '\n' {
                self.advance();
                break;
            }
            self.advance();
        }
    }

    fn skip_multi_line_comment(&mut self) -> bool {
        // Skip /*
        self.advance();
        self.advance();

        while let Some(ch) = self.current_char {
            if ch == '*' && self.peek() == Some('/') {
                self.advance(); // *
                self.advance(); // /
                return true;
            }
            self.advance();
        }
        false // Unterminated
    }

    fn read_string_literal(&mut self, quote: char) -> Token {
        let start = self.current_pos;
        self.advance(); // Skip opening quote

        let mut value = String::new();

        while let Some(ch) = self.current_char {
            if ch == quote {
                self.advance(); // Skip closing quote
                return self.make_token(TokenKind::StringLiteral, start, value);
            } else if ch == '\\' {
                self.advance();
                if let Some(escaped) = self.current_char {
                    match escaped {
                        'u' => {
                            self.advance();
                            value.push(self.read_hex_digits(4));
                        }
                        'x' => {
                            self.advance();
                            value.push(self.read_hex_digits(2));
                        }
                        _ => {
                            let unescaped = match escaped {
                                'n' => '\n',
                                'r' => '\r',
                                't' => '\t',
                                '0' => '\0',
                                _ => escaped,
                            };
                            value.push(unescaped);
                            self.advance();
                        }
                    }
                }
            } else if ch == '\n' {
                break;
            } else {
                value.push(ch);
                self.advance();
            }
        }

        self.make_token(TokenKind::Error, start, "Unterminated string literal".to_string())
    }

    /// Reads up to `count` hex digits; already positioned past `\u` or `\x`.
    fn read_hex_digits(&mut self, count: usize) -> char {
        let mut code = 0u32;
        for _ in 0..count {
            match self.current_char.and_then(|ch| ch.to_digit(16)) {
                Some(digit) => {
                    code = code * 16 + digit;
                    self.advance();
                }
                None => break,
            }
        }
        char::from_u32(code).unwrap_or('\u{FFFD}')
    }

    /// Reads a number literal; `start` may point at a leading `-` already consumed.
    fn read_number(&mut self, start: usize) -> Token {
        let mut value = self.source[start..self.current_pos].to_string();

        if self.current_char == Some('0') {
            let radix = match self.peek() {
                Some('x') | Some('X') => Some(16),
                Some('o') | Some('O') => Some(8),
                Some('b') | Some('B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                value.push('0');
                self.advance();
                if let Some(prefix) = self.current_char {
                    value.push(prefix.to_ascii_lowercase());
                }
                self.advance();
                self.read_digits(&mut value, |c| c.is_digit(radix));
                return self.make_token(TokenKind::NumberLiteral, start, value);
            }
        }

        self.read_digits(&mut value, |c| c.is_ascii_digit());

        if self.current_char == Some('.') && self.peek().map_or(false, |c| c.is_ascii_digit()) {
            value.push('.');
            self.advance();
            self.read_digits(&mut value, |c| c.is_ascii_digit());
        }

        if matches!(self.current_char, Some('e') | Some('E')) {
            value.push('e');
            self.advance();

            if let Some(sign @ ('+' | '-')) = self.current_char {
                value.push(sign);
                self.advance();
            }

            self.read_digits(&mut value, |c| c.is_ascii_digit());
        }

        self.make_token(TokenKind::NumberLiteral, start, value)
    }

    /// Appends digits accepted by `is_digit`, dropping `_` separators.
    fn read_digits(&mut self, value: &mut String, is_digit: impl Fn(char) -> bool) {
        while let Some(ch) = self.current_char {
            if is_digit(ch) {
                value.push(ch);
                self.advance();
            } else if ch == '_' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> Token {
        let start = self.current_pos;
        let mut value = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_alphanumeric() || ch == '_' || ch == '$' {
                value.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = TokenKind::keyword(&value).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, start, value)
    }

    fn read_dot(&mut self) -> Token {
        let start = self.current_pos;
        self.advance();

        if self.current_char == Some('.') && self.peek() == Some('.') {
            self.advance();
            self.advance();
            self.make_token(TokenKind::DotDotDot, start, "...".to_string())
        } else if self.current_char.map_or(false, |c| c.is_ascii_digit()) {
            // Number starting with dot (e.g., .5)
            let mut value = String::from("0.");
            self.read_digits(&mut value, |c| c.is_ascii_digit());
            self.make_token(TokenKind::NumberLiteral, start, value)
        } else {
            self.make_token(TokenKind::Dot, start, ".".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).tokenize().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keywords() {
        let source = "type export const require import as from null number string boolean true false";
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::Type);
        assert_eq!(tokens[1].kind, TokenKind::Export);
        assert_eq!(tokens[2].kind, TokenKind::Const);
        assert_eq!(tokens[3].kind, TokenKind::Require);
        assert_eq!(tokens[4].kind, TokenKind::Import);
        assert_eq!(tokens[5].kind, TokenKind::As);
        assert_eq!(tokens[6].kind, TokenKind::From);
        assert_eq!(tokens[7].kind, TokenKind::Null);
        assert_eq!(tokens[8].kind, TokenKind::Number);
        assert_eq!(tokens[9].kind, TokenKind::String);
        assert_eq!(tokens[10].kind, TokenKind::Boolean);
        assert_eq!(tokens[11].kind, TokenKind::True);
        assert_eq!(tokens[12].kind, TokenKind::False);
        assert_eq!(tokens[13].kind, TokenKind::Eof);
    }

    #[test]
    fn test_reserved_markers() {
        let source = "$ReadOnlyArray $ReadOnly $Keys $ReadOnlyFoo";
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::ReadOnlyArray);
        assert_eq!(tokens[1].kind, TokenKind::ReadOnly);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].value, "$Keys");
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_numbers() {
        let source = "123 45.67 0x1A 0o77 0b1010 1_000_000 -3 .5 1e10";
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize();

        assert!(tokens[..9].iter().all(|t| t.kind == TokenKind::NumberLiteral));
        assert_eq!(tokens[0].value, "123");
        assert_eq!(tokens[1].value, "45.67");
        assert_eq!(tokens[2].value, "0x1A");
        assert_eq!(tokens[3].value, "0o77");
        assert_eq!(tokens[4].value, "0b1010");
        assert_eq!(tokens[5].value, "1000000");
        assert_eq!(tokens[5].text, "1_000_000");
        assert_eq!(tokens[6].value, "-3");
        assert_eq!(tokens[6].text, "-3");
        assert_eq!(tokens[7].value, "0.5");
        assert_eq!(tokens[8].value, "1e10");
    }

    #[test]
    fn test_strings() {
        let source = r#""hello" 'world' 'it\'s' "a\nb""#;
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].value, "hello");
        assert_eq!(tokens[0].text, "\"hello\"");
        assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[1].value, "world");
        assert_eq!(tokens[1].text, "'world'");
        assert_eq!(tokens[2].value, "it's");
        assert_eq!(tokens[3].value, "a\nb");
    }

    #[test]
    fn test_unterminated_string() {
        let mut lexer = Lexer::new("'abc\n");
        let tokens = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].value, "Unterminated string literal");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("{| } ( ) [ ] < > | ? : , ; = + ... . *"),
            vec![
                TokenKind::LBrace,
                TokenKind::Pipe,
                TokenKind::RBrace,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Pipe,
                TokenKind::Question,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Eq,
                TokenKind::Plus,
                TokenKind::DotDotDot,
                TokenKind::Dot,
                TokenKind::Star,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_nested_generics_split() {
        assert_eq!(
            kinds("A<B<C>>"),
            vec![
                TokenKind::Identifier,
                TokenKind::Lt,
                TokenKind::Identifier,
                TokenKind::Lt,
                TokenKind::Identifier,
                TokenKind::Gt,
                TokenKind::Gt,
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("{||}"),
            vec![
                TokenKind::LBrace,
                TokenKind::Pipe,
                TokenKind::Pipe,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments() {
        let source = r#"
            /* @flow */
            // Single line comment
            type A = number;
            /* Multi-line
               comment */
            export type B = A;
        "#;
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::Type);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].kind, TokenKind::Eq);
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert_eq!(tokens[4].kind, TokenKind::Semicolon);
        assert_eq!(tokens[5].kind, TokenKind::Export);
    }

    #[test]
    fn test_unterminated_comment() {
        let mut lexer = Lexer::new("type /* never closed");
        let tokens = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::Type);
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].value, "Unterminated multi-line comment");
    }

    #[test]
    fn test_unexpected_character() {
        let mut lexer = Lexer::new("A & B");
        let tokens = lexer.tokenize();

        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].value, "Unexpected character: &");
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_spans() {
        let mut lexer = Lexer::with_file_id("type Foo", 3);
        let tokens = lexer.tokenize();

        assert_eq!(tokens[0].span, Span::new(0, 4, 3));
        assert_eq!(tokens[1].span, Span::new(5, 8, 3));
        assert_eq!(tokens[2].span, Span::new(8, 8, 3));
    }
}
