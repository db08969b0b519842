use flowty_ast::Span;
use std::fmt;

/// Represents the different kinds of tokens in Flow type annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Type,
    Export,
    Const,
    Require,
    Import,
    As,
    From,
    Null,
    Number,
    String,
    Boolean,
    True,
    False,

    // Reserved generic markers
    ReadOnlyArray,     // $ReadOnlyArray
    ReadOnly,          // $ReadOnly

    // Literals
    NumberLiteral,
    StringLiteral,

    // Identifier
    Identifier,

    // Operators
    Lt,                // <
    Gt,                // >
    Pipe,              // |
    Question,          // ?
    Eq,                // =
    Plus,              // +
    Star,              // *
    DotDotDot,         // ...

    // Delimiters
    LParen,            // (
    RParen,            // )
    LBrace,            // {
    RBrace,            // }
    LBracket,          // [
    RBracket,          // ]
    Semicolon,         // ;
    Comma,             // ,
    Dot,               // .
    Colon,             // :

    // Special
    Eof,
    Error,
}

impl TokenKind {
    /// Maps a word to its keyword kind, if it is one.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "type" => TokenKind::Type,
            "export" => TokenKind::Export,
            "const" => TokenKind::Const,
            "require" => TokenKind::Require,
            "import" => TokenKind::Import,
            "as" => TokenKind::As,
            "from" => TokenKind::From,
            "null" => TokenKind::Null,
            "number" => TokenKind::Number,
            "string" => TokenKind::String,
            "boolean" => TokenKind::Boolean,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "$ReadOnlyArray" => TokenKind::ReadOnlyArray,
            "$ReadOnly" => TokenKind::ReadOnly,
            _ => return None,
        };
        Some(kind)
    }

    /// True for identifiers and every keyword, i.e. anything spelled as a word.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Type
                | TokenKind::Export
                | TokenKind::Const
                | TokenKind::Require
                | TokenKind::Import
                | TokenKind::As
                | TokenKind::From
                | TokenKind::Null
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::Boolean
                | TokenKind::True
                | TokenKind::False
                | TokenKind::ReadOnlyArray
                | TokenKind::ReadOnly
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Type => "'type'",
            TokenKind::Export => "'export'",
            TokenKind::Const => "'const'",
            TokenKind::Require => "'require'",
            TokenKind::Import => "'import'",
            TokenKind::As => "'as'",
            TokenKind::From => "'from'",
            TokenKind::Null => "'null'",
            TokenKind::Number => "'number'",
            TokenKind::String => "'string'",
            TokenKind::Boolean => "'boolean'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::ReadOnlyArray => "'$ReadOnlyArray'",
            TokenKind::ReadOnly => "'$ReadOnly'",
            TokenKind::NumberLiteral => "number literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::Pipe => "'|'",
            TokenKind::Question => "'?'",
            TokenKind::Eq => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Star => "'*'",
            TokenKind::DotDotDot => "'...'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Semicolon => "';'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::Colon => "':'",
            TokenKind::Eof => "end of input",
            TokenKind::Error => "invalid token",
        };
        f.write_str(text)
    }
}

/// Represents a token with its kind, span, cooked value and raw source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Cooked value: string contents with escapes resolved, the word itself,
    /// or the error message for `TokenKind::Error`.
    pub value: String,
    /// Source slice the token was read from, quotes included.
    pub text: String,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, span: Span, value: String, text: String) -> Self {
        Self { kind, span, value, text }
    }
}
