//! Error reporting with ariadne

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use flowty_lexer::{Token, TokenKind};
use flowty_parser::ParseError;
use std::io;

/// One reportable problem in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: &'static str,
    pub title: &'static str,
    pub message: String,
    pub start: usize,
    pub end: usize,
}

impl Diagnostic {
    pub fn from_lexer_errors(tokens: &[Token]) -> Vec<Diagnostic> {
        tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Error)
            .map(|token| Diagnostic {
                code: "E0001",
                title: "Lexical error",
                message: token.value.clone(),
                start: token.span.start,
                end: token.span.end,
            })
            .collect()
    }

    pub fn from_parse_error(err: &ParseError) -> Diagnostic {
        Diagnostic {
            code: "E1000",
            title: "Parse error",
            message: err.kind.to_string(),
            start: err.span.start,
            end: err.span.end,
        }
    }

    fn build<'a>(&self, filename: &'a str, color: bool) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
        let span = (filename, self.start..self.end.max(self.start));
        let label = Label::new(span.clone()).with_message(&self.message);
        let label = if color { label.with_color(Color::Red) } else { label };

        Report::build(ReportKind::Error, span)
            .with_config(Config::default().with_color(color))
            .with_code(self.code)
            .with_message(self.title)
            .with_label(label)
            .finish()
    }
}

/// Prints a coloured report to stderr.
pub fn report(diagnostic: &Diagnostic, filename: &str, source: &str) -> io::Result<()> {
    diagnostic
        .build(filename, true)
        .eprint((filename, Source::from(source)))
}

/// Renders an uncoloured report into a string.
pub fn render(diagnostic: &Diagnostic, filename: &str, source: &str) -> io::Result<String> {
    let mut buffer = Vec::new();
    diagnostic
        .build(filename, false)
        .write((filename, Source::from(source)), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowty_lexer::Lexer;

    #[test]
    fn test_lexer_diagnostics() {
        let tokens = Lexer::new("type A = B & C;").tokenize();
        let diagnostics = Diagnostic::from_lexer_errors(&tokens);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "E0001");
        assert_eq!(diagnostics[0].start, 11);
        assert_eq!(diagnostics[0].message, "Unexpected character: &");
    }

    #[test]
    fn test_render_parse_error() {
        let source = "type A = ;";
        let err = match flowty_parser::parse(source) {
            Ok(program) => panic!("Expected failure, got {:?}", program),
            Err(err) => err,
        };
        let diagnostic = Diagnostic::from_parse_error(&err);
        let rendered = render(&diagnostic, "input.js", source).unwrap();

        assert_eq!(diagnostic.start, 9);
        assert!(rendered.contains("E1000"));
        assert!(rendered.contains("Parse error"));
        assert!(rendered.contains("input.js"));
        assert!(rendered.contains("unexpected ';'"));
    }
}
