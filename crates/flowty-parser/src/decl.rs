//! Declaration parsing

use super::*;

impl Parser {
    /// `[export] type Name = T;`, semicolon required.
    pub(crate) fn parse_type_alias_declaration(&mut self) -> ParseResult<TypeAliasDecl> {
        self.attempt(|p| {
            let has_export = p.eat(TokenKind::Export);
            p.expect(TokenKind::Type)?;
            let name = p.expect_identifier()?;
            p.expect(TokenKind::Eq)?;
            let aliased_type = p.parse_type()?;
            p.expect(TokenKind::Semicolon)?;

            Ok(TypeAliasDecl {
                has_export,
                name,
                aliased_type,
            })
        })
    }
}
