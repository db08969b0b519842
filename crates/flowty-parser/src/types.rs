//! Type annotation parsing
//!
//! Three levels, loosest first: union (`A | B`), array (`T[]`), and the
//! primary terms. The union and array levels are left-recursive in the
//! grammar and are parsed with [`Parser::fold_left`].

use super::*;

/// An entry of an object type body before mixins are split from members.
enum ObjectEntry {
    Mixin(Type),
    Member(ObjectMember),
}

impl Parser {
    /// Full type expression: `[|] T (| T)*` where each `T` is an array-level type.
    pub(crate) fn parse_type(&mut self) -> ParseResult<Type> {
        self.attempt(|p| {
            p.eat(TokenKind::Pipe);
            p.fold_left(
                Self::parse_array_type,
                |p| {
                    p.expect(TokenKind::Pipe)?;
                    p.parse_array_type()
                },
                merge_union,
            )
        })
    }

    /// Primary term followed by any number of `[]` suffixes.
    pub(crate) fn parse_array_type(&mut self) -> ParseResult<Type> {
        self.fold_left(
            Self::parse_primary_type,
            |p| {
                p.expect(TokenKind::LBracket)?;
                p.expect(TokenKind::RBracket)?;
                Ok(())
            },
            |element, ()| Type::Array {
                element_type: Box::new(element),
                is_readonly: false,
            },
        )
    }

    /// One type term; consumes nothing on failure.
    pub(crate) fn parse_primary_type(&mut self) -> ParseResult<Type> {
        self.attempt(Self::parse_term)
    }

    fn parse_term(&mut self) -> ParseResult<Type> {
        let kind = self.current_token().kind;
        trace!(pos = self.current, ?kind, "parse_term");

        let ty = match kind {
            TokenKind::Null => self.primitive(PrimitiveType::Null),
            TokenKind::Number => self.primitive(PrimitiveType::Number),
            TokenKind::String => self.primitive(PrimitiveType::String),
            TokenKind::Boolean => self.primitive(PrimitiveType::Boolean),

            // Literal types keep their source spelling
            TokenKind::StringLiteral
            | TokenKind::NumberLiteral
            | TokenKind::True
            | TokenKind::False => Type::Literal(self.advance().text.clone()),

            // ?T never wraps another ?T
            TokenKind::Question => {
                self.advance();
                match self.parse_array_type()? {
                    optional @ Type::Optional(_) => optional,
                    other => Type::Optional(Box::new(other)),
                }
            }

            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_type()?;
                self.expect(TokenKind::RParen)?;
                Type::Paren(Box::new(inner))
            }

            TokenKind::ReadOnlyArray => {
                self.advance();
                Type::Array {
                    element_type: Box::new(self.parse_single_type_argument()?),
                    is_readonly: true,
                }
            }

            TokenKind::ReadOnly => {
                let name = self.advance().value.clone();
                Type::DecoratedGeneric {
                    name,
                    element_type: Box::new(self.parse_single_type_argument()?),
                }
            }

            TokenKind::Identifier => self.parse_type_reference()?,

            TokenKind::LBrace => self.parse_object_type()?,

            _ => return Err(self.fail("type")),
        };

        Ok(ty)
    }

    fn primitive(&mut self, primitive: PrimitiveType) -> Type {
        self.advance();
        Type::Primitive(primitive)
    }

    /// `< T >`
    fn parse_single_type_argument(&mut self) -> ParseResult<Type> {
        self.expect(TokenKind::Lt)?;
        let argument = self.parse_type()?;
        self.expect(TokenKind::Gt)?;
        Ok(argument)
    }

    /// `a.b.C` optionally followed by `<T, U>`.
    pub(crate) fn parse_type_reference(&mut self) -> ParseResult<Type> {
        let base = self.expect_identifier()?;
        let name = self.fold_left(
            move |_| Ok(EntityName::Ident(base)),
            |p| {
                p.expect(TokenKind::Dot)?;
                p.expect_identifier()
            },
            |parent, name| parent.qualify(name),
        )?;

        let type_arguments = self
            .optional(|p| {
                p.expect(TokenKind::Lt)?;
                let arguments = p.separated(Self::parse_type, &[TokenKind::Comma])?;
                p.expect(TokenKind::Gt)?;
                Ok(arguments)
            })
            .unwrap_or_default();

        Ok(Type::Reference {
            name,
            type_arguments,
        })
    }

    /// `{ ... }` or the exact form `{| ... |}`.
    pub(crate) fn parse_object_type(&mut self) -> ParseResult<Type> {
        const SEPARATORS: &[TokenKind] = &[TokenKind::Comma, TokenKind::Semicolon];

        self.expect(TokenKind::LBrace)?;
        let opens_exact = self.eat(TokenKind::Pipe);

        let entries = self
            .optional(|p| p.separated(Self::parse_object_entry, SEPARATORS))
            .unwrap_or_default();
        self.eat_any(SEPARATORS);

        let closes_exact = self.eat(TokenKind::Pipe);
        self.expect(TokenKind::RBrace)?;

        let mut mixin_types = Vec::new();
        let mut members = Vec::new();
        for entry in entries {
            match entry {
                ObjectEntry::Mixin(ty) => mixin_types.push(ty),
                ObjectEntry::Member(member) => members.push(member),
            }
        }

        Ok(Type::Object(ObjectType {
            is_exact: opens_exact && closes_exact,
            mixin_types,
            members,
        }))
    }

    fn parse_object_entry(&mut self) -> ParseResult<ObjectEntry> {
        if self.eat(TokenKind::DotDotDot) {
            return Ok(ObjectEntry::Mixin(self.parse_type()?));
        }

        let is_readonly = self.eat(TokenKind::Plus);

        // Indexer: [key: K]: V
        if self.eat(TokenKind::LBracket) {
            let key_name = self.expect_identifier()?;
            self.expect(TokenKind::Colon)?;
            let key_type = self.parse_type()?;
            self.expect(TokenKind::RBracket)?;
            self.expect(TokenKind::Colon)?;
            let value_type = self.parse_type()?;

            return Ok(ObjectEntry::Member(ObjectMember::Indexer {
                is_readonly,
                key_name,
                key_type,
                value_type,
            }));
        }

        let name = self.expect_word()?;
        let is_optional = self.eat(TokenKind::Question);
        self.expect(TokenKind::Colon)?;
        let prop_type = self.parse_type()?;

        Ok(ObjectEntry::Member(ObjectMember::Prop {
            is_readonly,
            name,
            is_optional,
            prop_type,
        }))
    }
}

/// Union combiner: extends an existing union instead of nesting it.
fn merge_union(left: Type, right: Type) -> Type {
    let mut element_types = match left {
        Type::Union(element_types) => element_types,
        other => vec![other],
    };
    match right {
        Type::Union(more) => element_types.extend(more),
        other => element_types.push(other),
    }
    Type::Union(element_types)
}
