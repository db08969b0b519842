//! # Flowty AST
//!
//! Abstract Syntax Tree definitions for Flow type annotations:
//! type expressions, type alias declarations and module import statements.

use serde::Serialize;

// =============================================================================
// Core Types (kept in lib.rs - used by all modules)
// =============================================================================

/// Source location information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub file_id: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, file_id: usize) -> Self {
        Self { start, end, file_id }
    }

    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            file_id: self.file_id,
        }
    }
}

/// AST node wrapper that includes span information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node<T> {
    pub span: Span,
    pub value: T,
}

impl<T> Node<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { span, value }
    }
}

// =============================================================================
// Module Declarations
// =============================================================================

pub mod types;
pub mod decl;
pub mod stmt;
pub mod module;

pub use types::*;
pub use decl::*;
pub use stmt::*;
pub use module::*;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_span() -> Span {
        Span::new(0, 0, 0)
    }

    #[test]
    fn test_span_merge() {
        let a = Span::new(4, 9, 0);
        let b = Span::new(12, 20, 0);
        assert_eq!(a.merge(&b), Span::new(4, 20, 0));
        assert_eq!(b.merge(&a), Span::new(4, 20, 0));
    }

    #[test]
    fn test_primitive_display() {
        assert_eq!(format!("{}", PrimitiveType::Number), "number");
        assert_eq!(format!("{}", PrimitiveType::Null), "null");
    }

    #[test]
    fn test_entity_name_qualify() {
        let name = EntityName::ident("a").qualify("b").qualify("c");

        assert_eq!(name.depth(), 3);
        assert_eq!(name.to_string(), "a.b.c");
        if let EntityName::Qualified { parent, name } = &name {
            assert_eq!(name, "c");
            assert_eq!(parent.to_string(), "a.b");
        } else {
            panic!("Expected qualified name");
        }
    }

    #[test]
    fn test_program_accessors() {
        let program = FlowProgram {
            statements: vec![
                Node::new(Statement::UseStrict, dummy_span()),
                Node::new(
                    Statement::TypeAlias(TypeAliasDecl {
                        has_export: false,
                        name: "A".to_string(),
                        aliased_type: Type::Primitive(PrimitiveType::String),
                    }),
                    dummy_span(),
                ),
                Node::new(
                    Statement::ImportName {
                        names: vec!["Foo".to_string()],
                        source: "mod".to_string(),
                    },
                    dummy_span(),
                ),
            ],
            span: dummy_span(),
        };

        assert_eq!(program.type_aliases().count(), 1);
        assert_eq!(program.import_sources().collect::<Vec<_>>(), vec!["mod"]);
    }

    #[test]
    fn test_serialize_shape() {
        let ty = Type::Array {
            element_type: Box::new(Type::Primitive(PrimitiveType::Boolean)),
            is_readonly: true,
        };
        let json = serde_json::to_value(&ty).unwrap();

        assert_eq!(json["Array"]["is_readonly"], true);
        assert_eq!(json["Array"]["element_type"]["Primitive"], "boolean");
    }
}
