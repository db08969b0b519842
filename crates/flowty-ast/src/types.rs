//! Type definitions for the AST

use serde::Serialize;
use std::fmt;

/// Type expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Type {
    /// Primitive types: null, number, string, boolean
    Primitive(PrimitiveType),

    /// Literal type: "hello" | 42 | true, kept as the raw source text
    Literal(String),

    /// Maybe type: ?T
    ///
    /// The element is never itself an `Optional`.
    Optional(Box<Type>),

    /// Parenthesized type: (T)
    Paren(Box<Type>),

    /// Array type: T[] or $ReadOnlyArray<T>
    Array {
        element_type: Box<Type>,
        is_readonly: bool,
    },

    /// Union type: T1 | T2 | ...
    ///
    /// Always holds at least two elements, none of which is a `Union`.
    Union(Vec<Type>),

    /// Type reference: Foo, a.b.C, Map<K, V>
    Reference {
        name: EntityName,
        type_arguments: Vec<Type>,
    },

    /// Single-argument wrapper recognized by a reserved name: $ReadOnly<T>
    DecoratedGeneric {
        name: String,
        element_type: Box<Type>,
    },

    /// Object type: { prop: Type } or {| prop: Type |}
    Object(ObjectType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Null,
    Number,
    String,
    Boolean,
}

/// Possibly dot-qualified type name.
///
/// `a.b.c` is `Qualified { parent: Qualified { parent: Ident("a"), name: "b" }, name: "c" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum EntityName {
    Ident(String),
    Qualified {
        parent: Box<EntityName>,
        name: String,
    },
}

impl EntityName {
    pub fn ident(name: impl Into<String>) -> Self {
        EntityName::Ident(name.into())
    }

    /// Wraps `self` as the parent of a new trailing segment.
    pub fn qualify(self, name: impl Into<String>) -> Self {
        EntityName::Qualified {
            parent: Box::new(self),
            name: name.into(),
        }
    }

    /// Number of dot-separated segments.
    pub fn depth(&self) -> usize {
        match self {
            EntityName::Ident(_) => 1,
            EntityName::Qualified { parent, .. } => parent.depth() + 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectType {
    pub is_exact: bool,
    pub mixin_types: Vec<Type>,
    pub members: Vec<ObjectMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ObjectMember {
    /// name: T, name?: T, +name: T
    Prop {
        is_readonly: bool,
        name: String,
        is_optional: bool,
        prop_type: Type,
    },
    /// [key: K]: V, +[key: K]: V
    Indexer {
        is_readonly: bool,
        key_name: String,
        key_type: Type,
        value_type: Type,
    },
}

// Display implementations

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Null => write!(f, "null"),
            PrimitiveType::Number => write!(f, "number"),
            PrimitiveType::String => write!(f, "string"),
            PrimitiveType::Boolean => write!(f, "boolean"),
        }
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityName::Ident(name) => write!(f, "{}", name),
            EntityName::Qualified { parent, name } => write!(f, "{}.{}", parent, name),
        }
    }
}
