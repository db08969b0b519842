//! Declaration definitions for the AST

use super::*;

/// Type alias declaration: `export type Name = T;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeAliasDecl {
    pub has_export: bool,
    pub name: String,
    pub aliased_type: Type,
}
