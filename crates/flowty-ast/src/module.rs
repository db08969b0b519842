//! Program root for the AST

use super::*;

/// Root AST node - represents a complete source file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowProgram {
    pub statements: Vec<Node<Statement>>,
    pub span: Span,
}

impl FlowProgram {
    /// Iterates the statements without their spans.
    pub fn iter_statements(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter().map(|node| &node.value)
    }

    /// Type alias declarations, in program order.
    pub fn type_aliases(&self) -> impl Iterator<Item = &TypeAliasDecl> {
        self.iter_statements().filter_map(|stmt| match stmt {
            Statement::TypeAlias(decl) => Some(decl),
            _ => None,
        })
    }

    /// Module sources referenced by import statements, in program order.
    pub fn import_sources(&self) -> impl Iterator<Item = &str> {
        self.iter_statements().filter_map(|stmt| match stmt {
            Statement::ImportEqual { source, .. }
            | Statement::ImportAs { source, .. }
            | Statement::ImportName { source, .. } => Some(source.as_str()),
            Statement::TypeAlias(_) | Statement::UseStrict => None,
        })
    }
}
