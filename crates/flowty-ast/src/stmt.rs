//! Statement definitions for the AST

use super::*;

/// Module-level statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// export type A = T;
    TypeAlias(TypeAliasDecl),

    /// 'use strict';
    UseStrict,

    /// const name = require('source');
    ImportEqual { name: String, source: String },

    /// import * as name from 'source';
    ImportAs { name: String, source: String },

    /// import type { a, b } from 'source';
    ImportName { names: Vec<String>, source: String },
}
