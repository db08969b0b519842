//! Flowty Driver Library
//!
//! Shared pieces of the `flowty` command-line tool: subscriber setup and
//! ariadne diagnostics for lexer and parser failures.

pub mod diagnostics;
pub mod logging;

pub use diagnostics::{render, report, Diagnostic};
