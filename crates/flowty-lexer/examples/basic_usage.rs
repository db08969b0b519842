use flowty_lexer::{Lexer, TokenKind};

fn dump(title: &str, source: &str) {
    println!("=== {} ===", title);

    let mut lexer = Lexer::new(source);
    for token in lexer.tokenize() {
        if token.kind != TokenKind::Eof {
            println!("{:?} at {}..{} = {:?} ({})", token.kind, token.span.start, token.span.end, token.value, token.text);
        }
    }
    println!();
}

fn main() {
    dump(
        "Type alias",
        "export type Point = {| +x: number, +y: number |};",
    );

    dump(
        "Imports",
        r#"
        'use strict';
        const fs = require('fs');
        import * as path from "path";
        import type { Foo, Bar } from './types';
        "#,
    );

    dump(
        "Reserved generic markers",
        "type L = $ReadOnlyArray<?string>; type R = $ReadOnly<{ [key: string]: mixed }>;",
    );

    dump("Literal types", "type Code = 'ok' | 404 | -1 | true;");

    dump("Lexical errors", "type Bad = A & 'unterminated");
}
