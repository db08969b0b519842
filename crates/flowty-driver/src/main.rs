use clap::{Parser, Subcommand};
use flowty_ast::{FlowProgram, Type};
use flowty_driver::{diagnostics, logging, Diagnostic};
use flowty_lexer::{Lexer, Token, TokenKind};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "flowty",
    version = "0.1.0",
    about = "Parser for Flow type annotation files",
    long_about = "Reads Flow declaration sources (type aliases, imports and\n'use strict') and prints their syntax tree."
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lex a Flow file and show tokens
    Lex {
        /// Input file
        input: PathBuf,

        /// Show token positions
        #[arg(short, long)]
        positions: bool,
    },

    /// Parse a Flow file and show the program tree
    Parse {
        /// Input file
        input: PathBuf,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a single type expression given on the command line
    Type {
        /// Type expression, e.g. "?Array<string> | null"
        expr: String,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json);

    match cli.command {
        Commands::Lex { input, positions } => lex_command(input, positions),
        Commands::Parse { input, json } => parse_command(input, json),
        Commands::Type { expr, json } => type_command(expr, json),
    }
}

fn lex_command(input: PathBuf, positions: bool) -> ExitCode {
    let source = match read_source_file(&input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let filename = input.to_string_lossy().to_string();
    let tokens = Lexer::new(&source).tokenize();

    println!("Tokens for {}:\n", filename);
    println!("{}", "=".repeat(80));

    for (i, token) in tokens.iter().enumerate() {
        if token.kind == TokenKind::Eof {
            println!("\n{:4} | {:?}", i, token.kind);
            break;
        }

        if positions {
            println!(
                "{:4} | {:20?} | {:?} | {}..{}",
                i, token.kind, token.text, token.span.start, token.span.end
            );
        } else {
            println!("{:4} | {:20?} | {:?}", i, token.kind, token.text);
        }
    }

    println!("{}", "=".repeat(80));
    println!("\nTotal tokens: {}", tokens.len());

    if report_lexer_errors(&tokens, &filename, &source) {
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn parse_command(input: PathBuf, json: bool) -> ExitCode {
    let source = match read_source_file(&input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let filename = input.to_string_lossy().to_string();
    let tokens = Lexer::new(&source).tokenize();

    if report_lexer_errors(&tokens, &filename, &source) {
        return ExitCode::FAILURE;
    }

    match flowty_parser::Parser::new(tokens).parse_program() {
        Ok(program) => {
            log_summary(&filename, &program);
            print_tree(&program, json)
        }
        Err(err) => {
            debug!(index = err.index, "parse failed");
            emit(&Diagnostic::from_parse_error(&err), &filename, &source);
            ExitCode::FAILURE
        }
    }
}

fn type_command(expr: String, json: bool) -> ExitCode {
    let filename = "<expr>";
    let tokens = Lexer::new(&expr).tokenize();

    if report_lexer_errors(&tokens, filename, &expr) {
        return ExitCode::FAILURE;
    }

    match flowty_parser::Parser::new(tokens).parse_type_expression() {
        Ok(ty) => print_tree::<Type>(&ty, json),
        Err(err) => {
            emit(&Diagnostic::from_parse_error(&err), filename, &expr);
            ExitCode::FAILURE
        }
    }
}

fn read_source_file(path: &PathBuf) -> io::Result<String> {
    fs::read_to_string(path)
}

fn log_summary(filename: &str, program: &FlowProgram) {
    info!(
        file = filename,
        statements = program.statements.len(),
        type_aliases = program.type_aliases().count(),
        "parsed"
    );
}

fn print_tree<T: Serialize + std::fmt::Debug>(tree: &T, json: bool) -> ExitCode {
    if !json {
        println!("{:#?}", tree);
        return ExitCode::SUCCESS;
    }

    match serde_json::to_string_pretty(tree) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing tree: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Reports every lexer error token; returns true if there were any.
fn report_lexer_errors(tokens: &[Token], filename: &str, source: &str) -> bool {
    let errors = Diagnostic::from_lexer_errors(tokens);
    for diagnostic in &errors {
        emit(diagnostic, filename, source);
    }
    !errors.is_empty()
}

fn emit(diagnostic: &Diagnostic, filename: &str, source: &str) {
    if let Err(e) = diagnostics::report(diagnostic, filename, source) {
        eprintln!("error[{}]: {} ({})", diagnostic.code, diagnostic.message, e);
    }
}
