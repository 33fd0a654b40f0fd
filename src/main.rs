//! Command-line driver for the MJava front end
//!
//! `mjava <SOURCE> [OUTPUT]` parses `SOURCE` and writes the indented syntax
//! tree to `OUTPUT` (default `astOut.txt`). With `--tokens` it writes one line
//! per token instead (default `tokenOut.txt`). Diagnostics go to stderr and do
//! not change the exit status.

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use crossterm::style::Stylize;
use mjava::format::format_nested;
use mjava::parser::diagnostics::{Diagnostic, DiagnosticKind};
use mjava::parser::parse::Parser;
use mjava::parser::scanner::Scanner;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

#[derive(ClapParser, Debug)]
#[command(version, about = "Scan and parse MJava source files", long_about = None)]
struct Args {
    /// MJava source file
    source: PathBuf,

    /// Output file (default: tokenOut.txt with --tokens, astOut.txt otherwise)
    output: Option<PathBuf>,

    /// Write the token stream instead of the syntax tree
    #[arg(short, long)]
    tokens: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut scanner = Scanner::open(&args.source)?;
    log::info!("scanning {}", args.source.display());

    let (text, default_output) = if args.tokens {
        (dump_tokens(&mut scanner), "tokenOut.txt")
    } else {
        let program = Parser::new(&mut scanner).parse();
        log::info!(
            "parsed {} classes, {} nodes",
            program.classes.len(),
            program.node_count()
        );
        (format_nested(&program.to_display_string()), "astOut.txt")
    };

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(default_output));
    fs::write(&output, text + "\n")
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("wrote {}", output.display());

    report(&scanner.take_diagnostics())?;
    Ok(())
}

/// One `Token::dump` line per token, end of file included.
fn dump_tokens(scanner: &mut Scanner) -> String {
    let mut lines = Vec::new();
    loop {
        let token = scanner.next_token();
        lines.push(token.dump());
        if token.is_eof() {
            break;
        }
    }
    lines.join("\n")
}

fn report(diagnostics: &[Diagnostic]) -> io::Result<()> {
    let stderr = io::stderr();
    let colour = stderr.is_terminal();
    let mut out = stderr.lock();

    for diag in diagnostics {
        if colour {
            let label = diag.kind.to_string();
            let label = match diag.kind {
                DiagnosticKind::Token => label.as_str().yellow().bold(),
                DiagnosticKind::Syntax => label.as_str().red().bold(),
            };
            writeln!(out, "{}: {}: {}", label, diag.location, diag.message)?;
        } else {
            writeln!(out, "{}", diag)?;
        }
    }

    if !diagnostics.is_empty() {
        log::info!("{} diagnostics reported", diagnostics.len());
    }
    Ok(())
}
