mod render;

use std::process;

use alien_numerals_core::{convert, preflight};
use alien_numerals_diagnostics::{self as diag, Severity};
use alien_numerals_symbols::{ALPHABET, SUBTRACTIVE_PAIRS};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::render::{Format, print_summary, render_diagnostics};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "alien",
    version,
    about = "Alien numerals toolchain — convert and validate alien numeral strings"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    // ── Numeral analysis (progressive: check → convert) ──────────────
    /// Convert an alien numeral string to its integer value.
    Convert {
        /// The numeral to convert (symbols A, B, Z, L, C, D, R,
        /// case-insensitive).
        numeral: String,
    },

    /// Character-class check only: flags characters outside the alphabet
    /// without attempting conversion.
    Check {
        /// The numeral to check.
        numeral: String,
    },

    // ── Reference / informational ───────────────────────────────────
    /// Print the symbol table and the legal subtractive pairs.
    Table,

    /// Convert the built-in example numerals and print the results.
    Examples,

    /// Explain a diagnostic ID (e.g. ALN0002).
    Explain { id: String },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Convert { numeral } => cmd_convert(&numeral, format)?,
        Cmd::Check { numeral } => cmd_check(&numeral, format)?,
        Cmd::Table => cmd_table(format)?,
        Cmd::Examples => cmd_examples(format)?,
        Cmd::Explain { id } => cmd_explain(&id, format)?,
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_convert(numeral: &str, format: Format) -> Result<()> {
    match convert(numeral) {
        Ok(value) => match format {
            Format::Json => {
                let out = serde_json::json!({
                    "input": numeral,
                    "ok": true,
                    "value": value,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            Format::Pretty => {
                println!("{} = {}", numeral.trim().to_ascii_uppercase(), value);
            }
        },
        Err(err) => {
            let diagnostic = err.to_diagnostic();
            match format {
                Format::Json => {
                    let out = serde_json::json!({
                        "input": numeral,
                        "ok": false,
                        "diagnostic": diagnostic,
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                Format::Pretty => {
                    render_diagnostics(numeral, "<numeral>", &[diagnostic], format);
                }
            }
            process::exit(1);
        }
    }
    Ok(())
}

fn cmd_check(numeral: &str, format: Format) -> Result<()> {
    let diagnostics = preflight(numeral);
    let ok = !diagnostics
        .iter()
        .any(|d| matches!(d.severity, Severity::Error));

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "input": numeral,
                "ok": ok,
                "diagnostics": diagnostics,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            render_diagnostics(numeral, "<numeral>", &diagnostics, format);
            print_summary(&diagnostics);
            if ok {
                eprintln!("check ok");
            }
        }
    }

    exit_on_errors(&diagnostics);
    Ok(())
}

fn cmd_table(format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let symbols: Vec<_> = ALPHABET
                .iter()
                .map(|s| serde_json::json!({ "symbol": s.to_string(), "value": s.value() }))
                .collect();
            let pairs: Vec<_> = SUBTRACTIVE_PAIRS
                .iter()
                .map(|(first, second)| {
                    serde_json::json!({
                        "first": first.to_string(),
                        "second": second.to_string(),
                        "value": second.value() - first.value(),
                    })
                })
                .collect();
            let out = serde_json::json!({
                "symbols": symbols,
                "subtractive_pairs": pairs,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            println!("symbols:");
            for s in ALPHABET {
                println!("  {} = {}", s, s.value());
            }
            println!("subtractive pairs:");
            for (first, second) in SUBTRACTIVE_PAIRS {
                println!(
                    "  {}{} = {} ({} - {})",
                    first,
                    second,
                    second.value() - first.value(),
                    second.value(),
                    first.value()
                );
            }
        }
    }
    Ok(())
}

/// Built-in example numerals, all valid by construction.
const EXAMPLES: [&str; 9] = [
    "AAA", "LBAAA", "RCRZCAB", "AB", "AZ", "ZL", "ZC", "CD", "CR",
];

fn cmd_examples(format: Format) -> Result<()> {
    let mut results = Vec::with_capacity(EXAMPLES.len());
    for numeral in EXAMPLES {
        let value = convert(numeral)
            .with_context(|| format!("built-in example '{numeral}' failed to convert"))?;
        results.push((numeral, value));
    }

    match format {
        Format::Json => {
            let out: Vec<_> = results
                .iter()
                .map(|(numeral, value)| serde_json::json!({ "input": numeral, "value": value }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            for (numeral, value) in results {
                println!("{} = {}", numeral, value);
            }
        }
    }
    Ok(())
}

fn cmd_explain(id: &str, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let text = diag::explain(id);
            let out = serde_json::json!({
                "id": id,
                "explanation": text,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            // Explanation is the expected output — write to stdout, not stderr.
            if let Some(text) = diag::explain(id) {
                use ariadne::Fmt;
                println!("{}: {}", id.fg(ariadne::Color::Cyan), text);
            } else {
                println!("{}: (no explanation available)", id);
            }
        }
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Exit with code 1 if any diagnostic is an error.
/// Warnings and info do not cause a non-zero exit.
fn exit_on_errors(diagnostics: &[diag::Diagnostic]) {
    if diagnostics
        .iter()
        .any(|d| matches!(d.severity, Severity::Error))
    {
        process::exit(1);
    }
}
