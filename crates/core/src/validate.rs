//! Pure character predicates and the lenient preflight check.
//!
//! The predicates are total functions over the fixed alphabet: invalid
//! characters yield `false`, never an error.  Raising classified errors is
//! the converter's job.

use alien_numerals_diagnostics::{Diagnostic, Span, codes};
use alien_numerals_symbols::{self as symbols, Symbol};

/// Whether `ch`, case-folded, is one of the 7 legal symbols.
pub fn is_symbol(ch: char) -> bool {
    Symbol::from_char(ch).is_some()
}

/// Whether the case-folded ordered pair `(first, second)` is in the closed
/// 6-pair subtractive list.
///
/// Membership test only: `(A, L)` ascends in value but is not legal and
/// returns `false` here.
pub fn is_subtractive_pair(first: char, second: char) -> bool {
    match (Symbol::from_char(first), Symbol::from_char(second)) {
        (Some(f), Some(s)) => symbols::is_subtractive_pair(f, s),
        _ => false,
    }
}

/// Lenient character-class check, suitable for live input feedback.
///
/// Reports [`codes::EMPTY_INPUT`] for empty or all-whitespace input and one
/// [`codes::INVALID_CHARACTER`] diagnostic for every character outside the
/// alphabet.  Deliberately weaker than [`crate::convert`]: subtractive
/// pairs are not checked here, so a string like `"AL"` passes preflight and
/// still fails conversion.
pub fn preflight(input: &str) -> Vec<Diagnostic> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return vec![Diagnostic::error(
            codes::EMPTY_INPUT,
            "input is empty; a numeral must contain at least one symbol",
            Some(Span::empty(0)),
        )];
    }

    let base = input.len() - input.trim_start().len();
    let mut diags = Vec::new();
    for (i, ch) in trimmed.char_indices() {
        let folded = ch.to_ascii_uppercase();
        if !is_symbol(folded) {
            let pos = base + i;
            diags.push(
                Diagnostic::error(
                    codes::INVALID_CHARACTER,
                    format!("invalid character '{folded}'; only A, B, Z, L, C, D, R are allowed"),
                    Some(Span::new(pos, pos + ch.len_utf8())),
                )
                .with_context(std::collections::BTreeMap::from([(
                    "char".to_string(),
                    folded.to_string(),
                )])),
            );
        }
    }
    diags
}
