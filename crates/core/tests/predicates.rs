//! Predicate and preflight tests for the alien numerals core.
//!
//! Converter tests (scanning, totals, error ordering) live in `convert.rs`.

use alien_numerals_core::{Span, codes, convert, is_subtractive_pair, is_symbol, preflight};

// ─── Predicates ─────────────────────────────────────────────────────────────

#[test]
fn is_symbol_covers_the_whole_alphabet() {
    for ch in "ABZLCDRabzlcdr".chars() {
        assert!(is_symbol(ch), "{ch:?} should be a symbol");
    }
    for ch in "EFGHXYM0189 ,.-".chars() {
        assert!(!is_symbol(ch), "{ch:?} should not be a symbol");
    }
}

#[test]
fn is_subtractive_pair_accepts_exactly_the_closed_list() {
    let legal = [('A', 'B'), ('A', 'Z'), ('Z', 'L'), ('Z', 'C'), ('C', 'D'), ('C', 'R')];
    for first in "ABZLCDR".chars() {
        for second in "ABZLCDR".chars() {
            let expected = legal.contains(&(first, second));
            assert_eq!(
                is_subtractive_pair(first, second),
                expected,
                "({first}, {second})"
            );
            // Case folding applies to both positions.
            assert_eq!(
                is_subtractive_pair(first.to_ascii_lowercase(), second),
                expected
            );
        }
    }
}

// ─── Preflight ──────────────────────────────────────────────────────────────

#[test]
fn preflight_passes_clean_input() {
    assert!(preflight("RCRZCAB").is_empty());
    assert!(preflight("  lbaaa  ").is_empty());
}

#[test]
fn preflight_reports_empty_input() {
    for input in ["", "   ", "\t\n"] {
        let diags = preflight(input);
        assert_eq!(diags.len(), 1, "preflight({input:?})");
        assert_eq!(diags[0].id, codes::EMPTY_INPUT);
    }
}

#[test]
fn preflight_reports_every_invalid_character() {
    // Unlike convert, preflight does not stop at the first offender.
    let diags = preflight("AXBY");
    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0].id, codes::INVALID_CHARACTER);
    assert_eq!(diags[0].span, Some(Span::new(1, 2)));
    assert_eq!(diags[0].context.as_ref().unwrap().get("char").unwrap(), "X");
    assert_eq!(diags[1].span, Some(Span::new(3, 4)));
    assert_eq!(diags[1].context.as_ref().unwrap().get("char").unwrap(), "Y");
}

#[test]
fn preflight_is_lenient_about_subtractive_pairs() {
    // "AL" is all legal characters, so preflight accepts it even though
    // conversion is guaranteed to fail on the illegal pair.
    assert!(preflight("AL").is_empty());
    assert!(convert("AL").is_err());
}

#[test]
fn preflight_spans_account_for_leading_whitespace() {
    let diags = preflight("  A!");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].span, Some(Span::new(3, 4)));
}
