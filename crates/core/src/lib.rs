//! Alien numerals core library.
//!
//! Converts strings written in the alien additive/subtractive numeral
//! system (symbols A, B, Z, L, C, D, R) into integers.  The main entry
//! points are [`convert`] for full conversion and the [`validate`]
//! predicates for character-level feedback.

#![warn(missing_docs)]

/// Conversion of numeral strings to integers.
pub mod convert;
/// Character predicates and the lenient preflight check.
pub mod validate;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Converter
pub use convert::{ConvertError, convert};

// Validator
pub use validate::{is_subtractive_pair, is_symbol, preflight};

// Diagnostics (re-exported from the diagnostics crate)
pub use alien_numerals_diagnostics::{Diagnostic, Severity, Span, codes};

// Symbol tables (re-exported from the symbols crate)
pub use alien_numerals_symbols::{ALPHABET, SUBTRACTIVE_PAIRS, Symbol, lookup_symbol_value};
