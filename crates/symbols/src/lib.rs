//! Alien numeral symbol tables.
//!
//! Defines the fixed 7-symbol alphabet, the value of each symbol, and the
//! closed list of legal subtractive pairs.  These tables are process-wide
//! constants consumed by the converter and validator; there is no runtime
//! mutation path.

use serde::{Deserialize, Serialize};

/// One symbol of the alien numeral alphabet.
///
/// Variants are declared in strictly increasing value order, so the derived
/// `Ord` agrees with [`Symbol::value`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Symbol {
    /// Value 1.
    A,
    /// Value 5.
    B,
    /// Value 10.
    Z,
    /// Value 50.
    L,
    /// Value 100.
    C,
    /// Value 500.
    D,
    /// Value 1000.
    R,
}

/// The fixed alphabet, in increasing value order.
pub const ALPHABET: [Symbol; 7] = [
    Symbol::A,
    Symbol::B,
    Symbol::Z,
    Symbol::L,
    Symbol::C,
    Symbol::D,
    Symbol::R,
];

/// The closed list of legal subtractive pairs `(minuend, base)`.
///
/// Each pair denotes `value(base) - value(minuend)` when the minuend
/// immediately precedes the base.  Membership in this list is the rule —
/// it is NOT derived from value ordering.  `(A, L)` ascends in value but
/// is not legal.
pub const SUBTRACTIVE_PAIRS: [(Symbol, Symbol); 6] = [
    (Symbol::A, Symbol::B),
    (Symbol::A, Symbol::Z),
    (Symbol::Z, Symbol::L),
    (Symbol::Z, Symbol::C),
    (Symbol::C, Symbol::D),
    (Symbol::C, Symbol::R),
];

impl Symbol {
    /// Integer value of this symbol.
    pub const fn value(self) -> u64 {
        match self {
            Symbol::A => 1,
            Symbol::B => 5,
            Symbol::Z => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::R => 1000,
        }
    }

    /// Canonical uppercase letter for this symbol.
    pub const fn as_char(self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::B => 'B',
            Symbol::Z => 'Z',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::R => 'R',
        }
    }

    /// Look up a symbol by character, case-insensitively.
    ///
    /// Returns `None` for anything outside the 7-letter alphabet.
    pub const fn from_char(ch: char) -> Option<Symbol> {
        match ch.to_ascii_uppercase() {
            'A' => Some(Symbol::A),
            'B' => Some(Symbol::B),
            'Z' => Some(Symbol::Z),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'R' => Some(Symbol::R),
            _ => None,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Value of the symbol written as `ch`, case-folded.
///
/// Constant time; `None` when `ch` is not a legal symbol.
pub const fn lookup_symbol_value(ch: char) -> Option<u64> {
    match Symbol::from_char(ch) {
        Some(s) => Some(s.value()),
        None => None,
    }
}

/// Whether `(first, second)` is in the closed list of legal subtractive
/// pairs.
///
/// This is a membership test, not a value comparison: ascending value alone
/// does not make a pair legal.
pub fn is_subtractive_pair(first: Symbol, second: Symbol) -> bool {
    SUBTRACTIVE_PAIRS
        .iter()
        .any(|&(m, b)| m == first && b == second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_seven_symbols() {
        assert_eq!(ALPHABET.len(), 7);
    }

    #[test]
    fn values_strictly_increase_in_enumeration_order() {
        for pair in ALPHABET.windows(2) {
            assert!(
                pair[0].value() < pair[1].value(),
                "{} must be worth less than {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn symbol_values() {
        assert_eq!(Symbol::A.value(), 1);
        assert_eq!(Symbol::B.value(), 5);
        assert_eq!(Symbol::Z.value(), 10);
        assert_eq!(Symbol::L.value(), 50);
        assert_eq!(Symbol::C.value(), 100);
        assert_eq!(Symbol::D.value(), 500);
        assert_eq!(Symbol::R.value(), 1000);
    }

    #[test]
    fn from_char_is_case_insensitive() {
        for sym in ALPHABET {
            let upper = sym.as_char();
            let lower = upper.to_ascii_lowercase();
            assert_eq!(Symbol::from_char(upper), Some(sym));
            assert_eq!(Symbol::from_char(lower), Some(sym));
        }
    }

    #[test]
    fn from_char_rejects_foreign_characters() {
        for ch in ['X', 'x', 'M', '1', '!', ' ', 'ß'] {
            assert_eq!(Symbol::from_char(ch), None, "{ch:?} should not resolve");
        }
    }

    #[test]
    fn lookup_symbol_value_matches_table() {
        assert_eq!(lookup_symbol_value('a'), Some(1));
        assert_eq!(lookup_symbol_value('R'), Some(1000));
        assert_eq!(lookup_symbol_value('X'), None);
    }

    #[test]
    fn exactly_six_legal_pairs() {
        assert_eq!(SUBTRACTIVE_PAIRS.len(), 6);
    }

    #[test]
    fn every_legal_pair_ascends_in_value() {
        for (minuend, base) in SUBTRACTIVE_PAIRS {
            assert!(
                minuend.value() < base.value(),
                "pair ({minuend}, {base}) must ascend"
            );
        }
    }

    #[test]
    fn ascending_pairs_outside_the_list_are_rejected() {
        // Each of these ascends in value but is not in the closed list.
        for (first, second) in [
            (Symbol::A, Symbol::L),
            (Symbol::A, Symbol::C),
            (Symbol::A, Symbol::D),
            (Symbol::A, Symbol::R),
            (Symbol::B, Symbol::Z),
            (Symbol::B, Symbol::D),
            (Symbol::Z, Symbol::D),
            (Symbol::Z, Symbol::R),
            (Symbol::L, Symbol::C),
            (Symbol::D, Symbol::R),
        ] {
            assert!(
                !is_subtractive_pair(first, second),
                "({first}, {second}) must not be legal"
            );
        }
    }

    #[test]
    fn legal_pairs_are_accepted() {
        for (first, second) in SUBTRACTIVE_PAIRS {
            assert!(is_subtractive_pair(first, second));
        }
    }

    #[test]
    fn identical_symbols_never_pair() {
        for sym in ALPHABET {
            assert!(!is_subtractive_pair(sym, sym));
        }
    }

    #[test]
    fn symbol_serde_roundtrip() {
        let json = serde_json::to_string(&Symbol::C).unwrap();
        assert_eq!(json, "\"C\"");
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Symbol::C);
    }
}
