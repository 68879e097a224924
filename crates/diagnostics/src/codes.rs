//! Diagnostic ID constants.
//!
//! One constant per diagnostic the toolchain can emit.  Use these instead
//! of string literals to get compile-time typo detection and IDE
//! autocomplete.  This module is the single source of truth for the code
//! set; [`crate::explain`] must cover every constant defined here.

/// Input was empty or all-whitespace.
pub const EMPTY_INPUT: &str = "ALN0001";

/// A character outside the 7-symbol alphabet was encountered.
pub const INVALID_CHARACTER: &str = "ALN0002";

/// Two adjacent symbols ascend in value but are not a legal subtractive
/// pair.
pub const INVALID_SUBTRACTIVE_PAIR: &str = "ALN0003";
