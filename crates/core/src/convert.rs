//! The converter: a single left-to-right scan with one-token lookahead.

use alien_numerals_diagnostics::{Diagnostic, Span, codes};
use alien_numerals_symbols::{Symbol, is_subtractive_pair};
use thiserror::Error;

/// Shorthand for building a `BTreeMap<String, String>` context from key-value pairs.
macro_rules! ctx {
    ($($k:expr => $v:expr),+ $(,)?) => {
        std::collections::BTreeMap::from([$(($k.into(), $v.into())),+])
    };
}

/// A classified conversion failure.
///
/// Exactly three kinds exist.  Conversion aborts at the first violation
/// found in left-to-right order; there is no partial total.  Spans are byte
/// offsets into the caller's original (untrimmed) input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The input was empty or all-whitespace.
    #[error("input is empty; a numeral must contain at least one symbol")]
    EmptyInput,

    /// A character outside the 7-symbol alphabet was encountered.
    #[error("invalid character '{ch}'; only A, B, Z, L, C, D, R are allowed")]
    InvalidCharacter {
        /// The offending character as it appears in the trimmed,
        /// case-folded input.
        ch: char,
        /// Location of the character in the original input.
        span: Span,
    },

    /// Two adjacent symbols ascend in value but are not a legal
    /// subtractive pair.
    #[error("invalid subtractive pair '{first}{second}'; legal pairs are AB, AZ, ZL, ZC, CD, CR")]
    InvalidSubtractivePair {
        /// The would-be minuend.
        first: Symbol,
        /// The larger-valued symbol following it.
        second: Symbol,
        /// Location of the two-symbol pair in the original input.
        span: Span,
    },
}

impl ConvertError {
    /// The diagnostic code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::EmptyInput => codes::EMPTY_INPUT,
            ConvertError::InvalidCharacter { .. } => codes::INVALID_CHARACTER,
            ConvertError::InvalidSubtractivePair { .. } => codes::INVALID_SUBTRACTIVE_PAIR,
        }
    }

    /// The span of the offending input, when one exists.
    pub fn span(&self) -> Option<Span> {
        match self {
            ConvertError::EmptyInput => None,
            ConvertError::InvalidCharacter { span, .. }
            | ConvertError::InvalidSubtractivePair { span, .. } => Some(*span),
        }
    }

    /// Render this error as a structured [`Diagnostic`].
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.to_string(), self.span());
        match self {
            ConvertError::EmptyInput => diag,
            ConvertError::InvalidCharacter { ch, .. } => {
                diag.with_context(ctx!("char" => ch.to_string()))
            }
            ConvertError::InvalidSubtractivePair { first, second, .. } => diag.with_context(
                ctx!("first" => first.to_string(), "second" => second.to_string()),
            ),
        }
    }
}

/// Convert an alien numeral string to its integer value.
///
/// Leading/trailing whitespace is trimmed and the input is case-folded
/// before scanning.  The scan is a single left-to-right pass: when the next
/// symbol is worth strictly more than the current one, the pair must be in
/// the closed subtractive list and contributes `value(next) - value(cur)`
/// as one atomic unit; otherwise the current symbol adds its own value.
/// Repeated symbols simply add, with no repeat limit.
///
/// # Errors
///
/// Fails with the first violation found, per [`ConvertError`].
pub fn convert(input: &str) -> Result<u64, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    // Byte offset of the trimmed slice within the original input, so that
    // error spans point at the caller's string.
    let base = input.len() - input.trim_start().len();

    // ASCII case fold preserves byte offsets; non-ASCII characters pass
    // through unchanged and are rejected as invalid below.
    let chars: Vec<(usize, char)> = trimmed
        .char_indices()
        .map(|(i, ch)| (base + i, ch.to_ascii_uppercase()))
        .collect();

    let mut total = 0u64;
    let mut i = 0usize;
    while i < chars.len() {
        let (pos, ch) = chars[i];
        let Some(cur) = Symbol::from_char(ch) else {
            return Err(ConvertError::InvalidCharacter {
                ch,
                span: Span::new(pos, pos + ch.len_utf8()),
            });
        };

        if let Some(&(next_pos, next_ch)) = chars.get(i + 1)
            && let Some(next) = Symbol::from_char(next_ch)
            && next.value() > cur.value()
        {
            if is_subtractive_pair(cur, next) {
                total += next.value() - cur.value();
                // Both symbols consumed as one unit; neither re-enters
                // the scan.
                i += 2;
                continue;
            }
            return Err(ConvertError::InvalidSubtractivePair {
                first: cur,
                second: next,
                span: Span::new(pos, next_pos + next_ch.len_utf8()),
            });
        }

        total += cur.value();
        i += 1;
    }

    Ok(total)
}
