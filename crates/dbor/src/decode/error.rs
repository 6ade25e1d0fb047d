use thiserror::Error;

/// An error produced while decoding a byte sequence.
///
/// Decoding aborts on the first problem; no partial value is ever returned.
/// The offset names the byte at which the problem was detected, counted from
/// the start of the top-level input (including inside nested sequences).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct DecodeError {
    pub(crate) kind: DecodeErrorKind,
    pub(crate) offset: usize,
}

impl DecodeError {
    pub(crate) fn new(kind: DecodeErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The kind of failure.
    #[must_use]
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// Byte offset into the top-level input at which the problem was
    /// detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// The kinds of [`DecodeError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The input ended before a declared token tail or payload was fully
    /// present.
    #[error("unexpected end of input: needed {needed} byte(s), found {available}")]
    Truncated {
        /// Bytes the current token or payload declared.
        needed: u128,
        /// Bytes actually remaining.
        available: usize,
    },
    /// Bytes remain after the complete top-level value.
    #[error("{0} trailing byte(s) after the top-level value")]
    TrailingBytes(usize),
    /// An integer token decoded to a magnitude outside the representable
    /// signed/unsigned combined range.
    #[error("integer token magnitude {0} is outside the representable range")]
    OutOfRange(u128),
    /// A string payload is not well-formed UTF-8.
    #[error("string payload is not well-formed UTF-8")]
    InvalidUtf8,
    /// A header class not defined at conformance level 2; classes 5 and up
    /// are reserved for dictionaries and rational numbers.
    #[error("unsupported header class {0}")]
    UnsupportedType(u8),
    /// An integer token used a wider tail than its magnitude requires.
    #[error("non-canonical integer token: {width}-byte tail where {minimal} suffice(s)")]
    NonCanonical {
        /// Tail width the input used.
        width: usize,
        /// Minimal tail width for the magnitude.
        minimal: usize,
    },
    /// Sequence nesting exceeds [`max_depth`](crate::DecodeOptions::max_depth).
    #[error("sequence nesting exceeds {0} levels")]
    NestingTooDeep(usize),
}
