//! Recursive DBOR encoder.
//!
//! Dispatches on the value variant, chooses the header class, and sizes the
//! payload with the shared integer token. A sequence must declare the total
//! encoded length of its children in its header, so children are encoded
//! into a scratch buffer first and appended after the token; this is also
//! why streaming encode is not offered.

use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::{
    decode::DEFAULT_MAX_DEPTH,
    token::{
        self, CLASS_BYTES, CLASS_INTEGER, CLASS_NEGATIVE_INTEGER, CLASS_SEQUENCE, CLASS_STRING,
    },
    value::Value,
};

/// An error produced while encoding a [`Value`].
///
/// Valid values never fail to encode; these errors only arise from an
/// out-of-range `Value::Integer` constructed through the permissive variant,
/// or from pathological sizes and nesting. The error carries the path of
/// sequence indexes from the root to the offending child.
///
/// # Examples
///
/// ```
/// use dbor::{encode, Value};
///
/// let v = Value::Sequence(vec![Value::None, Value::Integer(1 << 64)]);
/// let err = encode(&v).unwrap_err();
/// assert_eq!(err.path(), &[1][..]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeError {
    kind: EncodeErrorKind,
    path: Vec<usize>,
}

impl EncodeError {
    pub(crate) fn new(kind: EncodeErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    /// Records that the error occurred inside the child at `index`.
    fn inside(mut self, index: usize) -> Self {
        self.path.insert(0, index);
        self
    }

    /// The kind of failure.
    #[must_use]
    pub fn kind(&self) -> &EncodeErrorKind {
        &self.kind
    }

    /// Sequence indexes leading from the root value to the value that failed;
    /// empty if the root itself failed.
    #[must_use]
    pub fn path(&self) -> &[usize] {
        &self.path
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)?;
        if !self.path.is_empty() {
            f.write_str(" at sequence path ")?;
            for index in &self.path {
                write!(f, "[{index}]")?;
            }
        }
        Ok(())
    }
}

impl core::error::Error for EncodeError {}

/// The kinds of [`EncodeError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeErrorKind {
    /// The integer lies outside the combined range `-2^63 ..= 2^64 - 1`.
    #[error("integer {0} is outside the encodable range -2^63..=2^64-1")]
    IntegerOutOfRange(i128),
    /// A payload length exceeds the integer-token domain of
    /// `2^64 - 1 + 24` bytes.
    #[error("payload of {0} bytes exceeds the integer-token domain")]
    SizeOverflow(u128),
    /// Sequence nesting exceeds the supported depth.
    #[error("sequence nesting exceeds {0} levels")]
    NestingTooDeep(usize),
}

/// Encodes a value into a fresh byte vector.
///
/// # Errors
///
/// Never fails for values holding the documented invariants; see
/// [`EncodeError`] for the adversarial cases.
///
/// # Examples
///
/// ```
/// use dbor::{encode, Value};
///
/// assert_eq!(encode(&Value::None)?, [0xFF]);
/// assert_eq!(encode(&Value::Integer(24))?, [0x18, 0x00]);
/// assert_eq!(encode(&Value::String("A".into()))?, [0x61, 0x41]);
/// # Ok::<(), dbor::EncodeError>(())
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    encode_into(value, &mut out)?;
    Ok(out)
}

/// Encodes a value, appending to an existing buffer.
///
/// On error the buffer is left with whatever prefix was written; callers
/// reusing buffers should truncate back to the prior length themselves.
///
/// # Errors
///
/// Same conditions as [`encode`].
pub fn encode_into(value: &Value, out: &mut Vec<u8>) -> Result<(), EncodeError> {
    encode_value(value, out, 0)
}

fn encode_value(value: &Value, out: &mut Vec<u8>, depth: usize) -> Result<(), EncodeError> {
    match value {
        Value::None => {
            out.push(token::NONE_BYTE);
            Ok(())
        }
        Value::Integer(n) => encode_integer(*n, out),
        Value::Bytes(bytes) => encode_octets(CLASS_BYTES, bytes, out),
        Value::String(s) => encode_octets(CLASS_STRING, s.as_bytes(), out),
        Value::Sequence(items) => {
            if depth >= DEFAULT_MAX_DEPTH {
                return Err(EncodeError::new(EncodeErrorKind::NestingTooDeep(
                    DEFAULT_MAX_DEPTH,
                )));
            }
            let mut payload = Vec::new();
            for (index, item) in items.iter().enumerate() {
                encode_value(item, &mut payload, depth + 1).map_err(|e| e.inside(index))?;
            }
            encode_octets(CLASS_SEQUENCE, &payload, out)
        }
    }
}

fn encode_integer(n: i128, out: &mut Vec<u8>) -> Result<(), EncodeError> {
    if !(Value::MIN_INTEGER..=Value::MAX_INTEGER).contains(&n) {
        return Err(EncodeError::new(EncodeErrorKind::IntegerOutOfRange(n)));
    }
    if n >= 0 {
        token::write_token(out, CLASS_INTEGER, n as u128);
    } else {
        // -1 maps to magnitude 0, -2^63 to 2^63 - 1.
        token::write_token(out, CLASS_NEGATIVE_INTEGER, (-(n + 1)) as u128);
    }
    Ok(())
}

fn encode_octets(class: u8, octets: &[u8], out: &mut Vec<u8>) -> Result<(), EncodeError> {
    let len = octets.len() as u128;
    if len > token::MAX_TOKEN_VALUE {
        return Err(EncodeError::new(EncodeErrorKind::SizeOverflow(len)));
    }
    token::write_token(out, class, len);
    out.extend_from_slice(octets);
    Ok(())
}
