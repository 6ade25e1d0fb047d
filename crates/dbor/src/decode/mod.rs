//! Recursive-descent DBOR decoder.
//!
//! The decoder walks a byte cursor value by value: read one header byte,
//! reconstruct the integer token, then consume the typed payload. Sequences
//! frame their children with a declared byte length, so each sequence hands
//! its children a sub-cursor over exactly that many bytes and requires it to
//! be exhausted. All range, UTF-8, and boundary checks happen before any
//! payload is materialized, and errors abort the whole decode; there is no
//! persistent state across values.

mod error;
mod options;

pub use error::{DecodeError, DecodeErrorKind};
pub use options::{DEFAULT_MAX_DEPTH, DecodeOptions};

use alloc::vec::Vec;

use crate::{
    token::{
        CLASS_BYTES, CLASS_INTEGER, CLASS_NEGATIVE_INTEGER, CLASS_SEQUENCE, CLASS_STRING,
        EXTENDED_BIAS, NONE_BYTE, tail_width,
    },
    value::Value,
};

/// Decodes a single DBOR value with default [`DecodeOptions`].
///
/// The input must contain exactly one value; trailing bytes are an error.
///
/// # Errors
///
/// See [`DecodeErrorKind`] for the failure taxonomy.
///
/// # Examples
///
/// ```
/// use dbor::{decode, Value};
///
/// assert_eq!(decode(&[0xFF])?, Value::None);
/// assert_eq!(decode(&[0x20])?, Value::Integer(-1));
/// assert_eq!(decode(&[0x81, 0xFF])?, Value::Sequence(vec![Value::None]));
/// # Ok::<(), dbor::DecodeError>(())
/// ```
pub fn decode(input: &[u8]) -> Result<Value, DecodeError> {
    Decoder::new(DecodeOptions::default()).decode(input)
}

/// A configured DBOR decoder.
///
/// Holds only options; decoding itself is stateless and a single `Decoder`
/// may be reused across inputs (and threads) freely.
///
/// # Examples
///
/// ```
/// use dbor::{DecodeOptions, Decoder, Value};
///
/// let lenient = Decoder::new(DecodeOptions {
///     strict_canonical: false,
///     ..DecodeOptions::default()
/// });
/// // A two-byte tail for a magnitude that needs one.
/// assert_eq!(lenient.decode(&[0x19, 0x05, 0x00])?, Value::Integer(29));
/// # Ok::<(), dbor::DecodeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Creates a decoder with the given options.
    #[must_use]
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Decodes a single value from `input`, consuming it entirely.
    ///
    /// # Errors
    ///
    /// See [`DecodeErrorKind`].
    pub fn decode(&self, input: &[u8]) -> Result<Value, DecodeError> {
        let mut cursor = Cursor {
            buf: input,
            pos: 0,
            base: 0,
        };
        let value = self.decode_value(&mut cursor, 0)?;
        if cursor.remaining() > 0 {
            return Err(DecodeError::new(
                DecodeErrorKind::TrailingBytes(cursor.remaining()),
                cursor.offset(),
            ));
        }
        Ok(value)
    }

    fn decode_value(&self, cursor: &mut Cursor<'_>, depth: usize) -> Result<Value, DecodeError> {
        let header_offset = cursor.offset();
        let header = cursor.read_byte()?;
        if header == NONE_BYTE {
            return Ok(Value::None);
        }
        let class = header >> 5;
        if class > CLASS_SEQUENCE {
            return Err(DecodeError::new(
                DecodeErrorKind::UnsupportedType(class),
                header_offset,
            ));
        }
        let v = self.read_token_tail(cursor, header, header_offset)?;
        match class {
            CLASS_INTEGER => {
                if v > u128::from(u64::MAX) {
                    return Err(DecodeError::new(DecodeErrorKind::OutOfRange(v), header_offset));
                }
                Ok(Value::Integer(v as i128))
            }
            CLASS_NEGATIVE_INTEGER => {
                // Magnitudes above 2^63 - 1 would underflow the signed
                // domain even though the token itself is well formed.
                if v > (1_u128 << 63) - 1 {
                    return Err(DecodeError::new(DecodeErrorKind::OutOfRange(v), header_offset));
                }
                Ok(Value::Integer(-(v as i128) - 1))
            }
            CLASS_BYTES => {
                let body = cursor.take(v)?;
                Ok(Value::Bytes(body.to_vec()))
            }
            CLASS_STRING => {
                let payload_offset = cursor.offset();
                let body = cursor.take(v)?;
                match Value::string_from_utf8(body.to_vec()) {
                    Ok(value) => Ok(value),
                    Err(e) => Err(DecodeError::new(
                        DecodeErrorKind::InvalidUtf8,
                        payload_offset + e.valid_up_to(),
                    )),
                }
            }
            CLASS_SEQUENCE => {
                if depth >= self.options.max_depth {
                    return Err(DecodeError::new(
                        DecodeErrorKind::NestingTooDeep(self.options.max_depth),
                        header_offset,
                    ));
                }
                let body_offset = cursor.offset();
                let body = cursor.take(v)?;
                let mut sub = Cursor {
                    buf: body,
                    pos: 0,
                    base: body_offset,
                };
                let mut items = Vec::new();
                while sub.remaining() > 0 {
                    items.push(self.decode_value(&mut sub, depth + 1)?);
                }
                Ok(Value::Sequence(items))
            }
            _ => unreachable!("class checked above"),
        }
    }

    /// Reconstructs the token magnitude after its header byte has been read.
    fn read_token_tail(
        &self,
        cursor: &mut Cursor<'_>,
        header: u8,
        header_offset: usize,
    ) -> Result<u128, DecodeError> {
        let p = header & 0x1F;
        if p <= 23 {
            return Ok(u128::from(p));
        }
        let k = usize::from(p - 23);
        let tail = cursor.take(k as u128)?;
        let mut le = [0u8; 8];
        le[..k].copy_from_slice(tail);
        let w = u64::from_le_bytes(le);
        if self.options.strict_canonical && k >= 2 && w < 1_u64 << (8 * (k - 1)) {
            return Err(DecodeError::new(
                DecodeErrorKind::NonCanonical {
                    width: k,
                    minimal: tail_width(w),
                },
                header_offset,
            ));
        }
        Ok(u128::from(w) + EXTENDED_BIAS)
    }
}

/// Read position over a byte buffer.
///
/// Sub-cursors created for sequence payloads carry the absolute offset of
/// their first byte in `base`, so errors anywhere in the tree report
/// top-level offsets.
struct Cursor<'buf> {
    buf: &'buf [u8],
    pos: usize,
    base: usize,
}

impl<'buf> Cursor<'buf> {
    fn offset(&self) -> usize {
        self.base + self.pos
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let Some(&byte) = self.buf.get(self.pos) else {
            return Err(DecodeError::new(
                DecodeErrorKind::Truncated {
                    needed: 1,
                    available: 0,
                },
                self.offset(),
            ));
        };
        self.pos += 1;
        Ok(byte)
    }

    /// Consumes `len` bytes, failing with `Truncated` if fewer remain.
    ///
    /// `len` is a token magnitude and may exceed `usize`; no real buffer can
    /// satisfy such a length, so the comparison is done in `u128`.
    fn take(&mut self, len: u128) -> Result<&'buf [u8], DecodeError> {
        if len > self.remaining() as u128 {
            return Err(DecodeError::new(
                DecodeErrorKind::Truncated {
                    needed: len,
                    available: self.remaining(),
                },
                self.offset(),
            ));
        }
        let len = len as usize;
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }
}
