//! Encoder and decoder for DBOR (Data Binary Object Representation) values at
//! conformance level 2 of the DBOR 1.0.0 specification.
//!
//! The supported value domain is [`Value`]: `None`, integers in the combined
//! range `-2^63 ..= 2^64 - 1`, byte strings, UTF-8 strings, and nested
//! sequences. [`encode`] and [`decode`] are exact inverses over that domain:
//! decoding an encoded value yields a structurally equal value, and encoding
//! is deterministic, always producing the canonical (minimal-width) form.
//!
//! Every typed header in the format shares a single variable-length integer
//! token: a header byte carrying a 3-bit class and a 5-bit payload nibble,
//! optionally followed by 1–8 little-endian bytes of the magnitude biased by
//! 24. Strings and byte strings follow the token with their raw octets;
//! sequences follow it with the concatenated encodings of their children, so
//! a decoder can skip any value without inspecting its content.
//!
//! # Examples
//!
//! ```
//! use dbor::{decode, encode, Value, sequence};
//!
//! let value = sequence![1u8, "A", Value::Bytes(vec![0x01, 0x02])];
//! let bytes = encode(&value)?;
//! assert_eq!(bytes, [0x86, 0x01, 0x61, 0x41, 0x42, 0x01, 0x02]);
//! assert_eq!(decode(&bytes)?, value);
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```
//!
//! Decoding is strict by default: inputs using a wider integer token than the
//! value requires are rejected with [`DecodeErrorKind::NonCanonical`]. Pass
//! [`DecodeOptions`] to a [`Decoder`] to accept such inputs from foreign
//! encoders, or to bound sequence nesting.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decode;
mod encode;
mod token;
mod value;

#[cfg(test)]
mod tests;

pub use decode::{
    DEFAULT_MAX_DEPTH, DecodeError, DecodeErrorKind, DecodeOptions, Decoder, decode,
};
pub use encode::{EncodeError, EncodeErrorKind, encode, encode_into};
pub use value::{Bytes, InvalidUtf8, Sequence, Value};

#[doc(hidden)]
pub use alloc::vec;

/// Macro to build a [`Value::Sequence`] from a heterogeneous list of items,
/// each convertible into a [`Value`].
///
/// ```rust
/// # use dbor::{sequence, Value};
/// let v = sequence![23u8, "A", Value::None];
/// assert_eq!(
///     v,
///     Value::Sequence(vec![
///         Value::Integer(23),
///         Value::String("A".into()),
///         Value::None,
///     ])
/// );
/// ```
#[macro_export]
macro_rules! sequence {
    ( $( $elem:expr ),* $(,)? ) => {
        $crate::Value::Sequence($crate::vec![$($crate::Value::from($elem)),*])
    };
}
