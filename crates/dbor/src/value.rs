//! DBOR value types and utilities.
//!
//! This module defines the [`Value`] enum, which represents any DBOR value at
//! conformance level 2, together with checked constructors for the two
//! variants that carry invariants (integer range and UTF-8 well-formedness).

use alloc::{string::String, vec::Vec};

use thiserror::Error;

use crate::encode::{EncodeError, EncodeErrorKind};

/// The items of a [`Value::Sequence`].
pub type Sequence = Vec<Value>;
/// The payload of a [`Value::Bytes`].
pub type Bytes = Vec<u8>;

/// A DBOR value at conformance level 2.
///
/// The `Value` enum can represent:
///
/// - None (the absent value)
/// - Integers in the combined range `-2^63 ..= 2^64 - 1`
/// - Byte strings
/// - UTF-8 strings
/// - Sequences of values
///
/// Ownership is tree-shaped: a sequence exclusively owns its children, and
/// equality is structural. Dictionaries and rational numbers belong to higher
/// conformance levels and are not representable.
///
/// The `Integer` payload is an `i128` so that one variant spans both the
/// signed and the unsigned 64-bit domain. The variant itself is permissive;
/// [`Value::integer`] checks the range up front, and the encoder re-checks it
/// so that an out-of-range `Value::Integer` fails with
/// [`EncodeErrorKind::IntegerOutOfRange`] rather than producing bogus bytes.
///
/// # Examples
///
/// ```
/// use dbor::Value;
///
/// let v = Value::Sequence(vec![Value::Integer(1), Value::String("a".into())]);
/// assert_eq!(v.to_string(), r#"[1, "a"]"#);
/// ```
// Enable serde support for tests and when the optional `serde` feature is
// activated by downstream crates.  The `cfg_attr` conditional keeps the core
// crate free of a serde dependency in normal builds.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    None,
    Integer(i128),
    Bytes(Bytes),
    String(String),
    Sequence(Sequence),
}

impl Default for Value {
    fn default() -> Self {
        Self::None
    }
}

impl Value {
    /// The smallest encodable integer, `-2^63`.
    pub const MIN_INTEGER: i128 = -(1 << 63);
    /// The largest encodable integer, `2^64 - 1`.
    pub const MAX_INTEGER: i128 = (1 << 64) - 1;

    /// Creates an integer value, checking the encodable range.
    ///
    /// The format stores a non-negative integer as a class-0 token of its own
    /// magnitude and a negative integer `n` as a class-1 token of `-n - 1`,
    /// so both classes share a 64-bit magnitude domain. That makes the
    /// combined range asymmetric: `-2^63 ..= 2^64 - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeErrorKind::IntegerOutOfRange`] for inputs outside that
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbor::Value;
    ///
    /// assert_eq!(Value::integer(-1), Ok(Value::Integer(-1)));
    /// assert!(Value::integer(1 << 64).is_err());
    /// ```
    pub fn integer(n: i128) -> Result<Self, EncodeError> {
        if (Self::MIN_INTEGER..=Self::MAX_INTEGER).contains(&n) {
            Ok(Self::Integer(n))
        } else {
            Err(EncodeError::new(EncodeErrorKind::IntegerOutOfRange(n)))
        }
    }

    /// Creates a string value from raw octets, verifying UTF-8
    /// well-formedness.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUtf8`] if the octets are not well-formed UTF-8;
    /// overlong forms, surrogate code points, and incomplete multibyte
    /// sequences are all rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbor::Value;
    ///
    /// let v = Value::string_from_utf8(vec![0x4F, 0x6C, 0xC3, 0xA9])?;
    /// assert_eq!(v, Value::String("Olé".into()));
    ///
    /// let err = Value::string_from_utf8(vec![0x41, 0xFF]).unwrap_err();
    /// assert_eq!(err.valid_up_to(), 1);
    /// # Ok::<(), dbor::InvalidUtf8>(())
    /// ```
    pub fn string_from_utf8(octets: Vec<u8>) -> Result<Self, InvalidUtf8> {
        String::from_utf8(octets).map(Self::String).map_err(|e| InvalidUtf8 {
            valid_up_to: e.utf8_error().valid_up_to(),
        })
    }

    /// Returns `true` if the value is [`None`].
    ///
    /// [`None`]: Value::None
    ///
    /// # Examples
    ///
    /// ```
    /// use dbor::Value;
    ///
    /// assert!(Value::None.is_none());
    /// assert!(!Value::Integer(0).is_none());
    /// ```
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    ///
    /// # Examples
    ///
    /// ```
    /// use dbor::Value;
    ///
    /// assert!(Value::Integer(-1).is_integer());
    /// assert!(!Value::None.is_integer());
    /// ```
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Bytes`].
    ///
    /// [`Bytes`]: Value::Bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use dbor::Value;
    ///
    /// assert!(Value::Bytes(vec![1, 2]).is_bytes());
    /// assert!(!Value::String("12".into()).is_bytes());
    /// ```
    #[must_use]
    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    ///
    /// # Examples
    ///
    /// ```
    /// use dbor::Value;
    ///
    /// assert!(Value::String("foo".into()).is_string());
    /// assert!(!Value::Bytes(vec![0x66]).is_string());
    /// ```
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Sequence`].
    ///
    /// [`Sequence`]: Value::Sequence
    ///
    /// # Examples
    ///
    /// ```
    /// use dbor::Value;
    ///
    /// assert!(Value::Sequence(vec![Value::None]).is_sequence());
    /// assert!(!Value::None.is_sequence());
    /// ```
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(..))
    }

    /// Returns the integer payload, or `None` for other variants.
    #[must_use]
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the byte-string payload, or `None` for other variants.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the string payload, or `None` for other variants.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the sequence items, or `None` for other variants.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

macro_rules! impl_from_int {
    ( $( $ty:ty ),* ) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Integer(i128::from(n))
                }
            }
        )*
    };
}

// Every primitive integer up to 64 bits fits the combined range, so these
// conversions are infallible. `i128`/`u128` sources go through
// `Value::integer`.
impl_from_int!(u8, u16, u32, u64, i8, i16, i32, i64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Self::Bytes(b.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

/// Error returned by [`Value::string_from_utf8`] for octets that are not
/// well-formed UTF-8.
///
/// The same validation backs the decoder, which maps this error to
/// [`InvalidUtf8`](crate::DecodeErrorKind::InvalidUtf8) at the offending
/// input offset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("string payload is not well-formed UTF-8 at byte {valid_up_to}")]
pub struct InvalidUtf8 {
    valid_up_to: usize,
}

impl InvalidUtf8 {
    /// Index of the first octet that is not part of a valid UTF-8 sequence.
    #[must_use]
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }
}

/// Renders a human-readable diagnostic notation: `None`, decimal integers,
/// byte strings as `h'..'` hex, quoted strings with `Debug`-style character
/// escapes, and bracketed sequences.
///
/// This is a debugging aid only; the binary encoding is produced by
/// [`encode`](crate::encode).
impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Bytes(bytes) => {
                f.write_str("h'")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                f.write_str("'")
            }
            Value::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    // escape_debug targets single-quoted char literals;
                    // inside a double-quoted literal the quote stays bare.
                    if c == '\'' {
                        f.write_str("'")?;
                    } else {
                        write!(f, "{}", c.escape_debug())?;
                    }
                }
                f.write_str("\"")
            }
            Value::Sequence(items) => {
                f.write_str("[")?;
                let mut first = true;
                for item in items {
                    if !first {
                        f.write_str(", ")?;
                    }
                    first = false;
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;
    use crate::sequence;

    #[test]
    fn integer_constructor_checks_range() {
        assert_eq!(Value::integer(0), Ok(Value::Integer(0)));
        assert_eq!(
            Value::integer(Value::MIN_INTEGER),
            Ok(Value::Integer(Value::MIN_INTEGER))
        );
        assert_eq!(
            Value::integer(Value::MAX_INTEGER),
            Ok(Value::Integer(Value::MAX_INTEGER))
        );
        assert!(Value::integer(Value::MAX_INTEGER + 1).is_err());
        assert!(Value::integer(Value::MIN_INTEGER - 1).is_err());
    }

    #[test]
    fn string_constructor_rejects_malformed_utf8() {
        assert!(Value::string_from_utf8(vec![0xC3, 0xA9]).is_ok());
        // Overlong encoding of '/', a surrogate, and a lone continuation.
        assert!(Value::string_from_utf8(vec![0xC0, 0xAF]).is_err());
        assert!(Value::string_from_utf8(vec![0xED, 0xA0, 0x80]).is_err());
        assert!(Value::string_from_utf8(vec![0x80]).is_err());
    }

    #[test]
    fn string_constructor_reports_first_invalid_octet() {
        let err = Value::string_from_utf8(vec![0x41, 0x42, 0xC0, 0xAF]).unwrap_err();
        assert_eq!(err.valid_up_to(), 2);
        assert_eq!(
            err.to_string(),
            "string payload is not well-formed UTF-8 at byte 2"
        );
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Integer(7).as_integer(), Some(7));
        assert_eq!(Value::None.as_integer(), None);
        assert_eq!(Value::Bytes(vec![1]).as_bytes(), Some(&[1u8][..]));
        assert_eq!(Value::String("x".into()).as_str(), Some("x"));
        assert_eq!(
            Value::Sequence(vec![Value::None]).as_sequence(),
            Some(&[Value::None][..])
        );
    }

    #[test]
    fn sequence_macro_converts_items() {
        assert_eq!(sequence![], Value::Sequence(vec![]));
        assert_eq!(
            sequence![1u8, "A", vec![0x01u8, 0x02]],
            Value::Sequence(vec![
                Value::Integer(1),
                Value::String("A".into()),
                Value::Bytes(vec![0x01, 0x02]),
            ])
        );
    }

    #[test]
    fn display_diagnostic_notation() {
        assert_eq!(Value::None.to_string(), "None");
        assert_eq!(Value::Integer(-24).to_string(), "-24");
        assert_eq!(Value::Bytes(vec![0x01, 0xAB]).to_string(), "h'01ab'");
        assert_eq!(
            Value::String("a\"b\\c\n\u{1} '".into()).to_string(),
            "\"a\\\"b\\\\c\\n\\u{1} '\""
        );
        assert_eq!(
            sequence![Value::None, sequence![]].to_string(),
            "[None, []]"
        );
    }
}
