//! Property tests: encode/decode inversion, determinism, and declared-length
//! consistency.

use alloc::{string::String, vec, vec::Vec};

use quickcheck_macros::quickcheck;

use super::arbitrary::INTEGER_BOUNDARIES;
use crate::{DecodeOptions, Decoder, Value, decode, encode, token};

#[quickcheck]
fn round_trip(value: Value) -> bool {
    let bytes = encode(&value).expect("generated values are valid");
    decode(&bytes).expect("own encoding decodes") == value
}

#[quickcheck]
fn encoding_is_deterministic(value: Value) -> bool {
    encode(&value).expect("valid") == encode(&value).expect("valid")
}

#[quickcheck]
fn canonical_bytes_survive_decode_encode(value: Value) -> bool {
    let bytes = encode(&value).expect("valid");
    encode(&decode(&bytes).expect("valid")).expect("valid") == bytes
}

#[quickcheck]
fn lenient_decoder_agrees_on_canonical_bytes(value: Value) -> bool {
    let bytes = encode(&value).expect("valid");
    let lenient = Decoder::new(DecodeOptions {
        strict_canonical: false,
        ..DecodeOptions::default()
    });
    lenient.decode(&bytes).expect("valid") == value
}

#[test]
fn integer_boundaries_round_trip_at_expected_width() {
    for &n in INTEGER_BOUNDARIES {
        let value = Value::Integer(n);
        let bytes = encode(&value).expect("in range");
        let magnitude = if n >= 0 { n as u128 } else { (-(n + 1)) as u128 };
        assert_eq!(bytes.len(), token::token_len(magnitude), "integer {n}");
        assert_eq!(decode(&bytes).expect("in range"), value, "integer {n}");
    }
}

#[test]
fn octet_lengths_match_declared_token() {
    for len in [0usize, 1, 23, 24, 255, 256, 279, 280, 1000] {
        let value = Value::Bytes(vec![0xAB; len]);
        let encoded = encode(&value).expect("valid");
        assert_eq!(encoded.len(), token::token_len(len as u128) + len);
        assert_eq!(decode(&encoded).expect("valid"), value);

        // ASCII only, so octet count equals char count here.
        let value = Value::String("x".repeat(len));
        let encoded = encode(&value).expect("valid");
        assert_eq!(encoded.len(), token::token_len(len as u128) + len);
        assert_eq!(decode(&encoded).expect("valid"), value);
    }
}

#[test]
fn sequence_header_declares_exact_child_length() {
    let children = vec![
        Value::Integer(1),
        Value::String("A".into()),
        Value::Bytes(vec![1, 2]),
    ];
    let child_bytes: Vec<u8> = children
        .iter()
        .flat_map(|c| encode(c).expect("valid"))
        .collect();
    let encoded = encode(&Value::Sequence(children)).expect("valid");
    assert_eq!(
        encoded.len(),
        token::token_len(child_bytes.len() as u128) + child_bytes.len()
    );
    assert!(encoded.ends_with(&child_bytes));
}

#[test]
fn utf8_strings_count_octets_not_scalars() {
    // Five chars, nine octets: the token must declare nine.
    let text = "Olé 😀";
    assert_eq!(text.chars().count(), 5);
    assert_eq!(text.len(), 9);
    let encoded = encode(&Value::String(String::from(text))).expect("valid");
    assert_eq!(encoded[0], 0x69);
    assert_eq!(decode(&encoded).expect("valid"), Value::String(text.into()));
}

#[test]
fn depth_and_width_grid_round_trips() {
    for depth in 0..=8usize {
        let mut value = Value::Integer(7);
        for _ in 0..depth {
            value = Value::Sequence(vec![value]);
        }
        let bytes = encode(&value).expect("valid");
        assert_eq!(decode(&bytes).expect("valid"), value, "depth {depth}");
    }
    for width in [0usize, 1, 2, 23, 24, 255, 256] {
        let value = Value::Sequence(vec![Value::None; width]);
        let bytes = encode(&value).expect("valid");
        assert_eq!(decode(&bytes).expect("valid"), value, "width {width}");
    }
}
