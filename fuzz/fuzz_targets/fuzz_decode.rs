#![no_main]
use dbor::{decode, encode};
use libfuzzer_sys::fuzz_target;

// Decoding arbitrary bytes must never panic. When an input is accepted, the
// default decoder is strict, so the input is canonical and the value must
// re-encode to the identical bytes.
fuzz_target!(|data: &[u8]| {
    if let Ok(value) = decode(data) {
        let bytes = encode(&value).expect("decoded values always re-encode");
        assert_eq!(bytes, data);
        assert_eq!(decode(&bytes).expect("own encoding decodes"), value);
    }
});
