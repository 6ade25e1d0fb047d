mod roundtrip;

use alloc::{string::String, vec::Vec};

/// Parses a whitespace-separated hex dump into bytes.
pub(crate) fn hex_bytes(dump: &str) -> Vec<u8> {
    hex::decode(dump.split_whitespace().collect::<String>()).expect("valid hex dump")
}
