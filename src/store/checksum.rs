//! CRC32 line checksums for the file-backed store
//!
//! Each data-file line carries a CRC32 (IEEE) of its JSON payload as
//! eight lowercase hex digits. Every load verifies the checksum; a
//! mismatch aborts the open.

use crc32fast::Hasher;

/// CRC32 of the payload bytes.
pub fn compute(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Checksum in the on-disk form: eight lowercase hex digits.
pub fn encode(data: &[u8]) -> String {
    format!("{:08x}", compute(data))
}

/// Parses the on-disk form. None for anything but 8 hex digits.
pub fn decode(text: &str) -> Option<u32> {
    if text.len() != 8 {
        return None;
    }
    u32::from_str_radix(text, 16).ok()
}

/// True if the payload matches its recorded checksum.
pub fn verify(data: &[u8], expected: u32) -> bool {
    compute(data) == expected
}
