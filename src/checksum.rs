//! CRC-32 as used by the GPT header and partition entry array.
//!
//! This is the reflected ISO-HDLC variant (polynomial `0xEDB88320`, initial value and final XOR
//! `0xFFFFFFFF`), which is exactly what `crc32fast` computes.

/// Computes the CRC-32 of `bytes`.
///
/// # Examples
///
/// ```
/// use gptkit::crc32;
///
/// assert_eq!(crc32(b""), 0);
/// assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
/// ```
#[inline]
#[must_use]
pub fn crc32(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// Computes the checksum stored in a GPT header's `partition_entry_array_crc32` field.
///
/// `bytes` must be the whole encoded array, unused slots included.
#[inline]
#[must_use]
pub fn calculate_partition_entry_array_crc32(bytes: &[u8]) -> u32 {
    crc32(bytes)
}
