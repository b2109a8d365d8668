//! Stage 5: byte-wise addition of a fixed key, wrapping each byte mod 256.

use megapass_common::Word48;

/// Fixed mixing key, added byte by byte.
pub const MIX_KEY: u64 = 0x1234_5678_9ABC;

pub fn mix(embedded: Word48) -> Word48 {
    combine(embedded, u8::wrapping_add)
}

/// Inverse of [`mix`].
pub fn unmix(mixed: Word48) -> Word48 {
    combine(mixed, u8::wrapping_sub)
}

fn combine(word: Word48, op: fn(u8, u8) -> u8) -> Word48 {
    let key = Word48::truncate(MIX_KEY).to_be_bytes();
    let mut bytes = word.to_be_bytes();
    for (byte, k) in bytes.iter_mut().zip(key) {
        *byte = op(*byte, k);
    }
    Word48::from_be_bytes(bytes)
}
