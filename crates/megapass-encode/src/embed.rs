//! Stage 4: append both checksums below the rotated record.

use megapass_common::{Word40, Word48};

use crate::checksum::Checksums;

/// `[rotated:40][first:3][second:5]`, most significant first.
pub fn embed(rotated: Word40, checksums: Checksums) -> Word48 {
    Word48::truncate((rotated.get() << 8) | u64::from(checksums.packed()))
}

/// Split an embedded word back into its record and checksum parts.
pub fn split(embedded: Word48) -> (Word40, Checksums) {
    let raw = embedded.get();
    let checksums = Checksums {
        first: ((raw >> 5) & 0b111) as u8,
        second: (raw & 0b1_1111) as u8,
    };
    (Word40::truncate(raw >> 8), checksums)
}
