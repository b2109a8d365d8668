//! Stage 2: the two integrity values the game recomputes on entry.

use megapass_common::Word40;

const FIRST_MASK: u8 = 0b111;
const SECOND_MASK: u8 = 0b1_1111;

/// Both checksums of a masked record.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Checksums {
    /// Population count mod 8 (3 bits).
    pub first: u8,
    /// Sum of the record's nibbles mod 32 (5 bits). Doubles as the rotation amount.
    pub second: u8,
}

impl Checksums {
    pub fn of(masked: Word40) -> Self {
        Self {
            first: popcount_checksum(masked),
            second: nibble_checksum(masked),
        }
    }

    /// The eight checksum bits, `first` above `second`. Each field is cut to
    /// its width, so an oversized value never leaks into its neighbour.
    pub fn packed(self) -> u8 {
        ((self.first & FIRST_MASK) << 5) | (self.second & SECOND_MASK)
    }
}

pub fn popcount_checksum(masked: Word40) -> u8 {
    (masked.count_ones() % 8) as u8
}

// The reference treats the record as twelve nibbles of a 48-bit word; the top
// two are always zero, so summing the ten real ones is identical.
pub fn nibble_checksum(masked: Word40) -> u8 {
    let raw = masked.get();
    let sum: u64 = (0..10).map(|i| (raw >> (i * 4)) & 0xF).sum();
    (sum % 32) as u8
}
