//! Fixed-width words carried between pipeline stages.
//!
//! `Word40` holds the masked and rotated progress record, `Word48` holds the
//! record once both checksums are appended. Both live in the low bits of a
//! `u64`; the high bits are always zero.

use core::fmt;

pub const WORD40_BITS: u32 = 40;
pub const WORD48_BITS: u32 = 48;

const WORD40_MASK: u64 = (1 << WORD40_BITS) - 1;
const WORD48_MASK: u64 = (1 << WORD48_BITS) - 1;

/// A 40-bit unsigned value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Word40(u64);

impl Word40 {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(WORD40_MASK);

    /// Keep the low 40 bits of `raw`.
    #[inline(always)]
    pub const fn truncate(raw: u64) -> Self {
        Self(raw & WORD40_MASK)
    }

    #[inline(always)]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub const fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    #[inline(always)]
    pub const fn bit(self, index: u32) -> bool {
        (self.0 >> index) & 1 != 0
    }
}

impl fmt::Display for Word40 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:040b}", self.0)
    }
}

impl From<Word40> for u64 {
    fn from(word: Word40) -> Self {
        word.0
    }
}

/// A 48-bit unsigned value, viewed most-significant byte first.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Word48(u64);

impl Word48 {
    pub const ZERO: Self = Self(0);

    #[inline(always)]
    pub const fn truncate(raw: u64) -> Self {
        Self(raw & WORD48_MASK)
    }

    #[inline(always)]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The six bytes of the word, most significant first.
    pub fn to_be_bytes(self) -> [u8; 6] {
        let wide = self.0.to_be_bytes();
        let mut out = [0u8; 6];
        out.copy_from_slice(&wide[2..]);
        out
    }

    pub fn from_be_bytes(bytes: [u8; 6]) -> Self {
        let mut wide = [0u8; 8];
        wide[2..].copy_from_slice(&bytes);
        Self(u64::from_be_bytes(wide))
    }

    /// The 24 two-bit groups of the word, most significant first.
    pub fn pairs(self) -> impl Iterator<Item = u8> {
        (0..WORD48_BITS / 2)
            .rev()
            .map(move |i| ((self.0 >> (i * 2)) & 0b11) as u8)
    }
}

impl fmt::Display for Word48 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:048b}", self.0)
    }
}

impl From<Word48> for u64 {
    fn from(word: Word48) -> Self {
        word.0
    }
}
