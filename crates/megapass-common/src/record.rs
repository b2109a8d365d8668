//! The 40-bit progress record and its named field layout.
//!
//! ```text
//! 12345678 m abcdefgh EEE ee WWW S B PPPPPPPPPP LLL
//! 39    32 31 30   23 22  19  17 14 13 12     3 2 0
//! ```
//!
//! The P-chip field stores the low eight bits of the count first and the two
//! most-significant bits at its low end.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::PasswordError;
use crate::word::{WORD40_BITS, Word40};

const BOSS_SHIFT: u32 = 32;
const MINIBOSS_BIT: u32 = 31;
const ITEM_SHIFT: u32 = 23;
const ENERGY_TANK_SHIFT: u32 = 20;
const TANK_PIECE_SHIFT: u32 = 18;
const WEAPON_TANK_SHIFT: u32 = 15;
const SUPER_TANK_BIT: u32 = 14;
const BALANCER_BIT: u32 = 13;
const P_CHIP_SHIFT: u32 = 3;
const LIVES_SHIFT: u32 = 0;

const ENERGY_TANK_BITS: u32 = 3;
const TANK_PIECE_BITS: u32 = 2;
const WEAPON_TANK_BITS: u32 = 3;
const P_CHIP_BITS: u32 = 10;
const LIVES_BITS: u32 = 3;

/// Bit `h`, the eighth item flag. Mega Man V has only seven items.
pub const ITEM_H_BIT: u64 = 1 << ITEM_SHIFT;

/// Player progress unpacked into named fields.
///
/// Flags are listed in password order: `bosses[0]` and `items[0]` occupy the
/// most significant bit of their group.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProgressFields {
    pub bosses: [bool; 8],
    pub miniboss: bool,
    pub items: [bool; 8],
    pub energy_tanks: u8,
    pub tank_pieces: u8,
    pub weapon_tanks: u8,
    pub super_tank: bool,
    pub energy_balancer: bool,
    pub p_chips: u16,
    /// Lives above the baseline of two.
    pub extra_lives: u8,
}

impl ProgressFields {
    /// Everything beaten and collected, maximum stock on every counter the
    /// games let a player reach.
    pub fn ultimate() -> Self {
        ProgressRecord::ULTIMATE.fields()
    }
}

/// A packed, validated 40-bit progress record.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ProgressRecord(Word40);

impl ProgressRecord {
    /// All bosses, all items, 4 E-tanks, 4 W-tanks, S-tank, balancer,
    /// 999 P-chips and 7 extra lives.
    pub const ULTIMATE: Self = Self(Word40::truncate(0xFF_FF_C2_7C_FF));

    pub const EMPTY: Self = Self(Word40::ZERO);

    /// Accept an already-packed record, rejecting anything wider than 40 bits.
    pub fn from_raw(raw: u64) -> Result<Self, PasswordError> {
        PasswordError::check_width("record", raw, WORD40_BITS)?;
        Ok(Self(Word40::truncate(raw)))
    }

    /// Pack named fields, rejecting counters that overflow their width.
    pub fn from_fields(fields: &ProgressFields) -> Result<Self, PasswordError> {
        let check = PasswordError::check_width;
        let energy_tanks = check("energy_tanks", fields.energy_tanks.into(), ENERGY_TANK_BITS)?;
        let tank_pieces = check("tank_pieces", fields.tank_pieces.into(), TANK_PIECE_BITS)?;
        let weapon_tanks = check("weapon_tanks", fields.weapon_tanks.into(), WEAPON_TANK_BITS)?;
        let p_chips = check("p_chips", fields.p_chips.into(), P_CHIP_BITS)?;
        let extra_lives = check("extra_lives", fields.extra_lives.into(), LIVES_BITS)?;

        let mut raw = pack_flags(&fields.bosses) << BOSS_SHIFT;
        raw |= (fields.miniboss as u64) << MINIBOSS_BIT;
        raw |= pack_flags(&fields.items) << ITEM_SHIFT;
        raw |= energy_tanks << ENERGY_TANK_SHIFT;
        raw |= tank_pieces << TANK_PIECE_SHIFT;
        raw |= weapon_tanks << WEAPON_TANK_SHIFT;
        raw |= (fields.super_tank as u64) << SUPER_TANK_BIT;
        raw |= (fields.energy_balancer as u64) << BALANCER_BIT;
        raw |= swizzle_p_chips(p_chips) << P_CHIP_SHIFT;
        raw |= extra_lives << LIVES_SHIFT;
        Ok(Self(Word40::truncate(raw)))
    }

    /// Unpack into named fields. Exact inverse of [`ProgressRecord::from_fields`].
    pub fn fields(self) -> ProgressFields {
        let raw = self.0.get();
        let take = |shift: u32, bits: u32| (raw >> shift) & ((1 << bits) - 1);
        ProgressFields {
            bosses: unpack_flags(take(BOSS_SHIFT, 8)),
            miniboss: self.0.bit(MINIBOSS_BIT),
            items: unpack_flags(take(ITEM_SHIFT, 8)),
            energy_tanks: take(ENERGY_TANK_SHIFT, ENERGY_TANK_BITS) as u8,
            tank_pieces: take(TANK_PIECE_SHIFT, TANK_PIECE_BITS) as u8,
            weapon_tanks: take(WEAPON_TANK_SHIFT, WEAPON_TANK_BITS) as u8,
            super_tank: self.0.bit(SUPER_TANK_BIT),
            energy_balancer: self.0.bit(BALANCER_BIT),
            p_chips: unswizzle_p_chips(take(P_CHIP_SHIFT, P_CHIP_BITS)) as u16,
            extra_lives: take(LIVES_SHIFT, LIVES_BITS) as u8,
        }
    }

    #[inline(always)]
    pub const fn word(self) -> Word40 {
        self.0
    }

    #[inline(always)]
    pub const fn as_u64(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ProgressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u64> for ProgressRecord {
    type Error = PasswordError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

fn pack_flags(flags: &[bool; 8]) -> u64 {
    flags.iter().fold(0, |acc, &flag| (acc << 1) | flag as u64)
}

fn unpack_flags(bits: u64) -> [bool; 8] {
    let mut flags = [false; 8];
    for (i, flag) in flags.iter_mut().enumerate() {
        *flag = (bits >> (7 - i)) & 1 != 0;
    }
    flags
}

// 10-bit count -> field with the count's top two bits moved to the low end.
fn swizzle_p_chips(count: u64) -> u64 {
    ((count & 0xFF) << 2) | (count >> 8)
}

fn unswizzle_p_chips(field: u64) -> u64 {
    ((field & 0b11) << 8) | (field >> 2)
}
