//! Stage 3: circular rotation of the masked record within its 40 bits.

use megapass_common::{WORD40_BITS, Word40};

/// Rotate right by `amount` bits: the low `amount` bits become the high bits.
pub fn rotate_right(word: Word40, amount: u32) -> Word40 {
    let amount = amount % WORD40_BITS;
    if amount == 0 {
        return word;
    }
    let raw = word.get();
    Word40::truncate((raw >> amount) | (raw << (WORD40_BITS - amount)))
}

/// Inverse of [`rotate_right`].
pub fn rotate_left(word: Word40, amount: u32) -> Word40 {
    let amount = amount % WORD40_BITS;
    rotate_right(word, (WORD40_BITS - amount) % WORD40_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn worked_example_rotation() {
        let masked = Word40::truncate(0xA6_AB_9A_5F_F7);
        assert_eq!(rotate_right(masked, 2).get(), 0xE9_AA_E6_97_FD);

        let masked = Word40::truncate(0xA6_AB_1A_5F_F7);
        assert_eq!(rotate_right(masked, 26).get(), 0xC6_97_FD_E9_AA);
    }

    #[test]
    fn low_bits_wrap_to_top() {
        assert_eq!(rotate_right(Word40::truncate(1), 1).get(), 1 << 39);
        assert_eq!(rotate_right(Word40::truncate(0b11), 2).get(), 0b11 << 38);
        assert_eq!(rotate_left(Word40::truncate(1 << 39), 1).get(), 1);
    }

    #[test]
    fn zero_is_identity() {
        let word = Word40::truncate(0x12_34_56_78_9A);
        assert_eq!(rotate_right(word, 0), word);
        assert_eq!(rotate_left(word, 0), word);
    }

    proptest! {
        #[test]
        fn rotations_invert(raw in 0u64..(1 << 40), amount in 0u32..32) {
            let word = Word40::truncate(raw);
            prop_assert_eq!(rotate_right(rotate_left(word, amount), amount), word);
            prop_assert_eq!(rotate_left(rotate_right(word, amount), amount), word);
        }

        #[test]
        fn rotation_preserves_popcount(raw in 0u64..(1 << 40), amount in 0u32..32) {
            let word = Word40::truncate(raw);
            prop_assert_eq!(rotate_right(word, amount).count_ones(), word.count_ones());
        }
    }
}
