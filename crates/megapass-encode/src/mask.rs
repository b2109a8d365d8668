//! Stage 1: scramble the record with a fixed XOR mask.

use megapass_common::{ITEM_H_BIT, Mode, ProgressRecord, VariantConfig, Word40};

/// Fixed scramble mask. Any other value yields passwords the games reject.
pub const SCRAMBLE_MASK: u64 = 0b0101100101010100010110000010001100001000;

/// Apply the variant's bit-`h` policy, then XOR with [`SCRAMBLE_MASK`].
pub fn mask(record: ProgressRecord, config: &VariantConfig, mode: Mode) -> Word40 {
    scramble(prepare(record, config, mode))
}

/// XOR with [`SCRAMBLE_MASK`]. Its own inverse.
pub fn scramble(word: Word40) -> Word40 {
    Word40::truncate(word.get() ^ SCRAMBLE_MASK)
}

/// The record as it enters the mask, after the bit-`h` policy ran.
pub fn prepare(record: ProgressRecord, config: &VariantConfig, mode: Mode) -> Word40 {
    let mut raw = record.as_u64();
    if config.clears_item_h(mode) {
        raw &= !ITEM_H_BIT;
    }
    Word40::truncate(raw)
}

/// Undo [`mask`]'s XOR. Bit `h`, if it was cleared, stays cleared.
pub fn unmask(masked: Word40) -> Word40 {
    scramble(masked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use megapass_common::Variant;
    use proptest::prelude::*;

    #[test]
    fn ultimate_record_masked() {
        let iv = Variant::MegaManIV.config();
        assert_eq!(
            mask(ProgressRecord::ULTIMATE, iv, Mode::Authentic).get(),
            0xA6_AB_9A_5F_F7
        );
    }

    #[test]
    fn mega_man_v_clears_item_h_only_when_authentic() {
        let v = Variant::MegaManV.config();
        let authentic = mask(ProgressRecord::ULTIMATE, v, Mode::Authentic);
        let reference = mask(ProgressRecord::ULTIMATE, v, Mode::Reference);
        assert_eq!(authentic.get(), 0xA6_AB_1A_5F_F7);
        assert_eq!(reference.get(), 0xA6_AB_9A_5F_F7);
        assert_eq!(authentic.get() ^ reference.get(), ITEM_H_BIT);
    }

    #[test]
    fn clearing_item_h_is_idempotent() {
        let v = Variant::MegaManV.config();
        let record = ProgressRecord::from_raw(ProgressRecord::ULTIMATE.as_u64() & !ITEM_H_BIT)
            .unwrap();
        assert_eq!(
            prepare(record, v, Mode::Authentic),
            prepare(ProgressRecord::ULTIMATE, v, Mode::Authentic)
        );
        assert_eq!(prepare(record, v, Mode::Authentic), record.word());
    }

    #[test]
    fn mask_is_scramble_of_prepared_record() {
        for variant in Variant::ALL {
            for mode in [Mode::Authentic, Mode::Reference] {
                let config = variant.config();
                let prepared = prepare(ProgressRecord::ULTIMATE, config, mode);
                assert_eq!(
                    scramble(prepared),
                    mask(ProgressRecord::ULTIMATE, config, mode)
                );
            }
        }
    }

    proptest! {
        #[test]
        fn unmask_recovers_premask_value(raw in 0u64..(1 << 40)) {
            let record = ProgressRecord::from_raw(raw).unwrap();
            let config = Variant::MegaManIV.config();
            let masked = mask(record, config, Mode::Authentic);
            prop_assert_eq!(unmask(masked), record.word());
        }
    }
}
