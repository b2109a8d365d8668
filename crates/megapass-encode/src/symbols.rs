//! Stage 6: two-bit groups to glyphs, plus the optional trailer.

use megapass_common::{Mode, Symbol, VariantConfig, Word48};
use smallvec::SmallVec;

/// Longest password any variant produces.
pub const MAX_SYMBOLS: usize = 25;

pub type SymbolBuf = SmallVec<[Symbol; MAX_SYMBOLS]>;

/// Glyph for one two-bit code. Only code `10` depends on the variant.
pub fn symbol_for(code: u8, config: &VariantConfig) -> Symbol {
    match code & 0b11 {
        0b00 => Symbol::R,
        0b01 => Symbol::E,
        0b10 => config.glyph_10,
        _ => Symbol::Dash,
    }
}

pub fn to_symbols(mixed: Word48, config: &VariantConfig, mode: Mode) -> SymbolBuf {
    let mut symbols: SymbolBuf = mixed.pairs().map(|code| symbol_for(code, config)).collect();
    if let Some(trailer) = config.trailer_symbol(mode) {
        symbols.push(trailer);
    }
    symbols
}

#[cfg(test)]
mod tests {
    use super::*;
    use megapass_common::Variant;
    use std::collections::HashSet;

    fn render(symbols: &[Symbol]) -> String {
        symbols.iter().map(|s| s.as_char()).collect()
    }

    #[test]
    fn mapping_is_total_and_injective() {
        for variant in Variant::ALL {
            let config = variant.config();
            let glyphs: HashSet<Symbol> = (0..4).map(|code| symbol_for(code, config)).collect();
            assert_eq!(glyphs.len(), 4, "{variant} maps two codes to one glyph");
        }
    }

    #[test]
    fn only_code_10_differs() {
        let iv = Variant::MegaManIV.config();
        let v = Variant::MegaManV.config();
        assert_eq!(symbol_for(0b00, iv), symbol_for(0b00, v));
        assert_eq!(symbol_for(0b01, iv), symbol_for(0b01, v));
        assert_eq!(symbol_for(0b11, iv), symbol_for(0b11, v));
        assert_eq!(symbol_for(0b10, iv), Symbol::B);
        assert_eq!(symbol_for(0b10, v), Symbol::T);
    }

    #[test]
    fn worked_example_symbols() {
        let mixed = Word48::truncate(0xFB_DE_3C_0F_97_FE);
        let iv = to_symbols(mixed, Variant::MegaManIV.config(), Mode::Authentic);
        assert_eq!(render(&iv), "--B--E-BR--RRR--BEE----B");

        let v = to_symbols(mixed, Variant::MegaManV.config(), Mode::Reference);
        assert_eq!(render(&v), "--T--E-TR--RRR--TEE----T-");
    }

    #[test]
    fn trailer_follows_mode() {
        let config = Variant::MegaManV.config();
        let authentic = to_symbols(Word48::ZERO, config, Mode::Authentic);
        let reference = to_symbols(Word48::ZERO, config, Mode::Reference);
        assert_eq!(authentic.len(), 25);
        assert_eq!(authentic.last(), Some(&Symbol::R));
        assert_eq!(reference.last(), Some(&Symbol::Dash));
        assert_eq!(authentic[..24], reference[..24]);

        let iv = to_symbols(Word48::ZERO, Variant::MegaManIV.config(), Mode::Reference);
        assert_eq!(iv.len(), 24);
        assert!(!iv.spilled());
    }
}
