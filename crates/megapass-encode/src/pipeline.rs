use core::fmt;

use megapass_common::{
    EncoderConfig, Mode, PasswordError, ProgressRecord, Symbol, Variant, Word40, Word48,
};

use crate::checksum::Checksums;
use crate::grid::Grid;
use crate::symbols::SymbolBuf;
use crate::{embed, mask, mix, rotate, symbols};

/// Every intermediate value of one encode call, in pipeline order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EncodeTrace {
    /// Record after the bit-`h` policy, before masking.
    pub record: Word40,
    pub masked: Word40,
    pub checksums: Checksums,
    pub rotated: Word40,
    pub embedded: Word48,
    pub mixed: Word48,
}

/// A finished password. The grid is derived on demand from the flat symbols.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncodedPassword {
    variant: Variant,
    symbols: SymbolBuf,
}

impl EncodedPassword {
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn as_string(&self) -> String {
        self.symbols.iter().map(|s| s.as_char()).collect()
    }

    /// Column-major grid in the variant's display shape.
    pub fn grid(&self) -> Grid<'_> {
        let config = self.variant.config();
        Grid::checked_at_encode(&self.symbols, config.rows, config.columns)
    }
}

impl fmt::Display for EncodedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Runs the encode pipeline for one variant and mode.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    pub fn new(variant: Variant, mode: Mode) -> Self {
        Self {
            config: EncoderConfig { variant, mode },
        }
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn encode(&self, record: &ProgressRecord) -> Result<EncodedPassword, PasswordError> {
        self.encode_traced(record).map(|(password, _)| password)
    }

    pub fn encode_traced(
        &self,
        record: &ProgressRecord,
    ) -> Result<(EncodedPassword, EncodeTrace), PasswordError> {
        let EncoderConfig { variant, mode } = self.config;
        let config = variant.config();

        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("encode", game = variant.short_name(), %mode).entered();

        let prepared = mask::prepare(*record, config, mode);
        let masked = mask::scramble(prepared);
        #[cfg(feature = "tracing")]
        tracing::debug!(record = %prepared, masked = %masked, "masked record");

        let checksums = Checksums::of(masked);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            first = checksums.first,
            second = checksums.second,
            "computed checksums"
        );

        let rotated = rotate::rotate_right(masked, checksums.second.into());
        let embedded = embed::embed(rotated, checksums);
        let mixed = mix::mix(embedded);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            rotated = %rotated,
            embedded = %embedded,
            mixed = %mixed,
            "embedded and mixed"
        );

        let symbols = symbols::to_symbols(mixed, config, mode);
        Grid::new(&symbols, config.rows, config.columns)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(len = symbols.len(), "laid out password");

        let trace = EncodeTrace {
            record: prepared,
            masked,
            checksums,
            rotated,
            embedded,
            mixed,
        };
        Ok((EncodedPassword { variant, symbols }, trace))
    }
}

/// Encode `record` for `variant` in the given mode.
pub fn encode(
    record: &ProgressRecord,
    variant: Variant,
    mode: Mode,
) -> Result<EncodedPassword, PasswordError> {
    Encoder::new(variant, mode).encode(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_and_string_share_symbols() {
        let password = Encoder::new(Variant::MegaManV, Mode::Reference)
            .encode(&ProgressRecord::ULTIMATE)
            .unwrap();
        assert_eq!(password.as_string(), "--T--E-TR--RRR--TEE----T-");
        assert_eq!(password.to_string(), password.as_string());
        let grid = password.grid();
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                assert_eq!(
                    grid.get(row, column),
                    Some(password.symbols()[row + grid.rows() * column])
                );
            }
        }
    }

    #[test]
    fn trace_records_every_stage() {
        let (_, trace) = Encoder::new(Variant::MegaManV, Mode::Authentic)
            .encode_traced(&ProgressRecord::ULTIMATE)
            .unwrap();
        assert_eq!(trace.record.get(), 0xFF_FF_42_7C_FF);
        assert_eq!(trace.masked.get(), 0xA6_AB_1A_5F_F7);
        assert_eq!(mask::scramble(trace.record), trace.masked);
        assert_eq!(trace.checksums.second, 26);
        assert_eq!(trace.rotated.get(), 0xC6_97_FD_E9_AA);
        assert_eq!(trace.embedded.get(), 0xC6_97_FD_E9_AA_3A);
        assert_eq!(trace.mixed.get(), 0xD8_CB_53_61_44_F6);
    }

    #[test]
    fn encoders_are_independent() {
        let iv = Encoder::new(Variant::MegaManIV, Mode::Authentic);
        let v = Encoder::with_config(EncoderConfig::default());
        let a = iv.encode(&ProgressRecord::EMPTY).unwrap();
        let b = v.encode(&ProgressRecord::EMPTY).unwrap();
        assert_eq!(a.symbols().len(), 24);
        assert_eq!(b.symbols().len(), 25);
        assert_eq!(iv.encode(&ProgressRecord::EMPTY).unwrap(), a);
    }
}
