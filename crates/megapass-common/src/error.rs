//! Error taxonomy for record construction and password layout.
//!
//! Every stage of the encode pipeline is a total function over fixed-width
//! words, so the only failures are precondition violations:
//!
//! - **`InvalidRecord`** : a field (or the whole packed record) does not fit
//!   its declared bit width
//! - **`ShapeMismatch`** : a grid shape does not cover the symbol sequence

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PasswordError {
    /// A caller-supplied value exceeds the width reserved for it.
    #[error("invalid record: `{field}` is {value}, maximum is {max}")]
    InvalidRecord {
        field: &'static str,
        value: u64,
        max: u64,
    },

    /// `rows * columns` does not equal the number of symbols to lay out.
    #[error("grid shape {rows}x{columns} cannot hold {len} symbols")]
    ShapeMismatch {
        rows: usize,
        columns: usize,
        len: usize,
    },
}

impl PasswordError {
    /// Check `value` against a `bits`-wide field, reporting `field` on overflow.
    pub fn check_width(field: &'static str, value: u64, bits: u32) -> Result<u64, Self> {
        let max = (1u64 << bits) - 1;
        if value > max {
            return Err(Self::InvalidRecord { field, value, max });
        }
        Ok(value)
    }
}
