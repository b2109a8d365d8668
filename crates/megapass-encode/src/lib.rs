//! Password encoder for Mega Man IV and Mega Man V.
//!
//! A 40-bit [`ProgressRecord`](megapass_common::ProgressRecord) flows through
//! a fixed, order-sensitive pipeline:
//!
//! 1. [`mask`]: optional bit-`h` clear, then XOR with [`SCRAMBLE_MASK`]
//! 2. [`checksum`]: popcount mod 8 and nibble sum mod 32
//! 3. [`rotate`]: rotate right by the second checksum
//! 4. [`embed`]: append both checksums, giving 48 bits
//! 5. [`mix`]: add [`MIX_KEY`] byte by byte, mod 256
//! 6. [`symbols`]: two bits per glyph, plus the Mega Man V trailer
//! 7. [`grid`]: column-major display layout
//!
//! [`Encoder`] drives the stages for one variant and [`Mode`](megapass_common::Mode).
//! Enable the `tracing` feature to log every intermediate value at `debug`.

pub mod checksum;
pub mod embed;
pub mod grid;
pub mod mask;
pub mod mix;
pub mod pipeline;
pub mod rotate;
pub mod symbols;

pub use checksum::Checksums;
pub use grid::Grid;
pub use mask::SCRAMBLE_MASK;
pub use mix::MIX_KEY;
pub use pipeline::{EncodeTrace, EncodedPassword, Encoder, encode};
pub use rotate::{rotate_left, rotate_right};
pub use symbols::to_symbols;
