//! Meta crate that re-exports the megapass building blocks. Downstream users
//! can depend on this crate and opt into layers via feature flags while
//! keeping access to the underlying crates.

#[cfg(feature = "common")]
pub use megapass_common as common;

#[cfg(feature = "encode")]
pub use megapass_encode as encode;

#[cfg(feature = "common")]
pub use megapass_common::{
    EncoderConfig, Mode, PasswordError, ProgressFields, ProgressRecord, Symbol, Variant,
    VariantConfig,
};

#[cfg(feature = "encode")]
pub use megapass_encode::{EncodeTrace, EncodedPassword, Encoder, Grid, encode};
