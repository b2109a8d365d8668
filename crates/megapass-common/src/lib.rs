pub mod error;
pub mod record;
pub mod symbol;
pub mod variant;
pub mod word;

pub use error::*;
pub use record::*;
pub use symbol::*;
pub use variant::*;
pub use word::*;
