pub mod error;
pub mod flags;

pub use error::*;
pub use flags::*;
