pub mod delegate;
pub mod location;

// Re-exports
pub use delegate::*;
pub use location::*;
