pub mod models;
pub mod parcel;
pub mod utils;

pub use models::*;
pub use parcel::*;
