pub mod limits;
#[allow(clippy::module_inception)]
pub mod parcel;
pub mod parcelable;
mod read;
mod write;

pub use limits::*;
pub use parcel::Parcel;
pub use parcelable::*;

/// Generic value tag for a null value; also the null marker for lengths.
pub const VAL_NULL: i32 = -1;
/// Generic value tag for a parcelable value.
pub const VAL_PARCELABLE: i32 = 4;
