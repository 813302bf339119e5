use bgloc_api::{ContentFlags, ParcelResult, WriteFlags};

use super::parcel::Parcel;

/// Trait for values that can flatten themselves into a [`Parcel`] and be
/// rebuilt from one.
///
/// `DESCRIPTOR` is written in front of every generically encoded value and is
/// checked on read, so a stream holding another element type is rejected
/// instead of being decoded as garbage.
///
/// # Example
/// ```ignore
/// impl Parcelable for LocationRecord {
///     const DESCRIPTOR: &'static str = "bgloc.data.LocationRecord";
///
///     fn write_to_parcel(&self, dest: &mut Parcel, flags: WriteFlags) -> ParcelResult<()> {
///         // Implementation
///     }
///
///     fn create_from_parcel(source: &mut Parcel) -> ParcelResult<Self> {
///         // Implementation
///     }
/// }
/// ```
pub trait Parcelable: Sized {
    /// Type name written in front of the value body
    const DESCRIPTOR: &'static str;

    /// Describes special content of the flattened value
    ///
    /// # Returns
    /// * `ContentFlags::NONE` unless the value embeds file descriptors
    fn describe_contents(&self) -> ContentFlags {
        ContentFlags::NONE
    }

    /// Appends the value body at the parcel's data position
    ///
    /// # Arguments
    /// * `dest` - The parcel to write into
    /// * `flags` - Additional flags about how the value is being written
    ///
    /// # Returns
    /// * `Ok(())` - The body was appended
    /// * `Err` - A length did not fit the wire format
    fn write_to_parcel(&self, dest: &mut Parcel, flags: WriteFlags) -> ParcelResult<()>;

    /// Reads a value body from the parcel's data position, advancing it
    ///
    /// # Arguments
    /// * `source` - The parcel to read from
    ///
    /// # Returns
    /// * `Ok(Self)` - The rebuilt value
    /// * `Err` - The parcel was truncated or malformed
    fn create_from_parcel(source: &mut Parcel) -> ParcelResult<Self>;
}
