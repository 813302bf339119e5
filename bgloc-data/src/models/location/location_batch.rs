use bgloc_api::{ParcelResult, WriteFlags};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::delegate::LocationDelegate;
use crate::parcel::{Parcel, Parcelable};
use crate::utils::hash_as_i64;

use super::location_record::LocationRecord;

/// Ordered batch of location records passed across a parcel boundary.
///
/// Order is preserved through a write/read round trip, duplicates are kept
/// and the batch may be empty. The batch owns its records; `locations` stays
/// public so producers can keep appending after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationBatch {
    pub locations: Vec<LocationRecord>,
}

impl LocationBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the given records. The vector is moved in, not copied.
    pub fn from_locations(locations: Vec<LocationRecord>) -> Self {
        Self { locations }
    }

    /// Reads a batch from the parcel's data position, advancing it.
    ///
    /// Elements are decoded as [`LocationRecord`]; a list written for another
    /// type fails with `ParcelError::TypeMismatch`. A null list reads as an
    /// empty batch.
    pub fn from_parcel(source: &mut Parcel) -> ParcelResult<Self> {
        Self::create_from_parcel(source)
    }

    /// Appends the length prefix and every record to the parcel.
    pub fn write_to(&self, dest: &mut Parcel, flags: WriteFlags) -> ParcelResult<()> {
        self.write_to_parcel(dest, flags)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocationRecord> {
        self.locations.iter()
    }

    pub fn into_locations(self) -> Vec<LocationRecord> {
        self.locations
    }

    /// Stable fingerprint of the batch content
    pub fn content_hash(&self) -> Result<i64, String> {
        hash_as_i64(self)
    }

    /// Hands the batch to a delegate as a locations-changed event.
    pub fn deliver_to<D: LocationDelegate + ?Sized>(&self, delegate: &mut D) {
        delegate.on_locations_changed(self);
    }
}

impl Parcelable for LocationBatch {
    const DESCRIPTOR: &'static str = "bgloc.data.LocationBatch";

    fn write_to_parcel(&self, dest: &mut Parcel, flags: WriteFlags) -> ParcelResult<()> {
        dest.write_typed_list(Some(self.locations.as_slice()), flags)?;
        debug!(
            count = self.locations.len(),
            hash = ?self.content_hash().ok(),
            "Wrote location batch to parcel"
        );
        Ok(())
    }

    fn create_from_parcel(source: &mut Parcel) -> ParcelResult<Self> {
        let locations = source
            .read_typed_list::<LocationRecord>()?
            .unwrap_or_default();
        let batch = Self { locations };
        debug!(
            count = batch.locations.len(),
            hash = ?batch.content_hash().ok(),
            "Read location batch from parcel"
        );
        Ok(batch)
    }
}

impl From<Vec<LocationRecord>> for LocationBatch {
    fn from(locations: Vec<LocationRecord>) -> Self {
        Self::from_locations(locations)
    }
}

impl FromIterator<LocationRecord> for LocationBatch {
    fn from_iter<I: IntoIterator<Item = LocationRecord>>(iter: I) -> Self {
        Self::from_locations(iter.into_iter().collect())
    }
}

impl IntoIterator for LocationBatch {
    type Item = LocationRecord;
    type IntoIter = std::vec::IntoIter<LocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.into_iter()
    }
}

impl<'a> IntoIterator for &'a LocationBatch {
    type Item = &'a LocationRecord;
    type IntoIter = std::slice::Iter<'a, LocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::delegate::{AuthorizationStatus, LocationDelegate};
    use crate::models::location::test_utils::{create_test_location, create_test_location_with_fix};
    use bgloc_api::{ContentFlags, DelegateError, ParcelError};

    fn round_trip(batch: &LocationBatch) -> LocationBatch {
        let mut parcel = Parcel::new();
        batch.write_to(&mut parcel, WriteFlags::NONE).unwrap();
        parcel.set_data_position(0).unwrap();
        let decoded = LocationBatch::from_parcel(&mut parcel).unwrap();
        assert_eq!(parcel.data_avail(), 0);
        decoded
    }

    #[test]
    fn test_round_trip() {
        let batch = LocationBatch::from_locations(vec![
            create_test_location(1),
            create_test_location_with_fix(1_700_000_500_000, 37.4220, -122.0841),
            create_test_location(2),
        ]);

        let decoded = round_trip(&batch);

        assert_eq!(decoded, batch);
    }

    #[test]
    fn test_empty_round_trip() {
        let batch = LocationBatch::new();

        let decoded = round_trip(&batch);

        assert!(decoded.is_empty());
        assert_eq!(decoded.len(), 0);
    }

    #[test]
    fn test_order_is_preserved() {
        let a = create_test_location(3);
        let b = create_test_location(1);
        let c = create_test_location(2);
        let batch = LocationBatch::from_locations(vec![a.clone(), b.clone(), c.clone()]);

        let decoded = round_trip(&batch);

        assert_eq!(decoded.into_locations(), vec![a, b, c]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let record = create_test_location(1);
        let batch: LocationBatch = vec![record.clone(), record.clone()].into();

        let decoded = round_trip(&batch);

        assert_eq!(decoded.len(), 2);
        assert!(decoded.iter().all(|location| *location == record));
    }

    #[test]
    fn test_describe_contents() {
        assert_eq!(LocationBatch::new().describe_contents(), ContentFlags::NONE);

        let batch: LocationBatch = (1..=5).map(create_test_location).collect();
        assert_eq!(batch.describe_contents(), ContentFlags::NONE);
    }

    #[test]
    fn test_wraps_records_without_copy() {
        let locations = vec![create_test_location(1), create_test_location(2)];
        let buffer = locations.as_ptr();

        let mut batch = LocationBatch::from_locations(locations);
        assert_eq!(batch.locations.as_ptr(), buffer);

        // Appending through the exposed sequence is visible to the batch
        batch.locations.push(create_test_location(3));
        assert_eq!(batch.len(), 3);
        assert_eq!(round_trip(&batch).len(), 3);
    }

    #[test]
    fn test_null_list_reads_as_empty_batch() {
        let mut parcel = Parcel::new();
        parcel
            .write_typed_list::<LocationRecord>(None, WriteFlags::NONE)
            .unwrap();
        parcel.set_data_position(0).unwrap();

        let batch = LocationBatch::from_parcel(&mut parcel).unwrap();

        assert!(batch.is_empty());
    }

    #[test]
    fn test_foreign_element_type_is_rejected() {
        // A list of batches is not a list of records
        let nested = vec![LocationBatch::from_locations(vec![create_test_location(1)])];
        let mut parcel = Parcel::new();
        parcel
            .write_typed_list(Some(nested.as_slice()), WriteFlags::NONE)
            .unwrap();
        parcel.set_data_position(0).unwrap();

        assert_eq!(
            LocationBatch::from_parcel(&mut parcel),
            Err(ParcelError::TypeMismatch {
                expected: LocationRecord::DESCRIPTOR.to_string(),
                found: LocationBatch::DESCRIPTOR.to_string(),
            })
        );
    }

    #[test]
    fn test_truncated_parcel() {
        let batch: LocationBatch = (1..=3).map(create_test_location).collect();
        let mut parcel = Parcel::new();
        batch.write_to(&mut parcel, WriteFlags::NONE).unwrap();

        let mut bytes = parcel.into_bytes();
        bytes.truncate(bytes.len() / 2);
        let mut parcel = Parcel::unmarshall(bytes);

        assert!(matches!(
            LocationBatch::from_parcel(&mut parcel),
            Err(ParcelError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_marshalled_bytes_cross_boundary() {
        let batch: LocationBatch = (1..=4).map(create_test_location).collect();
        let mut sender = Parcel::new();
        sender.write_i32(99);
        batch.write_to(&mut sender, WriteFlags::RETURN_VALUE).unwrap();

        let mut receiver = Parcel::unmarshall(sender.marshall());
        assert_eq!(receiver.read_i32().unwrap(), 99);
        let decoded = LocationBatch::from_parcel(&mut receiver).unwrap();

        assert_eq!(decoded.content_hash(), batch.content_hash());
        assert_eq!(decoded, batch);
    }

    #[test]
    fn test_batch_as_generic_value() {
        let batch: LocationBatch = (1..=2).map(create_test_location).collect();
        let mut parcel = Parcel::new();
        parcel.write_value(Some(&batch), WriteFlags::NONE).unwrap();
        parcel.set_data_position(0).unwrap();

        assert_eq!(parcel.read_value::<LocationBatch>().unwrap(), Some(batch));
    }

    #[derive(Default)]
    struct RecordingDelegate {
        batches: Vec<LocationBatch>,
    }

    impl LocationDelegate for RecordingDelegate {
        fn on_authorization_changed(&mut self, _status: AuthorizationStatus) {}

        fn on_location_changed(&mut self, _location: &LocationRecord) {}

        fn on_locations_changed(&mut self, batch: &LocationBatch) {
            self.batches.push(batch.clone());
        }

        fn on_stationary_changed(&mut self, _location: &LocationRecord) {}

        fn on_error(&mut self, _error: &DelegateError) {}
    }

    #[test]
    fn test_deliver_to_delegate() {
        let batch: LocationBatch = (1..=3).map(create_test_location).collect();
        let mut delegate = RecordingDelegate::default();

        round_trip(&batch).deliver_to(&mut delegate);

        assert_eq!(delegate.batches, vec![batch]);
    }
}
