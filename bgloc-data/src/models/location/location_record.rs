use bgloc_api::{ParcelError, ParcelResult, WriteFlags};
use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::parcel::{Parcel, Parcelable, VAL_NULL};

use super::common_enums::{LocationProvider, LocationStatus};

/// A single geolocation sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Storage identifier, None until the record has been stored
    pub location_id: Option<i64>,
    pub location_provider: Option<LocationProvider>,
    /// Start of the sync batch this record was assigned to
    pub batch_start_millis: Option<i64>,

    /// Platform provider name such as "gps", "network" or "fused"
    pub provider: Option<HeaplessString<20>>,

    /// UTC time of the fix in epoch milliseconds
    pub time: i64,

    /// Geographical coordinates (decimal degrees)
    pub latitude: f64,
    pub longitude: f64,

    /// Fix quality, None when the platform did not report it
    pub accuracy: Option<f32>,
    pub speed: Option<f32>,
    pub bearing: Option<f32>,
    pub altitude: Option<f64>,
    pub radius: Option<f32>,

    pub is_from_mock_provider: bool,
    pub status: LocationStatus,
}

impl LocationRecord {
    pub fn new(time: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            location_id: None,
            location_provider: None,
            batch_start_millis: None,
            provider: None,
            time,
            latitude,
            longitude,
            accuracy: None,
            speed: None,
            bearing: None,
            altitude: None,
            radius: None,
            is_from_mock_provider: false,
            status: LocationStatus::default(),
        }
    }

    /// Time of the fix, None when `time` is outside the representable range
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }
}

impl Parcelable for LocationRecord {
    const DESCRIPTOR: &'static str = "bgloc.data.LocationRecord";

    fn write_to_parcel(&self, dest: &mut Parcel, _flags: WriteFlags) -> ParcelResult<()> {
        dest.write_optional_i64(self.location_id);
        dest.write_i32(self.location_provider.map_or(VAL_NULL, |provider| provider as i32));
        dest.write_optional_i64(self.batch_start_millis);
        dest.write_string(self.provider.as_deref())?;
        dest.write_i64(self.time);
        dest.write_f64(self.latitude);
        dest.write_f64(self.longitude);
        dest.write_optional_f32(self.accuracy);
        dest.write_optional_f32(self.speed);
        dest.write_optional_f32(self.bearing);
        dest.write_optional_f32(self.radius);
        dest.write_optional_f64(self.altitude);
        dest.write_bool(self.is_from_mock_provider);
        dest.write_i32(self.status as i32);
        Ok(())
    }

    fn create_from_parcel(source: &mut Parcel) -> ParcelResult<Self> {
        let location_id = source.read_optional_i64()?;
        let location_provider = match source.read_i32()? {
            VAL_NULL => None,
            value => Some(LocationProvider::try_from(value)?),
        };
        let batch_start_millis = source.read_optional_i64()?;
        let provider = source
            .read_string()?
            .map(|s| {
                HeaplessString::try_from(s.as_str()).map_err(|_| ParcelError::CapacityExceeded {
                    what: "provider",
                    capacity: 20,
                })
            })
            .transpose()?;

        Ok(LocationRecord {
            location_id,
            location_provider,
            batch_start_millis,
            provider,
            time: source.read_i64()?,
            latitude: source.read_f64()?,
            longitude: source.read_f64()?,
            accuracy: source.read_optional_f32()?,
            speed: source.read_optional_f32()?,
            bearing: source.read_optional_f32()?,
            radius: source.read_optional_f32()?,
            altitude: source.read_optional_f64()?,
            is_from_mock_provider: source.read_bool()?,
            status: LocationStatus::try_from(source.read_i32()?)?,
        })
    }
}
