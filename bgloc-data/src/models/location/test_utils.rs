use heapless::String as HeaplessString;

use super::common_enums::{LocationProvider, LocationStatus};
use super::location_record::LocationRecord;

pub fn create_test_location(location_id: i64) -> LocationRecord {
    LocationRecord {
        location_id: Some(location_id),
        location_provider: Some(LocationProvider::DistanceFilter),
        batch_start_millis: None,
        provider: Some(HeaplessString::try_from("gps").unwrap()),
        time: 1_700_000_000_000 + location_id * 1_000,
        latitude: 50.0 + location_id as f64 * 0.001,
        longitude: 14.0 - location_id as f64 * 0.001,
        accuracy: Some(5.0),
        speed: None,
        bearing: None,
        altitude: None,
        radius: None,
        is_from_mock_provider: false,
        status: LocationStatus::PostPending,
    }
}

pub fn create_test_location_with_fix(time: i64, latitude: f64, longitude: f64) -> LocationRecord {
    LocationRecord {
        location_id: Some(7),
        location_provider: Some(LocationProvider::Activity),
        batch_start_millis: Some(time - 60_000),
        provider: Some(HeaplessString::try_from("fused").unwrap()),
        time,
        latitude,
        longitude,
        accuracy: Some(3.5),
        speed: Some(1.25),
        bearing: Some(270.0),
        altitude: Some(331.7),
        radius: Some(12.0),
        is_from_mock_provider: true,
        status: LocationStatus::SyncPending,
    }
}
