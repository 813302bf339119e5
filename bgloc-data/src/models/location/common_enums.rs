use bgloc_api::ParcelError;
use serde::{Deserialize, Serialize};

/// Provider strategy that produced a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationProvider {
    DistanceFilter = 0,
    Activity = 1,
    Raw = 2,
}

impl TryFrom<i32> for LocationProvider {
    type Error = ParcelError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LocationProvider::DistanceFilter),
            1 => Ok(LocationProvider::Activity),
            2 => Ok(LocationProvider::Raw),
            _ => Err(ParcelError::InvalidEnumValue {
                what: "location provider",
                value,
            }),
        }
    }
}

/// Sync status of a location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationStatus {
    Deleted = 0,
    #[default]
    PostPending = 1,
    SyncPending = 2,
}

impl TryFrom<i32> for LocationStatus {
    type Error = ParcelError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LocationStatus::Deleted),
            1 => Ok(LocationStatus::PostPending),
            2 => Ok(LocationStatus::SyncPending),
            _ => Err(ParcelError::InvalidEnumValue {
                what: "location status",
                value,
            }),
        }
    }
}
