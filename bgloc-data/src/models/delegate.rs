use bgloc_api::{DelegateError, ParcelError};
use serde::{Deserialize, Serialize};

use crate::models::location::{LocationBatch, LocationRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationStatus {
    #[default]
    NotDetermined = 0,
    Allowed = 1,
    Denied = 2,
}

impl TryFrom<i32> for AuthorizationStatus {
    type Error = ParcelError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AuthorizationStatus::NotDetermined),
            1 => Ok(AuthorizationStatus::Allowed),
            2 => Ok(AuthorizationStatus::Denied),
            _ => Err(ParcelError::InvalidEnumValue {
                what: "authorization status",
                value,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationMode {
    #[default]
    Background = 0,
    Foreground = 1,
}

impl TryFrom<i32> for OperationMode {
    type Error = ParcelError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OperationMode::Background),
            1 => Ok(OperationMode::Foreground),
            _ => Err(ParcelError::InvalidEnumValue {
                what: "operation mode",
                value,
            }),
        }
    }
}

/// Consumer of location events
///
/// Implemented by the component that receives records after they cross a
/// parcel boundary.
pub trait LocationDelegate {
    fn on_authorization_changed(&mut self, status: AuthorizationStatus);

    fn on_location_changed(&mut self, location: &LocationRecord);

    /// Called with every batch of locations delivered at once
    fn on_locations_changed(&mut self, batch: &LocationBatch);

    fn on_stationary_changed(&mut self, location: &LocationRecord);

    fn on_error(&mut self, error: &DelegateError);
}
