use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParcelError {
    #[error("Unexpected end of parcel: needed {needed} bytes, {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    #[error("Invalid data position {position} for parcel of {size} bytes")]
    InvalidPosition { position: usize, size: usize },

    #[error("Length out of range: {0}")]
    LengthOutOfRange(i64),

    #[error("{what} length {length} exceeds limit of {limit}")]
    LimitExceeded {
        what: &'static str,
        length: usize,
        limit: usize,
    },

    #[error("String is not valid UTF-16")]
    InvalidUtf16,

    #[error("Unexpected value tag: {0}")]
    UnexpectedValueTag(i32),

    #[error("Null element at index {index} of typed list")]
    NullElement { index: usize },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Invalid {what} value: {value}")]
    InvalidEnumValue { what: &'static str, value: i32 },

    #[error("{what} exceeds capacity of {capacity}")]
    CapacityExceeded { what: &'static str, capacity: usize },
}

pub type ParcelResult<T> = Result<T, ParcelError>;

/// Error codes reported to location delegates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelegateErrorCode {
    UnknownLocationProvider = 1,
    NotImplemented = 99,
}

impl TryFrom<i32> for DelegateErrorCode {
    type Error = ParcelError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DelegateErrorCode::UnknownLocationProvider),
            99 => Ok(DelegateErrorCode::NotImplemented),
            _ => Err(ParcelError::InvalidEnumValue {
                what: "delegate error code",
                value,
            }),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("Delegate error {code:?}: {message}")]
pub struct DelegateError {
    pub code: DelegateErrorCode,
    pub message: String,
}

impl DelegateError {
    pub fn new(code: DelegateErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
