use bgloc_api::{ParcelError, ParcelResult};

use super::limits::ParcelLimits;

/// Structured message buffer passed between components.
///
/// A parcel is a flat little-endian byte buffer where every item starts on a
/// 4-byte boundary. A single data position serves as both the read and the
/// write cursor: writes land at the position (growing the buffer as needed)
/// and reads consume from it. After writing, rewind with
/// [`Parcel::set_data_position`] before reading the content back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parcel {
    pub(super) data: Vec<u8>,
    pub(super) position: usize,
    pub(super) limits: ParcelLimits,
}

impl Parcel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ParcelLimits) -> Self {
        Self {
            data: Vec::new(),
            position: 0,
            limits,
        }
    }

    /// Wraps raw bytes produced by [`Parcel::marshall`] on the other side of the boundary.
    pub fn unmarshall(bytes: impl Into<Vec<u8>>) -> Self {
        Self::unmarshall_with_limits(bytes, ParcelLimits::default())
    }

    pub fn unmarshall_with_limits(bytes: impl Into<Vec<u8>>, limits: ParcelLimits) -> Self {
        Self {
            data: bytes.into(),
            position: 0,
            limits,
        }
    }

    /// Returns a copy of the raw bytes of the parcel.
    pub fn marshall(&self) -> Vec<u8> {
        self.data.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn limits(&self) -> &ParcelLimits {
        &self.limits
    }

    pub fn data_size(&self) -> usize {
        self.data.len()
    }

    pub fn data_position(&self) -> usize {
        self.position
    }

    /// Number of bytes left to read from the current position.
    pub fn data_avail(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    pub fn set_data_position(&mut self, position: usize) -> ParcelResult<()> {
        if position > self.data.len() {
            return Err(ParcelError::InvalidPosition {
                position,
                size: self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }
}

/// Rounds a byte count up to the 4-byte item alignment.
pub(super) fn pad_size(len: usize) -> usize {
    (len + 3) & !3
}
