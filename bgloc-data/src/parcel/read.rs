use bgloc_api::{ParcelError, ParcelResult};
use tracing::warn;

use super::parcel::{pad_size, Parcel};
use super::parcelable::Parcelable;
use super::{VAL_NULL, VAL_PARCELABLE};

impl Parcel {
    fn read_raw(&mut self, len: usize) -> ParcelResult<&[u8]> {
        self.read_padded_raw(len, len)
    }

    fn read_padded(&mut self, len: usize) -> ParcelResult<&[u8]> {
        self.read_padded_raw(len, pad_size(len))
    }

    fn read_padded_raw(&mut self, len: usize, padded: usize) -> ParcelResult<&[u8]> {
        let available = self.data_avail();
        if padded > available {
            return Err(ParcelError::UnexpectedEof {
                needed: padded,
                available,
            });
        }
        let start = self.position;
        self.position += padded;
        Ok(&self.data[start..start + len])
    }

    fn read_array<const N: usize>(&mut self) -> ParcelResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_raw(N)?);
        Ok(out)
    }

    pub fn read_i32(&mut self) -> ParcelResult<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    pub fn read_i64(&mut self) -> ParcelResult<i64> {
        self.read_array().map(i64::from_le_bytes)
    }

    pub fn read_f32(&mut self) -> ParcelResult<f32> {
        self.read_array().map(f32::from_le_bytes)
    }

    pub fn read_f64(&mut self) -> ParcelResult<f64> {
        self.read_array().map(f64::from_le_bytes)
    }

    pub fn read_bool(&mut self) -> ParcelResult<bool> {
        Ok(self.read_i32()? != 0)
    }

    pub fn read_optional_i64(&mut self) -> ParcelResult<Option<i64>> {
        let present = self.read_bool()?;
        let value = self.read_i64()?;
        Ok(present.then_some(value))
    }

    pub fn read_optional_f32(&mut self) -> ParcelResult<Option<f32>> {
        let present = self.read_bool()?;
        let value = self.read_f32()?;
        Ok(present.then_some(value))
    }

    pub fn read_optional_f64(&mut self) -> ParcelResult<Option<f64>> {
        let present = self.read_bool()?;
        let value = self.read_f64()?;
        Ok(present.then_some(value))
    }

    /// Reads a length prefix, mapping the null marker to `None`.
    fn read_length(&mut self, what: &'static str, limit: usize) -> ParcelResult<Option<usize>> {
        let len = self.read_i32()?;
        if len == VAL_NULL {
            return Ok(None);
        }
        let len = usize::try_from(len).map_err(|_| ParcelError::LengthOutOfRange(i64::from(len)))?;
        if len > limit {
            return Err(ParcelError::LimitExceeded {
                what,
                length: len,
                limit,
            });
        }
        Ok(Some(len))
    }

    pub fn read_string(&mut self) -> ParcelResult<Option<String>> {
        let limit = self.limits.max_string_len;
        let Some(len) = self.read_length("string", limit)? else {
            return Ok(None);
        };

        let bytes = self.read_padded((len + 1) * 2)?;
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .take(len)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        String::from_utf16(&units)
            .map(Some)
            .map_err(|_| ParcelError::InvalidUtf16)
    }

    /// Reads a descriptor and checks it against `T` before reading the body.
    pub fn read_parcelable<T: Parcelable>(&mut self) -> ParcelResult<T> {
        let descriptor = self.read_string()?;
        match descriptor.as_deref() {
            Some(found) if found == T::DESCRIPTOR => T::create_from_parcel(self),
            found => {
                let found = found.unwrap_or("<null>").to_string();
                warn!(expected = T::DESCRIPTOR, found = %found, "Parcelable descriptor mismatch");
                Err(ParcelError::TypeMismatch {
                    expected: T::DESCRIPTOR.to_string(),
                    found,
                })
            }
        }
    }

    pub fn read_value<T: Parcelable>(&mut self) -> ParcelResult<Option<T>> {
        match self.read_i32()? {
            VAL_NULL => Ok(None),
            VAL_PARCELABLE => self.read_parcelable().map(Some),
            tag => Err(ParcelError::UnexpectedValueTag(tag)),
        }
    }

    /// Reads a list written by [`Parcel::write_typed_list`].
    ///
    /// The element type is given by the caller; elements carrying another
    /// descriptor fail with `TypeMismatch` and null elements with `NullElement`.
    pub fn read_typed_list<T: Parcelable>(&mut self) -> ParcelResult<Option<Vec<T>>> {
        let limit = self.limits.max_list_len;
        let Some(len) = self.read_length("list", limit)? else {
            return Ok(None);
        };

        // Every element takes at least its 4-byte tag.
        let mut items = Vec::with_capacity(len.min(self.data_avail() / 4));
        for index in 0..len {
            match self.read_value::<T>()? {
                Some(item) => items.push(item),
                None => return Err(ParcelError::NullElement { index }),
            }
        }
        Ok(Some(items))
    }
}
