use bgloc_api::{ParcelError, ParcelResult, WriteFlags};

use super::parcel::{pad_size, Parcel};
use super::parcelable::Parcelable;
use super::{VAL_NULL, VAL_PARCELABLE};

impl Parcel {
    fn write_raw(&mut self, bytes: &[u8]) {
        let end = self.position + bytes.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.position..end].copy_from_slice(bytes);
        self.position = end;
    }

    fn write_padded(&mut self, bytes: &[u8]) {
        self.write_raw(bytes);
        let padding = pad_size(bytes.len()) - bytes.len();
        if padding > 0 {
            self.write_raw(&[0u8; 3][..padding]);
        }
    }

    pub fn write_i32(&mut self, value: i32) {
        self.write_raw(&value.to_le_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.write_raw(&value.to_le_bytes());
    }

    pub fn write_f32(&mut self, value: f32) {
        self.write_raw(&value.to_le_bytes());
    }

    pub fn write_f64(&mut self, value: f64) {
        self.write_raw(&value.to_le_bytes());
    }

    /// Booleans travel as an `i32` holding 0 or 1.
    pub fn write_bool(&mut self, value: bool) {
        self.write_i32(i32::from(value));
    }

    /// Optional values travel as a has-flag followed by the value, zero when absent.
    pub fn write_optional_i64(&mut self, value: Option<i64>) {
        self.write_bool(value.is_some());
        self.write_i64(value.unwrap_or_default());
    }

    pub fn write_optional_f32(&mut self, value: Option<f32>) {
        self.write_bool(value.is_some());
        self.write_f32(value.unwrap_or_default());
    }

    pub fn write_optional_f64(&mut self, value: Option<f64>) {
        self.write_bool(value.is_some());
        self.write_f64(value.unwrap_or_default());
    }

    /// Writes a UTF-16 string: unit count (`-1` for `None`), the units and a
    /// zero terminator, padded to the item alignment.
    pub fn write_string(&mut self, value: Option<&str>) -> ParcelResult<()> {
        let Some(value) = value else {
            self.write_i32(VAL_NULL);
            return Ok(());
        };

        let units: Vec<u16> = value.encode_utf16().collect();
        self.write_i32(wire_length(units.len())?);

        let mut bytes = Vec::with_capacity((units.len() + 1) * 2);
        for unit in units.iter().chain(std::iter::once(&0u16)) {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        self.write_padded(&bytes);
        Ok(())
    }

    /// Writes the type descriptor followed by the value body.
    pub fn write_parcelable<T: Parcelable>(&mut self, value: &T, flags: WriteFlags) -> ParcelResult<()> {
        self.write_string(Some(T::DESCRIPTOR))?;
        value.write_to_parcel(self, flags)
    }

    /// Writes a tagged generic value; `None` is written as the null tag.
    pub fn write_value<T: Parcelable>(&mut self, value: Option<&T>, flags: WriteFlags) -> ParcelResult<()> {
        match value {
            None => {
                self.write_i32(VAL_NULL);
                Ok(())
            }
            Some(value) => {
                self.write_i32(VAL_PARCELABLE);
                self.write_parcelable(value, flags)
            }
        }
    }

    /// Writes a length-prefixed list (`-1` for `None`) where every element is
    /// a generic value.
    pub fn write_typed_list<T: Parcelable>(&mut self, items: Option<&[T]>, flags: WriteFlags) -> ParcelResult<()> {
        let Some(items) = items else {
            self.write_i32(VAL_NULL);
            return Ok(());
        };

        self.write_i32(wire_length(items.len())?);
        for item in items {
            self.write_value(Some(item), flags)?;
        }
        Ok(())
    }
}

fn wire_length(len: usize) -> ParcelResult<i32> {
    i32::try_from(len).map_err(|_| ParcelError::LengthOutOfRange(len as i64))
}
