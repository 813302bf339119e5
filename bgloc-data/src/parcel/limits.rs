use serde::{Deserialize, Serialize};

/// Bounds applied to length prefixes while reading a parcel.
///
/// Length prefixes come from the sender, so reads check them against these
/// limits before allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParcelLimits {
    /// Maximum number of elements in a typed list
    pub max_list_len: usize,
    /// Maximum string length in UTF-16 code units
    pub max_string_len: usize,
}

impl ParcelLimits {
    pub const DEFAULT_MAX_LIST_LEN: usize = 1_000_000;
    pub const DEFAULT_MAX_STRING_LEN: usize = 65_536;
}

impl Default for ParcelLimits {
    fn default() -> Self {
        Self {
            max_list_len: Self::DEFAULT_MAX_LIST_LEN,
            max_string_len: Self::DEFAULT_MAX_STRING_LEN,
        }
    }
}
