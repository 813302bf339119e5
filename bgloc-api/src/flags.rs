use serde::{Deserialize, Serialize};

/// Special content carried by a parcelable value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentFlags(u32);

impl ContentFlags {
    /// No special content.
    pub const NONE: ContentFlags = ContentFlags(0);
    /// The flattened value contains file descriptors.
    pub const FILE_DESCRIPTOR: ContentFlags = ContentFlags(0x0001);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: ContentFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Flags passed to a parcelable when it writes itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WriteFlags(u32);

impl WriteFlags {
    pub const NONE: WriteFlags = WriteFlags(0);
    /// The value is being written as the result of a call.
    pub const RETURN_VALUE: WriteFlags = WriteFlags(0x0001);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: WriteFlags) -> bool {
        self.0 & other.0 == other.0
    }
}
