pub mod common_enums;
pub mod location_batch;
pub mod location_record;

#[cfg(test)]
pub mod test_utils;

pub use common_enums::*;
pub use location_batch::LocationBatch;
pub use location_record::LocationRecord;
