//! Read-only records as they come out of the per-table lookups.
//!
//! Every optional column is an `Option`, so a row with a missing value and a row that was
//! never fetched are both visible in the type.

pub mod features;
pub mod gene;
pub mod origin;
pub mod plate;
pub mod research;
pub mod sequence;

pub use features::ResidueFeatures;
pub use gene::GeneMetadataRecord;
pub use origin::{GeoPoint, SampleOriginRecord, TemperatureRecord};
pub use plate::PlateMeasurementRecord;
pub use research::ResearchContextRecord;
pub use sequence::{CoreSequenceRecord, SequenceSummary};
