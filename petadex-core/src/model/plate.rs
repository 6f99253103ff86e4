use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::key::GeneId;

/// One experimental readout from a plate well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateMeasurementRecord {
    pub id: i32,
    pub gene: GeneId,
    pub plate: String,
    pub plasmid: Option<String>,
    #[serde(rename = "row")]
    pub plate_row: Option<String>,
    #[serde(rename = "column")]
    pub plate_column: Option<i32>,
    pub measurement_type: Option<String>,
    pub media: Option<String>,
    pub timepoint_hours: Option<f64>,
    pub normalization_method: Option<String>,
    pub readout_value: Option<f64>,
    pub colony_size: Option<f64>,
    pub sample: Option<String>,
    pub date_entered: Option<NaiveDate>,
}

impl PlateMeasurementRecord {
    /// The experimental condition this readout belongs to (the media label). An empty label
    /// is no condition.
    #[must_use]
    pub fn condition(&self) -> Option<&str> {
        self.media.as_deref().filter(|m| !m.is_empty())
    }
}
