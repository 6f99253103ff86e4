use serde::{Deserialize, Serialize};

/// Residues whose hydrophobicity index is strictly above this value count as hydrophobic.
pub const DEFAULT_HYDROPHOBICITY_THRESHOLD: f64 = 0.5;

/// How readouts that land in the same (timepoint, condition) cell are combined.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReadoutAveraging {
    /// Each new readout is averaged with the current cell value. Order-dependent: three
    /// readouts `a, b, c` give `((a + b) / 2 + c) / 2`.
    #[default]
    Pairwise,
    /// Arithmetic mean over every readout in the cell.
    Mean,
}

/// How a null readout contributes to per-condition statistics.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NullReadouts {
    /// A null readout counts as 0.
    #[default]
    AsZero,
    /// A null readout is skipped.
    Exclude,
}

/// Thresholds and policies for the derived statistics. Built once from the process
/// configuration and handed to the [`Facade`](crate::Facade).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    pub hydrophobicity_threshold: f64,
    pub readout_averaging: ReadoutAveraging,
    pub null_readouts: NullReadouts,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            hydrophobicity_threshold: DEFAULT_HYDROPHOBICITY_THRESHOLD,
            readout_averaging: ReadoutAveraging::default(),
            null_readouts: NullReadouts::default(),
        }
    }
}
