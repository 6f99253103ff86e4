use serde::{Deserialize, Serialize};

use crate::key::AccessionKey;

/// Per-residue physicochemical arrays, index-aligned with the amino-acid sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidueFeatures {
    pub accession: AccessionKey,
    #[serde(default)]
    pub mass: Vec<f64>,
    #[serde(default)]
    pub pi: Vec<f64>,
    #[serde(default)]
    pub hydrophobicity: Vec<f64>,
}
