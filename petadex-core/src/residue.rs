//! Summary statistics over per-residue physicochemical arrays.

use serde::{Deserialize, Serialize};

use crate::model::ResidueFeatures;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidueStatistics {
    pub total_mass: f64,
    #[serde(rename = "avgPI")]
    pub average_pi: f64,
    pub percent_hydrophobic: f64,
    pub sequence_length: i64,
}

/// Derives the four summary statistics of a sequence.
///
/// The arrays are assumed to be index-aligned with the sequence. Their lengths are not
/// checked against each other: empty or ragged input degrades to zeros instead of failing.
/// Hydrophobicity values past `sequence_length` belong to no residue and are not counted, so
/// the hydrophobic share never exceeds 100%.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_residue_statistics(
    mass: &[f64],
    pi: &[f64],
    hydrophobicity: &[f64],
    sequence_length: i64,
    hydrophobicity_threshold: f64,
) -> ResidueStatistics {
    let total_mass: f64 = mass.iter().sum();

    let average_pi = if pi.is_empty() {
        0.0
    } else {
        pi.iter().sum::<f64>() / pi.len() as f64
    };

    let percent_hydrophobic = if sequence_length <= 0 {
        0.0
    } else {
        let n_residues = usize::try_from(sequence_length).unwrap_or(usize::MAX);
        let n_hydrophobic = hydrophobicity
            .iter()
            .take(n_residues)
            .filter(|h| **h > hydrophobicity_threshold)
            .count();

        n_hydrophobic as f64 / sequence_length as f64 * 100.0
    };

    ResidueStatistics {
        total_mass: round_to(total_mass, 2),
        average_pi: round_to(average_pi, 2),
        percent_hydrophobic: round_to(percent_hydrophobic, 1),
        sequence_length,
    }
}

impl ResidueFeatures {
    #[must_use]
    pub fn statistics(&self, sequence_length: i64, hydrophobicity_threshold: f64) -> ResidueStatistics {
        compute_residue_statistics(
            &self.mass,
            &self.pi,
            &self.hydrophobicity,
            sequence_length,
            hydrophobicity_threshold,
        )
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);

    (value * factor).round() / factor
}
