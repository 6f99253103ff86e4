//! Grouping and summarizing of the plate readouts recorded for one gene.

use std::collections::BTreeMap;

use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

use crate::{
    config::{NullReadouts, ReadoutAveraging},
    model::PlateMeasurementRecord,
};

/// All readouts taken at one timepoint, keyed by condition label. A condition that was not
/// measured at this timepoint has no key.
///
/// Condition labels are free text, so they live in their own map rather than beside
/// `timepoint`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timepoint: f64,
    pub readouts: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionSummary {
    pub condition: String,
    pub average: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub sample_count: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateSummary {
    pub series: Vec<TimeSeriesPoint>,
    pub per_condition: Vec<ConditionSummary>,
    pub overall_average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementTypeAverage {
    pub measurement_type: Option<String>,
    pub average_readout: f64,
    pub sample_count: usize,
}

enum Cell {
    Pairwise(f64),
    Mean { sum: f64, count: usize },
}

impl Cell {
    fn new(value: f64, averaging: ReadoutAveraging) -> Self {
        match averaging {
            ReadoutAveraging::Pairwise => Self::Pairwise(value),
            ReadoutAveraging::Mean => Self::Mean { sum: value, count: 1 },
        }
    }

    fn push(&mut self, value: f64) {
        match self {
            Self::Pairwise(current) => *current = (*current + value) / 2.0,
            Self::Mean { sum, count } => {
                *sum += value;
                *count += 1;
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn value(&self) -> f64 {
        match self {
            Self::Pairwise(value) => *value,
            Self::Mean { sum, count } => *sum / *count as f64,
        }
    }
}

fn readout(record: &PlateMeasurementRecord, null_readouts: NullReadouts) -> Option<f64> {
    match (record.readout_value, null_readouts) {
        (Some(value), _) => Some(value),
        (None, NullReadouts::AsZero) => Some(0.0),
        (None, NullReadouts::Exclude) => None,
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Groups readouts into a timepoint-ordered series and summarizes them per condition.
///
/// Records without a timepoint contribute only to the per-condition summary; records without
/// a condition label are left out of both. The summary is computed over the raw records, not
/// over the deduplicated series.
#[must_use]
pub fn aggregate_plate_data(
    records: &[PlateMeasurementRecord],
    averaging: ReadoutAveraging,
    null_readouts: NullReadouts,
) -> PlateSummary {
    let mut timepoints: Vec<(f64, BTreeMap<String, Cell>)> = Vec::new();
    let mut by_condition: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    let mut all_readouts = Vec::with_capacity(records.len());

    for record in records {
        let value = readout(record, null_readouts);
        all_readouts.extend(value);

        let Some(condition) = record.condition() else {
            continue;
        };

        let condition_values = by_condition.entry(condition).or_default();
        let Some(value) = value else {
            continue;
        };
        condition_values.push(value);

        let Some(timepoint) = record.timepoint_hours else {
            continue;
        };

        let i = if let Some(i) = timepoints.iter().position(|(t, _)| *t == timepoint) {
            i
        } else {
            timepoints.push((timepoint, BTreeMap::new()));
            timepoints.len() - 1
        };

        timepoints[i]
            .1
            .entry(condition.to_string())
            .and_modify(|cell| cell.push(value))
            .or_insert_with(|| Cell::new(value, averaging));
    }

    timepoints.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    let series = timepoints
        .into_iter()
        .map(|(timepoint, cells)| TimeSeriesPoint {
            timepoint,
            readouts: cells
                .into_iter()
                .map(|(condition, cell)| (condition, cell.value()))
                .collect(),
        })
        .collect();

    let per_condition = by_condition
        .into_iter()
        .map(|(condition, values)| {
            let (min, max) = match values.iter().copied().minmax() {
                MinMaxResult::NoElements => (None, None),
                MinMaxResult::OneElement(v) => (Some(v), Some(v)),
                MinMaxResult::MinMax(min, max) => (Some(min), Some(max)),
            };

            ConditionSummary {
                condition: condition.to_string(),
                average: mean(&values),
                max,
                min,
                sample_count: values.len(),
            }
        })
        .collect();

    PlateSummary {
        series,
        per_condition,
        overall_average: mean(&all_readouts),
    }
}

/// Mean of the non-null readouts per measurement type, ignoring the null-readout policy.
#[must_use]
pub fn measurement_type_averages(records: &[PlateMeasurementRecord]) -> Vec<MeasurementTypeAverage> {
    records
        .iter()
        .filter_map(|r| r.readout_value.map(|v| (r.measurement_type.clone(), v)))
        .into_group_map()
        .into_iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .filter_map(|(measurement_type, values)| {
            Some(MeasurementTypeAverage {
                measurement_type,
                average_readout: mean(&values)?,
                sample_count: values.len(),
            })
        })
        .collect()
}
