use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::key::AccessionKey;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreSequenceRecord {
    pub accession: AccessionKey,
    pub aa_sequence: String,
    pub source: Option<String>,
    pub synonyms: Option<Vec<String>>,
    pub genotype: Option<String>,
    pub genotype_description: Option<String>,
    pub synthetic: Option<bool>,
    pub parent_accessions: Option<Vec<String>>,
    pub parent_genes: Option<Vec<String>>,
    pub date_entered: Option<NaiveDateTime>,
}

impl CoreSequenceRecord {
    /// Number of residues in the amino-acid sequence.
    #[must_use]
    pub fn sequence_length(&self) -> usize {
        self.aa_sequence.chars().count()
    }
}

/// The listing shape of a sequence, as served by the sequence lookup routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceSummary {
    pub accession: AccessionKey,
    pub sequence: String,
    pub source: Option<String>,
    pub synonyms: Option<Vec<String>>,
    pub date_entered: Option<NaiveDateTime>,
}

impl From<CoreSequenceRecord> for SequenceSummary {
    fn from(record: CoreSequenceRecord) -> Self {
        let CoreSequenceRecord {
            accession,
            aa_sequence,
            source,
            synonyms,
            date_entered,
            ..
        } = record;

        Self {
            accession,
            sequence: aa_sequence,
            source,
            synonyms,
            date_entered,
        }
    }
}
