use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::key::{AccessionKey, GeneId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneMetadataRecord {
    pub gene: GeneId,
    pub nickname: Option<String>,
    pub accession: Option<AccessionKey>,
    pub orf_nt_sequence: Option<String>,
    pub left_homology_arm: Option<String>,
    pub right_homology_arm: Option<String>,
    pub batch: Option<String>,
    pub date_entered: Option<NaiveDate>,
    pub genetic_code: Option<i32>,
}
