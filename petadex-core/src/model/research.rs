use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::key::AccessionKey;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchContextRecord {
    pub accession: AccessionKey,
    pub bioproject: Option<String>,
    pub biosample: Option<String>,
    pub sra_accession: Option<String>,
    pub sra_study: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub organism: Option<String>,
    pub biosample_model: Option<String>,
}
