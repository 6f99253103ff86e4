//! The named projections composed from the accession-keyed sources.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::key::AccessionKey;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ViewKind {
    Header,
    Origin,
    Synthesized,
    Research,
    #[default]
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderView {
    pub accession: AccessionKey,
    pub origin_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginView {
    pub accession: AccessionKey,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub biome: Option<String>,
    pub source_organism: Option<String>,
    pub elevation: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_name: Option<String>,
    pub collection_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesizedView {
    pub accession: AccessionKey,
    pub aa_sequence: String,
    pub source: Option<String>,
    pub genotype: Option<String>,
    pub genotype_description: Option<String>,
    pub synthetic: Option<bool>,
    pub parent_accessions: Option<Vec<String>>,
    pub parent_genes: Option<Vec<String>>,
    pub synonyms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchView {
    pub accession: AccessionKey,
    pub bioproject: Option<String>,
    pub biosample: Option<String>,
    pub sra_accession: Option<String>,
    pub sra_study: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub organism: Option<String>,
    pub biosample_model: Option<String>,
}

/// Every field of every source, left-outer-joined on the accession. Fields of a missing
/// optional source are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteView {
    pub accession: AccessionKey,
    pub aa_sequence: String,
    pub source: Option<String>,
    pub genotype: Option<String>,
    pub genotype_description: Option<String>,
    pub synthetic: Option<bool>,
    pub parent_accessions: Option<Vec<String>>,
    pub parent_genes: Option<Vec<String>>,
    pub synonyms: Option<Vec<String>>,
    pub date_entered: Option<NaiveDateTime>,
    pub bioproject: Option<String>,
    pub biosample: Option<String>,
    pub sra_accession: Option<String>,
    pub sra_study: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub organism: Option<String>,
    pub biosample_model: Option<String>,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub collection_date: Option<String>,
    pub location_name: Option<String>,
    pub biome: Option<String>,
    pub elevation: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub source_organism: Option<String>,
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComposedView {
    Header(HeaderView),
    Origin(OriginView),
    Synthesized(SynthesizedView),
    Research(ResearchView),
    Complete(Box<CompleteView>),
}

impl ComposedView {
    #[must_use]
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Header(_) => ViewKind::Header,
            Self::Origin(_) => ViewKind::Origin,
            Self::Synthesized(_) => ViewKind::Synthesized,
            Self::Research(_) => ViewKind::Research,
            Self::Complete(_) => ViewKind::Complete,
        }
    }
}
