use std::marker::PhantomData;

use crate::{
    key::{AccessionKey, GeneId},
    model::{GeneMetadataRecord, PlateMeasurementRecord, ResidueFeatures, SequenceSummary},
    plate::{MeasurementTypeAverage, PlateSummary},
    residue::ResidueStatistics,
    view::{ComposedView, ViewKind},
};

/// Pairs a request key with the response it produces. Each pair has exactly one route.
pub struct Endpoint<Req, Resp>(PhantomData<Req>, PhantomData<Resp>);

const SEQUENCES: &str = "/api/fastaa";
impl Endpoint<(), Vec<SequenceSummary>> {
    #[must_use]
    pub fn route() -> String {
        SEQUENCES.to_string()
    }
}

impl Endpoint<AccessionKey, SequenceSummary> {
    #[must_use]
    pub fn route() -> String {
        format!("{SEQUENCES}/{{accession}}")
    }
}

const FEATURES: &str = "/api/aa-seq-features";
impl Endpoint<(), Vec<ResidueFeatures>> {
    #[must_use]
    pub fn route() -> String {
        FEATURES.to_string()
    }
}

impl Endpoint<AccessionKey, ResidueFeatures> {
    #[must_use]
    pub fn route() -> String {
        format!("{FEATURES}/{{accession}}")
    }
}

impl Endpoint<AccessionKey, ResidueStatistics> {
    #[must_use]
    pub fn route() -> String {
        format!("{FEATURES}/{{accession}}/statistics")
    }
}

const GENE_DETAILS: &str = "/api/gene-details";
impl Endpoint<AccessionKey, ComposedView> {
    #[must_use]
    pub fn route() -> String {
        format!("{GENE_DETAILS}/{{accession}}")
    }
}

impl Endpoint<(AccessionKey, ViewKind), ComposedView> {
    #[must_use]
    pub fn route() -> String {
        format!("{GENE_DETAILS}/{{accession}}/{{view}}")
    }
}

const GENE_METADATA: &str = "/api/gene-metadata";
impl Endpoint<(), Vec<GeneMetadataRecord>> {
    #[must_use]
    pub fn route() -> String {
        GENE_METADATA.to_string()
    }
}

impl Endpoint<GeneId, GeneMetadataRecord> {
    #[must_use]
    pub fn route() -> String {
        format!("{GENE_METADATA}/{{gene}}")
    }
}

impl Endpoint<AccessionKey, Vec<GeneMetadataRecord>> {
    #[must_use]
    pub fn route() -> String {
        format!("{GENE_METADATA}/by-accession/{{accession}}")
    }
}

const PLATE_DATA: &str = "/api/plate-data/gene";
impl Endpoint<GeneId, Vec<PlateMeasurementRecord>> {
    #[must_use]
    pub fn route() -> String {
        format!("{PLATE_DATA}/{{gene}}")
    }
}

impl Endpoint<GeneId, Vec<MeasurementTypeAverage>> {
    #[must_use]
    pub fn route() -> String {
        format!("{PLATE_DATA}/{{gene}}/average")
    }
}

impl Endpoint<GeneId, PlateSummary> {
    #[must_use]
    pub fn route() -> String {
        format!("{PLATE_DATA}/{{gene}}/summary")
    }
}

/// Replaces the first path parameter of `route` with `key`.
#[must_use]
pub fn fill(route: &str, key: &str) -> String {
    match (route.find('{'), route.find('}')) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{key}{}", &route[..start], &route[end + 1..])
        }
        _ => route.to_string(),
    }
}
