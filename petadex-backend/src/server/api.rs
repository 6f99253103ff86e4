use axum::{Router, routing::get};
use petadex_core::{
    AccessionKey, GeneId, ViewKind,
    endpoint::Endpoint,
    model::{GeneMetadataRecord, PlateMeasurementRecord, ResidueFeatures, SequenceSummary},
    plate::{MeasurementTypeAverage, PlateSummary},
    residue::ResidueStatistics,
    view::ComposedView,
};

use handler::{by_key, genes, residue_features, sequences, view};

use super::AppState;

mod error;
mod handler;

pub(super) use error::Result;

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route(&Endpoint::<(), Vec<SequenceSummary>>::route(), get(sequences))
        .route(
            &Endpoint::<AccessionKey, SequenceSummary>::route(),
            get(by_key::<SequenceSummary>),
        )
        .route(&Endpoint::<(), Vec<ResidueFeatures>>::route(), get(residue_features))
        .route(
            &Endpoint::<AccessionKey, ResidueFeatures>::route(),
            get(by_key::<ResidueFeatures>),
        )
        .route(
            &Endpoint::<AccessionKey, ResidueStatistics>::route(),
            get(by_key::<ResidueStatistics>),
        )
        .route(
            &Endpoint::<AccessionKey, ComposedView>::route(),
            get(by_key::<ComposedView>),
        )
        .route(&Endpoint::<(AccessionKey, ViewKind), ComposedView>::route(), get(view))
        .route(&Endpoint::<(), Vec<GeneMetadataRecord>>::route(), get(genes))
        .route(
            &Endpoint::<GeneId, GeneMetadataRecord>::route(),
            get(by_key::<GeneMetadataRecord>),
        )
        .route(
            &Endpoint::<AccessionKey, Vec<GeneMetadataRecord>>::route(),
            get(by_key::<Vec<GeneMetadataRecord>>),
        )
        .route(
            &Endpoint::<GeneId, Vec<PlateMeasurementRecord>>::route(),
            get(by_key::<Vec<PlateMeasurementRecord>>),
        )
        .route(
            &Endpoint::<GeneId, Vec<MeasurementTypeAverage>>::route(),
            get(by_key::<Vec<MeasurementTypeAverage>>),
        )
        .route(
            &Endpoint::<GeneId, PlateSummary>::route(),
            get(by_key::<PlateSummary>),
        )
}
