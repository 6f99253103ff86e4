use std::fmt::Debug;

use axum::{
    Json,
    extract::{FromRequestParts, Path, State},
    http::request::Parts,
};
use garde::Validate;
use petadex_core::{
    AccessionKey, Facade, GeneId, ViewKind,
    key::MAX_KEY_LEN,
    model::{GeneMetadataRecord, PlateMeasurementRecord, ResidueFeatures, SequenceSummary},
    plate::{MeasurementTypeAverage, PlateSummary},
    residue::ResidueStatistics,
    view::ComposedView,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{db::Store, server::AppState};

use super::error::{Error, Result};

/// Path parameters that are validated before they reach a handler.
pub(super) struct ValidPath<T>(T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Validate + Send,
    <T as Validate>::Context: std::default::Default,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let Path(data) = Path::<T>::from_request_parts(parts, state).await?;
        data.validate()?;

        Ok(Self(data))
    }
}

#[derive(Deserialize, Validate, Debug)]
pub(super) struct AccessionParam {
    #[garde(length(chars, min = 1, max = MAX_KEY_LEN))]
    accession: String,
}

impl From<AccessionParam> for AccessionKey {
    fn from(AccessionParam { accession }: AccessionParam) -> Self {
        accession.into()
    }
}

#[derive(Deserialize, Validate, Debug)]
pub(super) struct GeneParam {
    #[garde(length(chars, min = 1, max = MAX_KEY_LEN))]
    gene: String,
}

impl From<GeneParam> for GeneId {
    fn from(GeneParam { gene }: GeneParam) -> Self {
        gene.into()
    }
}

#[derive(Deserialize, Validate, Debug)]
pub(super) struct ViewParam {
    #[garde(length(chars, min = 1, max = MAX_KEY_LEN))]
    accession: String,
    #[garde(skip)]
    view: String,
}

/// A response that is looked up by a single key taken from the request path.
pub(super) trait FetchByKey: Sized {
    type Key: DeserializeOwned + Validate<Context = ()> + Debug + Send;

    fn fetch_by_key(
        facade: &Facade<Store>,
        key: Self::Key,
    ) -> impl Future<Output = petadex_core::Result<Self>> + Send;
}

impl FetchByKey for SequenceSummary {
    type Key = AccessionParam;

    async fn fetch_by_key(facade: &Facade<Store>, key: Self::Key) -> petadex_core::Result<Self> {
        facade.sequence(&key.into()).await
    }
}

impl FetchByKey for ResidueFeatures {
    type Key = AccessionParam;

    async fn fetch_by_key(facade: &Facade<Store>, key: Self::Key) -> petadex_core::Result<Self> {
        facade.residue_features(&key.into()).await
    }
}

impl FetchByKey for ResidueStatistics {
    type Key = AccessionParam;

    async fn fetch_by_key(facade: &Facade<Store>, key: Self::Key) -> petadex_core::Result<Self> {
        facade.residue_statistics(&key.into()).await
    }
}

impl FetchByKey for ComposedView {
    type Key = AccessionParam;

    async fn fetch_by_key(facade: &Facade<Store>, key: Self::Key) -> petadex_core::Result<Self> {
        facade.view(&key.into(), ViewKind::Complete).await
    }
}

impl FetchByKey for GeneMetadataRecord {
    type Key = GeneParam;

    async fn fetch_by_key(facade: &Facade<Store>, key: Self::Key) -> petadex_core::Result<Self> {
        facade.gene(&key.into()).await
    }
}

impl FetchByKey for Vec<GeneMetadataRecord> {
    type Key = AccessionParam;

    async fn fetch_by_key(facade: &Facade<Store>, key: Self::Key) -> petadex_core::Result<Self> {
        facade.genes_for_accession(&key.into()).await
    }
}

impl FetchByKey for Vec<PlateMeasurementRecord> {
    type Key = GeneParam;

    async fn fetch_by_key(facade: &Facade<Store>, key: Self::Key) -> petadex_core::Result<Self> {
        facade.plate_measurements(&key.into()).await
    }
}

impl FetchByKey for Vec<MeasurementTypeAverage> {
    type Key = GeneParam;

    async fn fetch_by_key(facade: &Facade<Store>, key: Self::Key) -> petadex_core::Result<Self> {
        facade.measurement_type_averages(&key.into()).await
    }
}

impl FetchByKey for PlateSummary {
    type Key = GeneParam;

    async fn fetch_by_key(facade: &Facade<Store>, key: Self::Key) -> petadex_core::Result<Self> {
        facade.plate_summary(&key.into()).await
    }
}

pub(super) async fn by_key<Resource>(
    State(app_state): State<AppState>,
    ValidPath(key): ValidPath<Resource::Key>,
) -> Result<Json<Resource>>
where
    Resource: FetchByKey + Serialize + Send,
{
    tracing::info!(deserialized_key = ?key);

    let item = Resource::fetch_by_key(app_state.facade(), key).await?;

    Ok(Json(item))
}

pub(super) async fn view(
    State(app_state): State<AppState>,
    ValidPath(ViewParam { accession, view }): ValidPath<ViewParam>,
) -> Result<Json<ComposedView>> {
    tracing::info!(%accession, %view);

    let Ok(kind) = view.parse::<ViewKind>() else {
        return Err(Error::NotFound {
            entity: "view".to_string(),
            key: view,
        });
    };

    let item = app_state.facade().view(&accession.into(), kind).await?;

    Ok(Json(item))
}

pub(super) async fn sequences(State(app_state): State<AppState>) -> Result<Json<Vec<SequenceSummary>>> {
    Ok(Json(app_state.facade().sequences().await?))
}

pub(super) async fn residue_features(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ResidueFeatures>>> {
    Ok(Json(app_state.facade().all_residue_features().await?))
}

pub(super) async fn genes(State(app_state): State<AppState>) -> Result<Json<Vec<GeneMetadataRecord>>> {
    Ok(Json(app_state.facade().genes().await?))
}
