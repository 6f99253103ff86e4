//! Assembly of the per-accession views from the accession-keyed sources.
//!
//! Each view has one primary table. A missing primary row means the accession is unknown to
//! that view; any other missing row just leaves its fields `null`.

use crate::{
    error::{Error, Result},
    key::AccessionKey,
    model::{
        CoreSequenceRecord, GeoPoint, ResearchContextRecord, SampleOriginRecord, TemperatureRecord,
    },
    source::{RecordSource, SourceResult, Table},
    view::{
        CompleteView, ComposedView, HeaderView, OriginView, ResearchView, SynthesizedView, ViewKind,
    },
};

/// The rows fetched for one accession. A table that was not consulted is `None`, exactly
/// like a table that had no row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sources {
    pub core_sequence: Option<CoreSequenceRecord>,
    pub sample_origin: Option<SampleOriginRecord>,
    pub research_context: Option<ResearchContextRecord>,
    pub temperature: Option<TemperatureRecord>,
}

impl ViewKind {
    /// The table whose row must exist for the view to exist.
    #[must_use]
    pub fn primary_table(self) -> Table {
        match self {
            Self::Header | Self::Origin => Table::SampleOrigin,
            Self::Synthesized | Self::Research | Self::Complete => Table::CoreSequence,
        }
    }

    #[must_use]
    pub fn tables(self) -> &'static [Table] {
        use Table::{CoreSequence, ResearchContext, SampleOrigin, Temperature};

        match self {
            Self::Header => &[SampleOrigin, Temperature],
            Self::Origin => &[SampleOrigin],
            Self::Synthesized => &[CoreSequence, Temperature],
            Self::Research => &[CoreSequence, ResearchContext],
            Self::Complete => &[CoreSequence, SampleOrigin, ResearchContext, Temperature],
        }
    }
}

/// Splits a stored point into `(latitude, longitude)`. No point means both are `None`, never
/// `0.0`, which is a real coordinate.
#[must_use]
pub fn decompose(point: Option<GeoPoint>) -> (Option<f64>, Option<f64>) {
    match point {
        Some(GeoPoint {
            latitude,
            longitude,
        }) => (Some(latitude), Some(longitude)),
        None => (None, None),
    }
}

/// Builds `view` out of already-fetched rows, or `None` if its primary row is missing.
#[must_use]
pub fn compose(view: ViewKind, sources: Sources) -> Option<ComposedView> {
    let Sources {
        core_sequence,
        sample_origin,
        research_context,
        temperature,
    } = sources;
    let temperature = temperature.map(|t| t.temperature);

    let composed = match view {
        ViewKind::Header => {
            let origin = sample_origin?;

            ComposedView::Header(HeaderView {
                accession: origin.accession,
                origin_country: origin.country,
                temperature,
            })
        }
        ViewKind::Origin => ComposedView::Origin(origin_view(sample_origin?)),
        ViewKind::Synthesized => {
            let core = core_sequence?;

            ComposedView::Synthesized(SynthesizedView {
                accession: core.accession,
                aa_sequence: core.aa_sequence,
                source: core.source,
                genotype: core.genotype,
                genotype_description: core.genotype_description,
                synthetic: core.synthetic,
                parent_accessions: core.parent_accessions,
                parent_genes: core.parent_genes,
                synonyms: core.synonyms,
                temperature,
            })
        }
        ViewKind::Research => {
            let core = core_sequence?;
            let research = research_context.unwrap_or_else(|| empty_research(core.accession.clone()));

            ComposedView::Research(ResearchView {
                accession: core.accession,
                bioproject: research.bioproject,
                biosample: research.biosample,
                sra_accession: research.sra_accession,
                sra_study: research.sra_study,
                release_date: research.release_date,
                organism: research.organism,
                biosample_model: research.biosample_model,
            })
        }
        ViewKind::Complete => ComposedView::Complete(Box::new(complete_view(
            core_sequence?,
            sample_origin,
            research_context,
            temperature,
        ))),
    };

    Some(composed)
}

fn origin_view(origin: SampleOriginRecord) -> OriginView {
    let (latitude, longitude) = decompose(origin.lat_lon);

    OriginView {
        accession: origin.accession,
        country: origin.country,
        continent: origin.continent,
        biome: origin.biome,
        source_organism: origin.source_organism,
        elevation: origin.elevation,
        latitude,
        longitude,
        location_name: origin.location_name,
        collection_date: origin.collection_date,
    }
}

fn empty_research(accession: AccessionKey) -> ResearchContextRecord {
    ResearchContextRecord {
        accession,
        bioproject: None,
        biosample: None,
        sra_accession: None,
        sra_study: None,
        release_date: None,
        organism: None,
        biosample_model: None,
    }
}

fn empty_origin(accession: AccessionKey) -> OriginView {
    OriginView {
        accession,
        country: None,
        continent: None,
        biome: None,
        source_organism: None,
        elevation: None,
        latitude: None,
        longitude: None,
        location_name: None,
        collection_date: None,
    }
}

fn complete_view(
    core: CoreSequenceRecord,
    origin: Option<SampleOriginRecord>,
    research: Option<ResearchContextRecord>,
    temperature: Option<f64>,
) -> CompleteView {
    let research = research.unwrap_or_else(|| empty_research(core.accession.clone()));
    let origin = origin.map_or_else(|| empty_origin(core.accession.clone()), origin_view);

    CompleteView {
        accession: core.accession,
        aa_sequence: core.aa_sequence,
        source: core.source,
        genotype: core.genotype,
        genotype_description: core.genotype_description,
        synthetic: core.synthetic,
        parent_accessions: core.parent_accessions,
        parent_genes: core.parent_genes,
        synonyms: core.synonyms,
        date_entered: core.date_entered,
        bioproject: research.bioproject,
        biosample: research.biosample,
        sra_accession: research.sra_accession,
        sra_study: research.sra_study,
        release_date: research.release_date,
        organism: research.organism,
        biosample_model: research.biosample_model,
        country: origin.country,
        continent: origin.continent,
        collection_date: origin.collection_date,
        location_name: origin.location_name,
        biome: origin.biome,
        elevation: origin.elevation,
        latitude: origin.latitude,
        longitude: origin.longitude,
        source_organism: origin.source_organism,
        temperature,
    }
}

/// Fetches, concurrently, only the tables `view` draws from.
///
/// # Errors
/// Fails if any consulted table is unavailable.
pub async fn fetch_sources<S: RecordSource>(
    source: &S,
    accession: &AccessionKey,
    view: ViewKind,
) -> SourceResult<Sources> {
    let needs = |table| view.tables().contains(&table);

    let (core_sequence, sample_origin, research_context, temperature) = futures::try_join!(
        async {
            if needs(Table::CoreSequence) {
                source.core_sequence(accession).await
            } else {
                Ok(None)
            }
        },
        async {
            if needs(Table::SampleOrigin) {
                source.sample_origin(accession).await
            } else {
                Ok(None)
            }
        },
        async {
            if needs(Table::ResearchContext) {
                source.research_context(accession).await
            } else {
                Ok(None)
            }
        },
        async {
            if needs(Table::Temperature) {
                source.temperature(accession).await
            } else {
                Ok(None)
            }
        },
    )?;

    Ok(Sources {
        core_sequence,
        sample_origin,
        research_context,
        temperature,
    })
}

/// Fetches and composes `view` for `accession`.
///
/// # Errors
/// [`Error::NotFound`] if the view's primary table has no row for `accession`;
/// [`Error::SourceUnavailable`] if any consulted table could not be queried.
pub async fn compose_view<S: RecordSource>(
    source: &S,
    accession: &AccessionKey,
    view: ViewKind,
) -> Result<ComposedView> {
    let sources = fetch_sources(source, accession, view).await?;

    compose(view, sources)
        .ok_or_else(|| Error::not_found(&view.primary_table().to_string(), accession))
}
