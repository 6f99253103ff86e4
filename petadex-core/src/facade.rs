//! The operations exposed to the transport layer.

use crate::{
    compose::compose_view,
    config::StatisticsConfig,
    error::{Error, Result},
    key::{AccessionKey, GeneId, GeneLookup},
    model::{GeneMetadataRecord, PlateMeasurementRecord, ResidueFeatures, SequenceSummary},
    plate::{MeasurementTypeAverage, PlateSummary, aggregate_plate_data, measurement_type_averages},
    residue::ResidueStatistics,
    source::RecordSource,
    view::{ComposedView, ViewKind},
};

/// Dispatches keyed requests to the composer and the statistics engines. Holds no state of
/// its own besides the injected source and configuration, so it can be shared freely.
#[derive(Debug, Clone)]
pub struct Facade<S> {
    source: S,
    config: StatisticsConfig,
}

impl<S: RecordSource> Facade<S> {
    pub fn new(source: S, config: StatisticsConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &StatisticsConfig {
        &self.config
    }

    /// # Errors
    pub async fn health(&self) -> Result<()> {
        Ok(self.source.ping().await?)
    }

    /// # Errors
    pub async fn sequences(&self) -> Result<Vec<SequenceSummary>> {
        let sequences = self.source.core_sequences().await?;

        Ok(sequences.into_iter().map(SequenceSummary::from).collect())
    }

    /// # Errors
    pub async fn sequence(&self, accession: &AccessionKey) -> Result<SequenceSummary> {
        self.source
            .core_sequence(accession)
            .await?
            .map(SequenceSummary::from)
            .ok_or_else(|| Error::not_found("sequence", accession))
    }

    /// # Errors
    pub async fn residue_features(&self, accession: &AccessionKey) -> Result<ResidueFeatures> {
        self.source
            .residue_features(accession)
            .await?
            .ok_or_else(|| Error::not_found("residue features", accession))
    }

    /// # Errors
    pub async fn all_residue_features(&self) -> Result<Vec<ResidueFeatures>> {
        Ok(self.source.residue_features_all().await?)
    }

    /// Statistics over the residue arrays of `accession`. The sequence itself must exist; if
    /// it has no residue arrays, the statistics are all zero.
    ///
    /// # Errors
    pub async fn residue_statistics(&self, accession: &AccessionKey) -> Result<ResidueStatistics> {
        let (sequence, features) = futures::try_join!(
            self.source.core_sequence(accession),
            self.source.residue_features(accession)
        )?;

        let sequence = sequence.ok_or_else(|| Error::not_found("sequence", accession))?;
        let sequence_length = i64::try_from(sequence.sequence_length()).unwrap_or(i64::MAX);

        let features = features.unwrap_or_else(|| ResidueFeatures {
            accession: accession.clone(),
            mass: Vec::new(),
            pi: Vec::new(),
            hydrophobicity: Vec::new(),
        });

        Ok(features.statistics(sequence_length, self.config.hydrophobicity_threshold))
    }

    /// # Errors
    pub async fn view(&self, accession: &AccessionKey, view: ViewKind) -> Result<ComposedView> {
        tracing::debug!(%accession, %view, "composing view");

        compose_view(&self.source, accession, view).await
    }

    /// # Errors
    pub async fn genes(&self) -> Result<Vec<GeneMetadataRecord>> {
        Ok(self.source.gene_metadata(&GeneLookup::All).await?)
    }

    /// # Errors
    pub async fn gene(&self, gene: &GeneId) -> Result<GeneMetadataRecord> {
        let genes = self.source.gene_metadata(&GeneLookup::Gene(gene.clone())).await?;

        genes
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found("gene", gene))
    }

    /// Every synthesized gene derived from `accession`.
    ///
    /// # Errors
    /// [`Error::NotFound`] when there are none.
    pub async fn genes_for_accession(&self, accession: &AccessionKey) -> Result<Vec<GeneMetadataRecord>> {
        let genes = self
            .source
            .gene_metadata(&GeneLookup::Accession(accession.clone()))
            .await?;

        non_empty(genes, "genes for accession", accession)
    }

    /// # Errors
    pub async fn plate_measurements(&self, gene: &GeneId) -> Result<Vec<PlateMeasurementRecord>> {
        let measurements = self.source.plate_measurements(gene).await?;

        non_empty(measurements, "plate data for gene", gene)
    }

    /// # Errors
    pub async fn measurement_type_averages(&self, gene: &GeneId) -> Result<Vec<MeasurementTypeAverage>> {
        let measurements = self.source.plate_measurements(gene).await?;

        non_empty(
            measurement_type_averages(&measurements),
            "plate readouts for gene",
            gene,
        )
    }

    /// The charted series and per-condition summary for `gene`. A gene without readouts
    /// yields an empty summary.
    ///
    /// # Errors
    pub async fn plate_summary(&self, gene: &GeneId) -> Result<PlateSummary> {
        let measurements = self.source.plate_measurements(gene).await?;
        tracing::debug!(%gene, n_measurements = measurements.len(), "aggregating plate data");

        let StatisticsConfig {
            readout_averaging,
            null_readouts,
            ..
        } = self.config;

        Ok(aggregate_plate_data(&measurements, readout_averaging, null_readouts))
    }
}

fn non_empty<T>(items: Vec<T>, entity: &str, key: impl ToString) -> Result<Vec<T>> {
    if items.is_empty() {
        return Err(Error::not_found(entity, key));
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::{
        config::{NullReadouts, ReadoutAveraging},
        source::{InMemorySource, Table},
        test_util,
    };

    #[fixture]
    fn facade() -> Facade<InMemorySource> {
        Facade::new(test_util::populated_source(), StatisticsConfig::default())
    }

    #[rstest]
    #[tokio::test]
    async fn sequences_are_listed_in_accession_order(facade: Facade<InMemorySource>) {
        let accessions: Vec<String> = facade
            .sequences()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.accession.to_string())
            .collect();

        assert_eq!(accessions, ["ACC1", "ACC2"]);
    }

    #[rstest]
    #[tokio::test]
    async fn residue_features_are_listed_in_accession_order() {
        let mut source = test_util::populated_source();
        source.insert_residue_features(test_util::residue_features("ACC0"));
        let facade = Facade::new(source, StatisticsConfig::default());

        let accessions: Vec<String> = facade
            .all_residue_features()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.accession.to_string())
            .collect();

        assert_eq!(accessions, ["ACC0", "ACC1"]);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_sequence(facade: Facade<InMemorySource>) {
        let err = facade.sequence(&"NOPE".into()).await.unwrap_err();

        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn residue_statistics_of_known_sequence(facade: Facade<InMemorySource>) {
        let stats = facade.residue_statistics(&"ACC1".into()).await.unwrap();

        assert_eq!(stats.total_mass, 471.7);
        assert_eq!(stats.average_pi, 6.85);
        assert_eq!(stats.percent_hydrophobic, 75.0);
        assert_eq!(stats.sequence_length, 4);
    }

    #[rstest]
    #[tokio::test]
    async fn residue_statistics_without_features_are_zero(facade: Facade<InMemorySource>) {
        let stats = facade.residue_statistics(&"ACC2".into()).await.unwrap();

        assert_eq!(
            stats,
            ResidueStatistics {
                total_mass: 0.0,
                average_pi: 0.0,
                percent_hydrophobic: 0.0,
                sequence_length: 4
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn hydrophobicity_threshold_is_configurable() {
        let config = StatisticsConfig {
            hydrophobicity_threshold: 0.75,
            ..Default::default()
        };
        let facade = Facade::new(test_util::populated_source(), config);

        let stats = facade.residue_statistics(&"ACC1".into()).await.unwrap();

        assert_eq!(stats.percent_hydrophobic, 50.0);
    }

    #[rstest]
    #[tokio::test]
    async fn genes_are_looked_up_three_ways(facade: Facade<InMemorySource>) {
        let all: Vec<GeneId> = facade.genes().await.unwrap().into_iter().map(|g| g.gene).collect();
        assert_eq!(all, [GeneId::from("gene1"), "gene2".into(), "gene3".into()]);

        let by_accession = facade.genes_for_accession(&"ACC1".into()).await.unwrap();
        assert_eq!(by_accession.len(), 2);

        let gene = facade.gene(&"gene3".into()).await.unwrap();
        assert_eq!(gene.accession, None);

        let err = facade.genes_for_accession(&"ACC2".into()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn plate_measurements_are_ordered(facade: Facade<InMemorySource>) {
        let ids: Vec<i32> = facade
            .plate_measurements(&"gene1".into())
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();

        assert_eq!(ids, [1, 2, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn plate_summary_of_unknown_gene_is_empty(facade: Facade<InMemorySource>) {
        let summary = facade.plate_summary(&"unknown".into()).await.unwrap();

        assert_eq!(summary, PlateSummary::default());
    }

    #[rstest]
    #[case(NullReadouts::AsZero, 2, Some(0.2))]
    #[case(NullReadouts::Exclude, 1, Some(0.3))]
    #[tokio::test]
    async fn plate_summary_follows_configuration(
        #[case] null_readouts: NullReadouts,
        #[case] n_timepoints: usize,
        #[case] overall_average: Option<f64>,
    ) {
        let config = StatisticsConfig {
            null_readouts,
            readout_averaging: ReadoutAveraging::Pairwise,
            ..Default::default()
        };
        let facade = Facade::new(test_util::populated_source(), config);

        let summary = facade.plate_summary(&"gene1".into()).await.unwrap();

        assert_eq!(summary.series.len(), n_timepoints);
        let cell = summary.series.last().unwrap().readouts["A"];
        assert!((cell - 0.3).abs() < 1e-12);

        let (expected, actual) = (overall_average.unwrap(), summary.overall_average.unwrap());
        assert!((expected - actual).abs() < 1e-12);
    }

    #[rstest]
    #[tokio::test]
    async fn measurement_type_averages_skip_null_readouts(facade: Facade<InMemorySource>) {
        let averages = facade.measurement_type_averages(&"gene1".into()).await.unwrap();

        let [absorbance] = averages.as_slice() else {
            panic!("expected a single measurement type, got {averages:?}");
        };
        assert_eq!(absorbance.sample_count, 2);
        assert!((absorbance.average_readout - 0.3).abs() < 1e-12);
    }

    #[rstest]
    #[tokio::test]
    async fn unavailable_source_is_not_not_found() {
        let mut source = test_util::populated_source();
        source.take_offline(Table::PlateData);
        let facade = Facade::new(source, StatisticsConfig::default());

        let err = facade.plate_measurements(&"gene1".into()).await.unwrap_err();

        assert!(matches!(err, Error::SourceUnavailable(_)));
    }
}
