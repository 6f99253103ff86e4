//! Lookup capabilities the composer and the facade consume, plus an in-memory implementation.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    error::SourceError,
    key::{AccessionKey, GeneId, GeneLookup},
    model::{
        CoreSequenceRecord, GeneMetadataRecord, PlateMeasurementRecord, ResearchContextRecord,
        ResidueFeatures, SampleOriginRecord, TemperatureRecord,
    },
};

pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// The independently maintained tables behind a [`RecordSource`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Table {
    CoreSequence,
    SampleOrigin,
    ResearchContext,
    Temperature,
    ResidueFeatures,
    GeneMetadata,
    PlateData,
}

impl Table {
    pub fn unavailable(self, message: impl Into<String>) -> SourceError {
        SourceError::new(self.to_string(), message)
    }
}

/// Read-only access to the per-table records.
///
/// Single-record lookups return `Ok(None)` when the table has no row for the key. An `Err`
/// always means the table could not be queried.
pub trait RecordSource: Send + Sync {
    fn core_sequence(
        &self,
        accession: &AccessionKey,
    ) -> impl Future<Output = SourceResult<Option<CoreSequenceRecord>>> + Send;

    /// All sequences, ordered by accession.
    fn core_sequences(&self) -> impl Future<Output = SourceResult<Vec<CoreSequenceRecord>>> + Send;

    fn sample_origin(
        &self,
        accession: &AccessionKey,
    ) -> impl Future<Output = SourceResult<Option<SampleOriginRecord>>> + Send;

    fn research_context(
        &self,
        accession: &AccessionKey,
    ) -> impl Future<Output = SourceResult<Option<ResearchContextRecord>>> + Send;

    fn temperature(
        &self,
        accession: &AccessionKey,
    ) -> impl Future<Output = SourceResult<Option<TemperatureRecord>>> + Send;

    fn residue_features(
        &self,
        accession: &AccessionKey,
    ) -> impl Future<Output = SourceResult<Option<ResidueFeatures>>> + Send;

    /// Every feature row, ordered by accession.
    fn residue_features_all(&self) -> impl Future<Output = SourceResult<Vec<ResidueFeatures>>> + Send;

    /// Matching genes, ordered by gene id.
    fn gene_metadata(
        &self,
        lookup: &GeneLookup,
    ) -> impl Future<Output = SourceResult<Vec<GeneMetadataRecord>>> + Send;

    /// Every readout for a gene, ordered by plate, row and column.
    fn plate_measurements(
        &self,
        gene: &GeneId,
    ) -> impl Future<Output = SourceResult<Vec<PlateMeasurementRecord>>> + Send;

    fn ping(&self) -> impl Future<Output = SourceResult<()>> + Send;
}

/// A [`RecordSource`] over records held in memory. Backs development servers and tests.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    core_sequences: BTreeMap<AccessionKey, CoreSequenceRecord>,
    sample_origins: BTreeMap<AccessionKey, SampleOriginRecord>,
    research_contexts: BTreeMap<AccessionKey, ResearchContextRecord>,
    temperatures: BTreeMap<AccessionKey, TemperatureRecord>,
    residue_features: BTreeMap<AccessionKey, ResidueFeatures>,
    genes: BTreeMap<GeneId, GeneMetadataRecord>,
    plate_measurements: Vec<PlateMeasurementRecord>,
    offline: BTreeSet<Table>,
}

impl InMemorySource {
    pub fn insert_core_sequence(&mut self, record: CoreSequenceRecord) {
        self.core_sequences.insert(record.accession.clone(), record);
    }

    pub fn insert_sample_origin(&mut self, record: SampleOriginRecord) {
        self.sample_origins.insert(record.accession.clone(), record);
    }

    pub fn insert_research_context(&mut self, record: ResearchContextRecord) {
        self.research_contexts.insert(record.accession.clone(), record);
    }

    pub fn insert_temperature(&mut self, record: TemperatureRecord) {
        self.temperatures.insert(record.accession.clone(), record);
    }

    pub fn insert_residue_features(&mut self, record: ResidueFeatures) {
        self.residue_features.insert(record.accession.clone(), record);
    }

    pub fn insert_gene(&mut self, record: GeneMetadataRecord) {
        self.genes.insert(record.gene.clone(), record);
    }

    pub fn insert_plate_measurement(&mut self, record: PlateMeasurementRecord) {
        self.plate_measurements.push(record);
    }

    /// Makes every lookup against `table` fail.
    pub fn take_offline(&mut self, table: Table) {
        self.offline.insert(table);
    }

    fn check(&self, table: Table) -> SourceResult<()> {
        if self.offline.contains(&table) {
            return Err(table.unavailable("table is offline"));
        }

        Ok(())
    }

    fn get<K: Ord, V: Clone>(&self, table: Table, map: &BTreeMap<K, V>, key: &K) -> SourceResult<Option<V>> {
        self.check(table)?;

        Ok(map.get(key).cloned())
    }
}

impl RecordSource for InMemorySource {
    async fn core_sequence(&self, accession: &AccessionKey) -> SourceResult<Option<CoreSequenceRecord>> {
        self.get(Table::CoreSequence, &self.core_sequences, accession)
    }

    async fn core_sequences(&self) -> SourceResult<Vec<CoreSequenceRecord>> {
        self.check(Table::CoreSequence)?;

        Ok(self.core_sequences.values().cloned().collect())
    }

    async fn sample_origin(&self, accession: &AccessionKey) -> SourceResult<Option<SampleOriginRecord>> {
        self.get(Table::SampleOrigin, &self.sample_origins, accession)
    }

    async fn research_context(
        &self,
        accession: &AccessionKey,
    ) -> SourceResult<Option<ResearchContextRecord>> {
        self.get(Table::ResearchContext, &self.research_contexts, accession)
    }

    async fn temperature(&self, accession: &AccessionKey) -> SourceResult<Option<TemperatureRecord>> {
        self.get(Table::Temperature, &self.temperatures, accession)
    }

    async fn residue_features(&self, accession: &AccessionKey) -> SourceResult<Option<ResidueFeatures>> {
        self.get(Table::ResidueFeatures, &self.residue_features, accession)
    }

    async fn residue_features_all(&self) -> SourceResult<Vec<ResidueFeatures>> {
        self.check(Table::ResidueFeatures)?;

        Ok(self.residue_features.values().cloned().collect())
    }

    async fn gene_metadata(&self, lookup: &GeneLookup) -> SourceResult<Vec<GeneMetadataRecord>> {
        self.check(Table::GeneMetadata)?;

        let genes = self.genes.values();
        let matching = match lookup {
            GeneLookup::All => genes.cloned().collect(),
            GeneLookup::Gene(gene) => genes.filter(|g| &g.gene == gene).cloned().collect(),
            GeneLookup::Accession(accession) => genes
                .filter(|g| g.accession.as_ref() == Some(accession))
                .cloned()
                .collect(),
        };

        Ok(matching)
    }

    async fn plate_measurements(&self, gene: &GeneId) -> SourceResult<Vec<PlateMeasurementRecord>> {
        self.check(Table::PlateData)?;

        let mut measurements: Vec<_> = self
            .plate_measurements
            .iter()
            .filter(|m| &m.gene == gene)
            .cloned()
            .collect();
        measurements.sort_by(|a, b| {
            (&a.plate, &a.plate_row, a.plate_column).cmp(&(&b.plate, &b.plate_row, b.plate_column))
        });

        Ok(measurements)
    }

    async fn ping(&self) -> SourceResult<()> {
        Ok(())
    }
}
