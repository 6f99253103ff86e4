pub mod error;
mod model;
mod schema;
pub mod seed_data;

use diesel::{
    dsl::sql,
    expression::SqlLiteral,
    prelude::*,
    sql_types::{Double, Nullable},
};
use diesel_async::{
    AsyncPgConnection, RunQueryDsl,
    pooled_connection::{
        AsyncDieselConnectionManager,
        deadpool::{Object, Pool},
    },
};
use petadex_core::{
    AccessionKey, GeneId, RecordSource,
    key::GeneLookup,
    model::{
        CoreSequenceRecord, GeneMetadataRecord, PlateMeasurementRecord, ResearchContextRecord,
        ResidueFeatures, SampleOriginRecord, TemperatureRecord,
    },
    source::{InMemorySource, SourceResult, Table},
};

use model::{
    CoreSequenceRow, GeneMetadataRow, PlateMeasurementRow, ResearchContextRow, ResidueFeaturesRow,
    SampleOriginRow, TemperatureRow,
};
use schema::{
    aa_seq_features, core_sequence, gene_metadata, plate_data, research_context, sample_origin,
    temperature,
};

/// The records a server reads from: seed data held in memory for development, PostgreSQL
/// otherwise.
pub enum Store {
    Seeded(InMemorySource),
    Postgres(PgStore),
}

macro_rules! delegate {
    ($self:ident.$method:ident($($arg:expr),*)) => {
        match $self {
            Self::Seeded(source) => source.$method($($arg),*).await,
            Self::Postgres(source) => source.$method($($arg),*).await,
        }
    };
}

impl RecordSource for Store {
    async fn core_sequence(&self, accession: &AccessionKey) -> SourceResult<Option<CoreSequenceRecord>> {
        delegate!(self.core_sequence(accession))
    }

    async fn core_sequences(&self) -> SourceResult<Vec<CoreSequenceRecord>> {
        delegate!(self.core_sequences())
    }

    async fn sample_origin(&self, accession: &AccessionKey) -> SourceResult<Option<SampleOriginRecord>> {
        delegate!(self.sample_origin(accession))
    }

    async fn research_context(
        &self,
        accession: &AccessionKey,
    ) -> SourceResult<Option<ResearchContextRecord>> {
        delegate!(self.research_context(accession))
    }

    async fn temperature(&self, accession: &AccessionKey) -> SourceResult<Option<TemperatureRecord>> {
        delegate!(self.temperature(accession))
    }

    async fn residue_features(&self, accession: &AccessionKey) -> SourceResult<Option<ResidueFeatures>> {
        delegate!(self.residue_features(accession))
    }

    async fn residue_features_all(&self) -> SourceResult<Vec<ResidueFeatures>> {
        delegate!(self.residue_features_all())
    }

    async fn gene_metadata(&self, lookup: &GeneLookup) -> SourceResult<Vec<GeneMetadataRecord>> {
        delegate!(self.gene_metadata(lookup))
    }

    async fn plate_measurements(&self, gene: &GeneId) -> SourceResult<Vec<PlateMeasurementRecord>> {
        delegate!(self.plate_measurements(gene))
    }

    async fn ping(&self) -> SourceResult<()> {
        delegate!(self.ping())
    }
}

/// Reads every table through its own pooled connection, so concurrent lookups for one view
/// run in parallel.
#[derive(Clone)]
pub struct PgStore {
    db_pool: Pool<AsyncPgConnection>,
}

impl PgStore {
    /// Builds the pool without connecting; the first lookup opens the first connection.
    ///
    /// # Errors
    pub fn new(db_url: &str, max_connections: usize) -> anyhow::Result<Self> {
        let db_config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(db_url);
        let db_pool = Pool::builder(db_config).max_size(max_connections).build()?;

        Ok(Self { db_pool })
    }

    async fn db_conn(&self) -> error::Result<Object<AsyncPgConnection>> {
        Ok(self.db_pool.get().await?)
    }
}

fn latitude() -> SqlLiteral<Nullable<Double>> {
    sql("ST_Y(lat_lon)")
}

fn longitude() -> SqlLiteral<Nullable<Double>> {
    sql("ST_X(lat_lon)")
}

impl RecordSource for PgStore {
    async fn core_sequence(&self, accession: &AccessionKey) -> SourceResult<Option<CoreSequenceRecord>> {
        let fetch = async {
            let mut db_conn = self.db_conn().await?;

            let row = core_sequence::table
                .find(accession.as_str())
                .select(CoreSequenceRow::as_select())
                .first::<CoreSequenceRow>(&mut db_conn)
                .await
                .optional()?;

            Ok::<_, error::Error>(row.map(CoreSequenceRecord::from))
        };

        fetch.await.map_err(|e| e.unavailable(Table::CoreSequence))
    }

    async fn core_sequences(&self) -> SourceResult<Vec<CoreSequenceRecord>> {
        let fetch = async {
            let mut db_conn = self.db_conn().await?;

            let rows = core_sequence::table
                .order_by(core_sequence::accession)
                .select(CoreSequenceRow::as_select())
                .load::<CoreSequenceRow>(&mut db_conn)
                .await?;

            Ok::<_, error::Error>(rows.into_iter().map(CoreSequenceRecord::from).collect())
        };

        fetch.await.map_err(|e| e.unavailable(Table::CoreSequence))
    }

    async fn sample_origin(&self, accession: &AccessionKey) -> SourceResult<Option<SampleOriginRecord>> {
        let fetch = async {
            let mut db_conn = self.db_conn().await?;

            let row: Option<(SampleOriginRow, Option<f64>, Option<f64>)> = sample_origin::table
                .find(accession.as_str())
                .select((SampleOriginRow::as_select(), latitude(), longitude()))
                .first(&mut db_conn)
                .await
                .optional()?;

            Ok::<_, error::Error>(row.map(|(row, latitude, longitude)| row.with_point(latitude, longitude)))
        };

        fetch.await.map_err(|e| e.unavailable(Table::SampleOrigin))
    }

    async fn research_context(
        &self,
        accession: &AccessionKey,
    ) -> SourceResult<Option<ResearchContextRecord>> {
        let fetch = async {
            let mut db_conn = self.db_conn().await?;

            let row = research_context::table
                .find(accession.as_str())
                .select(ResearchContextRow::as_select())
                .first::<ResearchContextRow>(&mut db_conn)
                .await
                .optional()?;

            Ok::<_, error::Error>(row.map(ResearchContextRecord::from))
        };

        fetch.await.map_err(|e| e.unavailable(Table::ResearchContext))
    }

    async fn temperature(&self, accession: &AccessionKey) -> SourceResult<Option<TemperatureRecord>> {
        let fetch = async {
            let mut db_conn = self.db_conn().await?;

            let row = temperature::table
                .find(accession.as_str())
                .select(TemperatureRow::as_select())
                .first::<TemperatureRow>(&mut db_conn)
                .await
                .optional()?;

            Ok::<_, error::Error>(row.map(TemperatureRecord::from))
        };

        fetch.await.map_err(|e| e.unavailable(Table::Temperature))
    }

    async fn residue_features(&self, accession: &AccessionKey) -> SourceResult<Option<ResidueFeatures>> {
        let fetch = async {
            let mut db_conn = self.db_conn().await?;

            let row = aa_seq_features::table
                .find(accession.as_str())
                .select(ResidueFeaturesRow::as_select())
                .first::<ResidueFeaturesRow>(&mut db_conn)
                .await
                .optional()?;

            Ok::<_, error::Error>(row.map(ResidueFeatures::from))
        };

        fetch.await.map_err(|e| e.unavailable(Table::ResidueFeatures))
    }

    async fn residue_features_all(&self) -> SourceResult<Vec<ResidueFeatures>> {
        let fetch = async {
            let mut db_conn = self.db_conn().await?;

            let rows = aa_seq_features::table
                .order_by(aa_seq_features::accession)
                .select(ResidueFeaturesRow::as_select())
                .load::<ResidueFeaturesRow>(&mut db_conn)
                .await?;

            Ok::<_, error::Error>(rows.into_iter().map(ResidueFeatures::from).collect())
        };

        fetch.await.map_err(|e| e.unavailable(Table::ResidueFeatures))
    }

    async fn gene_metadata(&self, lookup: &GeneLookup) -> SourceResult<Vec<GeneMetadataRecord>> {
        let fetch = async {
            let mut db_conn = self.db_conn().await?;

            let mut query = gene_metadata::table
                .order_by(gene_metadata::gene)
                .select(GeneMetadataRow::as_select())
                .into_boxed();

            match lookup {
                GeneLookup::Gene(gene) => query = query.filter(gene_metadata::gene.eq(gene.as_str())),
                GeneLookup::Accession(accession) => {
                    query = query.filter(gene_metadata::accession.eq(accession.as_str()));
                }
                GeneLookup::All => (),
            }

            let rows = query.load::<GeneMetadataRow>(&mut db_conn).await?;

            Ok::<_, error::Error>(rows.into_iter().map(GeneMetadataRecord::from).collect())
        };

        fetch.await.map_err(|e| e.unavailable(Table::GeneMetadata))
    }

    async fn plate_measurements(&self, gene: &GeneId) -> SourceResult<Vec<PlateMeasurementRecord>> {
        let fetch = async {
            let mut db_conn = self.db_conn().await?;

            let rows = plate_data::table
                .filter(plate_data::gene.eq(gene.as_str()))
                .order_by((plate_data::plate, plate_data::plate_row, plate_data::plate_column))
                .select(PlateMeasurementRow::as_select())
                .load::<PlateMeasurementRow>(&mut db_conn)
                .await?;

            Ok::<_, error::Error>(rows.into_iter().map(PlateMeasurementRecord::from).collect())
        };

        fetch.await.map_err(|e| e.unavailable(Table::PlateData))
    }

    async fn ping(&self) -> SourceResult<()> {
        let fetch = async {
            let mut db_conn = self.db_conn().await?;
            diesel::sql_query("SELECT 1").execute(&mut db_conn).await?;

            Ok::<_, error::Error>(())
        };

        fetch.await.map_err(error::Error::unreachable)
    }
}
