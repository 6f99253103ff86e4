use chrono::{NaiveDate, NaiveDateTime};
use diesel::{pg::Pg, prelude::*};
use petadex_core::model::{
    CoreSequenceRecord, GeneMetadataRecord, GeoPoint, PlateMeasurementRecord, ResearchContextRecord,
    ResidueFeatures, SampleOriginRecord, TemperatureRecord,
};

use super::schema::{
    aa_seq_features, core_sequence, gene_metadata, plate_data, research_context, sample_origin,
    temperature,
};

#[derive(Queryable, Selectable)]
#[diesel(table_name = core_sequence, check_for_backend(Pg))]
pub(super) struct CoreSequenceRow {
    accession: String,
    aa_sequence: String,
    source: Option<String>,
    synonyms: Option<Vec<String>>,
    genotype: Option<String>,
    genotype_description: Option<String>,
    synthetic: Option<bool>,
    parent_accessions: Option<Vec<String>>,
    parent_genes: Option<Vec<String>>,
    date_entered: Option<NaiveDateTime>,
}

impl From<CoreSequenceRow> for CoreSequenceRecord {
    fn from(row: CoreSequenceRow) -> Self {
        let CoreSequenceRow {
            accession,
            aa_sequence,
            source,
            synonyms,
            genotype,
            genotype_description,
            synthetic,
            parent_accessions,
            parent_genes,
            date_entered,
        } = row;

        Self {
            accession: accession.into(),
            aa_sequence,
            source,
            synonyms,
            genotype,
            genotype_description,
            synthetic,
            parent_accessions,
            parent_genes,
            date_entered,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = sample_origin, check_for_backend(Pg))]
pub(super) struct SampleOriginRow {
    accession: String,
    country: Option<String>,
    continent: Option<String>,
    biome: Option<String>,
    elevation: Option<f64>,
    collection_date: Option<String>,
    location_name: Option<String>,
    source_organism: Option<String>,
}

impl SampleOriginRow {
    /// Joins the row with the coordinates read out of its `lat_lon` point.
    pub(super) fn with_point(self, latitude: Option<f64>, longitude: Option<f64>) -> SampleOriginRecord {
        let Self {
            accession,
            country,
            continent,
            biome,
            elevation,
            collection_date,
            location_name,
            source_organism,
        } = self;

        SampleOriginRecord {
            accession: accession.into(),
            country,
            continent,
            biome,
            lat_lon: latitude
                .zip(longitude)
                .map(|(latitude, longitude)| GeoPoint { latitude, longitude }),
            elevation,
            collection_date,
            location_name,
            source_organism,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = research_context, check_for_backend(Pg))]
pub(super) struct ResearchContextRow {
    accession: String,
    bioproject: Option<String>,
    biosample: Option<String>,
    sra_accession: Option<String>,
    sra_study: Option<String>,
    release_date: Option<NaiveDate>,
    organism: Option<String>,
    biosample_model: Option<String>,
}

impl From<ResearchContextRow> for ResearchContextRecord {
    fn from(row: ResearchContextRow) -> Self {
        let ResearchContextRow {
            accession,
            bioproject,
            biosample,
            sra_accession,
            sra_study,
            release_date,
            organism,
            biosample_model,
        } = row;

        Self {
            accession: accession.into(),
            bioproject,
            biosample,
            sra_accession,
            sra_study,
            release_date,
            organism,
            biosample_model,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = temperature, check_for_backend(Pg))]
pub(super) struct TemperatureRow {
    accession: String,
    degrees: f64,
}

impl From<TemperatureRow> for TemperatureRecord {
    fn from(TemperatureRow { accession, degrees }: TemperatureRow) -> Self {
        Self {
            accession: accession.into(),
            temperature: degrees,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = aa_seq_features, check_for_backend(Pg))]
pub(super) struct ResidueFeaturesRow {
    accession: String,
    mass: Option<Vec<f64>>,
    pi: Option<Vec<f64>>,
    hydrophobicity: Option<Vec<f64>>,
}

impl From<ResidueFeaturesRow> for ResidueFeatures {
    fn from(row: ResidueFeaturesRow) -> Self {
        let ResidueFeaturesRow {
            accession,
            mass,
            pi,
            hydrophobicity,
        } = row;

        Self {
            accession: accession.into(),
            mass: mass.unwrap_or_default(),
            pi: pi.unwrap_or_default(),
            hydrophobicity: hydrophobicity.unwrap_or_default(),
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = gene_metadata, check_for_backend(Pg))]
pub(super) struct GeneMetadataRow {
    gene: String,
    nickname: Option<String>,
    accession: Option<String>,
    orf_nt_sequence: Option<String>,
    left_homology_arm: Option<String>,
    right_homology_arm: Option<String>,
    batch: Option<String>,
    date_entered: Option<NaiveDate>,
    genetic_code: Option<i32>,
}

impl From<GeneMetadataRow> for GeneMetadataRecord {
    fn from(row: GeneMetadataRow) -> Self {
        let GeneMetadataRow {
            gene,
            nickname,
            accession,
            orf_nt_sequence,
            left_homology_arm,
            right_homology_arm,
            batch,
            date_entered,
            genetic_code,
        } = row;

        Self {
            gene: gene.into(),
            nickname,
            accession: accession.map(Into::into),
            orf_nt_sequence,
            left_homology_arm,
            right_homology_arm,
            batch,
            date_entered,
            genetic_code,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = plate_data, check_for_backend(Pg))]
pub(super) struct PlateMeasurementRow {
    id: i32,
    gene: String,
    plate: String,
    plasmid: Option<String>,
    plate_row: Option<String>,
    plate_column: Option<i32>,
    measurement_type: Option<String>,
    media: Option<String>,
    timepoint_hours: Option<f64>,
    normalization_method: Option<String>,
    readout_value: Option<f64>,
    colony_size: Option<f64>,
    sample: Option<String>,
    date_entered: Option<NaiveDate>,
}

impl From<PlateMeasurementRow> for PlateMeasurementRecord {
    fn from(row: PlateMeasurementRow) -> Self {
        let PlateMeasurementRow {
            id,
            gene,
            plate,
            plasmid,
            plate_row,
            plate_column,
            measurement_type,
            media,
            timepoint_hours,
            normalization_method,
            readout_value,
            colony_size,
            sample,
            date_entered,
        } = row;

        Self {
            id,
            gene: gene.into(),
            plate,
            plasmid,
            plate_row,
            plate_column,
            measurement_type,
            media,
            timepoint_hours,
            normalization_method,
            readout_value,
            colony_size,
            sample,
            date_entered,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn origin_row() -> SampleOriginRow {
        SampleOriginRow {
            accession: "ACC1".to_string(),
            country: Some("Japan".to_string()),
            continent: None,
            biome: None,
            elevation: None,
            collection_date: None,
            location_name: None,
            source_organism: None,
        }
    }

    #[rstest]
    #[case(Some(34.5), Some(135.5), Some(GeoPoint { latitude: 34.5, longitude: 135.5 }))]
    #[case(None, None, None)]
    #[case(Some(34.5), None, None)]
    fn point_is_recomposed(
        #[case] latitude: Option<f64>,
        #[case] longitude: Option<f64>,
        #[case] expected: Option<GeoPoint>,
    ) {
        let record = origin_row().with_point(latitude, longitude);

        assert_eq!(record.lat_lon, expected);
        assert_eq!(record.accession.as_str(), "ACC1");
    }

    #[test]
    fn missing_feature_arrays_are_empty() {
        let row = ResidueFeaturesRow {
            accession: "ACC1".to_string(),
            mass: None,
            pi: Some(vec![5.0]),
            hydrophobicity: None,
        };

        let features = ResidueFeatures::from(row);

        assert!(features.mass.is_empty());
        assert_eq!(features.pi, [5.0]);
    }
}
