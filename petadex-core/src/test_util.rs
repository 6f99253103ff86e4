use chrono::NaiveDate;

use crate::{
    model::{
        CoreSequenceRecord, GeneMetadataRecord, GeoPoint, PlateMeasurementRecord,
        ResearchContextRecord, ResidueFeatures, SampleOriginRecord, TemperatureRecord,
    },
    source::InMemorySource,
};

pub fn core_sequence(accession: &str) -> CoreSequenceRecord {
    CoreSequenceRecord {
        accession: accession.into(),
        aa_sequence: "MKLV".to_string(),
        source: Some("Ideonella sakaiensis".to_string()),
        synonyms: Some(vec!["IsPETase".to_string()]),
        genotype: Some("wild type".to_string()),
        genotype_description: None,
        synthetic: Some(false),
        parent_accessions: None,
        parent_genes: Some(vec!["parent1".to_string()]),
        date_entered: NaiveDate::from_ymd_opt(2024, 5, 1).and_then(|d| d.and_hms_opt(12, 0, 0)),
    }
}

pub fn sample_origin(accession: &str, lat_lon: Option<(f64, f64)>) -> SampleOriginRecord {
    SampleOriginRecord {
        accession: accession.into(),
        country: Some("Japan".to_string()),
        continent: Some("Asia".to_string()),
        biome: Some("landfill".to_string()),
        lat_lon: lat_lon.map(|(latitude, longitude)| GeoPoint { latitude, longitude }),
        elevation: Some(12.0),
        collection_date: Some("2016".to_string()),
        location_name: Some("Japan: Sakai".to_string()),
        source_organism: Some("Ideonella sakaiensis".to_string()),
    }
}

pub fn research_context(accession: &str) -> ResearchContextRecord {
    ResearchContextRecord {
        accession: accession.into(),
        bioproject: Some("PRJNA1".to_string()),
        biosample: Some("SAMN1".to_string()),
        sra_accession: Some("SRR1".to_string()),
        sra_study: Some("SRP1".to_string()),
        release_date: NaiveDate::from_ymd_opt(2016, 3, 11),
        organism: Some("Ideonella sakaiensis".to_string()),
        biosample_model: Some("Microbe".to_string()),
    }
}

pub fn temperature(accession: &str, temperature: f64) -> TemperatureRecord {
    TemperatureRecord {
        accession: accession.into(),
        temperature,
    }
}

pub fn residue_features(accession: &str) -> ResidueFeatures {
    ResidueFeatures {
        accession: accession.into(),
        mass: vec![131.2, 128.2, 113.2, 99.1],
        pi: vec![5.7, 9.7, 6.0, 6.0],
        hydrophobicity: vec![0.7, 0.1, 0.9, 0.8],
    }
}

pub fn gene(gene: &str, accession: Option<&str>) -> GeneMetadataRecord {
    GeneMetadataRecord {
        gene: gene.into(),
        nickname: None,
        accession: accession.map(Into::into),
        orf_nt_sequence: Some("ATGAAA".to_string()),
        left_homology_arm: None,
        right_homology_arm: None,
        batch: Some("batch1".to_string()),
        date_entered: None,
        genetic_code: Some(11),
    }
}

pub fn plate_measurement(
    id: i32,
    gene: &str,
    plate: &str,
    media: Option<&str>,
    timepoint_hours: Option<f64>,
    readout_value: Option<f64>,
) -> PlateMeasurementRecord {
    PlateMeasurementRecord {
        id,
        gene: gene.into(),
        plate: plate.to_string(),
        plasmid: None,
        plate_row: Some("A".to_string()),
        plate_column: Some(id),
        measurement_type: Some("absorbance".to_string()),
        media: media.map(str::to_string),
        timepoint_hours,
        normalization_method: None,
        readout_value,
        colony_size: None,
        sample: None,
        date_entered: None,
    }
}

/// `ACC1` present in every table, `ACC2` only as a core sequence.
pub fn populated_source() -> InMemorySource {
    let mut source = InMemorySource::default();

    source.insert_core_sequence(core_sequence("ACC1"));
    source.insert_sample_origin(sample_origin("ACC1", Some((10.5, -20.25))));
    source.insert_research_context(research_context("ACC1"));
    source.insert_temperature(temperature("ACC1", 37.0));
    source.insert_residue_features(residue_features("ACC1"));
    source.insert_core_sequence(core_sequence("ACC2"));

    source.insert_gene(gene("gene2", Some("ACC1")));
    source.insert_gene(gene("gene1", Some("ACC1")));
    source.insert_gene(gene("gene3", None));

    source.insert_plate_measurement(plate_measurement(2, "gene1", "plate1", Some("A"), Some(24.0), Some(0.4)));
    source.insert_plate_measurement(plate_measurement(1, "gene1", "plate1", Some("A"), Some(24.0), Some(0.2)));
    source.insert_plate_measurement(plate_measurement(3, "gene1", "plate2", Some("B"), Some(0.0), None));

    source
}
