use petadex_core::{
    model::{
        CoreSequenceRecord, GeneMetadataRecord, PlateMeasurementRecord, ResearchContextRecord,
        ResidueFeatures, SampleOriginRecord, TemperatureRecord,
    },
    source::InMemorySource,
};
use serde::Deserialize;

/// Records loaded into the in-memory source of a dev server, one list per table.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SeedData {
    core_sequences: Vec<CoreSequenceRecord>,
    sample_origins: Vec<SampleOriginRecord>,
    research_contexts: Vec<ResearchContextRecord>,
    temperatures: Vec<TemperatureRecord>,
    residue_features: Vec<ResidueFeatures>,
    genes: Vec<GeneMetadataRecord>,
    plate_measurements: Vec<PlateMeasurementRecord>,
}

impl From<SeedData> for InMemorySource {
    fn from(seed_data: SeedData) -> Self {
        let SeedData {
            core_sequences,
            sample_origins,
            research_contexts,
            temperatures,
            residue_features,
            genes,
            plate_measurements,
        } = seed_data;

        let mut source = InMemorySource::default();

        for record in core_sequences {
            source.insert_core_sequence(record);
        }
        for record in sample_origins {
            source.insert_sample_origin(record);
        }
        for record in research_contexts {
            source.insert_research_context(record);
        }
        for record in temperatures {
            source.insert_temperature(record);
        }
        for record in residue_features {
            source.insert_residue_features(record);
        }
        for record in genes {
            source.insert_gene(record);
        }
        for record in plate_measurements {
            source.insert_plate_measurement(record);
        }

        source
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use petadex_core::{AccessionKey, RecordSource};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    pub(crate) fn seed_data() -> SeedData {
        let seed_data = json!({
            "core_sequences": [
                {
                    "accession": "ACC1",
                    "aa_sequence": "MKLV",
                    "source": "Ideonella sakaiensis",
                    "synonyms": ["IsPETase"],
                    "genotype": "wild type",
                    "genotype_description": null,
                    "synthetic": false,
                    "parent_accessions": null,
                    "parent_genes": null,
                    "date_entered": "2024-05-01T12:00:00"
                },
                {
                    "accession": "ACC2",
                    "aa_sequence": "MSNRHILL",
                    "source": null,
                    "synonyms": null,
                    "genotype": null,
                    "genotype_description": null,
                    "synthetic": true,
                    "parent_accessions": ["ACC1"],
                    "parent_genes": null,
                    "date_entered": null
                }
            ],
            "sample_origins": [
                {
                    "accession": "ACC1",
                    "country": "Japan",
                    "continent": "Asia",
                    "biome": "landfill",
                    "lat_lon": { "latitude": 34.57, "longitude": 135.48 },
                    "elevation": 12.0,
                    "collection_date": "2016",
                    "location_name": "Japan: Sakai",
                    "source_organism": "Ideonella sakaiensis"
                }
            ],
            "research_contexts": [
                {
                    "accession": "ACC1",
                    "bioproject": "PRJNA1",
                    "biosample": "SAMN1",
                    "sra_accession": "SRR1",
                    "sra_study": "SRP1",
                    "release_date": "2016-03-11",
                    "organism": "Ideonella sakaiensis",
                    "biosample_model": "Microbe"
                }
            ],
            "temperatures": [{ "accession": "ACC1", "temperature": 30.0 }],
            "residue_features": [
                {
                    "accession": "ACC1",
                    "mass": [131.2, 128.2, 113.2, 99.1],
                    "pi": [5.7, 9.7, 6.0, 6.0],
                    "hydrophobicity": [0.7, 0.1, 0.9, 0.8]
                }
            ],
            "genes": [
                {
                    "gene": "gene1",
                    "nickname": "IsPETase",
                    "accession": "ACC1",
                    "orf_nt_sequence": "ATGAAA",
                    "left_homology_arm": null,
                    "right_homology_arm": null,
                    "batch": "batch1",
                    "date_entered": "2024-06-01",
                    "genetic_code": 11
                }
            ],
            "plate_measurements": [
                {
                    "id": 1,
                    "gene": "gene1",
                    "plate": "plate1",
                    "plasmid": null,
                    "row": "A",
                    "column": 1,
                    "measurement_type": "absorbance",
                    "media": "LB",
                    "timepoint_hours": 24.0,
                    "normalization_method": null,
                    "readout_value": 0.2,
                    "colony_size": null,
                    "sample": null,
                    "date_entered": null
                },
                {
                    "id": 2,
                    "gene": "gene1",
                    "plate": "plate1",
                    "plasmid": null,
                    "row": "A",
                    "column": 2,
                    "measurement_type": "absorbance",
                    "media": "LB",
                    "timepoint_hours": 24.0,
                    "normalization_method": null,
                    "readout_value": 0.4,
                    "colony_size": null,
                    "sample": null,
                    "date_entered": null
                }
            ]
        });

        serde_json::from_value(seed_data).unwrap()
    }

    #[tokio::test]
    async fn seed_data_populates_every_table() {
        let source = InMemorySource::from(seed_data());
        let accession = AccessionKey::from("ACC1");

        assert!(source.core_sequence(&accession).await.unwrap().is_some());
        assert!(source.sample_origin(&accession).await.unwrap().is_some());
        assert!(source.research_context(&accession).await.unwrap().is_some());
        assert!(source.residue_features(&accession).await.unwrap().is_some());
        assert_eq!(
            source.temperature(&accession).await.unwrap().map(|t| t.temperature),
            Some(30.0)
        );
        assert_eq!(source.plate_measurements(&"gene1".into()).await.unwrap().len(), 2);
    }

    #[test]
    fn tables_may_be_omitted() {
        let seed_data: SeedData = serde_json::from_value(json!({ "temperatures": [] })).unwrap();

        assert_eq!(seed_data, SeedData::default());
    }
}
