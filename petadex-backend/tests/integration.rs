use petadex_backend::{config::Config, server};
use petadex_core::{
    GeneId,
    endpoint::{Endpoint, fill},
    plate::PlateSummary,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[tokio::test]
async fn dev_api() {
    let seed_data = json!({
        "core_sequences": [{
            "accession": "WP_054022242.1",
            "aa_sequence": "MNFPRASRLMQAAVLGGLMAVSAAATAQTNPYARGPNPTAASLEASAGPFTVRSFTVSRPSGYGAGTVYYPTNAGGTVGAIAIVPGYTARQSSIKWWGPRLASHGFVVITIDTNSTLDQPSSRSSQQMAALRQVASLNGTSSSPIYGKVDTARMGVMGWSMGGGGSLISAANNPSLKAAAPQAPWDSSTNFSSVTVPTLIFACENDSIAPVNSSALPIYDSMSRNAKQFLEINGGSHSCANSGNSNQALIGKKGVAWMKRFMDNDTRYSTFACENPNSTRVSDFRTANCS",
            "source": "Ideonella sakaiensis",
            "synonyms": ["IsPETase"],
            "genotype": "wild type",
            "genotype_description": null,
            "synthetic": false,
            "parent_accessions": null,
            "parent_genes": null,
            "date_entered": "2024-05-01T12:00:00"
        }],
        "sample_origins": [{
            "accession": "WP_054022242.1",
            "country": "Japan",
            "continent": "Asia",
            "biome": "landfill",
            "lat_lon": { "latitude": 34.57, "longitude": 135.48 },
            "elevation": null,
            "collection_date": "2016",
            "location_name": "Japan: Sakai",
            "source_organism": "Ideonella sakaiensis"
        }],
        "genes": [{
            "gene": "IsPETase_001",
            "nickname": null,
            "accession": "WP_054022242.1",
            "orf_nt_sequence": null,
            "left_homology_arm": null,
            "right_homology_arm": null,
            "batch": null,
            "date_entered": null,
            "genetic_code": 11
        }]
    });

    let config = json!({
      "dev": true,
      "db_user": "postgres",
      "db_password": "",
      "db_host": "localhost",
      "db_port": 5432,
      "db_name": "postgres",
      "db_max_connections": 1,
      "host": "localhost",
      "port": 3901,
      "hydrophobicity_threshold": 0.5,
      "readout_averaging": "pairwise",
      "null_readouts": "as_zero",
      "seed_data": seed_data
    });

    let config: Config = serde_json::from_value(config).unwrap();
    let app_address = format!("http://{}", config.app_address());
    let _server_handle = tokio::spawn(server::serve(config, None));

    let client = reqwest::Client::new();

    tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;

    let response = client
        .get(format!("{app_address}/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let response: Value = client
        .get(format!("{app_address}/api/gene-details/WP_054022242.1/origin"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        response,
        json!({
            "accession": "WP_054022242.1",
            "country": "Japan",
            "continent": "Asia",
            "biome": "landfill",
            "source_organism": "Ideonella sakaiensis",
            "elevation": null,
            "latitude": 34.57,
            "longitude": 135.48,
            "location_name": "Japan: Sakai",
            "collection_date": "2016"
        })
    );

    let response: Value = client
        .get(format!("{app_address}/api/gene-metadata/by-accession/WP_054022242.1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(response[0]["gene"], "IsPETase_001");

    let response = client
        .get(format!(
            "{app_address}{}",
            fill(&Endpoint::<GeneId, PlateSummary>::route(), "IsPETase_001")
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let summary: PlateSummary = response.json().await.unwrap();
    assert_eq!(summary, PlateSummary::default());

    let response = client
        .get(format!("{app_address}/api/gene-details/UNKNOWN"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "status": 404,
            "error": { "type": "not_found", "entity": "core_sequence", "key": "UNKNOWN" }
        })
    );
}
