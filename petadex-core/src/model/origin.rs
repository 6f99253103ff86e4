use serde::{Deserialize, Serialize};

use crate::key::AccessionKey;

/// A single geospatial point as stored alongside the sample. It is only ever exposed
/// decomposed into separate latitude/longitude fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleOriginRecord {
    pub accession: AccessionKey,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub biome: Option<String>,
    pub lat_lon: Option<GeoPoint>,
    pub elevation: Option<f64>,
    pub collection_date: Option<String>,
    pub location_name: Option<String>,
    pub source_organism: Option<String>,
}

/// Optional overlay; only a subset of accessions have a measured temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    pub accession: AccessionKey,
    pub temperature: f64,
}
