// `sample_origin.lat_lon` is a PostGIS geometry and is read through `ST_Y`/`ST_X`, so it is
// not declared here.

diesel::table! {
    core_sequence (accession) {
        accession -> Text,
        aa_sequence -> Text,
        source -> Nullable<Text>,
        synonyms -> Nullable<Array<Text>>,
        genotype -> Nullable<Text>,
        genotype_description -> Nullable<Text>,
        synthetic -> Nullable<Bool>,
        parent_accessions -> Nullable<Array<Text>>,
        parent_genes -> Nullable<Array<Text>>,
        date_entered -> Nullable<Timestamp>,
    }
}

diesel::table! {
    sample_origin (accession) {
        accession -> Text,
        country -> Nullable<Text>,
        continent -> Nullable<Text>,
        biome -> Nullable<Text>,
        elevation -> Nullable<Float8>,
        collection_date -> Nullable<Text>,
        location_name -> Nullable<Text>,
        source_organism -> Nullable<Text>,
    }
}

diesel::table! {
    research_context (accession) {
        accession -> Text,
        bioproject -> Nullable<Text>,
        biosample -> Nullable<Text>,
        sra_accession -> Nullable<Text>,
        sra_study -> Nullable<Text>,
        release_date -> Nullable<Date>,
        organism -> Nullable<Text>,
        biosample_model -> Nullable<Text>,
    }
}

diesel::table! {
    temperature (accession) {
        accession -> Text,
        #[sql_name = "temperature"]
        degrees -> Float8,
    }
}

diesel::table! {
    aa_seq_features (accession) {
        accession -> Text,
        mass -> Nullable<Array<Float8>>,
        pi -> Nullable<Array<Float8>>,
        hydrophobicity -> Nullable<Array<Float8>>,
    }
}

diesel::table! {
    gene_metadata (gene) {
        gene -> Text,
        nickname -> Nullable<Text>,
        accession -> Nullable<Text>,
        orf_nt_sequence -> Nullable<Text>,
        left_homology_arm -> Nullable<Text>,
        right_homology_arm -> Nullable<Text>,
        batch -> Nullable<Text>,
        date_entered -> Nullable<Date>,
        genetic_code -> Nullable<Int4>,
    }
}

diesel::table! {
    plate_data (id) {
        id -> Int4,
        gene -> Text,
        plate -> Text,
        plasmid -> Nullable<Text>,
        #[sql_name = "row"]
        plate_row -> Nullable<Text>,
        #[sql_name = "column"]
        plate_column -> Nullable<Int4>,
        measurement_type -> Nullable<Text>,
        media -> Nullable<Text>,
        timepoint_hours -> Nullable<Float8>,
        normalization_method -> Nullable<Text>,
        readout_value -> Nullable<Float8>,
        colony_size -> Nullable<Float8>,
        sample -> Nullable<Text>,
        date_entered -> Nullable<Date>,
    }
}
