use std::fs;

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::{Args, Parser};
use petadex_core::{
    StatisticsConfig,
    config::{DEFAULT_HYDROPHOBICITY_THRESHOLD, NullReadouts, ReadoutAveraging},
};

use crate::db::seed_data::SeedData;

#[derive(Args, serde::Deserialize, Clone)]
pub struct Config {
    #[arg(long, default_value_t)]
    dev: bool,
    #[arg(long, env = "PETADEX_SECRETS_DIR")]
    secrets_dir: Option<Utf8PathBuf>,
    #[arg(long, env = "PETADEX_DB_USER", default_value_t = String::from("postgres"))]
    db_user: String,
    #[arg(long, env = "PETADEX_DB_PASSWORD", default_value_t)]
    db_password: String,
    #[arg(long, env = "PETADEX_DB_HOST", default_value_t = String::from("localhost"))]
    db_host: String,
    #[arg(long, env = "PETADEX_DB_PORT", default_value_t = 5432)]
    db_port: u16,
    #[arg(long, env = "PETADEX_DB_NAME", default_value_t = String::from("postgres"))]
    db_name: String,
    #[arg(long, env = "PETADEX_DB_MAX_CONNECTIONS", default_value_t = 10)]
    db_max_connections: usize,
    #[arg(long, env = "PETADEX_HOST", default_value_t = String::from("localhost"))]
    host: String,
    #[arg(long, env = "PETADEX_PORT", default_value_t = 3001)]
    port: u16,
    #[arg(skip)]
    seed_data: Option<SeedData>,
    #[arg(long, env = "PETADEX_SEED_DATA_PATH")]
    seed_data_path: Option<Utf8PathBuf>,
    #[arg(long, env = "PETADEX_HYDROPHOBICITY_THRESHOLD", default_value_t = DEFAULT_HYDROPHOBICITY_THRESHOLD)]
    hydrophobicity_threshold: f64,
    #[arg(long, env = "PETADEX_READOUT_AVERAGING", default_value_t)]
    readout_averaging: ReadoutAveraging,
    #[arg(long, env = "PETADEX_NULL_READOUTS", default_value_t)]
    null_readouts: NullReadouts,
}
impl Config {
    #[must_use]
    pub fn is_dev(&self) -> bool {
        self.dev
    }

    /// # Errors
    pub fn read_secrets(&mut self) -> anyhow::Result<()> {
        let Self {
            secrets_dir,
            db_user,
            db_password,
            db_name,
            seed_data,
            seed_data_path,
            ..
        } = self;

        let Some(secrets_dir) = secrets_dir else {
            return Ok(());
        };

        let read_secret = |name: &str| {
            fs::read_to_string(secrets_dir.join(name))
                .map(|s| s.trim_end().to_string())
                .context(format!("failed to read secret {name}"))
        };

        *db_user = read_secret("db_user")?;
        *db_password = read_secret("db_password")?;
        *db_name = read_secret("db_name")?;

        if secrets_dir.join("seed_data").is_file() {
            *seed_data = serde_json::from_str(&read_secret("seed_data")?)?;
            *seed_data_path = None;
        }

        Ok(())
    }

    #[must_use]
    pub fn app_address(&self) -> String {
        let Self { host, port, .. } = self;

        format!("{host}:{port}")
    }

    #[must_use]
    pub fn db_url(&self) -> String {
        let Self {
            db_user,
            db_password,
            db_host,
            db_port,
            db_name,
            ..
        } = self;

        format!("postgres://{db_user}:{db_password}@{db_host}:{db_port}/{db_name}")
    }

    #[must_use]
    pub fn db_max_connections(&self) -> usize {
        self.db_max_connections
    }

    #[must_use]
    pub fn statistics(&self) -> StatisticsConfig {
        let Self {
            hydrophobicity_threshold,
            readout_averaging,
            null_readouts,
            ..
        } = *self;

        StatisticsConfig {
            hydrophobicity_threshold,
            readout_averaging,
            null_readouts,
        }
    }

    /// Records to serve in dev mode. A dev server started without seed data serves an empty
    /// source.
    ///
    /// # Errors
    pub fn seed_data(&self) -> anyhow::Result<SeedData> {
        let Self {
            seed_data,
            seed_data_path,
            ..
        } = self;

        match (seed_data, seed_data_path) {
            (Some(seed_data), None) => Ok(seed_data.clone()),
            (None, Some(seed_data_path)) => {
                let contents = fs::read_to_string(seed_data_path)
                    .context(format!("failed to read {seed_data_path}"))?;

                Ok(serde_json::from_str(&contents)?)
            }
            (Some(_), Some(_)) => bail!("`seed_data` and `seed_data_path` are mutually exclusive"),
            (None, None) => Ok(SeedData::default()),
        }
    }
}

#[derive(Parser)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,
    #[arg(long, env = "PETADEX_LOG_DIR")]
    pub log_dir: Option<Utf8PathBuf>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn config(overrides: serde_json::Value) -> Config {
        let mut config = json!({
            "dev": true,
            "db_user": "petadex",
            "db_password": "hunter2",
            "db_host": "db",
            "db_port": 5433,
            "db_name": "petadex",
            "db_max_connections": 4,
            "host": "0.0.0.0",
            "port": 3001,
            "hydrophobicity_threshold": 0.5,
            "readout_averaging": "pairwise",
            "null_readouts": "as_zero"
        });

        if let (Some(config), Some(overrides)) = (config.as_object_mut(), overrides.as_object()) {
            config.extend(overrides.clone());
        }

        serde_json::from_value(config).unwrap()
    }

    #[test]
    fn addresses() {
        let config = config(json!({}));

        assert_eq!(config.app_address(), "0.0.0.0:3001");
        assert_eq!(config.db_url(), "postgres://petadex:hunter2@db:5433/petadex");
    }

    #[test]
    fn statistics_are_read_from_config() {
        let config = config(json!({
            "hydrophobicity_threshold": 0.25,
            "readout_averaging": "mean",
            "null_readouts": "exclude"
        }));

        assert_eq!(
            config.statistics(),
            StatisticsConfig {
                hydrophobicity_threshold: 0.25,
                readout_averaging: ReadoutAveraging::Mean,
                null_readouts: NullReadouts::Exclude
            }
        );
    }

    #[test]
    fn seed_data_sources_are_mutually_exclusive() {
        let config = config(json!({ "seed_data": {}, "seed_data_path": "seed.json" }));

        assert!(config.seed_data().is_err());
    }

    #[test]
    fn missing_seed_data_is_empty() {
        let config = config(json!({}));

        assert_eq!(config.seed_data().unwrap(), SeedData::default());
    }
}
