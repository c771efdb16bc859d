use std::path::PathBuf;

use anyhow::{anyhow, Error};
use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "TRENDING_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub key_path: PathBuf,
    pub country_code_path: PathBuf,
    pub output_dir: PathBuf,
    pub by_category: bool,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub category_delay_millis: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            key_path: PathBuf::from("api_key.txt"),
            country_code_path: PathBuf::from("country_codes.txt"),
            output_dir: PathBuf::from("output/"),
            by_category: true,
            api_base_url: "https://www.googleapis.com/youtube/v3/".to_string(),
            request_timeout_secs: 10,
            category_delay_millis: 500,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then the optional JSON file, then `TRENDING_*` variables.
    pub fn figment(config_file: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = config_file {
            figment = figment.merge(Json::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Command line values are merged last, `None` fields must be skipped
    /// when serializing so they keep the lower layers.
    pub fn load<T: Serialize>(
        config_file: Option<&PathBuf>,
        overrides: &T,
    ) -> Result<Config, Error> {
        check_config_file(config_file)?;

        let config = Config::figment(config_file)
            .merge(Serialized::defaults(overrides))
            .extract()?;
        Ok(config)
    }
}

fn check_config_file(config_file: Option<&PathBuf>) -> Result<(), Error> {
    match config_file {
        Some(path) if !path.is_file() => {
            Err(anyhow!("Config file {} does not exist", path.display()))
        }
        _ => Ok(()),
    }
}
