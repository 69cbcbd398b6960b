use std::{env, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::pricing::formula::DEFAULT_REFERENCE_YEAR;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    pub http_bind_address: Option<String>,
    pub data_dir: Option<String>,
    pub reference_year: Option<i32>,
    pub ml_service_url: Option<String>,
    pub ml_request_timeout: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn http_bind_address(&self) -> String {
        self.http_bind_address
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or(DEFAULT_REFERENCE_YEAR)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Parses `ml_request_timeout` as a humantime duration such as `"5s"`.
    pub fn ml_request_timeout(&self) -> Result<Option<Duration>> {
        self.ml_request_timeout
            .as_deref()
            .map(|raw| {
                humantime::parse_duration(raw)
                    .with_context(|| format!("invalid ml_request_timeout '{raw}'"))
            })
            .transpose()
    }
}

pub fn create_test_config() -> Config {
    Config {
        http_bind_address: Some("127.0.0.1:0".to_string()),
        data_dir: Some(concat!(env!("CARGO_MANIFEST_DIR"), "/data").to_string()),
        reference_year: Some(DEFAULT_REFERENCE_YEAR),
        ml_service_url: None,
        ml_request_timeout: None,
        log_level: Some("debug".to_string()),
    }
}

pub fn parse_config(bytes: &[u8]) -> Result<Config> {
    toml::from_slice(bytes).context("failed to parse config")
}

/// Reads the TOML file named by `CONFIG_PATH`, falling back to defaults when
/// the variable is unset.
pub fn read_config() -> Result<Config> {
    dotenv().ok();
    let Ok(config_path) = env::var(CONFIG_PATH_ENV) else {
        return Ok(Config::default());
    };

    std::fs::read(&config_path)
        .with_context(|| format!("failed to read {config_path}"))
        .and_then(|bytes| parse_config(&bytes))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config(b"").unwrap();
        assert_eq!(config.http_bind_address(), DEFAULT_BIND_ADDRESS);
        assert_eq!(config.data_dir(), PathBuf::from("data"));
        assert_eq!(config.reference_year(), 2025);
        assert_eq!(config.log_level(), "info");
        assert!(config.ml_request_timeout().unwrap().is_none());
    }

    #[test]
    fn reads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
http_bind_address = "0.0.0.0:9000"
reference_year = 2030
ml_service_url = "http://ml:8080"
ml_request_timeout = "2s 500ms"
"#
        )
        .unwrap();

        let bytes = std::fs::read(file.path()).unwrap();
        let config = parse_config(&bytes).unwrap();
        assert_eq!(config.http_bind_address(), "0.0.0.0:9000");
        assert_eq!(config.reference_year(), 2030);
        assert_eq!(config.ml_service_url.as_deref(), Some("http://ml:8080"));
        assert_eq!(
            config.ml_request_timeout().unwrap(),
            Some(Duration::from_millis(2500))
        );
    }

    #[test]
    fn bad_timeout_is_reported() {
        let config = parse_config(br#"ml_request_timeout = "soon""#).unwrap();
        let err = config.ml_request_timeout().unwrap_err();
        assert!(err.to_string().contains("soon"));
    }

    #[test]
    fn wrong_types_fail_to_parse() {
        assert!(parse_config(br#"reference_year = "next""#).is_err());
    }
}
