use std::path::Path;
use std::time::Duration;
use crate::error::{Error, Result};

use std::fs::File;
use std::io::prelude::*;

use toml;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where the sensor hub publishes its latest snapshot
    pub endpoint: String,
    pub http_address: String,
    pub http_port: u16,
    pub request_timeout_ms: u64,
    /// Poll a built-in sine wave generator instead of `endpoint`
    pub simulate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: "http://127.0.0.1:8000/data".into(),
            http_address: "127.0.0.1".into(),
            http_port: 8080,
            request_timeout_ms: 2000,
            simulate: false,
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

pub fn read_config(config_path: &Path) -> Result<Config> {
    let mut file = File::open(config_path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;

    // A zero timeout would fail every single poll
    if config.request_timeout_ms == 0 {
        return Err(Error::InvalidSetting("request_timeout_ms must be greater than zero"));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = parse_config("http_port = 9000\nsimulate = true\n").unwrap();
        assert_eq!(config.http_port, 9000);
        assert!(config.simulate);
        assert_eq!(config.endpoint, "http://127.0.0.1:8000/data");
        assert_eq!(config.request_timeout(), Duration::from_millis(2000));
    }

    #[test]
    fn wrong_type_is_an_error() {
        match parse_config("http_port = \"eighty\"") {
            Err(Error::Toml(_)) => {}
            other => panic!("expected toml error, got {:?}", other),
        }
    }

    #[test]
    fn zero_timeout_is_rejected() {
        match parse_config("request_timeout_ms = 0") {
            Err(Error::InvalidSetting(reason)) => assert!(reason.contains("request_timeout_ms")),
            other => panic!("expected invalid setting, got {:?}", other),
        }
        assert_eq!(parse_config("request_timeout_ms = 1").unwrap().request_timeout_ms, 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = read_config(Path::new("definitely/not/here/config.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
