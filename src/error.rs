use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] ::std::io::Error),
    #[error("invalid config: {0}")]
    Toml(#[from] ::toml::de::Error),
    #[error("invalid config: {0}")]
    InvalidSetting(&'static str),
    #[error("malformed metrics payload: {0}")]
    Parse(#[from] ::serde_json::Error),
    #[error("request failed: {0}")]
    Network(#[from] ::reqwest::Error),
    #[error("endpoint answered with status {0}")]
    Status(u16),
    #[error("metrics payload is missing numeric field `{0}`")]
    MissingField(&'static str),
    #[error("the poll session is already running")]
    SessionRunning,
}

pub type Result<T> = ::std::result::Result<T, Error>;
