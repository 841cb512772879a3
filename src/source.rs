use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Error, Result};
use crate::types::MetricsSnapshot;

/// Anything that can produce the latest snapshot on demand.
pub trait MetricsSource: Send {
    fn fetch(&mut self) -> Result<MetricsSnapshot>;
}

pub struct HttpSource {
    endpoint: String,
    client: Client,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()?;

        Ok(Self {endpoint: endpoint.into(), client})
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl MetricsSource for HttpSource {
    fn fetch(&mut self) -> Result<MetricsSnapshot> {
        let response = self.client.get(&self.endpoint).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.bytes()?;
        MetricsSnapshot::from_json(&body)
    }
}
