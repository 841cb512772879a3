use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::dashboard::Dashboard;
use crate::error::{Error, Result};

pub type SharedDashboard = Arc<Mutex<Dashboard>>;

/// One reading of every sensor, as published on `/data`.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricsSnapshot {
    pub room_temp: f64,
    pub room_humidity: f64,
    pub ds_temp: f64,
    pub heart_rate: f64,
    pub spo2: f64,
}

impl MetricsSnapshot {
    /// Decodes a `/data` body, naming the first absent or non-numeric field.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)?;

        let field = |name: &'static str| {
            value.get(name)
                .and_then(Value::as_f64)
                .ok_or(Error::MissingField(name))
        };

        Ok(MetricsSnapshot {
            room_temp: field("roomTemp")?,
            room_humidity: field("roomHumidity")?,
            ds_temp: field("dsTemp")?,
            heart_rate: field("heartRate")?,
            spo2: field("spo2")?,
        })
    }
}
