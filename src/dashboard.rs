use crate::chart::Chart;
use crate::readout::{format_body_temp, format_humidity, format_room_temp};
use crate::types::MetricsSnapshot;

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Readouts {
    pub room_temp: Option<String>,
    pub room_humidity: Option<String>,
    pub body_temp: Option<String>,
}

/// Everything the dashboard shows. Only the poll cycle mutates it.
#[derive(Clone, Debug)]
pub struct Dashboard {
    readouts: Readouts,
    heart_rate: Chart,
    spo2: Chart,
    last_update: Option<String>,
    failed_cycles: u32,
    last_error: Option<String>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            readouts: Readouts::default(),
            heart_rate: Chart::new("Heart rate", "bpm"),
            spo2: Chart::new("SpO2", "%"),
            last_update: None,
            failed_cycles: 0,
            last_error: None,
        }
    }

    pub fn apply(&mut self, snapshot: &MetricsSnapshot, label: &str) {
        self.readouts = Readouts {
            room_temp: Some(format_room_temp(snapshot.room_temp)),
            room_humidity: Some(format_humidity(snapshot.room_humidity)),
            body_temp: Some(format_body_temp(snapshot.ds_temp)),
        };

        self.heart_rate.append(label, snapshot.heart_rate);
        self.spo2.append(label, snapshot.spo2);

        self.last_update = Some(label.to_string());
        self.failed_cycles = 0;
        self.last_error = None;
    }

    /// Marks the displayed values as stale without touching them.
    pub fn record_failure(&mut self, reason: impl ToString) {
        self.failed_cycles = self.failed_cycles.saturating_add(1);
        self.last_error = Some(reason.to_string());
    }

    pub fn is_stale(&self) -> bool {
        self.failed_cycles > 0
    }

    pub fn failed_cycles(&self) -> u32 {
        self.failed_cycles
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_ref().map(String::as_str)
    }

    pub fn last_update(&self) -> Option<&str> {
        self.last_update.as_ref().map(String::as_str)
    }

    pub fn readouts(&self) -> &Readouts {
        &self.readouts
    }

    pub fn heart_rate(&self) -> &Chart {
        &self.heart_rate
    }

    pub fn spo2(&self) -> &Chart {
        &self.spo2
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(heart_rate: f64, spo2: f64) -> MetricsSnapshot {
        MetricsSnapshot {
            room_temp: 21.05,
            room_humidity: 45.,
            ds_temp: 37.,
            heart_rate,
            spo2,
        }
    }

    #[test]
    fn readouts_are_empty_before_first_poll() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.readouts(), &Readouts::default());
        assert!(dashboard.heart_rate().buffer().is_empty());
        assert!(!dashboard.is_stale());
    }

    #[test]
    fn apply_formats_readouts_and_feeds_both_charts() {
        let mut dashboard = Dashboard::new();
        dashboard.apply(&snapshot(72., 98.), "10:00:00");

        let readouts = dashboard.readouts();
        assert_eq!(readouts.room_temp.as_ref().map(String::as_str), Some("21.1 °C"));
        assert_eq!(readouts.room_humidity.as_ref().map(String::as_str), Some("45.0 %"));
        assert_eq!(readouts.body_temp.as_ref().map(String::as_str), Some("98.6 °F"));

        assert_eq!(dashboard.heart_rate().buffer().values(), vec![72.]);
        assert_eq!(dashboard.spo2().buffer().values(), vec![98.]);
        assert_eq!(dashboard.spo2().buffer().labels(), vec!["10:00:00"]);
        assert_eq!(dashboard.last_update(), Some("10:00:00"));
    }

    #[test]
    fn failure_leaves_data_alone_and_success_clears_it() {
        let mut dashboard = Dashboard::new();
        dashboard.apply(&snapshot(72., 98.), "10:00:00");

        dashboard.record_failure("connection refused");
        dashboard.record_failure("connection refused");

        assert!(dashboard.is_stale());
        assert_eq!(dashboard.failed_cycles(), 2);
        assert_eq!(dashboard.last_error(), Some("connection refused"));
        assert_eq!(dashboard.heart_rate().buffer().len(), 1);
        assert_eq!(dashboard.heart_rate().revision(), 1);

        dashboard.apply(&snapshot(75., 97.), "10:00:03");
        assert!(!dashboard.is_stale());
        assert_eq!(dashboard.last_error(), None);
        assert_eq!(dashboard.heart_rate().buffer().values(), vec![72., 75.]);
    }
}
