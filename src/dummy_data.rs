use crate::error::Result;
use crate::source::MetricsSource;
use crate::types::MetricsSnapshot;

/// Sine wave vitals for running the dashboard without a sensor hub.
pub struct SimulatedSource {
    t: f64,
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self {t: 0.}
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

fn wave(t: f64, period_scale: f64, amplitude: f64, bias: f64) -> f64 {
    (t * period_scale).sin() * amplitude + bias
}

impl MetricsSource for SimulatedSource {
    fn fetch(&mut self) -> Result<MetricsSnapshot> {
        let t = self.t;
        self.t += 0.3;

        Ok(MetricsSnapshot {
            room_temp: wave(t, 0.05, 1.5, 21.),
            room_humidity: wave(t, 0.03, 5., 45.),
            ds_temp: wave(t, 0.1, 0.3, 36.8),
            heart_rate: wave(t, 1., 8., 72.).round(),
            spo2: wave(t, 0.5, 1.5, 97.).round().min(100.),
        })
    }
}
