use chrono::Local;

/// Produces the x axis label for a freshly polled sample.
pub trait Clock: Send {
    fn time_label(&self) -> String;
}

/// Local time of day, the same format the log lines use.
pub struct LocalClock;

impl Clock for LocalClock {
    fn time_label(&self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }
}
