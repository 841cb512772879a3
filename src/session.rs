use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::source::MetricsSource;
use crate::types::SharedDashboard;

pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);

struct Poller {
    source: Box<dyn MetricsSource>,
    clock: Box<dyn Clock>,
}

impl Poller {
    fn poll_once(&mut self, dashboard: &SharedDashboard) -> Result<()> {
        // The fetch happens without the lock so the web view never waits on the network
        match self.source.fetch() {
            Ok(snapshot) => {
                let label = self.clock.time_label();
                let mut dashboard = dashboard.lock().unwrap();
                if dashboard.is_stale() {
                    info!("Metrics are flowing again after {} failed polls", dashboard.failed_cycles());
                }
                dashboard.apply(&snapshot, &label);
                debug!(
                    "{} hr={} spo2={} room={}C/{}% body={}C",
                    label,
                    snapshot.heart_rate,
                    snapshot.spo2,
                    snapshot.room_temp,
                    snapshot.room_humidity,
                    snapshot.ds_temp
                );
                Ok(())
            }
            Err(e) => {
                warn!("Poll failed, keeping previous values: {}", e);
                dashboard.lock().unwrap().record_failure(e.to_string());
                Err(e)
            }
        }
    }
}

struct Worker {
    stop: Sender<()>,
    handle: JoinHandle<Poller>,
}

/// Owns the recurring poll cycle feeding a dashboard.
///
/// Cycles run one after another on a dedicated thread. A fetch slower than
/// the interval delays the following cycle, so samples are always appended
/// in the order they were fetched.
pub struct Session {
    dashboard: SharedDashboard,
    interval: Duration,
    poller: Option<Poller>,
    worker: Option<Worker>,
}

impl Session {
    pub fn new(
        dashboard: SharedDashboard,
        source: Box<dyn MetricsSource>,
        clock: Box<dyn Clock>,
        interval: Duration,
    ) -> Self {
        Self {
            dashboard,
            interval,
            poller: Some(Poller {source, clock}),
            worker: None,
        }
    }

    pub fn dashboard(&self) -> &SharedDashboard {
        &self.dashboard
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Runs a single cycle on the calling thread. Only allowed while stopped.
    pub fn poll_once(&mut self) -> Result<()> {
        match self.poller.as_mut() {
            Some(poller) => poller.poll_once(&self.dashboard),
            None => Err(Error::SessionRunning),
        }
    }

    pub fn start(&mut self) {
        if self.worker.is_some() {
            return;
        }
        let mut poller = match self.poller.take() {
            Some(poller) => poller,
            None => {
                error!("Poll session lost its source, not starting");
                return;
            }
        };

        let (stop, stop_rx) = channel();
        let dashboard = self.dashboard.clone();
        let interval = self.interval;

        let handle = thread::spawn(move || {
            let mut next = Instant::now() + interval;
            loop {
                let wait = next.saturating_duration_since(Instant::now());
                match stop_rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {}
                    // Either an explicit stop or the session was dropped
                    _ => break,
                }

                // Failures are recorded on the dashboard, the loop carries on
                let _ = poller.poll_once(&dashboard);

                next += interval;
                let now = Instant::now();
                if next < now {
                    // Overran one or more ticks, resume the cadence from here
                    next = now + interval;
                }
            }
            poller
        });

        info!("Polling every {}ms", interval.as_millis());
        self.worker = Some(Worker {stop, handle});
    }

    pub fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop.send(());
            match worker.handle.join() {
                Ok(poller) => self.poller = Some(poller),
                Err(_) => error!("Poll thread panicked"),
            }
            info!("Polling stopped");
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop();
    }
}
