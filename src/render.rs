use std::fmt::Write;

use crate::chart::Chart;
use crate::dashboard::{Dashboard, Readouts};

#[derive(Serialize)]
struct ChartView<'a> {
    title: &'a str,
    unit: &'a str,
    labels: Vec<String>,
    data: Vec<f64>,
    revision: u64,
}

impl<'a> From<&'a Chart> for ChartView<'a> {
    fn from(chart: &'a Chart) -> Self {
        ChartView {
            title: chart.title(),
            unit: chart.unit(),
            labels: chart.buffer().labels(),
            data: chart.buffer().values(),
            revision: chart.revision(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartsView<'a> {
    heart_rate: ChartView<'a>,
    spo2: ChartView<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardView<'a> {
    readouts: &'a Readouts,
    charts: ChartsView<'a>,
    last_update: Option<&'a str>,
    stale: bool,
    last_error: Option<&'a str>,
}

pub fn render_json(dashboard: &Dashboard) -> serde_json::Result<String> {
    let view = DashboardView {
        readouts: dashboard.readouts(),
        charts: ChartsView {
            heart_rate: dashboard.heart_rate().into(),
            spo2: dashboard.spo2().into(),
        },
        last_update: dashboard.last_update(),
        stale: dashboard.is_stale(),
        last_error: dashboard.last_error(),
    };
    serde_json::to_string(&view)
}

fn readout_line(out: &mut String, name: &str, value: &Option<String>) {
    let _ = writeln!(out, "{:<18}{}", name, value.as_ref().map(String::as_str).unwrap_or("--"));
}

fn chart_block(out: &mut String, chart: &Chart) {
    let buffer = chart.buffer();
    let latest = buffer.latest()
        .map(|s| format!("{}", s.value))
        .unwrap_or_else(|| "--".into());

    let _ = writeln!(
        out,
        "{} ({})  {}  [{}/{}]",
        chart.title(),
        chart.unit(),
        latest,
        buffer.len(),
        buffer.capacity()
    );
    if buffer.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}", chart.sparkline());
    if let (Some(first), Some(last)) = (buffer.iter().next(), buffer.latest()) {
        let _ = writeln!(out, "{} .. {}", first.label, last.label);
    }
}

/// Plain text dashboard, one readout per line followed by both charts
pub fn render_text(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    let readouts = dashboard.readouts();

    readout_line(&mut out, "Room temperature", &readouts.room_temp);
    readout_line(&mut out, "Room humidity", &readouts.room_humidity);
    readout_line(&mut out, "Body temperature", &readouts.body_temp);
    out.push('\n');

    chart_block(&mut out, dashboard.heart_rate());
    out.push('\n');
    chart_block(&mut out, dashboard.spo2());

    if dashboard.is_stale() {
        let _ = writeln!(
            out,
            "\nSTALE: {} failed polls, last error: {}",
            dashboard.failed_cycles(),
            dashboard.last_error().unwrap_or("unknown")
        );
    }

    out
}
