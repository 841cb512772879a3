use crate::window::TimeSeriesBuffer;

/// A live line chart. Owns its sample window and bumps `revision` on every
/// append so renderers know to redraw.
#[derive(Clone, Debug)]
pub struct Chart {
    title: &'static str,
    unit: &'static str,
    buffer: TimeSeriesBuffer,
    revision: u64,
}

impl Chart {
    pub fn new(title: &'static str, unit: &'static str) -> Self {
        Self {
            title,
            unit,
            buffer: TimeSeriesBuffer::new(),
            revision: 0,
        }
    }

    pub fn append(&mut self, label: impl Into<String>, value: f64) {
        self.buffer.push(label, value);
        self.revision += 1;
    }

    pub fn buffer(&self) -> &TimeSeriesBuffer {
        &self.buffer
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn unit(&self) -> &'static str {
        self.unit
    }

    /// One character per sample, scaled between zero and the window maximum
    pub fn sparkline(&self) -> String {
        const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

        // Charts start at zero, matching a y axis that begins at zero
        let max = self.buffer.iter()
            .map(|s| s.value)
            .fold(0., f64::max);

        self.buffer.iter()
            .map(|s| {
                if max <= 0. || !s.value.is_finite() {
                    BARS[0]
                }
                else {
                    let scaled = (s.value.max(0.) / max * (BARS.len() - 1) as f64).round();
                    BARS[scaled as usize]
                }
            })
            .collect()
    }
}
