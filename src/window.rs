use std::collections::VecDeque;

pub const WINDOW_CAPACITY: usize = 30;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Sample {
    pub label: String,
    pub value: f64,
}

/// Fixed capacity FIFO of the most recent samples, oldest first.
#[derive(Clone, Debug)]
pub struct TimeSeriesBuffer {
    inner: VecDeque<Sample>,
    capacity: usize,
}

impl TimeSeriesBuffer {
    pub fn new() -> Self {
        Self::with_capacity(WINDOW_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "a time series window needs room for one sample");
        Self {
            inner: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a sample, evicting the oldest one if the window is full.
    /// Returns the evicted sample.
    pub fn push(&mut self, label: impl Into<String>, value: f64) -> Option<Sample> {
        let evicted = if self.inner.len() == self.capacity {
            self.inner.pop_front()
        }
        else {
            None
        };

        self.inner.push_back(Sample {label: label.into(), value});
        evicted
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.inner.iter()
    }

    pub fn labels(&self) -> Vec<String> {
        self.inner.iter().map(|s| s.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.inner.iter().map(|s| s.value).collect()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.inner.back()
    }
}

impl Default for TimeSeriesBuffer {
    fn default() -> Self {
        Self::new()
    }
}
